use std::io;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

use sl_cli::Cli;
use sl_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};

const APP_NAME: &str = "skill-shortlist";

fn main() -> ExitCode {
    dotenv().ok();
    init_tracing_subscriber(APP_NAME);
    install_tracing_panic_hook(APP_NAME);

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match sl_cli::run(cli, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "skill-shortlist failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
