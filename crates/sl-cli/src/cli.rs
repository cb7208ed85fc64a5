use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use sl_common::{
    api::CandidateRecord,
    config::{load_config_from_env, ShortlistConfig},
    matching::Shortlister,
    pool::{sample_candidates, CandidatePool},
};

use crate::{console::ConsoleSession, error::CliError, input, render};

#[derive(Debug, Parser)]
#[command(
    name = "skill-shortlist",
    about = "Rank candidates against weighted skill requirements"
)]
pub struct Cli {
    /// Defaults to the interactive console
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Menu-driven console session
    Interactive {
        /// Start with the sample candidates loaded
        #[arg(long)]
        samples: bool,
    },
    /// Shortlist candidates from JSON files
    Rank(RankArgs),
    /// Print the sample candidates as JSON
    Samples,
}

#[derive(Debug, clap::Args)]
pub struct RankArgs {
    /// JSON array of candidate records
    #[arg(long)]
    pub candidates: PathBuf,

    /// JSON array of requirement records
    #[arg(long)]
    pub requirements: PathBuf,

    /// Shortlist size (falls back to SL_DEFAULT_TOP_N)
    #[arg(long)]
    pub top: Option<usize>,

    /// Output format: text | json
    #[arg(long, env = "SL_OUTPUT_FORMAT", default_value = "text", value_enum)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the shortlisting config from the environment and dispatch `cli`.
pub fn run<R: BufRead, W: Write>(cli: Cli, input: R, output: &mut W) -> Result<(), CliError> {
    let config = load_config_from_env().map_err(CliError::Config)?;
    run_with_config(cli, config, input, output)
}

pub fn run_with_config<R: BufRead, W: Write>(
    cli: Cli,
    config: ShortlistConfig,
    input: R,
    output: &mut W,
) -> Result<(), CliError> {
    match cli.command.unwrap_or(Command::Interactive { samples: false }) {
        Command::Interactive { samples } => {
            let mut pool = CandidatePool::new();
            if samples {
                pool.add_sample_candidates().map_err(CliError::Samples)?;
            }
            let mut session = ConsoleSession::new(input, &mut *output, config).with_pool(pool);
            session.run()
        }
        Command::Rank(args) => rank(&args, config, output),
        Command::Samples => {
            let samples = sample_candidates().map_err(CliError::Samples)?;
            let records: Vec<CandidateRecord> = samples.iter().map(CandidateRecord::from).collect();
            serde_json::to_writer_pretty(&mut *output, &records)?;
            writeln!(output)?;
            Ok(())
        }
    }
}

fn rank<W: Write>(
    args: &RankArgs,
    config: ShortlistConfig,
    output: &mut W,
) -> Result<(), CliError> {
    let pool = input::load_candidates(&args.candidates)?;
    let requirements = input::load_requirements(&args.requirements)?;
    let shortlister = Shortlister::new(config);

    let shortlist = shortlister.shortlist(pool.as_slice(), &requirements, args.top);
    info!(
        pool_size = pool.len(),
        shortlisted = shortlist.len(),
        format = ?args.format,
        "rank finished"
    );

    match args.format {
        OutputFormat::Text => {
            render::write_shortlist(output, &shortlist)?;
            render::write_requirements(output, &requirements)?;
        }
        OutputFormat::Json => render::write_shortlist_json(output, &shortlist)?,
    }
    Ok(())
}
