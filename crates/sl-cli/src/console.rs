use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{info, warn};

use sl_common::{
    config::ShortlistConfig,
    matching::{RequirementSet, Shortlister},
    pool::CandidatePool,
    Candidate, JobRequirement,
};

use crate::{error::CliError, render};

const DONE: &str = "done";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddCandidate,
    ViewCandidates,
    Shortlist,
    AddSamples,
    Exit,
}

impl MenuChoice {
    fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::AddCandidate),
            2 => Some(Self::ViewCandidates),
            3 => Some(Self::Shortlist),
            4 => Some(Self::AddSamples),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// 対話型の候補者登録・ショートリストセッション
///
/// The session owns its candidate pool; reading from any `BufRead` and writing
/// to any `Write` keeps it drivable from tests.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    pool: CandidatePool,
    shortlister: Shortlister,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, config: ShortlistConfig) -> Self {
        Self {
            input,
            output,
            pool: CandidatePool::new(),
            shortlister: Shortlister::new(config),
        }
    }

    pub fn with_pool(mut self, pool: CandidatePool) -> Self {
        self.pool = pool;
        self
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        match self.menu_loop() {
            Err(CliError::InputClosed) => {
                info!(candidates = self.pool.len(), "console input closed");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "=== SKILL-BASED CANDIDATE SHORTLISTING SYSTEM ===")?;
        writeln!(
            self.output,
            "Shortlist candidates against weighted skill requirements."
        )?;

        loop {
            writeln!(self.output, "\n=== MAIN MENU ===")?;
            writeln!(self.output, "1. Add New Candidate")?;
            writeln!(self.output, "2. View All Candidates")?;
            writeln!(self.output, "3. Shortlist Candidates")?;
            writeln!(self.output, "4. Add Sample Candidates")?;
            writeln!(self.output, "5. Exit")?;

            let number: u32 = self.read_parsed(
                "Enter your choice (1-5): ",
                "Invalid choice! Please enter a number between 1 and 5.",
            )?;

            match MenuChoice::from_number(number) {
                Some(MenuChoice::AddCandidate) => self.add_candidate()?,
                Some(MenuChoice::ViewCandidates) => {
                    render::write_candidate_list(&mut self.output, &self.pool)?
                }
                Some(MenuChoice::Shortlist) => {
                    if self.pool.is_empty() {
                        writeln!(
                            self.output,
                            "No candidates in the system! Please add candidates first."
                        )?;
                    } else {
                        self.perform_shortlisting()?;
                    }
                }
                Some(MenuChoice::AddSamples) => self.add_samples()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for using the Shortlisting System!")?;
                    return Ok(());
                }
                None => writeln!(
                    self.output,
                    "Invalid choice! Please enter a number between 1 and 5."
                )?,
            }
        }
    }

    fn add_candidate(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "\n=== ADD NEW CANDIDATE ===")?;
        let name = self.prompt("Enter candidate's name: ")?;
        let email = self.prompt("Enter candidate's email: ")?;
        let experience: u32 = self.read_parsed(
            "Enter years of experience: ",
            "Experience must be a whole number of years (0 or more).",
        )?;

        let mut candidate = Candidate::new(name, email, experience);

        writeln!(self.output, "Enter skills (type '{DONE}' when finished):")?;
        loop {
            let skill = self.prompt(&format!("Skill name (or '{DONE}'): "))?;
            if skill.eq_ignore_ascii_case(DONE) {
                break;
            }
            if skill.is_empty() {
                writeln!(self.output, "Skill name cannot be empty.")?;
                continue;
            }

            let level: i64 = self.read_parsed(
                "Skill level (1-5): ",
                "Invalid level! Please enter 1-5.",
            )?;
            match candidate.add_skill(&skill, level) {
                Ok(()) => writeln!(self.output, "Added: {skill} (Level {level})")?,
                Err(err) => {
                    warn!(skill = %skill, level, error = %err, "rejected candidate skill");
                    writeln!(self.output, "Invalid level! Please enter 1-5.")?;
                }
            }
        }

        info!(
            candidate = %candidate.name,
            skills = candidate.skills.len(),
            "candidate added"
        );
        self.pool.add(candidate);
        writeln!(self.output, "Candidate added successfully!")?;
        Ok(())
    }

    fn read_requirements(&mut self) -> Result<RequirementSet, CliError> {
        let range = self.shortlister.config().weight_range;
        writeln!(self.output, "\n=== DEFINE JOB REQUIREMENTS ===")?;
        writeln!(
            self.output,
            "Enter job requirements (type '{DONE}' when finished):"
        )?;

        let mut requirements = RequirementSet::new();
        loop {
            let skill = self.prompt(&format!("Required skill name (or '{DONE}'): "))?;
            if skill.eq_ignore_ascii_case(DONE) {
                break;
            }
            if skill.is_empty() {
                writeln!(self.output, "Skill name cannot be empty.")?;
                continue;
            }

            let level: i64 =
                self.read_parsed("Required level (1-5): ", "Please enter a whole number.")?;
            let weight: f64 = self.read_parsed(
                &format!("Importance weight ({}-{}): ", range.min(), range.max()),
                "Please enter a number.",
            )?;

            let accepted = range
                .check(weight)
                .and_then(|()| JobRequirement::new(&skill, level, weight));
            match accepted {
                Ok(requirement) => {
                    writeln!(self.output, "Added requirement: {requirement}")?;
                    requirements.push(requirement);
                }
                Err(err) => {
                    warn!(skill = %skill, level, weight, error = %err, "rejected requirement");
                    writeln!(
                        self.output,
                        "Invalid input! Level should be 1-5, weight should be {}-{}",
                        range.min(),
                        range.max()
                    )?;
                }
            }
        }

        writeln!(self.output, "Total weight: {:.1}", requirements.total_weight())?;
        Ok(requirements)
    }

    fn perform_shortlisting(&mut self) -> Result<(), CliError> {
        let requirements = self.read_requirements()?;
        if requirements.is_empty() {
            writeln!(self.output, "No job requirements defined!")?;
            return Ok(());
        }

        let top_n: usize = self.read_parsed(
            "How many candidates do you want to shortlist? ",
            "Please enter a whole number (0 or more).",
        )?;

        let shortlist = self
            .shortlister
            .shortlist(self.pool.as_slice(), &requirements, Some(top_n));
        render::write_shortlist(&mut self.output, &shortlist)?;
        render::write_requirements(&mut self.output, &requirements)?;
        Ok(())
    }

    fn add_samples(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Adding sample candidates...")?;
        let added = self
            .pool
            .add_sample_candidates()
            .map_err(CliError::Samples)?;
        info!(added, pool_size = self.pool.len(), "sample candidates added");
        writeln!(self.output, "Sample candidates added successfully!")?;
        Ok(())
    }

    /// Print `label`, then read one trimmed line.
    fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until the line parses as `T`.
    fn read_parsed<T: FromStr>(
        &mut self,
        label: &str,
        retry_message: &str,
    ) -> Result<T, CliError> {
        loop {
            let raw = self.prompt(label)?;
            match raw.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "{retry_message}")?,
            }
        }
    }
}
