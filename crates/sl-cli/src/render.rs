use std::io::{self, Write};

use sl_common::{
    api::ShortlistEntry,
    matching::{RequirementSet, ScoredCandidate},
    pool::CandidatePool,
};

use crate::error::CliError;

pub fn write_candidate_list<W: Write>(out: &mut W, pool: &CandidatePool) -> io::Result<()> {
    writeln!(out, "\n=== ALL CANDIDATES ===")?;
    if pool.is_empty() {
        writeln!(
            out,
            "No candidates in the system. Add candidates or load the sample candidates first."
        )?;
        return Ok(());
    }

    for (idx, candidate) in pool.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, candidate)?;
    }
    Ok(())
}

pub fn write_shortlist<W: Write>(
    out: &mut W,
    shortlist: &[ScoredCandidate<'_>],
) -> io::Result<()> {
    writeln!(out, "\n=== SHORTLISTED CANDIDATES ===")?;
    if shortlist.is_empty() {
        writeln!(out, "No candidates match the requirements.")?;
        return Ok(());
    }

    writeln!(out, "Rank | Score | Candidate Details")?;
    writeln!(out, "-----|-------|------------------")?;
    for scored in shortlist {
        writeln!(
            out,
            "{:4} | {:5.1}% | {}",
            scored.rank,
            scored.score(),
            scored.candidate
        )?;
    }
    Ok(())
}

pub fn write_requirements<W: Write>(
    out: &mut W,
    requirements: &RequirementSet,
) -> io::Result<()> {
    writeln!(out, "\n=== JOB REQUIREMENTS (for reference) ===")?;
    write!(out, "{requirements}")
}

pub fn write_shortlist_json<W: Write>(
    out: &mut W,
    shortlist: &[ScoredCandidate<'_>],
) -> Result<(), CliError> {
    let entries: Vec<ShortlistEntry> = shortlist.iter().map(ShortlistEntry::from).collect();
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}
