use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use sl_common::{
    api::{CandidateRecord, RequirementRecord},
    matching::RequirementSet,
    pool::CandidatePool,
    Candidate, JobRequirement, ValidationError,
};

use crate::error::CliError;

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn convert_all<R, T>(path: &Path, records: Vec<R>) -> Result<Vec<T>, CliError>
where
    T: TryFrom<R, Error = ValidationError>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            T::try_from(record).map_err(|source| CliError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

/// JSON 配列の候補者ファイルを読み込む
pub fn load_candidates(path: &Path) -> Result<CandidatePool, CliError> {
    let records: Vec<CandidateRecord> = read_records(path)?;
    let candidates: Vec<Candidate> = convert_all(path, records)?;
    info!(path = %path.display(), count = candidates.len(), "loaded candidates");
    Ok(CandidatePool::from(candidates))
}

/// JSON 配列の要件ファイルを読み込む（重みの上限チェックはしない）
pub fn load_requirements(path: &Path) -> Result<RequirementSet, CliError> {
    let records: Vec<RequirementRecord> = read_records(path)?;
    let requirements: Vec<JobRequirement> = convert_all(path, records)?;
    info!(path = %path.display(), count = requirements.len(), "loaded requirements");
    Ok(RequirementSet::from(requirements))
}
