pub mod requirements;
pub mod scoring;
pub mod shortlist;

pub use requirements::RequirementSet;
pub use scoring::{evaluate, score, MatchScore, MatchStatus, RequirementMatch};
pub use shortlist::{shortlist, ScoredCandidate, Shortlister};
