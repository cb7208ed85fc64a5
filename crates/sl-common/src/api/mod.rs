pub mod candidate_record;
pub mod requirement_record;
pub mod shortlist_response;

pub use candidate_record::CandidateRecord;
pub use requirement_record::RequirementRecord;
pub use shortlist_response::{RequirementBreakdown, ShortlistEntry};
