mod autocheck_result;
mod bloom;
mod candidate;
mod competency;
mod conflict;
mod coverage;
mod degradation_event;

pub use autocheck_result::{AutoCheckResult, CheckKind};
pub use bloom::BloomLevel;
pub use candidate::Candidate;
pub use competency::CompetencyDomain;
pub use conflict::NumericConflict;
pub use coverage::CoverageLevel;
pub use degradation_event::DegradationEvent;
