mod candidate_source;
mod checker;
mod repository;

pub use candidate_source::ICandidateSource;
pub use checker::IAutoChecker;
pub use repository::IItemRepository;
