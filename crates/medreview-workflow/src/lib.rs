//! # medreview-workflow
//!
//! The collaborators around the auto-checker: intake and edit handlers that
//! persist an item and recompute its checks, reviewer status transitions,
//! delete, and the read side (item detail, review queue, analytics) that only
//! ever reads stored results.

pub mod edit;
pub mod intake;
pub mod pool;
pub mod query;
pub mod service;
pub mod transition;

pub use edit::ItemPatch;
pub use intake::NewItem;
pub use pool::RepositoryPool;
pub use query::{Analytics, ItemDetail, QualityFlag, QueueFilter, QueueRow};
pub use service::ReviewService;
pub use transition::ReviewAction;
