//! Read side: stored results are displayed and filtered, never recomputed.

pub mod analytics;
pub mod detail;
pub mod queue;

pub use analytics::{Analytics, KindCount, QualityCounts, StatusTotals, SubjectCount, Throughput};
pub use detail::ItemDetail;
pub use queue::{QualityFlag, QueueFilter, QueueRow};
