//! Text normalization and string similarity shared by the sub-checks.

mod normalize;
mod similarity;

pub use normalize::normalize;
pub use similarity::similarity;
