/// medreview system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest value a heuristic 0–5 score can take.
pub const MIN_SCORE: u8 = 0;

/// Highest value a heuristic 0–5 score can take.
pub const MAX_SCORE: u8 = 5;

/// Starting point for groundedness and faithfulness scoring.
pub const BASE_SCORE: u8 = 3;

/// Default similarity at or above which two same-kind items are flagged as duplicates.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.85;

/// Continuous coverage ratio below which an item counts as low coverage.
pub const LOW_COVERAGE_RATIO: f64 = 0.8;

/// Continuous coverage ratio at or above which an item counts as medium coverage.
pub const MEDIUM_COVERAGE_RATIO: f64 = 0.5;

/// Default number of rows returned by a queue listing.
pub const DEFAULT_QUEUE_LIMIT: usize = 50;

/// Number of subjects reported in the analytics top-subjects list.
pub const TOP_SUBJECTS: usize = 6;

/// Trailing window, in days, used for throughput analytics.
pub const THROUGHPUT_WINDOW_DAYS: i64 = 7;

/// Units recognised after a number when extracting numeric claims.
///
/// Matching is case-insensitive; multi-word and longer units are listed
/// before their prefixes so alternation prefers the longest unit.
pub const DEFAULT_CLAIM_UNITS: &[&str] = &[
    "beats per minute",
    "breaths per minute",
    "percent",
    "mmhg",
    "mmol",
    "meq",
    "mcg",
    "mg",
    "kg",
    "g",
    "dl",
    "ml",
    "l",
    "cm",
    "mm",
    "m",
    "bpm",
    "seconds",
    "second",
    "minutes",
    "minute",
    "hours",
    "hour",
    "days",
    "day",
    "weeks",
    "week",
    "months",
    "month",
    "years",
    "year",
];
