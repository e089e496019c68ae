//! Pattern-based numeric claim extraction.
//!
//! A claim is a number (optionally a range such as `60-100` or `60 to 100`)
//! followed by `%` or a unit from a closed, extendable set. In
//! [`ClaimMode::BareNumbers`] the unit is optional.

use std::sync::LazyLock;

use medreview_core::config::{ChecksConfig, ClaimMode};
use medreview_core::constants::DEFAULT_CLAIM_UNITS;
use medreview_core::errors::{ReviewError, ReviewResult};
use regex::Regex;

/// Integer with optional thousands separators, then an optional fraction.
const NUMBER: &str = r"(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?";

/// Extractor with the built-in units in unit-required mode.
static DEFAULT_EXTRACTOR: LazyLock<ClaimExtractor> = LazyLock::new(|| {
    ClaimExtractor::new(ClaimMode::UnitRequired, &[]).unwrap()
});

/// Extract claims with the default unit set and unit-required mode.
pub fn extract_claims(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Compiled claim pattern for one unit set and mode.
#[derive(Debug, Clone)]
pub struct ClaimExtractor {
    pattern: Regex,
    mode: ClaimMode,
}

impl ClaimExtractor {
    /// Build an extractor recognising the built-in units plus `extra_units`.
    pub fn new(mode: ClaimMode, extra_units: &[String]) -> ReviewResult<Self> {
        let mut units: Vec<String> = DEFAULT_CLAIM_UNITS
            .iter()
            .map(|u| u.to_string())
            .chain(extra_units.iter().map(|u| u.trim().to_lowercase()))
            .filter(|u| !u.is_empty())
            .collect();
        // Longest first so alternation prefers "mmhg" over "mm".
        units.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        units.dedup();

        let unit_alternation = units
            .iter()
            .map(|u| {
                u.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect::<Vec<_>>()
            .join("|");

        let range = format!(r"(?:\s*[-–]\s*{NUMBER}|\s+to\s+{NUMBER})?");
        let unit = format!(r"(?:\s*%|\s*(?:{unit_alternation})\b)");
        let source = match mode {
            ClaimMode::UnitRequired => format!(r"(?i)\b{NUMBER}{range}{unit}"),
            ClaimMode::BareNumbers => format!(r"(?i)\b{NUMBER}{range}(?:{unit}|\b)"),
        };

        let pattern = Regex::new(&source).map_err(|e| ReviewError::InvalidPattern {
            pattern: source.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern, mode })
    }

    pub fn from_config(config: &ChecksConfig) -> ReviewResult<Self> {
        Self::new(config.claim_mode, &config.extra_units)
    }

    pub fn mode(&self) -> ClaimMode {
        self.mode
    }

    /// Claims in order of first occurrence, duplicates preserved.
    ///
    /// Matches that are a fragment of a larger malformed numeric token
    /// (`3.5.2 mg`, `1,00,0 mg`) are dropped rather than partially reported.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .filter(|m| is_whole_token(text, m.start(), m.end()))
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }
}

/// Whether the match `[start, end)` is not glued to surrounding digits by a
/// `.` or `,`.
fn is_whole_token(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().rev().take(2).collect::<Vec<_>>();
    if let [sep, digit] = before.as_slice() {
        if matches!(sep, '.' | ',') && digit.is_ascii_digit() {
            return false;
        }
    }
    let after = text[end..].chars().take(2).collect::<Vec<_>>();
    if let [sep, digit] = after.as_slice() {
        if matches!(sep, '.' | ',') && digit.is_ascii_digit() {
            return false;
        }
    }
    true
}
