//! Runway visual range extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::app::models::RvrEntry;

/// `R<runway><L/C/R?>/<M/P?><meters>` runway visual range token
static RVR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"R(\d{2}[LCR]?)/[MP]?(\d{4})").unwrap());

/// Extract every runway visual range entry from the base text
///
/// Several runways may report RVR in one message; entries are returned in
/// order of appearance. The runway designator keeps its L/C/R suffix; the
/// M ("less than") / P ("more than") qualifier prefix is stripped from the
/// visibility value. No match yields an empty sequence.
pub fn extract(base_text: &str) -> Vec<RvrEntry> {
    RVR_PATTERN
        .captures_iter(base_text)
        .filter_map(|captures| {
            let runway = captures.get(1)?.as_str().to_string();
            let visibility_meters = captures.get(2)?.as_str().parse().ok()?;
            debug!("RVR entry: runway {runway}, {visibility_meters}m");
            Some(RvrEntry {
                runway,
                visibility_meters,
            })
        })
        .collect()
}
