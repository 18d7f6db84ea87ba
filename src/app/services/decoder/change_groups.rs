//! Forecast-change group extraction and base-text derivation.
//!
//! This stage runs before every other field extractor: it captures the
//! TEMPO/BECMG/GRADU/RAPID/INTER/TEND segments and produces the
//! base-observation view of the message with those segments stripped, so
//! later extractors never read a value out of a forecast segment.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::app::models::{ChangeGroups, ChangeKeyword};
use crate::constants::NOSIG_TOKEN;

/// One pattern per keyword: the keyword on a token boundary, a separating
/// space, and everything to end of message
static KEYWORD_PATTERNS: Lazy<Vec<(ChangeKeyword, Regex)>> = Lazy::new(|| {
    ChangeKeyword::ALL
        .iter()
        .map(|keyword| {
            let pattern = format!(r"\b{} (.*)$", keyword.as_str());
            (*keyword, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Extract change groups from the raw text and derive the base view
///
/// Pure function of `raw_text`: running it twice yields the same map both
/// times. Returns the captured groups and the base-observation text with
/// every matched segment removed.
///
/// NOSIG is exclusive with all change keywords: when present, the token is
/// stripped from the base view and no group is captured. Otherwise each
/// keyword is searched independently against the original raw text, so two
/// keywords appearing in one report are each captured in full, including any
/// overlap with each other's trailing content.
pub fn extract(raw_text: &str) -> (ChangeGroups, String) {
    let mut groups = ChangeGroups::new();

    if raw_text.contains(NOSIG_TOKEN) {
        debug!("NOSIG present, suppressing all change groups");
        let base_text = raw_text.replacen(NOSIG_TOKEN, "", 1);
        return (groups, base_text.trim_end().to_string());
    }

    let mut base_text = raw_text.to_string();
    for (keyword, pattern) in KEYWORD_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw_text) {
            debug!("Captured {} group: '{}'", keyword, &captures[1]);
            groups.insert(*keyword, &captures[1]);

            // The segment is re-located against the current base view: an
            // earlier keyword's removal may have consumed it already, or
            // shifted where it sits.
            if let Some(span) = pattern.find(&base_text) {
                let range = span.range();
                base_text.replace_range(range, "");
            }
        }
    }

    (groups, base_text.trim_end().to_string())
}
