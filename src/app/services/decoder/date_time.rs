//! Observation day/time extraction from the 6-digit-plus-`Z` token.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::app::models::ObservationTime;

static DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{6}Z").unwrap());

/// Extract the observation time from the raw text
///
/// The token encodes day of month, hour, and minute as three 2-digit
/// fields. Exactly one token must be present: with zero or several matches
/// the report is ambiguous and the field is absent rather than guessed at.
pub fn extract(raw_text: &str) -> Option<ObservationTime> {
    let mut matches = DATE_TIME_PATTERN.find_iter(raw_text);

    let token = matches.next()?;
    if matches.next().is_some() {
        debug!("Multiple date-time tokens found, treating as ambiguous");
        return None;
    }

    let digits = &token.as_str()[..6];
    Some(ObservationTime {
        day: digits[0..2].to_string(),
        hour: digits[2..4].to_string(),
        minute: digits[4..6].to_string(),
    })
}
