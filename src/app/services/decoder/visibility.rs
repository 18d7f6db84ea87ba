//! Visibility group extraction.
//!
//! Visibility sits immediately after the wind group in a METAR message, so
//! the anchor depends on how the wind group ended: after the `DDDVDDD`
//! variation token when one was present, after the wind unit suffix
//! otherwise. The wind extractor's variation result is therefore a real
//! input to this stage, passed explicitly by the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::app::models::Visibility;
use crate::constants::{CAVOK_TOKEN, CAVOK_VISIBILITY_METERS};

/// Visibility token following the wind-variation group
static AFTER_VARIATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3}V\d{3} (CAVOK|\d{4}[A-Z]{0,2})").unwrap());

/// Visibility token following the wind unit suffix
static AFTER_UNIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:KT|MPS) (CAVOK|\d{4}[A-Z]{0,2})").unwrap());

/// Extract the visibility group from the base text
///
/// `variation_present` states whether the wind extractor found a variation
/// token and selects the anchor pattern. The token is either the literal
/// CAVOK, reported as 9999 meters with no sector, or a 4-digit distance in
/// meters with an optional uppercase compass suffix.
pub fn extract(base_text: &str, variation_present: bool) -> Option<Visibility> {
    let pattern = if variation_present {
        &AFTER_VARIATION_PATTERN
    } else {
        &AFTER_UNIT_PATTERN
    };

    let token = pattern.captures(base_text)?.get(1)?.as_str().to_string();
    debug!("Visibility token: '{token}'");

    if token == CAVOK_TOKEN {
        return Some(Visibility {
            distance_meters: CAVOK_VISIBILITY_METERS,
            direction: None,
        });
    }

    let distance_meters = token[0..4].parse().ok()?;
    let suffix = &token[4..];
    Some(Visibility {
        distance_meters,
        direction: (!suffix.is_empty()).then(|| suffix.to_string()),
    })
}
