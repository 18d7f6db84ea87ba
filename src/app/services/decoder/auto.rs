//! Automated-station flag extraction.

use crate::constants::AUTO_TOKEN;

/// True when the report carries the AUTO marker (automated observation)
///
/// Reads the raw text; no mutation, no dependency on any other stage.
pub fn extract(raw_text: &str) -> bool {
    raw_text.contains(AUTO_TOKEN)
}
