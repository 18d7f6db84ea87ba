//! Report holder: the raw METAR text and its derived base-observation view.

/// A raw METAR report awaiting decoding
///
/// Owns the station identifier, an optional server-reported timestamp, and
/// two views of the message text: `raw_text`, immutable once set, and
/// `base_text`, which starts equal to `raw_text` and is overwritten exactly
/// once by the pipeline with the change-group extractor's output. The base
/// view is always a reduction of the raw view; no stage ever adds content.
#[derive(Debug, Clone)]
pub struct Report {
    station: String,
    reported_at: Option<String>,
    raw_text: String,
    base_text: String,
}

impl Report {
    /// Create a report from manually supplied text
    pub fn new(station: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        Self {
            station: station.into(),
            reported_at: None,
            base_text: raw_text.clone(),
            raw_text,
        }
    }

    /// Create a report carrying the server-reported timestamp of a fetch
    pub fn with_reported_at(
        station: impl Into<String>,
        reported_at: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        let mut report = Self::new(station, raw_text);
        report.reported_at = Some(reported_at.into());
        report
    }

    /// Station identifier the report was filed under
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Server-reported timestamp, when the report came from a fetch
    pub fn reported_at(&self) -> Option<&str> {
        self.reported_at.as_deref()
    }

    /// The original report text, always unmodified
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The base-observation view (change groups stripped once the pipeline
    /// has run its first stage)
    pub fn base_text(&self) -> &str {
        &self.base_text
    }

    /// Install the base view derived by the change-group extractor
    ///
    /// Called exactly once per decode, before any extractor reads the base
    /// text.
    pub(crate) fn set_base_text(&mut self, base_text: String) {
        debug_assert!(base_text.len() <= self.raw_text.len());
        self.base_text = base_text;
    }

    /// Consume the holder, returning its parts for aggregation
    pub(crate) fn into_parts(self) -> (String, Option<String>, String) {
        (self.station, self.reported_at, self.raw_text)
    }
}
