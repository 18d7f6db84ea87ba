//! Pipeline ordering and aggregation into the decoded report.

use tracing::debug;

use super::{auto, change_groups, date_time, report::Report, rvr, visibility, wind};
use crate::app::models::DecodedReport;

/// Decode a report through the full extractor pipeline
///
/// Stage order is a hard constraint: change-group extraction runs first and
/// installs the base-observation view into the holder; wind, visibility, and
/// RVR read that base view, while the auto flag and the observation time
/// read the raw text. Visibility additionally receives whether the wind
/// stage found a variation token, which selects its anchor pattern.
///
/// Never fails: a field the message does not carry is decoded as absent.
pub fn decode(mut report: Report) -> DecodedReport {
    debug!("Decoding report for station {}", report.station());

    let (change_groups, base_text) = change_groups::extract(report.raw_text());
    report.set_base_text(base_text);

    let auto = auto::extract(report.raw_text());
    let observation_time = date_time::extract(report.raw_text());

    let wind = wind::extract(report.base_text());
    let variation_present = wind.as_ref().is_some_and(|w| w.variation.is_some());
    let visibility = visibility::extract(report.base_text(), variation_present);
    let rvr = rvr::extract(report.base_text());

    let (station, reported_at, raw_text) = report.into_parts();
    DecodedReport {
        station,
        reported_at,
        raw_text,
        auto,
        observation_time,
        wind,
        visibility,
        rvr,
        change_groups,
    }
}
