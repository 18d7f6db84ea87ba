//! Tests for observation-time extraction

use super::LFLY_REPORT;
use crate::app::models::ObservationTime;
use crate::app::services::decoder::date_time;

#[test]
fn test_single_token_is_split_into_components() {
    assert_eq!(
        date_time::extract(LFLY_REPORT),
        Some(ObservationTime {
            day: "29".to_string(),
            hour: "22".to_string(),
            minute: "00".to_string(),
        })
    );
}

#[test]
fn test_missing_token_yields_absent() {
    assert_eq!(
        date_time::extract("LFLY AUTO VRB03KT CAVOK 06/M00 Q1000 NOSIG"),
        None
    );
}

#[test]
fn test_multiple_tokens_are_ambiguous() {
    // Two candidate tokens: do not guess which is authoritative
    assert_eq!(
        date_time::extract("LFLY 292200Z 292215Z VRB03KT CAVOK"),
        None
    );
}
