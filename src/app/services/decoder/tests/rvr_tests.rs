//! Tests for runway-visual-range extraction

use crate::app::models::RvrEntry;
use crate::app::services::decoder::rvr;

fn entry(runway: &str, visibility_meters: u32) -> RvrEntry {
    RvrEntry {
        runway: runway.to_string(),
        visibility_meters,
    }
}

#[test]
fn test_multiple_runways_in_order() {
    assert_eq!(
        rvr::extract("LFPO 292230Z 02035KT 0600 R26/0400 R26R/0450 Q1000"),
        vec![entry("26", 400), entry("26R", 450)]
    );
}

#[test]
fn test_qualifier_prefixes_are_stripped() {
    assert_eq!(
        rvr::extract("LFPO 292230Z R33/P1500 R16L/M0300"),
        vec![entry("33", 1500), entry("16L", 300)]
    );
}

#[test]
fn test_center_runway_suffix() {
    assert_eq!(rvr::extract("EDDF 292230Z R08C/0700"), vec![entry("08C", 700)]);
}

#[test]
fn test_no_rvr_token_yields_empty_sequence() {
    assert!(rvr::extract("LFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000").is_empty());
    assert!(rvr::extract("").is_empty());
}
