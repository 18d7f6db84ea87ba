//! End-to-end tests for the METAR decoding pipeline through the public API

use metar_decoder::{
    ChangeKeyword, DecodedReport, Error, Report, WindDirection, decode,
};

const LFLY_REPORT: &str = "LFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000 NOSIG";

#[test]
fn test_decode_automated_cavok_report() {
    let decoded = decode(Report::new("LFLY", LFLY_REPORT));

    assert!(decoded.auto);
    let time = decoded.require_observation_time().unwrap();
    assert_eq!(time.day, "29");
    assert_eq!(time.hour, "22");
    assert_eq!(time.minute, "00");

    let wind = decoded.require_wind().unwrap();
    assert_eq!(wind.direction, WindDirection::Variable);
    assert_eq!(wind.speed, 3);

    let visibility = decoded.require_visibility().unwrap();
    assert_eq!(visibility.distance_meters, 9999);
    assert!(visibility.direction.is_none());

    assert!(decoded.change_groups.is_empty());
}

#[test]
fn test_decode_low_visibility_report_with_rvr() {
    let raw = "LFPO 292230Z 02035G47KT 340V080 0600 R26/0400 R27R/M0350 Q1000 BECMG 0800";
    let decoded = decode(Report::new("LFPO", raw));

    let wind = decoded.require_wind().unwrap();
    assert_eq!(wind.direction, WindDirection::Degrees(20));
    assert_eq!(wind.gust, Some(47));
    assert!(wind.variation.is_some());

    assert_eq!(decoded.require_visibility().unwrap().distance_meters, 600);

    let runways: Vec<&str> = decoded.rvr.iter().map(|e| e.runway.as_str()).collect();
    assert_eq!(runways, vec!["26", "27R"]);

    assert_eq!(decoded.change_groups.get(ChangeKeyword::Becmg), Some("0800"));
}

#[test]
fn test_required_fields_surface_named_failures() {
    // Wind data unavailable: the field is absent, and only a caller that
    // requires it turns that into an error
    let decoded = decode(Report::new(
        "LFLY",
        "LFLY 292200Z AUTO /////KT CAVOK 06/M00 Q1000 NOSIG",
    ));

    assert!(decoded.wind.is_none());
    match decoded.require_wind() {
        Err(Error::FieldMissing { field: "wind" }) => {}
        other => panic!("expected FieldMissing for wind, got {other:?}"),
    }

    // The rest of the report still decodes
    assert!(decoded.require_observation_time().is_ok());
    assert!(decoded.require_visibility().is_ok());
}

#[test]
fn test_ambiguous_observation_time_is_absent() {
    let decoded = decode(Report::new("LFLY", "LFLY 292200Z 292215Z VRB03KT CAVOK"));

    assert!(decoded.observation_time.is_none());
    assert!(matches!(
        decoded.require_observation_time(),
        Err(Error::FieldMissing { .. })
    ));
}

#[test]
fn test_decoded_report_json_round_trip() {
    let raw = "LFPO 292230Z 02035G47KT 340V080 0600 R26/0400 TEMPO 3000";
    let decoded = decode(Report::with_reported_at("LFPO", "2021/03/29 22:30", raw));

    let json = serde_json::to_string(&decoded).unwrap();
    let restored: DecodedReport = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, restored);
}

#[test]
fn test_decoding_is_independent_per_report() {
    // No shared state: interleaved decodes of different reports do not
    // influence each other
    let first = decode(Report::new("LFPG", "LFPG 292200Z 22005KT 0800 TEMPO 3000"));
    let second = decode(Report::new("LFLY", LFLY_REPORT));
    let third = decode(Report::new("LFPG", "LFPG 292200Z 22005KT 0800 TEMPO 3000"));

    assert_eq!(first, third);
    assert_ne!(first.station, second.station);
    assert_eq!(first.require_visibility().unwrap().distance_meters, 800);
}
