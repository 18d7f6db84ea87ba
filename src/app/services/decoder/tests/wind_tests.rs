//! Tests for wind-group extraction

use crate::app::models::{Wind, WindDirection, WindVariation};
use crate::app::services::decoder::wind;

#[test]
fn test_variable_direction_wind() {
    assert_eq!(
        wind::extract("LFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000"),
        Some(Wind {
            direction: WindDirection::Variable,
            speed: 3,
            gust: None,
            variation: None,
        })
    );
}

#[test]
fn test_plain_wind_in_knots() {
    assert_eq!(
        wind::extract("LFLY 292200Z AUTO 22005KT CAVOK 06/M00 Q1000"),
        Some(Wind {
            direction: WindDirection::Degrees(220),
            speed: 5,
            gust: None,
            variation: None,
        })
    );
}

#[test]
fn test_gusting_wind_with_variation() {
    assert_eq!(
        wind::extract("LFLY 292200Z AUTO 22010G25KT 040V210 CAVOK 06/M00 Q1000"),
        Some(Wind {
            direction: WindDirection::Degrees(220),
            speed: 10,
            gust: Some(25),
            variation: Some(WindVariation {
                from_degrees: 40,
                to_degrees: 210,
            }),
        })
    );
}

#[test]
fn test_unavailable_wind_is_absent_not_garbage() {
    // All-slash token means the sensor data is missing
    assert_eq!(
        wind::extract("LFLY 292200Z AUTO /////KT CAVOK 06/M00 Q1000"),
        None
    );
    assert_eq!(
        wind::extract("LFLY 292200Z AUTO ////// KT CAVOK 06/M00 Q1000"),
        None
    );
}

#[test]
fn test_meters_per_second_fallback() {
    assert_eq!(
        wind::extract("UUEE 292200Z 22005MPS 9999"),
        Some(Wind {
            direction: WindDirection::Degrees(220),
            speed: 5,
            gust: None,
            variation: None,
        })
    );
}

#[test]
fn test_due_north_360_is_valid() {
    let wind = wind::extract("LFLY 292200Z 36010KT CAVOK").unwrap();
    assert_eq!(wind.direction, WindDirection::Degrees(360));
}

#[test]
fn test_direction_beyond_360_is_rejected() {
    assert_eq!(wind::extract("LFLY 292200Z 99010KT CAVOK"), None);
}

#[test]
fn test_no_wind_token_is_absent() {
    assert_eq!(wind::extract("LFLY 292200Z CAVOK 06/M00 Q1000"), None);
}
