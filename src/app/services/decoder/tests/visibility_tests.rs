//! Tests for visibility-group extraction

use crate::app::models::Visibility;
use crate::app::services::decoder::visibility;

#[test]
fn test_cavok_after_wind_unit() {
    assert_eq!(
        visibility::extract("LFLY 292200Z AUTO VRB03KT CAVOK 06/M00 Q1000", false),
        Some(Visibility {
            distance_meters: 9999,
            direction: None,
        })
    );
}

#[test]
fn test_cavok_after_variation() {
    assert_eq!(
        visibility::extract("LFLY 292200Z AUTO 22010G25KT 040V210 CAVOK 06/M00", true),
        Some(Visibility {
            distance_meters: 9999,
            direction: None,
        })
    );
}

#[test]
fn test_distance_in_meters() {
    assert_eq!(
        visibility::extract("LFLY 292200Z AUTO VRB03KT 5200 06/M00 Q1000", false),
        Some(Visibility {
            distance_meters: 5200,
            direction: None,
        })
    );
}

#[test]
fn test_distance_with_compass_sector_after_variation() {
    assert_eq!(
        visibility::extract("LFLY 292200Z AUTO VRB03KT 350V040 5200NE 06/M00", true),
        Some(Visibility {
            distance_meters: 5200,
            direction: Some("NE".to_string()),
        })
    );
}

#[test]
fn test_no_visibility_token_is_absent() {
    // "06/M00" and "Q1000" must not be mistaken for a visibility reading
    assert_eq!(
        visibility::extract("LFLY 292200Z AUTO VRB03KT 06/M00 Q1000", false),
        None
    );
}

#[test]
fn test_high_but_not_cavok_distance() {
    assert_eq!(
        visibility::extract("LFLY 292200Z AUTO VRB03KT 9950 06/M00 Q1000", false),
        Some(Visibility {
            distance_meters: 9950,
            direction: None,
        })
    );
}

#[test]
fn test_variation_anchor_requires_token_after_variation() {
    assert_eq!(
        visibility::extract("LFLY 292200Z 22010KT 040V210 06/M00 Q1000", true),
        None
    );
}
