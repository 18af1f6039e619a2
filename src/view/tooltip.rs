use serde::Serialize;

use crate::types::CityFeature;

/// Hover label anchored at a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub text: String,
    pub lng_lat: [f64; 2],
}

/// Shift `feature_lng` by whole turns so it lands within 180° of `hovered_lng`.
///
/// When the map is zoomed out far enough to repeat the world, this anchors the
/// tooltip on the copy under the pointer instead of the canonical one.
pub fn unwrap_longitude(feature_lng: f64, hovered_lng: f64) -> f64 {
    if !feature_lng.is_finite() || !hovered_lng.is_finite() { return feature_lng }

    let turns = ((hovered_lng - feature_lng) / 360.0).round();
    feature_lng + turns * 360.0
}

pub fn tooltip_for(feature: &CityFeature, hovered_lng: f64) -> Tooltip {
    let [lng, lat] = feature.lng_lat();
    Tooltip {
        text: feature.label(),
        lng_lat: [unwrap_longitude(lng, hovered_lng), lat],
    }
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::{tooltip_for, unwrap_longitude};
    use crate::types::{CityAttributes, CityFeature};

    #[test]
    fn unwraps_across_the_antimeridian() {
        let lng = unwrap_longitude(-170.0, 170.0);
        assert_eq!(lng, 190.0);
        assert!((lng - 170.0).abs() <= 180.0);

        assert_eq!(unwrap_longitude(170.0, -170.0), -190.0);
    }

    #[test]
    fn leaves_nearby_longitudes_alone() {
        assert_eq!(unwrap_longitude(-97.7, -98.0), -97.7);
        assert!((unwrap_longitude(-97.7, 262.0) - 262.3).abs() < 1e-9);
    }

    #[test]
    fn result_is_within_half_a_turn_of_the_pointer() {
        for (feature, hovered) in [(-170.0, 170.0), (10.0, 725.0), (-97.7, -1000.3), (179.9, -179.9)] {
            let lng = unwrap_longitude(feature, hovered);
            assert!((lng - hovered).abs() <= 180.0 + 1e-9, "{feature} near {hovered} gave {lng}");
        }
    }

    #[test]
    fn huge_longitudes_stay_finite() {
        assert!(unwrap_longitude(1e17, 0.0).is_finite());
        assert!(unwrap_longitude(-97.7, 1e17).is_finite());
    }

    #[test]
    fn non_finite_input_is_returned_unchanged() {
        assert_eq!(unwrap_longitude(-97.7, f64::NAN), -97.7);
        assert!(unwrap_longitude(f64::INFINITY, 0.0).is_infinite());
    }

    #[test]
    fn tooltip_text_is_name_and_state() {
        let feature = CityFeature {
            id: 0,
            coordinates: Point::new(-155.09, 19.72),
            attributes: CityAttributes {
                name: "Hilo".to_string(),
                state: "HI".to_string(),
                ..CityAttributes::default()
            },
        };
        let tooltip = tooltip_for(&feature, 204.0);
        assert_eq!(tooltip.text, "Hilo, HI");
        assert!((tooltip.lng_lat[0] - 204.91).abs() < 1e-9);
        assert_eq!(tooltip.lng_lat[1], 19.72);
    }
}
