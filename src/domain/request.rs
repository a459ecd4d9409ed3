// src/domain/request.rs
use crate::constants::{
    DEFAULT_HEIGHT, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_WIDTH, DEFAULT_ZOOM, MAX_ZOOM,
    MIN_ZOOM,
};
use serde::{Deserialize, Serialize};

/// Resolved parameters of one generated map page.
///
/// `MapRequest::new` clamps `zoom` into `MIN_ZOOM..=MAX_ZOOM`; width and
/// height are taken as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: i64,
    pub width: i64,
    pub height: i64,
}

impl MapRequest {
    pub fn new(latitude: f64, longitude: f64, zoom: i64, width: i64, height: i64) -> Self {
        Self {
            latitude,
            longitude,
            zoom: clamp_zoom(zoom),
            width,
            height,
        }
    }
}

impl Default for MapRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_LATITUDE,
            DEFAULT_LONGITUDE,
            DEFAULT_ZOOM,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
        )
    }
}

pub fn clamp_zoom(zoom: i64) -> i64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Value used for a field when the user submits a blank line.
///
/// `None` means the field has no default and blank input is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDefaults {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zoom: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            latitude: Some(DEFAULT_LATITUDE),
            longitude: Some(DEFAULT_LONGITUDE),
            zoom: Some(DEFAULT_ZOOM),
            width: Some(DEFAULT_WIDTH),
            height: Some(DEFAULT_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-5, 1)]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(13, 13)]
    #[case(19, 19)]
    #[case(20, 19)]
    #[case(25, 19)]
    fn test_zoom_clamping(#[case] input: i64, #[case] expected: i64) {
        let request = MapRequest::new(0.0, 0.0, input, 100, 100);
        assert_eq!(request.zoom, expected);
    }

    #[test]
    fn given_default_request_when_created_then_uses_documented_values() {
        let request = MapRequest::default();

        assert_eq!(request.latitude, 52.2873);
        assert_eq!(request.longitude, 76.9674);
        assert_eq!(request.zoom, 13);
        assert_eq!(request.width, 1000);
        assert_eq!(request.height, 600);
    }

    #[test]
    fn given_non_positive_dimensions_when_creating_then_keeps_them_unchanged() {
        let request = MapRequest::new(0.0, 0.0, 5, 0, -20);

        assert_eq!(request.width, 0);
        assert_eq!(request.height, -20);
    }

    #[test]
    fn given_out_of_range_coordinates_when_creating_then_keeps_them_unchanged() {
        let request = MapRequest::new(123.5, -400.25, 5, 10, 10);

        assert_eq!(request.latitude, 123.5);
        assert_eq!(request.longitude, -400.25);
    }

    #[test]
    fn given_request_when_serializing_then_produces_flat_json() {
        let json = serde_json::to_value(MapRequest::default()).unwrap();

        assert_eq!(json["latitude"], 52.2873);
        assert_eq!(json["zoom"], 13);
        assert_eq!(json["height"], 600);
    }
}
