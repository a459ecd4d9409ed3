// src/ports/html.rs
use crate::constants::{
    LEAFLET_CSS_URL, LEAFLET_JS_URL, MAX_ZOOM, TILE_ATTRIBUTION, TILE_URL_TEMPLATE,
};
use crate::domain::MapRequest;
use regex::{Captures, Regex};
use std::collections::HashMap;
use tracing::instrument;

/// Leaflet page skeleton. `${name}` sites are filled by `MapPresenter::render`.
pub const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Map (Leaflet)</title>
  <link rel="stylesheet" href="${leaflet_css}" />
  <style>
    html, body { margin: 0; padding: 0; background: #0b0b0f; color: #e6e6f0; font-family: system-ui; }
    #map { height: ${height}px; width: ${width}px; margin: 16px auto; border-radius: 12px; }
    .panel { max-width: ${width}px; margin: 0 auto 12px; padding: 12px 16px; background: #0f0f14; border: 1px solid #202022; border-radius: 12px; }
    .panel h1 { margin: 0 0 8px 0; font-size: 18px; }
    .panel .meta { opacity: 0.85; font-size: 14px; }
  </style>
  <script src="${leaflet_js}"></script>
</head>
<body>
  <div class="panel">
    <h1>Generated map</h1>
    <div class="meta">Center: ${lat}, ${lon} &middot; Zoom: ${zoom} &middot; Size: ${width}&times;${height}</div>
  </div>
  <div id="map"></div>
  <script>
    var map = L.map('map', { zoomControl: true }).setView([${lat}, ${lon}], ${zoom});
    L.tileLayer('${tile_url}', {
        maxZoom: ${max_zoom},
        attribution: '${attribution}'
    }).addTo(map);

    var marker = L.marker([${lat}, ${lon}]).addTo(map);
    marker.bindPopup('Lat: ${lat}<br>Lon: ${lon}<br>Zoom: ${zoom}').openPopup();
  </script>
</body>
</html>
"#;

#[derive(Debug)]
pub struct MapPresenter {
    template: &'static str,
    placeholder_regex: Regex,
}

impl MapPresenter {
    pub fn new() -> Self {
        Self::with_template(MAP_TEMPLATE)
    }

    pub fn with_template(template: &'static str) -> Self {
        Self {
            template,
            // $$ | $name | ${name} | bare $
            placeholder_regex: Regex::new(
                r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})",
            )
            .expect("placeholder pattern is valid"),
        }
    }

    /// Render the page for `request`. Never fails: placeholders without a
    /// value are left as they are.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self, request: &MapRequest) -> String {
        let values = HashMap::from([
            ("lat", format_coordinate(request.latitude)),
            ("lon", format_coordinate(request.longitude)),
            ("zoom", request.zoom.to_string()),
            ("width", request.width.to_string()),
            ("height", request.height.to_string()),
            ("max_zoom", MAX_ZOOM.to_string()),
            ("leaflet_css", LEAFLET_CSS_URL.to_string()),
            ("leaflet_js", LEAFLET_JS_URL.to_string()),
            ("tile_url", TILE_URL_TEMPLATE.to_string()),
            ("attribution", TILE_ATTRIBUTION.to_string()),
        ]);
        self.safe_substitute(&values)
    }

    fn safe_substitute(&self, values: &HashMap<&str, String>) -> String {
        self.placeholder_regex
            .replace_all(self.template, |caps: &Captures| {
                if caps.get(1).is_some() {
                    return "$".to_string();
                }
                let name = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
                match values.get(name) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl Default for MapPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Float text that always carries a fractional part (`52` -> `52.0`).
pub fn format_coordinate(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(52.2873, "52.2873")]
    #[case(76.9674, "76.9674")]
    #[case(52.0, "52.0")]
    #[case(-0.5, "-0.5")]
    fn test_coordinate_formatting(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_coordinate(value), expected);
    }

    #[test]
    fn given_default_request_when_rendering_then_fills_every_site() {
        let presenter = MapPresenter::new();

        let html = presenter.render(&MapRequest::default());

        assert!(html.contains("#map { height: 600px; width: 1000px;"));
        assert!(html.contains(".panel { max-width: 1000px;"));
        assert!(html.contains(".setView([52.2873, 76.9674], 13)"));
        assert!(html.contains("L.marker([52.2873, 76.9674])"));
        assert!(html.contains("'Lat: 52.2873<br>Lon: 76.9674<br>Zoom: 13'"));
        assert!(html.contains("maxZoom: 19,"));
        assert!(!html.contains("${"));
    }

    #[test]
    fn given_request_when_rendering_then_references_cdn_and_tiles() {
        let html = MapPresenter::new().render(&MapRequest::default());

        assert!(html.contains(r#"href="https://unpkg.com/leaflet/dist/leaflet.css""#));
        assert!(html.contains(r#"src="https://unpkg.com/leaflet/dist/leaflet.js""#));
        assert!(html.contains("https://tile.openstreetmap.org/{z}/{x}/{y}.png"));
        assert!(html.contains("&copy; OpenStreetMap contributors"));
    }

    #[test]
    fn given_unknown_placeholder_when_rendering_then_leaves_it_untouched() {
        let presenter = MapPresenter::with_template("${lat} ${unknown} $other ${zoom}");

        let html = presenter.render(&MapRequest::new(1.5, 2.5, 4, 10, 10));

        assert_eq!(html, "1.5 ${unknown} $other 4");
    }

    #[test]
    fn given_escaped_dollar_when_rendering_then_emits_single_dollar() {
        let presenter = MapPresenter::with_template("cost: $$5, zoom $zoom, broken ${ and $");

        let html = presenter.render(&MapRequest::default());

        assert_eq!(html, "cost: $5, zoom 13, broken ${ and $");
    }

    #[test]
    fn given_template_without_placeholders_when_rendering_then_returns_it_verbatim() {
        let presenter = MapPresenter::with_template("<p>static</p>");

        assert_eq!(presenter.render(&MapRequest::default()), "<p>static</p>");
    }

    #[test]
    fn given_same_request_when_rendering_twice_then_output_is_identical() {
        let presenter = MapPresenter::new();
        let request = MapRequest::new(-33.8688, 151.2093, 11, 800, 400);

        assert_eq!(presenter.render(&request), presenter.render(&request));
    }
}
