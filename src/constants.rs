// src/constants.rs
//
// Application-wide constants: input defaults, zoom bounds and the fixed
// locations referenced by the generated page.

/// Default map center latitude (Pavlodar, Kazakhstan).
///
/// Used in: `domain/request.rs`
pub const DEFAULT_LATITUDE: f64 = 52.2873;

/// Default map center longitude (Pavlodar, Kazakhstan).
///
/// Used in: `domain/request.rs`
pub const DEFAULT_LONGITUDE: f64 = 76.9674;

/// Default tile zoom level.
///
/// Used in: `domain/request.rs`
pub const DEFAULT_ZOOM: i64 = 13;

/// Default map container width in pixels.
///
/// Used in: `domain/request.rs`
pub const DEFAULT_WIDTH: i64 = 1000;

/// Default map container height in pixels.
///
/// Used in: `domain/request.rs`
pub const DEFAULT_HEIGHT: i64 = 600;

/// Lowest zoom level accepted after clamping.
///
/// Used in: `domain/request.rs`
pub const MIN_ZOOM: i64 = 1;

/// Highest zoom level accepted after clamping. Matches the `maxZoom` of the
/// OpenStreetMap tile layer in the page template.
///
/// Used in: `domain/request.rs`, `ports/html.rs`
pub const MAX_ZOOM: i64 = 19;

/// File name of the generated page, resolved against the current directory.
///
/// Used in: `lib.rs`
pub const OUTPUT_FILE_NAME: &str = "map.html";

/// Leaflet stylesheet served from the CDN.
///
/// Used in: `ports/html.rs`
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet/dist/leaflet.css";

/// Leaflet script served from the CDN.
///
/// Used in: `ports/html.rs`
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet/dist/leaflet.js";

/// URL template for the public OpenStreetMap tile service.
///
/// Used in: `ports/html.rs`
pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution shown on the tile layer.
///
/// Used in: `ports/html.rs`
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
