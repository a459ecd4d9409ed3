// src/ports/prompt.rs
use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::domain::{InputError, MapRequest, RequestDefaults};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Sequential console prompts for the five map parameters.
///
/// Generic over reader and writer so tests can script the answers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for all five fields in order: latitude, longitude, zoom, width, height.
    ///
    /// Stops at the first invalid answer; zoom is clamped on construction.
    pub fn collect_request(&mut self, defaults: &RequestDefaults) -> Result<MapRequest, InputError> {
        let latitude = self.ask_float("latitude", "Latitude", defaults.latitude)?;
        let longitude = self.ask_float("longitude", "Longitude", defaults.longitude)?;
        let zoom = self.ask_zoom("Zoom (1-19)", defaults.zoom)?;
        let width = self.ask_int("width", "Map width in pixels", defaults.width)?;
        let height = self.ask_int("height", "Map height in pixels", defaults.height)?;

        let request = MapRequest::new(latitude, longitude, zoom, width, height);
        if request.zoom != zoom {
            debug!(requested = zoom, clamped = request.zoom, "Zoom clamped");
        }
        Ok(request)
    }

    pub fn ask_float(
        &mut self,
        field: &'static str,
        label: &str,
        default: Option<f64>,
    ) -> Result<f64, InputError> {
        let raw = self.read_answer(field, &prompt_text(label, default))?;
        parse_float(field, &raw, default)
    }

    pub fn ask_int(
        &mut self,
        field: &'static str,
        label: &str,
        default: Option<i64>,
    ) -> Result<i64, InputError> {
        let raw = self.read_answer(field, &prompt_text(label, default))?;
        parse_int(field, &raw, default)
    }

    pub fn ask_zoom(&mut self, label: &str, default: Option<i64>) -> Result<i64, InputError> {
        let raw = self.read_answer("zoom", &prompt_text(label, default))?;
        parse_zoom(&raw, default)
    }

    fn read_answer(&mut self, field: &'static str, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput { field });
        }
        Ok(line.trim().to_string())
    }
}

fn prompt_text(label: &str, default: Option<impl Display>) -> String {
    match default {
        Some(value) => format!("{label} [Enter = {value}]: "),
        None => format!("{label}: "),
    }
}

/// Parse a floating point answer, accepting `,` as decimal separator.
#[instrument(level = "trace")]
pub fn parse_float(field: &'static str, raw: &str, default: Option<f64>) -> Result<f64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return default.ok_or(InputError::EmptyValue { field });
    }

    let normalized = raw.replace(',', ".");
    let value = normalized
        .parse::<f64>()
        .map_err(|source| InputError::InvalidFloat {
            field,
            value: raw.to_string(),
            source,
        })?;

    // inf/NaN would end up as bare identifiers in the page script
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

#[instrument(level = "trace")]
pub fn parse_int(field: &'static str, raw: &str, default: Option<i64>) -> Result<i64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return default.ok_or(InputError::EmptyValue { field });
    }

    raw.parse::<i64>().map_err(|source| InputError::InvalidInteger {
        field,
        value: raw.to_string(),
        source,
    })
}

/// Parse a zoom answer. Integers beyond the `i64` range saturate to the zoom
/// bounds, so every out-of-range answer ends up clamped.
#[instrument(level = "trace")]
pub fn parse_zoom(raw: &str, default: Option<i64>) -> Result<i64, InputError> {
    match parse_int("zoom", raw, default) {
        Err(InputError::InvalidInteger { source, .. })
            if *source.kind() == IntErrorKind::PosOverflow =>
        {
            Ok(MAX_ZOOM)
        }
        Err(InputError::InvalidInteger { source, .. })
            if *source.kind() == IntErrorKind::NegOverflow =>
        {
            Ok(MIN_ZOOM)
        }
        other => other,
    }
}
