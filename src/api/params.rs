//! Color parameter parsing for API paths and queries.

use chroma_core::Rgb;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Parse a color given as `RRGGBB`, `#RRGGBB`, `r,g,b` or `rgb(r, g, b)`.
///
/// Hex input is not trimmed; channel lists may have spaces around each value.
pub fn parse_color(input: &str) -> Result<Rgb, ApiError> {
    let invalid = |reason: String| ApiError::InvalidColor {
        input: input.to_string(),
        reason,
    };

    let channels = input
        .trim()
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
        .or_else(|| input.contains(',').then_some(input));

    let Some(channels) = channels else {
        return input.parse::<Rgb>().map_err(|e| invalid(e.to_string()));
    };

    let parts: Vec<&str> = channels.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(invalid(format!("expected 3 channels, got {}", parts.len())));
    };
    // u8::from_str takes a leading '+', so check the digits first
    let channel = |value: &str| {
        value
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| value.parse::<u8>().ok())
            .flatten()
            .ok_or_else(|| invalid(format!("channel {value:?} is not in 0..=255")))
    };

    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

/// JSON body carrying one color
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct RgbBody {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<RgbBody> for Rgb {
    fn from(body: RgbBody) -> Self {
        Rgb::new(body.r, body.g, body.b)
    }
}
