//! Per-output renderer settings.
//!
//! The record mirrors the original controller's persisted `/config.json`
//! (same field names), so existing configuration files keep working. The
//! renderer reads the config on every frame and never mutates it; the host
//! replaces it wholesale when the user changes settings.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Serialized config fits comfortably in this buffer.
const JSON_CAPACITY: usize = 192;

/// Channel group size per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    /// Three channels per pixel.
    Rgb,
    /// Four channels per pixel, trailing white byte.
    Rgbw,
}

impl ChannelLayout {
    pub const fn channels_per_pixel(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgbw => 4,
        }
    }
}

/// Errors from config (de)serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a config.
    Parse,
    /// The config did not fit the output buffer.
    Encode,
}

/// Settings for one renderer output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// DMX universe this output listens to.
    pub universe: u16,
    /// Starting byte index into the channel payload.
    pub offset: usize,
    /// Channel group size (`leds` in the persisted form: 3 or 4).
    #[serde(rename = "leds")]
    pub layout: ChannelLayout,
    /// Active algorithm.
    pub mode: Mode,
    /// Divisor applied to the per-frame speed channel of the time-varying
    /// modes. Larger values slow every animation down.
    pub speed: u8,
    /// Flip the spatial direction of positional modes.
    pub reverse: bool,
    /// Number of repeated pattern cycles across the array.
    pub split: u8,
    /// Interpret incoming color triples as HSV instead of RGB.
    pub hsv: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            universe: 1,
            offset: 0,
            layout: ChannelLayout::Rgbw,
            mode: Mode::Solid,
            speed: 8,
            reverse: false,
            split: 1,
            hsv: false,
        }
    }
}

impl RenderConfig {
    /// Parse a config from its JSON form.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        serde_json_core::from_slice(bytes)
            .map(|(config, _)| config)
            .map_err(|_| ConfigError::Parse)
    }

    /// Serialize the config to its JSON form.
    pub fn to_json(&self) -> Result<String<JSON_CAPACITY>, ConfigError> {
        serde_json_core::to_string(self).map_err(|_| ConfigError::Encode)
    }
}
