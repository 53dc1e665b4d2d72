//! The mode catalog.
//!
//! Wire protocols and the original firmware identify modes by number; the
//! renderer dispatches on this enum so every algorithm is matched
//! exhaustively. Numbers 9 and 11 are reserved slots with no algorithm and
//! map to `None`.

use serde::{Deserialize, Serialize};

/// Rendering algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Mode 0: direct per-pixel channel mapping, multi-universe aware.
    Passthrough,
    /// Mode 1: single uniform color with an intensity channel.
    Solid,
    /// Mode 2: uniform cross-fade between two colors.
    TwoColorMix,
    /// Mode 3: uniform blink between a color and black.
    Blink,
    /// Mode 4: uniform blink between two colors.
    BlinkMix,
    /// Mode 5: non-wrapping single-color segment.
    Segment,
    /// Mode 6: non-wrapping segment over a colored background.
    SegmentMix,
    /// Mode 7: wrapping segment with ramped edges over black.
    Ring,
    /// Mode 8: wrapping segment with ramped edges over a colored background.
    RingMix,
    /// Mode 10: rotating two-color band.
    Spinner,
    /// Mode 12: rotating rainbow.
    Rainbow,
}

impl Mode {
    /// Map a raw mode number onto an algorithm.
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Passthrough,
            1 => Self::Solid,
            2 => Self::TwoColorMix,
            3 => Self::Blink,
            4 => Self::BlinkMix,
            5 => Self::Segment,
            6 => Self::SegmentMix,
            7 => Self::Ring,
            8 => Self::RingMix,
            10 => Self::Spinner,
            12 => Self::Rainbow,
            _ => return None,
        })
    }

    /// The protocol mode number of this algorithm.
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Passthrough => 0,
            Self::Solid => 1,
            Self::TwoColorMix => 2,
            Self::Blink => 3,
            Self::BlinkMix => 4,
            Self::Segment => 5,
            Self::SegmentMix => 6,
            Self::Ring => 7,
            Self::RingMix => 8,
            Self::Spinner => 10,
            Self::Rainbow => 12,
        }
    }

    /// Whether the algorithm advances the shared time phase.
    pub const fn is_time_varying(self) -> bool {
        matches!(
            self,
            Self::Blink | Self::BlinkMix | Self::Spinner | Self::Rainbow
        )
    }
}
