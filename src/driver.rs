//! LED driver abstraction layer.
//!
//! Implement this trait to push frames to real hardware (WS2812/SK6812 over
//! RMT or SPI, a network proxy, a test capture). The rendering side stays
//! hardware-agnostic.

use crate::color::Rgbw;

/// Abstract LED strip driver.
pub trait LedDriver<const N: usize> {
    /// Write one complete frame to the strip.
    fn write(&mut self, frame: &[Rgbw; N]);
}
