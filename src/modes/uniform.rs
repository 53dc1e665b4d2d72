//! Modes 1 and 2: uniform fills.
//!
//! Integer math throughout, truncating division by 255, so an intensity of
//! 255 reproduces the input channels exactly.

use crate::color::{ChannelReader, Rgbw, blend_pixels, scale_pixel};
use crate::config::RenderConfig;

/// Mode 1: one color and an intensity channel, applied to every pixel.
pub(crate) fn solid<const N: usize>(
    config: &RenderConfig,
    data: &[u8],
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let color = reader.color(config.layout, config.hsv)?;
    let intensity = reader.byte()?;
    frame.fill(scale_pixel(color, intensity));
    Some(())
}

/// Mode 2: cross-fade of two colors by a balance channel, then intensity.
pub(crate) fn two_color_mix<const N: usize>(
    config: &RenderConfig,
    data: &[u8],
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let color1 = reader.color(config.layout, config.hsv)?;
    let color2 = reader.color(config.layout, config.hsv)?;
    let amount = reader.byte()?;
    let intensity = reader.byte()?;
    frame.fill(scale_pixel(blend_pixels(color1, color2, amount), intensity));
    Some(())
}
