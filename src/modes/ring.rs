//! Modes 7 and 8: wrapping segment with ramped edges.
//!
//! The strip is treated as a closed circle of 360 degrees; the segment is a
//! band centered on the position channel and wraps across the array edges.
//! Mode 7 draws over black, mode 8 over a second color.

use crate::color::{BLACK, ChannelReader, Rgbw, mix_scaled};
use crate::config::RenderConfig;
use crate::math::{band_weight, wrap180};

/// Mode 7: single-color wrapping segment.
pub(crate) fn ring<const N: usize>(
    config: &RenderConfig,
    data: &[u8],
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let color = reader.color(config.layout, config.hsv)?;
    fill(config, &mut reader, frame, color, BLACK)
}

/// Mode 8: wrapping segment of one color over a background of another.
pub(crate) fn ring_mix<const N: usize>(
    config: &RenderConfig,
    data: &[u8],
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let color = reader.color(config.layout, config.hsv)?;
    let background = reader.color(config.layout, config.hsv)?;
    fill(config, &mut reader, frame, color, background)
}

#[allow(clippy::cast_precision_loss)]
fn fill<const N: usize>(
    config: &RenderConfig,
    reader: &mut ChannelReader<'_>,
    frame: &mut [Rgbw; N],
    color: Rgbw,
    background: Rgbw,
) -> Option<()> {
    let intensity = f32::from(reader.byte()?) / 255.0;
    let position = f32::from(reader.byte()?) * 360.0 / 255.0;
    let width = f32::from(reader.byte()?) * 360.0 / 255.0;
    let ramp = f32::from(reader.byte()?) * 360.0 / 255.0;

    let flip = if config.reverse { -1.0 } else { 1.0 };
    let split = f32::from(config.split);
    for (i, pixel) in frame.iter_mut().enumerate() {
        let angle = wrap180((360.0 * flip * i as f32 / N as f32) * split - position).abs();
        let weight = band_weight(angle, width, ramp);
        *pixel = mix_scaled(weight, background, color, intensity);
    }
    Some(())
}
