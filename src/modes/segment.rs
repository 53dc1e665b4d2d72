//! Modes 5 and 6: non-wrapping segment.
//!
//! Width and position are byte-scaled into pixel units; the position maps
//! across the array minus the segment, so the segment always stays within
//! the edges. Mode 5 draws over black, mode 6 over a second color.

use crate::color::{BLACK, ChannelReader, Rgbw, scale_pixel};
use crate::config::RenderConfig;

/// Mode 5: single-color segment over black.
pub(crate) fn segment<const N: usize>(
    config: &RenderConfig,
    data: &[u8],
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let color = reader.color(config.layout, config.hsv)?;
    fill(config, &mut reader, frame, color, BLACK)
}

/// Mode 6: segment of one color over a background of another.
pub(crate) fn segment_mix<const N: usize>(
    config: &RenderConfig,
    data: &[u8],
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let color = reader.color(config.layout, config.hsv)?;
    let background = reader.color(config.layout, config.hsv)?;
    fill(config, &mut reader, frame, color, background)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn fill<const N: usize>(
    config: &RenderConfig,
    reader: &mut ChannelReader<'_>,
    frame: &mut [Rgbw; N],
    color: Rgbw,
    background: Rgbw,
) -> Option<()> {
    let intensity = reader.byte()?;
    let position = reader.byte()?;
    let width = reader.byte()?;

    let len = ((f32::from(width) / 255.0) * N as f32 + 0.5) as usize;
    let len = len.min(N);
    let span = N - len;
    let mut start = ((f32::from(position) / 255.0) * span as f32 + 0.5) as usize;
    start = start.min(span);
    if config.reverse {
        start = span - start;
    }

    let inside = scale_pixel(color, intensity);
    let outside = scale_pixel(background, intensity);
    for (i, pixel) in frame.iter_mut().enumerate() {
        *pixel = if i >= start && i < start + len {
            inside
        } else {
            outside
        };
    }
    Some(())
}
