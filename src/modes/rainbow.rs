//! Mode 12: rotating rainbow.
//!
//! Hue follows the pixel's angular position around the strip (scaled by
//! `split`, optionally reversed) minus the rotating phase; saturation and
//! value are constant per frame.

use embassy_time::Duration;

use crate::color::{ChannelReader, Rgbw, from_rgb, hsv_to_rgb};
use crate::config::RenderConfig;
use crate::math::wrap360;
use crate::phase::PhaseTracker;

#[allow(clippy::cast_precision_loss)]
pub(crate) fn rainbow<const N: usize>(
    config: &RenderConfig,
    tracker: &mut PhaseTracker,
    data: &[u8],
    now: Duration,
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let saturation = f32::from(reader.byte()?) / 255.0;
    let value = f32::from(reader.byte()?) / 255.0;
    let speed = f32::from(reader.byte()?) / f32::from(config.speed.max(1));

    let phase = tracker.advance(speed, now);
    let flip = if config.reverse { -1.0 } else { 1.0 };
    let split = f32::from(config.split);
    for (i, pixel) in frame.iter_mut().enumerate() {
        let hue = wrap360((360.0 * flip * i as f32 / N as f32) * split - phase);
        *pixel = from_rgb(hsv_to_rgb(hue, saturation, value));
    }
    Some(())
}
