//! Mode 10: rotating two-color band.
//!
//! A band of the configured width spins around the strip at the speed
//! channel's rate; inside the band the first color shows, outside the
//! second. Colors are three-byte groups regardless of the channel layout;
//! the white channel stays off.

use embassy_time::Duration;

use crate::color::{ChannelReader, Rgbw, from_rgb, mix_scaled};
use crate::config::RenderConfig;
use crate::math::{band_weight, wrap180};
use crate::phase::PhaseTracker;

#[allow(clippy::cast_precision_loss)]
pub(crate) fn spinner<const N: usize>(
    config: &RenderConfig,
    tracker: &mut PhaseTracker,
    data: &[u8],
    now: Duration,
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let band = from_rgb(reader.rgb(config.hsv)?);
    let background = from_rgb(reader.rgb(config.hsv)?);
    let intensity = f32::from(reader.byte()?) / 255.0;
    let speed = f32::from(reader.byte()?) / f32::from(config.speed.max(1));
    let width = f32::from(reader.byte()?) * 360.0 / 255.0;
    let ramp = f32::from(reader.byte()?) * 360.0 / 255.0;

    let phase = tracker.advance(speed, now);
    let flip = if config.reverse { -1.0 } else { 1.0 };
    let split = f32::from(config.split);
    // endpoints of the strip coincide on the circle
    let span = N.saturating_sub(1).max(1) as f32;
    for (i, pixel) in frame.iter_mut().enumerate() {
        let angle = wrap180((360.0 * flip * i as f32 / span) * split - phase).abs();
        let weight = band_weight(angle, width, ramp);
        *pixel = mix_scaled(weight, background, band, intensity);
    }
    Some(())
}
