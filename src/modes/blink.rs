//! Modes 3 and 4: uniform temporal blinking.
//!
//! The committed phase sweeps `[-180, 180)` once per cycle; its absolute
//! value is the distance from the "on" center, compared against the duty
//! window with ramped edges. Mode 3 blinks against black, mode 4 against a
//! second color.

use embassy_time::Duration;

use crate::color::{BLACK, ChannelReader, Rgbw, mix_scaled};
use crate::config::RenderConfig;
use crate::math::{band_weight, wrap180};
use crate::phase::PhaseTracker;

/// Mode 3: blink a single color on and off.
pub(crate) fn blink<const N: usize>(
    config: &RenderConfig,
    tracker: &mut PhaseTracker,
    data: &[u8],
    now: Duration,
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let on = reader.color(config.layout, config.hsv)?;
    envelope(config, tracker, &mut reader, now, frame, on, BLACK)
}

/// Mode 4: blink between two colors.
pub(crate) fn blink_mix<const N: usize>(
    config: &RenderConfig,
    tracker: &mut PhaseTracker,
    data: &[u8],
    now: Duration,
    frame: &mut [Rgbw; N],
) -> Option<()> {
    let mut reader = ChannelReader::new(data, config.offset);
    let on = reader.color(config.layout, config.hsv)?;
    let off = reader.color(config.layout, config.hsv)?;
    envelope(config, tracker, &mut reader, now, frame, on, off)
}

fn envelope<const N: usize>(
    config: &RenderConfig,
    tracker: &mut PhaseTracker,
    reader: &mut ChannelReader<'_>,
    now: Duration,
    frame: &mut [Rgbw; N],
    on: Rgbw,
    off: Rgbw,
) -> Option<()> {
    let intensity = f32::from(reader.byte()?) / 255.0;
    let speed = f32::from(reader.byte()?) / f32::from(config.speed.max(1));
    let ramp = f32::from(reader.byte()?) * 360.0 / 255.0;
    let duty = f32::from(reader.byte()?) * 360.0 / 255.0;

    let phase = wrap180(tracker.advance(speed, now)).abs();
    let weight = band_weight(phase, duty, ramp);
    frame.fill(mix_scaled(weight, off, on, intensity));
    Some(())
}
