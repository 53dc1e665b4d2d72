//! Mode 0: direct per-pixel channel mapping.
//!
//! Pixel `i` of the configured universe reads its channel group at
//! `i * channels_per_pixel + offset`. Frames for neighbouring universes map
//! onto the same strip 512 pixels apart, so one long strip can span several
//! universes. Out-of-range pixel or channel indices skip that element only.

use crate::color::{ChannelReader, Rgbw};
use crate::config::RenderConfig;

#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub(crate) fn render<const N: usize>(
    config: &RenderConfig,
    universe: u16,
    data: &[u8],
    frame: &mut [Rgbw; N],
) {
    let cpp = config.layout.channels_per_pixel();
    let base = (i32::from(universe) - i32::from(config.universe)) * 512;
    for i in 0..data.len() / cpp {
        let pixel = i as i32 + base;
        if pixel < 0 || pixel >= N as i32 {
            continue;
        }
        let channel = i * cpp + config.offset;
        if channel + cpp > data.len() {
            continue;
        }
        let mut reader = ChannelReader::new(data, channel);
        if let Some(color) = reader.color(config.layout, config.hsv) {
            frame[pixel as usize] = color;
        }
    }
}
