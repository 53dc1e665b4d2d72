//! Pixel color types, HSV conversion, and channel-group parsing.

use smart_leds::{RGB8, RGBW, White};

use crate::config::ChannelLayout;
use crate::math::{balance, wrap360};

/// One pixel. RGB-only configurations leave the white channel at zero.
pub type Rgbw = RGBW<u8>;

/// All channels off.
pub const BLACK: Rgbw = Rgbw {
    r: 0,
    g: 0,
    b: 0,
    a: White(0),
};

/// Build a pixel from raw channel values.
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// Widen a three-channel color to a pixel with the white channel off.
pub const fn from_rgb(c: RGB8) -> Rgbw {
    rgbw(c.r, c.g, c.b, 0)
}

/// Convert HSV to RGB with the hexagonal-sector algorithm.
///
/// `h` is in degrees (any finite value, wrapped to `[0, 360)`), `s` and `v`
/// in `[0, 1]`. Channels come back in `0..=255`.
#[allow(clippy::many_single_char_names)]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> RGB8 {
    let h = wrap360(h) / 60.0;
    #[allow(clippy::cast_possible_truncation)]
    let sector = h as i32;
    #[allow(clippy::cast_precision_loss)]
    let f = h - sector as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    RGB8 {
        r: unit_to_byte(r),
        g: unit_to_byte(g),
        b: unit_to_byte(b),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(x: f32) -> u8 {
    (x * 255.0) as u8
}

/// Scale a channel by `intensity`, truncating division by 255.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale8(value: u8, intensity: u8) -> u8 {
    ((u16::from(value) * u16::from(intensity)) / 255) as u8
}

/// Blend two channels. `amount` 0 gives `a`, 255 gives `b` exactly.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn blend8(a: u8, b: u8, amount: u8) -> u8 {
    ((u16::from(a) * u16::from(255 - amount) + u16::from(b) * u16::from(amount)) / 255) as u8
}

/// Scale every channel of a pixel by `intensity`.
pub fn scale_pixel(c: Rgbw, intensity: u8) -> Rgbw {
    rgbw(
        scale8(c.r, intensity),
        scale8(c.g, intensity),
        scale8(c.b, intensity),
        scale8(c.a.0, intensity),
    )
}

/// Blend two pixels channel-wise. `amount` 0 gives `a`, 255 gives `b`.
pub fn blend_pixels(a: Rgbw, b: Rgbw, amount: u8) -> Rgbw {
    rgbw(
        blend8(a.r, b.r, amount),
        blend8(a.g, b.g, amount),
        blend8(a.b, b.b, amount),
        blend8(a.a.0, b.a.0, amount),
    )
}

/// Weighted mix of `foreground` over `background`, scaled by `intensity`.
///
/// `weight` 1 shows the foreground, 0 the background; `intensity` is in
/// `[0, 1]`. Channels truncate on the final conversion.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mix_scaled(weight: f32, background: Rgbw, foreground: Rgbw, intensity: f32) -> Rgbw {
    let channel =
        |bg: u8, fg: u8| (intensity * balance(weight, f32::from(bg), f32::from(fg))) as u8;
    rgbw(
        channel(background.r, foreground.r),
        channel(background.g, foreground.g),
        channel(background.b, foreground.b),
        channel(background.a.0, foreground.a.0),
    )
}

/// Sequential reader over one universe's channel payload.
///
/// Positions are absolute byte indices; construction starts at the
/// configured channel offset. Every read returns `None` past the end of the
/// payload, which callers turn into a skipped frame before any pixel is
/// written.
pub(crate) struct ChannelReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ChannelReader<'a> {
    pub(crate) fn new(data: &'a [u8], offset: usize) -> Self {
        Self { data, pos: offset }
    }

    pub(crate) fn byte(&mut self) -> Option<u8> {
        let value = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(value)
    }

    /// Read a three-byte color group, HSV-decoded when `hsv` is set.
    pub(crate) fn rgb(&mut self, hsv: bool) -> Option<RGB8> {
        let a = self.byte()?;
        let b = self.byte()?;
        let c = self.byte()?;
        Some(if hsv {
            decode_hsv_group(a, b, c)
        } else {
            RGB8 { r: a, g: b, b: c }
        })
    }

    /// Read a color group sized by the channel layout (3 or 4 bytes).
    ///
    /// The white byte is never HSV-interpreted.
    pub(crate) fn color(&mut self, layout: ChannelLayout, hsv: bool) -> Option<Rgbw> {
        let c = self.rgb(hsv)?;
        let w = match layout {
            ChannelLayout::Rgb => 0,
            ChannelLayout::Rgbw => self.byte()?,
        };
        Some(rgbw(c.r, c.g, c.b, w))
    }
}

/// Interpret a (hue, saturation, value) byte triple.
///
/// The hue byte spans the circle in 256 steps; saturation and value map
/// 0..=255 onto `[0, 1]`.
pub(crate) fn decode_hsv_group(h: u8, s: u8, v: u8) -> RGB8 {
    hsv_to_rgb(
        f32::from(h) * 360.0 / 256.0,
        f32::from(s) / 255.0,
        f32::from(v) / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RGB8 { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), RGB8 { r: 0, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), RGB8 { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn hsv_zero_saturation_is_grey() {
        let c = hsv_to_rgb(123.0, 0.0, 0.5);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn hsv_wraps_hue() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-240.0, 1.0, 1.0), hsv_to_rgb(120.0, 1.0, 1.0));
    }

    #[test]
    fn scale8_truncates() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(255, 255), 255);
        assert_eq!(scale8(10, 0), 0);
    }

    #[test]
    fn blend8_endpoints() {
        assert_eq!(blend8(10, 200, 0), 10);
        assert_eq!(blend8(10, 200, 255), 200);
    }

    #[test]
    fn reader_stops_at_end() {
        let data = [1u8, 2, 3];
        let mut reader = ChannelReader::new(&data, 1);
        assert_eq!(reader.byte(), Some(2));
        assert_eq!(reader.byte(), Some(3));
        assert_eq!(reader.byte(), None);
    }

    #[test]
    fn reader_color_needs_full_group() {
        let data = [10u8, 20, 30];
        let mut reader = ChannelReader::new(&data, 0);
        assert_eq!(reader.color(ChannelLayout::Rgbw, false), None);

        let mut reader = ChannelReader::new(&data, 0);
        assert_eq!(
            reader.color(ChannelLayout::Rgb, false),
            Some(rgbw(10, 20, 30, 0))
        );
    }
}
