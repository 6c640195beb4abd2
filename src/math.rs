//! Color math: hex/RGB packing and RGB/HSL and RGB/HSB conversion.
//! HSL hue is in degrees with saturation and lightness in percent; HSB
//! components are fractions in 0.0–1.0.

use crate::color::{HslColor, RgbColor};

/// Offset that forces `rgb_to_hex` to emit six digits before the leading one
/// is dropped.
const HEX_WIDTH_OFFSET: u32 = 1 << 24;

/// Lenient hex decoder.
///
/// Strips one leading `#` and parses the rest as a base-16 integer. Only the
/// low 24 bits are used, so `"F"` and `"FFFFFFFF"` both decode without error.
/// Use [`HexColor::parse`](crate::HexColor::parse) for strict validation.
pub fn hex_to_rgb(hex: &str) -> Option<RgbColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(unpack(value))
}

/// Split a packed `0xRRGGBB` value into channels.
pub(crate) fn unpack(value: u32) -> RgbColor {
    RgbColor {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    }
}

/// Pack channels into `0xRRGGBB`.
pub(crate) fn pack(rgb: RgbColor) -> u32 {
    (u32::from(rgb.r) << 16) | (u32::from(rgb.g) << 8) | u32::from(rgb.b)
}

/// Lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: RgbColor) -> String {
    let widened = format!("{:x}", HEX_WIDTH_OFFSET + pack(rgb));
    format!("#{}", &widened[1..])
}

/// RGB → HSL, rounded to whole degrees and percent.
pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return HslColor::new(0, 0, (l * 100.0).round() as u8);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sextant = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sextant / 6.0;

    HslColor::new(
        (h * 360.0).round() as u16,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// HSL → RGB.
///
/// Takes `f64` so fractional lightness steps convert without pre-rounding.
/// Saturation and lightness are clamped to 0–100.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RgbColor {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    RgbColor {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
    }
}

/// Piecewise-linear ramp for one channel at phase `t`.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSB → RGB. Hue, saturation and brightness are fractions in 0.0–1.0.
pub fn hsb_to_rgb(h: f64, s: f64, v: f64) -> RgbColor {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let h6 = h.rem_euclid(1.0) * 6.0;
        let f = h6 - h6.floor();
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match h6.floor() as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };
    RgbColor {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
    }
}

/// RGB → HSB, unrounded. Returns `(hue, saturation, brightness)` in 0.0–1.0.
pub fn rgb_to_hsb(rgb: RgbColor) -> (f64, f64, f64) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, max)
}

fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// ITU BT.601 luma in per-mille units: `299r + 587g + 114b`.
///
/// Integer arithmetic keeps threshold comparisons exact.
pub(crate) fn luma_millis(rgb: RgbColor) -> u32 {
    299 * u32::from(rgb.r) + 587 * u32::from(rgb.g) + 114 * u32::from(rgb.b)
}

/// ITU BT.601 luma on the 0–255 scale.
pub fn luma(rgb: RgbColor) -> f64 {
    f64::from(luma_millis(rgb)) / 1000.0
}
