//! Color value types: `RgbColor`, `HslColor`, and the canonical `HexColor`.
//!
//! All three are small `Copy` values. `HexColor` is the public currency of
//! the crate; it always renders as uppercase `#RRGGBB`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;
use crate::math;

/// Multiplier that expands a shorthand nibble (`F` → `FF`).
const SHORTHAND_MULTIPLIER: u8 = 17;

/// Three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSL (degrees and whole percent).
    pub fn to_hsl(self) -> HslColor {
        math::rgb_to_hsl(self)
    }
}

impl From<HslColor> for RgbColor {
    fn from(hsl: HslColor) -> Self {
        math::hsl_to_rgb(f64::from(hsl.h), f64::from(hsl.s), f64::from(hsl.l))
    }
}

/// Hue in degrees (0–359), saturation and lightness in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HslColor {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl HslColor {
    /// Wraps hue into `0..360` and clamps saturation and lightness to 100.
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Return this color rotated by `degrees` around the hue circle.
    pub fn rotate(self, degrees: i32) -> Self {
        let h = (i32::from(self.h) + degrees).rem_euclid(360) as u16;
        Self { h, ..self }
    }
}

impl From<RgbColor> for HslColor {
    fn from(rgb: RgbColor) -> Self {
        rgb.to_hsl()
    }
}

/// A validated 24-bit color, displayed as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor(RgbColor);

impl HexColor {
    pub const BLACK: Self = Self(RgbColor::new(0, 0, 0));
    pub const WHITE: Self = Self(RgbColor::new(255, 255, 255));

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`, in any case.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                input: input.to_string(),
            });
        }
        match digits.len() {
            3 => {
                let nibble = |i: usize| -> Result<u8, ColorParseError> {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * SHORTHAND_MULTIPLIER)
                        .map_err(|_| ColorParseError::InvalidDigit {
                            input: input.to_string(),
                        })
                };
                Ok(Self(RgbColor::new(nibble(0)?, nibble(1)?, nibble(2)?)))
            }
            6 => {
                let value =
                    u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidDigit {
                        input: input.to_string(),
                    })?;
                Ok(Self(math::unpack(value)))
            }
            len => Err(ColorParseError::InvalidLength {
                input: input.to_string(),
                len,
            }),
        }
    }

    pub const fn from_rgb(rgb: RgbColor) -> Self {
        Self(rgb)
    }

    pub fn from_hsl(hsl: HslColor) -> Self {
        Self(hsl.into())
    }

    pub const fn rgb(self) -> RgbColor {
        self.0
    }

    pub fn hsl(self) -> HslColor {
        self.0.to_hsl()
    }

    /// Lowercase `#rrggbb`, as emitted by [`math::rgb_to_hex`].
    pub fn to_lowercase_hex(self) -> String {
        math::rgb_to_hex(self.0)
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for RgbColor {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl From<HslColor> for HexColor {
    fn from(hsl: HslColor) -> Self {
        Self::from_hsl(hsl)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RgbColor { r, g, b } = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        let lower = HexColor::parse("#9b87f5").unwrap();
        let upper = HexColor::parse("9B87F5").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.rgb(), RgbColor::new(155, 135, 245));
    }

    #[test]
    fn displays_uppercase_with_hash() {
        let c = HexColor::from_rgb(RgbColor::new(0x0a, 0xbc, 0x01));
        assert_eq!(c.to_string(), "#0ABC01");
        assert_eq!(c.to_lowercase_hex(), "#0abc01");
    }

    #[test]
    fn expands_shorthand() {
        assert_eq!(HexColor::parse("#fff").unwrap(), HexColor::WHITE);
        assert_eq!(HexColor::parse("F00").unwrap().to_string(), "#FF0000");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(HexColor::parse(""), Err(ColorParseError::Empty));
        assert_eq!(HexColor::parse("#"), Err(ColorParseError::Empty));
        assert!(matches!(
            HexColor::parse("#12345g"),
            Err(ColorParseError::InvalidDigit { .. })
        ));
        assert!(matches!(
            HexColor::parse("F"),
            Err(ColorParseError::InvalidLength { len: 1, .. })
        ));
        assert!(matches!(
            HexColor::parse("FFFFFFFF"),
            Err(ColorParseError::InvalidLength { len: 8, .. })
        ));
        assert!(matches!(
            HexColor::parse("+12345"),
            Err(ColorParseError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn from_str_matches_parse() {
        let c: HexColor = "#3B82F6".parse().unwrap();
        assert_eq!(c, HexColor::parse("3b82f6").unwrap());
    }

    #[test]
    fn hsl_new_normalizes() {
        assert_eq!(HslColor::new(360, 50, 50).h, 0);
        assert_eq!(HslColor::new(725, 50, 50).h, 5);
        let clamped = HslColor::new(10, 150, 200);
        assert_eq!((clamped.s, clamped.l), (100, 100));
    }

    #[test]
    fn rotate_wraps_both_ways() {
        let c = HslColor::new(350, 80, 40);
        assert_eq!(c.rotate(30).h, 20);
        assert_eq!(HslColor::new(10, 80, 40).rotate(-30).h, 340);
        assert_eq!(c.rotate(30).s, 80);
    }

    #[test]
    fn hsl_conversion_through_hex() {
        let red = HexColor::from_hsl(HslColor::new(0, 100, 50));
        assert_eq!(red.to_string(), "#FF0000");
        assert_eq!(red.hsl(), HslColor::new(0, 100, 50));
    }
}
