//! Color harmony generators.
//!
//! Every generator decodes the base color to HSL, moves hue or lightness,
//! and re-encodes. The typed methods on [`HexColor`] are infallible; the
//! `&str` functions at the bottom of this module never fail either and fall
//! back to black (or white for tints) when the input does not parse.

use log::warn;

use crate::color::HexColor;
use crate::math;

/// Palette length used when the caller does not ask for one.
pub const DEFAULT_COUNT: usize = 5;

/// Lightness sweep bounds for monochromatic palettes.
const MONO_SPREAD: f64 = 40.0;
const MONO_FLOOR: f64 = 10.0;
const MONO_CEILING: f64 = 90.0;

impl HexColor {
    /// Opposite hue (180°).
    pub fn complementary(self) -> HexColor {
        HexColor::from_hsl(self.hsl().rotate(180))
    }

    /// Hues at +120° and +240°.
    pub fn triadic(self) -> [HexColor; 2] {
        let hsl = self.hsl();
        [
            HexColor::from_hsl(hsl.rotate(120)),
            HexColor::from_hsl(hsl.rotate(240)),
        ]
    }

    /// Hues at +30° and −30°, in that order.
    pub fn analogous(self) -> [HexColor; 2] {
        let hsl = self.hsl();
        [
            HexColor::from_hsl(hsl.rotate(30)),
            HexColor::from_hsl(hsl.rotate(-30)),
        ]
    }

    /// `count` colors of the same hue and saturation, lightness swept evenly
    /// from `max(l - 40, 10)` up to `min(l + 40, 90)`.
    pub fn monochromatic(self, count: usize) -> Vec<HexColor> {
        let hsl = self.hsl();
        let l = f64::from(hsl.l);
        let lo = (l - MONO_SPREAD).max(MONO_FLOOR);
        let hi = (l + MONO_SPREAD).min(MONO_CEILING);
        let step = if count > 1 {
            (hi - lo) / (count - 1) as f64
        } else {
            0.0
        };

        (0..count)
            .map(|i| with_lightness(self, lo + step * i as f64))
            .collect()
    }

    /// The color itself followed by `count - 1` progressively darker shades,
    /// stepping down by `l / count`.
    pub fn shades(self, count: usize) -> Vec<HexColor> {
        if count == 0 {
            return Vec::new();
        }
        let l = f64::from(self.hsl().l);
        let step = l / count as f64;

        std::iter::once(self)
            .chain((1..count).map(|i| with_lightness(self, (l - step * i as f64).max(0.0))))
            .collect()
    }

    /// The color itself followed by `count - 1` progressively lighter tints,
    /// stepping up by `(100 - l) / count`.
    pub fn tints(self, count: usize) -> Vec<HexColor> {
        if count == 0 {
            return Vec::new();
        }
        let l = f64::from(self.hsl().l);
        let step = (100.0 - l) / count as f64;

        std::iter::once(self)
            .chain((1..count).map(|i| with_lightness(self, (l + step * i as f64).min(100.0))))
            .collect()
    }
}

/// Keep hue and saturation of `base`, replace lightness.
fn with_lightness(base: HexColor, lightness: f64) -> HexColor {
    let hsl = base.hsl();
    HexColor::from_rgb(math::hsl_to_rgb(
        f64::from(hsl.h),
        f64::from(hsl.s),
        lightness,
    ))
}

fn parse_or_warn(hex: &str, generator: &str) -> Option<HexColor> {
    match HexColor::parse(hex) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!("{generator}: {err}, using fallback");
            None
        }
    }
}

/// Complementary color of `hex`, or black if it does not parse.
pub fn complementary_color(hex: &str) -> HexColor {
    parse_or_warn(hex, "complementary")
        .map(HexColor::complementary)
        .unwrap_or(HexColor::BLACK)
}

/// Triadic pair of `hex`, or two blacks.
pub fn triadic_colors(hex: &str) -> [HexColor; 2] {
    parse_or_warn(hex, "triadic")
        .map(HexColor::triadic)
        .unwrap_or([HexColor::BLACK; 2])
}

/// Analogous pair of `hex`, or two blacks.
pub fn analogous_colors(hex: &str) -> [HexColor; 2] {
    parse_or_warn(hex, "analogous")
        .map(HexColor::analogous)
        .unwrap_or([HexColor::BLACK; 2])
}

/// Monochromatic sweep of `hex`, or `count` blacks.
pub fn monochromatic_colors(hex: &str, count: usize) -> Vec<HexColor> {
    match parse_or_warn(hex, "monochromatic") {
        Some(color) => color.monochromatic(count),
        None => vec![HexColor::BLACK; count],
    }
}

/// Shades of `hex`, or `count` blacks.
pub fn shades_of_color(hex: &str, count: usize) -> Vec<HexColor> {
    match parse_or_warn(hex, "shades") {
        Some(color) => color.shades(count),
        None => vec![HexColor::BLACK; count],
    }
}

/// Tints of `hex`, or `count` whites.
pub fn tints_of_color(hex: &str, count: usize) -> Vec<HexColor> {
    match parse_or_warn(hex, "tints") {
        Some(color) => color.tints(count),
        None => vec![HexColor::WHITE; count],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HslColor, RgbColor};

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn complementary_of_primaries() {
        assert_eq!(hex("#FF0000").complementary(), hex("#00FFFF"));
        assert_eq!(hex("#0000FF").complementary(), hex("#FFFF00"));
    }

    #[test]
    fn complementary_of_gray_is_itself() {
        let gray = hex("#808080");
        assert_eq!(gray.complementary(), gray);
    }

    #[test]
    fn triadic_of_red() {
        assert_eq!(hex("#FF0000").triadic(), [hex("#00FF00"), hex("#0000FF")]);
    }

    #[test]
    fn analogous_order_is_plus_then_minus() {
        let [plus, minus] = hex("#FF0000").analogous();
        assert_eq!(plus.hsl().h, 30);
        assert_eq!(minus.hsl().h, 330);
    }

    #[test]
    fn monochromatic_sweeps_clamped_range() {
        // l = 50 → sweep 10..=90 in steps of 20.
        let colors = hex("#FF0000").monochromatic(5);
        let lightness: Vec<u8> = colors.iter().map(|c| c.hsl().l).collect();
        assert_eq!(lightness, vec![10, 30, 50, 70, 90]);
        assert_eq!(colors[2], hex("#FF0000"), "midpoint is the base color");
    }

    #[test]
    fn monochromatic_edge_counts() {
        assert!(hex("#FF0000").monochromatic(0).is_empty());
        let single = hex("#FF0000").monochromatic(1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].hsl().l, 10);
    }

    #[test]
    fn shades_start_with_base_and_darken() {
        let base = hex("#FF0000");
        let shades = base.shades(5);
        assert_eq!(shades.len(), 5);
        assert_eq!(shades[0], base);
        let lightness: Vec<u8> = shades.iter().map(|c| c.hsl().l).collect();
        assert_eq!(lightness, vec![50, 40, 30, 20, 10]);
    }

    #[test]
    fn tints_start_with_base_and_lighten() {
        let base = hex("#FF0000");
        let tints = base.tints(5);
        assert_eq!(tints[0], base);
        let lightness: Vec<u8> = tints.iter().map(|c| c.hsl().l).collect();
        assert_eq!(lightness, vec![50, 60, 70, 80, 90]);
    }

    #[test]
    fn shades_and_tints_of_zero_count_are_empty() {
        assert!(HexColor::WHITE.shades(0).is_empty());
        assert!(HexColor::BLACK.tints(0).is_empty());
    }

    #[test]
    fn shades_of_black_stay_black() {
        assert_eq!(HexColor::BLACK.shades(3), vec![HexColor::BLACK; 3]);
        assert_eq!(HexColor::WHITE.tints(3), vec![HexColor::WHITE; 3]);
    }

    #[test]
    fn string_surface_accepts_any_case() {
        assert_eq!(complementary_color("#ff0000"), hex("#00FFFF"));
        assert_eq!(complementary_color("FF0000"), hex("#00FFFF"));
    }

    #[test]
    fn string_surface_fallbacks() {
        assert_eq!(complementary_color("not a color"), HexColor::BLACK);
        assert_eq!(triadic_colors("#12"), [HexColor::BLACK; 2]);
        assert_eq!(analogous_colors(""), [HexColor::BLACK; 2]);
        assert_eq!(monochromatic_colors("xyz", 4), vec![HexColor::BLACK; 4]);
        assert_eq!(shades_of_color("#GGGGGG", 3), vec![HexColor::BLACK; 3]);
        assert_eq!(tints_of_color("#GGGGGG", 3), vec![HexColor::WHITE; 3]);
    }

    #[test]
    fn generators_keep_saturation_of_saturated_base() {
        let base = HexColor::from_hsl(HslColor::new(200, 80, 50));
        for c in base.triadic().iter().chain(base.analogous().iter()) {
            let s = c.hsl().s;
            assert!(s.abs_diff(80) <= 1, "saturation drifted to {s}");
        }
        assert_eq!(base.complementary().rgb(), RgbColor::from(HslColor::new(20, 80, 50)));
    }
}
