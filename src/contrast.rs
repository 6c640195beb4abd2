//! Light/dark classification and text color selection.

use crate::color::HexColor;
use crate::math;

/// Luma threshold in per-mille units (128 on the 0–255 scale).
const LIGHT_THRESHOLD_MILLIS: u32 = 128_000;

impl HexColor {
    /// Whether BT.601 luma is strictly above 128.
    pub fn is_light(self) -> bool {
        math::luma_millis(self.rgb()) > LIGHT_THRESHOLD_MILLIS
    }

    /// Black on light backgrounds, white on dark ones.
    pub fn contrast_text(self) -> HexColor {
        if self.is_light() {
            HexColor::BLACK
        } else {
            HexColor::WHITE
        }
    }
}

/// Unparseable input counts as light.
pub fn is_light_color(hex: &str) -> bool {
    HexColor::parse(hex).map_or(true, HexColor::is_light)
}

pub fn contrast_color(hex: &str) -> HexColor {
    if is_light_color(hex) {
        HexColor::BLACK
    } else {
        HexColor::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RgbColor;

    #[test]
    fn extremes() {
        assert!(is_light_color("#FFFFFF"));
        assert!(!is_light_color("#000000"));
    }

    #[test]
    fn threshold_is_exclusive() {
        let at = HexColor::from_rgb(RgbColor::new(128, 128, 128));
        let above = HexColor::from_rgb(RgbColor::new(129, 128, 128));
        assert!(!at.is_light(), "luma exactly 128 is dark");
        assert!(above.is_light());
    }

    #[test]
    fn green_weighs_most() {
        // 0.587 * 255 ≈ 149.7, 0.299 * 255 ≈ 76.2
        assert!(HexColor::parse("#00FF00").unwrap().is_light());
        assert!(!HexColor::parse("#FF0000").unwrap().is_light());
    }

    #[test]
    fn contrast_is_binary() {
        assert_eq!(contrast_color("#9b87f5"), HexColor::BLACK);
        assert_eq!(contrast_color("#1E1E1E"), HexColor::WHITE);
        assert_eq!(HexColor::WHITE.contrast_text(), HexColor::BLACK);
    }

    #[test]
    fn unparseable_counts_as_light() {
        assert!(is_light_color("???"));
        assert_eq!(contrast_color("???"), HexColor::BLACK);
    }
}
