//! Run-time settings for the explorer.

use crate::color::HexColor;
use crate::color::RgbColor;
use crate::harmony::DEFAULT_COUNT;

/// Starting state for [`harmony_explorer`](crate::harmony_explorer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Color selected when the explorer opens.
    pub initial_color: HexColor,
    /// Length of monochromatic, shade and tint palettes.
    pub palette_size: usize,
    /// Background particle speed multiplier.
    pub particle_speed: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            initial_color: HexColor::from_rgb(RgbColor::new(0x9B, 0x87, 0xF5)),
            palette_size: DEFAULT_COUNT,
            particle_speed: 1.0,
        }
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn with_initial_color(mut self, color: HexColor) -> Self {
        self.initial_color = color;
        self
    }

    /// Palette sizes below 1 are raised to 1.
    #[must_use]
    pub fn with_palette_size(mut self, size: usize) -> Self {
        self.palette_size = size.max(1);
        self
    }

    /// Negative or non-finite speeds fall back to 1.0.
    #[must_use]
    pub fn with_particle_speed(mut self, speed: f64) -> Self {
        self.particle_speed = if speed.is_finite() && speed >= 0.0 {
            speed
        } else {
            1.0
        };
        self
    }
}
