//! # floem-harmony
//!
//! Color harmony derivation with an explorer UI for
//! [Floem](https://github.com/lapce/floem).
//!
//! The core is a set of pure conversions between hex, RGB and HSL plus the
//! classic harmony generators (complementary, analogous, triadic,
//! monochromatic, shades, tints) and a light/dark classifier. With the
//! default `ui` feature the crate also provides [`harmony_explorer`], a
//! picker, banner, scheme browser and animated particle backdrop.
//!
//! ## Usage
//!
//! ```rust
//! use floem_harmony::HexColor;
//!
//! let base: HexColor = "#9b87f5".parse().unwrap();
//! let [first, second] = base.triadic();
//! assert_eq!(base.shades(5)[0], base);
//! assert!(base.is_light());
//! # let _ = (first, second);
//! ```

mod color;
mod config;
mod constants;
mod contrast;
mod error;
mod harmony;
pub mod math;
mod palette;
mod particles;

#[cfg(feature = "ui")]
mod brightness_slider;
#[cfg(feature = "ui")]
mod color_wheel;
#[cfg(feature = "ui")]
mod display;
#[cfg(feature = "ui")]
mod inputs;
#[cfg(feature = "ui")]
mod particle_background;
#[cfg(feature = "ui")]
mod picker;
#[cfg(feature = "ui")]
mod schemes;
#[cfg(feature = "ui")]
mod swatch;

pub use color::{HexColor, HslColor, RgbColor};
pub use config::ExplorerConfig;
pub use contrast::{contrast_color, is_light_color};
pub use error::ColorParseError;
pub use harmony::{
    analogous_colors, complementary_color, monochromatic_colors, shades_of_color,
    tints_of_color, triadic_colors, DEFAULT_COUNT,
};
pub use palette::{Palette, Scheme, Swatch};
pub use particles::{particle_count, Particle, ParticleField};
#[cfg(feature = "ui")]
pub use swatch::SwatchSize;

#[cfg(feature = "ui")]
pub use explorer::harmony_explorer;

#[cfg(feature = "ui")]
mod explorer {
    use std::sync::Once;
    use std::time::{SystemTime, UNIX_EPOCH};

    use floem::prelude::*;
    use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
    use floem::text::FONT_SYSTEM;
    use floem::views::stack;

    use crate::color::HexColor;
    use crate::config::ExplorerConfig;
    use crate::constants;
    use crate::display::color_display;
    use crate::particle_background::particle_background;
    use crate::picker::color_picker;
    use crate::schemes::color_schemes;

    static LOAD_LUCIDE_FONT: Once = Once::new();

    /// Creates the top-level explorer view.
    ///
    /// The explorer reads from and writes to `color`. Clicking "Racer" in the
    /// title toggles the backdrop between normal and racing speed.
    pub fn harmony_explorer(color: RwSignal<HexColor>, config: ExplorerConfig) -> impl IntoView {
        LOAD_LUCIDE_FONT.call_once(|| {
            FONT_SYSTEM
                .lock()
                .db_mut()
                .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
        });

        let scheme_colors = RwSignal::new(vec![color.get_untracked()]);
        let speed = RwSignal::new(config.particle_speed);
        let base_speed = config.particle_speed;

        stack((
            particle_background(scheme_colors, color, speed),
            v_stack((
                header(speed, base_speed),
                h_stack((
                    section("Choose Your Color", color_picker(color)),
                    section("Selected Color", color_display(color)),
                ))
                .style(|s| s.width_full().gap(constants::PADDING * 2.0)),
                section(
                    "Color Schemes",
                    color_schemes(color, config.palette_size, scheme_colors),
                ),
                label(|| {
                    "Find the perfect color combinations for your next project. \
                     Use the picker to create harmonious color schemes."
                })
                .style(|s| {
                    s.font_size(constants::LABEL_FONT + 1.0)
                        .color(Color::rgb8(120, 120, 120))
                        .align_self(Some(floem::taffy::AlignItems::Center))
                }),
                footer(),
            ))
            .style(|s| {
                s.size_full()
                    .padding(constants::PADDING * 2.0)
                    .gap(constants::PADDING * 2.0)
            }),
        ))
        .style(|s| s.size_full().background(Color::rgb8(246, 245, 250)))
    }

    fn header(speed: RwSignal<f64>, base_speed: f64) -> impl IntoView {
        h_stack((
            label(|| lucide_icons::Icon::Palette.unicode().to_string()).style(|s| {
                s.font_size(26.0)
                    .font_family("lucide".to_string())
                    .color(Color::rgb8(0x7E, 0x69, 0xAB))
            }),
            label(|| "Color Wheel").style(|s| s.font_size(constants::HEADING_FONT).font_bold()),
            label(|| "Racer")
                .style(|s| {
                    s.font_size(constants::HEADING_FONT)
                        .font_bold()
                        .cursor(floem::style::CursorStyle::Pointer)
                        .hover(|s| s.color(Color::rgb8(0x7E, 0x69, 0xAB)))
                })
                .on_click_stop(move |_| {
                    speed.update(|v| {
                        *v = if *v == base_speed {
                            constants::RACING_SPEED
                        } else {
                            base_speed
                        };
                    });
                }),
        ))
        .style(|s| s.items_center().gap(constants::GAP))
    }

    fn footer() -> impl IntoView {
        let days = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() / 86_400)
            .unwrap_or_default();
        let year = civil_year(days);
        label(move || format!("© {year} Color Wheel Racer. All rights reserved."))
            .style(|s| {
                s.font_size(constants::LABEL_FONT)
                    .color(Color::rgb8(150, 150, 150))
                    .align_self(Some(floem::taffy::AlignItems::Center))
            })
    }

    /// Gregorian year of the given day count since 1970-01-01.
    fn civil_year(days: u64) -> u64 {
        let z = days + 719_468;
        let era = z / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let year = yoe + era * 400;
        // March-based years: January and February belong to the next one.
        if mp >= 10 {
            year + 1
        } else {
            year
        }
    }

    fn section(title: &'static str, body: impl IntoView + 'static) -> impl IntoView {
        v_stack((
            label(move || title).style(|s| {
                s.font_size(constants::HEADING_FONT)
                    .margin_bottom(constants::GAP)
            }),
            body,
        ))
        .style(|s| s.flex_grow(1.0).gap(constants::GAP))
    }

    #[cfg(test)]
    mod tests {
        use super::civil_year;

        #[test]
        fn footer_year_from_epoch_days() {
            assert_eq!(civil_year(0), 1970);
            assert_eq!(civil_year(19_722), 2023, "2023-12-31");
            assert_eq!(civil_year(19_723), 2024, "2024-01-01");
            assert_eq!(civil_year(20_088), 2024, "2024-12-31");
            assert_eq!(civil_year(20_089), 2025, "2025-01-01");
        }
    }
}
