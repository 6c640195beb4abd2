//! A labelled color square with a copy-to-clipboard button.

use floem::prelude::*;

use crate::color::HexColor;
use crate::constants;
use crate::inputs::copy_button;
use crate::palette::Swatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwatchSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SwatchSize {
    pub fn side(self) -> f32 {
        match self {
            Self::Sm => constants::SWATCH_SM,
            Self::Md => constants::SWATCH_MD,
            Self::Lg => constants::SWATCH_LG,
        }
    }
}

impl From<HexColor> for Color {
    fn from(c: HexColor) -> Self {
        let rgb = c.rgb();
        Color::rgb8(rgb.r, rgb.g, rgb.b)
    }
}

/// Creates a swatch view: the color, its hex code, and an optional caption.
pub(crate) fn color_swatch(swatch: Swatch, size: SwatchSize) -> impl IntoView {
    let color = swatch.color;
    let side = size.side();
    let caption = swatch.label.unwrap_or_default();
    let has_caption = !caption.is_empty();

    v_stack((
        container(copy_button(
            move || color.to_string(),
            Color::from(color.contrast_text()),
        ))
        .style(move |s| {
            s.size(side, side)
                .padding(4.0)
                .items_start()
                .justify_end()
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgba8(0, 0, 0, 30))
                .background(Color::from(color))
        }),
        label(move || color.to_string()).style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(60, 60, 60))
        }),
        label(move || caption.clone()).style(move |s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .apply_if(!has_caption, |s| s.hide())
        }),
    ))
    .style(|s| s.items_center().gap(4.0))
}
