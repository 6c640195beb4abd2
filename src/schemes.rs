//! Tabbed scheme browser.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::taffy::style::FlexWrap;
use floem::views::{dyn_container, h_stack_from_iter};
use log::trace;

use crate::color::HexColor;
use crate::constants;
use crate::palette::{Palette, Scheme};
use crate::swatch::{color_swatch, SwatchSize};

const ACCENT: Color = Color::rgb8(0x7E, 0x69, 0xAB);

/// Palettes up to this length get large swatches.
const LARGE_SWATCH_LIMIT: usize = 3;

/// Creates the scheme tabs and the active palette.
///
/// `scheme_colors` receives the active palette's colors every time the
/// base color or the tab changes.
pub(crate) fn color_schemes(
    color: RwSignal<HexColor>,
    palette_size: usize,
    scheme_colors: RwSignal<Vec<HexColor>>,
) -> impl IntoView {
    let active = RwSignal::new(Scheme::default());

    create_effect(move |_| {
        let scheme = active.get();
        let palette = scheme.palette(color.get(), palette_size);
        trace!("{scheme} palette: {} colors", palette.len());
        scheme_colors.set(palette.colors());
    });

    v_stack((
        h_stack_from_iter(Scheme::ALL.into_iter().map(move |scheme| tab(scheme, active)))
            .style(|s| {
                s.gap(constants::GAP / 2.0)
                    .border_bottom(1.0)
                    .border_color(Color::rgb8(220, 220, 220))
            }),
        dyn_container(
            move || active.get().palette(color.get(), palette_size),
            palette_row,
        )
        .style(|s| {
            s.width_full()
                .padding(constants::PADDING)
                .border_radius(constants::RADIUS)
                .background(Color::rgba8(249, 250, 251, 200))
        }),
    ))
    .style(|s| s.width_full().gap(constants::GAP * 2.0))
}

fn tab(scheme: Scheme, active: RwSignal<Scheme>) -> impl IntoView {
    label(move || scheme.to_string())
        .style(move |s| {
            let selected = active.get() == scheme;
            s.padding_horiz(14.0)
                .padding_vert(8.0)
                .font_size(constants::INPUT_FONT + 1.0)
                .cursor(floem::style::CursorStyle::Pointer)
                .apply_if(selected, |s| s.border_bottom(2.0).border_color(ACCENT).color(ACCENT))
                .apply_if(!selected, |s| {
                    s.color(Color::rgb8(110, 110, 110))
                        .hover(|s| s.color(Color::rgb8(50, 50, 50)))
                })
        })
        .on_click_stop(move |_| active.set(scheme))
}

fn palette_row(palette: Palette) -> impl IntoView {
    let size = if palette.len() <= LARGE_SWATCH_LIMIT {
        SwatchSize::Lg
    } else {
        SwatchSize::Md
    };
    h_stack_from_iter(
        palette
            .swatches
            .into_iter()
            .map(move |swatch| color_swatch(swatch, size)),
    )
    .style(|s| {
        s.width_full()
            .justify_center()
            .flex_wrap(FlexWrap::Wrap)
            .gap(constants::GAP * 3.0)
    })
}
