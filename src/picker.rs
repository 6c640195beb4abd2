//! Color entry: hue/saturation wheel, brightness slider, hex field, and
//! read-only RGB and HSL rows.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::brightness_slider::brightness_slider;
use crate::color::HexColor;
use crate::color_wheel::color_wheel;
use crate::constants;
use crate::inputs::{copy_button, hex_input, value_field};

const ICON_TINT: Color = Color::rgb8(120, 120, 120);

/// Creates the picker panel bound to `color`.
pub(crate) fn color_picker(color: RwSignal<HexColor>) -> impl IntoView {
    v_stack((
        color_wheel(color),
        brightness_slider(color),
        // Hex + copy row
        h_stack((
            label(|| "Hex").style(|s| {
                s.font_size(constants::LABEL_FONT)
                    .color(Color::rgb8(120, 120, 120))
            }),
            hex_input(color),
            copy_button(move || color.get().to_string(), ICON_TINT),
        ))
        .style(|st| st.gap(constants::GAP).items_center()),
        // RGB row
        h_stack((
            value_field("R", move || color.get().rgb().r.to_string()),
            value_field("G", move || color.get().rgb().g.to_string()),
            value_field("B", move || color.get().rgb().b.to_string()),
            copy_button(
                move || {
                    let rgb = color.get().rgb();
                    format!("{}, {}, {}", rgb.r, rgb.g, rgb.b)
                },
                ICON_TINT,
            ),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center()),
        // HSL row
        h_stack((
            value_field("H", move || color.get().hsl().h.to_string()),
            value_field("S", move || color.get().hsl().s.to_string()),
            value_field("L", move || color.get().hsl().l.to_string()),
            copy_button(
                move || {
                    let hsl = color.get().hsl();
                    format!("{}, {}%, {}%", hsl.h, hsl.s, hsl.l)
                },
                ICON_TINT,
            ),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center()),
    ))
    .style(|st| st.gap(constants::GAP))
}
