//! The selected-color banner.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color::HexColor;
use crate::constants;

/// A wide banner filled with `color`, its hex code drawn in black or white
/// depending on which reads better.
pub(crate) fn color_display(color: RwSignal<HexColor>) -> impl IntoView {
    container(label(move || color.get().to_string()).style(move |s| {
        s.font_size(30.0)
            .font_bold()
            .font_family("monospace".to_string())
            .color(Color::from(color.get().contrast_text()))
    }))
    .style(move |s| {
        s.width_full()
            .height(constants::DISPLAY_HEIGHT)
            .items_center()
            .justify_center()
            .border_radius(constants::RADIUS * 2.0)
            .background(Color::from(color.get()))
    })
}
