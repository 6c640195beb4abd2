//! Hex entry, read-only channel fields, and the clipboard button.

use std::time::Duration;

use floem::action::exec_after;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use log::{trace, warn};

use crate::color::HexColor;
use crate::constants;

/// `#` followed by exactly six hex digits.
fn is_committable(raw: &str) -> bool {
    raw.strip_prefix('#')
        .is_some_and(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
}

/// A hex input field bound to `color`.
///
/// Typing a complete `#RRGGBB` updates the color immediately; anything else
/// is left alone until focus leaves, when the field snaps back to the
/// current color.
pub(crate) fn hex_input(color: RwSignal<HexColor>) -> impl IntoView {
    let text = RwSignal::new(color.get_untracked().to_string());

    // color → text (external updates)
    create_effect(move |_| {
        let c = color.get();
        let current = text.get_untracked();
        if HexColor::parse(&current).ok() != Some(c) {
            text.set(c.to_string());
        }
    });

    // text → color on every valid keystroke
    create_effect(move |_| {
        let raw = text.get();
        if !is_committable(raw.trim()) {
            return;
        }
        if let Ok(c) = HexColor::parse(&raw) {
            if color.get_untracked() != c {
                color.set(c);
            }
        }
    });

    let on_commit = move || {
        let canonical = color.get_untracked().to_string();
        if text.get_untracked() != canonical {
            text.set(canonical);
        }
    };
    let on_commit_clone = on_commit;

    text_input(text)
        .style(|s| {
            s.width(constants::HEX_INPUT_WIDTH)
                .padding(4.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event_stop(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_commit_clone();
                }
            }
        })
}

/// A read-only numeric field with its caption underneath.
pub(crate) fn value_field(
    lbl: &'static str,
    value: impl Fn() -> String + 'static,
) -> impl IntoView {
    v_stack((
        label(value).style(|s| {
            s.width(constants::INPUT_WIDTH)
                .padding(4.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::rgb8(250, 250, 250))
                .border(1.0)
                .border_color(Color::rgb8(220, 220, 220))
                .border_radius(3.0)
        }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
///
/// The icon switches to a check mark for a moment after each copy.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static, tint: Color) -> impl IntoView {
    let pressed = RwSignal::new(false);
    let copied = RwSignal::new(false);
    container(
        label(move || {
            let icon = if copied.get() {
                lucide_icons::Icon::Check
            } else {
                lucide_icons::Icon::Copy
            };
            icon.unicode().to_string()
        })
        .style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                tint
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(22.0, 22.0)
            .items_center()
            .justify_center()
            .border_radius(11.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgba8(255, 255, 255, 60)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        if copy_to_clipboard(&get_text()) {
            copied.set(true);
            exec_after(Duration::from_millis(constants::COPIED_MILLIS), move |_| {
                copied.set(false);
            });
        }
    })
}

fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => {
                trace!("copied {text} to clipboard");
                true
            }
            Err(err) => {
                warn!("clipboard write failed: {err}");
                false
            }
        },
        Err(err) => {
            warn!("clipboard unavailable: {err}");
            false
        }
    }
}
