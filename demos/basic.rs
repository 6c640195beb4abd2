//! Standalone demo: opens a window with the harmony explorer.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_harmony::{harmony_explorer, ExplorerConfig};

fn main() {
    env_logger::init();

    let config = ExplorerConfig::default();
    let color = RwSignal::new(config.initial_color);

    floem::Application::new()
        .window(
            move |_| {
                harmony_explorer(color, config).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((1100.0, 860.0))
                    .title("Color Wheel Racer"),
            ),
        )
        .run();
}
