//! Animated particle backdrop.
//!
//! Paints a [`ParticleField`] and advances it on a frame timer. The field is
//! reseeded whenever the palette or primary color changes.

use std::time::Duration;

use floem::action::exec_after;
use floem::kurbo::{Circle, Point, Rect};
use floem::peniko::Color;
use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::HexColor;
use crate::constants;
use crate::particles::ParticleField;

enum BackgroundUpdate {
    Tick,
    Colors(Vec<HexColor>, HexColor),
    Speed(f64),
}

pub(crate) struct ParticleBackground {
    id: ViewId,
    field: ParticleField,
    colors: Vec<HexColor>,
    primary: HexColor,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a full-size particle backdrop.
///
/// - `colors`: palette the particles draw from
/// - `primary`: used when `colors` is empty
/// - `speed`: velocity multiplier
pub(crate) fn particle_background(
    colors: RwSignal<Vec<HexColor>>,
    primary: RwSignal<HexColor>,
    speed: RwSignal<f64>,
) -> ParticleBackground {
    let id = ViewId::new();

    create_effect(move |_| {
        let palette = colors.get();
        let p = primary.get();
        id.update_state(BackgroundUpdate::Colors(palette, p));
    });

    create_effect(move |_| {
        id.update_state(BackgroundUpdate::Speed(speed.get()));
    });

    schedule_tick(id);

    let initial_colors = colors.get_untracked();
    let initial_primary = primary.get_untracked();
    ParticleBackground {
        id,
        field: ParticleField::seed(
            0.0,
            0.0,
            &initial_colors,
            initial_primary,
            speed.get_untracked(),
            &mut rand::rng(),
        ),
        colors: initial_colors,
        primary: initial_primary,
        size: Default::default(),
    }
    .style(|s| s.absolute().inset(0.0).size_full())
}

fn schedule_tick(id: ViewId) {
    exec_after(Duration::from_millis(constants::FRAME_MILLIS), move |_| {
        id.update_state(BackgroundUpdate::Tick);
    });
}

impl ParticleBackground {
    fn reseed(&mut self) {
        let (w, h) = (self.size.width as f64, self.size.height as f64);
        self.field = ParticleField::seed(
            w,
            h,
            &self.colors,
            self.primary,
            self.field.speed(),
            &mut rand::rng(),
        );
    }
}

impl View for ParticleBackground {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<BackgroundUpdate>() {
            match *update {
                BackgroundUpdate::Tick => {
                    self.field.step();
                    schedule_tick(self.id);
                }
                BackgroundUpdate::Colors(colors, primary) => {
                    self.colors = colors;
                    self.primary = primary;
                    self.reseed();
                }
                BackgroundUpdate::Speed(speed) => {
                    self.field.set_speed(speed);
                }
            }
            self.id.request_paint();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        let (w, h) = (self.size.width as f64, self.size.height as f64);
        let (fw, fh) = self.field.size();
        if fw != w || fh != h {
            if self.field.particles().is_empty() {
                self.reseed();
            } else {
                self.field.resize(w, h);
            }
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        for p in self.field.particles() {
            let rgb = p.color.rgb();
            let circle = Circle::new(Point::new(p.x, p.y), p.radius);
            cx.fill(
                &circle,
                Color::rgba8(rgb.r, rgb.g, rgb.b, constants::PARTICLE_ALPHA),
                0.0,
            );
        }
    }
}
