//! Circular hue/saturation wheel bound to the selected color.
//!
//! Angle maps to hue and radius to saturation. The wheel keeps its own HSB
//! state so the cursor does not jump when the selected color is black or
//! gray, and writes every pick back as a [`HexColor`].

use std::f64::consts::TAU;
use std::sync::Arc;

use floem::kurbo::{BezPath, Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{HexColor, RgbColor};
use crate::constants;
use crate::math;

/// Feather width in raster pixels for the anti-aliased rim.
const FEATHER: f64 = 3.0;

/// Fold an incoming color into held `(hue, saturation, brightness)`.
///
/// Black carries no hue or saturation and grays carry no hue, so those
/// components keep their held values.
pub(crate) fn track_hsb(held: (f64, f64, f64), rgb: RgbColor) -> (f64, f64, f64) {
    let (h, s, v) = math::rgb_to_hsb(rgb);
    if v == 0.0 {
        (held.0, held.1, 0.0)
    } else if s == 0.0 {
        (held.0, 0.0, v)
    } else {
        (h, s, v)
    }
}

/// Hue and saturation under an offset `(dx, dy)` from the wheel center.
///
/// Hue 0 sits at 3 o'clock and grows clockwise (screen y points down).
fn hue_sat_at(dx: f64, dy: f64, radius: f64) -> (f64, f64) {
    let sat = ((dx * dx + dy * dy).sqrt() / radius).clamp(0.0, 1.0);
    let hue = (dy.atan2(dx) / TAU).rem_euclid(1.0);
    (hue, sat)
}

fn circle_path(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..64 {
        let angle = TAU * i as f64 / 64.0;
        let pt = Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    path
}

/// Rasterize the full-brightness wheel to an RGBA8 buffer.
fn rasterize_wheel(side: u32) -> Vec<u8> {
    let center = side as f64 / 2.0;
    let radius = center - FEATHER;
    let mut buf = vec![0u8; (side * side * 4) as usize];

    for py in 0..side {
        let dy = py as f64 + 0.5 - center;
        for px in 0..side {
            let dx = px as f64 + 0.5 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius + FEATHER {
                continue;
            }
            let alpha = ((radius + FEATHER - dist) / FEATHER).clamp(0.0, 1.0);
            let (hue, sat) = hue_sat_at(dx, dy, radius);
            let rgb = math::hsb_to_rgb(hue, sat, 1.0);
            let offset = ((py * side + px) * 4) as usize;
            buf[offset] = rgb.r;
            buf[offset + 1] = rgb.g;
            buf[offset + 2] = rgb.b;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }
    buf
}

enum WheelUpdate {
    Color(HexColor),
}

pub(crate) struct ColorWheel {
    id: ViewId,
    held: bool,
    hsb: (f64, f64, f64),
    /// Last color this wheel wrote, so its own echo is not folded back in.
    sent: Option<HexColor>,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(HexColor)>,
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates a hue/saturation wheel that reads and writes `color`.
///
/// Brightness comes from `color` and is drawn as a dark overlay.
pub(crate) fn color_wheel(color: RwSignal<HexColor>) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(WheelUpdate::Color(color.get()));
    });

    ColorWheel {
        id,
        held: false,
        hsb: track_hsb((0.0, 0.0, 0.0), color.get_untracked().rgb()),
        sent: None,
        size: Default::default(),
        on_change: Box::new(move |c| {
            if color.get_untracked() != c {
                color.set(c);
            }
        }),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(|s| {
        s.size(constants::WHEEL_SIZE, constants::WHEEL_SIZE)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorWheel {
    fn radius(&self) -> f64 {
        (self.size.width as f64).min(self.size.height as f64) / 2.0
    }

    fn center(&self) -> Point {
        Point::new(self.size.width as f64 / 2.0, self.size.height as f64 / 2.0)
    }

    fn pick(&mut self, pos: Point) {
        let r = self.radius();
        if r <= 0.0 {
            return;
        }
        let c = self.center();
        let (hue, sat) = hue_sat_at(pos.x - c.x, pos.y - c.y, r);
        self.hsb = (hue, sat, self.hsb.2);
        let picked = HexColor::from_rgb(math::hsb_to_rgb(hue, sat, self.hsb.2));
        self.sent = Some(picked);
        (self.on_change)(picked);
        self.id.request_paint();
    }

    fn cursor_position(&self) -> Point {
        let c = self.center();
        let angle = self.hsb.0 * TAU;
        let r = self.hsb.1 * self.radius();
        Point::new(c.x + angle.cos() * r, c.y + angle.sin() * r)
    }

    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }
        let side = constants::WHEEL_RASTER_SIZE;
        let blob = Blob::new(Arc::new(rasterize_wheel(side)));
        self.wheel_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, side, side));
        self.wheel_hash = b"harmony-wheel".to_vec();
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            let WheelUpdate::Color(c) = *update;
            if self.sent != Some(c) {
                self.hsb = track_hsb(self.hsb, c.rgb());
                self.sent = None;
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.pick(e.pos);
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.pick(e.pos);
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        self.size = self.id.get_layout().unwrap_or_default().size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let radius = self.radius();
        if radius <= 0.0 {
            return;
        }
        let center = self.center();
        let rect = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );

        cx.save();
        cx.clip(&Circle::new(center, radius));
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                rect,
            );
        }
        cx.restore();

        let overlay_alpha = 1.0 - self.hsb.2;
        if overlay_alpha > 0.001 {
            cx.fill(
                &circle_path(center, radius),
                Color::rgba(0.0, 0.0, 0.0, overlay_alpha),
                0.0,
            );
        }

        let cursor = self.cursor_position();
        cx.stroke(
            &Circle::new(cursor, constants::CURSOR_RADIUS + 1.0),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(cursor, constants::CURSOR_RADIUS),
            Color::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
    }
}
