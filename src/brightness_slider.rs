//! Brightness slider for the selected color.
//!
//! A horizontal track from the current hue at full brightness (left) to
//! black (right), rasterized to an image.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect};
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
use crate::color_wheel::track_hsb;
use crate::constants;
use crate::math;

fn rasterize_gradient(width: u32, height: u32, base: RgbColor) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let fade = |c: u8| ((1.0 - t) * f64::from(c) + 0.5) as u8;
        let (r, g, b) = (fade(base.r), fade(base.g), fade(base.b));
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset..offset + 4].copy_from_slice(&[r, g, b, 255]);
        }
    }
    buf
}

/// Brightness under pointer `x` on a track of `width` (left is 1.0).
fn brightness_at(x: f64, width: f64) -> Option<f64> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    (usable > 0.0).then(|| 1.0 - ((x - r) / usable).clamp(0.0, 1.0))
}

enum SliderUpdate {
    Color(HexColor),
}

pub(crate) struct BrightnessSlider {
    id: ViewId,
    held: bool,
    hsb: (f64, f64, f64),
    sent: Option<HexColor>,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(HexColor)>,
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached: (RgbColor, u32, u32),
}

/// Creates a brightness slider that reads and writes `color`.
pub(crate) fn brightness_slider(color: RwSignal<HexColor>) -> BrightnessSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(SliderUpdate::Color(color.get()));
    });

    BrightnessSlider {
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
        grad_img: None,
        grad_hash: Vec::new(),
        cached: (RgbColor::default(), 0, 0),
    }
    .style(|s| {
        s.width(constants::WHEEL_SIZE)
            .height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl BrightnessSlider {
    fn slide(&mut self, x: f64) {
        let Some(v) = brightness_at(x, self.size.width as f64) else {
            return;
        };
        let (h, s, _) = self.hsb;
        self.hsb.2 = v;
        let picked = HexColor::from_rgb(math::hsb_to_rgb(h, s, v));
        self.sent = Some(picked);
        (self.on_change)(picked);
        self.id.request_paint();
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }
        let base = math::hsb_to_rgb(self.hsb.0, self.hsb.1, 1.0);
        if self.grad_img.is_some() && self.cached == (base, pw, ph) {
            return;
        }

        let blob = Blob::new(Arc::new(rasterize_gradient(pw, ph, base)));
        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, pw, ph));
        self.cached = (base, pw, ph);
    }
}

impl View for BrightnessSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            let SliderUpdate::Color(c) = *update;
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
                self.slide(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.slide(e.pos.x);
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
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        let radius = constants::THUMB_RADIUS;
        let thumb = (radius + (1.0 - self.hsb.2) * (w - 2.0 * radius), h / 2.0);
        cx.stroke(
            &Circle::new(thumb, radius),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(thumb, radius - 1.5),
            Color::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
    }
}
