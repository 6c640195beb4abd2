//! Drifting-particle simulation behind the explorer.
//!
//! Pure model, no drawing: the `ui` feature paints it. Particles bounce off
//! the field edges and take their colors from the active palette.

use log::debug;
use rand::Rng;

use crate::color::HexColor;
use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: HexColor,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    speed: f64,
    particles: Vec<Particle>,
}

/// Particle count for a field of the given width.
pub fn particle_count(width: f64) -> usize {
    let by_width = (width.max(0.0) / constants::PARTICLE_SPACING).floor() as usize;
    by_width.min(constants::MAX_PARTICLES)
}

impl ParticleField {
    /// Scatter particles over a `width` × `height` field.
    ///
    /// Each particle takes a random color from `colors`, or `primary` when
    /// `colors` is empty.
    pub fn seed<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        colors: &[HexColor],
        primary: HexColor,
        speed: f64,
        rng: &mut R,
    ) -> Self {
        let count = particle_count(width);
        let particles = (0..count)
            .map(|_| {
                let color = if colors.is_empty() {
                    primary
                } else {
                    colors[rng.random_range(0..colors.len())]
                };
                Particle {
                    x: rng.random::<f64>() * width,
                    y: rng.random::<f64>() * height,
                    radius: rng.random::<f64>() * constants::PARTICLE_RADIUS_SPREAD
                        + constants::PARTICLE_MIN_RADIUS,
                    color,
                    vx: (rng.random::<f64>() - 0.5) * constants::PARTICLE_MAX_SPEED,
                    vy: (rng.random::<f64>() - 0.5) * constants::PARTICLE_MAX_SPEED,
                }
            })
            .collect();
        debug!("seeded {count} particles over {width}x{height}");
        Self {
            width,
            height,
            speed,
            particles,
        }
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx * self.speed;
            p.y += p.vy * self.speed;
            if (p.x <= 0.0 && p.vx < 0.0) || (p.x >= self.width && p.vx > 0.0) {
                p.vx = -p.vx;
            }
            if (p.y <= 0.0 && p.vy < 0.0) || (p.y >= self.height && p.vy > 0.0) {
                p.vy = -p.vy;
            }
        }
    }

    /// Change the bounds. Particles outside a shrunk field are pulled back
    /// onto its edge.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
