//! Sizing, timing, and styling constants for the explorer.

/// Horizontal pixels per particle before the cap applies
pub const PARTICLE_SPACING: f64 = 20.0;

/// Upper bound on background particles
pub const MAX_PARTICLES: usize = 50;

/// Smallest particle radius
pub const PARTICLE_MIN_RADIUS: f64 = 2.0;

/// Random radius added on top of the minimum
pub const PARTICLE_RADIUS_SPREAD: f64 = 5.0;

/// Full width of the per-axis velocity range, centered on zero
pub const PARTICLE_MAX_SPEED: f64 = 1.5;

/// Particle paint alpha (half transparent)
#[cfg(feature = "ui")]
pub const PARTICLE_ALPHA: u8 = 0x80;

/// Speed multiplier while "racing"
#[cfg(feature = "ui")]
pub const RACING_SPEED: f64 = 2.5;

/// Animation frame interval
#[cfg(feature = "ui")]
pub const FRAME_MILLIS: u64 = 16;

/// How long the copy button shows its check mark
#[cfg(feature = "ui")]
pub const COPIED_MILLIS: u64 = 2000;

/// Small swatch side
#[cfg(feature = "ui")]
pub const SWATCH_SM: f32 = 48.0;

/// Medium swatch side
#[cfg(feature = "ui")]
pub const SWATCH_MD: f32 = 80.0;

/// Large swatch side
#[cfg(feature = "ui")]
pub const SWATCH_LG: f32 = 112.0;

/// Border radius for swatches and panels
#[cfg(feature = "ui")]
pub const RADIUS: f32 = 6.0;

/// Gap between elements
#[cfg(feature = "ui")]
pub const GAP: f32 = 8.0;

/// Padding around panels
#[cfg(feature = "ui")]
pub const PADDING: f32 = 16.0;

/// Height of the selected-color banner
#[cfg(feature = "ui")]
pub const DISPLAY_HEIGHT: f32 = 160.0;

/// Numeric input field width
#[cfg(feature = "ui")]
pub const INPUT_WIDTH: f32 = 40.0;

/// Hex input field width
#[cfg(feature = "ui")]
pub const HEX_INPUT_WIDTH: f32 = 96.0;

/// Input font size
#[cfg(feature = "ui")]
pub const INPUT_FONT: f32 = 12.0;

/// Label font size
#[cfg(feature = "ui")]
pub const LABEL_FONT: f32 = 11.0;

/// Section heading font size
#[cfg(feature = "ui")]
pub const HEADING_FONT: f32 = 20.0;

/// Color wheel side length
#[cfg(feature = "ui")]
pub const WHEEL_SIZE: f32 = 180.0;

/// Resolution the wheel is rasterized at before scaling
#[cfg(feature = "ui")]
pub const WHEEL_RASTER_SIZE: u32 = 512;

/// Cursor circle radius on the wheel
#[cfg(feature = "ui")]
pub const CURSOR_RADIUS: f64 = 8.0;

/// Brightness slider track height
#[cfg(feature = "ui")]
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on the brightness slider
#[cfg(feature = "ui")]
pub const THUMB_RADIUS: f64 = 7.0;
