//! Confetti particles and their per-frame physics.
//!
//! A particle is one piece of confetti: a position and velocity integrated once
//! per frame, a fixed color, a spin, and a size that oscillates between zero and
//! a shape-specific maximum so the piece appears to flip as it falls.

use std::f64::consts::TAU;

use rand::Rng;
use rand::distributions::{Distribution, Standard};

use super::config::{ConfettiConfig, ShapeMix};
use super::theme::{Color, Palette};

/// Shape of a particle together with its oscillating size field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
	/// Ellipse with horizontal radius `radius_x` and a fixed vertical radius.
	Circle { radius_x: f64 },
	/// Rectangle with oscillating `width` and a fixed height.
	Rectangle { width: f64 },
}

/// Outcome of a single update step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
	Alive,
	/// Lifespan exceeded; the particle must be dropped and not drawn this frame.
	Expired,
}

/// A single piece of confetti.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Frames lived so far.
	pub lifespan: u32,
	pub color: Color,
	pub rotation_angle: f64,
	pub rotation_speed: f64,
	pub shape: Shape,
	/// Direction of the size oscillation.
	pub shrinking: bool,
}

/// Uniform sample in `[0, 1)`.
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	Standard.sample(rng)
}

/// Integer-valued size in `0..=max`, drawn uniformly.
fn initial_size<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
	(unit(rng) * (max + 1.0)).floor().min(max)
}

impl Particle {
	/// Creates a particle at `(x, y)` fired upward inside the configured cone.
	pub fn new<R: Rng + ?Sized>(
		x: f64,
		y: f64,
		config: &ConfettiConfig,
		palette: &Palette,
		rng: &mut R,
	) -> Self {
		let color = palette.pick(unit(rng));

		let spread = config.firing_spread_rad();
		let magnitude = unit(rng) * spread;
		let side = if unit(rng) < 0.5 { -1.0 } else { 1.0 };
		let angle = -magnitude * side;

		let vy = -(unit(rng) * 12.0 + 9.0);
		let vx = angle.tan() * vy.abs();

		let rectangle = match config.shapes {
			ShapeMix::Mixed => unit(rng) < 0.5,
			ShapeMix::CirclesOnly => false,
			ShapeMix::RectanglesOnly => true,
		};
		let shape = if rectangle {
			Shape::Rectangle {
				width: initial_size(rng, config.rect_width_max),
			}
		} else {
			Shape::Circle {
				radius_x: initial_size(rng, config.circle_radius_max),
			}
		};

		let rotation_angle = unit(rng) * TAU;
		let rotation_speed = if unit(rng) > 0.5 {
			config.rotation_speed
		} else {
			-config.rotation_speed
		};
		let shrinking = unit(rng) < 0.5;

		Self {
			x,
			y,
			vx,
			vy,
			lifespan: 0,
			color,
			rotation_angle,
			rotation_speed,
			shape,
			shrinking,
		}
	}

	/// Gravity, air resistance and position for one frame.
	pub fn update_physics(&mut self, config: &ConfettiConfig) {
		self.vy += config.gravity;

		let damping = 1.0 - config.air_resistance;
		self.vx *= damping;
		self.vy *= damping;

		self.x += self.vx;
		self.y += self.vy;
	}

	/// Advances the size oscillation of whichever shape this is.
	pub fn update_size(&mut self, config: &ConfettiConfig) {
		match &mut self.shape {
			Shape::Circle { radius_x } => oscillate(
				radius_x,
				&mut self.shrinking,
				config.size_step,
				config.circle_radius_max,
			),
			Shape::Rectangle { width } => oscillate(
				width,
				&mut self.shrinking,
				config.size_step,
				config.rect_width_max,
			),
		}
	}

	/// Advances the particle one frame and reports whether it outlived its lifespan.
	pub fn update(&mut self, config: &ConfettiConfig) -> Fate {
		self.update_physics(config);
		self.update_size(config);
		self.rotation_angle += self.rotation_speed;
		self.lifespan += 1;

		if self.lifespan > config.lifespan_frames {
			Fate::Expired
		} else {
			Fate::Alive
		}
	}

	/// Geometric center, used as the rotation pivot when drawing.
	pub fn center(&self, config: &ConfettiConfig) -> (f64, f64) {
		match self.shape {
			Shape::Circle { .. } => (self.x, self.y),
			Shape::Rectangle { width } => (self.x + width / 2.0, self.y + config.rect_height / 2.0),
		}
	}
}

/// Steps `value` by `step` toward 0 or `max` depending on `shrinking`, clamping at
/// the bounds and reversing direction when a bound is reached (inclusive).
pub fn oscillate(value: &mut f64, shrinking: &mut bool, step: f64, max: f64) {
	if *shrinking {
		*value -= step;
	} else {
		*value += step;
	}

	if *value <= 0.0 {
		*value = 0.0;
		*shrinking = false;
	} else if *value >= max {
		*value = max;
		*shrinking = true;
	}
}
