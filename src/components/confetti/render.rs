//! Canvas rendering for the confetti.
//!
//! Drawing goes through the [`Surface`] trait, a thin slice of the 2D canvas API.
//! The browser implementation forwards to `CanvasRenderingContext2d`; tests record
//! the calls instead.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::config::ConfettiConfig;
use super::particles::{Particle, Shape};

/// Immediate-mode 2D drawing target.
pub trait Surface {
	fn save(&mut self);
	fn restore(&mut self);
	fn translate(&mut self, x: f64, y: f64);
	fn rotate(&mut self, angle: f64);
	fn begin_path(&mut self);
	fn ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64);
	fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn set_fill_style(&mut self, style: &str);
	fn fill(&mut self);
	fn clear(&mut self, width: f64, height: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn rotate(&mut self, angle: f64) {
		let _ = CanvasRenderingContext2d::rotate(self, angle);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64) {
		let _ = CanvasRenderingContext2d::ellipse(self, x, y, radius_x, radius_y, 0.0, 0.0, TAU);
	}

	fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::rect(self, x, y, width, height);
	}

	fn set_fill_style(&mut self, style: &str) {
		self.set_fill_style_str(style);
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}
}

impl Particle {
	/// CSS fill for the particle's color at its current age.
	pub fn fill_style(&self, config: &ConfettiConfig) -> String {
		self.color
			.with_alpha(config.fade.alpha(self.lifespan, config.lifespan_frames))
			.to_css()
	}

	/// Paints the particle rotated about its own center.
	///
	/// The transform is scoped with save/restore so it never leaks into the next
	/// particle.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, config: &ConfettiConfig) {
		let (cx, cy) = self.center(config);

		surface.save();
		surface.begin_path();
		surface.translate(cx, cy);
		surface.rotate(self.rotation_angle);
		surface.translate(-cx, -cy);

		match self.shape {
			Shape::Circle { radius_x } => {
				surface.ellipse(self.x, self.y, radius_x, config.circle_radius_y)
			}
			Shape::Rectangle { width } => surface.rect(self.x, self.y, width, config.rect_height),
		}

		surface.set_fill_style(&self.fill_style(config));
		surface.fill();
		surface.restore();
	}
}


#[cfg(test)]
mod tests {
	use super::recording::{Op, RecordingSurface};
	use super::*;
	use crate::components::confetti::particles::tests::half_rng;
	use crate::components::confetti::theme::{FadePolicy, Palette};

	fn particle() -> Particle {
		Particle::new(
			10.0,
			20.0,
			&ConfettiConfig::default(),
			&Palette::festive(),
			&mut half_rng(),
		)
	}

	#[test]
	fn test_draw_circle_sequence() {
		let config = ConfettiConfig::default();
		let mut p = particle();
		p.shape = Shape::Circle { radius_x: 3.0 };
		p.rotation_angle = 1.5;
		p.lifespan = 100;

		let mut surface = RecordingSurface::default();
		p.draw(&mut surface, &config);

		assert_eq!(
			surface.ops,
			vec![
				Op::Save,
				Op::BeginPath,
				Op::Translate(10.0, 20.0),
				Op::Rotate(1.5),
				Op::Translate(-10.0, -20.0),
				Op::Ellipse(10.0, 20.0, 3.0, 5.0),
				Op::FillStyle("rgba(255, 192, 203, 0.5)".to_string()),
				Op::Fill,
				Op::Restore,
			]
		);
	}

	#[test]
	fn test_draw_rectangle_rotates_about_center() {
		let config = ConfettiConfig::default();
		let mut p = particle();
		p.shape = Shape::Rectangle { width: 4.0 };
		p.rotation_angle = 0.25;

		let mut surface = RecordingSurface::default();
		p.draw(&mut surface, &config);

		assert_eq!(surface.ops[2], Op::Translate(12.0, 25.0));
		assert_eq!(surface.ops[4], Op::Translate(-12.0, -25.0));
		assert_eq!(surface.ops[5], Op::Rect(10.0, 20.0, 4.0, 10.0));
	}

	#[test]
	fn test_draw_balances_save_restore() {
		let config = ConfettiConfig::default();
		let mut surface = RecordingSurface::default();
		for _ in 0..3 {
			particle().draw(&mut surface, &config);
		}
		let mut depth = 0i32;
		for op in &surface.ops {
			match op {
				Op::Save => depth += 1,
				Op::Restore => depth -= 1,
				Op::Fill => assert_eq!(depth, 1),
				_ => {}
			}
			assert!(depth >= 0);
		}
		assert_eq!(depth, 0);
	}

	#[test]
	fn test_fill_style_respects_fade_policy() {
		let mut p = particle();
		p.lifespan = 50;
		let fade = ConfettiConfig::default();
		let opaque = ConfettiConfig {
			fade: FadePolicy::Opaque,
			..ConfettiConfig::default()
		};
		assert_eq!(p.fill_style(&fade), "rgba(255, 192, 203, 0.75)");
		assert_eq!(p.fill_style(&opaque), "rgba(255, 192, 203, 1)");
	}
}
