//! Animation state driven once per display frame.
//!
//! Owns the configuration, the particle pool and the spawner. Pointer events
//! call [`ConfettiState::spawn_burst`]; the frame loop calls
//! [`ConfettiState::tick`]. Both run on the browser's single event thread, so
//! the state is shared through `Rc<RefCell<_>>` rather than any lock.

use super::config::ConfettiConfig;
use super::pool::ParticlePool;
use super::render::Surface;
use super::spawner::Spawner;

/// Drawing surface dimensions in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// Core confetti state: the pool plus everything needed to grow and advance it.
pub struct ConfettiState {
	pub config: ConfettiConfig,
	pub pool: ParticlePool,
	pub viewport: Viewport,
	/// Frames rendered since creation.
	pub frame: u64,
	spawner: Spawner,
}

impl ConfettiState {
	pub fn new(config: ConfettiConfig, width: f64, height: f64, seed: u64) -> Self {
		let spawner = Spawner::new(config.seed.unwrap_or(seed), config.palette.palette());
		Self {
			config,
			pool: ParticlePool::new(),
			viewport: Viewport { width, height },
			frame: 0,
			spawner,
		}
	}

	/// Pointer-down handler: adds one burst at `(x, y)`.
	pub fn spawn_burst(&mut self, x: f64, y: f64) -> usize {
		self.spawner.burst(&mut self.pool, x, y, &self.config)
	}

	/// Renders one frame: clear, update and draw every live particle, drop the
	/// expired ones. Physics advances one fixed step per call.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		surface.clear(self.viewport.width, self.viewport.height);
		self.pool.step(&self.config, surface);
		self.frame += 1;
	}

	/// Tracks the new surface size. Particles are left untouched.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport { width, height };
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::confetti::particles::Particle;
	use crate::components::confetti::render::recording::{Op, RecordingSurface};

	fn state() -> ConfettiState {
		ConfettiState::new(ConfettiConfig::default(), 800.0, 600.0, 1234)
	}

	#[test]
	fn test_tick_clears_full_viewport_first() {
		let mut s = state();
		s.spawn_burst(10.0, 10.0);
		let mut surface = RecordingSurface::default();
		s.tick(&mut surface);

		assert_eq!(surface.ops.first(), Some(&Op::Clear(800.0, 600.0)));
		assert_eq!(surface.fills(), 100);
		assert_eq!(s.frame, 1);
	}

	#[test]
	fn test_tick_with_empty_pool_only_clears() {
		let mut s = state();
		let mut surface = RecordingSurface::default();
		s.tick(&mut surface);
		assert_eq!(surface.ops, vec![Op::Clear(800.0, 600.0)]);
	}

	#[test]
	fn test_resize_does_not_touch_particles() {
		let mut s = state();
		s.spawn_burst(50.0, 60.0);
		let mut surface = RecordingSurface::default();
		s.tick(&mut surface);
		let before: Vec<Particle> = s.pool.iter().cloned().collect();

		s.resize(1920.0, 1080.0);

		assert_eq!(
			s.viewport,
			Viewport {
				width: 1920.0,
				height: 1080.0
			}
		);
		let after: Vec<Particle> = s.pool.iter().cloned().collect();
		assert_eq!(before, after);

		let mut surface = RecordingSurface::default();
		s.tick(&mut surface);
		assert_eq!(surface.ops.first(), Some(&Op::Clear(1920.0, 1080.0)));
	}

	#[test]
	fn test_burst_expires_after_lifespan() {
		let mut s = state();
		s.spawn_burst(0.0, 0.0);
		let mut surface = RecordingSurface::default();
		for _ in 0..s.config.lifespan_frames {
			s.tick(&mut surface);
		}
		assert_eq!(s.pool.len(), 100);
		s.tick(&mut surface);
		assert!(s.pool.is_empty());
	}

	#[test]
	fn test_config_seed_overrides_runtime_seed() {
		let config = ConfettiConfig {
			seed: Some(9),
			..ConfettiConfig::default()
		};
		let mut a = ConfettiState::new(config.clone(), 100.0, 100.0, 1);
		let mut b = ConfettiState::new(config, 100.0, 100.0, 2);
		a.spawn_burst(5.0, 5.0);
		b.spawn_burst(5.0, 5.0);
		assert!(a.pool.iter().eq(b.pool.iter()));
	}
}
