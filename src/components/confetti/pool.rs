//! The live particle collection.

use super::config::ConfettiConfig;
use super::particles::{Fate, Particle};
use super::render::Surface;

/// Ordered set of live particles, appended to by bursts and compacted every frame.
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
	particles: Vec<Particle>,
}

impl ParticlePool {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, particle: Particle) {
		self.particles.push(particle);
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
		self.particles.iter()
	}

	/// Updates every particle once, draws the survivors and drops the expired.
	///
	/// Runs as a single `retain_mut` pass: each particle is visited exactly once
	/// regardless of how many are removed. Returns the number removed.
	pub fn step<S: Surface + ?Sized>(&mut self, config: &ConfettiConfig, surface: &mut S) -> usize {
		let before = self.particles.len();
		self.particles.retain_mut(|p| match p.update(config) {
			Fate::Alive => {
				p.draw(&mut *surface, config);
				true
			}
			Fate::Expired => false,
		});
		before - self.particles.len()
	}
}

impl Extend<Particle> for ParticlePool {
	fn extend<I: IntoIterator<Item = Particle>>(&mut self, iter: I) {
		self.particles.extend(iter);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::confetti::particles::tests::half_rng;
	use crate::components::confetti::render::recording::RecordingSurface;
	use crate::components::confetti::theme::Palette;

	fn particle_aged(lifespan: u32, x: f64) -> Particle {
		let mut p = Particle::new(
			x,
			0.0,
			&ConfettiConfig::default(),
			&Palette::festive(),
			&mut half_rng(),
		);
		p.lifespan = lifespan;
		p
	}

	#[test]
	fn test_step_removes_expired_without_skipping() {
		let config = ConfettiConfig::default();
		let mut pool = ParticlePool::new();
		// Expiring particles sit directly before live ones, the layout a forward
		// splice would mishandle.
		for i in 0..10 {
			let age = if i % 2 == 0 { config.lifespan_frames } else { 5 };
			pool.push(particle_aged(age, i as f64));
		}

		let mut surface = RecordingSurface::default();
		let removed = pool.step(&config, &mut surface);

		assert_eq!(removed, 5);
		assert_eq!(pool.len(), 5);
		assert_eq!(surface.fills(), 5);
		for p in pool.iter() {
			assert_eq!(p.lifespan, 6);
		}
	}

	#[test]
	fn test_consecutive_expiries_are_all_removed() {
		let config = ConfettiConfig::default();
		let mut pool = ParticlePool::new();
		for i in 0..4 {
			pool.push(particle_aged(config.lifespan_frames, i as f64));
		}
		pool.push(particle_aged(0, 99.0));

		let mut surface = RecordingSurface::default();
		assert_eq!(pool.step(&config, &mut surface), 4);
		assert_eq!(pool.len(), 1);
		assert_eq!(pool.iter().next().map(|p| p.lifespan), Some(1));
		assert_eq!(surface.fills(), 1);
	}

	#[test]
	fn test_particle_removed_after_lifespan_frames() {
		let config = ConfettiConfig::default();
		let mut pool = ParticlePool::new();
		pool.push(particle_aged(0, 0.0));

		let mut surface = RecordingSurface::default();
		for _ in 0..config.lifespan_frames {
			assert_eq!(pool.step(&config, &mut surface), 0);
		}
		assert_eq!(pool.len(), 1);
		assert_eq!(surface.fills(), config.lifespan_frames as usize);

		assert_eq!(pool.step(&config, &mut surface), 1);
		assert!(pool.is_empty());
		// Not drawn on its removal frame.
		assert_eq!(surface.fills(), config.lifespan_frames as usize);
	}

	#[test]
	fn test_extend_appends_in_order() {
		let mut pool = ParticlePool::new();
		pool.extend((0..3).map(|i| particle_aged(0, i as f64)));
		let xs: Vec<f64> = pool.iter().map(|p| p.x).collect();
		assert_eq!(xs, vec![0.0, 1.0, 2.0]);
	}
}
