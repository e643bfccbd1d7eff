//! Burst spawning on pointer-down.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::ConfettiConfig;
use super::particles::Particle;
use super::pool::ParticlePool;
use super::theme::Palette;

/// Creates bursts of particles from a seeded RNG.
///
/// Two spawners built with the same seed and palette produce identical bursts.
pub struct Spawner {
	rng: SmallRng,
	palette: Palette,
}

impl Spawner {
	pub fn new(seed: u64, palette: Palette) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
			palette,
		}
	}

	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Appends `config.particle_count` new particles at `(x, y)` and returns how
	/// many were created. No cap is applied to the pool.
	pub fn burst(&mut self, pool: &mut ParticlePool, x: f64, y: f64, config: &ConfettiConfig) -> usize {
		let (rng, palette) = (&mut self.rng, &self.palette);
		pool.extend((0..config.particle_count).map(|_| Particle::new(x, y, config, palette, &mut *rng)));
		debug!(
			"confetti-burst: spawned {} particles at ({}, {}), pool size {}",
			config.particle_count,
			x,
			y,
			pool.len()
		);
		config.particle_count
	}
}
