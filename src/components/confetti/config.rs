//! Tunables for the confetti simulation.
//!
//! Every field has a default, so an embedded JSON config only needs to name what
//! it overrides.

use serde::Deserialize;

use super::theme::{FadePolicy, PalettePreset};
use crate::error::ConfettiError;

/// Which shapes a burst produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeMix {
	/// Circles and rectangles with equal probability.
	#[default]
	Mixed,
	CirclesOnly,
	RectanglesOnly,
}

/// Complete simulation and rendering configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
	/// Particles created per pointer-down.
	pub particle_count: usize,
	/// Frames a particle lives; it is removed on the first frame its age exceeds this.
	pub lifespan_frames: u32,
	/// Added to `vy` every frame.
	pub gravity: f64,
	/// Fraction of velocity lost every frame.
	pub air_resistance: f64,
	/// Half-width of the firing cone, in degrees from vertical.
	pub firing_spread_deg: f64,
	/// Magnitude of the per-frame rotation; sign is random per particle.
	pub rotation_speed: f64,
	/// Per-frame change of the oscillating size field.
	pub size_step: f64,
	pub circle_radius_max: f64,
	pub circle_radius_y: f64,
	pub rect_width_max: f64,
	pub rect_height: f64,
	pub palette: PalettePreset,
	pub fade: FadePolicy,
	pub shapes: ShapeMix,
	/// Draw to a detached back buffer and copy it to the visible canvas once per frame.
	pub double_buffered: bool,
	/// Fixed RNG seed. When absent the browser clock seeds the spawner.
	pub seed: Option<u64>,
}

impl Default for ConfettiConfig {
	fn default() -> Self {
		Self {
			particle_count: 100,
			lifespan_frames: 200,
			gravity: 0.06,
			air_resistance: 0.02,
			firing_spread_deg: 20.0,
			rotation_speed: 0.02,
			size_step: 0.2,
			circle_radius_max: 5.0,
			circle_radius_y: 5.0,
			rect_width_max: 10.0,
			rect_height: 10.0,
			palette: PalettePreset::default(),
			fade: FadePolicy::default(),
			shapes: ShapeMix::default(),
			double_buffered: true,
			seed: None,
		}
	}
}

impl ConfettiConfig {
	/// Parses a (possibly partial) JSON object on top of the defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfettiError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Firing cone half-width in radians.
	pub fn firing_spread_rad(&self) -> f64 {
		self.firing_spread_deg.to_radians()
	}
}
