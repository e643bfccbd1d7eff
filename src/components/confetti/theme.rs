//! Visual theming for the confetti.
//!
//! Provides the color type, palette presets and the fade-out policy.

use serde::Deserialize;

/// RGB color with a separate alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` string; alpha is always written out.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// A fixed set of confetti colors, sampled uniformly per particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	/// Three primaries: tomato, steel blue, gold.
	pub fn classic() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 99, 71),  // Tomato
				Color::rgb(70, 130, 180), // Steel blue
				Color::rgb(255, 215, 0),  // Gold
			],
		}
	}

	/// The primaries plus four pastels (default).
	pub fn festive() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 99, 71),   // Tomato
				Color::rgb(70, 130, 180),  // Steel blue
				Color::rgb(255, 215, 0),   // Gold
				Color::rgb(255, 192, 203), // Pink
				Color::rgb(173, 216, 230), // Light blue
				Color::rgb(255, 218, 185), // Peach
				Color::rgb(240, 128, 128), // Light coral
			],
		}
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Maps a unit sample in `[0, 1)` onto a palette entry.
	pub fn pick(&self, unit: f64) -> Color {
		let idx = ((unit * self.colors.len() as f64).floor() as usize).min(self.colors.len() - 1);
		self.colors[idx]
	}
}

/// Named palette presets selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalettePreset {
	Classic,
	#[default]
	Festive,
}

impl PalettePreset {
	pub fn palette(self) -> Palette {
		match self {
			PalettePreset::Classic => Palette::classic(),
			PalettePreset::Festive => Palette::festive(),
		}
	}
}

/// Whether particles fade out as they age.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadePolicy {
	/// Alpha falls linearly from 1 at birth to 0 at the end of the lifespan.
	#[default]
	FadeOut,
	/// Always fully opaque.
	Opaque,
}

impl FadePolicy {
	/// Alpha for a particle `lifespan` frames old out of `lifespan_frames`.
	pub fn alpha(self, lifespan: u32, lifespan_frames: u32) -> f64 {
		match self {
			FadePolicy::Opaque => 1.0,
			FadePolicy::FadeOut => {
				if lifespan_frames == 0 {
					return 0.0;
				}
				(1.0 - lifespan as f64 / lifespan_frames as f64).clamp(0.0, 1.0)
			}
		}
	}
}
