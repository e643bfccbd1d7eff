//! Click-to-burst confetti on a canvas.
//!
//! Every mouse-down fires a burst of particles from the pointer position:
//! - Per-frame physics with gravity, air resistance and spin
//! - Circles and rectangles whose size oscillates so they appear to flutter
//! - Fade-out over a fixed lifespan, then removal from the pool
//! - Optional double buffering through a detached back-buffer canvas
//!
//! # Example
//!
//! ```ignore
//! use confetti_burst::{ConfettiCanvas, ConfettiConfig};
//!
//! let config = ConfettiConfig { particle_count: 60, ..Default::default() };
//!
//! view! { <ConfettiCanvas config=config /> }
//! ```

mod component;
pub mod config;
pub mod particles;
pub mod pool;
pub mod render;
pub mod spawner;
pub mod state;
mod surface;
pub mod theme;

pub use component::ConfettiCanvas;
pub use config::{ConfettiConfig, ShapeMix};
pub use particles::{Fate, Particle, Shape};
pub use pool::ParticlePool;
pub use render::Surface;
pub use spawner::Spawner;
pub use state::{ConfettiState, Viewport};
pub use theme::{Color, FadePolicy, Palette, PalettePreset};
