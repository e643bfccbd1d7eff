//! Error types for confetti-burst.
//!
//! The simulation itself cannot fail; these cover browser setup and config parsing.

use thiserror::Error;

/// Errors raised while wiring the animation into the page.
#[derive(Debug, Error)]
pub enum ConfettiError {
	/// No global `window` (not running in a browser main thread).
	#[error("no global window available")]
	NoWindow,

	/// The window has no document attached.
	#[error("window has no document")]
	NoDocument,

	/// `window.innerWidth` / `innerHeight` could not be read as numbers.
	#[error("viewport size unavailable")]
	ViewportUnavailable,

	/// The canvas refused to hand out a 2D rendering context.
	#[error("2d rendering context unavailable: {0}")]
	ContextUnavailable(String),

	/// The detached back-buffer canvas could not be created.
	#[error("back buffer creation failed: {0}")]
	BackBuffer(String),

	/// Embedded JSON configuration failed to parse.
	#[error("invalid confetti config: {0}")]
	Config(#[from] serde_json::Error),
}

impl ConfettiError {
	/// Formats a raw `JsValue` error for inclusion in a message.
	pub(crate) fn describe(value: &wasm_bindgen::JsValue) -> String {
		value.as_string().unwrap_or_else(|| format!("{value:?}"))
	}
}
