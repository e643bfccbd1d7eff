//! confetti-burst: click-to-burst confetti particles on an HTML canvas.
//!
//! This crate provides a WASM canvas component that fires a burst of confetti at
//! every mouse-down, with simple per-frame physics, spin, flutter and fade-out.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;

pub use components::confetti::{ConfettiCanvas, ConfettiConfig};
pub use error::ConfettiError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("confetti-burst: logging initialized");
}

/// Parse embedded config text, falling back to defaults on error.
fn parse_config(json_text: &str) -> ConfettiConfig {
	match ConfettiConfig::from_json(json_text) {
		Ok(config) => {
			info!(
				"confetti-burst: loaded config ({} particles per burst, {} frame lifespan)",
				config.particle_count, config.lifespan_frames
			);
			config
		}
		Err(e) => {
			warn!("confetti-burst: {}, using defaults", e);
			ConfettiConfig::default()
		}
	}
}

/// Load configuration from a script element with id="confetti-config".
/// Expected format: a JSON object overriding any `ConfettiConfig` fields.
fn load_config() -> Option<ConfettiConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("confetti-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	Some(parse_config(&json_text))
}

/// Main application component.
/// Loads the config from the DOM and renders the full-viewport confetti canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Confetti" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-confetti">
			<ConfettiCanvas config=config />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_config_overrides() {
		let config = parse_config(r#"{ "particle_count": 12 }"#);
		assert_eq!(config.particle_count, 12);
	}

	#[test]
	fn test_parse_config_falls_back_on_garbage() {
		assert_eq!(parse_config("not json"), ConfettiConfig::default());
	}
}
