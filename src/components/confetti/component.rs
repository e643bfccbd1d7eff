//! Leptos component wrapping the confetti canvas.
//!
//! The component creates a full-viewport canvas, spawns a burst on every
//! mouse-down and keeps the canvas matched to the window size. An animation loop
//! runs via `requestAnimationFrame` and renders one frame per display refresh,
//! forever.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::config::ConfettiConfig;
use super::state::ConfettiState;
use super::surface::{CanvasSurface, viewport_size};
use crate::error::ConfettiError;

/// Bundles the simulation with the surface it draws on.
struct ConfettiContext {
	state: ConfettiState,
	surface: CanvasSurface,
}

/// Seed for the spawner when the config does not pin one.
fn runtime_seed() -> u64 {
	let clock = js_sys::Date::now() as u64;
	let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
	clock ^ (noise << 32)
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) {
	if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		error!(
			"confetti-burst: requestAnimationFrame failed: {}",
			ConfettiError::describe(&e)
		);
	}
}

/// Renders the confetti canvas.
///
/// Click anywhere on the canvas to fire a burst. The canvas fills the viewport and
/// follows window resizes.
#[component]
pub fn ConfettiCanvas(#[prop(optional)] config: ConfettiConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<ConfettiContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let setup = || -> Result<Window, ConfettiError> {
			let window = web_sys::window().ok_or(ConfettiError::NoWindow)?;
			let (w, h) = viewport_size(&window)?;
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);

			let surface = CanvasSurface::new(canvas.clone(), config.double_buffered)?;
			info!(
				"confetti-burst: canvas {}x{} ready (double buffered: {})",
				w,
				h,
				surface.is_double_buffered()
			);
			*context_init.borrow_mut() = Some(ConfettiContext {
				state: ConfettiState::new(config.clone(), w, h, runtime_seed()),
				surface,
			});
			Ok(window)
		};
		let window = match setup() {
			Ok(window) => window,
			Err(e) => {
				error!("confetti-burst: {}", e);
				return;
			}
		};

		let context_resize = context_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = match viewport_size(&win) {
				Ok(size) => size,
				Err(e) => {
					error!("confetti-burst: resize ignored: {}", e);
					return;
				}
			};
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.surface.resize(nw, nh);
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.surface.render_frame(&mut c.state);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					request_frame(&win, cb);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			request_frame(&window, cb);
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.state.spawn_burst(x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="confetti-canvas"
			on:mousedown=on_mousedown
			style="display: block; cursor: pointer;"
		/>
	}
}
