//! The browser canvas, optionally double-buffered.
//!
//! With a back buffer every frame is drawn onto a detached canvas and then copied
//! onto the visible one in a single `drawImage`, so a half-drawn frame is never
//! shown.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::state::ConfettiState;
use crate::error::ConfettiError;

/// Current `innerWidth` x `innerHeight` of the window.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), ConfettiError> {
	let width = window.inner_width().ok().and_then(|v| v.as_f64());
	let height = window.inner_height().ok().and_then(|v| v.as_f64());
	match (width, height) {
		(Some(w), Some(h)) => Ok((w, h)),
		_ => Err(ConfettiError::ViewportUnavailable),
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ConfettiError> {
	canvas
		.get_context("2d")
		.map_err(|e| ConfettiError::ContextUnavailable(ConfettiError::describe(&e)))?
		.ok_or_else(|| ConfettiError::ContextUnavailable("canvas returned no context".into()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| ConfettiError::ContextUnavailable("context is not a 2d context".into()))
}

struct BackBuffer {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl BackBuffer {
	fn new(width: u32, height: u32) -> Result<Self, ConfettiError> {
		let document = web_sys::window()
			.ok_or(ConfettiError::NoWindow)?
			.document()
			.ok_or(ConfettiError::NoDocument)?;
		let canvas: HtmlCanvasElement = document
			.create_element("canvas")
			.map_err(|e| ConfettiError::BackBuffer(ConfettiError::describe(&e)))?
			.dyn_into()
			.map_err(|_| ConfettiError::BackBuffer("created element is not a canvas".into()))?;
		canvas.set_width(width);
		canvas.set_height(height);
		let ctx = context_2d(&canvas)?;
		Ok(Self { canvas, ctx })
	}
}

/// Visible canvas plus an optional detached back buffer of the same size.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	front: CanvasRenderingContext2d,
	back: Option<BackBuffer>,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, double_buffered: bool) -> Result<Self, ConfettiError> {
		let front = context_2d(&canvas)?;
		let back = if double_buffered {
			Some(BackBuffer::new(canvas.width(), canvas.height())?)
		} else {
			None
		};
		Ok(Self {
			canvas,
			front,
			back,
		})
	}

	pub fn is_double_buffered(&self) -> bool {
		self.back.is_some()
	}

	/// Resizes the visible canvas and the back buffer together.
	pub fn resize(&mut self, width: f64, height: f64) {
		let (w, h) = (width as u32, height as u32);
		self.canvas.set_width(w);
		self.canvas.set_height(h);
		if let Some(ref back) = self.back {
			back.canvas.set_width(w);
			back.canvas.set_height(h);
		}
	}

	/// Context that frame drawing should target.
	fn target(&mut self) -> &mut CanvasRenderingContext2d {
		match self.back {
			Some(ref mut back) => &mut back.ctx,
			None => &mut self.front,
		}
	}

	/// Copies the back buffer onto the visible canvas. No-op when single-buffered.
	fn present(&self) {
		if let Some(ref back) = self.back {
			let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
			self.front.clear_rect(0.0, 0.0, w, h);
			let _ = self
				.front
				.draw_image_with_html_canvas_element(&back.canvas, 0.0, 0.0);
		}
	}

	/// Draws one animation frame of `state` and shows it.
	pub fn render_frame(&mut self, state: &mut ConfettiState) {
		state.tick(self.target());
		self.present();
	}
}
