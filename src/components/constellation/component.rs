//! Leptos component wrapping the constellation canvas.
//!
//! The component creates a full-viewport canvas and wires window-level
//! pointer and resize listeners plus a `visibilitychange` hook that pauses
//! the simulation while the tab is hidden. An animation loop runs via
//! `requestAnimationFrame`; the pending frame handle and every closure are
//! retained so the loop can be cancelled and the listeners detached when the
//! component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::theme::ConstellationStyle;

use super::field::ParticleField;
use super::render;

/// Event closures kept alive until unmount so they can be detached.
#[derive(Default)]
struct Listeners {
	mousemove: Option<Closure<dyn FnMut(MouseEvent)>>,
	mouseleave: Option<Closure<dyn FnMut(MouseEvent)>>,
	resize: Option<Closure<dyn FnMut()>>,
	visibility: Option<Closure<dyn FnMut()>>,
}

/// Renders the pointer-reactive constellation behind the page content.
///
/// The canvas fills the viewport and ignores pointer events; movement is
/// observed on the window so particles react through overlaying content.
/// If the 2d context is unavailable the component renders an inert canvas
/// and skips the effect entirely.
#[component]
pub fn ConstellationCanvas(style: ConstellationStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Listeners>> = Rc::new(RefCell::new(Listeners::default()));

	let (field_init, animate_init, frame_init, listeners_init) = (
		field.clone(),
		animate.clone(),
		frame_handle.clone(),
		listeners.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		let document = window.document().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			log::warn!("constellation: no 2d context, skipping effect");
			return;
		};
		let ctx: CanvasRenderingContext2d = ctx.dyn_into().unwrap();

		// Offset the sampling seed per page load so each visit gets its
		// own sky.
		let seed = js_sys::Date::now() % 100_000.0;
		*field_init.borrow_mut() = Some(ParticleField::new_seeded(w, h, seed));

		let mut l = listeners_init.borrow_mut();

		let field_move = field_init.clone();
		l.mousemove = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut f) = *field_move.borrow_mut() {
				f.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));

		let field_leave = field_init.clone();
		l.mouseleave = Some(Closure::new(move |_: MouseEvent| {
			if let Some(ref mut f) = *field_leave.borrow_mut() {
				f.clear_pointer();
			}
		}));

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		l.resize = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));

		let (field_vis, document_vis) = (field_init.clone(), document.clone());
		l.visibility = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_vis.borrow_mut() {
				f.running = !document_vis.hidden();
			}
		}));

		if let Some(ref cb) = l.mousemove {
			let _ = window
				.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = l.mouseleave {
			let _ = document
				.add_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = l.resize {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = l.visibility {
			let _ = document
				.add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref());
		}
		drop(l);

		let (field_anim, animate_inner, frame_anim) = (
			field_init.clone(),
			animate_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				if f.running {
					f.step();
					render::render(f, &ctx, &style);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				*frame_anim.borrow_mut() = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok();
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			*frame_init.borrow_mut() = window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.ok();
		}
	});

	on_cleanup(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(id) = frame_handle.borrow_mut().take() {
			let _ = window.cancel_animation_frame(id);
		}
		*animate.borrow_mut() = None;

		let mut l = listeners.borrow_mut();
		if let Some(cb) = l.mousemove.take() {
			let _ = window
				.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = l.resize.take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some(document) = window.document() {
			if let Some(cb) = l.mouseleave.take() {
				let _ = document
					.remove_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = l.visibility.take() {
				let _ = document.remove_event_listener_with_callback(
					"visibilitychange",
					cb.as_ref().unchecked_ref(),
				);
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="constellation-canvas"
			style="position: fixed; inset: 0; z-index: 0; display: block; pointer-events: none;"
		/>
	}
}
