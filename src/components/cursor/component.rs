//! Custom cursor: a dot that tracks the pointer and a ring that trails it.
//!
//! Both elements chase the last known pointer position with exponential
//! smoothing on an animation-frame loop. They stay hidden until the pointer
//! first moves and fade out whenever it leaves the document, mirroring the
//! page's original behavior. Hiding the native cursor is left to the page's
//! stylesheet.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use crate::theme::CursorStyle;

use super::follower::Follower;

const DOT_SIZE: f64 = 24.0;
const RING_SIZE: f64 = 40.0;
const DOT_RATE: f64 = 0.2;
const RING_RATE: f64 = 0.1;

struct CursorState {
	dot: Follower,
	ring: Follower,
	seen_pointer: bool,
}

#[derive(Default)]
struct Listeners {
	mousemove: Option<Closure<dyn FnMut(MouseEvent)>>,
	mouseenter: Option<Closure<dyn FnMut(MouseEvent)>>,
	mouseleave: Option<Closure<dyn FnMut(MouseEvent)>>,
}

/// Mounts the cursor dot and trailing ring.
#[component]
pub fn CursorGlow(style: CursorStyle) -> impl IntoView {
	let dot_ref = NodeRef::<leptos::html::Div>::new();
	let ring_ref = NodeRef::<leptos::html::Div>::new();

	let target: Rc<RefCell<Option<(f64, f64)>>> = Rc::new(RefCell::new(None));
	let state = Rc::new(RefCell::new(CursorState {
		dot: Follower::new(DOT_RATE),
		ring: Follower::new(RING_RATE),
		seen_pointer: false,
	}));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Listeners>> = Rc::new(RefCell::new(Listeners::default()));

	let (target_init, state_init, animate_init, frame_init, listeners_init) = (
		target.clone(),
		state.clone(),
		animate.clone(),
		frame_handle.clone(),
		listeners.clone(),
	);

	Effect::new(move |_| {
		let (Some(dot), Some(ring)) = (dot_ref.get(), ring_ref.get()) else {
			return;
		};
		let dot: web_sys::HtmlDivElement = dot.into();
		let ring: web_sys::HtmlDivElement = ring.into();
		let window = web_sys::window().unwrap();
		let document = window.document().unwrap();

		let mut l = listeners_init.borrow_mut();

		let (target_move, dot_move, ring_move) = (target_init.clone(), dot.clone(), ring.clone());
		l.mousemove = Some(Closure::new(move |ev: MouseEvent| {
			*target_move.borrow_mut() = Some((ev.client_x() as f64, ev.client_y() as f64));
			let _ = web_sys::HtmlElement::style(&dot_move).set_property("opacity", "1");
			let _ = web_sys::HtmlElement::style(&ring_move).set_property("opacity", "1");
		}));

		let (dot_enter, ring_enter) = (dot.clone(), ring.clone());
		l.mouseenter = Some(Closure::new(move |_: MouseEvent| {
			let _ = web_sys::HtmlElement::style(&dot_enter).set_property("opacity", "1");
			let _ = web_sys::HtmlElement::style(&ring_enter).set_property("opacity", "1");
		}));

		let (dot_leave, ring_leave) = (dot.clone(), ring.clone());
		l.mouseleave = Some(Closure::new(move |_: MouseEvent| {
			let _ = web_sys::HtmlElement::style(&dot_leave).set_property("opacity", "0");
			let _ = web_sys::HtmlElement::style(&ring_leave).set_property("opacity", "0");
		}));

		if let Some(ref cb) = l.mousemove {
			let _ = document
				.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = l.mouseenter {
			let _ = document
				.add_event_listener_with_callback("mouseenter", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = l.mouseleave {
			let _ = document
				.add_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
		}
		drop(l);

		let (target_anim, state_anim, animate_inner, frame_anim) = (
			target_init.clone(),
			state_init.clone(),
			animate_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some((tx, ty)) = *target_anim.borrow() {
				let mut s = state_anim.borrow_mut();
				if !s.seen_pointer {
					// Teleport on first contact instead of sweeping in
					// from the origin.
					s.dot.jump_to(tx, ty);
					s.ring.jump_to(tx, ty);
					s.seen_pointer = true;
				}
				s.dot.step_toward(tx, ty);
				s.ring.step_toward(tx, ty);

				let _ = web_sys::HtmlElement::style(&dot)
					.set_property("left", &format!("{}px", s.dot.x - DOT_SIZE / 2.0));
				let _ = web_sys::HtmlElement::style(&dot)
					.set_property("top", &format!("{}px", s.dot.y - DOT_SIZE / 2.0));
				let _ = web_sys::HtmlElement::style(&ring)
					.set_property("left", &format!("{}px", s.ring.x - RING_SIZE / 2.0));
				let _ = web_sys::HtmlElement::style(&ring)
					.set_property("top", &format!("{}px", s.ring.y - RING_SIZE / 2.0));
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

		if let Some(document) = window.document() {
			let mut l = listeners.borrow_mut();
			if let Some(cb) = l.mousemove.take() {
				let _ = document
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = l.mouseenter.take() {
				let _ = document
					.remove_event_listener_with_callback("mouseenter", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = l.mouseleave.take() {
				let _ = document
					.remove_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
			}
		}
	});

	let dot_style = format!(
		"position: fixed; width: {DOT_SIZE}px; height: {DOT_SIZE}px; border-radius: 50%; \
		 background: {}; pointer-events: none; z-index: 9999; opacity: 0; \
		 transition: opacity 0.2s, transform 0.2s;",
		style.dot.to_css()
	);
	let ring_style = format!(
		"position: fixed; width: {RING_SIZE}px; height: {RING_SIZE}px; border-radius: 50%; \
		 border: 2px solid {}; pointer-events: none; z-index: 9998; opacity: 0; \
		 transition: opacity 0.2s, transform 0.2s;",
		style.ring.to_css()
	);

	view! {
		<div node_ref=dot_ref class="cursor-dot" style=dot_style />
		<div node_ref=ring_ref class="cursor-ring" style=ring_style />
	}
}
