//! Button wrapper with the orbiting particle overlay.
//!
//! The canvas sits behind the button, twice its width and three times its
//! height so the cloud has room to breathe, and redraws on an
//! animation-frame loop owned by the component. Hover state and the
//! normalized pointer offset come straight from button events.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::theme::OrbitStyle;

use super::cloud::OrbitCloud;

const CANVAS_WIDTH_FACTOR: f64 = 2.0;
const CANVAS_HEIGHT_FACTOR: f64 = 3.0;

fn draw(cloud: &OrbitCloud, ctx: &CanvasRenderingContext2d, style: &OrbitStyle, w: f64, h: f64) {
	ctx.clear_rect(0.0, 0.0, w, h);
	if cloud.is_faded_out() {
		return;
	}

	ctx.set_global_alpha(cloud.opacity);
	// Matches the additive glow of the reference effect.
	let _ = ctx.set_global_composite_operation("lighter");
	cloud.visit_projected(w, h, |x, y, radius, color_index| {
		ctx.set_fill_style_str(&style.color(color_index).to_css());
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
		ctx.fill();
	});
	let _ = ctx.set_global_composite_operation("source-over");
	ctx.set_global_alpha(1.0);
}

/// A button surrounded by a particle cloud that wakes on hover.
#[component]
pub fn OrbitButton(style: OrbitStyle, children: Children) -> impl IntoView {
	let wrapper_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let button_ref = NodeRef::<leptos::html::Button>::new();

	let cloud = Rc::new(RefCell::new(OrbitCloud::new(
		js_sys::Date::now() % 100_000.0,
	)));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let cloud_enter = cloud.clone();
	let on_mouseenter = move |_: MouseEvent| {
		cloud_enter.borrow_mut().set_hover(true);
	};

	let cloud_leave = cloud.clone();
	let on_mouseleave = move |_: MouseEvent| {
		cloud_leave.borrow_mut().set_hover(false);
	};

	let cloud_move = cloud.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(button) = button_ref.get() else {
			return;
		};
		let button: web_sys::HtmlButtonElement = button.into();
		let rect = button.get_bounding_client_rect();
		if rect.width() <= 0.0 || rect.height() <= 0.0 {
			return;
		}
		let nx = ((ev.client_x() as f64 - rect.left()) / rect.width() - 0.5) * 2.0;
		let ny = -((ev.client_y() as f64 - rect.top()) / rect.height() - 0.5) * 2.0;
		cloud_move.borrow_mut().set_pointer(nx, ny);
	};

	let (cloud_init, animate_init, frame_init, resize_init) = (
		cloud.clone(),
		animate.clone(),
		frame_handle.clone(),
		resize_cb.clone(),
	);

	Effect::new(move |_| {
		let (Some(wrapper), Some(canvas)) = (wrapper_ref.get(), canvas_ref.get()) else {
			return;
		};
		let wrapper: web_sys::HtmlDivElement = wrapper.into();
		let canvas: HtmlCanvasElement = canvas.into();
		let window = web_sys::window().unwrap();

		let size_canvas = {
			let (wrapper, canvas) = (wrapper.clone(), canvas.clone());
			move || {
				let rect = wrapper.get_bounding_client_rect();
				canvas.set_width((rect.width() * CANVAS_WIDTH_FACTOR) as u32);
				canvas.set_height((rect.height() * CANVAS_HEIGHT_FACTOR) as u32);
			}
		};
		size_canvas();

		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			log::warn!("orbit: no 2d context, skipping effect");
			return;
		};
		let ctx: CanvasRenderingContext2d = ctx.dyn_into().unwrap();

		*resize_init.borrow_mut() = Some(Closure::new(size_canvas));
		if let Some(ref cb) = *resize_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (cloud_anim, animate_inner, frame_anim) =
			(cloud_init.clone(), animate_init.clone(), frame_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			{
				let mut cloud = cloud_anim.borrow_mut();
				cloud.step();
				draw(
					&cloud,
					&ctx,
					&style,
					canvas.width() as f64,
					canvas.height() as f64,
				);
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
		if let Some(cb) = resize_cb.borrow_mut().take() {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<div
			node_ref=wrapper_ref
			class="orbit-button-wrapper"
			style="position: relative; display: inline-block;"
		>
			<canvas
				node_ref=canvas_ref
				class="orbit-button-canvas"
				style="position: absolute; left: 50%; top: 50%; transform: translate(-50%, -50%); \
				       width: 200%; height: 300%; pointer-events: none; z-index: 0;"
			/>
			<button
				node_ref=button_ref
				class="orbit-btn"
				style="position: relative; z-index: 1;"
				on:mouseenter=on_mouseenter
				on:mouseleave=on_mouseleave
				on:mousemove=on_mousemove
			>
				{children()}
			</button>
		</div>
	}
}
