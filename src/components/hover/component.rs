//! Hover-transform components.
//!
//! Thin wrappers that read the pointer position relative to their own
//! bounding rect and apply the tilt/magnetic transforms as inline styles.
//! Transition timing is the page stylesheet's business.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::magnetic::{magnetic_offset, magnetic_reset, magnetic_transform};
use super::tilt::{pointer_tilt, tilt_reset, tilt_transform};

/// A card that tilts toward the pointer and lifts while hovered.
#[component]
pub fn TiltCard(children: Children) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Div>::new();

	let on_mousemove = move |ev: MouseEvent| {
		let Some(card) = card_ref.get() else {
			return;
		};
		let card: web_sys::HtmlDivElement = card.into();
		let rect = card.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		let tilt = pointer_tilt(x, y, rect.width(), rect.height());
		let _ = web_sys::HtmlElement::style(&card)
			.set_property("transform", &tilt_transform(tilt));
	};

	let on_mouseleave = move |_: MouseEvent| {
		if let Some(card) = card_ref.get() {
			let card: web_sys::HtmlDivElement = card.into();
			let _ = web_sys::HtmlElement::style(&card).set_property("transform", tilt_reset());
		}
	};

	view! {
		<div
			node_ref=card_ref
			class="tilt-card"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			{children()}
		</div>
	}
}

/// A button that leans toward the pointer while hovered.
#[component]
pub fn MagneticButton(children: Children) -> impl IntoView {
	let button_ref = NodeRef::<leptos::html::Button>::new();

	let on_mousemove = move |ev: MouseEvent| {
		let Some(button) = button_ref.get() else {
			return;
		};
		let button: web_sys::HtmlButtonElement = button.into();
		let rect = button.get_bounding_client_rect();
		let (dx, dy) = magnetic_offset(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
			rect.width(),
			rect.height(),
		);
		let _ = web_sys::HtmlElement::style(&button)
			.set_property("transform", &magnetic_transform(dx, dy));
	};

	let on_mouseleave = move |_: MouseEvent| {
		if let Some(button) = button_ref.get() {
			let button: web_sys::HtmlButtonElement = button.into();
			let _ = web_sys::HtmlElement::style(&button).set_property("transform", magnetic_reset());
		}
	};

	view! {
		<button
			node_ref=button_ref
			class="magnetic-btn"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			{children()}
		</button>
	}
}
