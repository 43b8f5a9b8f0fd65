//! cozy-fx: interactive canvas and cursor effects for the cozy portfolio.
//!
//! This crate provides the WASM-based visual-interaction layer of the page:
//! a pointer-reactive constellation background, a custom cursor, hover
//! transforms for cards and buttons, and per-button particle clouds. The
//! host page opts effects in or out with an embedded JSON config and the
//! crate honors the visitor's reduced-motion and coarse-pointer settings.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod theme;

pub use components::constellation::ConstellationCanvas;
pub use components::cursor::CursorGlow;
pub use components::hover::{MagneticButton, TiltCard};
pub use components::orbit::OrbitButton;
pub use config::FxConfig;
pub use theme::Theme;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("cozy-fx: logging initialized");
}

/// Load effect configuration from a script element with id="fx-config".
/// Expected format: JSON matching [`FxConfig`]; all fields optional.
fn load_fx_config() -> Option<FxConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("fx-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FxConfig>(&json_text) {
		Ok(config) => {
			info!("cozy-fx: loaded config, theme {:?}", config.theme);
			Some(config)
		}
		Err(e) => {
			warn!("cozy-fx: failed to parse fx-config: {}", e);
			None
		}
	}
}

/// Media-query gates deciding which effects mount.
///
/// Reduced motion disables everything animated; a coarse pointer
/// additionally disables the pointer-driven effects, which feel glitchy on
/// touch screens.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectGates {
	pub reduced_motion: bool,
	pub coarse_pointer: bool,
}

impl EffectGates {
	/// Queries the document's media features once.
	pub fn detect() -> Self {
		Self {
			reduced_motion: media_matches("(prefers-reduced-motion: reduce)"),
			coarse_pointer: media_matches("(pointer: coarse)"),
		}
	}

	/// True when pointer-driven effects should run.
	pub fn pointer_effects(&self) -> bool {
		!self.reduced_motion && !self.coarse_pointer
	}
}

fn media_matches(query: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.match_media(query).ok().flatten())
		.map(|m| m.matches())
		.unwrap_or(false)
}

/// Main application component.
/// Loads config from the DOM, checks the media gates, and mounts the
/// enabled effects around the demo page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_fx_config().unwrap_or_default();
	let theme = config.resolve_theme();
	let gates = EffectGates::detect();
	let pointer_fx = gates.pointer_effects();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme.name />
		<Title text="Flogert's Cozy Corner" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{(pointer_fx && config.constellation)
			.then(|| view! { <ConstellationCanvas style=theme.constellation /> })}

		<div class="fx-overlay">
			<h1>"Flogert's Cozy Corner"</h1>
			<p class="subtitle">"Games, pixels, and plenty of matcha."</p>

			{(pointer_fx && config.hover)
				.then(|| view! {
					<TiltCard>
						<h2>"Starlit Grove"</h2>
						<p>"A tiny farming vignette built over one rainy weekend."</p>
					</TiltCard>
					<MagneticButton>"View work"</MagneticButton>
				})}

			{(pointer_fx && config.orbit)
				.then(|| view! { <OrbitButton style=theme.orbit>"Say hi"</OrbitButton> })}
		</div>

		{(pointer_fx && config.cursor).then(|| view! { <CursorGlow style=theme.cursor /> })}
	}
}
