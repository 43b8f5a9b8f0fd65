//! Page-provided effect configuration.
//!
//! The host page may embed a JSON block to pick a theme or switch individual
//! effects off; everything defaults to on with the house theme. The DOM side
//! of loading lives in the crate root.

use log::warn;
use serde::Deserialize;

use crate::theme::Theme;

/// Effect toggles and theme selection.
///
/// Deserialized from `<script id="fx-config" type="application/json">`;
/// unknown fields are ignored, missing fields take their defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FxConfig {
	/// Theme name; falls back to the default theme when unrecognized.
	pub theme: String,
	pub constellation: bool,
	pub cursor: bool,
	pub hover: bool,
	pub orbit: bool,
}

impl Default for FxConfig {
	fn default() -> Self {
		Self {
			theme: "cozy".to_string(),
			constellation: true,
			cursor: true,
			hover: true,
			orbit: true,
		}
	}
}

impl FxConfig {
	/// Resolves the configured theme, warning on unknown names.
	pub fn resolve_theme(&self) -> Theme {
		Theme::by_name(&self.theme).unwrap_or_else(|| {
			warn!("cozy-fx: unknown theme {:?}, using default", self.theme);
			Theme::default()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_enable_everything() {
		let config = FxConfig::default();
		assert!(config.constellation && config.cursor && config.hover && config.orbit);
		assert_eq!(config.resolve_theme().name, "cozy");
	}

	#[test]
	fn partial_json_fills_in_defaults() {
		let config: FxConfig =
			serde_json::from_str(r#"{"theme": "twilight", "cursor": false}"#).unwrap();
		assert_eq!(config.theme, "twilight");
		assert!(!config.cursor);
		assert!(config.constellation);
		assert_eq!(config.resolve_theme().name, "twilight");
	}

	#[test]
	fn unknown_fields_are_tolerated() {
		let config: FxConfig =
			serde_json::from_str(r#"{"orbit": false, "sparkles": 9000}"#).unwrap();
		assert!(!config.orbit);
	}

	#[test]
	fn unknown_theme_falls_back() {
		let config: FxConfig = serde_json::from_str(r#"{"theme": "vaporwave"}"#).unwrap();
		assert_eq!(config.resolve_theme().name, "cozy");
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(serde_json::from_str::<FxConfig>("{nope").is_err());
	}
}
