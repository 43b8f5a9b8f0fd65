//! Visual theming for the page effects.
//!
//! One theme bundles the colors every component draws with: the
//! constellation's disc and link colors, the cursor pair, and the orbit
//! cloud's palette. The default `cozy` theme carries the portfolio's
//! pink/purple/peach/lavender set.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Constellation canvas colors.
#[derive(Clone, Copy, Debug)]
pub struct ConstellationStyle {
	/// Disc fill, alpha included.
	pub particle: Color,
	/// Link stroke; the drawn alpha is `strength * link_alpha`.
	pub link: Color,
	/// Cap applied to the distance-derived link strength.
	pub link_alpha: f64,
}

/// Cursor dot and trailing ring colors.
#[derive(Clone, Copy, Debug)]
pub struct CursorStyle {
	pub dot: Color,
	pub ring: Color,
}

/// Orbit cloud palette; particles pick by index.
#[derive(Clone, Copy, Debug)]
pub struct OrbitStyle {
	pub palette: [Color; 4],
}

impl OrbitStyle {
	pub fn color(&self, index: usize) -> Color {
		self.palette[index % self.palette.len()]
	}
}

/// Complete visual theme.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub constellation: ConstellationStyle,
	pub cursor: CursorStyle,
	pub orbit: OrbitStyle,
}

impl Theme {
	/// The portfolio's house style (default).
	pub fn cozy() -> Self {
		Self {
			name: "cozy",
			constellation: ConstellationStyle {
				particle: Color::rgba(155, 126, 189, 0.6), // purple
				link: Color::rgb(255, 181, 197),           // pink
				link_alpha: 0.3,
			},
			cursor: CursorStyle {
				dot: Color::rgba(255, 181, 197, 0.9),
				ring: Color::rgba(155, 126, 189, 0.8),
			},
			orbit: OrbitStyle {
				palette: [
					Color::rgb(255, 181, 197), // pink
					Color::rgb(155, 126, 189), // purple
					Color::rgb(255, 218, 179), // peach
					Color::rgb(232, 213, 242), // lavender
				],
			},
		}
	}

	/// Cooler blue/violet variant for dark pages.
	pub fn twilight() -> Self {
		Self {
			name: "twilight",
			constellation: ConstellationStyle {
				particle: Color::rgba(120, 130, 160, 0.55),
				link: Color::rgb(130, 145, 165),
				link_alpha: 0.25,
			},
			cursor: CursorStyle {
				dot: Color::rgba(130, 145, 165, 0.9),
				ring: Color::rgba(120, 130, 160, 0.8),
			},
			orbit: OrbitStyle {
				palette: [
					Color::rgb(115, 135, 155), // slate
					Color::rgb(130, 120, 150), // wisteria
					Color::rgb(120, 130, 160), // periwinkle
					Color::rgb(135, 140, 150), // pewter
				],
			},
		}
	}

	/// Looks a theme up by its config name, falling back to the default.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"cozy" => Some(Self::cozy()),
			"twilight" => Some(Self::twilight()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::cozy()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formatting_picks_hex_or_rgba() {
		assert_eq!(Color::rgb(255, 181, 197).to_css(), "#ffb5c5");
		assert_eq!(
			Color::rgba(155, 126, 189, 0.6).to_css(),
			"rgba(155, 126, 189, 0.6)"
		);
	}

	#[test]
	fn with_alpha_keeps_channels() {
		let c = Color::rgb(10, 20, 30).with_alpha(0.5);
		assert_eq!((c.r, c.g, c.b), (10, 20, 30));
		assert_eq!(c.a, 0.5);
	}

	#[test]
	fn lighten_moves_toward_white() {
		let c = Color::rgb(100, 100, 100).lighten(0.5);
		assert_eq!((c.r, c.g, c.b), (177, 177, 177));
		assert_eq!(Color::rgb(0, 0, 0).lighten(1.0).r, 255);
	}

	#[test]
	fn orbit_palette_wraps() {
		let orbit = Theme::cozy().orbit;
		assert_eq!(orbit.color(0).r, orbit.color(4).r);
	}

	#[test]
	fn theme_lookup_by_name() {
		assert_eq!(Theme::by_name("twilight").unwrap().name, "twilight");
		assert!(Theme::by_name("neon").is_none());
		assert_eq!(Theme::default().name, "cozy");
	}
}
