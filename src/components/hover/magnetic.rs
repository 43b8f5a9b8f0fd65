//! Magnetic button math.
//!
//! The button slides a fraction of the pointer's displacement from its own
//! center, so it appears to lean toward the cursor, and grows slightly while
//! hovered.

/// Fraction of the pointer displacement the button follows.
const PULL: f64 = 0.3;

/// Scale factor while hovered.
const HOVER_SCALE: f64 = 1.05;

/// Translation for element-local pointer coordinates.
pub fn magnetic_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
	((x - width / 2.0) * PULL, (y - height / 2.0) * PULL)
}

/// CSS transform for the hovered state.
pub fn magnetic_transform(dx: f64, dy: f64) -> String {
	format!("translate({dx}px, {dy}px) scale({HOVER_SCALE})")
}

/// CSS transform restoring the resting state.
pub fn magnetic_reset() -> &'static str {
	"translate(0, 0) scale(1)"
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_pointer_means_no_pull() {
		assert_eq!(magnetic_offset(60.0, 20.0, 120.0, 40.0), (0.0, 0.0));
	}

	#[test]
	fn pull_is_a_fraction_of_the_displacement() {
		let (dx, dy) = magnetic_offset(120.0, 0.0, 120.0, 40.0);
		assert_eq!((dx, dy), (60.0 * 0.3, -20.0 * 0.3));
	}

	#[test]
	fn transform_strings_match_the_reference() {
		assert_eq!(
			magnetic_transform(18.0, -6.0),
			"translate(18px, -6px) scale(1.05)"
		);
		assert_eq!(magnetic_reset(), "translate(0, 0) scale(1)");
	}
}
