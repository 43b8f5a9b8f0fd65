//! Card tilt math.
//!
//! Pointer position inside the card maps to a small 3D rotation around the
//! card center: hovering the top edge tips the card away, the left edge
//! swings it right. The card also lifts a fixed amount while hovered.

/// Degrees of rotation per pixel of pointer offset from center.
const TILT_DIVISOR: f64 = 20.0;

/// Upward translation while hovered, in pixels.
const LIFT: f64 = 8.0;

/// Rotation produced by a pointer position, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
	pub rotate_x: f64,
	pub rotate_y: f64,
}

/// Maps element-local pointer coordinates to a tilt.
pub fn pointer_tilt(x: f64, y: f64, width: f64, height: f64) -> Tilt {
	let (cx, cy) = (width / 2.0, height / 2.0);
	Tilt {
		rotate_x: (y - cy) / TILT_DIVISOR,
		rotate_y: (cx - x) / TILT_DIVISOR,
	}
}

/// CSS transform for the hovered state.
pub fn tilt_transform(tilt: Tilt) -> String {
	format!(
		"perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-{LIFT}px)",
		tilt.rotate_x, tilt.rotate_y
	)
}

/// CSS transform restoring the resting state.
pub fn tilt_reset() -> &'static str {
	"perspective(1000px) rotateX(0) rotateY(0) translateY(0)"
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn center_is_flat() {
		let t = pointer_tilt(150.0, 100.0, 300.0, 200.0);
		assert_eq!(
			t,
			Tilt {
				rotate_x: 0.0,
				rotate_y: 0.0
			}
		);
	}

	#[test]
	fn corners_tilt_by_the_reference_divisor() {
		// Bottom-right corner of a 300x200 card.
		let t = pointer_tilt(300.0, 200.0, 300.0, 200.0);
		assert_eq!(t.rotate_x, 100.0 / 20.0);
		assert_eq!(t.rotate_y, -150.0 / 20.0);

		// Top-left corner mirrors it.
		let t = pointer_tilt(0.0, 0.0, 300.0, 200.0);
		assert_eq!(t.rotate_x, -5.0);
		assert_eq!(t.rotate_y, 7.5);
	}

	#[test]
	fn transform_string_carries_the_lift() {
		let css = tilt_transform(pointer_tilt(300.0, 200.0, 300.0, 200.0));
		assert_eq!(
			css,
			"perspective(1000px) rotateX(5deg) rotateY(-7.5deg) translateY(-8px)"
		);
		assert!(tilt_reset().contains("rotateX(0)"));
	}
}
