//! Exponential pointer chase.

/// A point that closes a fixed fraction of the distance to its target each
/// frame. The dot uses a faster rate than the trailing ring, which is what
/// gives the trail its lag.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
	pub x: f64,
	pub y: f64,
	rate: f64,
}

impl Follower {
	/// `rate` is the fraction of the remaining distance covered per frame,
	/// expected in (0, 1].
	pub fn new(rate: f64) -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			rate,
		}
	}

	/// Teleports, used when the pointer first appears so the cursor does
	/// not sweep in from the origin.
	pub fn jump_to(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}

	/// Advances one frame toward the target.
	pub fn step_toward(&mut self, tx: f64, ty: f64) {
		self.x += (tx - self.x) * self.rate;
		self.y += (ty - self.y) * self.rate;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dist(f: &Follower, tx: f64, ty: f64) -> f64 {
		((f.x - tx).powi(2) + (f.y - ty).powi(2)).sqrt()
	}

	#[test]
	fn each_step_shrinks_the_gap_by_the_rate() {
		let mut f = Follower::new(0.2);
		f.jump_to(0.0, 0.0);

		let mut previous = dist(&f, 100.0, 50.0);
		for _ in 0..10 {
			f.step_toward(100.0, 50.0);
			let now = dist(&f, 100.0, 50.0);
			assert!((now - previous * 0.8).abs() < 1e-9);
			previous = now;
		}
	}

	#[test]
	fn converges_onto_a_fixed_target() {
		let mut f = Follower::new(0.1);
		f.jump_to(300.0, 200.0);
		for _ in 0..500 {
			f.step_toward(40.0, 60.0);
		}
		assert!(dist(&f, 40.0, 60.0) < 1e-3);
	}

	#[test]
	fn rate_one_lands_immediately() {
		let mut f = Follower::new(1.0);
		f.step_toward(-5.0, 12.0);
		assert_eq!((f.x, f.y), (-5.0, 12.0));
	}

	#[test]
	fn jump_does_not_ease() {
		let mut f = Follower::new(0.2);
		f.jump_to(77.0, -3.0);
		assert_eq!((f.x, f.y), (77.0, -3.0));
	}
}
