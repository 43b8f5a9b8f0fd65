//! Constellation simulation state.
//!
//! Owns a fixed population of drifting particles, advances them once per
//! animation frame with a pointer-repulsion force, and enumerates the
//! proximity connections drawn between them. The struct is pure Rust with no
//! DOM handles, so the whole update step is testable off the browser; the
//! component layer feeds it pointer and resize events.

use crate::components::sampling::hash01;

/// One square this many CSS pixels of viewport area yields one particle.
pub const AREA_PER_PARTICLE: f64 = 15000.0;

/// Distance within which the pointer repels particles.
pub const POINTER_RADIUS: f64 = 150.0;

/// Maximum distance at which two particles are joined by a line.
pub const CONNECT_DISTANCE: f64 = 120.0;

/// Below this pointer distance the repulsion direction is undefined, so the
/// term is skipped for the frame and the particle holds position.
const MIN_POINTER_DISTANCE: f64 = 1e-6;

/// A single simulated point.
///
/// `base_x`/`base_y` record the spawn position. The constellation update
/// never reads them; they exist for parity with the orbit variant, which
/// eases back to its anchor.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub base_x: f64,
	pub base_y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Disc radius in CSS pixels, sampled in [1, 3).
	pub size: f64,
	/// Individual responsiveness to the pointer force, sampled in [1, 31).
	pub density: f64,
}

/// Most recent pointer position plus the fixed interaction radius.
///
/// The position stays `None` until the first movement; the update step skips
/// the repulsion branch entirely while it is absent.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
	pub position: Option<(f64, f64)>,
	pub radius: f64,
}

impl Default for PointerState {
	fn default() -> Self {
		Self {
			position: None,
			radius: POINTER_RADIUS,
		}
	}
}

/// The constellation field: particles, pointer state, and bounds.
///
/// Created once when the canvas mounts, then mutated each frame by `step`.
/// Particle count is fixed at creation as a function of area and is not
/// recomputed on resize; only the bounds change.
pub struct ParticleField {
	particles: Vec<Particle>,
	pointer: PointerState,
	width: f64,
	height: f64,
	/// Cleared while the tab is hidden; the frame loop skips stepping.
	pub running: bool,
}

impl ParticleField {
	/// Creates a field with the deterministic base seed. Tests use this.
	pub fn new(width: f64, height: f64) -> Self {
		Self::new_seeded(width, height, 0.0)
	}

	/// Creates a field sized for `width * height`, sampling every particle
	/// attribute from the index hash offset by `seed`.
	pub fn new_seeded(width: f64, height: f64, seed: f64) -> Self {
		let count = (width * height / AREA_PER_PARTICLE).floor() as usize;
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			let s = seed + i as f64;
			let x = hash01(s * 1.1) * width;
			let y = hash01(s * 2.3) * height;
			particles.push(Particle {
				x,
				y,
				base_x: x,
				base_y: y,
				vx: (hash01(s * 4.1) - 0.5) * 0.5,
				vy: (hash01(s * 6.7) - 0.5) * 0.5,
				size: 1.0 + hash01(s * 5.3) * 2.0,
				density: 1.0 + hash01(s * 3.7) * 30.0,
			});
		}

		Self {
			particles,
			pointer: PointerState::default(),
			width,
			height,
			running: true,
		}
	}

	/// Records a pointer position in viewport coordinates.
	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		self.pointer.position = Some((x, y));
	}

	/// Forgets the pointer, e.g. when it leaves the document.
	pub fn clear_pointer(&mut self) {
		self.pointer.position = None;
	}

	/// Updates the bounds after a viewport resize. Positions and count are
	/// left alone; particles stranded outside walk back in via their own
	/// bounce.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Advances every particle by one frame.
	///
	/// Inside the pointer radius the particle is pushed away with magnitude
	/// `(radius - d) / radius * density`; otherwise it drifts by its
	/// velocity and reflects the matching velocity component when it finds
	/// itself past a bound. Positions are never clamped, so a one-frame
	/// overshoot past the edge is possible.
	pub fn step(&mut self) {
		let pointer = self.pointer;
		for p in &mut self.particles {
			if let Some((px, py)) = pointer.position {
				let (dx, dy) = (px - p.x, py - p.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < pointer.radius {
					if dist > MIN_POINTER_DISTANCE {
						let force = (pointer.radius - dist) / pointer.radius;
						p.x -= dx / dist * force * p.density;
						p.y -= dy / dist * force * p.density;
					}
					continue;
				}
			}

			p.x += p.vx;
			p.y += p.vy;
			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}
		}
	}

	/// Calls `f` for every unordered pair closer than [`CONNECT_DISTANCE`],
	/// passing a link strength that fades linearly from 1 at distance 0 to
	/// 0 at the threshold. The comparison is strict: a pair at exactly the
	/// threshold yields nothing.
	pub fn visit_connections(&self, mut f: impl FnMut(&Particle, &Particle, f64)) {
		for a in 0..self.particles.len() {
			for b in (a + 1)..self.particles.len() {
				let (pa, pb) = (&self.particles[a], &self.particles[b]);
				let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < CONNECT_DISTANCE {
					f(pa, pb, 1.0 - dist / CONNECT_DISTANCE);
				}
			}
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}
