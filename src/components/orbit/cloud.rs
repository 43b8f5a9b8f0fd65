//! Orbit cloud simulation.
//!
//! Fifty particles seeded on a spherical shell around a button. While the
//! button is hovered they ease toward a pointer-shifted target with a gentle
//! sinusoidal wobble and the cloud fades in; idle, they ease back to their
//! anchors and the cloud fades out. The whole shell spins slowly about the
//! z axis. Positions live in a right-handed camera space with the button at
//! the origin and the camera on +z; projection to the canvas happens in
//! [`OrbitCloud::visit_projected`].

use std::f64::consts::PI;

use crate::components::sampling::hash01;

/// Particles per button.
pub const PARTICLE_COUNT: usize = 50;

/// Camera distance from the button plane.
pub const CAMERA_Z: f64 = 30.0;

const SHELL_INNER: f64 = 15.0;
const SHELL_SPAN: f64 = 20.0;
const SHELL_Z_OFFSET: f64 = -20.0;

const HOVER_OPACITY: f64 = 0.8;
const OPACITY_RATE: f64 = 0.1;
const ATTRACT_RATE: f64 = 0.05;
const RETURN_RATE: f64 = 0.02;
const POINTER_REACH: f64 = 10.0;
const WOBBLE: f64 = 0.1;
const SPIN_RATE: f64 = 0.001;

/// tan(37.5 degrees), half of the 75-degree vertical field of view.
const HALF_FOV_TAN: f64 = 0.767_326_987_978_96;

const FRAME_DT: f64 = 0.016;

/// One shell particle. `base_*` is the anchor it eases back to.
#[derive(Clone, Debug)]
pub struct OrbitParticle {
	pub x: f64,
	pub y: f64,
	pub z: f64,
	pub base_x: f64,
	pub base_y: f64,
	pub base_z: f64,
	/// World-space diameter, sampled in [1, 4).
	pub size: f64,
	/// Index into the theme's orbit palette.
	pub color_index: usize,
}

/// The per-button particle cloud.
pub struct OrbitCloud {
	particles: Vec<OrbitParticle>,
	/// Current global opacity, eased toward the hover/idle target.
	pub opacity: f64,
	target_opacity: f64,
	hovering: bool,
	/// Pointer offset normalized to [-1, 1] per axis, y up.
	pointer: (f64, f64),
	rotation: f64,
	time: f64,
}

impl OrbitCloud {
	/// Seeds the shell. Same seed, same shell.
	pub fn new(seed: f64) -> Self {
		let mut particles = Vec::with_capacity(PARTICLE_COUNT);
		for i in 0..PARTICLE_COUNT {
			let s = seed + i as f64;
			let theta = hash01(s * 1.3) * 2.0 * PI;
			let phi = hash01(s * 2.9) * PI;
			let radius = SHELL_INNER + hash01(s * 4.7) * SHELL_SPAN;

			let x = radius * phi.sin() * theta.cos();
			let y = radius * phi.sin() * theta.sin();
			let z = radius * phi.cos() + SHELL_Z_OFFSET;

			particles.push(OrbitParticle {
				x,
				y,
				z,
				base_x: x,
				base_y: y,
				base_z: z,
				size: 1.0 + hash01(s * 6.1) * 3.0,
				color_index: (hash01(s * 7.9) * 4.0) as usize,
			});
		}

		Self {
			particles,
			opacity: 0.0,
			target_opacity: 0.0,
			hovering: false,
			pointer: (0.0, 0.0),
			rotation: 0.0,
			time: 0.0,
		}
	}

	/// Hover begins/ends; flips the opacity target.
	pub fn set_hover(&mut self, hovering: bool) {
		self.hovering = hovering;
		self.target_opacity = if hovering { HOVER_OPACITY } else { 0.0 };
	}

	/// Pointer position inside the button, each axis normalized to
	/// [-1, 1] with y pointing up.
	pub fn set_pointer(&mut self, nx: f64, ny: f64) {
		self.pointer = (nx, ny);
	}

	/// Advances one animation frame.
	pub fn step(&mut self) {
		self.time += FRAME_DT;
		self.opacity += (self.target_opacity - self.opacity) * OPACITY_RATE;

		for (i, p) in self.particles.iter_mut().enumerate() {
			if self.hovering {
				let tx = p.base_x + self.pointer.0 * POINTER_REACH;
				let ty = p.base_y + self.pointer.1 * POINTER_REACH;
				p.x += (tx - p.x) * ATTRACT_RATE;
				p.y += (ty - p.y) * ATTRACT_RATE;

				let phase = self.time + i as f64;
				p.x += phase.sin() * WOBBLE;
				p.y += phase.cos() * WOBBLE;
			} else {
				p.x += (p.base_x - p.x) * RETURN_RATE;
				p.y += (p.base_y - p.y) * RETURN_RATE;
			}
		}

		self.rotation += SPIN_RATE;
	}

	/// True once the cloud has faded far enough to skip drawing.
	pub fn is_faded_out(&self) -> bool {
		!self.hovering && self.opacity < 0.01
	}

	/// Projects every particle onto a `width` x `height` canvas and calls
	/// `f(x, y, radius, color_index)`. Applies the shell spin, then a
	/// pinhole projection with the camera at `z =` [`CAMERA_Z`]; particles
	/// at or behind the camera plane are culled.
	pub fn visit_projected(&self, width: f64, height: f64, mut f: impl FnMut(f64, f64, f64, usize)) {
		let focal = height / 2.0 / HALF_FOV_TAN;
		let (sin_r, cos_r) = self.rotation.sin_cos();
		let (cx, cy) = (width / 2.0, height / 2.0);

		for p in &self.particles {
			let rx = p.x * cos_r - p.y * sin_r;
			let ry = p.x * sin_r + p.y * cos_r;

			let depth = CAMERA_Z - p.z;
			if depth < 1.0 {
				continue;
			}

			let scale = focal / depth;
			f(
				cx + rx * scale,
				cy - ry * scale,
				p.size * 0.5 * scale,
				p.color_index,
			);
		}
	}

	pub fn particles(&self) -> &[OrbitParticle] {
		&self.particles
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn shell_radius(p: &OrbitParticle) -> f64 {
		(p.base_x.powi(2) + p.base_y.powi(2) + (p.base_z - SHELL_Z_OFFSET).powi(2)).sqrt()
	}

	#[test]
	fn shell_seeding_stays_in_bounds() {
		let cloud = OrbitCloud::new(5.0);
		assert_eq!(cloud.particles().len(), PARTICLE_COUNT);
		for p in cloud.particles() {
			let r = shell_radius(p);
			assert!(
				(SHELL_INNER - 1e-9..SHELL_INNER + SHELL_SPAN).contains(&r),
				"shell radius out of range: {r}"
			);
			assert!(p.size >= 1.0 && p.size < 4.0);
			assert!(p.color_index < 4);
		}
	}

	#[test]
	fn opacity_eases_toward_hover_target_without_overshoot() {
		let mut cloud = OrbitCloud::new(1.0);
		cloud.set_hover(true);

		let mut previous = 0.0;
		for _ in 0..200 {
			cloud.step();
			assert!(cloud.opacity > previous);
			assert!(cloud.opacity < HOVER_OPACITY);
			previous = cloud.opacity;
		}
		assert!((HOVER_OPACITY - cloud.opacity) < 1e-3);

		cloud.set_hover(false);
		for _ in 0..300 {
			cloud.step();
		}
		assert!(cloud.is_faded_out());
	}

	#[test]
	fn hovered_particles_drift_toward_the_pointer_side() {
		let mut cloud = OrbitCloud::new(2.0);
		cloud.set_hover(true);
		cloud.set_pointer(1.0, 0.0);

		let start: Vec<f64> = cloud.particles().iter().map(|p| p.x).collect();
		for _ in 0..400 {
			cloud.step();
		}
		for (p, x0) in cloud.particles().iter().zip(start) {
			// Settles near base + reach, give or take the wobble.
			let target = p.base_x + POINTER_REACH;
			assert!((p.x - target).abs() < (x0 - target).abs() + 3.0 * WOBBLE);
			assert!((p.x - target).abs() < 3.0);
		}
	}

	#[test]
	fn idle_particles_return_to_their_anchors() {
		let mut cloud = OrbitCloud::new(3.0);
		cloud.set_hover(true);
		cloud.set_pointer(1.0, -1.0);
		for _ in 0..120 {
			cloud.step();
		}

		cloud.set_hover(false);
		let mut previous: Vec<f64> = cloud
			.particles()
			.iter()
			.map(|p| ((p.x - p.base_x).powi(2) + (p.y - p.base_y).powi(2)).sqrt())
			.collect();
		for _ in 0..50 {
			cloud.step();
			for (p, prev) in cloud.particles().iter().zip(previous.iter_mut()) {
				let d = ((p.x - p.base_x).powi(2) + (p.y - p.base_y).powi(2)).sqrt();
				assert!(d <= *prev + 1e-9, "idle return must not diverge");
				*prev = d;
			}
		}
	}

	#[test]
	fn z_never_changes() {
		let mut cloud = OrbitCloud::new(4.0);
		let zs: Vec<f64> = cloud.particles().iter().map(|p| p.z).collect();
		cloud.set_hover(true);
		cloud.set_pointer(0.5, 0.5);
		for _ in 0..100 {
			cloud.step();
		}
		for (p, z) in cloud.particles().iter().zip(zs) {
			assert_eq!(p.z, z);
		}
	}

	#[test]
	fn projection_centers_the_origin_and_culls_behind_camera() {
		let mut cloud = OrbitCloud::new(0.0);
		cloud.particles = vec![
			OrbitParticle {
				x: 0.0,
				y: 0.0,
				z: 0.0,
				base_x: 0.0,
				base_y: 0.0,
				base_z: 0.0,
				size: 2.0,
				color_index: 0,
			},
			OrbitParticle {
				x: 5.0,
				y: 5.0,
				z: CAMERA_Z + 1.0,
				base_x: 5.0,
				base_y: 5.0,
				base_z: CAMERA_Z + 1.0,
				size: 2.0,
				color_index: 1,
			},
		];

		let mut seen = Vec::new();
		cloud.visit_projected(200.0, 100.0, |x, y, r, idx| {
			seen.push((x, y, r, idx));
		});

		assert_eq!(seen.len(), 1, "behind-camera particle must be culled");
		let (x, y, r, idx) = seen[0];
		assert_eq!((x, y), (100.0, 50.0));
		assert!(r > 0.0);
		assert_eq!(idx, 0);
	}

	#[test]
	fn deeper_particles_project_smaller() {
		let probe = |z: f64| {
			let mut cloud = OrbitCloud::new(0.0);
			cloud.particles = vec![OrbitParticle {
				x: 4.0,
				y: 0.0,
				z,
				base_x: 4.0,
				base_y: 0.0,
				base_z: z,
				size: 2.0,
				color_index: 0,
			}];
			let mut out = (0.0, 0.0);
			cloud.visit_projected(200.0, 100.0, |x, _, r, _| out = (x, r));
			out
		};

		let (near_x, near_r) = probe(10.0);
		let (far_x, far_r) = probe(-40.0);
		assert!(near_r > far_r);
		assert!((near_x - 100.0) > (far_x - 100.0));
	}
}
