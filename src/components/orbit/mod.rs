//! Per-button orbiting particle cloud.

mod cloud;
mod component;

pub use cloud::{CAMERA_Z, OrbitCloud, OrbitParticle, PARTICLE_COUNT};
pub use component::OrbitButton;
