//! Interactive constellation background.
//!
//! A full-viewport canvas of drifting particles that scatter away from the
//! pointer and link up with their neighbors:
//! - Population sized by viewport area, fixed for the life of the field
//! - Pointer repulsion inside a 150px radius, gentle drift elsewhere
//! - Proximity links fading with distance, cut off at 120px
//! - Pauses while the tab is hidden; tears down cleanly on unmount

mod component;
mod field;
mod render;

pub use component::ConstellationCanvas;
pub use field::{
	AREA_PER_PARTICLE, CONNECT_DISTANCE, POINTER_RADIUS, Particle, ParticleField, PointerState,
};
