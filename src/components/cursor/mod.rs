//! Custom animated cursor: tracking dot plus trailing ring.

mod component;
mod follower;

pub use component::CursorGlow;
pub use follower::Follower;
