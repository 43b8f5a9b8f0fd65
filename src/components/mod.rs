//! Leptos components for the page's visual effects.
//!
//! Each effect keeps its simulation or math in a pure module next to a thin
//! component that owns the DOM wiring, so the interesting parts run in
//! host-side tests.

pub mod constellation;
pub mod cursor;
pub mod hover;
pub mod orbit;
pub(crate) mod sampling;
