//! Systems - per-step transformations over the field and particles
//!
//! - forces:     density gradient sampling
//! - integrator: fixed-point velocity/position update
//! - obstacle:   moving solid block

pub mod forces;
pub mod integrator;
pub mod obstacle;
