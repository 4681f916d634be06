//! Spatial - the shared density grid

pub mod field;
