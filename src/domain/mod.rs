//! Domain - particle records and simulation configuration

pub mod config;
pub mod particles;
