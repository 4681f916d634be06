//! Core - numeric types, errors and logging shared by every layer

pub mod error;
pub mod fixed;
pub mod logging;
