//! Shared output helpers

pub mod styling;

pub use styling::*;
