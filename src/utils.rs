//! Utility functions and helpers

pub mod preflight;

pub use preflight::{check_backend_available, check_repository};
