//! Utility functions for working with A2A types.
//!
//! Constants for well-known paths and content types, extension header
//! helpers, and part filters.

pub mod constants;
pub mod extensions;
pub mod parts;

pub use constants::*;
pub use extensions::*;
pub use parts::*;
