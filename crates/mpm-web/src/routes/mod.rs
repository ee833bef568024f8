//! Route handlers.

pub mod machines;
pub mod parts;
pub mod system;
