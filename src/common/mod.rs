//! Common utilities shared across the type dispatch layer

pub mod arena;
pub mod constants;
pub mod error;

pub use arena::{FieldArena, FieldHandle};
pub use error::{QuartzError, QuartzResult};
