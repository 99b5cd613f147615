//! Byte arena backing every table layout.

mod arena;

pub use arena::{FieldArena, Order};
