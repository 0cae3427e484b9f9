//! Foundation types for gridnav.
//!
//! This crate contains the platform-agnostic types shared by all gridnav
//! crates: cell geometry, navigation directions, input events, and error
//! types.

pub mod error;
pub mod geometry;
pub mod input;

pub use error::{NavError, Result};
pub use geometry::Cell;
pub use input::{Button, Direction, InputEvent};
