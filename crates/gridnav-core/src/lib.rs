//! gridnav-core: directional navigation for remote-control grid views.
//!
//! The [`navigator`] resolves arrow-key presses into neighbouring cells of
//! an irregular tile layout. [`focus`] applies those results to a grid's
//! selection and [`layout`] loads cell sets from TOML or JSON files.

pub mod focus;
pub mod layout;
pub mod navigator;

pub use gridnav_types::{Button, Cell, Direction, InputEvent, NavError, Result};

pub use focus::{FocusOutcome, GridFocus};
pub use layout::GridLayout;
pub use navigator::{Adjacency, CellNavigator, adjacency};
