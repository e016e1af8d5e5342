//! Group-relative layout engine.
//!
//! Pure functions over ordered member lists: they never look at a board and
//! never mutate anything. [`crate::Board`] composes them and writes the
//! results back.

mod dimensions;
mod indicator;
mod insertion;
mod moves;
mod reflow;

pub use dimensions::{resolve_dimensions, resolve_size};
pub use indicator::{DropIndicator, drop_indicator};
pub use insertion::{InsertionPoint, locate_insertion};
pub use moves::{MovePlan, plan_move, plan_reorder};
pub use reflow::{Reflow, reflow_group};
