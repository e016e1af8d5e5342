//! Wireboard Core Library
//!
//! Layout engine for the Wireboard canvas: wireframe cards arranged in named
//! groups, each group a single padded row that repacks itself whenever a
//! card is dropped, moved, or removed.

pub mod board;
pub mod config;
pub mod drag;
pub mod error;
pub mod group;
pub mod item;
pub mod layout;
pub mod selection;

pub use board::{Board, GroupUpdate, MoveOutcome};
pub use config::{ConfigError, LayoutConfig};
pub use drag::{GroupDrag, ItemDrag};
pub use error::{BoardError, BoardResult};
pub use group::{Group, GroupId};
pub use item::{Item, ItemId, ScreenKind};
pub use layout::{
    DropIndicator, InsertionPoint, MovePlan, Reflow, drop_indicator, locate_insertion,
    plan_move, plan_reorder, reflow_group, resolve_dimensions,
};
pub use selection::Selection;
