//! Wireframe screen cards placed on the board.

use crate::config::LayoutConfig;
use crate::group::GroupId;
use crate::layout::resolve_dimensions;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an item.
pub type ItemId = Uuid;

/// Device class of a wireframe screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Mobile,
    #[default]
    Desktop,
}

/// A positioned, sized card that belongs to at most one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub(crate) id: ItemId,
    /// Display label.
    pub title: String,
    /// Owning group, `None` for top-level items.
    #[serde(default)]
    pub group_id: Option<GroupId>,
    /// Top-left corner, relative to the owning group when grouped.
    pub position: Point,
    /// Declared content size. Never computed by the layout engine.
    #[serde(default)]
    pub dimensions: Option<Size>,
    #[serde(default)]
    pub kind: ScreenKind,
}

impl Item {
    /// Create an unassigned item at the origin with no declared size.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Create an item with a specific ID.
    pub fn with_id(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            group_id: None,
            position: Point::ZERO,
            dimensions: None,
            kind: ScreenKind::default(),
        }
    }

    /// Set the declared size.
    pub fn with_dimensions(mut self, width: f64, height: f64) -> Self {
        self.dimensions = Some(Size::new(width, height));
        self
    }

    /// Set the position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Assign the item to a group.
    pub fn in_group(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Set the screen kind.
    pub fn with_kind(mut self, kind: ScreenKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Bounds in the item's own coordinate space (group-relative when grouped).
    pub fn local_bounds(&self, config: &LayoutConfig) -> Rect {
        Rect::from_origin_size(self.position, resolve_dimensions(self, config))
    }
}
