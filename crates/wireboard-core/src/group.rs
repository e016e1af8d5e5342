//! Named containers that lay their items out in a single row.

use crate::config::{DEFAULT_MIN_GROUP_HEIGHT, DEFAULT_MIN_GROUP_WIDTH};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// An ordered row of items with a derived bounding box.
///
/// Member order is not stored: it is the ascending x of the items whose
/// `group_id` points here. `size` is owned by the reflow and should not be
/// set by hand once the group is on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub(crate) id: GroupId,
    /// Display title.
    pub title: String,
    /// Top-left anchor in board coordinates.
    pub position: Point,
    /// Derived size, kept in sync by reflow.
    pub size: Size,
}

impl Group {
    /// Create a new group at the given board position.
    pub fn new(title: impl Into<String>, position: Point) -> Self {
        Self::with_id(Uuid::new_v4(), title, position)
    }

    /// Create a new group with a specific ID.
    pub fn with_id(id: GroupId, title: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            title: title.into(),
            position,
            size: Size::new(DEFAULT_MIN_GROUP_WIDTH, DEFAULT_MIN_GROUP_HEIGHT),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Bounding box in board coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Convert a board point into this group's coordinate space.
    pub fn to_local(&self, point: Point) -> Point {
        point - self.position.to_vec2()
    }

    /// Convert a point in this group's coordinate space to board coordinates.
    pub fn to_board(&self, point: Point) -> Point {
        point + self.position.to_vec2()
    }

    /// Offset of the group origin from a board point.
    pub fn offset_from(&self, point: Point) -> Vec2 {
        point - self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_bounds() {
        let mut group = Group::new("Onboarding", Point::new(20.0, 200.0));
        group.size = Size::new(630.0, 190.0);
        let bounds = group.bounds();

        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 200.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 650.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 390.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coordinate_conversion() {
        let group = Group::new("Checkout", Point::new(100.0, 50.0));
        let local = group.to_local(Point::new(130.0, 70.0));

        assert!((local.x - 30.0).abs() < f64::EPSILON);
        assert!((local.y - 20.0).abs() < f64::EPSILON);
        assert_eq!(group.to_board(local), Point::new(130.0, 70.0));
    }

    #[test]
    fn test_new_group_starts_at_default_floor() {
        let group = Group::new("Empty", Point::ZERO);
        assert_eq!(group.size, Size::new(400.0, 200.0));
    }
}
