//! Repack a group's members into a single padded row.

use super::resolve_dimensions;
use crate::config::LayoutConfig;
use crate::item::{Item, ItemId};
use kurbo::{Point, Size};

/// Result of a reflow: the group's new size and each member's new position.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflow {
    /// Derived group size, never below the configured floor.
    pub size: Size,
    /// New group-relative positions, in member order.
    pub positions: Vec<(ItemId, Point)>,
}

impl Reflow {
    /// New position for a member, if it took part in the reflow.
    pub fn position_of(&self, id: ItemId) -> Option<Point> {
        self.positions
            .iter()
            .find(|(member, _)| *member == id)
            .map(|&(_, point)| point)
    }
}

/// Pack `members` left to right in the order given.
///
/// Every member sits on the row baseline `y = padding` and consecutive
/// members are separated by exactly `padding`. The box keeps `padding` above,
/// below and to the left of the row, and `2 * padding` after the last member.
/// The caller decides the order; this only packs.
pub fn reflow_group(members: &[&Item], config: &LayoutConfig) -> Reflow {
    let padding = config.padding;
    let floor = config.min_group_size;

    if members.is_empty() {
        return Reflow {
            size: floor,
            positions: Vec::new(),
        };
    }

    let mut positions = Vec::with_capacity(members.len());
    let mut current_x = padding;
    let mut max_height: f64 = 0.0;

    for member in members {
        let size = resolve_dimensions(member, config);
        positions.push((member.id(), Point::new(current_x, padding)));
        current_x += size.width + padding;
        max_height = max_height.max(size.height);
    }

    // current_x already carries the gap after the last member.
    let size = Size::new(
        floor.width.max(current_x + padding),
        floor.height.max(max_height + 2.0 * padding),
    );

    Reflow { size, positions }
}
