//! Insertion marker shown while an item hovers over a row.

use super::{locate_insertion, resolve_dimensions};
use crate::config::LayoutConfig;
use crate::item::Item;

/// A vertical marker in group coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropIndicator {
    /// Slot the marker stands for.
    pub index: usize,
    /// Horizontal centre of the marker.
    pub x: f64,
    /// Top of the marker (the row baseline).
    pub y: f64,
    /// Marker height, matching the tallest sibling.
    pub height: f64,
}

/// Compute where to draw the insertion marker for a drop at `drop_x`.
///
/// The marker sits in the middle of the gap the item would land in, or half
/// a padding outside the row at either end.
pub fn drop_indicator(
    drop_x: f64,
    moving_width: f64,
    siblings: &[&Item],
    config: &LayoutConfig,
) -> DropIndicator {
    let padding = config.padding;
    let index = locate_insertion(drop_x, moving_width, siblings, config).index;

    let right_edge = |item: &Item| item.position.x + resolve_dimensions(item, config).width;
    let left = index.checked_sub(1).and_then(|i| siblings.get(i)).copied();
    let x = match (left, siblings.get(index).copied()) {
        (Some(left), Some(right)) => (right_edge(left) + right.position.x) / 2.0,
        (Some(left), None) => right_edge(left) + padding / 2.0,
        (None, Some(right)) => right.position.x - padding / 2.0,
        (None, None) => padding / 2.0,
    };

    let height = siblings
        .iter()
        .map(|item| resolve_dimensions(item, config).height)
        .reduce(f64::max)
        .unwrap_or(config.default_item_size.height);

    DropIndicator {
        index,
        x,
        y: padding,
        height,
    }
}
