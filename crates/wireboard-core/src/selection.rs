//! Item selection for multi-select and export.
//!
//! Only items are selectable; dragging a selection box over a group picks the
//! cards inside it, never the group itself.

use crate::board::Board;
use crate::item::ItemId;
use kurbo::Rect;

/// Selected items, in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single item.
    pub fn select(&mut self, id: ItemId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Add or remove an item (shift-click). Returns true if it is now selected.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Replace the selection with the items overlapping a board rectangle.
    /// Items are ordered left to right, then top to bottom.
    pub fn select_in_rect(&mut self, board: &Board, rect: Rect) {
        let mut hits: Vec<(Rect, ItemId)> = board
            .items_in_rect(rect)
            .into_iter()
            .filter_map(|id| board.item_bounds(id).map(|bounds| (bounds, id)))
            .collect();
        hits.sort_by(|(a, a_id), (b, b_id)| {
            a.x0.total_cmp(&b.x0)
                .then_with(|| a.y0.total_cmp(&b.y0))
                .then_with(|| a_id.cmp(b_id))
        });
        self.ids = hits.into_iter().map(|(_, id)| id).collect();
    }

    /// Forget items that are no longer on the board.
    pub fn retain_existing(&mut self, board: &Board) {
        self.ids.retain(|&id| board.get_item(id).is_some());
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Board-space bounding box of the selected items.
    pub fn bounds(&self, board: &Board) -> Option<Rect> {
        self.ids
            .iter()
            .filter_map(|&id| board.item_bounds(id))
            .reduce(|a, b| a.union(b))
    }
}
