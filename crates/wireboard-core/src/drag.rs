//! Drag gestures: moving a card between or within groups, and moving a
//! whole group.
//!
//! Dropping a session without finishing it cancels the gesture; nothing on
//! the board changes until [`ItemDrag::finish`] runs.

use crate::board::{Board, MoveOutcome};
use crate::error::{BoardError, BoardResult};
use crate::group::GroupId;
use crate::item::ItemId;
use crate::layout::DropIndicator;
use kurbo::{Point, Rect, Vec2};

/// State for dragging one item.
#[derive(Debug, Clone)]
pub struct ItemDrag {
    /// The item being dragged.
    pub item_id: ItemId,
    /// Pointer position when the drag started (board coordinates).
    pub start_point: Point,
    /// Current pointer position (board coordinates).
    pub current_point: Point,
    /// Item bounds when the drag started (board coordinates).
    origin: Rect,
    /// Group currently highlighted as the drop target.
    hovered: Option<GroupId>,
}

impl ItemDrag {
    /// Start dragging an item. Returns `None` for an unknown item.
    pub fn start(board: &Board, item_id: ItemId, pointer: Point) -> Option<Self> {
        let origin = board.item_bounds(item_id)?;
        Some(Self {
            item_id,
            start_point: pointer,
            current_point: pointer,
            origin,
            hovered: None,
        })
    }

    /// Get the drag delta.
    pub fn delta(&self) -> Vec2 {
        self.current_point - self.start_point
    }

    /// Where the item is drawn while dragging (board coordinates).
    pub fn current_rect(&self) -> Rect {
        self.origin + self.delta()
    }

    /// Group to highlight, if the item hovers over a group other than its own.
    pub fn hovered(&self) -> Option<GroupId> {
        self.hovered
    }

    /// Follow the pointer and return the group to highlight.
    pub fn update(&mut self, board: &Board, pointer: Point) -> Option<GroupId> {
        self.current_point = pointer;
        self.hovered = board.drop_target(self.item_id, self.current_rect());
        self.hovered
    }

    /// Insertion marker for the current pointer position, in the coordinates
    /// of the group the item would land in.
    pub fn indicator(&self, board: &Board) -> Option<(GroupId, DropIndicator)> {
        let group_id = self.landing_group(board, self.hovered)?;
        let drop_x = self.local_drop_x(board, group_id).ok()?;
        let marker = board.drop_indicator(group_id, Some(self.item_id), drop_x).ok()?;
        Some((group_id, marker))
    }

    /// Drop the item: into the group under it, or back into its own group at
    /// the new x. A top-level item dropped outside every group stays put and
    /// `Ok(None)` is returned.
    pub fn finish(self, board: &mut Board) -> BoardResult<Option<MoveOutcome>> {
        let target = board.drop_target(self.item_id, self.current_rect());
        let Some(group_id) = self.landing_group(board, target) else {
            log::debug!("Item {} dropped outside any group", self.item_id);
            return Ok(None);
        };
        let drop_x = self.local_drop_x(board, group_id)?;
        board.move_item(self.item_id, group_id, drop_x).map(Some)
    }

    fn landing_group(&self, board: &Board, target: Option<GroupId>) -> Option<GroupId> {
        target.or_else(|| board.get_item(self.item_id).and_then(|item| item.group_id))
    }

    fn local_drop_x(&self, board: &Board, group_id: GroupId) -> BoardResult<f64> {
        let group = board
            .get_group(group_id)
            .ok_or(BoardError::GroupNotFound(group_id))?;
        Ok(group.to_local(self.current_rect().origin()).x)
    }
}

/// State for dragging a whole group by its frame.
#[derive(Debug, Clone)]
pub struct GroupDrag {
    /// The group being dragged.
    pub group_id: GroupId,
    /// Pointer offset from the group's top-left corner.
    offset: Vec2,
    moved: bool,
}

impl GroupDrag {
    /// Start dragging a group and bring it to the front. Returns `None` for
    /// an unknown group.
    pub fn start(board: &mut Board, group_id: GroupId, pointer: Point) -> Option<Self> {
        let offset = board.get_group(group_id)?.offset_from(pointer);
        board.bring_to_front(group_id);
        Some(Self {
            group_id,
            offset,
            moved: false,
        })
    }

    /// Start dragging the front-most group under the pointer, if any.
    pub fn grab(board: &mut Board, pointer: Point) -> Option<Self> {
        let group_id = board.group_at_point(pointer)?;
        Self::start(board, group_id, pointer)
    }

    /// Move the group so the grab point stays under the pointer. The first
    /// move records an undo state for the whole gesture.
    pub fn update(&mut self, board: &mut Board, pointer: Point) -> BoardResult<()> {
        if board.get_group(self.group_id).is_none() {
            return Err(BoardError::GroupNotFound(self.group_id));
        }
        if !self.moved {
            board.push_undo();
            self.moved = true;
        }
        board.move_group(self.group_id, pointer - self.offset)
    }

    /// End the gesture. Returns true if the group moved.
    pub fn finish(self) -> bool {
        self.moved
    }
}
