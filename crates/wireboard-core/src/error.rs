//! Board errors.

use crate::group::GroupId;
use crate::item::ItemId;
use thiserror::Error;

/// Why a board mutation was rejected. A rejected mutation leaves the board
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),
    #[error("Item {item} is not in group {group:?}")]
    NotInGroup { item: ItemId, group: Option<GroupId> },
    #[error("Item {0} is not in a group")]
    Ungrouped(ItemId),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
