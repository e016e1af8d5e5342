//! Board document: items, groups, and layout history.

use crate::config::{ConfigError, LayoutConfig};
use crate::error::{BoardError, BoardResult};
use crate::group::{Group, GroupId};
use crate::item::{Item, ItemId};
use crate::layout::{
    self, DropIndicator, MovePlan, Reflow, plan_move, plan_reorder, reflow_group,
    resolve_dimensions,
};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// A snapshot of layout state for undo/redo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct BoardSnapshot {
    items: HashMap<ItemId, Item>,
    groups: HashMap<GroupId, Group>,
    group_order: Vec<GroupId>,
}

/// New size and member positions written to one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupUpdate {
    pub group_id: GroupId,
    pub size: Size,
    /// Group-relative positions in member order.
    pub positions: Vec<(ItemId, Point)>,
}

/// What a successful move changed.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub item_id: ItemId,
    /// Slot the item took in its destination group.
    pub index: usize,
    /// The group the item left. `None` for reorders and for items that had
    /// no group.
    pub from: Option<GroupUpdate>,
    /// The group the item is in now.
    pub to: GroupUpdate,
}

/// The wireframe board: every item and group plus the layout parameters.
///
/// The board is owned by the caller and mutated through `&mut self`, so a
/// drop's locate, splice and reflow always run as one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Unique board identifier.
    pub id: String,
    /// Board name.
    pub name: String,
    #[serde(default)]
    config: LayoutConfig,
    #[serde(default)]
    items: HashMap<ItemId, Item>,
    #[serde(default)]
    groups: HashMap<GroupId, Group>,
    /// Group order (back to front).
    #[serde(default)]
    group_order: Vec<GroupId>,
    #[serde(skip)]
    undo_stack: Vec<BoardSnapshot>,
    #[serde(skip)]
    redo_stack: Vec<BoardSnapshot>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with the default layout parameters.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create an empty board with the given layout parameters.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            config,
            items: HashMap::new(),
            groups: HashMap::new(),
            group_order: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the layout parameters and repack every group.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.reflow_all();
        Ok(())
    }

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            items: self.items.clone(),
            groups: self.groups.clone(),
            group_order: self.group_order.clone(),
        }
    }

    fn restore(&mut self, snapshot: BoardSnapshot) {
        self.items = snapshot.items;
        self.groups = snapshot.groups;
        self.group_order = snapshot.group_order;
    }

    /// Push current state to the undo stack (call before making changes).
    pub fn push_undo(&mut self) {
        let snapshot = self.snapshot();
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        let current = self.snapshot();
        self.redo_stack.push(current);
        self.restore(snapshot);
        true
    }

    /// Redo the last undone change. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        let current = self.snapshot();
        self.undo_stack.push(current);
        self.restore(snapshot);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Add a group and size it for its current members.
    pub fn add_group(&mut self, group: Group) -> GroupId {
        let id = group.id;
        if !self.group_order.contains(&id) {
            self.group_order.push(id);
        }
        self.groups.insert(id, group);
        self.reflow(id);
        id
    }

    /// Remove a group. Its members become top-level items and keep their
    /// place on the board.
    pub fn remove_group(&mut self, id: GroupId) -> Option<Group> {
        let group = self.groups.remove(&id)?;
        self.group_order.retain(|&group_id| group_id != id);

        for item in self.items.values_mut() {
            if item.group_id == Some(id) {
                item.group_id = None;
                item.position = group.to_board(item.position);
            }
        }
        log::debug!("Removed group {} ({})", group.title, id);
        Some(group)
    }

    /// Add an item. A grouped item joins its group's row at its current x.
    /// Adding an id that is already on the board replaces that item, and the
    /// group it leaves closes the gap.
    pub fn add_item(&mut self, item: Item) -> BoardResult<ItemId> {
        if let Some(group_id) = item.group_id {
            if !self.groups.contains_key(&group_id) {
                return Err(BoardError::GroupNotFound(group_id));
            }
        }
        let id = item.id;
        let group_id = item.group_id;
        let previous = self.items.insert(id, item).and_then(|old| old.group_id);
        if let Some(previous) = previous.filter(|&old| Some(old) != group_id) {
            log::debug!("Item {} replaced, leaving group {}", id, previous);
            self.reflow(previous);
        }
        if let Some(group_id) = group_id {
            self.reflow(group_id);
        }
        Ok(id)
    }

    /// Remove an item, closing the gap it leaves in its group.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let item = self.items.remove(&id)?;
        if let Some(group_id) = item.group_id {
            self.reflow(group_id);
        }
        Some(item)
    }

    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn get_group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// All items, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Groups in order (back to front).
    pub fn groups_ordered(&self) -> impl Iterator<Item = &Group> {
        self.group_order.iter().filter_map(|id| self.groups.get(id))
    }

    /// Members of a group in row order: ascending x, ties broken by id.
    pub fn members(&self, group_id: GroupId) -> Vec<&Item> {
        let mut members: Vec<&Item> = self
            .items
            .values()
            .filter(|item| item.group_id == Some(group_id))
            .collect();
        members.sort_by(|a, b| {
            a.position
                .x
                .total_cmp(&b.position.x)
                .then_with(|| a.id.cmp(&b.id))
        });
        members
    }

    /// Repack one group from its current members.
    pub fn reflow_group(&mut self, group_id: GroupId) -> BoardResult<GroupUpdate> {
        self.reflow(group_id).ok_or(BoardError::GroupNotFound(group_id))
    }

    /// Repack every group.
    pub fn reflow_all(&mut self) {
        for id in self.group_order.clone() {
            self.reflow(id);
        }
    }

    fn reflow(&mut self, group_id: GroupId) -> Option<GroupUpdate> {
        if !self.groups.contains_key(&group_id) {
            return None;
        }
        let reflow = reflow_group(&self.members(group_id), &self.config);
        Some(self.apply_reflow(group_id, reflow))
    }

    fn apply_reflow(&mut self, group_id: GroupId, reflow: Reflow) -> GroupUpdate {
        for &(id, position) in &reflow.positions {
            if let Some(item) = self.items.get_mut(&id) {
                item.position = position;
            }
        }
        if let Some(group) = self.groups.get_mut(&group_id) {
            group.size = reflow.size;
        }
        log::debug!(
            "Reflowed group {} to {}x{} with {} members",
            group_id,
            reflow.size.width,
            reflow.size.height,
            reflow.positions.len()
        );
        GroupUpdate {
            group_id,
            size: reflow.size,
            positions: reflow.positions,
        }
    }

    /// Move an item from `from` into `to`, dropping it at `drop_x` in `to`'s
    /// coordinates. `from` is `None` for a top-level item. Moving within one
    /// group reorders it.
    ///
    /// On error nothing changes: the item is unknown, is not in `from`, or
    /// either group is unknown.
    pub fn move_item_between_groups(
        &mut self,
        item_id: ItemId,
        from: Option<GroupId>,
        to: GroupId,
        drop_x: f64,
    ) -> BoardResult<MoveOutcome> {
        let plan = match self.plan_item_move(item_id, from, to, drop_x) {
            Ok(plan) => plan,
            Err(err) => {
                log::warn!("Move rejected, board unchanged: {}", err);
                return Err(err);
            }
        };

        self.push_undo();
        if let Some(item) = self.items.get_mut(&item_id) {
            item.group_id = Some(to);
        }
        let from_update = match (from, plan.source) {
            (Some(from), Some(reflow)) => Some(self.apply_reflow(from, reflow)),
            _ => None,
        };
        let to_update = self.apply_reflow(to, plan.destination);
        log::info!("Moved item {} into group {} at slot {}", item_id, to, plan.index);

        Ok(MoveOutcome {
            item_id,
            index: plan.index,
            from: from_update,
            to: to_update,
        })
    }

    /// Move an item from wherever it is now into `to`.
    pub fn move_item(
        &mut self,
        item_id: ItemId,
        to: GroupId,
        drop_x: f64,
    ) -> BoardResult<MoveOutcome> {
        let from = self
            .items
            .get(&item_id)
            .ok_or(BoardError::ItemNotFound(item_id))?
            .group_id;
        self.move_item_between_groups(item_id, from, to, drop_x)
    }

    /// Move an item to a new slot within its own group.
    pub fn reorder_item(&mut self, item_id: ItemId, drop_x: f64) -> BoardResult<MoveOutcome> {
        let group_id = self
            .items
            .get(&item_id)
            .ok_or(BoardError::ItemNotFound(item_id))?
            .group_id
            .ok_or(BoardError::Ungrouped(item_id))?;
        self.move_item_between_groups(item_id, Some(group_id), group_id, drop_x)
    }

    fn plan_item_move(
        &self,
        item_id: ItemId,
        from: Option<GroupId>,
        to: GroupId,
        drop_x: f64,
    ) -> BoardResult<MovePlan> {
        let item = self
            .items
            .get(&item_id)
            .ok_or(BoardError::ItemNotFound(item_id))?;
        if item.group_id != from {
            return Err(BoardError::NotInGroup { item: item_id, group: from });
        }
        if let Some(from) = from {
            if !self.groups.contains_key(&from) {
                return Err(BoardError::GroupNotFound(from));
            }
        }
        if !self.groups.contains_key(&to) {
            return Err(BoardError::GroupNotFound(to));
        }

        let destination = self.members(to);
        let plan = if from == Some(to) {
            plan_reorder(item, &destination, drop_x, &self.config)
        } else {
            let source = from.map(|id| self.members(id));
            plan_move(item, source.as_deref(), &destination, drop_x, &self.config)
        };
        plan.ok_or(BoardError::NotInGroup { item: item_id, group: from })
    }

    /// Move a group's anchor. Members keep their group-relative positions.
    pub fn move_group(&mut self, group_id: GroupId, position: Point) -> BoardResult<()> {
        let group = self
            .groups
            .get_mut(&group_id)
            .ok_or(BoardError::GroupNotFound(group_id))?;
        group.position = position;
        Ok(())
    }

    /// Bring a group to the front.
    pub fn bring_to_front(&mut self, group_id: GroupId) {
        if self.groups.contains_key(&group_id) {
            self.group_order.retain(|&id| id != group_id);
            self.group_order.push(group_id);
        }
    }

    /// Item bounds in board coordinates.
    pub fn item_bounds(&self, id: ItemId) -> Option<Rect> {
        let item = self.items.get(&id)?;
        let local = item.local_bounds(&self.config);
        match item.group_id.and_then(|group_id| self.groups.get(&group_id)) {
            Some(group) => Some(local + group.position.to_vec2()),
            None => Some(local),
        }
    }

    /// Bounding box of every group and top-level item.
    pub fn bounds(&self) -> Option<Rect> {
        let groups = self.groups.values().map(Group::bounds);
        let loose = self
            .items
            .values()
            .filter(|item| item.group_id.is_none())
            .map(|item| item.local_bounds(&self.config));
        groups.chain(loose).reduce(|a, b| a.union(b))
    }

    /// Front-most group containing a board point.
    pub fn group_at_point(&self, point: Point) -> Option<GroupId> {
        self.group_order
            .iter()
            .rev()
            .copied()
            .find(|id| self.groups.get(id).is_some_and(|g| g.bounds().contains(point)))
    }

    /// Items whose board bounds overlap a rectangle, in no particular order.
    pub fn items_in_rect(&self, rect: Rect) -> Vec<ItemId> {
        self.items
            .keys()
            .copied()
            .filter(|&id| {
                self.item_bounds(id)
                    .is_some_and(|bounds| rect.intersect(bounds).area() > 0.0)
            })
            .collect()
    }

    /// The group a dragged item would drop into: the first group in order
    /// whose box overlaps `item_rect` (board coordinates), skipping the
    /// item's own group.
    pub fn drop_target(&self, item_id: ItemId, item_rect: Rect) -> Option<GroupId> {
        let own = self.items.get(&item_id).and_then(|item| item.group_id);
        self.groups_ordered()
            .filter(|group| Some(group.id) != own)
            .find(|group| group.bounds().intersect(item_rect).area() > 0.0)
            .map(Group::id)
    }

    /// Insertion marker for `item_id` hovering over `group_id` at `drop_x`
    /// (group coordinates). With no item the default item width is assumed.
    pub fn drop_indicator(
        &self,
        group_id: GroupId,
        item_id: Option<ItemId>,
        drop_x: f64,
    ) -> BoardResult<DropIndicator> {
        if !self.groups.contains_key(&group_id) {
            return Err(BoardError::GroupNotFound(group_id));
        }
        let width = match item_id {
            Some(id) => {
                let item = self.items.get(&id).ok_or(BoardError::ItemNotFound(id))?;
                resolve_dimensions(item, &self.config).width
            }
            None => self.config.default_item_size.width,
        };
        let siblings: Vec<&Item> = self
            .members(group_id)
            .into_iter()
            .filter(|item| Some(item.id) != item_id)
            .collect();
        Ok(layout::drop_indicator(drop_x, width, &siblings, &self.config))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.groups.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Serialize the board to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a board from JSON and repair it: dangling group
    /// references are dropped, the group order is completed, an invalid
    /// config is replaced by the default, and every group is repacked.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut board: Self = serde_json::from_str(json)?;
        board.normalize();
        Ok(board)
    }

    fn normalize(&mut self) {
        if let Err(err) = self.config.validate() {
            log::warn!("Ignoring invalid layout config: {}", err);
            self.config = LayoutConfig::default();
        }

        self.items = rekey(std::mem::take(&mut self.items), "item", |item| item.id).0;
        let (groups, renamed) = rekey(std::mem::take(&mut self.groups), "group", |group| group.id);
        self.groups = groups;
        for id in &mut self.group_order {
            if let Some(&new_id) = renamed.get(id) {
                *id = new_id;
            }
        }
        for item in self.items.values_mut() {
            if let Some(&new_id) = item.group_id.and_then(|id| renamed.get(&id)) {
                item.group_id = Some(new_id);
            }
        }

        let groups = &self.groups;
        let mut seen = HashSet::new();
        self.group_order
            .retain(|id| groups.contains_key(id) && seen.insert(*id));
        let mut missing: Vec<GroupId> = groups
            .keys()
            .filter(|id| !seen.contains(*id))
            .copied()
            .collect();
        missing.sort();
        self.group_order.extend(missing);

        for item in self.items.values_mut() {
            if let Some(group_id) = item.group_id {
                if !self.groups.contains_key(&group_id) {
                    log::warn!("Item {} refers to missing group {}", item.id, group_id);
                    item.group_id = None;
                }
            }
        }

        self.reflow_all();
    }
}

/// Key every entry by its own id. Returns the map and the keys that changed
/// (old key to id).
fn rekey<T>(
    map: HashMap<Uuid, T>,
    kind: &str,
    id_of: impl Fn(&T) -> Uuid,
) -> (HashMap<Uuid, T>, HashMap<Uuid, Uuid>) {
    let mut rekeyed = HashMap::with_capacity(map.len());
    let mut renamed = HashMap::new();
    for (key, value) in map {
        let id = id_of(&value);
        if key != id {
            log::warn!("Stored {} key {} does not match its id {}", kind, key, id);
            renamed.insert(key, id);
        }
        if rekeyed.insert(id, value).is_some() {
            log::warn!("Duplicate {} id {}, keeping one", kind, id);
        }
    }
    (rekeyed, renamed)
}
