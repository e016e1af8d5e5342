//! Plan moves of an item within or between groups.

use super::{Reflow, locate_insertion, reflow_group, resolve_dimensions};
use crate::config::LayoutConfig;
use crate::item::Item;

/// Outcome of planning a move, ready to be written back.
#[derive(Debug, Clone, PartialEq)]
pub struct MovePlan {
    /// Slot the item takes among the destination's other members.
    pub index: usize,
    /// Reflow of the group the item left. `None` for reorders and for items
    /// that had no group.
    pub source: Option<Reflow>,
    /// Reflow of the group the item lands in, including the item.
    pub destination: Reflow,
}

/// Plan moving `item` out of `source` and into `destination` at `drop_x`.
///
/// `source` is `None` when the item is not in a group yet. Returns `None`
/// when `source` is given but does not contain the item. `drop_x` is in the
/// destination's coordinate space.
pub fn plan_move<'a>(
    item: &'a Item,
    source: Option<&[&'a Item]>,
    destination: &[&'a Item],
    drop_x: f64,
    config: &LayoutConfig,
) -> Option<MovePlan> {
    let remaining = match source {
        Some(members) => Some(without(item, members)?),
        None => None,
    };

    let siblings = without_unchecked(item, destination);
    let (index, destination) = insert_and_reflow(item, siblings, drop_x, config);

    Some(MovePlan {
        index,
        source: remaining.map(|members| reflow_group(&members, config)),
        destination,
    })
}

/// Plan moving `item` to a new slot within its own group.
///
/// Returns `None` when `members` does not contain the item.
pub fn plan_reorder<'a>(
    item: &'a Item,
    members: &[&'a Item],
    drop_x: f64,
    config: &LayoutConfig,
) -> Option<MovePlan> {
    let siblings = without(item, members)?;
    let (index, destination) = insert_and_reflow(item, siblings, drop_x, config);

    Some(MovePlan {
        index,
        source: None,
        destination,
    })
}

fn insert_and_reflow<'a>(
    item: &'a Item,
    mut siblings: Vec<&'a Item>,
    drop_x: f64,
    config: &LayoutConfig,
) -> (usize, Reflow) {
    let width = resolve_dimensions(item, config).width;
    let point = locate_insertion(drop_x, width, &siblings, config);
    siblings.insert(point.index, item);
    (point.index, reflow_group(&siblings, config))
}

/// Members other than `item`, or `None` if `item` is not among them.
fn without<'a>(item: &Item, members: &[&'a Item]) -> Option<Vec<&'a Item>> {
    members
        .iter()
        .any(|member| member.id == item.id)
        .then(|| without_unchecked(item, members))
}

fn without_unchecked<'a>(item: &Item, members: &[&'a Item]) -> Vec<&'a Item> {
    members
        .iter()
        .copied()
        .filter(|member| member.id != item.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn card(x: f64) -> Item {
        Item::new("Card").with_dimensions(200.0, 150.0).at(x, 20.0)
    }

    #[test]
    fn test_move_into_empty_group() {
        let config = LayoutConfig::default();
        let a = card(20.0);
        let b = card(240.0);

        let plan = plan_move(&a, Some(&[&a, &b][..]), &[], 300.0, &config).unwrap();

        assert_eq!(plan.index, 0);
        assert_eq!(plan.destination.position_of(a.id()), Some(Point::new(20.0, 20.0)));
        let source = plan.source.unwrap();
        assert_eq!(source.positions.len(), 1);
        assert_eq!(source.position_of(b.id()), Some(Point::new(20.0, 20.0)));
    }

    #[test]
    fn test_move_between_existing_members() {
        let config = LayoutConfig::default();
        let moving = card(20.0);
        let x = card(20.0);
        let y = card(240.0);

        // [200, 400] covers 160 of y's [240, 440]: 0.8, left of its centre.
        let plan = plan_move(&moving, None, &[&x, &y], 200.0, &config).unwrap();

        assert_eq!(plan.index, 1);
        assert!(plan.source.is_none());
        let order: Vec<_> = plan.destination.positions.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![x.id(), moving.id(), y.id()]);
    }

    #[test]
    fn test_move_rejects_item_missing_from_source() {
        let config = LayoutConfig::default();
        let a = card(20.0);
        let b = card(240.0);

        assert!(plan_move(&a, Some(&[&b][..]), &[], 0.0, &config).is_none());
    }

    #[test]
    fn test_reorder_to_front() {
        let config = LayoutConfig::default();
        let a = card(20.0);
        let b = card(240.0);
        let c = card(460.0);

        // c dropped over the left half of a.
        let plan = plan_reorder(&c, &[&a, &b, &c], 30.0, &config).unwrap();

        assert_eq!(plan.index, 0);
        let order: Vec<_> = plan.destination.positions.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![c.id(), a.id(), b.id()]);
        assert_eq!(plan.destination.position_of(a.id()), Some(Point::new(240.0, 20.0)));
    }

    #[test]
    fn test_reorder_in_place() {
        let config = LayoutConfig::default();
        let a = card(20.0);
        let b = card(240.0);

        let plan = plan_reorder(&b, &[&a, &b], 240.0, &config).unwrap();

        assert_eq!(plan.index, 1);
        assert_eq!(plan.destination.position_of(b.id()), Some(Point::new(240.0, 20.0)));
    }

    #[test]
    fn test_reorder_rejects_foreign_item() {
        let config = LayoutConfig::default();
        let a = card(20.0);
        let stranger = card(0.0);

        assert!(plan_reorder(&stranger, &[&a], 0.0, &config).is_none());
    }
}
