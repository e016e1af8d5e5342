//! End-to-end drop scenarios on a board.

use kurbo::{Point, Size};
use wireboard_core::{
    Board, BoardError, Group, Item, ItemDrag, LayoutConfig, locate_insertion, reflow_group,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sibling(x: f64, width: f64) -> Item {
    Item::new("Sibling").with_dimensions(width, 150.0).at(x, 20.0)
}

#[test]
fn drop_right_of_only_sibling_goes_after() {
    let siblings = [sibling(0.0, 200.0)];
    let refs: Vec<&Item> = siblings.iter().collect();

    let point = locate_insertion(300.0, 200.0, &refs, &LayoutConfig::default());
    assert_eq!(point.index, 1);
}

#[test]
fn drop_over_left_half_of_first_sibling_goes_first() {
    let siblings = [sibling(0.0, 200.0), sibling(250.0, 200.0)];
    let refs: Vec<&Item> = siblings.iter().collect();

    let point = locate_insertion(60.0, 200.0, &refs, &LayoutConfig::default());
    assert_eq!(point.index, 0);
}

#[test]
fn three_cards_pack_with_padding() {
    let cards = [
        Item::new("A").with_dimensions(200.0, 150.0),
        Item::new("B").with_dimensions(150.0, 180.0),
        Item::new("C").with_dimensions(180.0, 120.0),
    ];
    let refs: Vec<&Item> = cards.iter().collect();

    let reflow = reflow_group(&refs, &LayoutConfig::default());

    let xs: Vec<f64> = reflow.positions.iter().map(|(_, p)| p.x).collect();
    assert_eq!(xs, vec![20.0, 240.0, 410.0]);
    assert_eq!(reflow.size, Size::new(630.0, 220.0));
}

#[test]
fn move_into_empty_group_repacks_both() {
    init_logging();
    let mut board = Board::new();
    let a = board.add_group(Group::new("Group A", Point::new(20.0, 20.0)));
    let b = board.add_group(Group::new("Group B", Point::new(20.0, 300.0)));
    let first = board.add_item(Item::new("Node 1").in_group(a)).unwrap();
    let second = board
        .add_item(Item::new("Node 2").at(400.0, 0.0).in_group(a))
        .unwrap();

    let outcome = board.move_item_between_groups(first, Some(a), b, 300.0).unwrap();

    assert_eq!(outcome.to.positions, vec![(first, Point::new(20.0, 20.0))]);
    assert_eq!(board.members(b).len(), 1);
    assert_eq!(board.members(a).len(), 1);
    assert_eq!(board.get_item(second).unwrap().position, Point::new(20.0, 20.0));
    assert_eq!(board.get_group(a).unwrap().size, Size::new(400.0, 200.0));
}

#[test]
fn rejected_move_leaves_board_untouched() {
    init_logging();
    let mut board = Board::new();
    let a = board.add_group(Group::new("Group A", Point::ZERO));
    let item = board.add_item(Item::new("Node").in_group(a)).unwrap();
    let before = board.to_json().unwrap();

    let missing = uuid::Uuid::new_v4();
    assert_eq!(
        board.move_item(item, missing, 0.0),
        Err(BoardError::GroupNotFound(missing))
    );
    assert_eq!(board.to_json().unwrap(), before);
}

#[test]
fn drag_session_round_trip_through_json() {
    init_logging();
    let mut board = Board::with_config(LayoutConfig::spacious());
    let a = board.add_group(Group::new("Home", Point::new(0.0, 0.0)));
    let b = board.add_group(Group::new("Settings", Point::new(0.0, 400.0)));
    let card = board.add_item(Item::new("Profile").in_group(a)).unwrap();
    board.add_item(Item::new("Theme").in_group(b)).unwrap();

    let mut drag = ItemDrag::start(&board, card, Point::new(100.0, 100.0)).unwrap();
    // Card spans x 150..350 over Settings, half covering Theme at 50..250.
    assert_eq!(drag.update(&board, Point::new(200.0, 500.0)), Some(b));
    drag.finish(&mut board).unwrap();

    let loaded = Board::from_json(&board.to_json().unwrap()).unwrap();
    let order: Vec<_> = loaded.members(b).iter().map(|item| item.title.clone()).collect();
    assert_eq!(order, vec!["Theme".to_string(), "Profile".to_string()]);
    assert_eq!(loaded.get_item(card).unwrap().position, Point::new(300.0, 50.0));
}
