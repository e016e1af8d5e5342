//! Map a drop coordinate to an insertion slot among ordered siblings.

use super::resolve_dimensions;
use crate::config::LayoutConfig;
use crate::item::Item;

/// Where a dropped item lands in a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionPoint {
    /// Index among the siblings, in `0..=siblings.len()`.
    pub index: usize,
    /// Provisional x for the dropped item before the row is repacked.
    pub x: f64,
}

/// Locate the insertion slot for an item dropped at `drop_x`.
///
/// `siblings` must be in row order and must not contain the moving item.
/// A sibling covered by more than `overlap_threshold` of its width decides by
/// its centre: drops left of the centre go before it, the rest after. A drop
/// left of a sibling it barely touches goes before it. Otherwise the scan
/// continues, and a drop past every sibling goes last.
///
/// A non-positive or non-finite `moving_width` is treated as the default
/// item width.
pub fn locate_insertion(
    drop_x: f64,
    moving_width: f64,
    siblings: &[&Item],
    config: &LayoutConfig,
) -> InsertionPoint {
    if siblings.is_empty() {
        return InsertionPoint {
            index: 0,
            x: config.padding,
        };
    }

    let moving_width = if moving_width.is_finite() && moving_width > 0.0 {
        moving_width
    } else {
        config.default_item_size.width
    };

    let index = insertion_index(drop_x, moving_width, siblings, config);
    let x = suggested_x(index, drop_x, moving_width, siblings, config);
    log::trace!("drop at x={drop_x} (width {moving_width}) -> slot {index}, x={x}");

    InsertionPoint { index, x }
}

fn insertion_index(
    drop_x: f64,
    moving_width: f64,
    siblings: &[&Item],
    config: &LayoutConfig,
) -> usize {
    let moving_right = drop_x + moving_width;

    for (i, sibling) in siblings.iter().enumerate() {
        let width = resolve_dimensions(sibling, config).width;
        let left = sibling.position.x;
        let right = left + width;
        let center = left + width / 2.0;

        let overlap = (moving_right.min(right) - drop_x.max(left)).max(0.0);
        let overlap_pct = overlap / width;

        if overlap_pct > config.overlap_threshold {
            return if drop_x < center { i } else { i + 1 };
        }
        if drop_x < left {
            return i;
        }
    }

    siblings.len()
}

fn suggested_x(
    index: usize,
    drop_x: f64,
    moving_width: f64,
    siblings: &[&Item],
    config: &LayoutConfig,
) -> f64 {
    let padding = config.padding;
    let Some(left) = index.checked_sub(1).and_then(|i| siblings.get(i)) else {
        return padding;
    };
    let left_right = left.position.x + resolve_dimensions(left, config).width;
    let packed = left_right + padding;

    match siblings.get(index) {
        Some(right) if right.position.x - left_right >= config.wide_gap => {
            // Not f64::clamp: the upper bound can fall below the lower one.
            packed.max(drop_x.min(right.position.x - moving_width - padding))
        }
        _ => packed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sibling(x: f64, width: f64) -> Item {
        Item::new("Sibling").with_dimensions(width, 150.0).at(x, 20.0)
    }

    fn locate(drop_x: f64, moving_width: f64, siblings: &[Item]) -> InsertionPoint {
        let refs: Vec<&Item> = siblings.iter().collect();
        locate_insertion(drop_x, moving_width, &refs, &LayoutConfig::default())
    }

    #[test]
    fn test_empty_row() {
        let point = locate(350.0, 200.0, &[]);
        assert_eq!(point.index, 0);
        assert!((point.x - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drop_clear_of_last_sibling_goes_after() {
        let point = locate(300.0, 200.0, &[sibling(0.0, 200.0)]);
        assert_eq!(point.index, 1);
        assert!((point.x - 220.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heavy_overlap_left_of_centre_goes_before() {
        let siblings = [sibling(0.0, 200.0), sibling(250.0, 200.0)];
        // [60, 260] covers 140 of [0, 200]: 0.7 > 0.3, and 60 < centre 100.
        let point = locate(60.0, 200.0, &siblings);
        assert_eq!(point.index, 0);
        assert!((point.x - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heavy_overlap_right_of_centre_goes_after() {
        let siblings = [sibling(0.0, 200.0), sibling(250.0, 200.0)];
        // [120, 320] covers 80 of [0, 200]: 0.4 > 0.3, and 120 >= centre 100.
        let point = locate(120.0, 200.0, &siblings);
        assert_eq!(point.index, 1);
    }

    #[test]
    fn test_drop_on_centre_goes_after() {
        let point = locate(100.0, 200.0, &[sibling(0.0, 200.0)]);
        assert_eq!(point.index, 1);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // [140, 340] covers exactly 60 of [0, 200]: 0.3 is not enough and the
        // drop is not left of it, so the scan moves on to the next sibling.
        let point = locate(140.0, 200.0, &[sibling(0.0, 200.0), sibling(500.0, 200.0)]);
        assert_eq!(point.index, 1);

        // [-140, 60] also covers exactly 60, but starts left of the sibling.
        let point = locate(-140.0, 200.0, &[sibling(0.0, 200.0)]);
        assert_eq!(point.index, 0);
    }

    #[test]
    fn test_light_overlap_left_of_sibling_goes_before() {
        let siblings = [sibling(20.0, 200.0), sibling(240.0, 200.0)];
        // [230, 280] covers 40 of [240, 440]: 0.2, and 230 < 240.
        let point = locate(230.0, 50.0, &siblings);
        assert_eq!(point.index, 1);
        assert!((point.x - 240.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wide_gap_keeps_drop_x() {
        let siblings = [sibling(20.0, 200.0), sibling(400.0, 200.0)];

        let point = locate(250.0, 100.0, &siblings);
        assert_eq!(point.index, 1);
        assert!((point.x - 250.0).abs() < f64::EPSILON);

        // Too close to the left neighbour: pushed out to its edge plus padding.
        let point = locate(225.0, 100.0, &siblings);
        assert_eq!(point.index, 1);
        assert!((point.x - 240.0).abs() < f64::EPSILON);

        // Too close to the right neighbour: pulled back so it still fits.
        let point = locate(300.0, 100.0, &siblings);
        assert_eq!(point.index, 1);
        assert!((point.x - 280.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_narrow_gap_packs_after_left_neighbour() {
        let siblings = [sibling(20.0, 200.0), sibling(240.0, 200.0)];
        let point = locate(225.0, 10.0, &siblings);
        assert_eq!(point.index, 1);
        assert!((point.x - 240.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_moving_width_uses_default() {
        // With the default 200 width, [60, 260] overlaps [0, 200] by 0.7.
        let siblings = [sibling(0.0, 200.0), sibling(250.0, 200.0)];
        assert_eq!(locate(60.0, 0.0, &siblings).index, 0);
        assert_eq!(locate(60.0, f64::NAN, &siblings).index, 0);
    }
}
