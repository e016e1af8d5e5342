//! Resolve the size an item occupies in a row.

use crate::config::LayoutConfig;
use crate::item::Item;
use kurbo::Size;

/// Size of an item for layout purposes.
///
/// Always positive: missing, zero, negative or non-finite axes fall back to
/// the configured default item size, one axis at a time.
pub fn resolve_dimensions(item: &Item, config: &LayoutConfig) -> Size {
    resolve_size(item.dimensions, config.default_item_size)
}

/// Resolve an optional declared size against a fallback.
pub fn resolve_size(declared: Option<Size>, fallback: Size) -> Size {
    match declared {
        Some(size) => Size::new(
            usable_or(size.width, fallback.width),
            usable_or(size.height, fallback.height),
        ),
        None => fallback,
    }
}

fn usable_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_dimensions() {
        let item = Item::new("Home").with_dimensions(375.0, 812.0);
        let size = resolve_dimensions(&item, &LayoutConfig::default());
        assert_eq!(size, Size::new(375.0, 812.0));
    }

    #[test]
    fn test_missing_dimensions_default() {
        let item = Item::new("Home");
        let size = resolve_dimensions(&item, &LayoutConfig::default());
        assert_eq!(size, Size::new(200.0, 150.0));
    }

    #[test]
    fn test_bad_axes_fall_back_independently() {
        let config = LayoutConfig::default();

        let item = Item::new("Zero width").with_dimensions(0.0, 300.0);
        assert_eq!(resolve_dimensions(&item, &config), Size::new(200.0, 300.0));

        let item = Item::new("Negative height").with_dimensions(120.0, -4.0);
        assert_eq!(resolve_dimensions(&item, &config), Size::new(120.0, 150.0));

        let item = Item::new("NaN").with_dimensions(f64::NAN, f64::INFINITY);
        assert_eq!(resolve_dimensions(&item, &config), Size::new(200.0, 150.0));
    }
}
