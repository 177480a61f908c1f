//! Catalog Store
//!
//! The fixed category list and the rule for what the grid displays. The
//! category list is deliberately hardcoded; the categories endpoint is
//! fetched at startup but its payload does not drive this list.

use crate::classify;
use crate::models::Plant;

/// The aggregate entry that shows the unfiltered catalog.
pub const ALL_TREES: &str = "All Trees";

/// A sidebar category. `is_main` marks the single aggregate entry.
pub struct Category {
    pub name: &'static str,
    pub is_main: bool,
}

pub const CATEGORIES: &[Category] = &[
    Category { name: ALL_TREES, is_main: true },
    Category { name: "Fruit Trees", is_main: false },
    Category { name: "Flowering Trees", is_main: false },
    Category { name: "Shade Trees", is_main: false },
    Category { name: "Medicinal Trees", is_main: false },
    Category { name: "Timber Trees", is_main: false },
    Category { name: "Evergreen Trees", is_main: false },
    Category { name: "Ornamental Plants", is_main: false },
    Category { name: "Bamboo", is_main: false },
    Category { name: "Climbers", is_main: false },
    Category { name: "Aquatic Plants", is_main: false },
];

/// The set of plants the grid shows for a category selection.
pub fn displayed_for(all_plants: &[Plant], label: &str) -> Vec<Plant> {
    if label == ALL_TREES {
        all_plants.to_vec()
    } else {
        classify::filter_by_label(all_plants, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart;
    use crate::fallback::fallback_plants;

    #[test]
    fn test_eleven_categories_one_main() {
        assert_eq!(CATEGORIES.len(), 11);
        assert_eq!(CATEGORIES.iter().filter(|c| c.is_main).count(), 1);
        assert_eq!(CATEGORIES[0].name, ALL_TREES);
    }

    #[test]
    fn test_all_trees_shows_everything() {
        let plants = fallback_plants();
        // Filter first, then go back to All Trees: length and identity match.
        let _ = displayed_for(&plants, "Fruit Trees");
        let displayed = displayed_for(&plants, ALL_TREES);
        assert_eq!(displayed, plants);
    }

    #[test]
    fn test_fruit_selection_filters() {
        let plants = fallback_plants();
        let displayed = displayed_for(&plants, "Fruit Trees");
        assert_eq!(displayed.len(), 3); // Mango, Apple, Orange
        assert!(displayed.iter().all(|p| p.display_category() == "Fruit Trees"));
    }

    #[test]
    fn test_fallback_load_then_cart_flow() {
        // Gateway failed: the fallback catalog backs the grid.
        let plants = fallback_plants();
        let displayed = displayed_for(&plants, ALL_TREES);
        assert_eq!(displayed.len(), 12);

        let mango = displayed
            .iter()
            .find(|p| p.display_name() == "Mango Tree")
            .unwrap();

        let mut items = Vec::new();
        cart::add_item(&mut items, mango);
        assert_eq!(items.len(), 1);
        assert_eq!(cart::format_amount(cart::cart_total(&items)), "300.00");

        cart::add_item(&mut items, mango);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(cart::format_amount(cart::cart_total(&items)), "600.00");

        let id = items[0].id.clone();
        cart::remove_item(&mut items, &id);
        assert!(items.is_empty());
        assert_eq!(cart::format_amount(cart::cart_total(&items)), "0.00");
    }
}
