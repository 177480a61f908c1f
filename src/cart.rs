//! Cart Ledger
//!
//! In-memory cart keyed by plant id. Adding an existing id bumps its
//! quantity; removal drops the whole entry (there is deliberately no
//! single-step decrement). The total is recomputed on every call, never
//! cached.

use serde::{Deserialize, Serialize};

use crate::models::{parse_price, Plant, PlantId};

/// One cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: PlantId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Add a plant to the cart: increment on repeat id, insert otherwise.
/// An unparseable price is stored as 0.0.
pub fn add_item(items: &mut Vec<CartItem>, plant: &Plant) {
    if let Some(existing) = items.iter_mut().find(|item| item.id == plant.id) {
        existing.quantity += 1;
        return;
    }
    items.push(CartItem {
        id: plant.id.clone(),
        name: plant.display_name().to_string(),
        price: plant.price.as_deref().map(parse_price).unwrap_or(0.0),
        quantity: 1,
    });
}

/// Remove the whole entry for an id. Absent id is a no-op.
pub fn remove_item(items: &mut Vec<CartItem>, id: &PlantId) {
    items.retain(|item| &item.id != id);
}

/// Running total over all entries.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * item.quantity as f64)
        .sum()
}

/// Two-decimal rendering for totals and line prices.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plant(id: &str, name: &str, price: Option<&str>) -> Plant {
        Plant {
            id: PlantId::new(id),
            plant_name: Some(name.to_string()),
            name: None,
            price: price.map(str::to_string),
            short_description: None,
            description: None,
            category: None,
            image: None,
            life_span: None,
            native_region: None,
            water_needs: None,
        }
    }

    #[test]
    fn test_add_new_item() {
        let mut items = Vec::new();
        add_item(&mut items, &make_plant("1", "Mango Tree", Some("300")));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Mango Tree");
        assert_eq!(items[0].price, 300.0);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_add_same_id_twice_increments_quantity() {
        let mut items = Vec::new();
        let mango = make_plant("1", "Mango Tree", Some("300"));
        add_item(&mut items, &mango);
        add_item(&mut items, &mango);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(cart_total(&items), 600.0);
    }

    #[test]
    fn test_unparseable_price_stored_as_zero() {
        let mut items = Vec::new();
        add_item(&mut items, &make_plant("1", "Mystery", Some("priceless")));
        add_item(&mut items, &make_plant("2", "Unpriced", None));

        assert_eq!(items[0].price, 0.0);
        assert_eq!(items[1].price, 0.0);
        assert_eq!(cart_total(&items), 0.0);
    }

    #[test]
    fn test_cart_name_falls_back_to_name_field() {
        let mut plant = make_plant("1", "ignored", Some("10"));
        plant.plant_name = None;
        plant.name = Some("Alias".to_string());

        let mut items = Vec::new();
        add_item(&mut items, &plant);
        assert_eq!(items[0].name, "Alias");
    }

    #[test]
    fn test_remove_item() {
        let mut items = Vec::new();
        add_item(&mut items, &make_plant("1", "Mango Tree", Some("300")));
        add_item(&mut items, &make_plant("2", "Apple Tree", Some("250")));

        remove_item(&mut items, &PlantId::new("1"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Apple Tree");
    }

    #[test]
    fn test_remove_is_whole_entry_not_decrement() {
        let mut items = Vec::new();
        let mango = make_plant("1", "Mango Tree", Some("300"));
        add_item(&mut items, &mango);
        add_item(&mut items, &mango);

        remove_item(&mut items, &PlantId::new("1"));
        assert!(items.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut items = Vec::new();
        add_item(&mut items, &make_plant("1", "Mango Tree", Some("300")));

        let before = items.clone();
        remove_item(&mut items, &PlantId::new("999"));
        assert_eq!(items, before);
    }

    #[test]
    fn test_total_recomputed_after_each_mutation() {
        let mut items = Vec::new();
        add_item(&mut items, &make_plant("1", "Mango Tree", Some("300")));
        add_item(&mut items, &make_plant("2", "Ivy Plant", Some("90.50")));
        assert_eq!(cart_total(&items), 390.5);

        remove_item(&mut items, &PlantId::new("2"));
        assert_eq!(cart_total(&items), 300.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(390.5), "390.50");
        assert_eq!(format_amount(600.0), "600.00");
    }
}
