//! Category Classifier
//!
//! Maps a category label to a predicate over plant records. Each rule pairs a
//! substring test on the plant's category field with a set of known exemplar
//! names, so "Fruit Trees" still finds a mango whose category field is blank.

use crate::models::Plant;

struct CategoryRule {
    key: &'static str,
    /// Substring looked for in the plant's category field.
    category_hint: &'static str,
    /// Known plant-name substrings that imply this category.
    name_hints: &'static [&'static str],
}

const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule { key: "fruit", category_hint: "fruit", name_hints: &["mango", "apple", "orange"] },
    CategoryRule { key: "flowering", category_hint: "flower", name_hints: &["rose"] },
    CategoryRule { key: "shade", category_hint: "shade", name_hints: &["oak"] },
    CategoryRule { key: "medicinal", category_hint: "medicinal", name_hints: &["neem"] },
    CategoryRule { key: "timber", category_hint: "timber", name_hints: &["teak"] },
    CategoryRule { key: "evergreen", category_hint: "evergreen", name_hints: &["pine"] },
    CategoryRule { key: "ornamental", category_hint: "ornamental", name_hints: &["bonsai"] },
    CategoryRule { key: "bamboo", category_hint: "bamboo", name_hints: &["bamboo"] },
    CategoryRule { key: "climbers", category_hint: "climber", name_hints: &["ivy"] },
    CategoryRule { key: "aquatic", category_hint: "aquatic", name_hints: &["water", "lily"] },
];

/// Lowercase and strip the literal " trees" / " plants" suffixes.
pub fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .replace(" trees", "")
        .replace(" plants", "")
        .trim()
        .to_string()
}

fn category_field(plant: &Plant) -> String {
    plant.category.as_deref().unwrap_or("").to_lowercase()
}

fn matches_rule(plant: &Plant, rule: &CategoryRule) -> bool {
    if category_field(plant).contains(rule.category_hint) {
        return true;
    }
    let name = plant.display_name().to_lowercase();
    rule.name_hints.iter().any(|hint| name.contains(hint))
}

/// Filter the catalog by a category label. A label with no known rule falls
/// back to plain substring containment on the category field. An empty result
/// against a non-empty catalog yields the full catalog instead: the grid
/// never shows nothing.
pub fn filter_by_label(plants: &[Plant], label: &str) -> Vec<Plant> {
    let key = normalize_label(label);

    let filtered: Vec<Plant> = match CATEGORY_RULES.iter().find(|rule| rule.key == key) {
        Some(rule) => plants
            .iter()
            .filter(|plant| matches_rule(plant, rule))
            .cloned()
            .collect(),
        None => plants
            .iter()
            .filter(|plant| category_field(plant).contains(&key))
            .cloned()
            .collect(),
    };

    if filtered.is_empty() {
        plants.to_vec()
    } else {
        filtered
    }
}
