//! Catalog Models
//!
//! Data structures matching the plant API wire shape.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Image shown when a plant record carries no image URL.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1562613539-e0c5c1e9e2c7?w=400&h=300&fit=crop";

/// Plant identifier. The API serves ids as numbers, the fallback catalog and
/// some payloads use strings; both normalize to the string form so lookups
/// and cart keys agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlantId(String);

impl PlantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PlantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => PlantId(s),
            Raw::Int(n) => PlantId(n.to_string()),
            Raw::Float(n) => PlantId(n.to_string()),
        })
    }
}

/// Accept a string or a bare number and keep its text form.
fn raw_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

/// Plant record as served by the API (or the fallback catalog).
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    #[serde(default)]
    pub plant_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw price text; the API mixes numbers and strings here.
    #[serde(default, deserialize_with = "raw_text")]
    pub price: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub native_region: Option<String>,
    #[serde(default)]
    pub water_needs: Option<String>,
}

impl Plant {
    /// Name shown on cards and in the modal.
    pub fn display_name(&self) -> &str {
        self.plant_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unknown Plant")
    }

    pub fn display_image(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_IMAGE)
    }

    pub fn display_category(&self) -> &str {
        self.category.as_deref().unwrap_or("General")
    }

    /// Raw price text for display; the cart parses it separately.
    pub fn display_price(&self) -> &str {
        self.price.as_deref().unwrap_or("0.00")
    }

    pub fn display_short_description(&self) -> &str {
        self.short_description
            .as_deref()
            .unwrap_or("A beautiful tree that contributes to our environment.")
    }

    /// Long-form description for the modal, falling back to the short one.
    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .or(self.short_description.as_deref())
            .unwrap_or("No description available.")
    }
}

/// Category record as served by the categories endpoint. Fetched at startup
/// but not used to drive the rendered category list, which is hardcoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(default)]
    pub id: Option<PlantId>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Parse a price field the way the original UI did: longest leading float
/// prefix, 0.0 when nothing numeric leads the string.
pub fn parse_price(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            digits += 1;
        }
        if j > end + 1 {
            end = j;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_id_from_number_and_string() {
        let from_num: PlantId = serde_json::from_str("7").unwrap();
        let from_str: PlantId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_num, from_str);
        assert_eq!(from_num.as_str(), "7");
    }

    #[test]
    fn test_plant_deserializes_numeric_price() {
        let plant: Plant =
            serde_json::from_str(r#"{"id": 1, "plant_name": "Mango Tree", "price": 300}"#).unwrap();
        assert_eq!(plant.price.as_deref(), Some("300"));
        assert_eq!(plant.display_name(), "Mango Tree");
    }

    #[test]
    fn test_plant_defaults_for_missing_fields() {
        let plant: Plant = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(plant.display_name(), "Unknown Plant");
        assert_eq!(plant.display_category(), "General");
        assert_eq!(plant.display_price(), "0.00");
        assert_eq!(plant.display_image(), DEFAULT_IMAGE);
    }

    #[test]
    fn test_name_fallback_order() {
        let plant: Plant = serde_json::from_str(r#"{"id": 1, "name": "Alias"}"#).unwrap();
        assert_eq!(plant.display_name(), "Alias");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("300"), 300.0);
        assert_eq!(parse_price("325.50"), 325.5);
        assert_eq!(parse_price("300 Tk"), 300.0);
        assert_eq!(parse_price(" .5"), 0.5);
        assert_eq!(parse_price("-20"), -20.0);
        assert_eq!(parse_price("free"), 0.0);
        assert_eq!(parse_price("$300"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("."), 0.0);
    }
}
