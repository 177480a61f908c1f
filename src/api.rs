//! Remote Data Gateway
//!
//! Thin wrappers over the plant REST API. Each call performs one GET, parses
//! the `{ "data": ... }` envelope, and hands back the payload. No retries and
//! no error transformation beyond stringifying; callers decide how to degrade.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{CategoryRecord, Plant, PlantId};

const ALL_PLANTS_URL: &str = "https://openapi.programming-hero.com/api/plants";
const CATEGORIES_URL: &str = "https://openapi.programming-hero.com/api/categories";
const CATEGORY_BASE_URL: &str = "https://openapi.programming-hero.com/api/category/";
const PLANT_DETAIL_BASE_URL: &str = "https://openapi.programming-hero.com/api/plant/";

/// Response envelope; `data` may be absent entirely.
#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;
    let text = resp.text().await.map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

pub async fn fetch_all_plants() -> Result<Vec<Plant>, String> {
    let envelope: Envelope<Vec<Plant>> = get_json(ALL_PLANTS_URL).await?;
    Ok(envelope.data.unwrap_or_default())
}

pub async fn fetch_categories() -> Result<Vec<CategoryRecord>, String> {
    let envelope: Envelope<Vec<CategoryRecord>> = get_json(CATEGORIES_URL).await?;
    Ok(envelope.data.unwrap_or_default())
}

/// Server-side category filter. Reserved: filtering currently happens
/// client-side against the full catalog, so nothing calls this yet.
pub async fn fetch_plants_by_category(category_id: &str) -> Result<Vec<Plant>, String> {
    let envelope: Envelope<Vec<Plant>> =
        get_json(&format!("{CATEGORY_BASE_URL}{category_id}")).await?;
    Ok(envelope.data.unwrap_or_default())
}

pub async fn fetch_plant_by_id(id: &PlantId) -> Result<Option<Plant>, String> {
    let envelope: Envelope<Plant> = get_json(&format!("{PLANT_DETAIL_BASE_URL}{id}")).await?;
    Ok(envelope.data)
}
