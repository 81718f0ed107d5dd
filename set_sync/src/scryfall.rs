//! Scryfall set catalog client
//!
//! Uses async reqwest. The catalog is paginated in principle; pages are
//! followed until `has_more` is false.

use chrono::NaiveDate;
use mtg_common::{MtgError, Result};
use serde::Deserialize;
use std::path::Path;

pub const SCRYFALL_API: &str = "https://api.scryfall.com";

const USER_AGENT: &str = "D2D-Automations-SetSync/1.0";

/// One entry of the Scryfall set catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScryfallSet {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub released_at: Option<NaiveDate>,
    #[serde(default)]
    pub set_type: String,
    #[serde(default)]
    pub digital: bool,
}

/// A page of the `/sets` list response
#[derive(Debug, Deserialize)]
pub struct SetList {
    pub data: Vec<ScryfallSet>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// Fetch the full set catalog from the public Scryfall API
pub async fn fetch_sets() -> Result<Vec<ScryfallSet>> {
    fetch_sets_from(SCRYFALL_API).await
}

/// Fetch the full set catalog from `base_url`
pub async fn fetch_sets_from(base_url: &str) -> Result<Vec<ScryfallSet>> {
    let client = reqwest::Client::new();
    let mut url = format!("{}/sets", base_url.trim_end_matches('/'));
    let mut sets = Vec::new();

    loop {
        log::debug!("Fetching set list page: {}", url);

        let response = client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MtgError::HttpStatus(response.status()));
        }

        let page: SetList = response.json().await?;
        sets.extend(page.data);

        match page.next_page {
            Some(next) if page.has_more => url = next,
            _ => break,
        }
    }

    log::info!("Fetched {} sets from Scryfall", sets.len());
    Ok(sets)
}

/// Read a previously downloaded `/sets` response from disk
pub fn read_sets<P: AsRef<Path>>(path: P) -> Result<Vec<ScryfallSet>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let list: SetList = serde_json::from_str(&content)?;
    Ok(list.data)
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
