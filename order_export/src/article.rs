//! Cardmarket article rows → export records.
//!
//! A [`RawArticle`] is the key/value bag of one order table row (the row's
//! `data-*` attributes). Values arrive as strings or numbers depending on
//! the source, so every field is read leniently as an optional string.

use crate::error::{ExportError, ExportResult};
use crate::resolver::SetCodeResolver;
use crate::unknown_sets::UnknownSetTracker;
use mtg_common::{Condition, Language};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw fields of one article row
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(
        default,
        rename = "expansion-name",
        alias = "expansionName",
        alias = "expansion_name",
        deserialize_with = "lenient_string"
    )]
    pub expansion_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub condition: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
    /// Collector number
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: Option<String>,
    /// Foil marker; present on foil articles
    #[serde(default, deserialize_with = "lenient_string")]
    pub foil: Option<String>,
}

impl RawArticle {
    /// Returns true if the foil marker is present and not explicitly off
    pub fn is_foil(&self) -> bool {
        match self.foil.as_deref().map(str::trim) {
            None => false,
            Some(marker) => !matches!(
                marker.to_ascii_lowercase().as_str(),
                "0" | "false" | "no"
            ),
        }
    }

    fn condition(&self) -> Condition {
        parse_id(self.condition.as_deref())
            .and_then(Condition::from_id)
            .unwrap_or_default()
    }

    fn language(&self) -> Language {
        parse_id(self.language.as_deref())
            .and_then(Language::from_id)
            .unwrap_or_default()
    }
}

/// Accepts strings, numbers and booleans; null becomes `None`. Arrays and
/// objects are rejected.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(value.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

fn parse_id(value: Option<&str>) -> Option<i64> {
    value.and_then(parse_whole)
}

/// Integer value of `value`, also accepting whole decimals such as `2.0`
/// (numbers that went through a float on the way in)
fn parse_whole(value: &str) -> Option<i64> {
    let value = value.trim();
    value.parse::<i64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One row of a Moxfield collection import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub count: u32,
    pub name: String,
    pub edition: String,
    pub condition: String,
    pub language: String,
    pub foil: String,
    pub collector_number: String,
    pub alter: String,
    pub playtest_card: String,
    pub purchase_price: String,
}

/// One row of a Deckbox.org inventory import
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckboxRecord {
    #[serde(rename = "Count")]
    pub count: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Edition")]
    pub edition: String,
    #[serde(rename = "Card Number")]
    pub card_number: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Foil")]
    pub foil: u8,
    #[serde(rename = "Price")]
    pub price: String,
}

/// Strip variant suffixes such as `(V.1)` and replace the Æ ligature.
/// Names that start with `(` are kept whole.
pub fn clean_card_name(raw_name: &str) -> String {
    let before_paren = raw_name.split('(').next().unwrap_or_default().trim();
    let name = if before_paren.is_empty() {
        raw_name.trim()
    } else {
        before_paren
    };
    name.replacen('Æ', "Ae", 1).replacen('æ', "ae", 1)
}

/// Required fields of a row, or `None` if either is missing
fn required_fields(raw: &RawArticle) -> ExportResult<Option<(&str, u32)>> {
    let (Some(name), Some(amount)) = (
        non_blank(raw.name.as_deref()),
        non_blank(raw.amount.as_deref()),
    ) else {
        log::debug!("Missing required data attributes: {:?}", raw);
        return Ok(None);
    };

    let count = parse_whole(amount)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ExportError::InvalidField {
            field: "amount",
            value: amount.to_string(),
        })?;

    Ok(Some((name, count)))
}

/// Build the Moxfield record for one row.
///
/// Returns `Ok(None)` when the name or amount is missing. Unknown condition
/// and language ids fall back to Near Mint and English.
pub fn extract_article(
    raw: &RawArticle,
    resolver: &SetCodeResolver,
    tracker: &mut UnknownSetTracker,
) -> ExportResult<Option<ExportRecord>> {
    let Some((name, count)) = required_fields(raw)? else {
        return Ok(None);
    };

    let expansion_name = raw.expansion_name.as_deref().unwrap_or("");
    let purchase_price = raw
        .price
        .as_deref()
        .and_then(|p| p.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .map(|p| format!("{p:.2}"))
        .unwrap_or_default();

    Ok(Some(ExportRecord {
        count,
        name: clean_card_name(name),
        edition: resolver.resolve(expansion_name, tracker),
        condition: raw.condition().moxfield_code().to_string(),
        language: raw.language().moxfield_code().to_string(),
        foil: if raw.is_foil() { "foil" } else { "" }.to_string(),
        collector_number: raw.number.clone().unwrap_or_default(),
        alter: "FALSE".to_string(),
        playtest_card: "FALSE".to_string(),
        purchase_price,
    }))
}

/// Build the Deckbox record for one row. Deckbox takes Cardmarket's own
/// expansion names, so no set code resolution happens here.
pub fn extract_deckbox_article(raw: &RawArticle) -> ExportResult<Option<DeckboxRecord>> {
    let Some((name, count)) = required_fields(raw)? else {
        return Ok(None);
    };

    Ok(Some(DeckboxRecord {
        count,
        name: clean_card_name(name),
        edition: raw.expansion_name.clone().unwrap_or_default(),
        card_number: raw.number.clone().unwrap_or_default(),
        condition: raw.condition().deckbox_name().to_string(),
        language: raw.language().as_str().to_string(),
        foil: u8::from(raw.is_foil()),
        price: raw.price.clone().unwrap_or_default(),
    }))
}

/// Extract every row, skipping rows that are incomplete or malformed
pub fn collect_articles(
    rows: &[RawArticle],
    resolver: &SetCodeResolver,
    tracker: &mut UnknownSetTracker,
) -> Vec<ExportRecord> {
    let mut articles = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        match extract_article(row, resolver, tracker) {
            Ok(Some(article)) => articles.push(article),
            Ok(None) => log::debug!("Skipping row {}: missing name or amount", i + 1),
            Err(e) => log::warn!("Skipping row {}: {}", i + 1, e),
        }
    }

    log::info!("Collected {} articles for export", articles.len());
    articles
}

/// Deckbox counterpart of [`collect_articles`]
pub fn collect_deckbox_articles(rows: &[RawArticle]) -> Vec<DeckboxRecord> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| match extract_deckbox_article(row) {
            Ok(article) => article,
            Err(e) => {
                log::warn!("Skipping row {}: {}", i + 1, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "article_tests.rs"]
mod tests;
