//! CSV and plain-text renderings of extracted articles.

use crate::article::{DeckboxRecord, ExportRecord};
use crate::error::{ExportError, ExportResult};

/// Moxfield collection import columns
pub const MOXFIELD_HEADERS: [&str; 10] = [
    "Count",
    "Name",
    "Edition",
    "Condition",
    "Language",
    "Foil",
    "Collector Number",
    "Alter",
    "Playtest Card",
    "Purchase Price",
];

/// A record that can be written as one CSV row
pub trait CsvRow {
    /// Column names and values, in column order
    fn columns(&self) -> Vec<(&'static str, String)>;
}

impl CsvRow for ExportRecord {
    fn columns(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.count.to_string(),
            self.name.clone(),
            self.edition.clone(),
            self.condition.clone(),
            self.language.clone(),
            self.foil.clone(),
            self.collector_number.clone(),
            self.alter.clone(),
            self.playtest_card.clone(),
            self.purchase_price.clone(),
        ];
        MOXFIELD_HEADERS.into_iter().zip(values).collect()
    }
}

/// Render records as a fully quoted CSV document with CRLF line endings.
///
/// The header row is taken from the first record's columns; every other
/// record is written in that column order, with columns it lacks left
/// empty. Values are wrapped in `"` verbatim: quotes inside a value are not
/// doubled, which matches what Moxfield has been accepting so far.
pub fn generate_csv<R: CsvRow>(records: &[R]) -> ExportResult<String> {
    let first = records.first().ok_or(ExportError::Empty)?;
    let headers: Vec<&'static str> = first.columns().into_iter().map(|(h, _)| h).collect();

    let mut csv_content = String::new();
    csv_content.push_str(&quote_row(headers.iter().copied()));
    csv_content.push_str("\r\n");

    for record in records {
        let columns = record.columns();
        let row = quote_row(headers.iter().map(|header| {
            columns
                .iter()
                .find(|(name, _)| name == header)
                .map(|(_, value)| value.as_str())
                .unwrap_or("")
        }));
        csv_content.push_str(&row);
        csv_content.push_str("\r\n");
    }

    Ok(csv_content)
}

fn quote_row<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render records in Deckbox's import format (CRLF, quoted where needed)
pub fn generate_deckbox_csv(records: &[DeckboxRecord]) -> ExportResult<String> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    for record in records {
        wtr.serialize(record)?;
    }

    let bytes = wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidField {
        field: "csv",
        value: e.to_string(),
    })
}

/// Plain-text list for the clipboard: `<count> <name>` per line, CRLF
/// separated, with quote characters removed from names
pub fn clipboard_text(records: &[ExportRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{} {}", r.count, r.name.replace('"', "")))
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// First run of digits in an order page title, or `"Unknown"`
pub fn order_id_from_title(title: &str) -> String {
    let digits: String = title
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        "Unknown".to_string()
    } else {
        digits
    }
}

/// Append `.csv` unless the name already ends with it
pub fn export_filename(stem: &str) -> String {
    if stem.ends_with(".csv") {
        stem.to_string()
    } else {
        format!("{stem}.csv")
    }
}

pub fn moxfield_filename(order_id: &str) -> String {
    export_filename(&format!("MKM Order {order_id} - Moxfield"))
}

pub fn deckbox_filename(order_id: &str) -> String {
    export_filename(&format!("MKM Order {order_id}"))
}

#[cfg(test)]
#[path = "csv_export_tests.rs"]
mod tests;
