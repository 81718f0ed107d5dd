//! Moxfield import error analysis.
//!
//! Moxfield rejects rows it can't match with messages like
//! `Could not find card named "X" in edition "abc". on line 12`, where the
//! line number counts the header as line 1. Given that text and the CSV that
//! was uploaded, this module pulls out the offending rows, summarises them
//! and rewrites known-bad set codes.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref MOXFIELD_ERROR: Regex =
        Regex::new(r#"Could not find card named "([^"]+)" in edition "([^"]+)"\. on line (\d+)"#)
            .unwrap();
}

/// Set codes Moxfield commonly rejects and the code that usually works
const COMMON_FIXES: &[(&str, &str)] = &[
    ("mb2", "cmm"), // Mystery Booster 2 -> Commander Masters
    ("afr", "afc"), // Adventures in the Forgotten Realms -> Commander
    ("mom", "moc"), // March of the Machine -> Commander
    ("woe", "woc"), // Wilds of Eldraine -> Commander
    ("otj", "otc"), // Outlaws of Thunder Junction -> Commander
    ("mh3", "m3c"), // Modern Horizons 3 -> Commander
    ("tdm", "tdc"), // Tarkir: Dragonstorm -> Commander
];

/// One rejected row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoxfieldError {
    pub card_name: String,
    pub edition: String,
    /// 1-based line in the uploaded CSV, header included
    pub line_number: usize,
    /// The CSV line the error points at, once cross-referenced
    pub original_line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorAnalysis {
    /// Errors whose line exists in the CSV
    pub errors: Vec<MoxfieldError>,
    /// Header followed by the offending lines
    pub error_rows: Vec<String>,
    pub csv_header: String,
    pub summary: String,
}

impl ErrorAnalysis {
    /// The header plus offending lines as a CSV document
    pub fn error_csv(&self) -> String {
        join_crlf(&self.error_rows)
    }
}

/// Extract every rejection from Moxfield's error text. Text that doesn't
/// match is ignored.
pub fn parse_error_message(error_text: &str) -> Vec<MoxfieldError> {
    MOXFIELD_ERROR
        .captures_iter(error_text)
        .filter_map(|caps| {
            let line_number = caps[3].parse::<usize>().ok()?;
            Some(MoxfieldError {
                card_name: caps[1].to_string(),
                edition: caps[2].to_string(),
                line_number,
                original_line: String::new(),
            })
        })
        .collect()
}

/// Non-blank lines of a CSV document, line terminators removed
pub fn csv_lines(csv_content: &str) -> Vec<&str> {
    csv_content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Attach the referenced CSV line to each error. Errors pointing at the
/// header or past the end are dropped.
pub fn extract_error_rows(csv_content: &str, errors: &[MoxfieldError]) -> ErrorAnalysis {
    let lines = csv_lines(csv_content);
    let header = lines.first().copied().unwrap_or_default().to_string();

    let mut error_rows = vec![header.clone()];
    let mut matched = Vec::new();

    for error in errors {
        let index = error.line_number.wrapping_sub(1);
        match lines.get(index) {
            Some(line) if index > 0 => {
                error_rows.push(line.to_string());
                matched.push(MoxfieldError {
                    original_line: line.to_string(),
                    ..error.clone()
                });
            }
            _ => log::debug!(
                "Ignoring error for \"{}\": line {} is not a data row",
                error.card_name,
                error.line_number
            ),
        }
    }

    let summary = generate_summary(&matched);

    ErrorAnalysis {
        errors: matched,
        error_rows,
        csv_header: header,
        summary,
    }
}

/// Errors per edition (most frequent first) and every offending card
pub fn generate_summary(errors: &[MoxfieldError]) -> String {
    let mut edition_counts: Vec<(&str, usize)> = Vec::new();
    for error in errors {
        match edition_counts
            .iter_mut()
            .find(|(edition, _)| *edition == error.edition)
        {
            Some((_, count)) => *count += 1,
            None => edition_counts.push((error.edition.as_str(), 1)),
        }
    }
    edition_counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut summary = String::from("Error Analysis Summary\n");
    summary.push_str("======================\n\n");
    summary.push_str(&format!("Total errors: {}\n\n", errors.len()));

    summary.push_str("Problematic editions:\n");
    for (edition, count) in &edition_counts {
        summary.push_str(&format!("  {edition}: {count} errors\n"));
    }

    summary.push_str("\nProblematic cards:\n");
    for error in errors {
        summary.push_str(&format!("  {}\n", error.card_name));
    }

    summary
}

/// Known replacements for the editions in `errors`. Editions without a
/// known fix are left out.
pub fn suggest_corrections(errors: &[MoxfieldError]) -> BTreeMap<String, String> {
    errors
        .iter()
        .filter_map(|error| {
            COMMON_FIXES
                .iter()
                .find(|(wrong, _)| *wrong == error.edition)
                .map(|(wrong, fix)| (wrong.to_string(), fix.to_string()))
        })
        .collect()
}

/// Header plus one line per error, with `"<edition>"` swapped for its
/// correction where one is given
pub fn create_corrected_csv(result: &ErrorAnalysis, corrections: &BTreeMap<String, String>) -> String {
    let mut rows = vec![result.csv_header.clone()];

    for error in &result.errors {
        let row = match corrections.get(&error.edition) {
            Some(fix) => error.original_line.replacen(
                &format!("\"{}\"", error.edition),
                &format!("\"{fix}\""),
                1,
            ),
            None => error.original_line.clone(),
        };
        rows.push(row);
    }

    join_crlf(&rows)
}

/// Parse the error text and cross-reference it with the uploaded CSV
pub fn analyze(error_text: &str, csv_content: &str) -> ErrorAnalysis {
    let errors = parse_error_message(error_text);
    log::info!("Parsed {} Moxfield errors", errors.len());
    extract_error_rows(csv_content, &errors)
}

fn join_crlf(rows: &[String]) -> String {
    let mut out = rows.join("\r\n");
    out.push_str("\r\n");
    out
}

#[cfg(test)]
#[path = "error_analyzer_tests.rs"]
mod tests;
