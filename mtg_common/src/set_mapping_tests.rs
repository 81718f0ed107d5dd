//! Tests for the ordered set mapping table

use super::*;

#[test]
fn bundled_table_loads() {
    let table = SetMappingTable::bundled().unwrap();
    assert!(table.len() > 900);
    assert_eq!(table.get("Tarkir: Dragonstorm Commander"), Some("tdc"));
    assert_eq!(table.get("Tarkir: Dragonstorm"), Some("tdm"));
    assert_eq!(table.get("Commander Masters"), Some("cmm"));
    assert_eq!(table.get("Limited Edition Alpha"), Some("lea"));
}

#[test]
fn bundled_table_handles_quoted_names() {
    let table = SetMappingTable::bundled().unwrap();
    assert_eq!(table.get("Warhammer 40,000 Commander"), Some("40k"));
}

#[test]
fn from_pairs_preserves_order_and_ignores_duplicates() {
    let table = SetMappingTable::from_pairs(vec![
        ("Zendikar", "zen"),
        ("Alara Reborn", "arb"),
        ("Zendikar", "zzz"),
    ]);

    let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Zendikar", "Alara Reborn"]);
    assert_eq!(table.get("Zendikar"), Some("zen"));
}

#[test]
fn set_overwrites_in_place() {
    let mut table = SetMappingTable::from_pairs(vec![("A", "a"), ("B", "b")]);
    table.set("A", "x");
    table.set("C", "c");

    let pairs: Vec<(&str, &str)> = table.iter().collect();
    assert_eq!(pairs, vec![("A", "x"), ("B", "b"), ("C", "c")]);
}

#[test]
fn csv_round_trip_keeps_order() {
    let table = SetMappingTable::from_pairs(vec![
        ("Warhammer 40,000", "40k"),
        ("Marvel's Spider-Man", "spm"),
        ("Alpha", "lea"),
    ]);

    let csv = table.to_csv_string().unwrap();
    assert!(csv.starts_with("name,code\n"));
    assert!(csv.contains("\"Warhammer 40,000\",40k\n"));

    let parsed = SetMappingTable::from_csv_str(&csv).unwrap();
    let original: Vec<_> = table.iter().collect();
    let reparsed: Vec<_> = parsed.iter().collect();
    assert_eq!(original, reparsed);
}

#[test]
fn empty_code_is_rejected() {
    let err = SetMappingTable::from_csv_str("name,code\nZendikar,zen\nBroken,\n").unwrap_err();
    match err {
        MtgError::InvalidMapping { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn save_and_load_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("mappings.csv");

    let table = SetMappingTable::from_pairs(vec![("Ice Age", "ice"), ("Mirage", "mir")]);
    table.save(&path).unwrap();

    let loaded = SetMappingTable::load(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get("Mirage"), Some("mir"));
}

#[test]
fn load_missing_file_is_io_error() {
    let result = SetMappingTable::load("/this/path/does/not/exist/mappings.csv");
    assert!(matches!(result, Err(MtgError::Io(_))));
}
