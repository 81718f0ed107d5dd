use mtg_common::SetMappingTable;
use set_sync::{merge_sets, read_sets};
use tempfile::tempdir;

const CATALOG: &str = r#"{
    "object": "list",
    "has_more": false,
    "data": [
        {"code": "khm", "name": "Kaldheim", "released_at": "2021-02-05", "set_type": "expansion", "digital": false},
        {"code": "tdm", "name": "Tarkir: Dragonstorm", "released_at": "2025-04-11", "set_type": "expansion", "digital": false},
        {"code": "mb2", "name": "Mystery Booster 2", "released_at": "2024-08-02", "set_type": "masters", "digital": false}
    ]
}"#;

#[test]
fn test_sync_rewrites_mapping_file() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("sets.json");
    let mappings_path = dir.path().join("set_mappings.csv");

    std::fs::write(&catalog_path, CATALOG).unwrap();
    std::fs::write(
        &mappings_path,
        "name,code\nMystery Booster 2,cmm\nCommander: Wilds of Eldraine,woc\n",
    )
    .unwrap();

    let sets = read_sets(&catalog_path).unwrap();
    let current = SetMappingTable::load(&mappings_path).unwrap();
    let outcome = merge_sets(&current, &sets);
    outcome.table.save(&mappings_path).unwrap();

    let written = std::fs::read_to_string(&mappings_path).unwrap();
    assert_eq!(
        written,
        "name,code\n\
         Tarkir: Dragonstorm,tdm\n\
         Mystery Booster 2,cmm\n\
         Kaldheim,khm\n\
         Commander: Wilds of Eldraine,woc\n"
    );

    let reloaded = SetMappingTable::load(&mappings_path).unwrap();
    assert_eq!(reloaded.len(), 4);
    assert_eq!(outcome.added.len(), 2);
}

#[test]
fn test_bundled_table_survives_merge() {
    let bundled = SetMappingTable::bundled().unwrap();
    let outcome = merge_sets(&bundled, &[]);

    assert!(outcome.added.is_empty());
    assert_eq!(outcome.table.len(), bundled.len());
    for (name, code) in bundled.iter() {
        assert_eq!(outcome.table.get(name), Some(code));
    }
}
