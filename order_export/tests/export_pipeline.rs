use order_export::csv_export::{generate_csv, moxfield_filename, order_id_from_title};
use order_export::error_analyzer::{analyze, create_corrected_csv, suggest_corrections};
use order_export::{collect_articles, RawArticle, SetCodeResolver, UnknownSetTracker};

fn row(name: &str, expansion: &str, amount: &str) -> RawArticle {
    RawArticle {
        name: Some(name.to_string()),
        expansion_name: Some(expansion.to_string()),
        amount: Some(amount.to_string()),
        ..Default::default()
    }
}

fn sample_rows() -> Vec<RawArticle> {
    vec![
        RawArticle {
            condition: Some("2".to_string()),
            language: Some("1".to_string()),
            price: Some("1.5".to_string()),
            number: Some("161".to_string()),
            ..row("Lightning Bolt", "Limited Edition Alpha", "4")
        },
        RawArticle {
            foil: Some(String::new()),
            ..row("Sol Ring (V.2)", "Commander: Wilds of Eldraine", "1")
        },
        RawArticle {
            name: Some("Lost Card".to_string()),
            ..Default::default()
        },
        row("Arcane Signet", "Xyzzy Plover", "2"),
    ]
}

#[test]
fn test_rows_to_moxfield_csv() {
    let resolver = SetCodeResolver::bundled().unwrap();
    let mut tracker = UnknownSetTracker::new();

    let records = collect_articles(&sample_rows(), &resolver, &mut tracker);
    assert_eq!(records.len(), 3);

    let csv = generate_csv(&records).unwrap();
    let lines: Vec<&str> = csv.split("\r\n").collect();

    assert_eq!(
        lines[0],
        "\"Count\",\"Name\",\"Edition\",\"Condition\",\"Language\",\"Foil\",\"Collector Number\",\"Alter\",\"Playtest Card\",\"Purchase Price\""
    );
    assert_eq!(
        lines[1],
        "\"4\",\"Lightning Bolt\",\"lea\",\"NM\",\"en\",\"\",\"161\",\"FALSE\",\"FALSE\",\"1.50\""
    );
    assert_eq!(
        lines[2],
        "\"1\",\"Sol Ring\",\"woc\",\"NM\",\"en\",\"foil\",\"\",\"FALSE\",\"FALSE\",\"\""
    );
    assert_eq!(
        lines[3],
        "\"2\",\"Arcane Signet\",\"xyzzyplover\",\"NM\",\"en\",\"\",\"\",\"FALSE\",\"FALSE\",\"\""
    );
    assert_eq!(lines[4], "");
}

#[test]
fn test_unknown_sets_are_tracked_per_session() {
    let resolver = SetCodeResolver::bundled().unwrap();
    let mut tracker = UnknownSetTracker::new();

    collect_articles(&sample_rows(), &resolver, &mut tracker);
    collect_articles(&sample_rows(), &resolver, &mut tracker);

    assert_eq!(tracker.len(), 1);
    let unknown = tracker.get("Xyzzy Plover").unwrap();
    assert_eq!(unknown.count, 2);
    assert_eq!(unknown.fallback_code, "xyzzyplover");
    assert!(tracker
        .report()
        .contains("\"Xyzzy Plover\": \"xyzzyplover\", // Count: 2"));

    // A fresh tracker starts empty
    assert!(UnknownSetTracker::new().is_empty());
}

#[test]
fn test_rejections_point_back_at_generated_rows() {
    let resolver = SetCodeResolver::bundled().unwrap();
    let mut tracker = UnknownSetTracker::new();
    let records = collect_articles(&sample_rows(), &resolver, &mut tracker);
    let csv = generate_csv(&records).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    let error_text = "Could not find card named \"Arcane Signet\" in edition \"xyzzyplover\". on line 4\n\
                      Could not find card named \"Lightning Bolt\" in edition \"lea\". on line 2";
    let analysis = analyze(error_text, &csv);

    assert_eq!(analysis.errors.len(), 2);
    assert_eq!(analysis.errors[0].original_line, lines[3]);
    assert_eq!(analysis.errors[1].original_line, lines[1]);
    assert_eq!(analysis.error_rows, vec![lines[0], lines[3], lines[1]]);
    assert_eq!(analysis.csv_header, lines[0]);

    // No known fix for either code, so rows come back unchanged
    let corrections = suggest_corrections(&analysis.errors);
    assert!(corrections.is_empty());
    assert_eq!(create_corrected_csv(&analysis, &corrections), analysis.error_csv());
}

#[test]
fn test_known_miscode_is_corrected() {
    let resolver = SetCodeResolver::bundled().unwrap();
    let mut tracker = UnknownSetTracker::new();
    let records = collect_articles(
        &[row("Command Tower", "Modern Horizons 3", "1")],
        &resolver,
        &mut tracker,
    );
    assert_eq!(records[0].edition, "mh3");

    let csv = generate_csv(&records).unwrap();
    let analysis = analyze(
        "Could not find card named \"Command Tower\" in edition \"mh3\". on line 2",
        &csv,
    );
    let corrections = suggest_corrections(&analysis.errors);
    let corrected = create_corrected_csv(&analysis, &corrections);

    assert!(corrected.contains("\"1\",\"Command Tower\",\"m3c\""));
    assert!(!corrected.contains("\"mh3\""));
}

#[test]
fn test_filename_from_page_title() {
    let order_id = order_id_from_title("Order #1234567 - Cardmarket");
    assert_eq!(moxfield_filename(&order_id), "MKM Order 1234567 - Moxfield.csv");
}
