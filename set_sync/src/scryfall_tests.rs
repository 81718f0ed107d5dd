//! Tests for the Scryfall set catalog client.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn set_json(name: &str, code: &str, released_at: &str) -> serde_json::Value {
    serde_json::json!({
        "object": "set",
        "id": "test-uuid-123",
        "code": code,
        "name": name,
        "released_at": released_at,
        "set_type": "expansion",
        "card_count": 300,
        "digital": false
    })
}

#[tokio::test]
async fn fetch_sets_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sets"))
        .and(header("User-Agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "has_more": false,
            "data": [
                set_json("Tarkir: Dragonstorm", "tdm", "2025-04-11"),
                set_json("Kaldheim", "khm", "2021-02-05"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let sets = fetch_sets_from(&mock_server.uri()).await.unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].name, "Tarkir: Dragonstorm");
    assert_eq!(sets[0].code, "tdm");
    assert_eq!(sets[0].released_at, NaiveDate::from_ymd_opt(2025, 4, 11));
    assert_eq!(sets[1].set_type, "expansion");
}

#[tokio::test]
async fn fetch_sets_follows_next_page() {
    let mock_server = MockServer::start().await;
    let next_page = format!("{}/sets?page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/sets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "has_more": false,
            "data": [set_json("Limited Edition Alpha", "lea", "1993-08-05")]
        })))
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "has_more": true,
            "next_page": next_page,
            "data": [set_json("Kaldheim", "khm", "2021-02-05")]
        })))
        .with_priority(2)
        .mount(&mock_server)
        .await;

    let sets = fetch_sets_from(&mock_server.uri()).await.unwrap();
    let codes: Vec<&str> = sets.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["khm", "lea"]);
}

#[tokio::test]
async fn fetch_sets_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sets"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = fetch_sets_from(&mock_server.uri()).await;
    match result {
        Err(MtgError::HttpStatus(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_sets_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let result = fetch_sets_from(&mock_server.uri()).await;
    assert!(matches!(result, Err(MtgError::Network(_))));
}

#[test]
fn set_deserialize_minimal() {
    let set: ScryfallSet =
        serde_json::from_str(r#"{"code": "lea", "name": "Limited Edition Alpha"}"#).unwrap();
    assert_eq!(set.released_at, None);
    assert!(!set.digital);
}

#[test]
fn read_sets_from_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let body = serde_json::json!({
        "has_more": false,
        "data": [set_json("Kaldheim", "khm", "2021-02-05")]
    });
    std::fs::write(file.path(), body.to_string()).unwrap();

    let sets = read_sets(file.path()).unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "Kaldheim");
}
