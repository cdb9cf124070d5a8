//! Middleware behaviour with the parser and sorter replaced by doubles.

use accept_events::config::ServerConfig;
use accept_events::http::{AcceptEventsLayer, HttpServer};
use accept_events::structured::{Entry, StableQualitySort, Value};
use serde_json::json;

mod common;

use common::{send, FailingParser, IdentitySort, StubParser};

fn server(layer: AcceptEventsLayer) -> HttpServer {
    HttpServer::with_layer(ServerConfig::default(), layer)
}

#[tokio::test]
async fn test_ignores_other_methods() {
    let layer = AcceptEventsLayer::new()
        .with_parser(StubParser(vec![Entry::new(Value::String("prep".into()))]));
    let router = server(layer).router();

    for method in ["PUT", "DELETE", "PATCH", "OPTIONS"] {
        let (headers, body) = send(router.clone(), method, Some(r#""prep""#)).await;
        assert!(headers.get("accept-events").is_none(), "{method}");
        assert_eq!(body["accept_events"], json!(null), "{method}");
    }
}

#[tokio::test]
async fn test_advertises_on_get_and_post() {
    let router = server(AcceptEventsLayer::new()).router();

    for method in ["GET", "POST"] {
        let (headers, body) = send(router.clone(), method, None).await;
        assert_eq!(headers.get_all("accept-events").iter().count(), 1);
        assert_eq!(headers["accept-events"], "");
        assert_eq!(body["accept_events"], json!(null));
    }
}

#[tokio::test]
async fn test_parse_failure_skips_annotation() {
    let layer = AcceptEventsLayer::new().with_parser(FailingParser);
    let (headers, body) = send(server(layer).router(), "POST", Some("invalid-header")).await;

    assert_eq!(headers["accept-events"], "");
    assert_eq!(body["accept_events"], json!(null));
}

#[tokio::test]
async fn test_single_entry_is_attached() {
    let layer = AcceptEventsLayer::new()
        .with_parser(StubParser(vec![
            Entry::new(Value::String("prep".into())).with_param("q", Value::Decimal(0.8)),
        ]))
        .with_sorter(IdentitySort);
    let (_, body) = send(server(layer).router(), "GET", Some(r#""prep"; q=0.8""#)).await;

    assert_eq!(
        body["accept_events"],
        json!([{ "name": "prep", "params": { "q": 0.8 } }])
    );
}

#[tokio::test]
async fn test_all_filtered_skips_annotation() {
    let layer = AcceptEventsLayer::new().with_parser(StubParser(vec![Entry::new(Value::Integer(200))]));
    let (headers, body) = send(server(layer).router(), "GET", Some("200")).await;

    assert_eq!(headers["accept-events"], "");
    assert_eq!(body["accept_events"], json!(null));
}

#[tokio::test]
async fn test_empty_list_skips_annotation() {
    let layer = AcceptEventsLayer::new().with_parser(StubParser(vec![]));
    let (_, body) = send(server(layer).router(), "GET", Some("anything")).await;

    assert_eq!(body["accept_events"], json!(null));
}

#[tokio::test]
async fn test_filters_entries_that_are_not_string_like() {
    let layer = AcceptEventsLayer::new()
        .with_parser(StubParser(vec![
            Entry::new(Value::Integer(200)),
            Entry::new(Value::Token("high".into())),
            Entry::new(Value::String("low".into())).with_param("q", Value::Decimal(0.9)),
        ]))
        .with_sorter(IdentitySort);
    let (_, body) = send(server(layer).router(), "GET", Some(r#"200, high, "low"; q=0.9"#)).await;

    assert_eq!(
        body["accept_events"],
        json!([
            { "name": "high", "params": {} },
            { "name": "low", "params": { "q": 0.9 } },
        ])
    );
}

#[tokio::test]
async fn test_sorts_by_quality() {
    let layer = AcceptEventsLayer::new()
        .with_parser(StubParser(vec![
            Entry::new(Value::String("low".into())).with_param("q", Value::Decimal(0.5)),
            Entry::new(Value::String("high".into())).with_param("q", Value::Decimal(0.9)),
        ]))
        .with_sorter(StableQualitySort);
    let (_, body) = send(server(layer).router(), "GET", Some(r#""low"; q=0.5, "high"; q=0.9"#)).await;

    let names: Vec<_> = body["accept_events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["high", "low"]);
}
