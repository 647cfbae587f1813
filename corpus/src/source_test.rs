//! Wire-level tests for HttpMessageSource against a mock HTTP server.
//!
//! Covers pagination, the record ceiling, the consecutive-error abort, and
//! terminal-status handling.

use mockito::Matcher;

use crate::source::{HttpMessageSource, MessageSource};

/// JSON page of `count` generated records starting at ordinal `start`.
fn page_body(start: usize, count: usize, total: usize) -> String {
    let items: Vec<serde_json::Value> = (start..start + count)
        .map(|i| {
            serde_json::json!({
                "user_name": format!("user-{i}"),
                "timestamp": format!("2024-01-01T00:{:02}:00Z", i % 60),
                "message": format!("message {i}"),
            })
        })
        .collect();
    serde_json::json!({ "items": items, "total": total }).to_string()
}

fn mock_page(server: &mut mockito::ServerGuard, skip: usize, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/messages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), skip.to_string()),
            Matcher::UrlEncoded("limit".into(), "100".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

fn mock_status(server: &mut mockito::ServerGuard, skip: usize, status: usize) -> mockito::Mock {
    server
        .mock("GET", "/messages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), skip.to_string()),
            Matcher::UrlEncoded("limit".into(), "100".into()),
        ]))
        .with_status(status)
        .create()
}

fn source_for(server: &mockito::ServerGuard) -> HttpMessageSource {
    HttpMessageSource::new(format!("{}/messages", server.url()))
}

#[tokio::test]
async fn test_fetch_all_concatenates_pages_in_order() {
    let mut server = mockito::Server::new_async().await;
    let _page0 = mock_page(&mut server, 0, &page_body(0, 100, 150));
    let _page1 = mock_page(&mut server, 100, &page_body(100, 50, 150));

    let records = source_for(&server).fetch_all().await;

    assert_eq!(records.len(), 150);
    assert_eq!(records[0].user_name, "user-0");
    assert_eq!(records[99].user_name, "user-99");
    assert_eq!(records[149].user_name, "user-149");
}

#[tokio::test]
async fn test_fetch_all_stops_on_empty_page() {
    let mut server = mockito::Server::new_async().await;
    let _page0 = mock_page(&mut server, 0, &page_body(0, 100, 0));
    let _page1 = mock_page(&mut server, 100, &page_body(100, 0, 0));
    let never = mock_page(&mut server, 200, &page_body(200, 100, 0)).expect(0);

    let records = source_for(&server).fetch_all().await;

    assert_eq!(records.len(), 100);
    never.assert();
}

#[tokio::test]
async fn test_fetch_all_stops_on_short_page() {
    let mut server = mockito::Server::new_async().await;
    let _page0 = mock_page(&mut server, 0, &page_body(0, 40, 500));
    let never = mock_page(&mut server, 100, &page_body(100, 100, 500)).expect(0);

    let records = source_for(&server).fetch_all().await;

    assert_eq!(records.len(), 40);
    never.assert();
}

#[tokio::test]
async fn test_fetch_all_never_requests_past_the_ceiling() {
    let mut server = mockito::Server::new_async().await;
    let mut pages = Vec::new();
    for page in 0..10 {
        let skip = page * 100;
        pages.push(mock_page(&mut server, skip, &page_body(skip, 100, 5000)));
    }
    let past_ceiling = mock_page(&mut server, 1000, &page_body(1000, 100, 5000)).expect(0);

    let records = source_for(&server).fetch_all().await;

    assert_eq!(records.len(), 1000);
    past_ceiling.assert();
    for page in &pages {
        page.assert();
    }
}

#[tokio::test]
async fn test_fetch_all_aborts_after_three_consecutive_failures() {
    let mut server = mockito::Server::new_async().await;
    let _page0 = mock_page(&mut server, 0, &page_body(0, 100, 1000));
    let _fail1 = mock_status(&mut server, 100, 500);
    let _fail2 = mock_status(&mut server, 200, 500);
    let _fail3 = mock_status(&mut server, 300, 500);
    let never = mock_page(&mut server, 400, &page_body(400, 100, 1000)).expect(0);

    let records = source_for(&server).fetch_all().await;

    assert_eq!(records.len(), 100);
    never.assert();
}

#[tokio::test]
async fn test_fetch_all_success_resets_the_error_streak() {
    let mut server = mockito::Server::new_async().await;
    let _fail0 = mock_status(&mut server, 0, 500);
    let _page1 = mock_page(&mut server, 100, &page_body(0, 100, 0));
    let _fail2 = mock_status(&mut server, 200, 500);
    let _fail3 = mock_status(&mut server, 300, 500);
    let fail4 = mock_status(&mut server, 400, 500);

    let records = source_for(&server).fetch_all().await;

    // Without the reset after the skip=100 success, the failures at 200 and
    // 300 would already have hit the abort threshold and 400 would never be
    // requested.
    assert_eq!(records.len(), 100);
    fail4.assert();
}

#[tokio::test]
async fn test_fetch_all_keeps_partial_data_on_terminal_status() {
    let mut server = mockito::Server::new_async().await;
    let _page0 = mock_page(&mut server, 0, &page_body(0, 100, 300));
    let _denied = mock_status(&mut server, 100, 404);
    let never = mock_page(&mut server, 200, &page_body(200, 100, 300)).expect(0);

    let records = source_for(&server).fetch_all().await;

    assert_eq!(records.len(), 100);
    never.assert();
}

#[tokio::test]
async fn test_fetch_all_returns_empty_when_source_never_succeeds() {
    let mut server = mockito::Server::new_async().await;
    let failures = server
        .mock("GET", "/messages")
        .match_query(Matcher::Any)
        .with_status(500)
        .expect(3)
        .create();

    let records = source_for(&server).fetch_all().await;

    assert!(records.is_empty());
    failures.assert();
}

#[tokio::test]
async fn test_fetch_all_treats_malformed_body_as_page_failure() {
    let mut server = mockito::Server::new_async().await;
    let _garbage = server
        .mock("GET", "/messages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "100".into()),
        ]))
        .with_status(200)
        .with_body("not json at all")
        .create();
    let _page1 = mock_page(&mut server, 100, &page_body(0, 50, 0));

    let records = source_for(&server).fetch_all().await;

    assert_eq!(records.len(), 50);
}

#[tokio::test]
async fn test_probe_reflects_source_status() {
    let mut up = mockito::Server::new_async().await;
    let _ok = up
        .mock("GET", "/messages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [], "total": 0}"#)
        .create();
    assert!(source_for(&up).probe().await);

    let mut down = mockito::Server::new_async().await;
    let _err = down
        .mock("GET", "/messages")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();
    assert!(!source_for(&down).probe().await);
}

#[tokio::test]
async fn test_probe_is_false_when_nothing_listens() {
    let source = HttpMessageSource::new("http://127.0.0.1:9/messages");
    assert!(!source.probe().await);
}
