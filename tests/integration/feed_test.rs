//! Notification feed behavior against a mock backend

use std::time::{Duration, Instant};

use aulanet::egui_app::notifications::NotificationFeed;
use aulanet::egui_app::types::AppView;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{config_for, start_backend, test_session};

/// Spin the per-frame poll until the pending fetch lands
fn poll_until_loaded(feed: &mut NotificationFeed) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while feed.is_loading() {
        assert!(Instant::now() < deadline, "feed never finished loading");
        feed.poll();
        std::thread::sleep(Duration::from_millis(10));
    }
}

/// Wait until the backend saw `count` requests matching `predicate`
fn wait_for_requests(
    rt: &tokio::runtime::Runtime,
    server: &MockServer,
    count: usize,
    predicate: impl Fn(&wiremock::Request) -> bool,
) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let seen = rt
            .block_on(server.received_requests())
            .unwrap_or_default()
            .iter()
            .filter(|r| predicate(r))
            .count();
        if seen >= count {
            return;
        }
        assert!(Instant::now() < deadline, "backend never saw the expected requests");
        std::thread::sleep(Duration::from_millis(20));
    }
}

fn six_unread() -> serde_json::Value {
    json!([
        {"category": "message", "text": "m1", "timestamp": "2026-03-02T10:05:00Z"},
        {"category": "grade", "text": "g1", "timestamp": "2026-03-02T10:04:00Z"},
        {"category": "message", "text": "m2", "timestamp": "2026-03-02T10:03:00Z"},
        {"category": "payment", "text": "p1", "timestamp": "2026-03-02T10:02:00Z"},
        {"category": "grade", "text": "g2", "timestamp": "2026-03-02T10:01:00Z"},
        {"category": "assignment", "text": "a1", "timestamp": "2026-03-02T10:00:00Z"}
    ])
}

#[test]
fn refresh_sets_count_from_full_response_and_caps_display() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/notifications/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(six_unread()))
            .mount(&server),
    );

    let config = config_for(&server);
    let mut feed = NotificationFeed::new();
    feed.refresh(&config, &session);
    poll_until_loaded(&mut feed);

    assert_eq!(feed.unread_count(), 6);
    assert_eq!(feed.recent().len(), 5);
}

#[test]
fn refresh_failure_keeps_previous_state() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/notifications/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(six_unread()))
            .up_to_n_times(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/notifications/7"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server),
    );

    let config = config_for(&server);
    let mut feed = NotificationFeed::new();
    feed.refresh(&config, &session);
    poll_until_loaded(&mut feed);
    assert_eq!(feed.unread_count(), 6);

    feed.refresh(&config, &session);
    poll_until_loaded(&mut feed);

    // Stale-but-available: the failed refresh left everything in place.
    assert_eq!(feed.unread_count(), 6);
    assert_eq!(feed.recent().len(), 5);
}

#[test]
fn entering_messages_clears_that_category_with_one_bulk_call() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/notifications/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(six_unread()))
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/notifications/mark-category"))
            .and(body_json(json!({"userId": 7, "category": "message"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );

    let config = config_for(&server);
    let mut feed = NotificationFeed::new();
    feed.refresh(&config, &session);
    poll_until_loaded(&mut feed);
    assert_eq!(feed.unread_count(), 6);

    feed.on_route_change(AppView::Messaging, &config, &session);

    // Local state updates before the fire-and-forget write resolves.
    assert_eq!(feed.unread_count(), 4);
    assert!(feed.recent().iter().all(|n| n.text != "m1" && n.text != "m2"));

    wait_for_requests(&rt, &server, 1, |r| {
        r.url.path() == "/api/notifications/mark-category"
    });

    // A second visit to the same route matches nothing and must not
    // produce a second bulk call; expect(1) verifies that on drop.
    feed.on_route_change(AppView::Messaging, &config, &session);
    std::thread::sleep(Duration::from_millis(200));
}

#[test]
fn subject_route_issues_one_call_per_removed_category() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/notifications/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(six_unread()))
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/notifications/mark-category"))
            .and(body_json(json!({"userId": 7, "category": "grade"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/notifications/mark-category"))
            .and(body_json(json!({"userId": 7, "category": "assignment"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );

    let config = config_for(&server);
    let mut feed = NotificationFeed::new();
    feed.refresh(&config, &session);
    poll_until_loaded(&mut feed);

    feed.on_route_change(AppView::Subjects, &config, &session);

    assert_eq!(feed.unread_count(), 3);
    wait_for_requests(&rt, &server, 2, |r| {
        r.url.path() == "/api/notifications/mark-category"
    });
}

#[test]
fn selecting_a_notification_marks_it_read_and_routes() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/notifications/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(six_unread()))
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/notifications/mark-read"))
            .and(body_json(json!({"userId": 7, "text": "g1"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );

    let config = config_for(&server);
    let mut feed = NotificationFeed::new();
    feed.refresh(&config, &session);
    poll_until_loaded(&mut feed);

    // The redirect target is available immediately, before the write lands.
    let target = feed.select(1, &config, &session);
    assert_eq!(target, Some(AppView::Subjects));
    assert_eq!(feed.unread_count(), 5);

    wait_for_requests(&rt, &server, 1, |r| r.url.path() == "/api/notifications/mark-read");
}
