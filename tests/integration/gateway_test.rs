//! Gateway client tests against a mock backend

use aulanet::egui_app::api::messaging::OutgoingAttachment;
use aulanet::egui_app::api::{DirectoryApi, MessagingApi, NotificationApi};
use aulanet::shared::model::NotificationCategory;
use aulanet::shared::ApiError;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{config_for, start_backend, test_session};

#[test]
fn fetch_notifications_parses_backend_list() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/notifications/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"category": "message", "text": "New message from Martín", "timestamp": "2026-03-02T10:00:00Z"},
                {"category": "grade", "text": "New grade in Algebra", "timestamp": "2026-03-02T09:00:00Z"},
                {"category": "payment", "text": "Payment registered", "timestamp": "2026-03-02T08:00:00Z"}
            ])))
            .mount(&server),
    );

    let api = NotificationApi::new(config_for(&server));
    let notifications = api.fetch(&session).expect("fetch succeeds");

    assert_eq!(notifications.len(), 3);
    assert_eq!(notifications[0].category, NotificationCategory::Message);
    assert_eq!(notifications[1].text, "New grade in Algebra");
}

#[test]
fn mark_category_posts_user_and_category() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/notifications/mark-category"))
            .and(body_json(json!({"userId": 7, "category": "message"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );

    let api = NotificationApi::new(config_for(&server));
    api.mark_category(&session, NotificationCategory::Message)
        .expect("mark succeeds");
}

#[test]
fn mark_read_posts_user_and_text() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/notifications/mark-read"))
            .and(body_json(json!({"userId": 7, "text": "New grade in Algebra"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );

    let api = NotificationApi::new(config_for(&server));
    api.mark_read(&session, "New grade in Algebra")
        .expect("mark succeeds");
}

#[test]
fn backend_failure_maps_to_http_error() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/notifications/7"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server),
    );

    let api = NotificationApi::new(config_for(&server));
    match api.fetch(&session) {
        Err(ApiError::Http { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Http error, got {:?}", other.map(|v| v.len())),
    }
}

#[test]
fn search_sends_term_page_and_limit() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/users/7/contacts"))
            .and(query_param("search", "ana"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 3, "name": "Ana López", "role": "estudiante"},
                {"id": 4, "name": "Mariana Soto", "role": "profesor"}
            ])))
            .expect(1)
            .mount(&server),
    );

    let api = DirectoryApi::new(config_for(&server));
    let page = api.search(&session, "ana", 2, 10).expect("search succeeds");

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "Ana López");
}

#[test]
fn send_message_posts_multipart_fields() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/messages"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server),
    );

    let api = MessagingApi::new(config_for(&server));
    api.send(
        &session,
        9,
        "hola",
        Some(OutgoingAttachment {
            file_name: "notes.pdf".to_string(),
            bytes: b"pdf-bytes".to_vec(),
        }),
    )
    .expect("send succeeds");

    let requests = rt.block_on(server.received_requests()).unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"senderId\""));
    assert!(body.contains("name=\"receiverId\""));
    assert!(body.contains("name=\"content\""));
    assert!(body.contains("hola"));
    assert!(body.contains("notes.pdf"));
}

#[test]
fn send_without_attachment_omits_file_part() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/messages"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server),
    );

    let api = MessagingApi::new(config_for(&server));
    api.send(&session, 9, "solo texto", None).expect("send succeeds");

    let requests = rt.block_on(server.received_requests()).unwrap_or_default();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("name=\"file\""));
}

#[test]
fn delete_message_targets_its_id() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/api/messages/42"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );

    let api = MessagingApi::new(config_for(&server));
    api.delete_message(&session, 42).expect("delete succeeds");
}

#[test]
fn delete_thread_targets_both_participants() {
    let (rt, server) = start_backend();
    let session = test_session();

    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/api/messages/thread/7/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );

    let api = MessagingApi::new(config_for(&server));
    api.delete_thread(&session, 9).expect("delete succeeds");
}
