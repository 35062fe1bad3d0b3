use super::*;
use crate::net::types::{Post, Tag, UserProfile};

fn travel_rows() -> Value {
    serde_json::json!([
        { "id": 1, "name": "Travel", "slug": "travel" },
        { "id": 2, "name": "Food", "slug": "food" }
    ])
}

// =============================================================
// ApiClient addressing
// =============================================================

#[test]
fn new_trims_trailing_slash() {
    let client = ApiClient::new(" https://cms.example.com/ ");
    assert_eq!(client, ApiClient::new("https://cms.example.com"));
    assert_eq!(client.url("/api/user"), "https://cms.example.com/api/user");
}

#[test]
fn url_joins_base_and_path() {
    let client = ApiClient::new("https://cms.example.com");
    assert_eq!(client.url("/api/tags"), "https://cms.example.com/api/tags");
    assert_eq!(client.url("api/tags"), "https://cms.example.com/api/tags");
}

#[test]
fn url_with_empty_base_stays_relative() {
    let client = ApiClient::new("");
    assert_eq!(client.url("/api/user"), "/api/user");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

// =============================================================
// Body parsing
// =============================================================

#[test]
fn parse_body_treats_empty_as_null() {
    assert_eq!(parse_body("").unwrap(), Value::Null);
    assert_eq!(parse_body("  \n").unwrap(), Value::Null);
}

#[test]
fn parse_body_rejects_invalid_json() {
    assert!(matches!(parse_body("<html>"), Err(ApiError::Json(_))));
}

// =============================================================
// Envelope normalization
// =============================================================

#[test]
fn bare_array_and_envelope_yield_identical_rows() {
    let bare: Vec<Tag> = normalize_list(travel_rows());
    let wrapped: Vec<Tag> = normalize_list(serde_json::json!({ "data": travel_rows() }));
    assert_eq!(bare.len(), 2);
    assert_eq!(bare, wrapped);
}

#[test]
fn envelope_with_extra_fields_is_accepted() {
    let rows: Vec<Tag> = normalize_list(serde_json::json!({
        "data": travel_rows(),
        "meta": { "total": 2 }
    }));
    assert_eq!(rows.len(), 2);
}

#[test]
fn malformed_list_defaults_to_empty() {
    let rows: Vec<Tag> = normalize_list(serde_json::json!({ "items": travel_rows() }));
    assert!(rows.is_empty());
    let rows: Vec<Tag> = normalize_list(Value::Null);
    assert!(rows.is_empty());
    let rows: Vec<Tag> = normalize_list(serde_json::json!({ "data": "nope" }));
    assert!(rows.is_empty());
}

#[test]
fn post_with_null_tags_keeps_its_neighbours() {
    let rows = serde_json::json!({
        "data": [
            { "id": 1, "title": "Good", "content": "c", "tags": [{ "id": 3, "name": "Travel", "slug": "travel" }] },
            { "id": 2, "title": "Sparse", "content": null, "tags": null, "category": null }
        ]
    });
    let posts: Vec<Post> = normalize_list(rows);
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].tags.len(), 1);
    assert!(posts[1].tags.is_empty());
}

#[test]
fn undecodable_row_is_skipped_not_fatal() {
    let rows = serde_json::json!([
        { "id": 1, "name": "Travel", "slug": "travel" },
        { "name": "no id" },
        { "id": 3, "name": "Food", "slug": "food" }
    ]);
    let tags: Vec<Tag> = normalize_list(rows);
    assert_eq!(tags.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn normalize_object_accepts_both_shapes() {
    let profile = serde_json::json!({ "username": "ayu", "email": "ayu@example.com" });
    let bare: UserProfile = normalize_object(profile.clone()).unwrap();
    let wrapped: UserProfile = normalize_object(serde_json::json!({ "data": profile })).unwrap();
    assert_eq!(bare, wrapped);
}

#[test]
fn normalize_object_rejects_unrelated_shape() {
    let result: Result<UserProfile, _> = normalize_object(serde_json::json!({ "ok": true }));
    assert!(matches!(result, Err(ApiError::Json(_))));
}

// =============================================================
// Outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn requests_are_unavailable_outside_hydrate() {
    let client = ApiClient::new("http://localhost:8000");
    let result = client.send_empty(Method::Get, "/api/tags", Some("t")).await;
    assert!(matches!(result, Err(ApiError::Unavailable)));
}
