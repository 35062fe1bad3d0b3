use super::*;

// =============================================================
// Decoding
// =============================================================

#[test]
fn post_decodes_full_record() {
    let json = serde_json::json!({
        "id": 7,
        "user_id": 2,
        "title": "Hello",
        "content": "World",
        "image_url": "https://img.test/a.png",
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-02T10:00:00Z",
        "category": { "id": 1, "name": "News", "slug": "news" },
        "tags": [{ "id": 3, "name": "Travel", "slug": "travel" }]
    });
    let post: Post = serde_json::from_value(json).unwrap();
    assert_eq!(post.id, 7);
    assert_eq!(post.user_id, Some(2));
    assert_eq!(post.category_name(), "News");
    assert_eq!(post.tags.len(), 1);
    assert_eq!(post.image(), Some("https://img.test/a.png"));
}

#[test]
fn post_tolerates_missing_category_and_tags() {
    let json = serde_json::json!({ "id": 1, "title": "Bare" });
    let post: Post = serde_json::from_value(json).unwrap();
    assert!(post.category.is_none());
    assert!(post.tags.is_empty());
    assert_eq!(post.category_name(), "");
    assert_eq!(post.image(), None);
}

#[test]
fn post_tolerates_null_tags_category_and_content() {
    let json = serde_json::json!({
        "id": 1,
        "title": "Hello",
        "content": null,
        "created_at": null,
        "updated_at": null,
        "category": null,
        "tags": null
    });
    let post: Post = serde_json::from_value(json).unwrap();
    assert!(post.tags.is_empty());
    assert!(post.category.is_none());
    assert_eq!(post.content, "");
    assert_eq!(post.created_at, "");
}

#[test]
fn null_slugs_decode_as_empty() {
    let tag: Tag = serde_json::from_value(serde_json::json!({ "id": 1, "name": "a", "slug": null })).unwrap();
    assert_eq!(tag.slug, "");
    let category: Category =
        serde_json::from_value(serde_json::json!({ "id": 2, "name": "b", "slug": null })).unwrap();
    assert_eq!(category.slug, "");
}

#[test]
fn post_blank_image_url_is_treated_as_absent() {
    let json = serde_json::json!({ "id": 1, "title": "t", "image_url": "  " });
    let post: Post = serde_json::from_value(json).unwrap();
    assert_eq!(post.image(), None);
}

#[test]
fn category_description_may_be_null() {
    let json = serde_json::json!({ "id": 4, "name": "Food", "slug": "food", "description": null });
    let category: Category = serde_json::from_value(json).unwrap();
    assert_eq!(category.description, None);
}

#[test]
fn profile_bio_is_optional() {
    let json = serde_json::json!({
        "username": "ayu",
        "email": "ayu@example.com",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    });
    let profile: UserProfile = serde_json::from_value(json).unwrap();
    assert_eq!(profile.username, "ayu");
    assert!(profile.bio.is_none());
}

// =============================================================
// Drafts and requests
// =============================================================

#[test]
fn post_draft_serializes_camel_case_keys() {
    let draft = PostDraft {
        title: "T".to_owned(),
        content: "C".to_owned(),
        image_url: "u".to_owned(),
        category_id: 2,
        tag_ids: vec![1, 3],
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({
            "title": "T",
            "content": "C",
            "imageUrl": "u",
            "categoryId": 2,
            "tagIds": [1, 3]
        })
    );
}

#[test]
fn post_draft_toggle_tag_adds_then_removes() {
    let mut draft = PostDraft::default();
    draft.toggle_tag(5);
    draft.toggle_tag(9);
    assert_eq!(draft.tag_ids, vec![5, 9]);
    draft.toggle_tag(5);
    assert_eq!(draft.tag_ids, vec![9]);
}

#[test]
fn post_tag_names_joins_with_comma() {
    let post = Post {
        id: 1,
        user_id: None,
        title: "t".to_owned(),
        content: String::new(),
        image_url: None,
        created_at: String::new(),
        updated_at: String::new(),
        category: None,
        tags: vec![
            Tag { id: 1, name: "a".to_owned(), slug: "a".to_owned() },
            Tag { id: 2, name: "b".to_owned(), slug: "b".to_owned() },
        ],
    };
    assert_eq!(post.tag_names(), "a, b");
}

#[test]
fn register_request_uses_api_field_names() {
    let req = RegisterRequest {
        email: "a@b.c".to_owned(),
        username: "abc".to_owned(),
        password: "pw".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.c", "username": "abc", "password": "pw" })
    );
}
