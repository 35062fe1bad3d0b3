use super::*;

fn tag(id: i64, name: &str) -> Tag {
    Tag { id, name: name.to_owned(), slug: name.to_lowercase() }
}

fn category(id: i64, name: &str) -> Category {
    Category { id, name: name.to_owned(), slug: name.to_lowercase(), description: None }
}

fn post(id: i64, title: &str, category_id: i64, tag_ids: &[i64]) -> Post {
    Post {
        id,
        user_id: Some(1),
        title: title.to_owned(),
        content: format!("{title} body"),
        image_url: Some(format!("https://img.test/{id}.png")),
        created_at: "2024-05-01T10:00:00Z".to_owned(),
        updated_at: "2024-05-01T10:00:00Z".to_owned(),
        category: Some(category(category_id, "News")),
        tags: tag_ids.iter().map(|id| tag(*id, &format!("t{id}"))).collect(),
    }
}

// =============================================================
// Resource descriptors
// =============================================================

#[test]
fn collections_and_update_verbs_match_api() {
    assert_eq!(Tag::COLLECTION, "/api/tags");
    assert_eq!(Tag::UPDATE_METHOD, Method::Patch);
    assert_eq!(Category::COLLECTION, "/api/categories");
    assert_eq!(Category::UPDATE_METHOD, Method::Patch);
    assert_eq!(Post::COLLECTION, "/api/post");
    assert_eq!(Post::UPDATE_METHOD, Method::Put);
}

#[test]
fn tag_and_category_require_name() {
    assert!(Tag::validate(&TagDraft { name: "  ".to_owned() }).is_err());
    assert!(Tag::validate(&TagDraft { name: "Travel".to_owned() }).is_ok());
    assert!(Category::validate(&CategoryDraft::default()).is_err());
}

#[test]
fn post_requires_title_content_and_category() {
    let mut draft = PostDraft { title: "T".to_owned(), content: "C".to_owned(), ..PostDraft::default() };
    assert_eq!(Post::validate(&draft), Err("Judul, konten, dan kategori harus diisi"));
    draft.category_id = 3;
    assert!(Post::validate(&draft).is_ok());
    draft.content = " ".to_owned();
    assert!(Post::validate(&draft).is_err());
}

#[test]
fn post_to_draft_copies_category_and_tags() {
    let draft = post(4, "Hello", 2, &[5, 6]).to_draft();
    assert_eq!(draft.title, "Hello");
    assert_eq!(draft.image_url, "https://img.test/4.png");
    assert_eq!(draft.category_id, 2);
    assert_eq!(draft.tag_ids, vec![5, 6]);
}

#[test]
fn category_to_draft_defaults_missing_description() {
    assert_eq!(category(1, "Food").to_draft().description, "");
}

// =============================================================
// Load transitions
// =============================================================

#[test]
fn state_starts_loading() {
    let state = ResourceState::<Tag>::default();
    assert_eq!(state.status, LoadStatus::Loading);
    assert!(state.items.is_empty());
    assert!(state.editing.is_none());
}

#[test]
fn empty_fetch_is_ready_not_failed() {
    let mut state = ResourceState::<Tag>::default();
    state.loaded(Vec::new());
    assert_eq!(state.status, LoadStatus::Ready);
    assert!(state.items.is_empty());
}

#[test]
fn fail_load_records_message() {
    let mut state = ResourceState::<Tag>::default();
    state.fail_load("Anda harus login");
    assert_eq!(state.status, LoadStatus::Failed("Anda harus login".to_owned()));
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn created_tag_appears_after_refetch_with_server_fields() {
    let mut state = ResourceState::<Tag>::default();
    state.loaded(Vec::new());
    state.draft.name = "Travel".to_owned();
    assert!(Tag::validate(&state.draft).is_ok());
    assert!(state.begin_mutation());

    state.created();
    assert_eq!(state.draft, TagDraft::default());
    state.loaded(vec![Tag { id: 42, name: "Travel".to_owned(), slug: "travel".to_owned() }]);

    let row = state.find(42).unwrap();
    assert_eq!(row.slug, "travel");
    assert!(!state.busy);
}

#[test]
fn failed_create_keeps_draft() {
    let mut state = ResourceState::<Tag>::default();
    state.loaded(Vec::new());
    state.draft.name = "Travel".to_owned();
    state.begin_mutation();
    state.mutation_failed("Gagal membuat tag");
    assert_eq!(state.draft.name, "Travel");
    assert_eq!(state.notice.as_deref(), Some("Gagal membuat tag"));
    assert_eq!(state.status, LoadStatus::Ready);
}

#[test]
fn delete_then_refetch_drops_row() {
    let mut state = ResourceState::<Category>::default();
    state.loaded(vec![category(1, "News"), category(2, "Food")]);
    state.begin_mutation();
    state.deleted();
    state.loaded(vec![category(2, "Food")]);
    assert!(state.find(1).is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn failed_delete_leaves_list_unchanged() {
    let mut state = ResourceState::<Category>::default();
    let before = vec![category(1, "News"), category(2, "Food")];
    state.loaded(before.clone());
    state.begin_mutation();
    state.mutation_failed("Gagal menghapus kategori");
    assert_eq!(state.items, before);
    assert_eq!(state.notice.as_deref(), Some("Gagal menghapus kategori"));
    assert!(!state.busy);
}

#[test]
fn begin_mutation_refuses_while_busy() {
    let mut state = ResourceState::<Tag>::default();
    assert!(state.begin_mutation());
    assert!(!state.begin_mutation());
}

#[test]
fn begin_mutation_clears_previous_notice() {
    let mut state = ResourceState::<Tag>::default();
    state.mutation_failed("old");
    state.begin_mutation();
    assert!(state.notice.is_none());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn begin_edit_copies_record_into_buffer() {
    let mut state = ResourceState::<Tag>::default();
    let travel = tag(1, "Travel");
    state.loaded(vec![travel.clone()]);
    state.begin_edit(&travel);
    assert!(state.is_editing(1));
    assert_eq!(state.active_draft().name, "Travel");
}

#[test]
fn updated_leaves_edit_mode() {
    let mut state = ResourceState::<Tag>::default();
    state.begin_edit(&tag(1, "Travel"));
    state.begin_mutation();
    state.updated();
    assert!(state.editing.is_none());
    assert!(!state.busy);
}

#[test]
fn failed_update_keeps_edit_buffer() {
    let mut state = ResourceState::<Tag>::default();
    state.begin_edit(&tag(1, "Travel"));
    if let Some(editing) = state.editing.as_mut() {
        editing.draft.name = "Trips".to_owned();
    }
    state.begin_mutation();
    state.mutation_failed("Gagal update tag");
    assert_eq!(state.active_draft().name, "Trips");
}

#[test]
fn cancel_then_edit_other_post_shows_its_own_fields() {
    let first = post(1, "First", 2, &[7]);
    let second = post(2, "Second", 3, &[8, 9]);
    let mut state = ResourceState::<Post>::default();
    state.loaded(vec![first.clone(), second.clone()]);

    state.begin_edit(&first);
    state.active_draft_mut().title = "First (edited)".to_owned();
    state.active_draft_mut().toggle_tag(9);
    state.cancel_edit();
    assert!(state.editing_id().is_none());

    state.begin_edit(&second);
    assert_eq!(state.editing_id(), Some(2));
    assert_eq!(state.active_draft(), &second.to_draft());
}

#[test]
fn active_draft_falls_back_to_create_buffer() {
    let mut state = ResourceState::<Post>::default();
    state.active_draft_mut().title = "New".to_owned();
    assert_eq!(state.draft.title, "New");
    state.begin_edit(&post(5, "Existing", 1, &[]));
    assert_eq!(state.active_draft().title, "Existing");
    state.cancel_edit();
    assert_eq!(state.active_draft().title, "New");
}
