//! List-management state shared by the tag, category, and post screens.
//!
//! DESIGN
//! ======
//! Every management screen runs the same machine:
//!
//! ```text
//! Loading --fetch ok--> Ready --begin_edit--> Ready + Editing
//!    |                    ^  \                   |
//!    +--no token/err--> Failed  +--mutation--> refetch
//! ```
//!
//! The list is never patched locally after a mutation; callers re-fetch and
//! hand the server's answer to [`ResourceState::loaded`]. Mutation failures
//! only set `notice`, leaving list and drafts intact.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::http::Method;
use crate::net::types::{Category, CategoryDraft, Post, PostDraft, Tag, TagDraft};
use crate::util::messages::{CATEGORY_MESSAGES, POST_MESSAGES, ResourceMessages, TAG_MESSAGES};

/// A remotely managed record type with a create/edit form.
pub trait Resource: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Form buffer submitted on create and update.
    type Draft: Clone + Debug + Default + PartialEq + Serialize + Send + Sync + 'static;

    /// Collection path, e.g. `/api/tags`. Members live at `{COLLECTION}/{id}`.
    const COLLECTION: &'static str;
    /// Verb used to submit an edited draft.
    const UPDATE_METHOD: Method;
    const MESSAGES: ResourceMessages;

    fn id(&self) -> i64;

    /// Copy the editable fields into a fresh draft.
    fn to_draft(&self) -> Self::Draft;

    /// Required-field check run before submitting.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    fn validate(draft: &Self::Draft) -> Result<(), &'static str>;
}

impl Resource for Tag {
    type Draft = TagDraft;

    const COLLECTION: &'static str = "/api/tags";
    const UPDATE_METHOD: Method = Method::Patch;
    const MESSAGES: ResourceMessages = TAG_MESSAGES;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> TagDraft {
        TagDraft { name: self.name.clone() }
    }

    fn validate(draft: &TagDraft) -> Result<(), &'static str> {
        if draft.name.trim().is_empty() {
            return Err(TAG_MESSAGES.name_required);
        }
        Ok(())
    }
}

impl Resource for Category {
    type Draft = CategoryDraft;

    const COLLECTION: &'static str = "/api/categories";
    const UPDATE_METHOD: Method = Method::Patch;
    const MESSAGES: ResourceMessages = CATEGORY_MESSAGES;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft { name: self.name.clone(), description: self.description.clone().unwrap_or_default() }
    }

    fn validate(draft: &CategoryDraft) -> Result<(), &'static str> {
        if draft.name.trim().is_empty() {
            return Err(CATEGORY_MESSAGES.name_required);
        }
        Ok(())
    }
}

impl Resource for Post {
    type Draft = PostDraft;

    const COLLECTION: &'static str = "/api/post";
    const UPDATE_METHOD: Method = Method::Put;
    const MESSAGES: ResourceMessages = POST_MESSAGES;

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            image_url: self.image_url.clone().unwrap_or_default(),
            category_id: self.category.as_ref().map_or(0, |c| c.id),
            tag_ids: self.tags.iter().map(|t| t.id).collect(),
        }
    }

    fn validate(draft: &PostDraft) -> Result<(), &'static str> {
        if draft.title.trim().is_empty() || draft.content.trim().is_empty() || draft.category_id == 0 {
            return Err(POST_MESSAGES.name_required);
        }
        Ok(())
    }
}

/// Fetch lifecycle of a screen's list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Failed(String),
    Ready,
}

/// Local copy of a record being edited.
#[derive(Clone, Debug, PartialEq)]
pub struct Editing<D> {
    pub id: i64,
    pub draft: D,
}

/// Screen state for one resource list.
#[derive(Clone, Debug)]
pub struct ResourceState<T: Resource> {
    pub status: LoadStatus,
    pub items: Vec<T>,
    /// Create form buffer.
    pub draft: T::Draft,
    pub editing: Option<Editing<T::Draft>>,
    /// Last mutation or validation failure.
    pub notice: Option<String>,
    /// A mutation request is in flight.
    pub busy: bool,
}

impl<T: Resource> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Loading,
            items: Vec::new(),
            draft: T::Draft::default(),
            editing: None,
            notice: None,
            busy: false,
        }
    }
}

impl<T: Resource> ResourceState<T> {
    /// Replace the list with the server's answer.
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.status = LoadStatus::Ready;
    }

    pub fn fail_load(&mut self, message: &str) {
        self.status = LoadStatus::Failed(message.to_owned());
        self.busy = false;
    }

    /// Claim the mutation slot. Returns `false` while another mutation runs.
    pub fn begin_mutation(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.notice = None;
        true
    }

    /// Record a failed create/update/delete; list and drafts stay as they were.
    pub fn mutation_failed(&mut self, message: &str) {
        self.busy = false;
        self.notice = Some(message.to_owned());
    }

    /// Create succeeded: the create form starts over.
    pub fn created(&mut self) {
        self.busy = false;
        self.draft = T::Draft::default();
    }

    /// Update succeeded: leave edit mode.
    pub fn updated(&mut self) {
        self.busy = false;
        self.editing = None;
    }

    pub fn deleted(&mut self) {
        self.busy = false;
    }

    /// Copy `item` into a fresh edit buffer, replacing any previous one.
    pub fn begin_edit(&mut self, item: &T) {
        self.editing = Some(Editing { id: item.id(), draft: item.to_draft() });
        self.notice = None;
    }

    /// Discard the edit buffer.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.notice = None;
    }

    #[must_use]
    pub fn is_editing(&self, id: i64) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == id)
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|e| e.id)
    }

    /// The buffer a shared create/edit form should show.
    #[must_use]
    pub fn active_draft(&self) -> &T::Draft {
        self.editing.as_ref().map_or(&self.draft, |e| &e.draft)
    }

    pub fn active_draft_mut(&mut self) -> &mut T::Draft {
        match self.editing.as_mut() {
            Some(editing) => &mut editing.draft,
            None => &mut self.draft,
        }
    }

    /// Look up a loaded record by id.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}
