//! Fetch/create/update/delete wiring shared by the list screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each screen owns one [`CrudContext`]. Handlers read the bearer token from
//! the session at call time, run the request on the UI task queue, and feed
//! the outcome back into the screen's [`ResourceState`].
//!
//! Completions write through `try_update`: when the screen has been left
//! before the server answers, its signal is gone and the result is dropped.

#[cfg(test)]
#[path = "crud_test.rs"]
mod crud_test;

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::state::auth::Session;
use crate::state::resource::{LoadStatus, Resource, ResourceState};
use crate::util::messages::{LOADING, ResourceMessages};
use crate::util::task::spawn_ui_task;

/// Handle to one screen's resource list.
pub struct CrudContext<T: Resource> {
    pub state: RwSignal<ResourceState<T>>,
    session: Session,
    client: StoredValue<ApiClient>,
    messages: ResourceMessages,
}

impl<T: Resource> Clone for CrudContext<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource> Copy for CrudContext<T> {}

impl<T: Resource> CrudContext<T> {
    /// Screen state using the resource's own wording.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::with_messages(T::MESSAGES)
    }

    /// Screen state with custom wording (the read-only post feeds).
    pub fn with_messages(messages: ResourceMessages) -> Self {
        Self {
            state: RwSignal::new(ResourceState::default()),
            session: expect_context::<Session>(),
            client: StoredValue::new(expect_context::<ApiClient>()),
            messages,
        }
    }

    /// Re-fetch the list. Without a session the screen fails immediately.
    pub fn reload(self) {
        let Some(token) = self.session.token() else {
            self.write(|s| s.fail_load(self.messages.missing_session));
            return;
        };
        let client = self.client.get_value();
        spawn_ui_task(async move {
            match api::list::<T>(&client, &token).await {
                Ok(items) => self.write(|s| s.loaded(items)),
                Err(err) => {
                    warn!("GET {} failed: {err}", T::COLLECTION);
                    self.write(|s| s.fail_load(self.messages.load_failed));
                }
            }
        });
    }

    /// Submit the create draft; on success the draft is cleared and the list
    /// re-fetched.
    pub fn create(self) {
        let draft = self.state.with_untracked(|s| s.draft.clone());
        let Some(token) = self.prepare(&draft) else {
            return;
        };
        let client = self.client.get_value();
        spawn_ui_task(async move {
            match api::create::<T>(&client, &token, &draft).await {
                Ok(()) => {
                    self.write(ResourceState::created);
                    self.reload();
                }
                Err(err) => {
                    warn!("POST {} failed: {err}", T::COLLECTION);
                    self.write(|s| s.mutation_failed(self.messages.create_failed));
                }
            }
        });
    }

    /// Submit the edit draft as an update of the record being edited.
    pub fn save_edit(self) {
        let Some(editing) = self.state.with_untracked(|s| s.editing.clone()) else {
            return;
        };
        let Some(token) = self.prepare(&editing.draft) else {
            return;
        };
        let client = self.client.get_value();
        spawn_ui_task(async move {
            match api::update::<T>(&client, &token, editing.id, &editing.draft).await {
                Ok(()) => {
                    self.write(ResourceState::updated);
                    self.reload();
                }
                Err(err) => {
                    warn!("{} {}/{} failed: {err}", T::UPDATE_METHOD.as_str(), T::COLLECTION, editing.id);
                    self.write(|s| s.mutation_failed(self.messages.update_failed));
                }
            }
        });
    }

    /// Delete record `id`. A failure leaves the list untouched.
    pub fn delete(self, id: i64) {
        let Some(token) = self.session.token() else {
            self.write(|s| s.notice = Some(self.messages.missing_session.to_owned()));
            return;
        };
        if !self.state.try_update(ResourceState::begin_mutation).unwrap_or(false) {
            return;
        }
        let client = self.client.get_value();
        spawn_ui_task(async move {
            match api::delete::<T>(&client, &token, id).await {
                Ok(()) => {
                    self.write(ResourceState::deleted);
                    self.reload();
                }
                Err(err) => {
                    warn!("DELETE {}/{id} failed: {err}", T::COLLECTION);
                    self.write(|s| s.mutation_failed(self.messages.delete_failed));
                }
            }
        });
    }

    /// Start editing record `id`, replacing any edit in progress.
    pub fn begin_edit(self, id: i64) {
        self.state.update(|s| {
            if let Some(item) = s.find(id).cloned() {
                s.begin_edit(&item);
            }
        });
    }

    pub fn cancel_edit(self) {
        self.state.update(ResourceState::cancel_edit);
    }

    /// Mutate the create form buffer.
    pub fn edit_create(self, f: impl FnOnce(&mut T::Draft)) {
        self.state.update(|s| f(&mut s.draft));
    }

    /// Mutate the edit buffer, if a record is being edited.
    pub fn edit_editing(self, f: impl FnOnce(&mut T::Draft)) {
        self.state.update(|s| {
            if let Some(editing) = s.editing.as_mut() {
                f(&mut editing.draft);
            }
        });
    }

    /// Mutate whichever buffer a shared create/edit form is showing.
    pub fn edit_active(self, f: impl FnOnce(&mut T::Draft)) {
        self.state.update(|s| f(s.active_draft_mut()));
    }

    /// Validate `draft`, check for a session, and claim the mutation slot.
    fn prepare(self, draft: &T::Draft) -> Option<String> {
        if let Err(message) = T::validate(draft) {
            self.write(|s| s.notice = Some(message.to_owned()));
            return None;
        }
        let Some(token) = self.session.token() else {
            self.write(|s| s.notice = Some(self.messages.missing_session.to_owned()));
            return None;
        };
        if !self.state.try_update(ResourceState::begin_mutation).unwrap_or(false) {
            return None;
        }
        Some(token)
    }

    fn write(self, f: impl FnOnce(&mut ResourceState<T>)) {
        if self.state.try_update(f).is_none() {
            log!("{} screen closed; response dropped", T::COLLECTION);
        }
    }
}

/// Status line, empty-state text, or `render(items)` depending on the fetch.
pub fn list_body<T, V>(crud: CrudContext<T>, render: impl Fn(Vec<T>) -> V + Send + Sync + 'static) -> impl IntoView
where
    T: Resource,
    V: IntoView + 'static,
{
    let empty = crud.messages.empty;
    move || {
        let (status, items) = crud.state.with(|s| (s.status.clone(), s.items.clone()));
        match status {
            LoadStatus::Loading => view! { <p class="list-status">{LOADING}</p> }.into_any(),
            LoadStatus::Failed(message) => view! { <p class="list-status list-status--error">{message}</p> }.into_any(),
            LoadStatus::Ready if items.is_empty() => view! { <p class="list-status">{empty}</p> }.into_any(),
            LoadStatus::Ready => render(items).into_any(),
        }
    }
}

/// Inline notice for the last validation or mutation failure.
pub fn notice_line<T: Resource>(crud: CrudContext<T>) -> impl IntoView {
    move || {
        crud.state
            .with(|s| s.notice.clone())
            .map(|notice| view! { <p class="form-notice">{notice}</p> })
    }
}
