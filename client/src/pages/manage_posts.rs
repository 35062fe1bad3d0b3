//! Post management: one form for create and edit, a table, and a delete
//! confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Categories and tags are fetched alongside the posts to fill the selectors.
//! Those auxiliary fetches are best-effort: on failure the selectors stay
//! empty and the page works otherwise.

#[cfg(test)]
#[path = "manage_posts_test.rs"]
mod manage_posts_test;

use leptos::logging::warn;
use leptos::prelude::*;

use super::crud::{CrudContext, list_body, notice_line};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Category, Post, PostDraft, Tag};
use crate::state::auth::Session;
use crate::state::resource::Resource;
use crate::util::format::format_short_date;
use crate::util::messages::POST_DELETE_CONFIRM;
use crate::util::task::spawn_ui_task;

/// Heading for the shared form.
#[must_use]
pub fn form_heading(editing_id: Option<i64>) -> String {
    match editing_id {
        Some(id) => format!("Edit Post ID #{id}"),
        None => "Tambah Post Baru".to_owned(),
    }
}

/// Submit button text for the shared form.
#[must_use]
pub fn submit_label(editing_id: Option<i64>) -> &'static str {
    if editing_id.is_some() { "Simpan Perubahan" } else { "Tambah Post" }
}

/// Parse a `<select>` value into a category id; anything unparseable is "none".
#[must_use]
pub fn parse_category_choice(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Fill `target` with every `T`, leaving it empty on failure.
fn load_options<T: Resource>(session: Session, client: ApiClient, target: RwSignal<Vec<T>>) {
    let Some(token) = session.token() else {
        return;
    };
    spawn_ui_task(async move {
        match api::list::<T>(&client, &token).await {
            Ok(items) => {
                let _ = target.try_set(items);
            }
            Err(err) => warn!("GET {} for selector failed: {err}", T::COLLECTION),
        }
    });
}

#[component]
pub fn ManagePostsPage() -> impl IntoView {
    let crud = CrudContext::<Post>::new();
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let categories = RwSignal::new(Vec::<Category>::new());
    let tags = RwSignal::new(Vec::<Tag>::new());
    let pending_delete = RwSignal::new(None::<i64>);

    crud.reload();
    load_options(session, client.clone(), categories);
    load_options(session, client, tags);

    let editing_id = move || crud.state.with(|s| s.editing_id());
    let busy = move || crud.state.with(|s| s.busy);
    let field = move |read: fn(&PostDraft) -> String| move || crud.state.with(|s| read(s.active_draft()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if editing_id().is_some() {
            crud.save_edit();
        } else {
            crud.create();
        }
    };

    let on_edit = Callback::new(move |id: i64| crud.begin_edit(id));
    let on_delete_request = Callback::new(move |id: i64| pending_delete.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            pending_delete.set(None);
            crud.delete(id);
        }
    });

    view! {
        <section class="manage">
            <h1 class="page-title">"Manage Posts"</h1>
            <form class="post-form" on:submit=on_submit>
                <h2 class="post-form__heading">{move || form_heading(editing_id())}</h2>
                <label class="post-form__label">
                    "Judul"
                    <input
                        class="manage__input"
                        type="text"
                        prop:value=field(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            crud.edit_active(|d| d.title = value);
                        }
                    />
                </label>
                <label class="post-form__label">
                    "Konten"
                    <textarea
                        class="manage__textarea"
                        rows="6"
                        prop:value=field(|d| d.content.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            crud.edit_active(|d| d.content = value);
                        }
                    ></textarea>
                </label>
                <label class="post-form__label">
                    "URL Gambar"
                    <input
                        class="manage__input"
                        type="url"
                        prop:value=field(|d| d.image_url.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            crud.edit_active(|d| d.image_url = value);
                        }
                    />
                </label>
                <label class="post-form__label">
                    "Kategori"
                    <select
                        class="manage__input"
                        on:change=move |ev| {
                            let choice = parse_category_choice(&event_target_value(&ev));
                            crud.edit_active(|d| d.category_id = choice);
                        }
                    >
                        <option value="0">"Pilih kategori"</option>
                        {move || {
                            let chosen = crud.state.with(|s| s.active_draft().category_id);
                            categories
                                .get()
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <option value={c.id.to_string()} selected={c.id == chosen}>
                                            {c.name}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <fieldset class="post-form__tags">
                    <legend>"Tags"</legend>
                    {move || {
                        tags.get()
                            .into_iter()
                            .map(|tag| {
                                let id = tag.id;
                                view! {
                                    <label class="post-form__tag">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                crud.state.with(|s| s.active_draft().tag_ids.contains(&id))
                                            }
                                            on:change=move |_| crud.edit_active(|d| d.toggle_tag(id))
                                        />
                                        {tag.name}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </fieldset>
                {notice_line(crud)}
                <div class="post-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || submit_label(editing_id())}
                    </button>
                    <Show when=move || editing_id().is_some()>
                        <button class="btn" type="button" on:click=move |_| crud.cancel_edit()>
                            "Batal"
                        </button>
                    </Show>
                </div>
            </form>
            {list_body(crud, move |posts| {
                view! {
                    <table class="manage__table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Judul"</th>
                                <th>"Kategori"</th>
                                <th>"Tags"</th>
                                <th>"Gambar"</th>
                                <th>"Tanggal Dibuat"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {posts
                                .into_iter()
                                .map(|post| {
                                    let id = post.id;
                                    let thumbnail = post.image().map(str::to_owned);
                                    let title = post.title.clone();
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{post.title.clone()}</td>
                                            <td>{post.category_name().to_owned()}</td>
                                            <td>{post.tag_names()}</td>
                                            <td>
                                                {match thumbnail {
                                                    Some(src) => {
                                                        view! { <img class="manage__thumb" src=src alt=title/> }
                                                            .into_any()
                                                    }
                                                    None => "-".into_any(),
                                                }}
                                            </td>
                                            <td>{format_short_date(&post.created_at)}</td>
                                            <td class="manage__actions">
                                                <button class="btn" on:click=move |_| on_edit.run(id)>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    disabled=busy
                                                    on:click=move |_| on_delete_request.run(id)
                                                >
                                                    "Hapus"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
            })}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Hapus Post"
                    message=POST_DELETE_CONFIRM
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}
