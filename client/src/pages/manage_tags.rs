//! Tag list with inline create and edit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Create form above, table below. Clicking Edit swaps that row's name cell
//! for an input; only one row is editable at a time.

use leptos::prelude::*;

use super::crud::{CrudContext, list_body, notice_line};
use crate::net::types::Tag;

#[component]
pub fn ManageTagsPage() -> impl IntoView {
    let crud = CrudContext::<Tag>::new();
    crud.reload();

    let busy = move || crud.state.with(|s| s.busy);

    view! {
        <section class="manage">
            <h1 class="page-title">"Manage Tags"</h1>
            <form
                class="manage__create"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    crud.create();
                }
            >
                <input
                    class="manage__input"
                    type="text"
                    placeholder="Nama tag"
                    prop:value=move || crud.state.with(|s| s.draft.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        crud.edit_create(|d| d.name = value);
                    }
                />
                <button class="btn btn--primary" type="submit" disabled=busy>
                    "Tambah"
                </button>
            </form>
            {notice_line(crud)}
            {list_body(crud, move |tags| {
                view! {
                    <table class="manage__table">
                        <thead>
                            <tr>
                                <th>"Nama"</th>
                                <th>"Slug"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {tags.into_iter().map(|tag| view! { <TagRow crud=crud tag=tag/> }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
            })}
        </section>
    }
}

#[component]
fn TagRow(crud: CrudContext<Tag>, tag: Tag) -> impl IntoView {
    let id = tag.id;
    let editing = move || crud.state.with(|s| s.is_editing(id));
    let busy = move || crud.state.with(|s| s.busy);
    let name = tag.name.clone();

    view! {
        <tr>
            <td>
                <Show when=editing fallback=move || name.clone()>
                    <input
                        class="manage__input"
                        type="text"
                        prop:value=move || {
                            crud.state.with(|s| s.editing.as_ref().map(|e| e.draft.name.clone()).unwrap_or_default())
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            crud.edit_editing(|d| d.name = value);
                        }
                    />
                </Show>
            </td>
            <td>{tag.slug}</td>
            <td class="manage__actions">
                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=move |_| crud.begin_edit(id)>
                                "Edit"
                            </button>
                            <button class="btn btn--danger" disabled=busy on:click=move |_| crud.delete(id)>
                                "Hapus"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" disabled=busy on:click=move |_| crud.save_edit()>
                        "Simpan"
                    </button>
                    <button class="btn" on:click=move |_| crud.cancel_edit()>
                        "Batal"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
