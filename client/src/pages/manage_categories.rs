//! Category list with inline create and edit.

use leptos::prelude::*;

use super::crud::{CrudContext, list_body, notice_line};
use crate::net::types::{Category, CategoryDraft};

#[component]
pub fn ManageCategoriesPage() -> impl IntoView {
    let crud = CrudContext::<Category>::new();
    crud.reload();

    let busy = move || crud.state.with(|s| s.busy);
    let create_field = move |read: fn(&CategoryDraft) -> String| move || crud.state.with(|s| read(&s.draft));

    view! {
        <section class="manage">
            <h1 class="page-title">"Manage Kategori"</h1>
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
                    placeholder="Nama kategori"
                    prop:value=create_field(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        crud.edit_create(|d| d.name = value);
                    }
                />
                <input
                    class="manage__input"
                    type="text"
                    placeholder="Deskripsi"
                    prop:value=create_field(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        crud.edit_create(|d| d.description = value);
                    }
                />
                <button class="btn btn--primary" type="submit" disabled=busy>
                    "Tambah"
                </button>
            </form>
            {notice_line(crud)}
            {list_body(crud, move |categories| {
                view! {
                    <table class="manage__table">
                        <thead>
                            <tr>
                                <th>"Nama"</th>
                                <th>"Slug"</th>
                                <th>"Deskripsi"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {categories
                                .into_iter()
                                .map(|category| view! { <CategoryRow crud=crud category=category/> })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
            })}
        </section>
    }
}

#[component]
fn CategoryRow(crud: CrudContext<Category>, category: Category) -> impl IntoView {
    let id = category.id;
    let editing = move || crud.state.with(|s| s.is_editing(id));
    let busy = move || crud.state.with(|s| s.busy);
    let edit_field = move |read: fn(&CategoryDraft) -> String| {
        move || crud.state.with(|s| s.editing.as_ref().map(|e| read(&e.draft)).unwrap_or_default())
    };
    let name = category.name.clone();
    let description = category.description.clone().unwrap_or_default();

    view! {
        <tr>
            <td>
                <Show when=editing fallback=move || name.clone()>
                    <input
                        class="manage__input"
                        type="text"
                        prop:value=edit_field(|d| d.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            crud.edit_editing(|d| d.name = value);
                        }
                    />
                </Show>
            </td>
            <td>{category.slug}</td>
            <td>
                <Show when=editing fallback=move || description.clone()>
                    <input
                        class="manage__input"
                        type="text"
                        prop:value=edit_field(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            crud.edit_editing(|d| d.description = value);
                        }
                    />
                </Show>
            </td>
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
