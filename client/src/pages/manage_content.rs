//! Hub linking to the three management screens.

use leptos::prelude::*;
use leptos_router::components::A;

const SECTIONS: [(&str, &str, &str); 3] = [
    ("/manage-content/posts", "Posts", "Tulis, ubah, dan hapus postingan beserta kategori dan tag-nya."),
    ("/manage-content/categories", "Kategori", "Kelola kategori untuk mengelompokkan postingan."),
    ("/manage-content/tags", "Tags", "Kelola tag yang bisa ditempelkan ke postingan."),
];

#[component]
pub fn ManageContentPage() -> impl IntoView {
    view! {
        <section class="manage-hub">
            <h1 class="page-title">"Manage Content"</h1>
            <div class="manage-hub__grid">
                {SECTIONS
                    .iter()
                    .map(|(href, title, blurb)| {
                        view! {
                            <A href=*href attr:class="manage-hub__card">
                                <h2>{*title}</h2>
                                <p>{*blurb}</p>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
