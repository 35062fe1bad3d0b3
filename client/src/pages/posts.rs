//! Reading view with every post's full content.

use leptos::prelude::*;

use super::crud::{CrudContext, list_body};
use crate::net::types::Post;
use crate::util::format::format_long_date;
use crate::util::messages::FEED_MESSAGES;

#[component]
pub fn PostsPage() -> impl IntoView {
    let feed = CrudContext::<Post>::with_messages(FEED_MESSAGES);
    feed.reload();

    view! {
        <section class="reading">
            <h1 class="page-title">"Posts"</h1>
            {list_body(feed, |posts| {
                posts
                    .into_iter()
                    .map(|post| {
                        let image = post.image().map(str::to_owned);
                        let category = post.category_name().to_owned();
                        let tags = post.tag_names();
                        let paragraphs = post
                            .content
                            .split("\n\n")
                            .map(|para| view! { <p>{para.to_owned()}</p> })
                            .collect::<Vec<_>>();
                        view! {
                            <article class="reading__post">
                                <header>
                                    <h2>{post.title}</h2>
                                    <p class="reading__meta">
                                        {format_long_date(&post.created_at)}
                                        {(!category.is_empty()).then(|| format!(" · {category}"))}
                                    </p>
                                </header>
                                {image.map(|src| view! { <img class="reading__image" src=src alt=""/> })}
                                <div class="reading__content">{paragraphs}</div>
                                {(!tags.is_empty()).then(|| view! { <footer class="reading__tags">{tags}</footer> })}
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
            })}
        </section>
    }
}
