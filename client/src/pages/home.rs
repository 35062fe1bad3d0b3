//! Dashboard feed of post cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for signed-in users. Read-only: cards link nowhere and the
//! feed is fetched once per visit.

use leptos::prelude::*;

use super::crud::{CrudContext, list_body};
use crate::net::types::Post;
use crate::util::format::{PREVIEW_CHARS, format_long_date, truncate_content};
use crate::util::messages::FEED_MESSAGES;

#[component]
pub fn HomePage() -> impl IntoView {
    let feed = CrudContext::<Post>::with_messages(FEED_MESSAGES);
    feed.reload();

    view! {
        <section class="feed">
            <h1 class="page-title">"Dashboard"</h1>
            {list_body(feed, |posts| {
                view! {
                    <div class="feed__grid">
                        {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect::<Vec<_>>()}
                    </div>
                }
            })}
        </section>
    }
}

/// Summary card: image, date, title, truncated body, category, tags.
#[component]
fn PostCard(post: Post) -> impl IntoView {
    let image = post.image().map(str::to_owned);
    let category = post.category_name().to_owned();
    let tags = post.tags.iter().map(|t| t.name.clone()).collect::<Vec<_>>();

    view! {
        <article class="post-card">
            {image.map(|src| view! { <img class="post-card__image" src=src alt=""/> })}
            <div class="post-card__body">
                <time class="post-card__date">{format_long_date(&post.created_at)}</time>
                <h2 class="post-card__title">{post.title}</h2>
                <p class="post-card__excerpt">{truncate_content(&post.content, PREVIEW_CHARS)}</p>
                <div class="post-card__meta">
                    {(!category.is_empty()).then(|| view! { <span class="badge">{category}</span> })}
                    {tags
                        .into_iter()
                        .map(|name| view! { <span class="tag-chip">"#" {name}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </article>
    }
}
