//! Signed-in user's profile.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::UserProfile;
use crate::state::auth::Session;
use crate::util::format::{format_timestamp, or_dash};
use crate::util::messages::{LOGIN_REQUIRED, PROFILE_LOAD_FAILED, PROFILE_LOADING};
use crate::util::task::spawn_ui_task;

#[derive(Clone, Debug, PartialEq)]
enum ProfileStatus {
    Loading,
    Failed(&'static str),
    Ready(UserProfile),
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let status = RwSignal::new(ProfileStatus::Loading);

    match session.token() {
        None => status.set(ProfileStatus::Failed(LOGIN_REQUIRED)),
        Some(token) => spawn_ui_task(async move {
            let next = match api::fetch_profile(&client, &token).await {
                Ok(profile) => ProfileStatus::Ready(profile),
                Err(err) => {
                    warn!("GET /api/user failed: {err}");
                    ProfileStatus::Failed(PROFILE_LOAD_FAILED)
                }
            };
            let _ = status.try_set(next);
        }),
    }

    view! {
        <section class="profile">
            <h1 class="page-title">"Your Profile"</h1>
            {move || match status.get() {
                ProfileStatus::Loading => view! { <p class="list-status">{PROFILE_LOADING}</p> }.into_any(),
                ProfileStatus::Failed(message) => {
                    view! { <p class="list-status list-status--error">{message}</p> }.into_any()
                }
                ProfileStatus::Ready(profile) => {
                    view! {
                        <dl class="profile__fields">
                            <dt>"Username"</dt>
                            <dd>{profile.username}</dd>
                            <dt>"Email"</dt>
                            <dd>{profile.email}</dd>
                            <dt>"Bio"</dt>
                            <dd>{or_dash(profile.bio.as_deref())}</dd>
                            <dt>"Dibuat"</dt>
                            <dd>{format_timestamp(&profile.created_at)}</dd>
                            <dt>"Diperbarui"</dt>
                            <dd>{format_timestamp(&profile.updated_at)}</dd>
                        </dl>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
