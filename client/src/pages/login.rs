//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. A successful login stores the issued token in the session
//! and moves to the dashboard; any failure shows one generic notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::loading_overlay::LoadingOverlay;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::LoginRequest;
use crate::state::auth::Session;
use crate::state::flash::FlashState;
use crate::util::guard::DASHBOARD_ROUTE;
use crate::util::messages::{EMAIL_REQUIRED, LOGIN_FAILED, PASSWORD_REQUIRED};
use crate::util::task::spawn_ui_task;

/// Per-field required-value errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Build a login request, or report which fields are missing.
///
/// # Errors
///
/// Returns the per-field messages when email or password is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, LoginFieldErrors> {
    let email = email.trim();
    let errors = LoginFieldErrors {
        email: email.is_empty().then_some(EMAIL_REQUIRED),
        password: password.is_empty().then_some(PASSWORD_REQUIRED),
    };
    if errors != LoginFieldErrors::default() {
        return Err(errors);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let flash = expect_context::<RwSignal<FlashState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginFieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                errors.set(LoginFieldErrors::default());
                request
            }
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        busy.set(true);

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_ui_task(async move {
            let outcome = match api::login(&client, &request).await {
                Ok(response) => session.login(&response.access_token).map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            let _ = busy.try_set(false);
            match outcome {
                Ok(()) => {
                    flash.update(FlashState::dismiss);
                    navigate(DASHBOARD_ROUTE, NavigateOptions::default());
                }
                Err(reason) => {
                    warn!("login failed: {reason}");
                    flash.update(|f| f.error(LOGIN_FAILED));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <LoadingOverlay active=busy/>
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {move || errors.get().email.map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || errors.get().password.map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
