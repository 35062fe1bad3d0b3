//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::loading_overlay::LoadingOverlay;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::RegisterRequest;
use crate::state::flash::FlashState;
use crate::util::guard::LOGIN_ROUTE;
use crate::util::messages::{EMAIL_REQUIRED, PASSWORD_REQUIRED, REGISTER_FAILED, REGISTER_SUCCEEDED, USERNAME_REQUIRED};
use crate::util::task::spawn_ui_task;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFieldErrors {
    pub email: Option<&'static str>,
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Build a register request, or report which fields are missing.
///
/// # Errors
///
/// Returns the per-field messages when any field is blank.
pub fn validate_register_input(
    email: &str,
    username: &str,
    password: &str,
) -> Result<RegisterRequest, RegisterFieldErrors> {
    let email = email.trim();
    let username = username.trim();
    let errors = RegisterFieldErrors {
        email: email.is_empty().then_some(EMAIL_REQUIRED),
        username: username.is_empty().then_some(USERNAME_REQUIRED),
        password: password.is_empty().then_some(PASSWORD_REQUIRED),
    };
    if errors != RegisterFieldErrors::default() {
        return Err(errors);
    }
    Ok(RegisterRequest { email: email.to_owned(), username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let flash = expect_context::<RwSignal<FlashState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(RegisterFieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request =
            match validate_register_input(&email.get_untracked(), &username.get_untracked(), &password.get_untracked()) {
                Ok(request) => {
                    errors.set(RegisterFieldErrors::default());
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
            let result = api::register(&client, &request).await;
            let _ = busy.try_set(false);
            match result {
                Ok(()) => {
                    log!("registered {}", request.username);
                    flash.update(|f| f.success(REGISTER_SUCCEEDED));
                    navigate(LOGIN_ROUTE, NavigateOptions::default());
                }
                Err(err) => {
                    warn!("register failed: {err}");
                    flash.update(|f| f.error(REGISTER_FAILED));
                }
            }
        });
    };

    let field_error = move |pick: fn(&RegisterFieldErrors) -> Option<&'static str>| {
        move || pick(&errors.get()).map(|msg| view! { <p class="auth-form__error">{msg}</p> })
    };

    view! {
        <div class="auth-page">
            <LoadingOverlay active=busy/>
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error(|e| e.email)}
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error(|e| e.username)}
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error(|e| e.password)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
