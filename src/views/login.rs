//! Login View
//!
//! Exchanges credentials for a token, then hands over to the guard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use admin_core::route::Route;
use admin_core::session::{sign_in, GuardState};
use admin_core::{Credentials, Dialogs, Notice};

use crate::context::AppContext;

const CREDENTIALS_REQUIRED: &str = "Username and password are required!";

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            let dialogs = ctx.dialogs();
            if credentials.username.trim().is_empty() || credentials.password.is_empty() {
                dialogs.alert(Notice::error(CREDENTIALS_REQUIRED)).await;
                return;
            }
            set_submitting.set(true);
            let api = ctx.api();
            let result = sign_in(&ctx.session(), &*api, &credentials).await;
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    set_password.set(String::new());
                    ctx.set_guard(GuardState::Unknown);
                    ctx.navigate(Route::Articles);
                }
                Err(e) => {
                    let notice = if e.is_unauthorized() {
                        Notice::error("Invalid username or password")
                    } else {
                        Notice::failure(&e, "Login failed")
                    };
                    dialogs.alert(notice.titled("Login failed")).await;
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <div class="login-brand">"Logoipsum"</div>
                <label class="field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        placeholder="Input username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        placeholder="Input password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
