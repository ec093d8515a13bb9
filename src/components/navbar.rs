//! Navbar Component
//!
//! Page heading plus the signed-in user's avatar initial and name.

use leptos::prelude::*;

use admin_core::route::Route;

use crate::context::AppContext;
use crate::store::ShellStateStoreFields;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let title = move || ctx.shell.route().with(Route::title);
    let profile = move || ctx.shell.guard().with(|g| g.profile().cloned());

    view! {
        <header class="navbar">
            <h1 class="navbar-title">{title}</h1>
            {move || profile().map(|p| view! {
                <div class="navbar-user">
                    <span class="avatar">{p.initial()}</span>
                    <span class="username">{p.username}</span>
                </div>
            })}
        </header>
    }
}
