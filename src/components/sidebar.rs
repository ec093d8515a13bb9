//! Sidebar Component
//!
//! Section navigation with active highlighting and a confirmed logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use admin_core::actions::confirm_logout;
use admin_core::route::{Route, Section};
use admin_core::session::GuardState;

use crate::context::AppContext;
use crate::store::ShellStateStoreFields;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let section = move || ctx.shell.route().with(Route::section);

    let link_class = move |target: Section| {
        move || {
            if section() == Some(target) {
                "sidebar-link active"
            } else {
                "sidebar-link"
            }
        }
    };

    let on_logout = move |_| {
        spawn_local(async move {
            let dialogs = ctx.dialogs();
            let session = ctx.session();
            let guard = ctx.shell.guard().get_untracked();
            let next = confirm_logout(&dialogs, &session, guard).await;
            if next == GuardState::Redirecting {
                ctx.set_guard(next);
                ctx.navigate(Route::Login);
            }
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Logoipsum"</div>
            <nav class="sidebar-nav">
                <a
                    href=Route::Articles.to_hash()
                    class=link_class(Section::Articles)
                >
                    "Articles"
                </a>
                <a
                    href=Route::Categories.to_hash()
                    class=link_class(Section::Categories)
                >
                    "Category"
                </a>
                <button type="button" class="sidebar-link sidebar-logout" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </aside>
    }
}
