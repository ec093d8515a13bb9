//! Article Admin App
//!
//! Builds the services, follows `location.hash`, runs the session guard
//! and lays out sidebar + navbar + the routed view.

use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::{debug, error};

use admin_core::route::Route;
use admin_core::session::{authorize, GuardState, Session};
use admin_core::{AdminConfig, HttpApi};

use crate::browser::{self, LocalTokenStore};
use crate::components::{DialogHost, Navbar, NoticeModal, Sidebar};
use crate::context::{AppContext, Services};
use crate::store::{store_set_route, store_settle_guard, ShellState, ShellStateStoreFields};
use crate::views::{ArticleFormView, ArticlesView, CategoriesView, LoginView};

#[component]
pub fn App() -> impl IntoView {
    let config = AdminConfig::from_build_env();
    let session = Session::new(LocalTokenStore::new(config.token_key.clone()));
    let api = match HttpApi::new(&config, session.clone()) {
        Ok(api) => api,
        Err(e) => {
            error!("Cannot start the dashboard: {}", e);
            return view! { <div class="fatal-error">{e.to_string()}</div> }.into_any();
        }
    };

    let services = Services {
        config: Rc::new(config),
        session,
        api: Rc::new(api),
        dialogs: DialogHost::new(),
    };
    let shell = Store::new(ShellState::new(Route::parse(&browser::current_hash())));
    let ctx = AppContext::new(services, shell);
    provide_context(ctx);

    // Follow back/forward and typed URLs
    let _ = window_event_listener(ev::hashchange, move |_| {
        store_set_route(&shell, Route::parse(&browser::current_hash()));
    });

    // Session guard: check once per credential, bounce to login on failure
    let (checking, set_checking) = signal(false);
    Effect::new(move |_| {
        let route = shell.route().get();
        let guard = shell.guard().get();

        if !route.requires_session() {
            if guard == GuardState::Redirecting {
                ctx.set_guard(guard.reset());
            }
            return;
        }
        match guard {
            GuardState::Redirecting => ctx.navigate(Route::Login),
            GuardState::Unknown if !checking.get_untracked() => {
                set_checking.set(true);
                spawn_local(async move {
                    let api = ctx.api();
                    let admin_role = ctx.config().admin_role.clone();
                    let verdict = authorize(&ctx.session(), &*api, &admin_role).await;
                    debug!(verdict = ?verdict, "Guard settled");
                    store_settle_guard(&shell, verdict);
                    set_checking.set(false);
                });
            }
            _ => {}
        }
    });

    let authenticated = Memo::new(move |_| shell.guard().with(|g| g.profile().is_some()));
    let bare = Memo::new(move |_| shell.route().with(Route::hides_chrome));

    let routed_view = move || match shell.route().get() {
        Route::Login => view! { <LoginView /> }.into_any(),
        // nothing behind the guard renders until the profile check passes
        _ if !authenticated.get() => view! { <div class="loading">"Loading..."</div> }.into_any(),
        Route::Articles | Route::Unknown(_) => view! { <ArticlesView /> }.into_any(),
        Route::CreateArticle => view! { <ArticleFormView edit_id=None /> }.into_any(),
        Route::EditArticle(id) => view! { <ArticleFormView edit_id=Some(id) /> }.into_any(),
        Route::Categories => view! { <CategoriesView /> }.into_any(),
    };

    view! {
        {move || if bare.get() {
            view! { <main class="bare-layout">{routed_view}</main> }.into_any()
        } else {
            view! {
                <div class="app-layout">
                    <Sidebar />
                    <div class="main-column">
                        <Navbar />
                        <main class="main-content">{routed_view}</main>
                    </div>
                </div>
            }.into_any()
        }}
        <NoticeModal />
    }
    .into_any()
}
