//! Application Context
//!
//! Shared services provided via Leptos Context API. The services hold `Rc`s,
//! so they live in a thread-local `StoredValue`.

use std::rc::Rc;

use leptos::prelude::*;

use admin_core::route::Route;
use admin_core::session::{GuardState, Session};
use admin_core::{AdminApi, AdminConfig};

use crate::browser;
use crate::components::DialogHost;
use crate::store::{store_set_guard, store_set_route, ShellStateStoreFields, ShellStore};

/// Everything built once at startup
#[derive(Clone)]
pub struct Services {
    pub config: Rc<AdminConfig>,
    pub session: Session,
    pub api: Rc<dyn AdminApi>,
    pub dialogs: DialogHost,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services, LocalStorage>,
    /// Route and guard state
    pub shell: ShellStore,
}

impl AppContext {
    pub fn new(services: Services, shell: ShellStore) -> Self {
        Self {
            services: StoredValue::new_local(services),
            shell,
        }
    }

    pub fn api(&self) -> Rc<dyn AdminApi> {
        self.services.with_value(|s| Rc::clone(&s.api))
    }

    pub fn session(&self) -> Session {
        self.services.with_value(|s| s.session.clone())
    }

    pub fn dialogs(&self) -> DialogHost {
        self.services.with_value(|s| s.dialogs.clone())
    }

    pub fn config(&self) -> Rc<AdminConfig> {
        self.services.with_value(|s| Rc::clone(&s.config))
    }

    /// Reactive current route
    pub fn route(&self) -> Route {
        self.shell.route().get()
    }

    /// Switch views and keep `location.hash` in step
    pub fn navigate(&self, route: Route) {
        browser::set_hash(&route.to_hash());
        store_set_route(&self.shell, route);
    }

    pub fn set_guard(&self, guard: GuardState) {
        store_set_guard(&self.shell, guard);
    }
}
