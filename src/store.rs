//! Shell State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the sidebar
//! only tracks the route, the navbar only tracks the guard.

use leptos::prelude::*;
use reactive_stores::Store;

use admin_core::route::Route;
use admin_core::session::GuardState;

/// State shared by the layout chrome and every view
#[derive(Clone, Debug, Default, Store)]
pub struct ShellState {
    /// Parsed `location.hash`
    pub route: Route,
    /// Session guard verdict for the current credential
    pub guard: GuardState,
}

impl ShellState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            guard: GuardState::Unknown,
        }
    }
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the route, skipping the write when nothing changed
pub fn store_set_route(store: &ShellStore, route: Route) {
    if store.route().with_untracked(|current| *current != route) {
        store.route().set(route);
    }
}

/// Apply a guard verdict; only an undecided guard moves
pub fn store_settle_guard(store: &ShellStore, verdict: GuardState) {
    let current = store.guard().get_untracked();
    store.guard().set(current.settle(verdict));
}

/// Overwrite the guard (logout, login view reset)
pub fn store_set_guard(store: &ShellStore, next: GuardState) {
    if store.guard().with_untracked(|current| *current != next) {
        store.guard().set(next);
    }
}
