//! Session Layer
//!
//! The bearer token is owned by an explicit `Session` built once at startup
//! and handed to everything that makes authenticated calls.

mod guard;
mod store;

pub use guard::{authorize, sign_in, GuardState};
pub use store::{MemoryTokenStore, TokenStore};

use std::rc::Rc;

/// Shared handle to the persisted credential
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Current token; blank tokens count as absent
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.trim().is_empty())
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        self.store.save(token);
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}
