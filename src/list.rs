//! Reactive List Binding
//!
//! Bridges `ListQueryController` to Leptos: the controller's subscription
//! mirrors every state change into a signal, and fetches run on
//! `spawn_local` between `issue` and `complete`. Row deletes go through
//! `ListHandle::delete` so every table confirms, deletes, re-fetches and
//! reports the same way.

use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use admin_core::actions::{delete_and_refresh, DeleteTarget, Refresh};
use admin_core::api::ListSource;
use admin_core::list_query::{
    fetch_page, Completion, FetchRequest, ListQueryController, ListState, Pagination,
};
use admin_core::AdminApi;

use crate::components::DialogHost;

pub struct ListHandle<T: Send + Sync + 'static> {
    controller: StoredValue<ListQueryController<T>, LocalStorage>,
    /// Latest controller snapshot
    pub state: RwSignal<ListState<T>>,
}

impl<T: Send + Sync + 'static> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListHandle<T> {}

impl<T> ListHandle<T>
where
    T: Clone + Send + Sync + 'static,
    dyn AdminApi: ListSource<T>,
{
    pub fn new(limit: u32) -> Self {
        let mut controller = ListQueryController::new(limit);
        let state = RwSignal::new(controller.state().clone());
        controller.subscribe(move |snapshot: &ListState<T>| state.set(snapshot.clone()));
        Self {
            controller: StoredValue::new_local(controller),
            state,
        }
    }

    /// Reactive pagination affordances
    pub fn pagination(&self) -> Pagination {
        self.state
            .with(|s| Pagination::new(s.query.page, s.result.total_pages))
    }

    /// Change the query through `change`, then fetch if it asked for one
    pub fn apply(
        &self,
        api: Rc<dyn AdminApi>,
        change: impl FnOnce(&mut ListQueryController<T>) -> Option<FetchRequest>,
    ) {
        if let Some(request) = self.controller.try_update_value(change).flatten() {
            self.spawn_fetch(api, request);
        }
    }

    /// Re-fetch with the unchanged query
    pub fn refresh(&self, api: Rc<dyn AdminApi>) {
        if let Some(request) = self.controller.try_update_value(|c| c.invalidate()) {
            self.spawn_fetch(api, request);
        }
    }

    /// `refresh`, resolving once the re-fetch has landed
    pub async fn reload(self, api: Rc<dyn AdminApi>) {
        if let Some(request) = self.controller.try_update_value(|c| c.invalidate()) {
            self.drive(api, request).await;
        }
    }

    /// Confirm, delete, re-fetch on success, then report
    pub fn delete(&self, api: Rc<dyn AdminApi>, dialogs: DialogHost, target: DeleteTarget) {
        let mut reload = Reload { handle: *self, api: Rc::clone(&api) };
        spawn_local(async move {
            delete_and_refresh(&*api, &dialogs, &target, &mut reload).await;
        });
    }

    fn spawn_fetch(&self, api: Rc<dyn AdminApi>, request: FetchRequest) {
        spawn_local(self.drive(api, request));
    }

    async fn drive(self, api: Rc<dyn AdminApi>, request: FetchRequest) {
        let mut request = request;
        loop {
            let outcome = fetch_page(&*api, &request).await;
            match self.controller.try_update_value(|c| c.complete(&request, outcome)) {
                Some(Completion::Clamped(follow_up)) => request = follow_up,
                Some(_) => break,
                None => {
                    debug!("List view disposed before fetch completed");
                    break;
                }
            }
        }
    }
}

struct Reload<T: Send + Sync + 'static> {
    handle: ListHandle<T>,
    api: Rc<dyn AdminApi>,
}

#[async_trait(?Send)]
impl<T> Refresh for Reload<T>
where
    T: Clone + Send + Sync + 'static,
    dyn AdminApi: ListSource<T>,
{
    async fn refresh(&mut self) {
        self.handle.reload(Rc::clone(&self.api)).await;
    }
}
