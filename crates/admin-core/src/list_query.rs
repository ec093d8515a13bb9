//! List-Query Controller
//!
//! Keeps a remote, filterable, paginated list consistent with three inputs:
//! free-text search, category filter and page number. Every input change
//! yields exactly one `FetchRequest` built from the *current* values of all
//! three; results are applied wholesale and only for the latest request.

use tracing::{debug, warn};

use crate::api::ListSource;
use crate::domain::{ApiResult, Page};

/// The inputs that drive a remote list fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    /// `None` means "all categories"
    pub category_filter: Option<String>,
    /// 1-based
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category_filter: None,
            page: 1,
        }
    }
}

/// The rendered page, replaced wholesale on every fetch
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub total_pages: u32,
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 1,
        }
    }
}

impl<T> From<Page<T>> for ListResult<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.data,
            total_count: page.total,
            total_pages: page.total_pages.max(1),
        }
    }
}

/// What happens to the page number when search or filter changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageReset {
    /// Go back to page 1, so a narrower filter never strands the view
    #[default]
    OnFilterChange,
    /// Keep the current page
    Never,
}

/// One fetch to run, tagged with the generation that issued it
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: ListQuery,
    pub limit: u32,
}

/// Outcome of handing a fetch result back to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Result replaced the list
    Applied,
    /// Fetch failed; the list was emptied
    Failed,
    /// A newer request was issued since; result dropped
    Stale,
    /// The page no longer exists; the page was clamped and this fetch follows
    Clamped(FetchRequest),
}

/// Enabled/disabled state of the pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    /// The "page + 1" shortcut button, shown only when there is a next page
    pub next_shortcut: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page,
            total_pages,
            previous_disabled: page <= 1,
            next_disabled: page >= total_pages,
            next_shortcut: (page < total_pages).then(|| page + 1),
        }
    }
}

/// Snapshot handed to subscribers
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub query: ListQuery,
    pub result: ListResult<T>,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn Fn(&ListState<T>)>;

pub struct ListQueryController<T> {
    state: ListState<T>,
    limit: u32,
    reset: PageReset,
    issued: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_listener: u64,
}

impl<T> ListQueryController<T> {
    pub fn new(limit: u32) -> Self {
        Self::with_reset(limit, PageReset::default())
    }

    pub fn with_reset(limit: u32, reset: PageReset) -> Self {
        Self {
            state: ListState {
                query: ListQuery::default(),
                result: ListResult::default(),
                loading: false,
            },
            limit: limit.max(1),
            reset,
            issued: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn query(&self) -> &ListQuery {
        &self.state.query
    }

    pub fn result(&self) -> &ListResult<T> {
        &self.state.result
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.state.query.page, self.state.result.total_pages)
    }

    // ========================
    // Inputs
    // ========================

    pub fn set_search(&mut self, text: impl Into<String>) -> Option<FetchRequest> {
        let text = text.into();
        if text == self.state.query.search_text {
            return None;
        }
        self.state.query.search_text = text;
        self.reset_page();
        Some(self.issue())
    }

    /// `None` or an empty id clears the filter
    pub fn set_category_filter(&mut self, category_id: Option<String>) -> Option<FetchRequest> {
        let category_id = category_id.filter(|id| !id.is_empty());
        if category_id == self.state.query.category_filter {
            return None;
        }
        self.state.query.category_filter = category_id;
        self.reset_page();
        Some(self.issue())
    }

    /// Pages below 1 are raised to 1
    pub fn set_page(&mut self, page: u32) -> Option<FetchRequest> {
        let page = page.max(1);
        if page == self.state.query.page {
            return None;
        }
        self.state.query.page = page;
        Some(self.issue())
    }

    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        self.set_page(self.state.query.page.saturating_sub(1).max(1))
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        let last = self.state.result.total_pages;
        self.set_page(self.state.query.page.saturating_add(1).min(last))
    }

    /// Re-fetch the unchanged query, e.g. after a mutation
    pub fn invalidate(&mut self) -> FetchRequest {
        self.issue()
    }

    // ========================
    // Results
    // ========================

    pub fn complete(&mut self, request: &FetchRequest, outcome: ApiResult<Page<T>>) -> Completion {
        if request.generation != self.issued {
            debug!(
                generation = request.generation,
                latest = self.issued,
                "Dropping stale list response"
            );
            return Completion::Stale;
        }

        let completion = match outcome {
            Ok(page) => {
                let result = ListResult::from(page);
                let clamp = (self.state.query.page > result.total_pages).then_some(result.total_pages);
                self.state.result = result;
                match clamp {
                    Some(last) => {
                        debug!(page = self.state.query.page, last, "Page out of range, clamping");
                        self.state.query.page = last;
                        Completion::Clamped(self.next_request())
                    }
                    None => Completion::Applied,
                }
            }
            Err(e) => {
                warn!("List fetch failed: {}", e);
                self.state.result = ListResult::default();
                Completion::Failed
            }
        };

        self.state.loading = matches!(completion, Completion::Clamped(_));
        self.notify();
        completion
    }

    /// Run a request and any clamp follow-ups to completion
    pub async fn run<S>(&mut self, source: &S, request: FetchRequest) -> Completion
    where
        S: ListSource<T> + ?Sized,
    {
        let mut request = request;
        loop {
            let outcome = fetch_page(source, &request).await;
            match self.complete(&request, outcome) {
                Completion::Clamped(follow_up) => request = follow_up,
                done => return done,
            }
        }
    }

    // ========================
    // Subscriptions
    // ========================

    pub fn subscribe(&mut self, listener: impl Fn(&ListState<T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn reset_page(&mut self) {
        if self.reset == PageReset::OnFilterChange {
            self.state.query.page = 1;
        }
    }

    fn issue(&mut self) -> FetchRequest {
        let request = self.next_request();
        self.state.loading = true;
        self.notify();
        request
    }

    fn next_request(&mut self) -> FetchRequest {
        self.issued += 1;
        FetchRequest {
            generation: self.issued,
            query: self.state.query.clone(),
            limit: self.limit,
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}

/// Execute one request against a list source
pub async fn fetch_page<T, S>(source: &S, request: &FetchRequest) -> ApiResult<Page<T>>
where
    S: ListSource<T> + ?Sized,
{
    debug!(
        generation = request.generation,
        page = request.query.page,
        search = %request.query.search_text,
        category = ?request.query.category_filter,
        "Fetching list page"
    );
    source.fetch_page(&request.query, request.limit).await
}
