//! Confirmed Actions
//!
//! Row deletes and logout both ask first through `Dialogs`. A declined
//! prompt is a no-op: no API call, no re-fetch.

use async_trait::async_trait;
use tracing::info;

use crate::api::{AdminApi, ListSource};
use crate::domain::ApiError;
use crate::list_query::ListQueryController;
use crate::notice::{Dialogs, Notice, NoticeKind};
use crate::session::{GuardState, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Article(String),
    Category(String),
}

impl DeleteTarget {
    fn noun(&self) -> &'static str {
        match self {
            DeleteTarget::Article(_) => "article",
            DeleteTarget::Category(_) => "category",
        }
    }

    fn confirmation(&self) -> Notice {
        Notice::confirmation(format!("This {} will be deleted!", self.noun()), "Yes, delete it!")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed(ApiError),
}

impl DeleteOutcome {
    /// Notice to show afterwards; nothing for a declined prompt
    pub fn notice(&self, target: &DeleteTarget) -> Option<Notice> {
        match self {
            DeleteOutcome::Declined => None,
            DeleteOutcome::Deleted => {
                let noun = target.noun();
                let mut capitalized = noun[..1].to_uppercase();
                capitalized.push_str(&noun[1..]);
                Some(Notice {
                    title: "Deleted!".to_string(),
                    text: format!("{} has been deleted.", capitalized),
                    kind: NoticeKind::Success,
                    confirm_label: None,
                })
            }
            DeleteOutcome::Failed(err) => {
                Some(Notice::failure(err, &format!("Failed to delete {}", target.noun())))
            }
        }
    }
}

/// Ask, then delete on acceptance
pub async fn delete_with_confirmation<A, D>(api: &A, dialogs: &D, target: &DeleteTarget) -> DeleteOutcome
where
    A: AdminApi + ?Sized,
    D: Dialogs + ?Sized,
{
    if !dialogs.confirm(target.confirmation()).await {
        return DeleteOutcome::Declined;
    }
    let result = match target {
        DeleteTarget::Article(id) => api.delete_article(id).await,
        DeleteTarget::Category(id) => api.delete_category(id).await,
    };
    match result {
        Ok(()) => {
            info!(item = ?target, "Deleted");
            DeleteOutcome::Deleted
        }
        Err(e) => DeleteOutcome::Failed(e),
    }
}

/// Re-fetches a list with its current query
#[async_trait(?Send)]
pub trait Refresh {
    async fn refresh(&mut self);
}

/// A controller paired with the source it fetches from
pub struct ListRefresh<'a, T, S: ?Sized> {
    list: &'a mut ListQueryController<T>,
    source: &'a S,
}

impl<'a, T, S: ?Sized> ListRefresh<'a, T, S> {
    pub fn new(list: &'a mut ListQueryController<T>, source: &'a S) -> Self {
        Self { list, source }
    }
}

#[async_trait(?Send)]
impl<'a, T, S> Refresh for ListRefresh<'a, T, S>
where
    S: ListSource<T> + ?Sized,
{
    async fn refresh(&mut self) {
        let request = self.list.invalidate();
        self.list.run(self.source, request).await;
    }
}

/// Confirmed delete, then re-fetch the list, then report
pub async fn delete_and_refresh<A, D, R>(
    api: &A,
    dialogs: &D,
    target: &DeleteTarget,
    list: &mut R,
) -> DeleteOutcome
where
    A: AdminApi + ?Sized,
    D: Dialogs + ?Sized,
    R: Refresh + ?Sized,
{
    let outcome = delete_with_confirmation(api, dialogs, target).await;
    if outcome == DeleteOutcome::Deleted {
        list.refresh().await;
    }
    if let Some(notice) = outcome.notice(target) {
        dialogs.alert(notice).await;
    }
    outcome
}

/// Ask, then drop the session; returns the next guard state
pub async fn confirm_logout<D: Dialogs + ?Sized>(
    dialogs: &D,
    session: &Session,
    guard: GuardState,
) -> GuardState {
    let notice = Notice::confirmation("You will be logged out.", "Yes, logout!");
    if dialogs.confirm(notice).await {
        guard.logout(session)
    } else {
        guard
    }
}
