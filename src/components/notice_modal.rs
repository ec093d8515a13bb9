//! Notice Modal Component
//!
//! In-app modal host. `DialogHost` implements `Dialogs` for the core
//! controllers; `NoticeModal` renders whatever notice is pending and
//! resolves the waiting future when dismissed.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;

use admin_core::{Dialogs, Notice, NoticeKind};

use crate::context::AppContext;

/// One modal at a time; a newer notice answers the older one with "no"
#[derive(Clone)]
pub struct DialogHost {
    current: RwSignal<Option<Notice>>,
    reply: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
}

impl DialogHost {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            reply: Rc::new(RefCell::new(None)),
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    /// Close the modal with the user's answer
    pub fn answer(&self, confirmed: bool) {
        self.current.set(None);
        let pending = self.reply.borrow_mut().take();
        if let Some(tx) = pending {
            let _ = tx.send(confirmed);
        }
    }

    async fn show(&self, notice: Notice) -> bool {
        let (tx, rx) = oneshot::channel();
        let previous = self.reply.borrow_mut().replace(tx);
        if let Some(previous) = previous {
            let _ = previous.send(false);
        }
        self.current.set(Some(notice));
        rx.await.unwrap_or(false)
    }
}

#[async_trait(?Send)]
impl Dialogs for DialogHost {
    async fn alert(&self, notice: Notice) {
        self.show(notice).await;
    }

    async fn confirm(&self, notice: Notice) -> bool {
        self.show(notice).await
    }
}

fn icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✕",
        NoticeKind::Warning => "!",
    }
}

#[component]
pub fn NoticeModal() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        {move || ctx.dialogs().current().map(|notice| {
            let kind = notice.kind;
            view! {
                <div class="modal-backdrop">
                    <div class=format!("notice-modal notice-{}", kind.as_str()) role="dialog">
                        <div class="notice-icon">{icon(kind)}</div>
                        <h2 class="notice-title">{notice.title}</h2>
                        <p class="notice-text">{notice.text}</p>
                        <div class="notice-actions">
                            {match notice.confirm_label {
                                Some(label) => view! {
                                    <button class="btn btn-danger" on:click=move |_| ctx.dialogs().answer(true)>
                                        {label}
                                    </button>
                                    <button class="btn btn-secondary" on:click=move |_| ctx.dialogs().answer(false)>
                                        "Cancel"
                                    </button>
                                }.into_any(),
                                None => view! {
                                    <button class="btn btn-primary" on:click=move |_| ctx.dialogs().answer(true)>
                                        "OK"
                                    </button>
                                }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
