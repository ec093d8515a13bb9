//! Category Select Component
//!
//! Category options are loaded once per view, capped at the configured
//! option limit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use admin_core::list_query::ListQuery;
use admin_core::Category;

use crate::context::AppContext;

/// Fetch the option list once and expose it as a signal
pub fn use_category_options() -> RwSignal<Vec<Category>> {
    let ctx = expect_context::<AppContext>();
    let options = RwSignal::new(Vec::new());
    let api = ctx.api();
    let limit = ctx.config().category_options_limit;

    spawn_local(async move {
        match api.list_categories(&ListQuery::default(), limit).await {
            Ok(page) => options.set(page.data),
            Err(e) => warn!("Failed to load category options: {}", e),
        }
    });
    options
}

/// `<select>` over the category options.
///
/// `placeholder` is the label of the empty value ("" = none chosen).
#[component]
pub fn CategorySelect(
    #[prop(into)] options: Signal<Vec<Category>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] placeholder: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            <For
                each=move || options.get()
                key=|c| c.id.clone()
                children=move |c| {
                    let id = c.id.clone();
                    let selected = move || value.get() == id;
                    view! {
                        <option value=c.id.clone() selected=selected>{c.name}</option>
                    }
                }
            />
        </select>
    }
}
