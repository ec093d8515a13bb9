//! Articles View
//!
//! Filterable, searchable, paginated article table with row actions.

use leptos::prelude::*;

use admin_core::actions::DeleteTarget;
use admin_core::route::Route;
use admin_core::text::format_created_at;
use admin_core::Article;

use crate::browser;
use crate::components::{use_category_options, CategorySelect, PaginationBar};
use crate::context::AppContext;
use crate::list::ListHandle;

#[component]
pub fn ArticlesView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let list = ListHandle::<Article>::new(ctx.config().page_size);
    let categories = use_category_options();

    list.refresh(ctx.api());

    let on_search = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        list.apply(ctx.api(), |c| c.set_search(text));
    };

    let on_filter = Callback::new(move |id: String| {
        let filter = (!id.is_empty()).then_some(id);
        list.apply(ctx.api(), |c| c.set_category_filter(filter));
    });

    let on_page = Callback::new(move |page: u32| {
        list.apply(ctx.api(), |c| c.set_page(page));
    });

    let on_delete = move |id: String| {
        list.delete(ctx.api(), ctx.dialogs(), DeleteTarget::Article(id));
    };

    let filter_value = Signal::derive(move || {
        list.state.with(|s| s.query.category_filter.clone().unwrap_or_default())
    });

    view! {
        <section class="panel">
            <div class="panel-header">
                {move || format!("Total Articles : {}", list.state.with(|s| s.result.total_count))}
            </div>

            <div class="panel-toolbar">
                <CategorySelect
                    options=categories
                    value=filter_value
                    on_change=on_filter
                    placeholder="Category"
                />
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by title"
                    prop:value=move || list.state.with(|s| s.query.search_text.clone())
                    on:input=on_search
                />
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| ctx.navigate(Route::CreateArticle)
                >
                    "+ Add Articles"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Thumbnails"</th>
                        <th>"Title"</th>
                        <th>"Category"</th>
                        <th>"Created at"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.state.with(|s| s.result.items.clone())
                        key=|a| a.id.clone()
                        children=move |article| {
                            let id = article.id.clone();
                            let edit_id = id.clone();
                            let preview_url = ctx.config().preview_url(&id);
                            view! {
                                <tr>
                                    <td>
                                        {match article.image_url.clone() {
                                            Some(url) => view! {
                                                <img class="thumb" src=url alt="Thumbnail" />
                                            }.into_any(),
                                            None => view! { <span class="muted">"No Image"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td>{article.title.clone()}</td>
                                    <td>{article.category_name().to_string()}</td>
                                    <td>{format_created_at(article.created_at.as_ref())}</td>
                                    <td class="row-actions">
                                        <button
                                            type="button"
                                            class="btn-link"
                                            on:click=move |_| browser::open_in_new_tab(&preview_url)
                                        >
                                            "Preview"
                                        </button>
                                        <button
                                            type="button"
                                            class="btn-link"
                                            on:click=move |_| ctx.navigate(Route::EditArticle(edit_id.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            type="button"
                                            class="btn-link btn-danger"
                                            on:click=move |_| on_delete(id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || list.state.with(|s| s.loading)>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=move || list.state.with(|s| !s.loading && s.result.items.is_empty())>
                <div class="empty">"No articles found"</div>
            </Show>

            <PaginationBar pagination=Signal::derive(move || list.pagination()) on_page=on_page />
        </section>
    }
}
