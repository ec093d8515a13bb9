//! Categories View
//!
//! Searchable, paginated category table with the add/edit modal.

use leptos::prelude::*;

use admin_core::actions::DeleteTarget;
use admin_core::forms::CategoryForm;
use admin_core::text::format_created_at;
use admin_core::Category;

use crate::components::{CategoryModal, PaginationBar};
use crate::context::AppContext;
use crate::list::ListHandle;

#[component]
pub fn CategoriesView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let list = ListHandle::<Category>::new(ctx.config().page_size);
    let editing = RwSignal::new(None::<CategoryForm>);

    list.refresh(ctx.api());

    let on_search = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        list.apply(ctx.api(), |c| c.set_search(text));
    };

    let on_page = Callback::new(move |page: u32| {
        list.apply(ctx.api(), |c| c.set_page(page));
    });

    let on_saved = Callback::new(move |_: ()| list.refresh(ctx.api()));

    let on_delete = move |id: String| {
        list.delete(ctx.api(), ctx.dialogs(), DeleteTarget::Category(id));
    };

    view! {
        <section class="panel">
            <div class="panel-header">
                {move || format!("Total Category : {}", list.state.with(|s| s.result.total_count))}
            </div>

            <div class="panel-toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search Category"
                    prop:value=move || list.state.with(|s| s.query.search_text.clone())
                    on:input=on_search
                />
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| editing.set(Some(CategoryForm::create()))
                >
                    "+ Add Category"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Created at"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.state.with(|s| s.result.items.clone())
                        key=|c| c.id.clone()
                        children=move |category| {
                            let id = category.id.clone();
                            let edit_id = id.clone();
                            let name = category.name.clone();
                            view! {
                                <tr>
                                    <td>{category.name.clone()}</td>
                                    <td>{format_created_at(category.created_at.as_ref())}</td>
                                    <td class="row-actions">
                                        <button
                                            type="button"
                                            class="btn-link"
                                            on:click=move |_| {
                                                editing.set(Some(CategoryForm::edit(edit_id.clone(), name.clone())))
                                            }
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
                <div class="empty">"No categories found"</div>
            </Show>

            <PaginationBar pagination=Signal::derive(move || list.pagination()) on_page=on_page />

            <CategoryModal form=editing on_saved=on_saved />
        </section>
    }
}
