//! Article Form View
//!
//! Create and edit screens share one layout over `ArticleForm`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use admin_core::forms::{ArticleForm, FormMode, SubmitOutcome};
use admin_core::route::Route;
use admin_core::{Dialogs, ImageUpload};

use crate::browser;
use crate::components::{use_category_options, CategorySelect, RichTextEditor, ThumbnailPicker};
use crate::context::AppContext;

#[component]
pub fn ArticleFormView(
    /// `None` for the create screen
    edit_id: Option<String>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let categories = use_category_options();
    let form = RwSignal::new(ArticleForm::create());
    let (loading, set_loading) = signal(edit_id.is_some());

    if let Some(id) = edit_id {
        spawn_local(async move {
            let api = ctx.api();
            match ArticleForm::load(&*api, &id).await {
                Ok(loaded) => form.set(loaded),
                Err(e) => {
                    warn!(id = %id, "Edit target unavailable: {}", e);
                    form.set(ArticleForm::unavailable(&id));
                    ctx.dialogs().alert(e.notice("Failed to load article")).await;
                }
            }
            set_loading.set(false);
        });
    }

    let is_edit = move || form.with(|f| matches!(f.mode(), FormMode::Edit { .. }));
    let submitting = move || form.with(ArticleForm::is_submitting);
    let locked = Signal::derive(move || {
        loading.get() || form.with(|f| f.is_submitting() || !f.is_editable())
    });

    // The request works from a snapshot; only status and the created id are
    // written back to the form.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(begun) = form.try_update(ArticleForm::begin_submit) else {
            return;
        };
        let fallback = form.with_untracked(ArticleForm::failure_fallback);
        spawn_local(async move {
            let api = ctx.api();
            let dialogs = ctx.dialogs();
            let submission = match begun {
                Ok(submission) => submission,
                Err(e) => {
                    dialogs.alert(e.notice(fallback)).await;
                    return;
                }
            };
            let result = submission.send(&*api).await;
            form.update(|f| f.finish(&result));
            match result {
                Ok(outcome) => {
                    dialogs.alert(ArticleForm::success_notice(&outcome)).await;
                    if matches!(outcome, SubmitOutcome::Updated { .. }) {
                        ctx.navigate(Route::Articles);
                    }
                }
                Err(e) => dialogs.alert(e.notice(fallback)).await,
            }
        });
    };

    let on_reset = move |_| form.update(ArticleForm::reset);

    let on_preview = move |_| {
        if let Some(id) = form.with_untracked(|f| f.created_id().map(str::to_string)) {
            browser::open_in_new_tab(&ctx.config().preview_url(&id));
        }
    };

    let title = Signal::derive(move || form.with(|f| f.draft().title.clone()));
    let category = Signal::derive(move || form.with(|f| f.draft().category_id.clone()));
    let content = Signal::derive(move || form.with(|f| f.draft().content.clone()));
    let existing_image = Signal::derive(move || form.with(|f| f.draft().image_url.clone()));
    let picked = Signal::derive(move || form.with(|f| f.draft().thumbnail.is_some()));

    let on_category = Callback::new(move |id: String| form.update(|f| f.draft_mut().category_id = id));
    let on_content = Callback::new(move |markup: String| form.update(|f| f.draft_mut().content = markup));
    let on_thumbnail =
        Callback::new(move |upload: Option<ImageUpload>| form.update(|f| f.set_thumbnail(upload)));

    view! {
        <section class="panel article-form">
            <div class="panel-header">
                <button type="button" class="btn-link" on:click=move |_| ctx.navigate(Route::Articles)>
                    "← "
                    {move || if is_edit() { "Edit Articles" } else { "Create Articles" }}
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && !form.with(ArticleForm::is_editable)>
                <div class="empty">"Article not found"</div>
            </Show>

            <Show when=move || !loading.get() && form.with(ArticleForm::is_editable)>
                <form class="form-grid" on:submit=on_submit>
                    <div class="field">
                        <span>"Thumbnails"</span>
                        <ThumbnailPicker
                            existing=existing_image
                            picked=picked
                            on_pick=on_thumbnail
                            disabled=locked
                        />
                    </div>

                    <label class="field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            placeholder="Input title"
                            disabled=move || locked.get()
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                form.update(|f| f.draft_mut().title = text);
                            }
                        />
                    </label>

                    <label class="field">
                        <span>"Category"</span>
                        <CategorySelect
                            options=categories
                            value=category
                            on_change=on_category
                            placeholder="Select category"
                            disabled=locked
                        />
                    </label>

                    <div class="field">
                        <RichTextEditor value=content on_change=on_content disabled=locked />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| ctx.navigate(Route::Articles)>
                            "Cancel"
                        </button>
                        <Show when=move || !is_edit()>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                disabled=move || locked.get()
                                on:click=on_reset
                            >
                                "Reset"
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                disabled=move || form.with(|f| f.created_id().is_none())
                                on:click=on_preview
                            >
                                "Preview"
                            </button>
                        </Show>
                        <button type="submit" class="btn btn-primary" disabled=move || locked.get()>
                            {move || match (is_edit(), submitting()) {
                                (_, true) => "Saving...",
                                (true, false) => "Update",
                                (false, false) => "Upload",
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
