//! Category Modal Component
//!
//! Add/edit dialog over `CategoryForm`. Closing clears the draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use admin_core::forms::{CategoryForm, SAVE_FAILED};
use admin_core::Dialogs;

use crate::context::AppContext;

#[component]
pub fn CategoryModal(
    /// Open while `Some`
    form: RwSignal<Option<CategoryForm>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (saving, set_saving) = signal(false);

    let close = move || form.set(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mut draft) = form.get_untracked() else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            let api = ctx.api();
            let dialogs = ctx.dialogs();
            let result = draft.submit(&*api).await;
            set_saving.set(false);
            match result {
                Ok(notice) => {
                    form.set(None);
                    on_saved.run(());
                    dialogs.alert(notice).await;
                }
                Err(e) => dialogs.alert(e.notice(SAVE_FAILED)).await,
            }
        });
    };

    view! {
        <Show when=move || form.with(Option::is_some)>
            <div class="modal-backdrop">
                <form class="category-modal" on:submit=on_submit>
                    <h2>
                        {move || if form.with(|f| f.as_ref().is_some_and(CategoryForm::is_edit)) {
                            "Edit Category"
                        } else {
                            "Add Category"
                        }}
                    </h2>
                    <label class="field">
                        <span>"Category"</span>
                        <input
                            type="text"
                            placeholder="Input Category"
                            prop:value=move || form.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default())
                            on:input=move |ev| {
                                let name = event_target_value(&ev);
                                form.update(|f| {
                                    if let Some(f) = f {
                                        f.name = name;
                                    }
                                });
                            }
                        />
                    </label>
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if form.with(|f| f.as_ref().is_some_and(CategoryForm::is_edit)) {
                                "Save Changes"
                            } else {
                                "Add"
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
