//! Thumbnail Picker Component
//!
//! File input with a local preview. Until a file is picked the stored
//! image (edit mode) is shown. When the owner drops the pick (reset,
//! delete, failed read) the preview URL is revoked and the file input is
//! emptied so the same file can be chosen again.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;
use web_sys::HtmlInputElement;

use admin_core::{Dialogs, ImageUpload, Notice};

use crate::browser;
use crate::context::AppContext;

#[component]
pub fn ThumbnailPicker(
    /// URL already stored on the article
    #[prop(into)]
    existing: Signal<Option<String>>,
    /// Whether the owner currently holds a picked file
    #[prop(into)]
    picked: Signal<bool>,
    #[prop(into)] on_pick: Callback<Option<ImageUpload>>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let input_ref = NodeRef::<Input>::new();
    let (local_preview, set_local_preview) = signal::<Option<String>>(None);

    let release_preview = move || {
        if let Some(url) = local_preview.get_untracked() {
            browser::revoke_object_url(&url);
        }
        set_local_preview.set(None);
    };

    let clear_input = move || {
        release_preview();
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    Effect::new(move |_| {
        if !picked.get() {
            clear_input();
        }
    });

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        release_preview();
        set_local_preview.set(browser::object_url(&file));
        spawn_local(async move {
            match browser::read_upload(&file).await {
                Ok(upload) => on_pick.run(Some(upload)),
                Err(e) => {
                    warn!("Failed to read {}: {}", file.name(), e);
                    clear_input();
                    on_pick.run(None);
                    ctx.dialogs().alert(Notice::error("Could not read the selected file")).await;
                }
            }
        });
    };

    let on_remove = move |_| {
        clear_input();
        on_pick.run(None);
    };

    on_cleanup(move || {
        if let Some(Some(url)) = local_preview.try_get_untracked() {
            browser::revoke_object_url(&url);
        }
    });

    let shown = move || local_preview.get().or_else(|| existing.get());

    view! {
        <div class="thumbnail-picker">
            {move || match shown() {
                Some(url) => view! {
                    <img class="thumbnail-preview" src=url alt="Thumbnail preview" />
                }.into_any(),
                None => view! {
                    <div class="thumbnail-empty">"Click to select files"</div>
                }.into_any(),
            }}
            <label class="thumbnail-input">
                <input
                    type="file"
                    accept="image/jpeg,image/png"
                    node_ref=input_ref
                    disabled=move || disabled.get()
                    on:change=on_change
                />
                <span>"Change"</span>
            </label>
            <Show when=move || local_preview.get().is_some() && !disabled.get()>
                <button type="button" class="btn-link btn-danger" on:click=on_remove>"Delete"</button>
            </Show>
        </div>
    }
}
