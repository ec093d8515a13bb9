//! Rich Text Editor Component
//!
//! Markup source with a formatting toolbar and a rendered preview.
//! Contract: `(value, on_change)`; the editor never owns the content.

use leptos::html::Textarea;
use leptos::prelude::*;

use admin_core::markdown::markdown_to_html;
use admin_core::text::{wrap_selection, word_count};

/// Toolbar entries: (label, title, open tag, close tag)
const TOOLBAR: &[(&str, &str, &str, &str)] = &[
    ("B", "Bold", "<strong>", "</strong>"),
    ("I", "Italic", "<em>", "</em>"),
    ("U", "Underline", "<u>", "</u>"),
    ("H2", "Heading", "<h2>", "</h2>"),
    ("¶", "Paragraph", "<p>", "</p>"),
    ("❝", "Quote", "<blockquote>", "</blockquote>"),
    ("• List", "Bulleted list", "<ul>\n<li>", "</li>\n</ul>"),
    ("</>", "Code", "<pre><code>", "</code></pre>"),
];

#[component]
pub fn RichTextEditor(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    let textarea_ref = NodeRef::<Textarea>::new();
    let (show_preview, set_show_preview) = signal(false);

    let apply_format = move |open: &'static str, close: &'static str| {
        if disabled.get_untracked() {
            return;
        }
        let Some(textarea) = textarea_ref.get_untracked() else {
            return;
        };
        let text = value.get_untracked();
        let start = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
        let (next, sel_start, sel_end) = wrap_selection(&text, start, end, open, close);
        on_change.run(next.clone());
        // keep the DOM in step before restoring the selection
        textarea.set_value(&next);
        let _ = textarea.set_selection_range(sel_start as u32, sel_end as u32);
        let _ = textarea.focus();
    };

    let convert_markdown = move |_| {
        if disabled.get_untracked() {
            return;
        }
        let html = markdown_to_html(&value.get_untracked());
        on_change.run(html);
    };

    let words = move || word_count(&value.get());

    view! {
        <div class="rich-text-editor">
            <div class="editor-toolbar">
                {TOOLBAR.iter().map(|&(label, title, open, close)| view! {
                    <button
                        type="button"
                        class="toolbar-btn"
                        title=title
                        disabled=move || disabled.get()
                        on:click=move |_| apply_format(open, close)
                    >
                        {label}
                    </button>
                }).collect_view()}
                <span class="toolbar-sep"></span>
                <button
                    type="button"
                    class="toolbar-btn"
                    title="Convert Markdown to HTML"
                    disabled=move || disabled.get()
                    on:click=convert_markdown
                >
                    "MD → HTML"
                </button>
                <button
                    type="button"
                    class=move || if show_preview.get() { "toolbar-btn active" } else { "toolbar-btn" }
                    on:click=move |_| set_show_preview.update(|v| *v = !*v)
                >
                    {move || if show_preview.get() { "Edit" } else { "Preview" }}
                </button>
            </div>

            <Show
                when=move || show_preview.get()
                fallback=move || view! {
                    <textarea
                        class="editor-textarea"
                        node_ref=textarea_ref
                        placeholder="Type a content..."
                        disabled=move || disabled.get()
                        prop:value=move || value.get()
                        on:input=move |ev| on_change.run(event_target_value(&ev))
                    ></textarea>
                }
            >
                <div class="editor-preview" inner_html=move || value.get()></div>
            </Show>

            <div class="editor-footer">{move || format!("{} Words", words())}</div>
        </div>
    }
}
