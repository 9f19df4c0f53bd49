//! Template Editor Component
//!
//! File tree on the left, the open template on the right. Save status
//! disappears on its own after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FileTree;
use crate::context::use_admin_context;
use crate::store::{load_tree, save_file, TemplateEditorState, TemplateEditorStateStoreFields, TemplateStore};

#[component]
pub fn TemplateEditor() -> impl IntoView {
    let ctx = use_admin_context();
    let store: TemplateStore = TemplateStore::new(TemplateEditorState::new());
    provide_context(store);

    // Load tree on mount
    Effect::new(move |_| {
        spawn_local(async move {
            load_tree(&ctx.api(), &store).await;
        });
    });

    let editable = move || store.writable().get() && !store.loading().get();

    let on_save = move |_: web_sys::MouseEvent| {
        let delay = ctx.config().status_clear_ms;
        spawn_local(async move {
            let Some(ticket) = save_file(&ctx.api(), &store).await else {
                return;
            };
            TimeoutFuture::new(delay).await;
            store.update(|s| {
                s.clear_status(ticket);
            });
        });
    };

    view! {
        <div class="template-editor">
            <FileTree />
            <div class="editor-pane">
                <div class="editor-header">
                    <h2 id="editor-title">{move || store.with(|s| s.editor_title())}</h2>
                    <button
                        class="btn btn-primary"
                        disabled=move || !editable()
                        on:click=on_save
                    >
                        "Save"
                    </button>
                    {move || store.status().get().map(|status| {
                        let class = if status.is_error() { "save-status error" } else { "save-status success" };
                        view! { <span class=class>{status.message()}</span> }
                    })}
                </div>
                <textarea
                    id="file-content"
                    class="template-textarea"
                    spellcheck="false"
                    readonly=move || !editable()
                    prop:value=move || store.buffer().with(|b| b.content.clone())
                    on:input=move |ev| {
                        let content = event_target_value(&ev);
                        store.update(|s| s.set_content(content));
                    }
                ></textarea>
            </div>
        </div>
    }
}
