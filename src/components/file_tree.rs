//! File Tree Component
//!
//! Collapsible template directory listing. Directories toggle locally;
//! clicking a file opens it in the editor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_admin_context;
use crate::models::NodeKind;
use crate::store::{select_file, use_template_store, TemplateEditorStateStoreFields};
use crate::tree::TreeRow;

#[component]
pub fn FileTree() -> impl IntoView {
    let store = use_template_store();

    view! {
        <div class="file-tree-container">
            <div class="tree-header">
                <h3>"Templates"</h3>
            </div>
            <div class="tree-content">
                {move || store.tree_error().get().map(|msg| view! { <p class="tree-error">{msg}</p> })}
                <For
                    each=move || store.with(|s| s.rows())
                    key=|row| (row.path.clone(), row.expanded)
                    children=move |row| view! { <FileTreeRow row=row /> }
                />
            </div>
        </div>
    }
}

#[component]
fn FileTreeRow(row: TreeRow) -> impl IntoView {
    let ctx = use_admin_context();
    let store = use_template_store();
    let indent = row.depth * 16;
    let is_dir = row.kind == NodeKind::Dir;
    let path = row.path.clone();

    let on_click = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        if is_dir {
            store.update(|s| {
                s.toggle_dir(&path);
            });
        } else {
            let path = path.clone();
            spawn_local(async move {
                select_file(&ctx.api(), &store, &path).await;
            });
        }
    };

    let is_current = {
        let path = row.path.clone();
        move || store.buffer().with(|b| b.path.as_deref() == Some(path.as_str()))
    };

    let name_class = if row.editable { "file-tree-name editable" } else { "file-tree-name" };

    view! {
        <div
            class=move || if is_current() { "file-tree-item selected" } else { "file-tree-item" }
            style=format!("padding-left: {}px;", indent)
            on:click=on_click
        >
            <span class="file-tree-toggle">
                {if !is_dir { "" } else if row.expanded { "▼" } else { "▶" }}
            </span>
            <span class="file-tree-icon">{if is_dir { "📁" } else { "📄" }}</span>
            <span class=name_class data-path=row.path.clone()>{row.name}</span>
        </div>
    }
}
