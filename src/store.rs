//! Template Editor State Store
//!
//! Uses Leptos reactive_stores so the tree, the editor buffer and the
//! save status re-render independently.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, warn};

use crate::commands::AdminApi;
use crate::error::ApiResult;
use crate::models::FileTreeNode;
use crate::slot::StateSlot;
use crate::tree::{flatten_tree, is_dir_path, TreeRow};

pub const LOAD_TREE_ERROR: &str = "Error loading file tree.";
pub const LOAD_CONTENT_ERROR: &str = "Error loading file content.";

/// The single open file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    pub path: Option<String>,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed,
}

impl SaveStatus {
    pub fn message(self) -> &'static str {
        match self {
            SaveStatus::Saved => "File saved successfully!",
            SaveStatus::Failed => "Error saving file.",
        }
    }

    pub fn is_error(self) -> bool {
        self == SaveStatus::Failed
    }
}

/// Body of a save request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRequest {
    pub path: String,
    pub content: String,
}

/// Handed out with each status; only the newest one may clear it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusTicket(u64);

/// Template editor state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TemplateEditorState {
    /// Last directory listing, replaced wholesale on each load
    pub tree: Vec<FileTreeNode>,
    /// Paths of expanded directories
    pub expanded: HashSet<String>,
    pub tree_error: Option<String>,
    pub buffer: EditorBuffer,
    /// Editor accepts input (a file is open)
    pub writable: bool,
    /// Content of the open file has not arrived yet
    pub loading: bool,
    pub status: Option<SaveStatus>,
    pub status_generation: u64,
}

impl TemplateEditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<TreeRow> {
        flatten_tree(&self.tree, &self.expanded)
    }

    pub fn editor_title(&self) -> String {
        match &self.buffer.path {
            Some(path) => format!("Editing: {}", path),
            None => "Select a file to edit".to_string(),
        }
    }

    /// Discard the old tree and start over with every directory collapsed.
    pub fn replace_tree(&mut self, result: ApiResult<Vec<FileTreeNode>>) {
        self.expanded.clear();
        match result {
            Ok(nodes) => {
                debug!(roots = nodes.len(), "template tree loaded");
                self.tree = nodes;
                self.tree_error = None;
            }
            Err(e) => {
                warn!(error = %e, "template tree failed");
                self.tree.clear();
                self.tree_error = Some(LOAD_TREE_ERROR.to_string());
            }
        }
    }

    /// Flip a directory between collapsed and expanded. Returns the new
    /// state; files and unknown paths are left alone.
    pub fn toggle_dir(&mut self, path: &str) -> bool {
        if !is_dir_path(&self.tree, path) {
            return false;
        }
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_string());
            true
        }
    }

    /// Open `path`. Unsaved edits to the previous file are dropped.
    pub fn begin_select(&mut self, path: &str) {
        self.buffer.path = Some(path.to_string());
        self.buffer.content.clear();
        self.writable = true;
        self.loading = true;
    }

    /// Apply fetched content. Ignored if another file was opened meanwhile.
    pub fn finish_select(&mut self, path: &str, result: ApiResult<String>) -> bool {
        if self.buffer.path.as_deref() != Some(path) {
            return false;
        }
        self.loading = false;
        self.buffer.content = match result {
            Ok(content) => content,
            Err(e) => {
                warn!(%path, error = %e, "template content failed");
                LOAD_CONTENT_ERROR.to_string()
            }
        };
        true
    }

    pub fn set_content(&mut self, content: String) {
        self.buffer.content = content;
    }

    /// `None` when no file is open or its content is still loading.
    pub fn begin_save(&self) -> Option<SaveRequest> {
        if self.loading {
            return None;
        }
        let path = self.buffer.path.clone()?;
        Some(SaveRequest { path, content: self.buffer.content.clone() })
    }

    pub fn finish_save(&mut self, result: ApiResult<()>) -> StatusTicket {
        self.status = Some(match result {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                warn!(error = %e, "template save failed");
                SaveStatus::Failed
            }
        });
        self.status_generation += 1;
        StatusTicket(self.status_generation)
    }

    /// Clear the status, unless a newer save replaced it.
    pub fn clear_status(&mut self, ticket: StatusTicket) -> bool {
        if ticket.0 != self.status_generation {
            return false;
        }
        self.status = None;
        true
    }
}

/// Fetch the directory listing and rebuild the tree.
pub async fn load_tree<A, S>(api: &A, slot: &S)
where
    A: AdminApi + ?Sized,
    S: StateSlot<TemplateEditorState>,
{
    let result = api.template_tree().await;
    slot.with_mut(|state| state.replace_tree(result));
}

/// Open `path` and pull its content into the editor buffer.
pub async fn select_file<A, S>(api: &A, slot: &S, path: &str)
where
    A: AdminApi + ?Sized,
    S: StateSlot<TemplateEditorState>,
{
    if slot.with_mut(|state| state.begin_select(path)).is_none() {
        return;
    }
    let result = api.template_content(path).await;
    slot.with_mut(|state| state.finish_select(path, result));
}

/// Save the open file. `None` (and no request) when nothing is open.
pub async fn save_file<A, S>(api: &A, slot: &S) -> Option<StatusTicket>
where
    A: AdminApi + ?Sized,
    S: StateSlot<TemplateEditorState>,
{
    let request = slot.peek(|state| state.begin_save()).flatten()?;
    let result = api.save_template(&request.path, &request.content).await;
    slot.with_mut(|state| state.finish_save(result))
}

/// Type alias for the store
pub type TemplateStore = Store<TemplateEditorState>;

/// Get the template store from context
pub fn use_template_store() -> TemplateStore {
    expect_context::<TemplateStore>()
}
