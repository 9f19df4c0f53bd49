//! Form Actions
//!
//! Edit-form prefill and submit, shared by the three resource forms.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::context::use_admin_context;
use crate::forms::{load_record, submit_draft, Draft, SubmitOutcome, UploadGuard};
use crate::models::ResourceKind;
use crate::notify;

/// When editing, fetch the record and hand it to `on_loaded`.
pub fn prefill<M>(kind: ResourceKind, id: Option<i64>, on_loaded: impl FnOnce(M) + 'static)
where
    M: DeserializeOwned + 'static,
{
    let Some(id) = id else { return };
    let ctx = use_admin_context();
    spawn_local(async move {
        match load_record::<_, M>(&ctx.api(), kind, id).await {
            Ok(record) => on_loaded(record),
            Err(message) => notify::alert(&message),
        }
    });
}

/// Submit handler: validates, sends, then alerts and leaves for the list
/// on success.
pub fn submit_handler<D>(
    draft: RwSignal<D>,
    id: Option<i64>,
    uploads: RwSignal<UploadGuard>,
    submitting: RwSignal<bool>,
) -> impl Fn(web_sys::SubmitEvent) + Copy + 'static
where
    D: Draft + Clone + Send + Sync + 'static,
{
    let ctx = use_admin_context();
    move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let guard = uploads.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            let outcome = submit_draft(&ctx.api(), &current, id, guard).await;
            submitting.set(false);
            match outcome {
                SubmitOutcome::Saved { message, redirect } => {
                    notify::alert(&message);
                    notify::navigate(&redirect);
                }
                SubmitOutcome::Failed { message } => notify::alert(&message),
            }
        });
    }
}
