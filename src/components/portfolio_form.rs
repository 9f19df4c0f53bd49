//! Portfolio Form Component
//!
//! Create/edit form for portfolio items, with a showcase image that is
//! uploaded first and then referenced by path.

use leptos::prelude::*;

use crate::components::form_actions::{prefill, submit_handler};
use crate::components::ImageUploadField;
use crate::forms::{PortfolioDraft, UploadGuard};
use crate::models::{PortfolioItem, ResourceKind};
use crate::route::AdminRoute;

#[component]
pub fn PortfolioForm(id: Option<i64>) -> impl IntoView {
    let kind = ResourceKind::Portfolio;
    let draft = RwSignal::new(PortfolioDraft { sort_order: "0".to_string(), ..Default::default() });
    let uploads = RwSignal::new(UploadGuard::default());
    let submitting = RwSignal::new(false);

    prefill(kind, id, move |item: PortfolioItem| draft.set(PortfolioDraft::from(item)));

    let on_submit = submit_handler(draft, id, uploads, submitting);
    let preview = move || draft.with(|d| d.showcase_image.trim().to_string());

    view! {
        <form class="resource-form" on:submit=on_submit>
            <h1>{if id.is_some() { "Edit Portfolio Item" } else { "New Portfolio Item" }}</h1>

            <div class="form-group">
                <label for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="short_description">"Short description"</label>
                <textarea
                    id="short_description"
                    rows="4"
                    prop:value=move || draft.with(|d| d.short_description.clone())
                    on:input=move |ev| draft.update(|d| d.short_description = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group">
                <label for="project_url">"Project URL"</label>
                <input
                    id="project_url"
                    type="url"
                    placeholder="https://"
                    prop:value=move || draft.with(|d| d.project_url.clone())
                    on:input=move |ev| draft.update(|d| d.project_url = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="github_url">"GitHub URL"</label>
                <input
                    id="github_url"
                    type="url"
                    placeholder="https://github.com/"
                    prop:value=move || draft.with(|d| d.github_url.clone())
                    on:input=move |ev| draft.update(|d| d.github_url = event_target_value(&ev))
                />
            </div>

            <ImageUploadField
                label="Showcase image"
                uploads=uploads
                on_uploaded=move |path: String| draft.update(|d| d.showcase_image = path)
            />
            <div class="form-group">
                <label for="showcase_image">"Image URL"</label>
                <input
                    id="showcase_image"
                    type="text"
                    prop:value=move || draft.with(|d| d.showcase_image.clone())
                    on:input=move |ev| draft.update(|d| d.showcase_image = event_target_value(&ev))
                />
            </div>
            <Show when=move || !preview().is_empty()>
                <div class="image-preview">
                    <img src=preview alt="Showcase preview" />
                </div>
            </Show>

            <div class="form-group">
                <label for="sort_order">"Sort order"</label>
                <input
                    id="sort_order"
                    type="number"
                    prop:value=move || draft.with(|d| d.sort_order.clone())
                    on:input=move |ev| draft.update(|d| d.sort_order = event_target_value(&ev))
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {if id.is_some() { "Update Portfolio Item" } else { "Create Portfolio Item" }}
                </button>
                <a class="btn" href=AdminRoute::List(kind).href()>"Cancel"</a>
            </div>
        </form>
    }
}
