//! Page Form Component
//!
//! Create/edit form for static pages.

use leptos::prelude::*;

use crate::components::form_actions::{prefill, submit_handler};
use crate::components::ImageUploadField;
use crate::forms::{append_block, image_markdown, PageDraft, UploadGuard};
use crate::models::{Page, ResourceKind};
use crate::route::AdminRoute;
use crate::slug::SlugSync;

#[component]
pub fn PageForm(id: Option<i64>) -> impl IntoView {
    let kind = ResourceKind::Pages;
    let draft = RwSignal::new(PageDraft { sort_order: "0".to_string(), ..Default::default() });
    let slug_sync = StoredValue::new(SlugSync::default());
    let uploads = RwSignal::new(UploadGuard::default());
    let submitting = RwSignal::new(false);

    prefill(kind, id, move |page: Page| {
        slug_sync.set_value(SlugSync::from_existing(&page.slug));
        draft.set(PageDraft::from(page));
    });

    let on_submit = submit_handler(draft, id, uploads, submitting);

    let on_title = move |ev: web_sys::Event| {
        let title = event_target_value(&ev);
        draft.update(|d| {
            if let Some(slug) = slug_sync.try_update_value(|s| s.on_title_input(&title, &d.slug)).flatten() {
                d.slug = slug;
            }
            d.title = title;
        });
    };

    view! {
        <form class="resource-form" on:submit=on_submit>
            <h1>{if id.is_some() { "Edit Page" } else { "New Page" }}</h1>

            <div class="form-group">
                <label for="title">"Title"</label>
                <input id="title" type="text" prop:value=move || draft.with(|d| d.title.clone()) on:input=on_title />
            </div>
            <div class="form-group">
                <label for="slug">"Slug"</label>
                <input
                    id="slug"
                    type="text"
                    prop:value=move || draft.with(|d| d.slug.clone())
                    on:input=move |ev| draft.update(|d| d.slug = event_target_value(&ev))
                />
                <small>"Lowercase letters, numbers and hyphens only"</small>
            </div>
            <div class="form-group">
                <label for="content">"Content"</label>
                <textarea
                    id="content"
                    rows="20"
                    prop:value=move || draft.with(|d| d.content.clone())
                    on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                ></textarea>
            </div>
            <ImageUploadField
                label="Insert image"
                uploads=uploads
                on_uploaded=move |path: String| {
                    draft.update(|d| d.content = append_block(&d.content, &image_markdown(&path)))
                }
            />
            <div class="form-row">
                <div class="form-group checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.show_in_nav)
                            on:change=move |ev| draft.update(|d| d.show_in_nav = event_target_checked(&ev))
                        />
                        " Show in navigation"
                    </label>
                </div>
                <div class="form-group">
                    <label for="sort_order">"Sort order"</label>
                    <input
                        id="sort_order"
                        type="number"
                        prop:value=move || draft.with(|d| d.sort_order.clone())
                        on:input=move |ev| draft.update(|d| d.sort_order = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {if id.is_some() { "Update Page" } else { "Create Page" }}
                </button>
                <a class="btn" href=AdminRoute::List(kind).href()>"Cancel"</a>
            </div>
        </form>
    }
}
