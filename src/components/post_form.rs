//! Post Form Component
//!
//! Create/edit form for blog posts.

use leptos::prelude::*;

use crate::components::form_actions::{prefill, submit_handler};
use crate::components::ImageUploadField;
use crate::forms::{append_block, image_markdown, publish_date_label, PostDraft, UploadGuard};
use crate::models::{Post, ResourceKind};
use crate::route::AdminRoute;
use crate::slug::SlugSync;

#[component]
pub fn PostForm(id: Option<i64>) -> impl IntoView {
    let kind = ResourceKind::Posts;
    let draft = RwSignal::new(PostDraft::default());
    let slug_sync = StoredValue::new(SlugSync::default());
    let uploads = RwSignal::new(UploadGuard::default());
    let submitting = RwSignal::new(false);
    let publish_date = RwSignal::new(String::new());

    prefill(kind, id, move |post: Post| {
        slug_sync.set_value(SlugSync::from_existing(&post.slug));
        publish_date.set(publish_date_label(post.created_at.as_deref()));
        draft.set(PostDraft::from(post));
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
            <h1>{if id.is_some() { "Edit Post" } else { "New Post" }}</h1>

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
            </div>
            <div class="form-group">
                <label for="tags">"Tags"</label>
                <input
                    id="tags"
                    type="text"
                    placeholder="rust, web"
                    prop:value=move || draft.with(|d| d.tags.clone())
                    on:input=move |ev| draft.update(|d| d.tags = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="content">"Content"</label>
                <textarea
                    id="content"
                    rows="20"
                    placeholder="Write your blog post content here..."
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
            <div class="form-group checkbox">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.published)
                        on:change=move |ev| draft.update(|d| d.published = event_target_checked(&ev))
                    />
                    " Published"
                </label>
            </div>
            <Show when=move || id.is_some()>
                <div class="form-group">
                    <label for="publishDate">"Publish date"</label>
                    <input id="publishDate" type="text" readonly=true prop:value=move || publish_date.get() />
                </div>
            </Show>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {if id.is_some() { "Update Post" } else { "Create Post" }}
                </button>
                <a class="btn" href=AdminRoute::List(kind).href()>"Cancel"</a>
            </div>
        </form>
    }
}
