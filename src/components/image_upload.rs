//! Image Upload Component
//!
//! File picker that validates and uploads one image, holding the form's
//! upload guard while the request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::commands::{AdminApi, ImageUpload};
use crate::context::use_admin_context;
use crate::error::{ApiError, ApiResult};
use crate::forms::{upload_error_message, validate_image, UploadGuard};
use crate::notify;

async fn read_file(file: web_sys::File) -> ApiResult<ImageUpload> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    Ok(ImageUpload {
        file_name: file.name(),
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn ImageUploadField(
    #[prop(into)] label: String,
    uploads: RwSignal<UploadGuard>,
    #[prop(into)] on_uploaded: Callback<String>,
) -> impl IntoView {
    let ctx = use_admin_context();
    let max_bytes = ctx.config().max_upload_bytes;

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");

        if let Err(e) = validate_image(&file.type_(), file.size() as u64, max_bytes) {
            notify::alert(&upload_error_message(&e));
            return;
        }

        uploads.update(|g| g.begin());
        spawn_local(async move {
            let result = match read_file(file).await {
                Ok(upload) => ctx.api().upload_image(upload).await,
                Err(e) => Err(e),
            };
            uploads.update(|g| g.finish());
            match result {
                Ok(path) => on_uploaded.run(path),
                Err(e) => {
                    tracing::warn!(error = %e, "image upload failed");
                    notify::alert(&upload_error_message(&e));
                }
            }
        });
    };

    view! {
        <div class="form-group image-upload">
            <label>{label}</label>
            <input type="file" accept="image/*" on:change=on_change />
            <Show when=move || uploads.with(|g| g.is_busy())>
                <span class="upload-status">"Uploading..."</span>
            </Show>
        </div>
    }
}
