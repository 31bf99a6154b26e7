use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUpload;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api::{
        self,
        transport::UploadFile,
        upload::mime_from_file_name,
    },
    components::ErrorBanner,
    error::ApiError,
    store::session::use_session,
};

/// File picker that uploads one image and reports the stored URL
#[component]
pub fn ImageUpload(current: Option<String>, on_uploaded: EventHandler<String>) -> Element {
    let api = use_session().api();
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let onchange = move |evt: FormEvent| {
        let api = api.clone();

        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };

            uploading.set(true);
            error.set(None);

            let file_name = file.name();
            let mime = file
                .content_type()
                .unwrap_or_else(|| mime_from_file_name(&file_name).to_string());

            let result = match file.read_bytes().await {
                Ok(bytes) => {
                    let upload = UploadFile {
                        file_name: file_name.clone(),
                        mime,
                        bytes: bytes.to_vec(),
                    };

                    api::upload::upload_image(&api, upload).await
                }
                Err(e) => Err(ApiError::Validation(format!(
                    "No se pudo leer el archivo: {}",
                    e
                ))),
            };

            match result {
                Ok(uploaded) => {
                    tracing::debug!(file_name = %file_name, "Uploaded image");
                    on_uploaded.call(uploaded.url);
                }
                Err(e) => error.set(Some(e.message())),
            }

            uploading.set(false);
        }
    };

    rsx!(
        div { class: "flex flex-col gap-2",
            if let Some(url) = current {
                img { class: "w-24 h-24 object-cover rounded", src: "{url}", alt: "Imagen actual" }
            }
            label { class: "btn btn-outline btn-sm w-fit",
                if uploading() {
                    span { class: "loading loading-spinner loading-xs" }
                } else {
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaUpload
                    }
                }
                "Subir imagen"
                input {
                    r#type: "file",
                    class: "hidden",
                    accept: "image/*",
                    disabled: uploading(),
                    onchange: onchange,
                }
            }
            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }
        }
    )
}
