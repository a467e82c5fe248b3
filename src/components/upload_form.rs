use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};

use crate::api::{error_message, upload_book};
use crate::components::status_banner::StatusBanner;
use crate::model::upload::{validate_upload, StatusMessage, ACCEPTED_EXTENSION};

#[component]
pub fn UploadForm() -> impl IntoView {
    let selected_file = RwSignal::new(Option::<String>::None);
    let index_name = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);
    let status = RwSignal::new(Option::<StatusMessage>::None);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let name = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        selected_file.set(name);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Nothing leaves the browser unless the file passes this check.
        if let Err(rejection) = validate_upload(selected_file.get_untracked().as_deref()) {
            status.set(Some(rejection.into()));
            return;
        }

        let Some(form) = ev.target().map(|target| target.unchecked_into::<HtmlFormElement>()) else {
            return;
        };
        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(_) => {
                status.set(Some(StatusMessage::failed("could not read the selected file")));
                return;
            }
        };

        uploading.set(true);
        status.set(Some(StatusMessage::uploading()));

        leptos::task::spawn_local(async move {
            match upload_book(form_data.into()).await {
                Ok(receipt) => {
                    status.set(Some(StatusMessage::uploaded(&receipt)));
                    selected_file.set(None);
                    index_name.set(String::new());
                    form.reset();
                }
                Err(e) => {
                    leptos::logging::error!("book upload failed: {e}");
                    status.set(Some(StatusMessage::failed(&error_message(&e))));
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <h2>"Upload a Text File"</h2>
            <p>"Select a .txt file to add to the search index"</p>

            <input
                type="file"
                name="file"
                accept=ACCEPTED_EXTENSION
                on:change=on_file_change
                disabled=move || uploading.get()
            />

            {move || selected_file.get().map(|name| view! {
                <p class="selected-file">"Selected: " {name}</p>
            })}

            <label for="index-name">"Index Name (optional):"</label>
            <input
                type="text"
                id="index-name"
                name="index_name"
                placeholder="Enter custom index name"
                prop:value=move || index_name.get()
                on:input=move |ev| index_name.set(event_target_value(&ev))
                disabled=move || uploading.get()
            />
            <p class="hint">"Leave blank to generate automatically"</p>

            <button type="submit" disabled=move || uploading.get()>
                {move || if uploading.get() { "Uploading..." } else { "Upload to Search Index" }}
            </button>
        </form>

        {move || status.get().map(|status| view! {
            <StatusBanner kind=status.kind message=status.message />
        })}

        <div class="upload-help">
            <p>
                "Don't have a text file to upload? Visit "
                <a href="https://www.gutenberg.org/" target="_blank" rel="noopener noreferrer">
                    "Project Gutenberg"
                </a>
                "."
            </p>
        </div>
    }
}
