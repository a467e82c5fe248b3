use leptos::prelude::*;
use leptos_meta::*;

use crate::components::upload_form::UploadForm;

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <Title text="Upload | Getting to Know the Classics" />
        <Meta name="description" content="Add a plain text book to the search index." />

        <div class="upload-page">
            <h1>"Upload Book To Search Index"</h1>
            <UploadForm />
        </div>
    }
}
