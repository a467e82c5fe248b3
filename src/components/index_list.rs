use leptos::prelude::*;

use crate::components::status_banner::StatusBanner;
use crate::model::upload::StatusKind;

const LOAD_FAILED: &str = "Failed to load book indexes. Please try again later.";

#[component]
pub fn IndexList(indexes: Resource<Result<Vec<String>, ServerFnError>>) -> impl IntoView {
    view! {
        <section class="index-list">
            <h2>"Available Book Indexes"</h2>
            <Suspense fallback=|| view! { <p>"Loading book indexes..."</p> }>
                {move || {
                    indexes.get().map(|result| match result {
                        Err(e) => {
                            leptos::logging::error!("failed to fetch book indexes: {e}");
                            let message = LOAD_FAILED.to_string();
                            view! { <StatusBanner kind=StatusKind::Error message=message /> }
                            .into_any()
                        }
                        Ok(names) if names.is_empty() => {
                            view! { <p>"No book indexes available."</p> }.into_any()
                        }
                        Ok(names) => view! {
                            <ul class="index-names">
                                {names
                                    .into_iter()
                                    .map(|name| view! { <li>{name}</li> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
