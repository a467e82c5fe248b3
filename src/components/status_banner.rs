use leptos::prelude::*;

use crate::model::upload::StatusKind;

#[component]
pub fn StatusBanner(
    kind: StatusKind,
    message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=kind.class() role="status">
            <span>{message}</span>
            {on_dismiss.map(|cb| view! {
                <button
                    type="button"
                    class="dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| cb.run(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}
