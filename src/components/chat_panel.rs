use leptos::prelude::*;

use crate::api::{greeting, search_books};
use crate::components::conversation_view::ConversationView;
use crate::components::status_banner::StatusBanner;
use crate::model::conversation::ConversationLog;
use crate::model::personality::{greeting_text, DEFAULT_PERSONALITY, PERSONALITIES};
use crate::model::request_state::RequestState;
use crate::model::search::{ChatResponse, DEFAULT_LIMIT};
use crate::model::upload::StatusKind;

const SEARCH_FAILED: &str = "Failed to search books. Please try again later.";

/// Question box, personality picker and conversation history. The
/// conversation log belongs to the caller; this panel only appends to it.
#[component]
pub fn ChatPanel(
    indexes: Resource<Result<Vec<String>, ServerFnError>>,
    conversation: RwSignal<ConversationLog>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let selected_index = RwSignal::new(String::new());
    let personality = RwSignal::new(DEFAULT_PERSONALITY.to_string());
    let search = RwSignal::new(RequestState::<ChatResponse>::Idle);

    let greeting_resource = Resource::new(move || personality.get(), greeting);

    let loading = Signal::derive(move || search.with(RequestState::is_loading));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        if text.trim().is_empty() {
            return;
        }

        query.set(String::new());
        search.update(RequestState::begin);

        let index_name = Some(selected_index.get_untracked()).filter(|name| !name.is_empty());
        let tag = personality.get_untracked();

        leptos::task::spawn_local(async move {
            let outcome =
                search_books(text.clone(), index_name, Some(DEFAULT_LIMIT), Some(tag)).await;
            let outcome = match outcome {
                Ok(response) => {
                    conversation.update(|log| log.append(text, response.response.clone()));
                    Ok(response)
                }
                Err(e) => {
                    leptos::logging::error!("failed to fetch search results: {e}");
                    Err(SEARCH_FAILED)
                }
            };
            search.update(|state| state.settle(outcome));
        });
    };

    let dismiss_error = Callback::new(move |()| search.update(RequestState::dismiss));

    view! {
        <section class="chat-panel">
            <h2>"Book Search"</h2>

            <label for="personality">"Select AI Personality"</label>
            <select
                id="personality"
                prop:value=move || personality.get()
                on:change=move |ev| personality.set(event_target_value(&ev))
                disabled=move || loading.get()
            >
                {PERSONALITIES
                    .iter()
                    .map(|(tag, label)| view! { <option value=*tag>{*label}</option> })
                    .collect_view()}
            </select>

            <Suspense fallback=|| ()>
                {move || {
                    greeting_resource.get().map(|result| {
                        let text = greeting_text(result.as_ref().ok());
                        view! { <div class="greeting">{text}</div> }
                    })
                }}
            </Suspense>

            <ConversationView conversation=conversation.into() loading=loading />

            {move || {
                search.with(|state| {
                    state
                        .ready()
                        .filter(|response| !response.indexes_searched.is_empty())
                        .map(|response| {
                            let searched = response.indexes_searched.join(", ");
                            view! { <p class="indexes-searched">"Searched in: " {searched}</p> }
                        })
                })
            }}

            <form class="chat-input" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Ask a question about the books..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    disabled=move || loading.get()
                />
                <button
                    type="submit"
                    disabled=move || loading.get() || query.with(|q| q.trim().is_empty())
                >
                    {move || if loading.get() { "Searching..." } else { "Search" }}
                </button>

                <Suspense fallback=|| ()>
                    {move || {
                        let names = indexes
                            .get()
                            .and_then(Result::ok)
                            .filter(|names| !names.is_empty());
                        names.map(|names| {
                            view! {
                                <label for="book-index">"Select specific book (optional)"</label>
                                <select
                                    id="book-index"
                                    prop:value=move || selected_index.get()
                                    on:change=move |ev| selected_index.set(event_target_value(&ev))
                                    disabled=move || loading.get()
                                >
                                    <option value="">"All books"</option>
                                    {names.into_iter().map(|name| {
                                        let label = name.clone();
                                        view! { <option value=name>{label}</option> }
                                    }).collect_view()}
                                </select>
                            }
                        })
                    }}
                </Suspense>
            </form>

            {move || {
                search.with(|state| state.error().map(str::to_owned)).map(|message| view! {
                    <StatusBanner kind=StatusKind::Error message=message on_dismiss=dismiss_error />
                })
            }}
        </section>
    }
}
