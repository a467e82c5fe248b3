use leptos::prelude::*;
use leptos_meta::*;

use crate::api::list_indexes;
use crate::components::chat_panel::ChatPanel;
use crate::components::index_list::IndexList;
use crate::model::conversation::ConversationLog;

#[component]
pub fn HomePage() -> impl IntoView {
    // Shared by the index panel and the chat panel's book filter.
    let indexes = Resource::new(|| (), |_| list_indexes());

    // Lives as long as the page; lost on reload.
    let conversation = RwSignal::new(ConversationLog::new());

    view! {
        <Title text="Book Search | Getting to Know the Classics" />

        <div class="home-page">
            <IndexList indexes=indexes />
            <ChatPanel indexes=indexes conversation=conversation />
        </div>
    }
}
