use leptos::prelude::*;

use crate::model::conversation::ConversationLog;

#[component]
pub fn ConversationView(
    conversation: Signal<ConversationLog>,
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="chat-messages">
            {move || {
                conversation.with(|log| {
                    log.entries()
                        .iter()
                        .map(|entry| {
                            let user = entry.user.clone();
                            let bot = entry.bot.clone();
                            view! {
                                <div class="chat-message user">
                                    <div class="message-content">{user}</div>
                                </div>
                                <div class="chat-message assistant">
                                    <div class="message-content">{bot}</div>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
            {move || loading.get().then(|| view! {
                <div class="chat-message assistant">
                    <div class="message-content">"Searching..."</div>
                </div>
            })}
        </div>
    }
}
