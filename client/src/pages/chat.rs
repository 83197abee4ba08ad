//! Chat page — owns the send orchestration over the shared conversation.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::composer::Composer;
use crate::state::chat::ChatState;

/// Single-page conversation view.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let do_send = move || {
        // Phase 1: commit the user message locally; the guard inside
        // `submit` makes this a no-op while busy or with an empty composer.
        let Some(prompt) = chat.try_update(ChatState::submit).flatten() else {
            return;
        };

        // Phase 2: relay the prompt and append the outcome on completion.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::send_chat_message(&prompt).await {
                Ok(reply) => crate::state::chat::ReplyOutcome::from_reply(reply),
                Err(_) => crate::state::chat::ReplyOutcome::Failed,
            };
            chat.update(|c| c.complete(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = prompt;
    };

    let on_send = Callback::new(move |()| do_send());

    view! {
        <main class="chat-page">
            <div class="chat-page__card">
                <ChatPanel/>
                <Composer on_send=on_send/>
            </div>
        </main>
    }
}
