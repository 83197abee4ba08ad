//! Composer — staged input plus the send action.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Text input and send button. Enter submits (Shift+Enter does not); both
/// controls are gated while a send is in flight.
#[component]
pub fn Composer(
    /// Invoked when the user triggers a send.
    on_send: Callback<()>,
) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    let can_send = move || chat.get().can_submit();

    view! {
        <div class="composer">
            <input
                class="composer__input"
                type="text"
                placeholder="Type a message..."
                disabled=move || chat.get().busy
                prop:value=move || chat.get().composer
                on:input=move |ev| chat.update(|c| c.set_composer(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button
                class="btn btn--primary composer__send"
                on:click=move |_| on_send.run(())
                disabled=move || !can_send()
            >
                "Send"
            </button>
        </div>
    }
}
