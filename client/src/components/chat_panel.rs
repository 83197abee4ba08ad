//! Conversation transcript — renders the message list with per-sender
//! bubbles and an edit affordance on user messages.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::chat::{ChatState, Sender};

/// Scrollable message list plus the in-flight indicator.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view as the transcript grows.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.busy;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_edit = move |id: String| {
        chat.update(|c| {
            let _ = c.start_edit(&id);
        });
    };

    view! {
        <div class="chat-panel__messages" node_ref=messages_ref>
            {move || {
                let messages = chat.get().messages;
                if messages.is_empty() {
                    return view! {
                        <div class="chat-panel__empty">"Say something to get started"</div>
                    }
                        .into_any();
                }

                messages
                    .iter()
                    .map(|msg| {
                        let id = msg.id.clone();
                        let text = msg.text.clone();
                        let is_user = msg.sender == Sender::User;

                        view! {
                            <div class="chat-panel__message" class:chat-panel__message--user=is_user>
                                <div class="chat-panel__bubble">
                                    {if is_user {
                                        view! { <span>{text}</span> }.into_any()
                                    } else {
                                        let rendered = render_markdown_html(&text);
                                        view! {
                                            <div class="chat-panel__markdown" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    }}
                                </div>
                                {is_user
                                    .then(|| {
                                        view! {
                                            <button
                                                class="chat-panel__edit"
                                                title="Edit and resend"
                                                on:click=move |_| on_edit(id.clone())
                                            >
                                                "Edit"
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}

            {move || {
                chat.get()
                    .busy
                    .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
            }}
        </div>
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
