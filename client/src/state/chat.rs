//! Conversation state — message list plus the send/edit state machine.
//!
//! DESIGN
//! ======
//! All mutation happens through pure transition methods so the submit and
//! edit flows are unit-testable without a rendering environment. A send is
//! a two-phase commit: [`ChatState::submit`] performs the synchronous local
//! mutation (append or in-place edit, optimistic composer clear) and hands
//! back the prompt; [`ChatState::complete`] performs the completion
//! mutation (assistant append, unconditional busy/editing reset) once the
//! relay call resolves.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Assistant text shown when the relay answered without a reply.
pub const FALLBACK_REPLY: &str = "No reply received.";
/// Assistant text shown when the relay call itself failed.
pub const ERROR_REPLY: &str = "Something went wrong. Please try again.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single conversation message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    /// Collision-resistant random id, stable for the lifetime of the
    /// message. Ordering comes solely from position in the list.
    pub id: String,
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn new(sender: Sender, text: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text }
    }
}

/// Terminal outcome of a relay call, mapped onto the assistant message
/// appended by [`ChatState::complete`]. Exactly one outcome occurs per
/// send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The relay returned a non-empty reply.
    Reply(String),
    /// The relay answered without a reply text.
    Missing,
    /// The relay call failed outright.
    Failed,
}

impl ReplyOutcome {
    /// Classify the reply field of a successful relay response.
    #[must_use]
    pub fn from_reply(reply: Option<String>) -> Self {
        match reply {
            Some(text) if !text.is_empty() => Self::Reply(text),
            _ => Self::Missing,
        }
    }
}

/// The conversation owned by the chat view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Ordered messages; append-only except for the in-place edit path in
    /// [`ChatState::submit`].
    pub messages: Vec<ChatMessage>,
    /// Id of the user message being re-edited, if any. Always references
    /// an existing [`Sender::User`] message while set.
    pub editing_id: Option<String>,
    /// Text staged in the composer, not yet part of `messages`.
    pub composer: String,
    /// True exactly while a relay call is outstanding.
    pub busy: bool,
}

impl ChatState {
    /// Replace the composer text.
    pub fn set_composer(&mut self, text: String) {
        self.composer = text;
    }

    /// Whether a submit would currently go through.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.composer.trim().is_empty() && !self.busy
    }

    /// Phase 1 of a send: commit the user message locally and return the
    /// prompt to relay.
    ///
    /// With `editing_id` set, rewrites the referenced message's text in
    /// place (same id, same position, no new message); otherwise appends a
    /// fresh user message. Clears the composer optimistically and raises
    /// `busy`.
    ///
    /// Returns `None` without any state change when the composer is empty
    /// or whitespace-only, or a send is already in flight.
    pub fn submit(&mut self) -> Option<String> {
        let text = self.composer.trim().to_owned();
        if text.is_empty() || self.busy {
            return None;
        }

        match &self.editing_id {
            Some(id) => {
                if let Some(msg) = self.messages.iter_mut().find(|m| m.id == *id) {
                    msg.text = text.clone();
                }
            }
            None => self.messages.push(ChatMessage::new(Sender::User, text.clone())),
        }

        self.composer.clear();
        self.busy = true;
        Some(text)
    }

    /// Begin editing a past user message: copy its text into the composer
    /// and remember its id for the next submit.
    ///
    /// Rejected (returns `false`, no state change) for assistant messages,
    /// unknown ids, and while a send is in flight.
    pub fn start_edit(&mut self, id: &str) -> bool {
        if self.busy {
            return false;
        }
        let Some(msg) = self.messages.iter().find(|m| m.id == id) else {
            return false;
        };
        if msg.sender != Sender::User {
            return false;
        }
        self.composer = msg.text.clone();
        self.editing_id = Some(msg.id.clone());
        true
    }

    /// Phase 2 of a send: append the assistant message for `outcome`, then
    /// reset `busy` and `editing_id` unconditionally.
    pub fn complete(&mut self, outcome: ReplyOutcome) {
        let text = match outcome {
            ReplyOutcome::Reply(reply) => reply,
            ReplyOutcome::Missing => FALLBACK_REPLY.to_owned(),
            ReplyOutcome::Failed => ERROR_REPLY.to_owned(),
        };
        self.messages.push(ChatMessage::new(Sender::Assistant, text));
        self.busy = false;
        self.editing_id = None;
    }
}
