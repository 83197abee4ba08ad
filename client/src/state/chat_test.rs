use super::*;

use std::collections::HashSet;

fn submitted(state: &mut ChatState, text: &str) -> String {
    state.set_composer(text.to_owned());
    state.submit().expect("submit should go through")
}

// =============================================================
// Default state
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.editing_id.is_none());
    assert!(state.composer.is_empty());
    assert!(!state.busy);
    assert!(!state.can_submit());
}

// =============================================================
// submit — new message path
// =============================================================

#[test]
fn submit_appends_user_message_and_raises_busy() {
    let mut state = ChatState::default();
    let prompt = submitted(&mut state, "hello");

    assert_eq!(prompt, "hello");
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::User);
    assert_eq!(state.messages[0].text, "hello");
    assert!(state.busy);
}

#[test]
fn submit_clears_composer_optimistically() {
    let mut state = ChatState::default();
    submitted(&mut state, "hello");

    // Cleared on entering the sending state, not on completion.
    assert!(state.composer.is_empty());
    assert!(state.busy);
}

#[test]
fn submit_trims_surrounding_whitespace() {
    let mut state = ChatState::default();
    let prompt = submitted(&mut state, "  hi there  ");

    assert_eq!(prompt, "hi there");
    assert_eq!(state.messages[0].text, "hi there");
}

#[test]
fn submit_empty_composer_is_noop() {
    let mut state = ChatState::default();
    assert!(state.submit().is_none());
    assert!(state.messages.is_empty());
    assert!(!state.busy);
}

#[test]
fn submit_whitespace_composer_is_noop() {
    let mut state = ChatState::default();
    state.set_composer("   \n\t".to_owned());
    assert!(state.submit().is_none());
    assert!(state.messages.is_empty());
    assert!(!state.busy);
}

#[test]
fn submit_while_busy_is_noop() {
    let mut state = ChatState::default();
    submitted(&mut state, "first");

    state.set_composer("second".to_owned());
    assert!(state.submit().is_none());
    assert_eq!(state.messages.len(), 1);
    // The staged text survives the rejected submit.
    assert_eq!(state.composer, "second");
}

// =============================================================
// complete
// =============================================================

#[test]
fn complete_with_reply_appends_assistant_message() {
    let mut state = ChatState::default();
    submitted(&mut state, "hi");
    state.complete(ReplyOutcome::Reply("hello".to_owned()));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].sender, Sender::Assistant);
    assert_eq!(state.messages[1].text, "hello");
    assert!(!state.busy);
}

#[test]
fn complete_missing_reply_appends_fallback() {
    let mut state = ChatState::default();
    submitted(&mut state, "hi");
    state.complete(ReplyOutcome::Missing);

    assert_eq!(state.messages[1].text, FALLBACK_REPLY);
    assert!(!state.messages[1].text.is_empty());
}

#[test]
fn complete_failed_appends_error_text() {
    let mut state = ChatState::default();
    submitted(&mut state, "hi");
    state.complete(ReplyOutcome::Failed);

    assert_eq!(state.messages[1].sender, Sender::Assistant);
    assert_eq!(state.messages[1].text, ERROR_REPLY);
    assert!(!state.busy);
}

#[test]
fn send_then_send_preserves_chronological_order() {
    let mut state = ChatState::default();
    submitted(&mut state, "a");
    state.complete(ReplyOutcome::Reply("x".to_owned()));
    submitted(&mut state, "b");
    state.complete(ReplyOutcome::Missing);

    let senders: Vec<Sender> = state.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Assistant, Sender::User, Sender::Assistant]);
    assert_eq!(state.messages[0].text, "a");
    assert_eq!(state.messages[1].text, "x");
    assert_eq!(state.messages[2].text, "b");
    assert_eq!(state.messages[3].text, FALLBACK_REPLY);
}

// =============================================================
// ReplyOutcome::from_reply
// =============================================================

#[test]
fn from_reply_nonempty_is_reply() {
    assert_eq!(ReplyOutcome::from_reply(Some("hi".to_owned())), ReplyOutcome::Reply("hi".to_owned()));
}

#[test]
fn from_reply_absent_is_missing() {
    assert_eq!(ReplyOutcome::from_reply(None), ReplyOutcome::Missing);
}

#[test]
fn from_reply_empty_string_is_missing() {
    assert_eq!(ReplyOutcome::from_reply(Some(String::new())), ReplyOutcome::Missing);
}

// =============================================================
// start_edit
// =============================================================

#[test]
fn start_edit_loads_composer_and_sets_editing_id() {
    let mut state = ChatState::default();
    submitted(&mut state, "original");
    state.complete(ReplyOutcome::Reply("x".to_owned()));
    let user_id = state.messages[0].id.clone();

    assert!(state.start_edit(&user_id));
    assert_eq!(state.composer, "original");
    assert_eq!(state.editing_id.as_deref(), Some(user_id.as_str()));
}

#[test]
fn start_edit_rejects_assistant_message() {
    let mut state = ChatState::default();
    submitted(&mut state, "hi");
    state.complete(ReplyOutcome::Reply("hello".to_owned()));
    let assistant_id = state.messages[1].id.clone();

    assert!(!state.start_edit(&assistant_id));
    assert!(state.editing_id.is_none());
    assert!(state.composer.is_empty());
}

#[test]
fn start_edit_rejects_unknown_id() {
    let mut state = ChatState::default();
    submitted(&mut state, "hi");
    state.complete(ReplyOutcome::Reply("hello".to_owned()));

    assert!(!state.start_edit("no-such-id"));
    assert!(state.editing_id.is_none());
}

#[test]
fn start_edit_while_busy_is_rejected() {
    let mut state = ChatState::default();
    submitted(&mut state, "first");
    state.complete(ReplyOutcome::Reply("x".to_owned()));
    let user_id = state.messages[0].id.clone();

    submitted(&mut state, "second");
    assert!(state.busy);

    // Editing is not available while a send is in flight.
    assert!(!state.start_edit(&user_id));
    assert!(state.editing_id.is_none());
    assert!(state.composer.is_empty());
}

// =============================================================
// Edit-then-resubmit
// =============================================================

#[test]
fn edit_resubmit_rewrites_in_place_with_same_id() {
    let mut state = ChatState::default();
    submitted(&mut state, "a");
    let user_id = state.messages[0].id.clone();
    state.complete(ReplyOutcome::Reply("x".to_owned()));

    assert!(state.start_edit(&user_id));
    state.set_composer("a2".to_owned());
    let prompt = state.submit().expect("resubmit");
    assert_eq!(prompt, "a2");

    // No duplicate user message; id and position unchanged.
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].id, user_id);
    assert_eq!(state.messages[0].sender, Sender::User);
    assert_eq!(state.messages[0].text, "a2");
    assert_eq!(state.messages[1].text, "x");

    state.complete(ReplyOutcome::Reply("y".to_owned()));
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].sender, Sender::Assistant);
    assert_eq!(state.messages[2].text, "y");
}

#[test]
fn completion_clears_editing_id_after_edit_send() {
    let mut state = ChatState::default();
    submitted(&mut state, "a");
    let user_id = state.messages[0].id.clone();
    state.complete(ReplyOutcome::Reply("x".to_owned()));

    assert!(state.start_edit(&user_id));
    state.set_composer("a2".to_owned());
    state.submit().expect("resubmit");
    state.complete(ReplyOutcome::Failed);

    // Cleared unconditionally, success or failure.
    assert!(state.editing_id.is_none());
    assert!(!state.busy);
}

// =============================================================
// Identifiers
// =============================================================

#[test]
fn message_ids_are_unique_across_sends() {
    let mut state = ChatState::default();
    for text in ["a", "b", "c"] {
        submitted(&mut state, text);
        state.complete(ReplyOutcome::Missing);
    }

    let ids: HashSet<&str> = state.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), state.messages.len());
}
