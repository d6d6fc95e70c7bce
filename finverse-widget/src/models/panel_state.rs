use std::rc::Rc;

use yew::Reducible;

use super::message::{CONNECTION_ERROR, ChatMessage};

/// The widget's entire mutable state. All mutation goes through
/// [`PanelAction`] reductions so the send ordering (append user message,
/// clear input, raise the loading flag, then dispatch the request) cannot
/// be observed out of order. `open` and `loading` are independent flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub open: bool,
    pub input: String,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl PanelState {
    /// A send is a silent no-op unless the trimmed input is non-empty.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    ToggleOpen,
    Close,
    InputChanged(String),
    /// A send was initiated with the raw, untrimmed input text.
    SendStarted { text: String },
    /// The backend answered; `text` already has the greeting fallback applied.
    ReplyArrived { text: String },
    SendFailed,
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: PanelAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PanelAction::ToggleOpen => next.open = !next.open,
            PanelAction::Close => next.open = false,
            PanelAction::InputChanged(value) => next.input = value,
            PanelAction::SendStarted { text } => {
                next.messages.push(ChatMessage::user(text));
                next.input.clear();
                next.loading = true;
            }
            PanelAction::ReplyArrived { text } => {
                next.messages.push(ChatMessage::bot(text));
                next.loading = false;
            }
            PanelAction::SendFailed => {
                next.messages.push(ChatMessage::bot(CONNECTION_ERROR));
                next.loading = false;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::{ChatRole, DEFAULT_GREETING};

    fn reduce(state: PanelState, action: PanelAction) -> PanelState {
        Rc::unwrap_or_clone(Rc::new(state).reduce(action))
    }

    #[test]
    fn send_appends_user_message_and_clears_input() {
        let state = PanelState {
            input: "  spend less  ".to_string(),
            ..PanelState::default()
        };
        assert!(state.can_submit());

        let next = reduce(
            state,
            PanelAction::SendStarted {
                text: "  spend less  ".to_string(),
            },
        );

        assert_eq!(next.messages.len(), 1);
        assert_eq!(next.messages[0].role, ChatRole::User);
        // The raw text is kept untrimmed.
        assert_eq!(next.messages[0].text, "  spend less  ");
        assert!(next.input.is_empty());
        assert!(next.loading);
    }

    #[test]
    fn whitespace_input_is_not_submittable() {
        let state = PanelState {
            input: "   \t".to_string(),
            ..PanelState::default()
        };
        assert!(!state.can_submit());

        let empty = PanelState::default();
        assert!(!empty.can_submit());
    }

    #[test]
    fn reply_appends_bot_message_and_clears_loading() {
        let state = reduce(
            PanelState::default(),
            PanelAction::SendStarted {
                text: "hi".to_string(),
            },
        );
        let next = reduce(
            state,
            PanelAction::ReplyArrived {
                text: "X".to_string(),
            },
        );

        let last = next.messages.last().unwrap();
        assert_eq!(last.role, ChatRole::Bot);
        assert_eq!(last.text, "X");
        assert!(!next.loading);
    }

    #[test]
    fn failure_appends_connection_error_and_clears_loading() {
        let state = reduce(
            PanelState::default(),
            PanelAction::SendStarted {
                text: "hi".to_string(),
            },
        );
        let next = reduce(state, PanelAction::SendFailed);

        assert_eq!(next.messages.last().unwrap().text, CONNECTION_ERROR);
        assert!(!next.loading);
    }

    #[test]
    fn toggling_twice_restores_open_and_touches_nothing_else() {
        let state = PanelState {
            messages: vec![ChatMessage::bot(DEFAULT_GREETING)],
            ..PanelState::default()
        };

        let once = reduce(state.clone(), PanelAction::ToggleOpen);
        assert!(once.open);
        assert_eq!(once.messages, state.messages);

        let twice = reduce(once, PanelAction::ToggleOpen);
        assert_eq!(twice, state);
    }

    #[test]
    fn close_only_clears_open() {
        let state = reduce(
            PanelState {
                input: "draft".to_string(),
                ..PanelState::default()
            },
            PanelAction::ToggleOpen,
        );
        let next = reduce(state, PanelAction::Close);

        assert!(!next.open);
        assert_eq!(next.input, "draft");
    }

    #[test]
    fn overlapping_sends_append_in_arrival_order() {
        let mut state = PanelState::default();
        for text in ["first", "second"] {
            state = reduce(
                state,
                PanelAction::SendStarted {
                    text: text.to_string(),
                },
            );
        }
        assert!(state.loading);

        // Completions interleave in arrival order, each appending
        // independently; the first arrival already clears the flag.
        state = reduce(
            state,
            PanelAction::ReplyArrived {
                text: "reply to second".to_string(),
            },
        );
        assert!(!state.loading);
        state = reduce(state, PanelAction::SendFailed);

        let texts: Vec<&str> = state.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["first", "second", "reply to second", CONNECTION_ERROR]
        );
    }

    #[test]
    fn input_changes_do_not_touch_history() {
        let state = reduce(
            PanelState::default(),
            PanelAction::ReplyArrived {
                text: DEFAULT_GREETING.to_string(),
            },
        );
        let next = reduce(state, PanelAction::InputChanged("typing…".to_string()));

        assert_eq!(next.input, "typing…");
        assert_eq!(next.messages.len(), 1);
    }
}
