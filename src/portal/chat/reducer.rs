use crate::mvi::Reducer;
use crate::portal::chat::intent::ChatIntent;
use crate::portal::chat::state::ChatLogState;

pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatLogState;
    type Intent = ChatIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChatIntent::Input(ch) => {
                let mut draft = state.draft;
                draft.push(ch);
                ChatLogState { draft, ..state }
            }
            ChatIntent::Backspace => {
                let mut draft = state.draft;
                draft.pop();
                ChatLogState { draft, ..state }
            }
            ChatIntent::Send { author } => {
                if state.draft.trim().is_empty() {
                    return state;
                }
                let mut messages = state.messages;
                messages.push(format!("{}: {}", author, state.draft));
                ChatLogState {
                    messages,
                    draft: String::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ChatLogState, intent: ChatIntent) -> ChatLogState {
        ChatReducer::reduce(state, intent)
    }

    #[test]
    fn send_appends_attributed_message_and_clears_draft() {
        let mut state = ChatLogState::default();
        for ch in "hello all".chars() {
            state = reduce(state, ChatIntent::Input(ch));
        }
        let state = reduce(
            state,
            ChatIntent::Send {
                author: "Ada".into(),
            },
        );
        assert_eq!(state.messages, vec!["Ada: hello all".to_string()]);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn send_with_blank_draft_is_noop() {
        let mut state = ChatLogState::default();
        state = reduce(state, ChatIntent::Input(' '));
        let before = state.clone();
        let after = reduce(
            state,
            ChatIntent::Send {
                author: "Ada".into(),
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn messages_keep_append_order() {
        let mut state = ChatLogState::default();
        for (author, text) in [("Ada", "hi"), ("Grace", "hey"), ("Ada", "ready?")] {
            for ch in text.chars() {
                state = reduce(state, ChatIntent::Input(ch));
            }
            state = reduce(
                state,
                ChatIntent::Send {
                    author: author.into(),
                },
            );
        }
        assert_eq!(
            state.messages,
            vec![
                "Ada: hi".to_string(),
                "Grace: hey".to_string(),
                "Ada: ready?".to_string()
            ]
        );
    }
}
