use crate::mvi::Reducer;
use crate::portal::announcements::intent::AnnouncementIntent;
use crate::portal::announcements::state::AnnouncementBoardState;

pub struct AnnouncementsReducer;

impl Reducer for AnnouncementsReducer {
    type State = AnnouncementBoardState;
    type Intent = AnnouncementIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AnnouncementIntent::Input(ch) => {
                let mut draft = state.draft;
                draft.push(ch);
                AnnouncementBoardState { draft, ..state }
            }
            AnnouncementIntent::Backspace => {
                let mut draft = state.draft;
                draft.pop();
                AnnouncementBoardState { draft, ..state }
            }
            AnnouncementIntent::Post => {
                if state.draft.trim().is_empty() {
                    return state;
                }
                let mut entries = state.entries;
                entries.push(state.draft);
                AnnouncementBoardState {
                    entries,
                    draft: String::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AnnouncementBoardState, intent: AnnouncementIntent) -> AnnouncementBoardState {
        AnnouncementsReducer::reduce(state, intent)
    }

    fn typed(text: &str) -> AnnouncementBoardState {
        let mut state = AnnouncementBoardState::seeded(vec!["Welcome!".into()]);
        for ch in text.chars() {
            state = reduce(state, AnnouncementIntent::Input(ch));
        }
        state
    }

    #[test]
    fn post_appends_and_clears_draft() {
        let state = reduce(typed("Due Monday"), AnnouncementIntent::Post);
        assert_eq!(state.entries, vec!["Welcome!".to_string(), "Due Monday".to_string()]);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn post_with_blank_draft_is_noop() {
        let before = typed("   ");
        let after = reduce(before.clone(), AnnouncementIntent::Post);
        assert_eq!(after, before);
    }

    #[test]
    fn prior_entries_keep_their_order() {
        let mut state = AnnouncementBoardState::seeded(vec!["first".into(), "second".into()]);
        state = reduce(state, AnnouncementIntent::Input('x'));
        state = reduce(state, AnnouncementIntent::Post);
        assert_eq!(state.entries[0], "first");
        assert_eq!(state.entries[1], "second");
        assert_eq!(state.entries.len(), 3);
    }

    #[test]
    fn backspace_edits_draft() {
        let state = reduce(typed("ab"), AnnouncementIntent::Backspace);
        assert_eq!(state.draft, "a");
    }
}
