use crate::mvi::Reducer;
use crate::ui::prompt::intent::PromptIntent;
use crate::ui::prompt::state::PromptState;

pub struct PromptReducer;

impl Reducer for PromptReducer {
    type State = PromptState;
    type Intent = PromptIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PromptIntent::Open { kind } => PromptState::Visible {
                kind,
                input: String::new(),
            },
            PromptIntent::Input(ch) => match state {
                PromptState::Visible { kind, mut input } => {
                    input.push(ch);
                    PromptState::Visible { kind, input }
                }
                other => other,
            },
            PromptIntent::Backspace => match state {
                PromptState::Visible { kind, mut input } => {
                    input.pop();
                    PromptState::Visible { kind, input }
                }
                other => other,
            },
            PromptIntent::Cancel => PromptState::Hidden,
        }
    }
}
