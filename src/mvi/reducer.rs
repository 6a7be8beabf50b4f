//! Reducer trait: the single place where state transitions happen.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// `reduce` must be a pure function: no side effects, no clocks, no I/O.
/// Anything time- or identity-dependent is resolved by the caller and
/// passed in through the intent.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
