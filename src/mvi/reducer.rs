//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where a slice changes.
///
/// `reduce` must stay pure: no I/O, no logging, no clocks.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
