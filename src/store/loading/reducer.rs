use crate::mvi::Reducer;

use super::intent::LoadingIntent;
use super::state::LoadingState;

/// Last writer wins. No double-start or stop-without-start checks.
pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingState;
    type Intent = LoadingIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadingIntent::Start => LoadingState { active: true },
            LoadingIntent::Stop => LoadingState { active: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_then_stop() {
        let state = LoadingReducer::reduce(LoadingState::default(), LoadingIntent::Start);
        assert!(state.active);
        let state = LoadingReducer::reduce(state, LoadingIntent::Stop);
        assert!(!state.active);
    }

    #[test]
    fn stop_when_stopped_stays_false() {
        let state = LoadingReducer::reduce(LoadingState::default(), LoadingIntent::Stop);
        assert!(!state.active);
    }

    #[test]
    fn double_start_stays_true() {
        let state = LoadingReducer::reduce(LoadingState::default(), LoadingIntent::Start);
        let state = LoadingReducer::reduce(state, LoadingIntent::Start);
        assert!(state.active);
    }
}
