use crate::mvi::UiState;

/// Flag behind the full-screen loading overlay.
///
/// Independent of the posts fetch status; the two may disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingState {
    pub active: bool,
}

impl UiState for LoadingState {}
