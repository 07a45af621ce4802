use crate::ui::mvi::UiState;

/// Progress of a reveal block. `Revealed` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Mounted, not registered with the observer yet.
    #[default]
    Idle,
    /// Waiting for the block to scroll into view.
    Observing,
    /// In view; the stagger delay is running.
    Triggered,
    Revealed,
}

impl UiState for RevealState {}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub fn is_observing(self) -> bool {
        matches!(self, Self::Observing)
    }
}
