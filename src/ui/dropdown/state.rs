use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open {
        entries: usize,
        highlighted: usize,
    },
}

impl UiState for DropdownState {}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self {
            Self::Open {
                entries,
                highlighted,
            } if *entries > 0 => Some(*highlighted),
            _ => None,
        }
    }
}
