use crate::ui::mvi::Reducer;

use super::intent::DropdownIntent;
use super::state::DropdownState;

pub struct DropdownReducer;

impl Reducer for DropdownReducer {
    type State = DropdownState;
    type Intent = DropdownIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (DropdownState::Closed, DropdownIntent::Toggle { entries }) => DropdownState::Open {
                entries,
                highlighted: 0,
            },
            (DropdownState::Open { .. }, DropdownIntent::Toggle { .. })
            | (_, DropdownIntent::Close)
            | (_, DropdownIntent::ClickOutside)
            | (_, DropdownIntent::Select) => DropdownState::Closed,
            (
                DropdownState::Open {
                    entries,
                    highlighted,
                },
                DropdownIntent::MoveUp,
            ) => DropdownState::Open {
                entries,
                highlighted: if highlighted == 0 {
                    entries.saturating_sub(1)
                } else {
                    highlighted - 1
                },
            },
            (
                DropdownState::Open {
                    entries,
                    highlighted,
                },
                DropdownIntent::MoveDown,
            ) => DropdownState::Open {
                entries,
                highlighted: if highlighted + 1 >= entries {
                    0
                } else {
                    highlighted + 1
                },
            },
            (DropdownState::Closed, _) => DropdownState::Closed,
        }
    }
}
