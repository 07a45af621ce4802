use crate::ui::mvi::Reducer;

use super::intent::RevealIntent;
use super::state::RevealState;

pub struct RevealReducer;

impl Reducer for RevealReducer {
    type State = RevealState;
    type Intent = RevealIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (RevealState::Revealed, _) => RevealState::Revealed,
            (RevealState::Idle, RevealIntent::Observed) => RevealState::Observing,
            (_, RevealIntent::ObserverUnavailable) => RevealState::Revealed,
            (
                RevealState::Observing,
                RevealIntent::Intersection {
                    is_intersecting: true,
                },
            ) => RevealState::Triggered,
            (RevealState::Triggered, RevealIntent::DelayElapsed) => RevealState::Revealed,
            (other, _) => other,
        }
    }
}
