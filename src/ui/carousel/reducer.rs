use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::{CarouselPhase, CarouselState};

pub struct CarouselReducer<T>(PhantomData<fn() -> T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for CarouselReducer<T> {
    type State = CarouselState<T>;
    type Intent = CarouselIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Loaded(items) => CarouselState {
                items: Some(items),
                current_index: 0,
                ..state
            },
            CarouselIntent::SetItemsPerView(items_per_view) => {
                let mut next = CarouselState {
                    items_per_view: items_per_view.max(1),
                    ..state
                };
                // Never let the window read past the last item.
                next.current_index = next.current_index.min(next.max_index());
                next
            }
            CarouselIntent::Tick => {
                if state.phase() != CarouselPhase::Carousel || state.paused {
                    return state;
                }
                let current_index = if state.current_index >= state.max_index() {
                    0
                } else {
                    state.current_index + 1
                };
                CarouselState {
                    current_index,
                    ..state
                }
            }
            CarouselIntent::GoTo(index) => {
                let current_index = index.min(state.max_index());
                CarouselState {
                    current_index,
                    ..state
                }
            }
            CarouselIntent::SetPaused(paused) => CarouselState { paused, ..state },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = CarouselReducer<char>;

    fn loaded(items: &str, per_view: usize) -> CarouselState<char> {
        let state = R::reduce(
            CarouselState::new(per_view),
            CarouselIntent::Loaded(items.chars().collect()),
        );
        assert_eq!(state.current_index(), 0);
        state
    }

    #[test]
    fn tick_advances_then_wraps_to_start() {
        let mut state = loaded("ABCDE", 3);
        state = R::reduce(state, CarouselIntent::Tick);
        state = R::reduce(state, CarouselIntent::Tick);
        assert_eq!(state.current_index(), 2);
        state = R::reduce(state, CarouselIntent::Tick);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn tick_is_noop_while_paused() {
        let mut state = loaded("ABCDE", 3);
        state = R::reduce(state, CarouselIntent::SetPaused(true));
        for _ in 0..10 {
            state = R::reduce(state, CarouselIntent::Tick);
        }
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn tick_is_noop_outside_carousel_phase() {
        let state = R::reduce(CarouselState::new(3), CarouselIntent::Tick);
        assert_eq!(state.phase(), CarouselPhase::Loading);
        let state = R::reduce(loaded("AB", 3), CarouselIntent::Tick);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn go_to_clamps() {
        let state = R::reduce(loaded("ABCDE", 3), CarouselIntent::GoTo(42));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn shrinking_max_index_reclamps() {
        let mut state = loaded("ABCDEFGHIJ", 1);
        state = R::reduce(state, CarouselIntent::GoTo(9));
        state = R::reduce(state, CarouselIntent::SetItemsPerView(3));
        assert_eq!(state.current_index(), 7);
    }

    #[test]
    fn zero_items_per_view_is_treated_as_one() {
        let state = R::reduce(loaded("ABC", 3), CarouselIntent::SetItemsPerView(0));
        assert_eq!(state.items_per_view(), 1);
        assert_eq!(state.phase(), CarouselPhase::Carousel);
    }

    #[test]
    fn reload_resets_index() {
        let mut state = R::reduce(loaded("ABCDE", 1), CarouselIntent::GoTo(3));
        state = R::reduce(state, CarouselIntent::Loaded(vec!['x', 'y']));
        assert_eq!(state.current_index(), 0);
    }
}
