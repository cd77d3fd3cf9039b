use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::{FeedStatus, HomeScreenState, MAX_ITEMS};
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeScreenState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::Mount => HomeScreenState {
                mounted: true,
                ..state
            },
            HomeIntent::ItemsLoaded(mut items) => {
                items.truncate(MAX_ITEMS);
                HomeScreenState {
                    items,
                    selected: 0,
                    scroll: 0,
                    feed: FeedStatus::Loaded,
                    ..state
                }
            }
            HomeIntent::FetchFailed => HomeScreenState {
                feed: FeedStatus::Failed,
                ..state
            },
            HomeIntent::SelectNext => {
                let selected = if state.selected + 1 < state.items.len() {
                    state.selected + 1
                } else {
                    state.selected
                };
                follow_selection(HomeScreenState { selected, ..state })
            }
            HomeIntent::SelectPrevious => {
                let selected = state.selected.saturating_sub(1);
                follow_selection(HomeScreenState { selected, ..state })
            }
            HomeIntent::Select(index) => {
                if index < state.items.len() {
                    follow_selection(HomeScreenState {
                        selected: index,
                        ..state
                    })
                } else {
                    state
                }
            }
            HomeIntent::ScrollBy(delta) => {
                let max_scroll = max_scroll(&state);
                let scroll = state
                    .scroll
                    .saturating_add_signed(delta)
                    .min(max_scroll);
                // Keep the selection on screen after the viewport moves.
                let last_visible = (scroll + state.viewport_cards.max(1)).saturating_sub(1);
                let selected = state.selected.clamp(scroll, last_visible.max(scroll));
                let selected = selected.min(state.items.len().saturating_sub(1));
                HomeScreenState {
                    scroll,
                    selected,
                    ..state
                }
            }
            HomeIntent::Resize { viewport_cards } => follow_selection(HomeScreenState {
                viewport_cards: viewport_cards.max(1),
                ..state
            }),
        }
    }
}

fn max_scroll(state: &HomeScreenState) -> usize {
    state
        .items
        .len()
        .saturating_sub(state.viewport_cards.max(1))
}

/// Adjust the viewport so the selected card is inside it.
fn follow_selection(state: HomeScreenState) -> HomeScreenState {
    let viewport = state.viewport_cards.max(1);
    let mut scroll = state.scroll;
    if state.selected < scroll {
        scroll = state.selected;
    } else if state.selected >= scroll + viewport {
        scroll = state.selected + 1 - viewport;
    }
    let scroll = scroll.min(max_scroll(&state));
    HomeScreenState { scroll, ..state }
}
