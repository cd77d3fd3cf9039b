mod common;

use common::full_items;
use health_feed::ui::home::{FeedStatus, HomeIntent, HomeReducer, HomeScreenState, MAX_ITEMS};
use health_feed::ui::mvi::Reducer;

fn loaded(n: usize, viewport_cards: usize) -> HomeScreenState {
    let state = HomeReducer::reduce(
        HomeScreenState::new("Alex"),
        HomeIntent::Resize { viewport_cards },
    );
    HomeReducer::reduce(state, HomeIntent::ItemsLoaded(full_items(n)))
}

#[test]
fn list_length_is_min_of_response_and_ten() {
    for n in 0..=25 {
        let state = HomeReducer::reduce(
            HomeScreenState::new("Alex"),
            HomeIntent::ItemsLoaded(full_items(n)),
        );
        assert_eq!(state.items.len(), n.min(MAX_ITEMS), "response of {n}");
    }
}

#[test]
fn truncation_keeps_the_first_items_in_order() {
    let state = loaded(15, 3);
    let ids: Vec<&str> = state.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    assert_eq!(state.feed, FeedStatus::Loaded);
}

#[test]
fn failed_fetch_leaves_list_empty() {
    let state = HomeReducer::reduce(HomeScreenState::new("Alex"), HomeIntent::FetchFailed);
    assert!(state.items.is_empty());
    assert_eq!(state.feed, FeedStatus::Failed);
}

#[test]
fn mount_marks_mounted_only() {
    let state = HomeReducer::reduce(HomeScreenState::new("Alex"), HomeIntent::Mount);
    assert!(state.mounted);
    assert!(state.items.is_empty());
    assert_eq!(state.feed, FeedStatus::Idle);
}

#[test]
fn header_is_verbatim() {
    assert_eq!(HomeScreenState::new("Alex").header_text(), "Welcome, Alex!");
    assert_eq!(
        HomeScreenState::new("  <b>x</b> ").header_text(),
        "Welcome,   <b>x</b> !"
    );
}

#[test]
fn selection_stops_at_both_ends() {
    let mut state = loaded(3, 5);
    state = HomeReducer::reduce(state, HomeIntent::SelectPrevious);
    assert_eq!(state.selected, 0);
    for _ in 0..10 {
        state = HomeReducer::reduce(state, HomeIntent::SelectNext);
    }
    assert_eq!(state.selected, 2);
}

#[test]
fn selection_on_empty_list_is_inert() {
    let mut state = HomeScreenState::new("Alex");
    state = HomeReducer::reduce(state, HomeIntent::SelectNext);
    state = HomeReducer::reduce(state, HomeIntent::ScrollBy(3));
    assert_eq!(state.selected, 0);
    assert_eq!(state.scroll, 0);
}

#[test]
fn viewport_follows_selection() {
    let mut state = loaded(10, 3);
    for _ in 0..4 {
        state = HomeReducer::reduce(state, HomeIntent::SelectNext);
    }
    assert_eq!(state.selected, 4);
    assert_eq!(state.scroll, 2);

    for _ in 0..4 {
        state = HomeReducer::reduce(state, HomeIntent::SelectPrevious);
    }
    assert_eq!(state.selected, 0);
    assert_eq!(state.scroll, 0);
}

#[test]
fn scroll_is_clamped_and_drags_selection() {
    let mut state = loaded(10, 3);
    state = HomeReducer::reduce(state, HomeIntent::ScrollBy(100));
    assert_eq!(state.scroll, 7);
    assert_eq!(state.selected, 7);

    state = HomeReducer::reduce(state, HomeIntent::ScrollBy(-2));
    assert_eq!(state.scroll, 5);
    assert_eq!(state.selected, 7);

    state = HomeReducer::reduce(state, HomeIntent::ScrollBy(-100));
    assert_eq!(state.scroll, 0);
    assert_eq!(state.selected, 2);
}

#[test]
fn select_out_of_range_is_ignored() {
    let state = loaded(3, 3);
    let after = HomeReducer::reduce(state.clone(), HomeIntent::Select(7));
    assert_eq!(after, state);
}

#[test]
fn new_items_reset_position() {
    let mut state = loaded(10, 3);
    state = HomeReducer::reduce(state, HomeIntent::Select(9));
    assert_eq!(state.scroll, 7);
    state = HomeReducer::reduce(state, HomeIntent::ItemsLoaded(full_items(4)));
    assert_eq!(state.selected, 0);
    assert_eq!(state.scroll, 0);
}

#[test]
fn growing_viewport_pulls_scroll_back() {
    let mut state = loaded(10, 3);
    state = HomeReducer::reduce(state, HomeIntent::ScrollBy(7));
    state = HomeReducer::reduce(state, HomeIntent::Resize { viewport_cards: 8 });
    assert_eq!(state.scroll, 2);
}
