use crate::feed::HealthItem;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    /// The screen became visible.
    Mount,
    ItemsLoaded(Vec<HealthItem>),
    /// The fetch failed. The list is left as it is.
    FetchFailed,
    SelectNext,
    SelectPrevious,
    /// Select a card directly (pointer).
    Select(usize),
    /// Move the viewport by whole cards; negative scrolls up.
    ScrollBy(isize),
    /// How many whole cards fit in the list area.
    Resize { viewport_cards: usize },
}

impl Intent for HomeIntent {}
