use crate::feed::HealthItem;
use crate::ui::mvi::UiState;

pub use crate::feed::MAX_ITEMS;

/// Where the one fetch stands. Kept for the controller and the logs; the
/// screen deliberately renders no loading or error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeScreenState {
    pub username: String,
    pub items: Vec<HealthItem>,
    pub selected: usize,
    /// Index of the first visible card.
    pub scroll: usize,
    pub viewport_cards: usize,
    pub mounted: bool,
    pub feed: FeedStatus,
}

impl UiState for HomeScreenState {}

impl HomeScreenState {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            viewport_cards: 1,
            ..Self::default()
        }
    }

    /// The header line, verbatim.
    pub fn header_text(&self) -> String {
        format!("Welcome, {}!", self.username)
    }

    pub fn selected_item(&self) -> Option<&HealthItem> {
        self.items.get(self.selected)
    }
}
