use ratatui::layout::Rect;

use crate::feed::HealthItem;
use crate::scope::{MountScope, ScreenLifetime};
use crate::store::{CounterStore, CounterSubscription};
use crate::ui::home::{FeedStatus, HomeIntent, HomeReducer, HomeScreenState};
use crate::ui::layout::{body_rect, card_at, viewport_cards};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Controller for the item list screen.
///
/// Owns the screen state and its lifetime; shares the counter with whoever
/// else holds the store.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Screen state (MVI pattern).
    home: HomeScreenState,
    store: CounterStore,
    /// The badge's subscription to the shared counter.
    counter: CounterSubscription,
    lifetime: ScreenLifetime,
}

impl App {
    pub fn new(username: impl Into<String>, store: CounterStore) -> Self {
        let counter = store.subscribe();
        Self {
            should_quit: false,
            size: None,
            home: HomeScreenState::new(username),
            store,
            counter,
            lifetime: ScreenLifetime::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn home(&self) -> &HomeScreenState {
        &self.home
    }

    pub fn items(&self) -> &[HealthItem] {
        &self.home.items
    }

    pub fn header_text(&self) -> String {
        self.home.header_text()
    }

    pub fn feed_status(&self) -> FeedStatus {
        self.home.feed
    }

    /// Value shown on the badge.
    pub fn click_count(&self) -> u64 {
        self.counter.current()
    }

    /// True (once) after the counter moved; the caller should redraw.
    pub fn badge_changed(&mut self) -> bool {
        if self.counter.has_changed() {
            self.counter.mark_seen();
            return true;
        }
        false
    }

    /// Mount the screen. The first call returns the scope the screen's fetch
    /// runs under; later calls return `None`, so there is one fetch per mount.
    pub fn mount(&mut self) -> Option<MountScope> {
        if self.home.mounted || self.lifetime.is_unmounted() {
            return None;
        }
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::Mount);
        Some(self.lifetime.scope())
    }

    /// Tear the screen down. Pending work started under its scope will not
    /// report back.
    pub fn unmount(&mut self) {
        self.lifetime.unmount();
    }

    pub fn on_items_loaded(&mut self, items: Vec<HealthItem>) {
        if self.lifetime.is_unmounted() {
            return;
        }
        let received = items.len();
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::ItemsLoaded(items));
        tracing::info!(received, shown = self.home.items.len(), "Items loaded");
    }

    pub fn on_fetch_failed(&mut self) {
        if self.lifetime.is_unmounted() {
            return;
        }
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::FetchFailed);
    }

    /// Tap the card at `index`. Returns false if no such card is rendered.
    pub fn tap_card(&mut self, index: usize) -> bool {
        if index >= self.home.items.len() {
            return false;
        }
        self.store.increment_click();
        tracing::debug!(
            index,
            id = %self.home.items[index].id,
            count = self.store.click_count(),
            "Card tapped"
        );
        true
    }

    pub fn tap_selected(&mut self) -> bool {
        self.tap_card(self.home.selected)
    }

    pub fn select_next(&mut self) {
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::SelectNext);
    }

    pub fn select_previous(&mut self) {
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::SelectPrevious);
    }

    pub fn scroll_by(&mut self, cards: isize) {
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::ScrollBy(cards));
    }

    pub fn page_size(&self) -> usize {
        self.home.viewport_cards
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let viewport_cards = viewport_cards(self.body());
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::Resize { viewport_cards });
    }

    /// Pointer press at screen cell `(x, y)`: select and tap the card under
    /// it. Returns true if a card was tapped.
    pub fn on_click(&mut self, x: u16, y: u16) -> bool {
        let hit = card_at(
            self.body(),
            self.home.items.len(),
            self.home.scroll,
            self.click_count(),
            x,
            y,
        );
        let Some(index) = hit else {
            return false;
        };
        dispatch_mvi!(self, home, HomeReducer, HomeIntent::Select(index));
        self.tap_card(index)
    }

    fn body(&self) -> Rect {
        let (width, height) = self.size.unwrap_or((0, 0));
        body_rect(Rect::new(0, 0, width, height))
    }
}
