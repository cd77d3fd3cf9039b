//! The item list screen: state, intents, reducer, and card presentation.

mod card;
mod intent;
mod reducer;
mod state;

pub use card::{
    CardView, DESCRIPTION_FALLBACK, DESCRIPTION_MAX_LINES, CATEGORY_FALLBACK, IMAGE_FALLBACK,
};
pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::{FeedStatus, HomeScreenState, MAX_ITEMS};
