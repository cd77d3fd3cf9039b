//! Shared state visible to more than one view.

mod counter;

pub use counter::{CounterStore, CounterSubscription};
