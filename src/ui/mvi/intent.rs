/// Marker trait for intents: user actions (taps, keys) and system events
/// (fetch results, resizes).
pub trait Intent: Send + 'static {}
