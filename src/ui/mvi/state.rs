/// Marker trait for screen state: cloneable, comparable, and holding
/// everything needed to render the view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
