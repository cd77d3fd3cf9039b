use crate::feed::HealthItem;
use crate::ui::text::wrap_truncated;

pub const IMAGE_FALLBACK: &str = "https://via.placeholder.com/150";
pub const CATEGORY_FALLBACK: &str = "General";
pub const DESCRIPTION_FALLBACK: &str = "No description available";
/// Descriptions are cut to this many rows.
pub const DESCRIPTION_MAX_LINES: usize = 2;

/// What a card shows for one item, with substitutes for absent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    pub title: &'a str,
    pub image_url: &'a str,
    pub category: &'a str,
    pub description: &'a str,
}

impl<'a> CardView<'a> {
    pub fn from_item(item: &'a HealthItem) -> Self {
        Self {
            title: &item.title,
            image_url: item.image.as_deref().unwrap_or(IMAGE_FALLBACK),
            category: item.category.as_deref().unwrap_or(CATEGORY_FALLBACK),
            description: item.description.as_deref().unwrap_or(DESCRIPTION_FALLBACK),
        }
    }

    /// Description rows for a card `width` columns wide (inside borders).
    pub fn description_lines(&self, width: usize) -> Vec<String> {
        wrap_truncated(self.description, width, DESCRIPTION_MAX_LINES)
    }
}
