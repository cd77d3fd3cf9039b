use ratatui::style::Color;

pub const BRAND_GREEN: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const SCREEN_BACKGROUND: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const CARD_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CARD_BORDER: Color = Color::Rgb(0xbd, 0xbd, 0xbd);
pub const TITLE_TEXT: Color = Color::Rgb(0x21, 0x21, 0x21);
pub const DESCRIPTION_TEXT: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const IMAGE_TEXT: Color = Color::Rgb(0x9e, 0x9e, 0x9e);
pub const TAG_BACKGROUND: Color = Color::Rgb(0xe8, 0xf5, 0xe9);
pub const ON_BRAND: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const FOOTER_TEXT: Color = Color::Rgb(0x61, 0x61, 0x61);
