use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const LINK_BG: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const HEADING: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const BODY_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const OVERLAY_BG: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const SPINNER_TRACK: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
