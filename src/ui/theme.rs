use ratatui::style::Color;

pub const BRAND_YELLOW: Color = Color::Rgb(0xff, 0xc5, 0x10);
pub const BRAND_RED: Color = Color::Rgb(0xd5, 0x00, 0x00);
pub const BADGE_TEXT: Color = Color::White;
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Parses `#RRGGBB`, falling back to the border colour.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return GLOBAL_BORDER;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        Err(_) => GLOBAL_BORDER,
    }
}
