use crossterm::style::Color;

use crate::data_fetcher::processors::PlayoffStatus;

// Teletext palette
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn badge_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn score_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

pub fn status_fg(status: PlayoffStatus) -> Color {
    match status {
        PlayoffStatus::Active => Color::AnsiValue(46),
        PlayoffStatus::Advanced => Color::AnsiValue(51),
        PlayoffStatus::Eliminated => Color::AnsiValue(196),
    }
}

/// Extracts the 256-color index from a crossterm color, with a fallback for
/// named or RGB colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
