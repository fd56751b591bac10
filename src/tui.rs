use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::fmt::money;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const DEBT_STYLE: Style = Style::new().fg(Color::Rgb(235, 110, 90));

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

/// Outstanding balances are debt; one color conveys that everywhere.
pub fn money_span(amount: f64) -> Span<'static> {
    Span::styled(money(amount), DEBT_STYLE)
}

/// Wrap text to a given width. Returns (wrapped_string, line_count).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let lines = wrapped.lines().count().max(1) as u16;
    (wrapped, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_counts_lines() {
        let (wrapped, lines) = wrap_text("COMERCIO DE ALIMENTOS SAO JORGE LTDA", 12);
        assert!(lines > 1);
        assert!(wrapped.lines().all(|l| l.len() <= 12));
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let (wrapped, lines) = wrap_text("ACME", 0);
        assert_eq!(wrapped, "ACME");
        assert_eq!(lines, 1);
    }
}
