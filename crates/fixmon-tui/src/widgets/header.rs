//! Header bar with the machine identifier and key hints

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Longest machine id rendered before truncation.
const MID_WIDTH: usize = 60;

/// Main header showing the fixture's machine id and keybindings
pub struct Header<'a> {
    mid: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(mid: &'a str) -> Self {
        Self { mid }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Fixture");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(
                abbr(self.mid, MID_WIDTH),
                Style::default()
                    .fg(palette::TITLE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Tab:focus  Enter:activate  q:quit",
                Style::default().fg(palette::GROUP_LABEL),
            ),
        ]);
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Truncate to `max` characters with a trailing ellipsis.
pub fn abbr(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
