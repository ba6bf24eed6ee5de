//! Blocking alert modal
//!
//! Shown over the whole window (path resolution failures); the key handler
//! swallows all input until it is dismissed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Centered modal with a message and a single dismiss hint.
pub struct AlertDialog<'a> {
    message: &'a str,
}

impl<'a> AlertDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Calculate centered modal rect
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_width = (self.message.len() as u16 + 6).clamp(24, 60);
        let modal_height = 7;
        let modal_area = Self::centered_rect(modal_width, modal_height, area);

        // Clear the area behind the modal
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(" Alert ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .style(Style::default().bg(Color::DarkGray));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Dismiss hint
            Constraint::Min(0),    // Rest
        ])
        .split(inner);

        Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .render(chunks[1], buf);

        let hint = Line::from(vec![
            Span::styled("[", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] OK", Style::default().fg(Color::Gray)),
        ]);
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
