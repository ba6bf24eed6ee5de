//! Status light row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use fixmon_core::LightBoard;

use crate::theme::{palette, styles};

/// One badge per configured light, colored by its current state.
pub struct LightBoardView<'a> {
    board: &'a LightBoard,
    /// Index of the focused light, if focus is on this row
    focus: Option<usize>,
}

impl<'a> LightBoardView<'a> {
    pub fn new(board: &'a LightBoard) -> Self {
        Self { board, focus: None }
    }

    pub fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }
}

impl Widget for LightBoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Lights");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (index, light) in self.board.lights().iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            if self.focus == Some(index) {
                spans.push(Span::styled("▸", styles::focused()));
            }
            let mut style = styles::light_badge(light.state);
            if light.is_activatable() {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", light.label), style));
        }
        if spans.is_empty() {
            spans.push(Span::styled(
                "no lights",
                Style::default().fg(palette::GROUP_LABEL),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
