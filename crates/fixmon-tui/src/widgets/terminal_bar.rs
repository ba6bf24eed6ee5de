//! Terminal launch buttons

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use fixmon_core::TerminalSpec;

use crate::theme::styles;

/// One button per configured terminal.
pub struct TerminalBar<'a> {
    terminals: &'a [TerminalSpec],
    /// Index of the focused terminal, if focus is on this row
    focus: Option<usize>,
}

impl<'a> TerminalBar<'a> {
    pub fn new(terminals: &'a [TerminalSpec]) -> Self {
        Self {
            terminals,
            focus: None,
        }
    }

    pub fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }
}

impl Widget for TerminalBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Terminals");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (index, term) in self.terminals.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if self.focus == Some(index) {
                styles::focused()
            } else {
                styles::button()
            };
            spans.push(Span::styled(format!("[ {} ]", term.name), style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
