//! Control command buttons

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use fixmon_app::{ButtonKind, ControlButton};

use crate::theme::{palette, styles};

/// One button per flattened control; group members carry their group label.
pub struct ControlPanel<'a> {
    buttons: &'a [ControlButton],
    /// Index of the focused button, if focus is on this row
    focus: Option<usize>,
}

impl<'a> ControlPanel<'a> {
    pub fn new(buttons: &'a [ControlButton]) -> Self {
        Self {
            buttons,
            focus: None,
        }
    }

    pub fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }
}

impl Widget for ControlPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Controls");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        let mut last_group: Option<&str> = None;
        for (index, button) in self.buttons.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }

            // Label the group once, before its first member
            if let Some(group) = button.group.as_deref() {
                if last_group != Some(group) {
                    spans.push(Span::styled(
                        format!("{group} ▸ "),
                        Style::default().fg(palette::GROUP_LABEL),
                    ));
                }
            }
            last_group = button.group.as_deref();

            let style = if self.focus == Some(index) {
                styles::focused()
            } else {
                match &button.kind {
                    ButtonKind::Toggle { active: true, .. } => styles::button_active(),
                    _ => styles::button(),
                }
            };
            let marker = match &button.kind {
                ButtonKind::Toggle { active, .. } => {
                    if *active {
                        "● "
                    } else {
                        "○ "
                    }
                }
                ButtonKind::Command { .. } => "",
            };
            spans.push(Span::styled(format!("[ {}{} ]", marker, button.label), style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
