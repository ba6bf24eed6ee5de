//! Scrolling log panel
//!
//! Renders the tail of a [`LogBuffer`]: lines are wrapped to the panel width
//! and the view always follows the newest content, matching the
//! append-and-scroll behavior of the buffer itself.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use fixmon_core::LogBuffer;

use crate::theme::{palette, styles};

/// Tail-following view over one log buffer.
pub struct LogView<'a> {
    buffer: &'a LogBuffer,
    title: &'a str,
    /// Marks a panel whose stream has ended
    closed: bool,
}

impl<'a> LogView<'a> {
    pub fn new(buffer: &'a LogBuffer, title: &'a str) -> Self {
        Self {
            buffer,
            title,
            closed: false,
        }
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }
}

impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.closed {
            format!("{} (closed)", self.title)
        } else {
            self.title.to_string()
        };
        let mut block = styles::panel_block(&title);
        if self.closed {
            block = block.title_style(Style::default().fg(palette::CLOSED_TAG));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = wrapped_tail(
            self.buffer,
            inner.width as usize,
            inner.height as usize,
        );
        let lines: Vec<Line> = rows
            .into_iter()
            .map(|row| Line::styled(row, Style::default().fg(palette::LOG_TEXT)))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Wrap buffer lines to `width` columns and keep the trailing `height` rows.
fn wrapped_tail(buffer: &LogBuffer, width: usize, height: usize) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut rows: Vec<String> = Vec::new();
    for line in buffer.lines() {
        if line.is_empty() {
            rows.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut cols = 0;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if cols + w > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                cols = 0;
            }
            current.push(ch);
            cols += w;
        }
        rows.push(current);
    }

    let skip = rows.len().saturating_sub(height);
    rows.split_off(skip)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> LogBuffer {
        let mut buf = LogBuffer::new();
        buf.append(text);
        buf
    }

    #[test]
    fn test_short_content_kept_whole() {
        let buf = buffer("one\ntwo");
        assert_eq!(wrapped_tail(&buf, 10, 5), vec!["one", "two"]);
    }

    #[test]
    fn test_long_line_wraps_to_width() {
        let buf = buffer("abcdefghij");
        assert_eq!(wrapped_tail(&buf, 4, 10), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_tail_follows_newest_rows() {
        let buf = buffer("1\n2\n3\n4\n5");
        assert_eq!(wrapped_tail(&buf, 10, 2), vec!["4", "5"]);
    }

    #[test]
    fn test_trailing_newline_yields_empty_row() {
        let buf = buffer("line\n");
        assert_eq!(wrapped_tail(&buf, 10, 5), vec!["line", ""]);
    }

    #[test]
    fn test_wide_chars_wrap_by_columns() {
        // Each CJK char is two columns; three fit in six columns.
        let buf = buffer("日本語です");
        assert_eq!(wrapped_tail(&buf, 6, 5), vec!["日本語", "です"]);
    }

    #[test]
    fn test_zero_dimensions() {
        let buf = buffer("text");
        assert!(wrapped_tail(&buf, 0, 5).is_empty());
        assert!(wrapped_tail(&buf, 5, 0).is_empty());
    }
}
