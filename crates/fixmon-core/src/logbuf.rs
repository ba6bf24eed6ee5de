//! Bounded append-only log buffers
//!
//! Every log panel (the main command stream and each aux tail) keeps its text
//! in a [`LogBuffer`]: pure concatenated text, no timestamps, no structured
//! entries. On overflow the buffer retains exactly the trailing cap-sized
//! window; oldest content is dropped, not summarized.

/// Capacity of a log panel buffer, in characters.
pub const LOG_BUF_SIZE: usize = 8192;

/// An append-only text buffer capped at a trailing window.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    text: String,
    cap: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_cap(LOG_BUF_SIZE)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            text: String::new(),
            cap,
        }
    }

    /// Append a chunk, then truncate to the trailing `cap` characters.
    ///
    /// Truncation counts characters, not bytes, and always cuts on a char
    /// boundary, so multi-byte output from the agent cannot corrupt the
    /// buffer.
    pub fn append(&mut self, chunk: &str) {
        self.text.push_str(chunk);

        // Byte length bounds char count; nothing to do while under the cap.
        if self.text.len() <= self.cap {
            return;
        }
        let total = self.text.chars().count();
        if total > self.cap {
            let drop = total - self.cap;
            let cut = self
                .text
                .char_indices()
                .nth(drop)
                .map(|(idx, _)| idx)
                .unwrap_or(self.text.len());
            self.text.drain(..cut);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lines for display; newline substitution happens at render time.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_concatenates() {
        let mut buf = LogBuffer::new();
        buf.append("hello ");
        buf.append("world");
        assert_eq!(buf.as_str(), "hello world");
    }

    #[test]
    fn test_never_exceeds_cap() {
        let mut buf = LogBuffer::with_cap(16);
        for _ in 0..100 {
            buf.append("0123456789");
            assert!(buf.char_len() <= 16);
        }
    }

    #[test]
    fn test_overflow_keeps_trailing_window() {
        let mut buf = LogBuffer::with_cap(8);
        buf.append("abcdefgh");
        buf.append("ij");
        // Exactly the trailing 8 characters of the full concatenation.
        assert_eq!(buf.as_str(), "cdefghij");
    }

    #[test]
    fn test_single_oversized_chunk() {
        let mut buf = LogBuffer::with_cap(4);
        buf.append("0123456789");
        assert_eq!(buf.as_str(), "6789");
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let mut buf = LogBuffer::with_cap(4);
        // Six two-byte characters; the trailing four must survive intact.
        buf.append("éééééé");
        assert_eq!(buf.as_str(), "éééé");
        assert_eq!(buf.char_len(), 4);
    }

    #[test]
    fn test_truncation_cut_on_char_boundary() {
        let mut buf = LogBuffer::with_cap(5);
        buf.append("ab");
        buf.append("日本語です");
        assert_eq!(buf.char_len(), 5);
        assert_eq!(buf.as_str(), "日本語です");
    }

    #[test]
    fn test_lines_split_on_newline() {
        let mut buf = LogBuffer::new();
        buf.append("one\ntwo\nthree");
        let lines: Vec<_> = buf.lines().collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_buffer() {
        let buf = LogBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.cap(), LOG_BUF_SIZE);
        assert_eq!(buf.lines().count(), 1); // a single empty line
    }

    #[test]
    fn test_default_cap_is_8192() {
        let mut buf = LogBuffer::new();
        let chunk = "x".repeat(3000);
        buf.append(&chunk);
        buf.append(&chunk);
        buf.append(&chunk);
        assert_eq!(buf.char_len(), 8192);
    }
}
