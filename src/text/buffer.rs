use std::fmt;

use tracing::trace;

/// Where a [`TextBuffer`] reports its contents after each command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Echo {
    #[default]
    Silent,
    Stdout,
    /// Keeps every reported state, oldest first.
    Capture(Vec<String>),
}

/// The text value edited by [`TextCommand`](super::TextCommand)s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    echo: Echo,
}

impl TextBuffer {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            echo: Echo::Silent,
        }
    }

    #[must_use]
    pub fn with_echo(mut self, echo: Echo) -> Self {
        self.echo = echo;
        self
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// States reported so far when echoing into [`Echo::Capture`]; empty otherwise.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        match &self.echo {
            Echo::Capture(lines) => lines,
            Echo::Silent | Echo::Stdout => &[],
        }
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub(crate) fn emit(&mut self) {
        trace!(text = %self.text, "buffer changed");

        match &mut self.echo {
            Echo::Silent => {}
            Echo::Stdout => println!("{}", self.text),
            Echo::Capture(lines) => lines.push(self.text.clone()),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for TextBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_silent() {
        let mut buffer = TextBuffer::new("abc");
        buffer.emit();

        assert_eq!(buffer.as_str(), "abc");
        assert!(buffer.transcript().is_empty());
    }

    #[test]
    fn test_capture() {
        let mut buffer = TextBuffer::from("ab").with_echo(Echo::Capture(Vec::new()));
        buffer.emit();
        buffer.text_mut().push('c');
        buffer.emit();

        assert_eq!(buffer.transcript(), ["ab", "abc"]);
    }

    #[test]
    fn test_len_chars() {
        let buffer = TextBuffer::new("héllo");
        assert_eq!(buffer.len_chars(), 5);
        assert!(!buffer.is_empty());
        assert!(TextBuffer::default().is_empty());
    }

    #[test]
    fn test_display() {
        let buffer = TextBuffer::new(String::from("Hello World"));
        assert_eq!(buffer.to_string(), "Hello World");
        assert_eq!(buffer.as_ref(), "Hello World");
    }
}
