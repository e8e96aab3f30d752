//! Screen: a frame of styled text lines.
//!
//! Pure data, no I/O. The view builds one of these per frame and the
//! renderer flushes it to the terminal.

/// Foreground color of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    #[default]
    Plain,
    Highlight,
    Danger,
}

/// Style applied to a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub color: TextColor,
    pub bold: bool,
    pub dim: bool,
}

impl TextStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn dim() -> Self {
        Self {
            dim: true,
            ..Self::default()
        }
    }

    pub fn colored(color: TextColor) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

/// A run of characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::default())
    }
}

/// One terminal row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Concatenated text with styles stripped (used by tests).
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A full frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    lines: Vec<Line>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.lines.push(Line::plain(text));
    }

    pub fn push_empty(&mut self) {
        self.lines.push(Line::empty());
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whole frame as unstyled text (used by tests).
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
