//! Host-side line abstraction and the columnized result.

/// A single log line as provided by the host.
///
/// Only [`full_line`](Self::full_line) is read by column schemes; the line
/// number is carried for consumers of [`ColumnizedLine`].
pub trait LogLine {
    /// The complete raw text of the line, without the line terminator.
    fn full_line(&self) -> &str;

    /// Zero-based position of the line in its source. `0` when unknown.
    fn line_number(&self) -> usize {
        0
    }
}

impl LogLine for str {
    fn full_line(&self) -> &str {
        self
    }
}

impl LogLine for String {
    fn full_line(&self) -> &str {
        self
    }
}

/// A line paired with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub number: usize,
    pub text: String,
}

impl NumberedLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

impl LogLine for NumberedLine {
    fn full_line(&self) -> &str {
        &self.text
    }

    fn line_number(&self) -> usize {
        self.number
    }
}

/// Which path produced a [`ColumnizedLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The line was a JSON object and was projected onto the schema.
    Json,
    /// The line was not a JSON object; raw text sits in the last column.
    Raw,
}

/// The columns resolved for one line, in schema order.
#[derive(Debug)]
pub struct ColumnizedLine<'a, L: LogLine + ?Sized> {
    line: &'a L,
    kind: LineKind,
    columns: Vec<String>,
}

impl<'a, L: LogLine + ?Sized> ColumnizedLine<'a, L> {
    pub(crate) fn new(line: &'a L, kind: LineKind, columns: Vec<String>) -> Self {
        Self {
            line,
            kind,
            columns,
        }
    }

    /// The originating line.
    pub fn line(&self) -> &'a L {
        self.line
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    pub fn into_columns(self) -> Vec<String> {
        self.columns
    }
}
