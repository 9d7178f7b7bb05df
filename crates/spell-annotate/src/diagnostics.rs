//! Spelling diagnostics data model.
//!
//! Diagnostics are derived editor state: each one marks a single token as
//! misspelled, with a 1-based line/column span, a hover message, and a
//! severity. They are produced only by the annotation engine, replaced
//! wholesale on every pass, and consumed read-only by the fix-action
//! provider and the host marker store.

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics (the default for spelling markers).
    #[default]
    Warning,
    /// Informational diagnostics.
    Information,
    /// Hint diagnostics.
    Hint,
}

/// A positioned range within the document.
///
/// `line` is 1-based; `start_column` is 1-based and inclusive; `end_column`
/// is exclusive. Columns count Unicode scalar values (`char`), not bytes.
/// A cursor is represented as an empty span (`start_column == end_column`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,
    /// 1-based inclusive start column.
    pub start_column: usize,
    /// Exclusive end column.
    pub end_column: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            line,
            start_column,
            end_column,
        }
    }

    /// An empty span at a cursor position.
    pub fn caret(line: usize, column: usize) -> Self {
        Self::new(line, column, column)
    }

    /// Length of the span in characters.
    pub fn len(&self) -> usize {
        self.end_column.saturating_sub(self.start_column)
    }

    /// Returns `true` for cursor (empty) spans.
    pub fn is_empty(&self) -> bool {
        self.start_column >= self.end_column
    }

    /// Returns `true` if `other` lies entirely within this span.
    ///
    /// Both endpoints are treated inclusively for empty `other` spans, so a
    /// cursor sitting at either edge of a marked word still counts as
    /// contained.
    pub fn contains(&self, other: Span) -> bool {
        self.line == other.line
            && self.start_column <= other.start_column
            && other.end_column <= self.end_column
    }
}

/// A single spelling diagnostic.
///
/// Identity is structural: two diagnostics are equal when their word and
/// position (and derived message/severity) agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The misspelled word, as it appears in the document.
    pub word: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based inclusive start column.
    pub start_column: usize,
    /// Exclusive end column.
    pub end_column: usize,
    /// Hover message, built by the session's message builder.
    pub message: String,
    /// Severity configured for the session.
    pub severity: Severity,
}

impl Diagnostic {
    /// The positioned part of this diagnostic.
    pub fn span(&self) -> Span {
        Span::new(self.line, self.start_column, self.end_column)
    }
}
