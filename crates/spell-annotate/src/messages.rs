//! User-facing label text for diagnostics and fix actions.
//!
//! All text shown to the user flows through a single [`MessageBuilder`], so
//! embedders can localize or restyle every label by supplying one function.
//! Four message kinds exist, one per surface: the diagnostic hover, the two
//! capability actions, and the apply-suggestion action.

use std::sync::Arc;

/// A request for one piece of user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    /// Hover text for a diagnostic marking `word` as misspelled.
    Hover {
        /// The misspelled word.
        word: &'a str,
    },
    /// Label for the "ignore this word" action.
    Ignore {
        /// The word to ignore.
        word: &'a str,
    },
    /// Label for the "add to dictionary" action.
    AddWord {
        /// The word to add.
        word: &'a str,
    },
    /// Label for one "apply suggestion" action.
    ApplySuggestion {
        /// The misspelled word being replaced.
        word: &'a str,
        /// The replacement candidate.
        suggestion: &'a str,
    },
}

/// Builds user-facing text for a [`Message`].
pub type MessageBuilder = Arc<dyn Fn(&Message<'_>) -> String + Send + Sync>;

/// The default English labels.
pub fn default_message_builder(message: &Message<'_>) -> String {
    match message {
        Message::Hover { word } => format!("\"{word}\": Unknown word."),
        Message::Ignore { word } => format!("Ignore \"{word}\""),
        Message::AddWord { word } => format!("Add \"{word}\" to Dictionary"),
        Message::ApplySuggestion { suggestion, .. } => format!("Replace with \"{suggestion}\""),
    }
}
