//! Immutable session configuration.

use crate::adapter::{Checker, Suggester, WordSink};
use crate::diagnostics::Severity;
use crate::messages::{MessageBuilder, default_message_builder};
use crate::tokenize::{AsciiTokenizer, Tokenizer};
use std::sync::Arc;

/// Restricts which documents a session's fix-action provider activates for.
///
/// The selector is passed through to the host with the provider
/// registration; the host consults [`LanguageSelector::matches`] against a
/// document's language identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageSelector {
    /// Activate for every document (the default).
    #[default]
    All,
    /// Activate only for documents whose language id is listed.
    Languages(Vec<String>),
}

impl LanguageSelector {
    /// Returns `true` if a document with `language_id` is in scope.
    pub fn matches(&self, language_id: &str) -> bool {
        match self {
            LanguageSelector::All => true,
            LanguageSelector::Languages(ids) => ids.iter().any(|id| id == language_id),
        }
    }
}

/// Configuration captured once at session start.
///
/// `check` and `suggest` are mandatory. `ignore` and `add_word` are optional
/// capabilities: when absent, the corresponding command registration and fix
/// action do not exist at all. Everything else has a default.
#[derive(Clone)]
pub struct SpellOptions {
    /// Classifies tokens; required.
    pub check: Arc<dyn Checker>,
    /// Produces replacement candidates; required. Order is preserved.
    pub suggest: Arc<dyn Suggester>,
    /// Word extraction; defaults to [`AsciiTokenizer`].
    pub tokenizer: Arc<dyn Tokenizer>,
    /// Enables the "ignore" action when present.
    pub ignore: Option<Arc<dyn WordSink>>,
    /// Enables the "add to dictionary" action when present.
    pub add_word: Option<Arc<dyn WordSink>>,
    /// Severity for published diagnostics; defaults to warning.
    pub severity: Severity,
    /// Scope of the fix-action provider registration; defaults to all.
    pub selector: LanguageSelector,
    /// Builds all user-facing label text.
    pub message_builder: MessageBuilder,
}

impl SpellOptions {
    /// Build options with the mandatory checker and suggester; everything
    /// else takes its default.
    pub fn new(check: impl Checker + 'static, suggest: impl Suggester + 'static) -> Self {
        Self {
            check: Arc::new(check),
            suggest: Arc::new(suggest),
            tokenizer: Arc::new(AsciiTokenizer),
            ignore: None,
            add_word: None,
            severity: Severity::default(),
            selector: LanguageSelector::default(),
            message_builder: Arc::new(default_message_builder),
        }
    }

    /// Replace the default tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    /// Enable the "ignore" capability.
    pub fn with_ignore(mut self, ignore: impl WordSink + 'static) -> Self {
        self.ignore = Some(Arc::new(ignore));
        self
    }

    /// Enable the "add to dictionary" capability.
    pub fn with_add_word(mut self, add_word: impl WordSink + 'static) -> Self {
        self.add_word = Some(Arc::new(add_word));
        self
    }

    /// Set the diagnostic severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Scope the fix-action provider to certain documents.
    pub fn with_selector(mut self, selector: LanguageSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Replace the default message builder.
    pub fn with_message_builder(
        mut self,
        builder: impl Fn(&crate::messages::Message<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.message_builder = Arc::new(builder);
        self
    }
}
