//! The seam between the annotation pipeline and the host editing surface.
//!
//! The pipeline never touches a document model, marker storage, or an undo
//! stack directly; it calls a [`SpellHost`]. Hosts are expected to be cheap
//! to call and non-blocking; all slow work (checking, suggesting) lives on
//! the embedder-supplied side, not here.
//!
//! Marker ownership is keyed by an explicit per-session [`MarkerHandle`]
//! rather than a shared tag, so two sessions can never silently overwrite
//! each other's markers.

use crate::diagnostics::{Diagnostic, Span};
use crate::options::LanguageSelector;
use std::sync::atomic::{AtomicU64, Ordering};

/// A per-session key into the host marker store.
///
/// Handles are process-unique; every session allocates a fresh one at
/// attach time and uses it for all marker operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerHandle(u64);

static NEXT_MARKER_HANDLE: AtomicU64 = AtomicU64::new(1);

impl MarkerHandle {
    /// Allocate a fresh, process-unique handle.
    ///
    /// Sessions call this at attach time; host-side tests may allocate
    /// their own.
    pub fn next() -> Self {
        Self(NEXT_MARKER_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    /// The numeric id, for host-side keying and logging.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Identifies a host resource handed out by [`SpellHost::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegistrationId(pub u64);

/// The fixed command identifiers a session registers with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Replace a diagnostic's range with a chosen suggestion.
    ApplySuggestion,
    /// Ignore a word for this session.
    Ignore,
    /// Add a word to the personal dictionary.
    AddWord,
}

impl CommandId {
    /// The wire identifier the host's command palette dispatches on.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::ApplySuggestion => "correction-apply",
            CommandId::Ignore => "ignore",
            CommandId::AddWord => "add-word",
        }
    }
}

/// A host resource requested at session attach time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRegistration {
    /// A command handler for one of the fixed command identifiers.
    Command(CommandId),
    /// The quick-fix provider, scoped to documents matching `selector`.
    FixActionProvider {
        /// Which documents the provider activates for.
        selector: LanguageSelector,
    },
}

/// Services the host editing surface provides to the pipeline.
///
/// Contract notes:
/// - `publish_markers` replaces the handle's entire marker list in one
///   atomic call; there is no incremental add/remove.
/// - `markers` returns the latest published set for the handle; the
///   fix-action provider always reads through here, never a private copy.
/// - `release` of an already-released (or unknown) id must be a no-op;
///   session teardown relies on this being safe to repeat.
/// - `push_undo_stop` followed by `replace_range` is the apply-suggestion
///   edit path: one undo checkpoint, then one edit.
pub trait SpellHost: Send + Sync {
    /// Full text of the attached document, or `None` when no document is
    /// attached to the editor.
    fn document_text(&self) -> Option<String>;

    /// Atomically replace all markers owned by `handle`.
    fn publish_markers(&self, handle: MarkerHandle, diagnostics: Vec<Diagnostic>);

    /// The latest marker list published for `handle`.
    fn markers(&self, handle: MarkerHandle) -> Vec<Diagnostic>;

    /// Remove every marker owned by `handle`.
    fn clear_markers(&self, handle: MarkerHandle);

    /// Push an undo checkpoint onto the host's undo stack.
    fn push_undo_stop(&self);

    /// Replace the text at `span` with `text`.
    fn replace_range(&self, span: Span, text: &str);

    /// Register a command handler or the fix-action provider.
    fn register(&self, registration: HostRegistration) -> RegistrationId;

    /// Release a registration. Releasing twice is a no-op.
    fn release(&self, id: RegistrationId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_handles_are_unique() {
        let a = MarkerHandle::next();
        let b = MarkerHandle::next();
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn command_identifiers_are_fixed() {
        assert_eq!(CommandId::ApplySuggestion.as_str(), "correction-apply");
        assert_eq!(CommandId::Ignore.as_str(), "ignore");
        assert_eq!(CommandId::AddWord.as_str(), "add-word");
    }
}
