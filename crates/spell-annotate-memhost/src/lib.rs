//! `spell-annotate-memhost` - In-memory [`SpellHost`] implementation.
//!
//! A complete, self-contained host surface for `spell-annotate`: a single
//! optional document, a marker store keyed by [`MarkerHandle`], a
//! registration ledger (double-release is a no-op, per the host contract),
//! and an undo-stop/edit log. `replace_range` really splices the document,
//! so command round-trips can be tested end to end.
//!
//! Intended for tests and as embedding documentation; real hosts adapt an
//! actual editor surface instead.

use spell_annotate::{
    CommandId, Diagnostic, HostRegistration, MarkerHandle, RegistrationId, Span, SpellHost,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One entry in the host's edit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEdit {
    /// An undo checkpoint was pushed.
    UndoStop,
    /// Text at `span` was replaced with `text`.
    Replace {
        /// The replaced range.
        span: Span,
        /// The replacement text.
        text: String,
    },
}

/// An in-memory editing surface.
#[derive(Default)]
pub struct InMemoryHost {
    document: Mutex<Option<String>>,
    markers: Mutex<HashMap<MarkerHandle, Vec<Diagnostic>>>,
    registrations: Mutex<HashMap<RegistrationId, HostRegistration>>,
    edits: Mutex<Vec<HostEdit>>,
    next_registration: AtomicU64,
    publish_calls: AtomicU64,
    clear_calls: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn byte_at_char(line: &str, char_offset: usize) -> usize {
    line.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(line.len())
}

impl InMemoryHost {
    /// An empty host with no document attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with `text` as the attached document.
    pub fn with_document(text: &str) -> Self {
        let host = Self::new();
        host.set_document(text);
        host
    }

    /// Attach (or replace) the document.
    pub fn set_document(&self, text: &str) {
        *lock(&self.document) = Some(text.to_string());
    }

    /// Detach the document, leaving the editor empty.
    pub fn detach_document(&self) {
        *lock(&self.document) = None;
    }

    /// Current document text, if attached.
    pub fn document(&self) -> Option<String> {
        lock(&self.document).clone()
    }

    /// Markers currently published under `handle`.
    pub fn published(&self, handle: MarkerHandle) -> Vec<Diagnostic> {
        lock(&self.markers).get(&handle).cloned().unwrap_or_default()
    }

    /// Number of `publish_markers` calls seen so far.
    pub fn publish_count(&self) -> u64 {
        self.publish_calls.load(Ordering::SeqCst)
    }

    /// Number of `clear_markers` calls seen so far.
    pub fn clear_count(&self) -> u64 {
        self.clear_calls.load(Ordering::SeqCst)
    }

    /// Live (unreleased) registrations.
    pub fn registrations(&self) -> Vec<HostRegistration> {
        lock(&self.registrations).values().cloned().collect()
    }

    /// Number of live registrations.
    pub fn registration_count(&self) -> usize {
        lock(&self.registrations).len()
    }

    /// Whether a command handler for `id` is currently registered.
    pub fn has_command(&self, id: CommandId) -> bool {
        lock(&self.registrations)
            .values()
            .any(|r| matches!(r, HostRegistration::Command(c) if *c == id))
    }

    /// The selector of the registered fix-action provider, if any.
    pub fn provider_selector(&self) -> Option<spell_annotate::LanguageSelector> {
        lock(&self.registrations).values().find_map(|r| match r {
            HostRegistration::FixActionProvider { selector } => Some(selector.clone()),
            _ => None,
        })
    }

    /// The undo-stop/edit log, in order.
    pub fn edits(&self) -> Vec<HostEdit> {
        lock(&self.edits).clone()
    }
}

impl SpellHost for InMemoryHost {
    fn document_text(&self) -> Option<String> {
        lock(&self.document).clone()
    }

    fn publish_markers(&self, handle: MarkerHandle, diagnostics: Vec<Diagnostic>) {
        self.publish_calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.markers).insert(handle, diagnostics);
    }

    fn markers(&self, handle: MarkerHandle) -> Vec<Diagnostic> {
        self.published(handle)
    }

    fn clear_markers(&self, handle: MarkerHandle) {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.markers).remove(&handle);
    }

    fn push_undo_stop(&self) {
        lock(&self.edits).push(HostEdit::UndoStop);
    }

    fn replace_range(&self, span: Span, text: &str) {
        lock(&self.edits).push(HostEdit::Replace {
            span,
            text: text.to_string(),
        });

        let mut document = lock(&self.document);
        let Some(content) = document.as_mut() else {
            return;
        };
        if span.line == 0 {
            return;
        }
        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let Some(line) = lines.get_mut(span.line - 1) else {
            return;
        };
        let start = byte_at_char(line, span.start_column.saturating_sub(1));
        let end = byte_at_char(line, span.end_column.saturating_sub(1));
        if start <= end {
            line.replace_range(start..end, text);
            *content = lines.join("\n");
        }
    }

    fn register(&self, registration: HostRegistration) -> RegistrationId {
        let id = RegistrationId(self.next_registration.fetch_add(1, Ordering::SeqCst) + 1);
        lock(&self.registrations).insert(id, registration);
        id
    }

    fn release(&self, id: RegistrationId) {
        // Releasing an already-released registration is a no-op.
        lock(&self.registrations).remove(&id);
    }
}
