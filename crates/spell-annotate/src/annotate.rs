//! The annotation engine: full-document scans producing bounded
//! diagnostics.
//!
//! A scan walks the document line by line and token by token, awaiting the
//! checker for every token. The disposed token is rechecked after every
//! await, so a session disposed mid-scan abandons the pass without touching
//! the marker store. A completed scan publishes its whole diagnostic list
//! in one call.
//!
//! Overlapping scans are resolved by generation: each scan captures a fresh
//! generation number when it starts, and only the scan holding the current
//! generation is allowed to publish. A slower, earlier scan that finishes
//! after a later one silently discards its result instead of overwriting
//! fresher markers.

use crate::diagnostics::Diagnostic;
use crate::messages::Message;
use crate::session::Shared;

/// Hard cap on diagnostics per pass, matching typical host marker limits.
///
/// Scanning stops at the first line boundary after the accumulated count
/// exceeds this; remaining lines are silently left unchecked.
pub const MAX_DIAGNOSTICS: usize = 500;

/// Re-scan the full document and republish diagnostics.
pub(crate) async fn scan(shared: &Shared) {
    if shared.is_disposed() {
        return;
    }
    let generation = shared.begin_scan();

    // No document attached: silent no-op, not an error.
    let Some(text) = shared.host.document_text() else {
        return;
    };

    let options = &shared.options;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        if diagnostics.len() > MAX_DIAGNOSTICS {
            tracing::debug!(
                count = diagnostics.len(),
                line = line_index + 1,
                "marker capacity exceeded, stopping scan"
            );
            break;
        }
        for token in options.tokenizer.tokenize(line) {
            let correct = options.check.check(token.word).await;
            if shared.is_disposed() {
                tracing::trace!(generation, "scan abandoned: session disposed");
                return;
            }
            if !correct {
                let word_chars = token.word.chars().count();
                let message = (options.message_builder)(&Message::Hover { word: token.word });
                diagnostics.push(Diagnostic {
                    word: token.word.to_string(),
                    line: line_index + 1,
                    start_column: token.offset + 1,
                    end_column: token.offset + 1 + word_chars,
                    message,
                    severity: options.severity,
                });
            }
        }
    }

    if !shared.is_current_scan(generation) {
        tracing::trace!(generation, "stale scan result discarded");
        return;
    }
    if shared.is_disposed() {
        return;
    }

    tracing::debug!(
        generation,
        count = diagnostics.len(),
        handle = shared.handle.id(),
        "publishing diagnostics"
    );
    shared.host.publish_markers(shared.handle, diagnostics);
}
