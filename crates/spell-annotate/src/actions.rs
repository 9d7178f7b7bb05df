//! The fix-action provider: contextual remedies for the diagnostic under a
//! cursor or selection.
//!
//! Given a query range, the provider looks up the session's *latest
//! published* diagnostics in the host marker store, finds the first one
//! containing the query, and builds the action list: every suggestion (in
//! suggester order), then "ignore" and "add word" when those capabilities
//! are configured. The suggester await is guarded by an external
//! cancellation token; once cancellation (or disposal) is observed, no
//! actions are emitted.

use crate::diagnostics::Span;
use crate::messages::Message;
use crate::session::{SessionCommand, Shared};
use tokio_util::sync::CancellationToken;

/// How an action is advertised to the host's action/command-palette UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// A quick fix attached to a diagnostic.
    QuickFix,
}

/// A user-invocable remedy for one diagnostic.
///
/// `command` is the typed payload the host delivers back to
/// [`SpellSession::handle_command`](crate::session::SpellSession::handle_command)
/// when the user picks the action.
#[derive(Debug, Clone, PartialEq)]
pub struct FixAction {
    /// Always [`ActionKind::QuickFix`] for spelling remedies.
    pub kind: ActionKind,
    /// User-facing label, built by the session's message builder.
    pub title: String,
    /// The command invocation this action carries.
    pub command: SessionCommand,
}

/// Compute the fix actions available at `query`.
pub(crate) async fn fix_actions(
    shared: &Shared,
    query: Span,
    cancel: &CancellationToken,
) -> Vec<FixAction> {
    if shared.is_disposed() {
        return Vec::new();
    }

    // Always the latest published set, never a private copy.
    let published = shared.host.markers(shared.handle);
    let Some(diagnostic) = published.iter().find(|d| d.span().contains(query)) else {
        return Vec::new();
    };

    let suggestions = shared.options.suggest.suggest(&diagnostic.word).await;
    if cancel.is_cancelled() || shared.is_disposed() {
        tracing::trace!(word = %diagnostic.word, "fix-action query cancelled");
        return Vec::new();
    }

    let builder = &shared.options.message_builder;
    let mut actions = Vec::with_capacity(suggestions.len() + 2);

    for suggestion in suggestions {
        let title = builder(&Message::ApplySuggestion {
            word: &diagnostic.word,
            suggestion: &suggestion,
        });
        actions.push(FixAction {
            kind: ActionKind::QuickFix,
            title,
            command: SessionCommand::ApplySuggestion {
                span: diagnostic.span(),
                suggestion,
            },
        });
    }

    if shared.options.ignore.is_some() {
        actions.push(FixAction {
            kind: ActionKind::QuickFix,
            title: builder(&Message::Ignore {
                word: &diagnostic.word,
            }),
            command: SessionCommand::Ignore {
                word: diagnostic.word.clone(),
            },
        });
    }

    if shared.options.add_word.is_some() {
        actions.push(FixAction {
            kind: ActionKind::QuickFix,
            title: builder(&Message::AddWord {
                word: &diagnostic.word,
            }),
            command: SessionCommand::AddWord {
                word: diagnostic.word.clone(),
            },
        });
    }

    actions
}
