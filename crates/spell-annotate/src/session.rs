//! Session lifecycle: host registrations, typed command dispatch, and
//! disposal.
//!
//! One [`SpellSession`] exists per editor attachment. Construction registers
//! the session's commands and its fix-action provider with the host;
//! [`SpellSession::dispose`] clears the session's markers, releases every
//! registration, and cancels the session's disposed token so in-flight work
//! abandons itself at its next suspension point.
//!
//! Command dispatch is message passing: the host delivers a typed
//! [`SessionCommand`] payload to [`SpellSession::handle_command`]; the core
//! never couples to the host's command-palette internals.

use crate::actions::FixAction;
use crate::annotate;
use crate::diagnostics::Span;
use crate::host::{CommandId, HostRegistration, MarkerHandle, RegistrationId, SpellHost};
use crate::options::SpellOptions;
use crate::{actions, lock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// A typed command invocation delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Replace the diagnostic's range with a chosen suggestion.
    ApplySuggestion {
        /// The diagnostic's span at the time the action was produced.
        span: Span,
        /// The replacement text.
        suggestion: String,
    },
    /// Ignore a word via the configured capability, then re-annotate.
    Ignore {
        /// The word to ignore.
        word: String,
    },
    /// Add a word to the dictionary via the configured capability, then
    /// re-annotate.
    AddWord {
        /// The word to add.
        word: String,
    },
}

impl SessionCommand {
    /// The fixed command identifier this payload belongs to.
    pub fn id(&self) -> CommandId {
        match self {
            SessionCommand::ApplySuggestion { .. } => CommandId::ApplySuggestion,
            SessionCommand::Ignore { .. } => CommandId::Ignore,
            SessionCommand::AddWord { .. } => CommandId::AddWord,
        }
    }
}

/// State shared between the session, the annotation engine, and the
/// fix-action provider.
pub(crate) struct Shared {
    pub(crate) host: Arc<dyn SpellHost>,
    pub(crate) options: SpellOptions,
    pub(crate) handle: MarkerHandle,
    disposed: CancellationToken,
    scan_generation: AtomicU64,
}

impl Shared {
    pub(crate) fn is_disposed(&self) -> bool {
        self.disposed.is_cancelled()
    }

    /// Start a new scan and return its generation number.
    pub(crate) fn begin_scan(&self) -> u64 {
        self.scan_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the most recently started scan.
    pub(crate) fn is_current_scan(&self, generation: u64) -> bool {
        self.scan_generation.load(Ordering::SeqCst) == generation
    }
}

/// The live, disposable unit combining annotation state and registered host
/// resources for one editor attachment.
pub struct SpellSession {
    shared: Arc<Shared>,
    registrations: Mutex<Vec<RegistrationId>>,
}

impl SpellSession {
    /// Attach a session to `host` with immutable `options`.
    ///
    /// Registers the apply-suggestion command (always), the ignore and
    /// add-word commands (only when the corresponding capability is
    /// configured), and one fix-action-provider registration scoped by the
    /// options' language selector.
    pub fn attach(host: Arc<dyn SpellHost>, options: SpellOptions) -> Self {
        let handle = MarkerHandle::next();

        let mut registrations =
            vec![host.register(HostRegistration::Command(CommandId::ApplySuggestion))];
        if options.ignore.is_some() {
            registrations.push(host.register(HostRegistration::Command(CommandId::Ignore)));
        }
        if options.add_word.is_some() {
            registrations.push(host.register(HostRegistration::Command(CommandId::AddWord)));
        }
        registrations.push(host.register(HostRegistration::FixActionProvider {
            selector: options.selector.clone(),
        }));

        tracing::debug!(
            handle = handle.id(),
            registrations = registrations.len(),
            "spell session attached"
        );

        Self {
            shared: Arc::new(Shared {
                host,
                options,
                handle,
                disposed: CancellationToken::new(),
                scan_generation: AtomicU64::new(0),
            }),
            registrations: Mutex::new(registrations),
        }
    }

    /// The marker-store key owned by this session.
    pub fn marker_handle(&self) -> MarkerHandle {
        self.shared.handle
    }

    /// Whether [`SpellSession::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.shared.is_disposed()
    }

    /// Re-scan the document and republish diagnostics.
    ///
    /// No-ops when the session is disposed or no document is attached. See
    /// [`annotate`] for cap, ordering, and staleness semantics.
    pub async fn process(&self) {
        annotate::scan(&self.shared).await;
    }

    /// Fix actions for the diagnostic containing `query`, or an empty list.
    ///
    /// `cancel` is the host's query-scoped cancellation signal; once it
    /// fires, no actions are emitted.
    pub async fn fix_actions(&self, query: Span, cancel: &CancellationToken) -> Vec<FixAction> {
        actions::fix_actions(&self.shared, query, cancel).await
    }

    /// Handle a command invocation delivered by the host.
    ///
    /// Accepting "ignore" or "add word" awaits the capability and then
    /// triggers a fresh [`SpellSession::process`] pass, so diagnostics for
    /// the accepted word disappear if the capability updated checker state.
    pub async fn handle_command(&self, command: SessionCommand) {
        if self.shared.is_disposed() {
            return;
        }
        tracing::debug!(command = command.id().as_str(), "dispatching command");
        match command {
            SessionCommand::ApplySuggestion { span, suggestion } => {
                self.shared.host.push_undo_stop();
                self.shared.host.replace_range(span, &suggestion);
            }
            SessionCommand::Ignore { word } => {
                let Some(sink) = self.shared.options.ignore.clone() else {
                    return;
                };
                sink.accept(&word).await;
                if self.shared.is_disposed() {
                    return;
                }
                self.process().await;
            }
            SessionCommand::AddWord { word } => {
                let Some(sink) = self.shared.options.add_word.clone() else {
                    return;
                };
                sink.accept(&word).await;
                if self.shared.is_disposed() {
                    return;
                }
                self.process().await;
            }
        }
    }

    /// Tear the session down.
    ///
    /// Clears this session's markers from the host store, releases every
    /// registration made at attach time, empties the registration set, and
    /// cancels the disposed token. Afterwards [`SpellSession::process`]
    /// no-ops and [`SpellSession::fix_actions`] returns no actions. Running
    /// dispose twice repeats only steps that tolerate repetition.
    pub fn dispose(&self) {
        self.shared.host.clear_markers(self.shared.handle);
        let released = std::mem::take(&mut *lock(&self.registrations));
        for id in released {
            self.shared.host.release(id);
        }
        self.shared.disposed.cancel();
        tracing::debug!(handle = self.shared.handle.id(), "spell session disposed");
    }
}
