#![warn(missing_docs)]
//! `spell-annotate` - Headless spell-check annotation pipeline.
//!
//! # Overview
//!
//! This crate annotates free text in a host editing surface with spelling
//! diagnostics and serves contextual fix actions (apply a suggestion,
//! ignore a word, add a word to a personal dictionary). It is headless and
//! host-agnostic: the document model, marker storage, undo stack, and
//! command palette stay on the host side, reached through the
//! [`SpellHost`] trait. The spelling knowledge itself, checker and
//! suggester, is supplied by the embedder through the [`Checker`] and
//! [`Suggester`] traits.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  SpellSession (lifecycle, command dispatch) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Annotation engine        Fix-action query  │  ← process() / fix_actions()
//! ├─────────────────────────────────────────────┤
//! │  Tokenizer + Checker/Suggester adapters     │  ← pluggable seams
//! ├─────────────────────────────────────────────┤
//! │  SpellHost (markers, edits, registrations)  │  ← host surface
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Core guarantees
//!
//! - Diagnostics are bounded: a scan stops at the first line boundary after
//!   [`MAX_DIAGNOSTICS`] accumulated diagnostics.
//! - A scan publishes at most once, atomically; a session disposed while a
//!   scan is awaiting its checker abandons the pass with zero marker-store
//!   mutations.
//! - Overlapping scans cannot stomp each other: only the most recently
//!   started scan may publish (generation check).
//! - Optional capabilities (`ignore`, `add_word`) gate their command
//!   registrations and fix actions entirely; absence means the action does
//!   not exist anywhere.
//!
//! # Quick start
//!
//! ```no_run
//! use spell_annotate::{CheckFn, SuggestFn, SpellOptions, SpellSession, SpellHost};
//! use std::sync::Arc;
//!
//! # fn host() -> Arc<dyn SpellHost> { unimplemented!() }
//! # async fn demo() {
//! let options = SpellOptions::new(
//!     CheckFn(|word: &str| word != "catt"),
//!     SuggestFn(|_: &str| vec!["cat".to_string()]),
//! );
//! let session = SpellSession::attach(host(), options);
//! session.process().await; // publish diagnostics
//! // ... later:
//! session.dispose();
//! # }
//! ```
//!
//! # Module description
//!
//! - [`diagnostics`] - diagnostic, span, and severity data model
//! - [`tokenize`] - pluggable word extraction (ASCII default, Unicode
//!   alternative)
//! - [`adapter`] - uniform async contracts for checker/suggester/capability
//! - [`messages`] - all user-facing label text, via one message builder
//! - [`options`] - immutable per-session configuration
//! - [`host`] - the `SpellHost` trait and registration types
//! - [`annotate`] - the bounded, disposal-aware annotation engine
//! - [`actions`] - the fix-action provider
//! - [`session`] - session lifecycle and typed command dispatch

pub mod actions;
pub mod adapter;
pub mod annotate;
pub mod diagnostics;
pub mod host;
pub mod messages;
pub mod options;
pub mod session;
pub mod tokenize;

pub use actions::{ActionKind, FixAction};
pub use adapter::{CheckFn, Checker, SuggestFn, Suggester, WordSink, WordSinkFn};
pub use annotate::MAX_DIAGNOSTICS;
pub use diagnostics::{Diagnostic, Severity, Span};
pub use host::{CommandId, HostRegistration, MarkerHandle, RegistrationId, SpellHost};
pub use messages::{Message, MessageBuilder, default_message_builder};
pub use options::{LanguageSelector, SpellOptions};
pub use session::{SessionCommand, SpellSession};
pub use tokenize::{AsciiTokenizer, Token, Tokenizer, UnicodeTokenizer};

pub use tokio_util::sync::CancellationToken;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the guard if a panicking thread poisoned it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
