//! Annotation engine behavior: spans, ordering, the marker cap, disposal,
//! and overlapping-scan staleness.

use async_trait::async_trait;
use spell_annotate::{
    CheckFn, Checker, MAX_DIAGNOSTICS, Message, Severity, Span, SpellOptions, SpellSession,
    SuggestFn, UnicodeTokenizer,
};
use spell_annotate_memhost::InMemoryHost;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

fn dictionary_options(words: &[&str]) -> SpellOptions {
    let dictionary: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
    SpellOptions::new(
        CheckFn(move |word: &str| dictionary.contains(word)),
        SuggestFn(|_: &str| Vec::new()),
    )
}

#[tokio::test]
async fn publishes_exact_spans() {
    let host = Arc::new(InMemoryHost::with_document("helo world\nthe qick fox"));
    let session = SpellSession::attach(
        host.clone(),
        dictionary_options(&["world", "the", "fox"]),
    );

    session.process().await;

    let markers = host.published(session.marker_handle());
    assert_eq!(markers.len(), 2);

    assert_eq!(markers[0].word, "helo");
    assert_eq!(markers[0].span(), Span::new(1, 1, 5));
    assert_eq!(markers[0].message, "\"helo\": Unknown word.");
    assert_eq!(markers[0].severity, Severity::Warning);

    assert_eq!(markers[1].word, "qick");
    assert_eq!(markers[1].span(), Span::new(2, 5, 9));
}

#[tokio::test]
async fn diagnostics_follow_line_then_column_order() {
    let host = Arc::new(InMemoryHost::with_document("aa bb\ncc dd"));
    let session = SpellSession::attach(host.clone(), dictionary_options(&[]));

    session.process().await;

    let words: Vec<String> = host
        .published(session.marker_handle())
        .into_iter()
        .map(|d| d.word)
        .collect();
    assert_eq!(words, vec!["aa", "bb", "cc", "dd"]);
}

#[tokio::test]
async fn publishes_exactly_n_below_cap() {
    let mut doc = String::new();
    for _ in 0..MAX_DIAGNOSTICS {
        doc.push_str("badword\n");
    }
    let host = Arc::new(InMemoryHost::with_document(&doc));
    let session = SpellSession::attach(host.clone(), dictionary_options(&[]));

    session.process().await;

    assert_eq!(host.published(session.marker_handle()).len(), MAX_DIAGNOSTICS);
    assert_eq!(host.publish_count(), 1);
}

#[tokio::test]
async fn scan_stops_after_cap_is_exceeded() {
    // One misspelling per line: the scan breaks at the first line boundary
    // after the count exceeds the cap, so later lines are never checked.
    let mut doc = String::new();
    for _ in 0..(MAX_DIAGNOSTICS + 100) {
        doc.push_str("badword\n");
    }
    let host = Arc::new(InMemoryHost::with_document(&doc));

    let calls = Arc::new(AtomicUsize::new(0));
    let counted = calls.clone();
    let options = SpellOptions::new(
        CheckFn(move |_: &str| {
            counted.fetch_add(1, Ordering::SeqCst);
            false
        }),
        SuggestFn(|_: &str| Vec::new()),
    );
    let session = SpellSession::attach(host.clone(), options);

    session.process().await;

    assert_eq!(
        host.published(session.marker_handle()).len(),
        MAX_DIAGNOSTICS + 1
    );
    assert_eq!(calls.load(Ordering::SeqCst), MAX_DIAGNOSTICS + 1);
    assert_eq!(host.publish_count(), 1);
}

#[tokio::test]
async fn reprocessing_is_idempotent() {
    let host = Arc::new(InMemoryHost::with_document("helo there\nwrld"));
    let session = SpellSession::attach(host.clone(), dictionary_options(&["there"]));

    session.process().await;
    let first = host.published(session.marker_handle());
    session.process().await;
    let second = host.published(session.marker_handle());

    assert_eq!(first, second);
    assert_eq!(host.publish_count(), 2);
}

#[tokio::test]
async fn missing_document_is_a_silent_noop() {
    let host = Arc::new(InMemoryHost::new());
    let session = SpellSession::attach(host.clone(), dictionary_options(&[]));

    session.process().await;

    assert_eq!(host.publish_count(), 0);
    assert!(host.published(session.marker_handle()).is_empty());
}

#[tokio::test]
async fn empty_document_publishes_an_empty_list() {
    let host = Arc::new(InMemoryHost::with_document(""));
    let session = SpellSession::attach(host.clone(), dictionary_options(&[]));

    session.process().await;

    assert_eq!(host.publish_count(), 1);
    assert!(host.published(session.marker_handle()).is_empty());
}

struct GatedChecker {
    gate: Arc<Notify>,
}

#[async_trait]
impl Checker for GatedChecker {
    async fn check(&self, _word: &str) -> bool {
        self.gate.notified().await;
        false
    }
}

#[tokio::test]
async fn dispose_during_scan_publishes_nothing() {
    let host = Arc::new(InMemoryHost::with_document("helo world"));
    let gate = Arc::new(Notify::new());
    let options = SpellOptions::new(
        GatedChecker { gate: gate.clone() },
        SuggestFn(|_: &str| Vec::new()),
    );
    let session = SpellSession::attach(host.clone(), options);

    tokio::join!(session.process(), async {
        // Let the scan reach its first checker await, then tear down.
        tokio::task::yield_now().await;
        session.dispose();
        gate.notify_one();
    });

    assert_eq!(host.publish_count(), 0);
    assert!(host.published(session.marker_handle()).is_empty());
    assert_eq!(host.clear_count(), 1);
}

struct FirstCallGatedChecker {
    gate: Arc<Notify>,
    calls: AtomicUsize,
}

#[async_trait]
impl Checker for FirstCallGatedChecker {
    async fn check(&self, _word: &str) -> bool {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.gate.notified().await;
        }
        false
    }
}

#[tokio::test]
async fn stale_scan_discards_its_publish() {
    let host = Arc::new(InMemoryHost::with_document("stale"));
    let gate = Arc::new(Notify::new());
    let options = SpellOptions::new(
        FirstCallGatedChecker {
            gate: gate.clone(),
            calls: AtomicUsize::new(0),
        },
        SuggestFn(|_: &str| Vec::new()),
    );
    let session = SpellSession::attach(host.clone(), options);

    tokio::join!(session.process(), async {
        // First scan is parked on its checker; swap the document and let a
        // second scan run to completion, then release the first.
        tokio::task::yield_now().await;
        host.set_document("fresh");
        session.process().await;
        gate.notify_one();
    });

    assert_eq!(host.publish_count(), 1);
    let markers = host.published(session.marker_handle());
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].word, "fresh");
}

#[tokio::test]
async fn unicode_tokenizer_spans_are_char_based() {
    let host = Arc::new(InMemoryHost::with_document("naïve café"));
    let options = dictionary_options(&["café"]).with_tokenizer(UnicodeTokenizer);
    let session = SpellSession::attach(host.clone(), options);

    session.process().await;

    let markers = host.published(session.marker_handle());
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].word, "naïve");
    assert_eq!(markers[0].span(), Span::new(1, 1, 6));
}

#[tokio::test]
async fn configured_severity_and_message_builder_apply() {
    let host = Arc::new(InMemoryHost::with_document("wrld"));
    let options = dictionary_options(&[])
        .with_severity(Severity::Error)
        .with_message_builder(|message: &Message<'_>| match message {
            Message::Hover { word } => format!("misspelled: {word}"),
            other => spell_annotate::default_message_builder(other),
        });
    let session = SpellSession::attach(host.clone(), options);

    session.process().await;

    let markers = host.published(session.marker_handle());
    assert_eq!(markers[0].severity, Severity::Error);
    assert_eq!(markers[0].message, "misspelled: wrld");
}
