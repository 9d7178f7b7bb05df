//! Uniform asynchronous contracts for the embedder-supplied checker,
//! suggester, and word capabilities.
//!
//! Embedders plug in spell checking in whatever shape they have it: a plain
//! synchronous lookup, or an asynchronous call into an external service.
//! The engine always awaits through the traits below; the `*Fn` adapters
//! lift synchronous closures into the same contract so both shapes look
//! identical to callers.
//!
//! No caching and no deduplication happen here; every call re-invokes the
//! supplied function. The annotation engine is responsible for calling the
//! checker exactly once per token occurrence.

use async_trait::async_trait;

/// Classifies a word as correctly spelled (`true`) or misspelled (`false`).
#[async_trait]
pub trait Checker: Send + Sync {
    /// Check a single word.
    async fn check(&self, word: &str) -> bool;
}

/// Produces candidate replacements for a misspelled word.
///
/// The returned order is preserved all the way into the fix-action list.
#[async_trait]
pub trait Suggester: Send + Sync {
    /// Suggest replacements for `word`.
    async fn suggest(&self, word: &str) -> Vec<String>;
}

/// An optional word capability: "ignore this word" or "add this word to the
/// personal dictionary".
///
/// Presence of a `WordSink` in the session options is what enables the
/// corresponding fix action; see
/// [`SpellOptions`](crate::options::SpellOptions).
#[async_trait]
pub trait WordSink: Send + Sync {
    /// Accept `word` (record it as ignored, or persist it to a dictionary).
    async fn accept(&self, word: &str);
}

/// Adapts a synchronous `Fn(&str) -> bool` into a [`Checker`].
pub struct CheckFn<F>(pub F);

#[async_trait]
impl<F> Checker for CheckFn<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    async fn check(&self, word: &str) -> bool {
        (self.0)(word)
    }
}

/// Adapts a synchronous `Fn(&str) -> Vec<String>` into a [`Suggester`].
pub struct SuggestFn<F>(pub F);

#[async_trait]
impl<F> Suggester for SuggestFn<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    async fn suggest(&self, word: &str) -> Vec<String> {
        (self.0)(word)
    }
}

/// Adapts a synchronous `Fn(&str)` into a [`WordSink`].
pub struct WordSinkFn<F>(pub F);

#[async_trait]
impl<F> WordSink for WordSinkFn<F>
where
    F: Fn(&str) + Send + Sync,
{
    async fn accept(&self, word: &str) {
        (self.0)(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[tokio::test]
    async fn sync_checker_is_awaitable() {
        let checker = CheckFn(|word: &str| word == "cat");
        assert!(checker.check("cat").await);
        assert!(!checker.check("catt").await);
    }

    #[tokio::test]
    async fn sync_suggester_preserves_order() {
        let suggester = SuggestFn(|_: &str| vec!["cat".to_string(), "car".to_string()]);
        assert_eq!(suggester.suggest("catt").await, vec!["cat", "car"]);
    }

    #[tokio::test]
    async fn sync_sink_observes_word() {
        let seen: Mutex<HashSet<String>> = Mutex::new(HashSet::new());
        {
            let sink = WordSinkFn(|word: &str| {
                seen.lock().unwrap().insert(word.to_string());
            });
            sink.accept("catt").await;
        }
        assert!(seen.lock().unwrap().contains("catt"));
    }

    #[tokio::test]
    async fn async_implementations_share_the_contract() {
        struct SlowChecker;

        #[async_trait]
        impl Checker for SlowChecker {
            async fn check(&self, word: &str) -> bool {
                tokio::task::yield_now().await;
                word.len() > 2
            }
        }

        assert!(SlowChecker.check("cat").await);
        assert!(!SlowChecker.check("at").await);
    }

    #[tokio::test]
    async fn every_call_reinvokes_the_function() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let calls = AtomicUsize::new(0);
        let checker = CheckFn(|_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        });
        checker.check("cat").await;
        checker.check("cat").await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
