//! Word extraction from lines of text.
//!
//! The annotation engine feeds each document line through a [`Tokenizer`]
//! and spell-checks the resulting tokens. Tokenizers are pluggable; two
//! implementations are provided:
//!
//! - [`AsciiTokenizer`] (the default): maximal runs of ASCII letters and
//!   apostrophes, at least two characters long
//! - [`UnicodeTokenizer`]: UAX #29 word boundaries, for documents that mix
//!   scripts
//!
//! Every call to [`Tokenizer::tokenize`] returns a fresh, finite, lazy
//! iterator; tokenizers hold no cursor state between calls.

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// A candidate word extracted from a line, with its position.
///
/// `offset` is the 0-based character offset of the word's first character
/// within the line. Tokens borrow from the line and are consumed
/// immediately by the engine; they are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word text.
    pub word: &'a str,
    /// 0-based character offset within the line.
    pub offset: usize,
}

/// Extracts candidate words from a single line of text.
pub trait Tokenizer: Send + Sync {
    /// Produce a fresh, lazy, finite token sequence for `line`.
    ///
    /// Must not panic on any input; an empty line yields nothing.
    fn tokenize<'a>(&self, line: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + Send + 'a>;
}

/// Words shorter than this are not worth checking.
const MIN_WORD_CHARS: usize = 2;

static ASCII_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z']+").expect("literal pattern compiles"));

/// The default tokenizer: maximal runs of ASCII letters and apostrophes.
///
/// Runs shorter than two characters are discarded, so single letters like
/// the article "a" never reach the checker. Punctuation and digits end a
/// run; apostrophes inside contractions (`cat's`) do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiTokenizer;

impl Tokenizer for AsciiTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + Send + 'a> {
        Box::new(
            ASCII_WORD_RUN
                .find_iter(line)
                .filter(|m| m.as_str().chars().count() >= MIN_WORD_CHARS)
                .map(|m| Token {
                    word: m.as_str(),
                    offset: char_offset(line, m.start()),
                }),
        )
    }
}

/// A Unicode-aware tokenizer based on UAX #29 word boundaries.
///
/// Yields words that contain at least one alphabetic character, so numbers
/// and symbol runs are skipped. Like the default tokenizer, words shorter
/// than two characters are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Box<dyn Iterator<Item = Token<'a>> + Send + 'a> {
        Box::new(
            line.unicode_word_indices()
                .filter(|(_, word)| {
                    word.chars().count() >= MIN_WORD_CHARS
                        && word.chars().any(char::is_alphabetic)
                })
                .map(|(byte_start, word)| Token {
                    word,
                    offset: char_offset(line, byte_start),
                }),
        )
    }
}

/// Convert a byte offset into a character offset within `line`.
fn char_offset(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}
