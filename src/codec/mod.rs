//! Encodes and decodes silly speech.
//!
//! Encoding strips a configured set of characters (by default the vowels)
//! from every word; decoding reverses the transform through a learned
//! dictionary kept in a [`LookupTree`]. The transcoder is case-sensitive.

mod tokens;

use std::collections::BTreeSet;

use tracing::debug;

use crate::lookup::LookupTree;
use tokens::{tokenize, Token};

/// Default characters stripped by the transcoder: the vowels, both cases.
pub const DEFAULT_STRIP: &str = "AaEeIiOoUu";

/// Marker wrapped around words the dictionary cannot decode: `¿wrd?`.
const UNKNOWN_WORD_PREFIX: char = '¿';
const UNKNOWN_WORD_SUFFIX: char = '?';

/// Divider between multiple decode candidates: `an|in`.
const MULTIPLE_RESULTS_DIVIDER: &str = "|";

/// Errors that can occur when building a transcoder.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    /// The set of characters to strip was empty.
    #[error("Strip set may not be empty")]
    EmptyStripSet,
}

/// Encodes and decodes phrases against a learned dictionary.
///
/// Feeding a word strips it and inserts the original into the dictionary
/// keyed by its stripped form; decoding resolves each stripped token back to
/// its candidate words.
#[derive(Debug)]
pub struct Transcoder {
    /// Characters removed from words during encoding.
    strip: BTreeSet<char>,
    /// Stripped form of a word mapped to every original spelling seen.
    dictionary: LookupTree<String>,
}

impl Transcoder {
    /// Creates a transcoder stripping the given characters.
    ///
    /// # Errors
    ///
    /// [`CodecError::EmptyStripSet`] when `strip` contains no characters.
    pub fn new(strip: &str) -> Result<Self, CodecError> {
        let strip: BTreeSet<char> = strip.chars().collect();
        if strip.is_empty() {
            return Err(CodecError::EmptyStripSet);
        }

        Ok(Self {
            strip,
            dictionary: LookupTree::new(),
        })
    }

    /// Feeds a single word into the dictionary.
    ///
    /// A word whose stripped form is empty (it consists only of stripped
    /// characters) leaves the dictionary untouched.
    pub fn feed(&self, word: &str) {
        let stripped = self.strip_word(word);
        debug!("feeding '{}' > '{}' to the dictionary", stripped, word);
        self.dictionary.insert(&stripped, word.to_owned());
    }

    /// Feeds every word of an iterator into the dictionary.
    pub fn feed_all<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.feed(word.as_ref());
        }
    }

    /// Every word in the dictionary, in sorted order.
    pub fn words(&self) -> Vec<String> {
        self.dictionary.descendants()
    }

    /// The underlying dictionary, for callers that want to resolve stripped
    /// keys directly.
    pub fn dictionary(&self) -> &LookupTree<String> {
        &self.dictionary
    }

    /// Encodes a phrase by stripping the configured characters from every
    /// word. Words made up entirely of stripped characters vanish. When
    /// `learn` is set, every encoded word is fed to the dictionary first.
    pub fn encode(&self, phrase: &str, learn: bool) -> String {
        debug!("encoding: {}", phrase);

        render(phrase, |word| {
            if self.only_stripped_chars(word) {
                debug!(" > skipping empty");
                return String::new();
            }

            if learn {
                self.feed(word);
            }

            debug!(" > word");
            self.strip_word(word)
        })
    }

    /// Decodes a phrase by resolving each word token against the dictionary.
    ///
    /// A token with several candidates renders them sorted and divided by
    /// vertical bars (`an|in`); an unresolvable token is hugged by question
    /// marks (`¿wrd?`). `partial` enables straight-line exploration of
    /// unambiguous key chains.
    pub fn decode(&self, phrase: &str, partial: bool) -> String {
        debug!("decoding: {}", phrase);

        render(phrase, |word| {
            debug!(" > word");
            match self.dictionary.resolve(word, partial) {
                Ok(Some(found)) if !found.values.is_empty() => {
                    found.values.join(MULTIPLE_RESULTS_DIVIDER)
                }
                _ => format!("{UNKNOWN_WORD_PREFIX}{word}{UNKNOWN_WORD_SUFFIX}"),
            }
        })
    }

    fn strip_word(&self, word: &str) -> String {
        word.chars().filter(|c| !self.strip.contains(c)).collect()
    }

    fn only_stripped_chars(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.strip.contains(&c))
    }
}

/// Renders a phrase token by token, applying `transform` to word tokens.
///
/// Punctuation reattaches to the preceding word (the tokenizer split it off
/// together with any space), except smileys, which keep their own spot. A
/// word rendered to the empty string disappears along with its divider.
fn render<F>(phrase: &str, mut transform: F) -> String
where
    F: FnMut(&str) -> String,
{
    if phrase.is_empty() {
        debug!("received empty phrase, returning empty string");
        return String::new();
    }

    let tokens = tokenize(phrase);
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        debug!(" processing: {:?}", token);

        match token {
            Token::Punctuation(run) => {
                if token.is_smiley() {
                    debug!(" > smiley");
                } else {
                    debug!(" > punctuation");
                    out.pop();
                }
                out.push_str(run);
            }
            Token::Word(word) => {
                let rendered = transform(word);
                if rendered.is_empty() {
                    continue;
                }
                out.push_str(&rendered);
            }
        }

        if i < tokens.len() - 1 {
            out.push(' ');
        }
    }

    out
}
