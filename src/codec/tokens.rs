//! Phrase tokenizer for the transcoder.
//!
//! Splits a phrase into word tokens and punctuation tokens: whitespace
//! divides tokens, and within a chunk maximal runs of ASCII punctuation are
//! split off from the surrounding word. A punctuation run containing `:` or
//! `;` counts as a smiley. This is a heuristic, not natural-language
//! processing; its quirks are part of the tool's observable behavior.

/// One token of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A run of non-punctuation characters.
    Word(&'a str),
    /// A run of ASCII punctuation characters.
    Punctuation(&'a str),
}

impl Token<'_> {
    /// Whether this token is a smiley: a punctuation run containing a colon
    /// or semicolon, e.g. `:/` or `;-)`.
    pub(crate) fn is_smiley(&self) -> bool {
        match self {
            Token::Punctuation(run) => run.contains(|c| c == ':' || c == ';'),
            Token::Word(_) => false,
        }
    }
}

/// Splits `phrase` into word and punctuation tokens. Whitespace is consumed
/// and never appears in a token.
pub(crate) fn tokenize(phrase: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for chunk in phrase.split_whitespace() {
        split_runs(chunk, &mut tokens);
    }
    tokens
}

/// Splits a whitespace-free chunk into maximal same-class runs.
fn split_runs<'a>(chunk: &'a str, tokens: &mut Vec<Token<'a>>) {
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, c) in chunk.char_indices() {
        let punct = c.is_ascii_punctuation();
        match current {
            Some(prev) if prev != punct => {
                tokens.push(run(&chunk[start..idx], prev));
                start = idx;
                current = Some(punct);
            }
            Some(_) => {}
            None => current = Some(punct),
        }
    }

    if let Some(punct) = current {
        tokens.push(run(&chunk[start..], punct));
    }
}

fn run(text: &str, punct: bool) -> Token<'_> {
    if punct {
        Token::Punctuation(text)
    } else {
        Token::Word(text)
    }
}
