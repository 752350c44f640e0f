//! Integration tests for the silly-speech transcoder.
//!
//! Exercises the library the way the binary does: feed a word list, encode
//! and decode whole phrases, and round-trip the dictionary through a
//! newline-delimited file.

use std::fs;
use std::sync::Arc;
use std::thread;

use tempfile::tempdir;

use shrtnd::codec::{Transcoder, DEFAULT_STRIP};

fn stock_transcoder() -> Transcoder {
    let transcoder = Transcoder::new(DEFAULT_STRIP).unwrap();
    transcoder.feed_all(["Hello", "World", "Syberia", "an", "in", "Whoosh"]);
    transcoder
}

#[test]
fn encode_then_decode_round_trips_known_words() {
    let transcoder = stock_transcoder();

    let encoded = transcoder.encode("Hello World!", false);
    assert_eq!(encoded, "Hll Wrld!");
    assert_eq!(transcoder.decode(&encoded, false), "Hello World!");
}

#[test]
fn learned_words_survive_a_round_trip() {
    let transcoder = stock_transcoder();

    let encoded = transcoder.encode("Hello dear friend!", true);
    assert_eq!(encoded, "Hll dr frnd!");
    assert_eq!(transcoder.decode(&encoded, false), "Hello dear friend!");
}

#[test]
fn ambiguous_tokens_list_every_candidate() {
    let transcoder = stock_transcoder();

    assert_eq!(transcoder.decode("Hll n Sybr!", false), "Hello an|in Syberia!");
}

#[test]
fn dictionary_round_trips_through_a_word_list_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.txt");

    let original = stock_transcoder();
    original.feed("Pomegrenate");

    // Store: one word per line, sorted.
    let mut contents = String::new();
    for word in original.words() {
        contents.push_str(&word);
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();

    // Load into a fresh transcoder.
    let restored = Transcoder::new(DEFAULT_STRIP).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    restored.feed_all(contents.lines());

    assert_eq!(restored.words(), original.words());
    assert_eq!(restored.decode("Pmgrnt", false), "Pomegrenate");
}

#[test]
fn transcoder_is_shareable_across_threads() {
    let transcoder = Arc::new(stock_transcoder());

    let feeder = {
        let transcoder = Arc::clone(&transcoder);
        thread::spawn(move || {
            for i in 0..100 {
                transcoder.feed(&format!("wrd{i}"));
            }
        })
    };
    let reader = {
        let transcoder = Arc::clone(&transcoder);
        thread::spawn(move || {
            for _ in 0..100 {
                // Stock words stay decodable while feeding runs.
                assert_eq!(transcoder.decode("Hll", false), "Hello");
            }
        })
    };

    feeder.join().unwrap();
    reader.join().unwrap();

    assert_eq!(transcoder.words().len(), 6 + 100);
}
