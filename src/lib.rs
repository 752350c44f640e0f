//! shrtnd — encodes and decodes silly speech.
//!
//! Encoding strips a configurable set of characters (by default the vowels)
//! from every word of a phrase; decoding reverses the transform through a
//! dictionary of learned words. The dictionary is a character-indexed lookup
//! tree ([`lookup::LookupTree`]) keyed by the stripped form of each word:
//! ambiguous keys resolve to their full candidate set, and partial keys can
//! be explored forward through unambiguous chains.
//!
//! The library is consumed by the `shrtnd` binary, which adds a small
//! interactive session and one-shot encode/decode commands on top.
//!
//! ```
//! use shrtnd::codec::{Transcoder, DEFAULT_STRIP};
//!
//! let transcoder = Transcoder::new(DEFAULT_STRIP)?;
//! transcoder.feed_all(["Hello", "Syberia", "an", "in"]);
//!
//! assert_eq!(transcoder.encode("Hello in Syberia!", false), "Hll n Sybr!");
//! assert_eq!(transcoder.decode("Hll n Sybr!", false), "Hello an|in Syberia!");
//! # Ok::<(), shrtnd::codec::CodecError>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod lookup;

pub use codec::{Transcoder, DEFAULT_STRIP};
pub use error::{ShrtndError, ShrtndResult};
pub use lookup::{LookupTree, Match};

/// Version information for shrtnd.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
