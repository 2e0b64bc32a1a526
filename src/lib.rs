//! Case-folded djb2 string hashing for case-insensitive symbol lookup.

pub mod log;
pub mod unsigned;
pub mod djbhash;
pub mod hashfind;

pub use crate::djbhash::{string_hash, string_hash_bytes, string_hash_units, HashVariant};
pub use crate::hashfind::{find_hash, load_wordlist, HashIndex};
