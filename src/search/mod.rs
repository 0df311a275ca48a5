//! Exact substring search
//!
//! This module implements Boyer-Moore search over byte slices:
//!
//! - `tables`: the bad-character and good-suffix shift tables
//! - `boyer_moore`: the scan loop and a reusable precomputed searcher
//! - `naive`: the O(n*m) reference scanner used as a differential oracle
//!
//! The shift tables are derived solely from the needle and are rebuilt per
//! call of the one-shot [`find`]; [`BoyerMoore`] keeps them alive for
//! callers that search many haystacks with one needle.

pub mod boyer_moore;
pub mod naive;
pub mod tables;

pub use boyer_moore::{find, BoyerMoore, FindIter};
pub use tables::{bad_char_table, good_suffix_table, suffix_lengths, ALPHABET_SIZE};
