//! # bmfind - Boyer-Moore Exact Byte Search
//!
//! bmfind is an exact substring searcher for byte slices built around the
//! classic Boyer-Moore algorithm: a bad-character heuristic and a
//! good-suffix heuristic combine to skip over portions of the haystack
//! that provably cannot contain the needle.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`search`] - The Boyer-Moore searcher, its shift tables, and a naive
//!   reference scanner
//! - [`bench`] - In-process timing harness for comparing search engines
//! - [`output`] - Match formatting for the CLI (ripgrep-style)
//!
//! ## Quick Start
//!
//! ```ignore
//! use bmfind::search::{self, BoyerMoore};
//!
//! // One-shot search: builds the shift tables internally
//! assert_eq!(search::find(b"GCATCGCAGAGAGTATACAGTACG", b"GCAGAGAG"), Some(5));
//!
//! // Reuse the tables across many haystacks
//! let finder = BoyerMoore::new(b"needle");
//! for haystack in [&b"haystack"[..], b"needle in a haystack"] {
//!     if let Some(pos) = finder.find(haystack) {
//!         println!("found at byte {pos}");
//!     }
//! }
//! ```
//!
//! ## Searching vs. measuring
//!
//! The [`bench`] module drives any of the three engines (Boyer-Moore, the
//! naive scanner, `memchr::memmem`) through the same black-box function
//! shape and times them on synthetic fixtures, reporting mean ns/op with a
//! confidence estimate. The `bmfind` binary exposes all of it from the
//! command line.

pub mod bench;
pub mod output;
pub mod search;
