// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Exact byte string search with the Boyer-Moore and Turbo-Boyer-Moore algorithms.
//!
//! Searching works with two tables precomputed from the needle: an [`OccurrenceTable`] for the
//! bad-character rule and a [`SkipTable`] for the good-suffix rule. Both are built once per
//! needle and can be shared across any number of searches, including concurrent ones.
//!
//! # Examples
//!
//! Searching once:
//!
//! ```
//! assert_eq!(turbobm::find(b"hello world", b"world"), Some(6));
//! ```
//!
//! Searching many haystacks for the same needle:
//!
//! ```
//! use turbobm::Finder;
//!
//! let finder = Finder::new(b"ABCABD");
//!
//! assert_eq!(finder.find(b"ABCABCABD"), Some(3));
//! assert_eq!(finder.find(b"ABCABC"), None);
//! ```
//!
//! Driving the search loops directly, which report a miss as the haystack length:
//!
//! ```
//! use turbobm::{OccurrenceTable, SkipTable};
//!
//! let needle = b"xyz";
//! let occ = OccurrenceTable::new(needle);
//! let skip = turbobm::build_skip_table(needle);
//!
//! assert_eq!(turbobm::search(b"abc", &occ, &skip, needle), 3);
//! assert_eq!(turbobm::search_turbo(b"abcxyz", &occ, &skip, needle), 3);
//! ```

mod finder;
mod occurrence;
mod search;
mod skip_table;
mod suffix_match;

pub use finder::{Algorithm, FindIter, Finder, FinderConfig, find};
pub use occurrence::{OccurrenceTable, TableError};
pub use search::{search, search_turbo};
pub use skip_table::{SkipTable, build_skip_table};
