// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::iter::FusedIterator;

use crate::{OccurrenceTable, SkipTable, TableError, search, search_turbo};

/// The search loop a [`Finder`] runs.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Algorithm {
    /// Boyer-Moore, see [`search()`]
    Basic,
    /// Turbo-Boyer-Moore, see [`search_turbo()`]
    #[default]
    Turbo,
}

/// Configuration for a [`Finder`].
///
/// The defaults are suitable for almost all use cases. This configuration can be reused across
/// finders.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct FinderConfig {
    algorithm: Algorithm,
}

impl FinderConfig {
    /// Creates a new configuration with default options
    pub const fn new() -> Self {
        Self {
            algorithm: Self::DEFAULT_ALGORITHM,
        }
    }

    /// Sets the search algorithm to use.
    ///
    /// [`Algorithm::Basic`] tends to be marginally faster on random data because it keeps no
    /// state between attempts, but its worst case is quadratic for periodic needles.
    pub fn algorithm(&mut self, algorithm: Algorithm) -> &mut Self {
        self.algorithm = algorithm;
        self
    }

    /// The default search algorithm
    ///
    /// We use Turbo-Boyer-Moore because its worst case is linear in the haystack length.
    pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Turbo;
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A needle together with its precomputed search tables.
///
/// Building a `Finder` costs *O*(*m*) time, where `m` is the needle length. The finder can then be
/// used to search any number of haystacks, from any number of threads.
///
/// # Examples
///
/// ```
/// use turbobm::Finder;
///
/// let finder = Finder::new(b"fox");
///
/// assert_eq!(finder.find(b"The quick brown fox"), Some(16));
/// assert_eq!(finder.find(b"The lazy dog"), None);
/// ```
#[derive(Clone, Debug)]
pub struct Finder<'n> {
    needle: &'n [u8],
    occ: OccurrenceTable,
    skip: SkipTable,
    algorithm: Algorithm,
}

impl<'n> Finder<'n> {
    /// Creates a new `Finder` for `needle` with default options.
    #[must_use]
    pub fn new(needle: &'n [u8]) -> Self {
        Self::with_config(needle, &FinderConfig::default())
    }

    /// Creates a new `Finder` for `needle`.
    ///
    /// # Examples
    ///
    /// ```
    /// use turbobm::{Algorithm, Finder, FinderConfig};
    ///
    /// let finder = Finder::with_config(b"dog", FinderConfig::new().algorithm(Algorithm::Basic));
    ///
    /// assert_eq!(finder.algorithm(), Algorithm::Basic);
    /// assert_eq!(finder.find(b"hot dog"), Some(4));
    /// ```
    #[must_use]
    pub fn with_config(needle: &'n [u8], config: &FinderConfig) -> Self {
        Self {
            needle,
            occ: OccurrenceTable::new(needle),
            skip: SkipTable::new(needle),
            algorithm: config.algorithm,
        }
    }

    /// Creates a new `Finder` from tables built elsewhere.
    ///
    /// The default algorithm is used.
    ///
    /// # Errors
    ///
    /// Returns an error if either table was built for a needle of a different length.
    pub fn from_parts(
        needle: &'n [u8],
        occ: OccurrenceTable,
        skip: SkipTable,
    ) -> Result<Self, TableError> {
        if skip.len() != needle.len() {
            return Err(TableError::SkipLengthMismatch {
                expected: needle.len(),
                found: skip.len(),
            });
        }
        if occ.needle_len() != needle.len() {
            return Err(TableError::OccurrenceLengthMismatch {
                expected: needle.len(),
                found: occ.needle_len(),
            });
        }

        Ok(Self {
            needle,
            occ,
            skip,
            algorithm: FinderConfig::DEFAULT_ALGORITHM,
        })
    }

    /// Returns the offset of the first occurrence of the needle in `haystack`, or `None` if there
    /// is none.
    ///
    /// An empty needle matches at offset 0 of any haystack.
    #[must_use]
    pub fn find(&self, haystack: &[u8]) -> Option<usize> {
        match self.algorithm {
            Algorithm::Basic => self.find_basic(haystack),
            Algorithm::Turbo => self.find_turbo(haystack),
        }
    }

    /// Like [`find()`](Self::find), but always uses Boyer-Moore.
    #[must_use]
    pub fn find_basic(&self, haystack: &[u8]) -> Option<usize> {
        self.found(search(haystack, &self.occ, &self.skip, self.needle), haystack)
    }

    /// Like [`find()`](Self::find), but always uses Turbo-Boyer-Moore.
    #[must_use]
    pub fn find_turbo(&self, haystack: &[u8]) -> Option<usize> {
        self.found(search_turbo(haystack, &self.occ, &self.skip, self.needle), haystack)
    }

    /// Returns an iterator over the offsets of all occurrences of the needle in `haystack`.
    ///
    /// Occurrences may overlap. Offsets are yielded in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use turbobm::Finder;
    ///
    /// let finder = Finder::new(b"aba");
    /// let offsets: Vec<_> = finder.find_iter(b"ababa xaba").collect();
    ///
    /// assert_eq!(offsets, [0, 2, 7]);
    /// ```
    pub fn find_iter<'f, 'h>(&'f self, haystack: &'h [u8]) -> FindIter<'f, 'h, 'n> {
        FindIter {
            finder: self,
            haystack,
            position: 0,
        }
    }

    /// Returns the needle this finder searches for.
    #[must_use]
    pub fn needle(&self) -> &'n [u8] {
        self.needle
    }

    /// Returns the bad-character table of the needle.
    #[must_use]
    pub fn occurrence_table(&self) -> &OccurrenceTable {
        &self.occ
    }

    /// Returns the good-suffix skip table of the needle.
    #[must_use]
    pub fn skip_table(&self) -> &SkipTable {
        &self.skip
    }

    /// Returns the algorithm [`find()`](Self::find) uses.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn found(&self, position: usize, haystack: &[u8]) -> Option<usize> {
        // An empty needle matches even in an empty haystack, where 0 is also the sentinel
        if self.needle.is_empty() || position != haystack.len() {
            Some(position)
        } else {
            None
        }
    }
}

/// An iterator over all occurrences of a needle in a haystack.
///
/// This struct is created by [`Finder::find_iter()`].
#[derive(Clone, Debug)]
pub struct FindIter<'f, 'h, 'n> {
    finder: &'f Finder<'n>,
    haystack: &'h [u8],
    position: usize,
}

impl Iterator for FindIter<'_, '_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.haystack.get(self.position..)?;
        let offset = self.position + self.finder.find(rest)?;

        self.position = offset + 1;

        Some(offset)
    }
}

impl FusedIterator for FindIter<'_, '_, '_> {}

/// Returns the offset of the first occurrence of `needle` in `haystack`, or `None` if there is
/// none.
///
/// This builds the search tables on every call. To search for the same needle repeatedly, create
/// a [`Finder`] once instead.
///
/// # Examples
///
/// ```
/// assert_eq!(turbobm::find(b"hello world", b"world"), Some(6));
/// assert_eq!(turbobm::find(b"abc", b"xyz"), None);
/// ```
#[must_use]
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    Finder::new(needle).find(haystack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_turbo() {
        assert_eq!(FinderConfig::default().algorithm, Algorithm::Turbo);
        assert_eq!(Finder::new(b"x").algorithm(), Algorithm::Turbo);
    }

    #[test]
    fn finders_agree() {
        let haystack = b"The quick brown fox jumped over the lazy dog because the fox was quick";
        let basic = Finder::with_config(b"quick", FinderConfig::new().algorithm(Algorithm::Basic));
        let turbo = Finder::new(b"quick");

        assert_eq!(basic.find(haystack), Some(4));
        assert_eq!(turbo.find(haystack), Some(4));
        assert_eq!(turbo.find_basic(haystack), turbo.find_turbo(haystack));
    }

    #[test]
    fn not_found() {
        let finder = Finder::new(b"times");

        assert_eq!(
            finder.find(b"Now is the time for all good men to come to the aid of the party"),
            None,
        );
    }

    #[test]
    fn empty_needle_matches_everywhere() {
        let finder = Finder::new(b"");

        assert_eq!(finder.find(b""), Some(0));
        assert_eq!(finder.find(b"ab"), Some(0));
        assert_eq!(finder.find_iter(b"ab").collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn iter_yields_overlapping_matches() {
        let finder = Finder::new(b"AA");

        assert_eq!(finder.find_iter(b"AAAA").collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn iter_without_matches() {
        let finder = Finder::new(b"xyz");
        let mut iter = finder.find_iter(b"abcabc");

        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_single_byte_needle() {
        let finder = Finder::new(b"c");

        assert_eq!(finder.find_iter(b"abcabc").collect::<Vec<_>>(), [2, 5]);
    }

    #[test]
    fn from_parts_accepts_matching_tables() {
        let needle = b"needle";
        let finder = Finder::from_parts(
            needle,
            OccurrenceTable::new(needle),
            SkipTable::new(needle),
        );

        assert_eq!(finder.map(|f| f.find(b"haystack with a needle")), Ok(Some(16)));
    }

    #[test]
    fn from_parts_rejects_foreign_occurrence_table() {
        let needle = b"needle";
        let finder = Finder::from_parts(needle, OccurrenceTable::new(b"pin"), SkipTable::new(needle));

        assert_eq!(
            finder.map(|_| ()),
            Err(TableError::OccurrenceLengthMismatch {
                expected: 6,
                found: 3,
            }),
        );
    }

    #[test]
    fn shorthand_find() {
        assert_eq!(find(b"x", b"xx"), None);
        assert_eq!(find(b"AAAAAAAA", b"AAA"), Some(0));
    }

    #[test]
    fn finder_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Finder<'static>>();
    }
}
