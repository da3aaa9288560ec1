// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::ops::Index;

use crate::suffix_match::backwards_match_len;

/// A good-suffix skip table for a needle.
///
/// The table is indexed by mismatch position, i.e., the offset from the start of the needle at
/// which a backwards comparison against the haystack failed. Each entry is the distance the search
/// window may safely advance when the mismatch happens at that position. Entries are always in
/// `1..=needle.len()`.
///
/// A skip table only needs to be built once per needle and can then be shared across any number
/// of searches. It describes exactly the needle it was built from; searching for different bytes
/// with it produces meaningless results.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SkipTable {
    inner: Vec<usize>,
}

impl SkipTable {
    /// Builds the skip table for `needle`.
    ///
    /// This operation is *O*(*m*), where `m` is `needle.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use turbobm::SkipTable;
    ///
    /// let skip = SkipTable::new(b"ABAB");
    /// assert_eq!(skip.as_slice(), &[2, 2, 4, 1]);
    /// ```
    #[must_use]
    pub fn new(needle: &[u8]) -> Self {
        let needle_len = needle.len();
        let mut skip = vec![needle_len; needle_len];

        if needle_len <= 1 {
            return Self { inner: skip };
        }

        let last = needle_len - 1;

        // suff[i] is the length of the longest suffix of needle[..=i] which is also a suffix of
        // the whole needle
        let mut suff = vec![0; needle_len];
        suff[last] = needle_len;

        // needle[g + 1..=f] is the rightmost known window matching a suffix of the needle. g drops
        // below zero once a window reaches the start of the needle.
        let mut f = 0;
        let mut g = last as isize;
        // Next low skip entry which the self-similarity fill has not reached yet
        let mut j = 0;

        for i in (0..last).rev() {
            let memorized = if i as isize > g {
                Some(suff[i + last - f]).filter(|&len| (len as isize) < i as isize - g)
            } else {
                g = i as isize;
                None
            };

            suff[i] = match memorized {
                Some(len) => len,
                None => {
                    f = i;
                    let window = (g + 1) as usize;
                    g -= backwards_match_len(needle, &needle[last - f..], window, window, 0)
                        as isize;
                    (f as isize - g) as usize
                }
            };

            if suff[i] == i + 1 {
                // needle[..=i] is also a suffix of the needle, so every mismatch left of the
                // border can shift the border into place
                let limit = last - i;
                while j < limit {
                    skip[j] = limit;
                    j += 1;
                }
            }
        }

        // Entries beyond j still hold needle_len, which is what the fill would have written
        for (i, &suffix_len) in suff[..last].iter().enumerate() {
            skip[last - suffix_len] = last - i;
        }

        Self { inner: skip }
    }

    /// Returns the number of entries in the table, which equals the length of the needle it was
    /// built from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the table was built from an empty needle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the shift for a mismatch at `mismatch_position`, or `None` if the position lies
    /// outside the needle.
    #[must_use]
    pub fn get(&self, mismatch_position: usize) -> Option<usize> {
        self.inner.get(mismatch_position).copied()
    }

    /// Returns the table entries, indexed by mismatch position.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.inner
    }
}

impl Index<usize> for SkipTable {
    type Output = usize;

    fn index(&self, mismatch_position: usize) -> &usize {
        &self.inner[mismatch_position]
    }
}

/// Builds the skip table for `needle`.
///
/// This is a shorthand for [`SkipTable::new()`].
#[must_use]
pub fn build_skip_table(needle: &[u8]) -> SkipTable {
    SkipTable::new(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle() {
        let skip = SkipTable::new(b"");

        assert!(skip.is_empty());
        assert_eq!(skip.get(0), None);
    }

    #[test]
    fn single_byte_needle() {
        assert_eq!(SkipTable::new(b"x").as_slice(), &[1]);
    }

    #[test]
    fn no_repeated_suffix() {
        // Only a mismatch on the last byte keeps part of the needle aligned
        assert_eq!(SkipTable::new(b"ABCABD").as_slice(), &[6, 6, 6, 6, 6, 1]);
    }

    #[test]
    fn uniform_needle() {
        assert_eq!(SkipTable::new(b"AAA").as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn periodic_needle_shares_shifts() {
        let skip = SkipTable::new(b"ABAB");

        // Both mismatch positions left of the "AB" border shift by the period
        assert_eq!(skip[0], 2);
        assert_eq!(skip[1], 2);
        assert_eq!(skip.as_slice(), &[2, 2, 4, 1]);
    }

    #[test]
    fn strong_good_suffix_shifts() {
        assert_eq!(
            SkipTable::new(b"GCAGAGAG").as_slice(),
            &[7, 7, 7, 2, 7, 4, 7, 1],
        );
    }

    #[test]
    fn entries_stay_in_range() {
        let needles: [&[u8]; 6] = [
            b"ab",
            b"abracadabra",
            b"aabaabaaab",
            b"mississippi",
            b"\0\0\0\x01\0\0",
            b"GCAGAGAG",
        ];

        for needle in needles {
            let skip = SkipTable::new(needle);

            assert_eq!(skip.len(), needle.len());
            assert!(
                skip.as_slice()
                    .iter()
                    .all(|&shift| (1..=needle.len()).contains(&shift)),
                "skip table {:?} out of range for {needle:?}",
                skip.as_slice(),
            );
        }
    }

    #[test]
    fn shorthand_matches_constructor() {
        assert_eq!(build_skip_table(b"GCAGAGAG"), SkipTable::new(b"GCAGAGAG"));
    }
}
