// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Index,
};

/// The size of the alphabet
const ALPHABET_SIZE: usize = 256;

/// A bad-character table for a needle.
///
/// For every byte value, the table holds the distance from the rightmost occurrence of that byte
/// in the needle to the end of the needle. The last byte of the needle is not considered an
/// occurrence, so every distance is at least 1. Bytes which do not occur (before the last byte)
/// map to the needle length.
///
/// Subtracting the number of already matched bytes from an entry yields the bad-character shift
/// for a mismatch against that byte.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OccurrenceTable {
    inner: [usize; ALPHABET_SIZE],
    needle_len: usize,
}

impl OccurrenceTable {
    /// Builds the occurrence table for `needle`.
    ///
    /// This operation is *O*(*m*), where `m` is `needle.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use turbobm::OccurrenceTable;
    ///
    /// let occ = OccurrenceTable::new(b"hello");
    /// assert_eq!(occ[b'l'], 1);
    /// assert_eq!(occ[b'h'], 4);
    /// // The final byte only counts if it also occurs earlier
    /// assert_eq!(occ[b'o'], 5);
    /// assert_eq!(occ[b'z'], 5);
    /// ```
    #[must_use]
    pub fn new(needle: &[u8]) -> Self {
        let needle_len = needle.len();
        let mut inner = [needle_len; ALPHABET_SIZE];

        if let Some((_, init)) = needle.split_last() {
            for (i, &byte) in init.iter().enumerate() {
                inner[usize::from(byte)] = needle_len - 1 - i;
            }
        }

        Self { inner, needle_len }
    }

    /// Wraps an externally built table of distances for a needle of length `needle_len`.
    ///
    /// `distances` must follow the layout described on [`OccurrenceTable`]. Only the value range
    /// is verified; a table which is in range but describes other bytes than the needle searched
    /// for leads to missed matches.
    ///
    /// # Errors
    ///
    /// Returns an error if any distance is greater than `needle_len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use turbobm::{OccurrenceTable, TableError};
    ///
    /// let mut distances = [3; 256];
    /// distances[usize::from(b'a')] = 2;
    /// distances[usize::from(b'b')] = 1;
    /// assert!(OccurrenceTable::from_distances(distances, 3).is_ok());
    ///
    /// distances[0] = 4;
    /// assert!(matches!(
    ///     OccurrenceTable::from_distances(distances, 3),
    ///     Err(TableError::OccurrenceOutOfRange { byte: 0, .. }),
    /// ));
    /// ```
    pub fn from_distances(
        distances: [usize; ALPHABET_SIZE],
        needle_len: usize,
    ) -> Result<Self, TableError> {
        if let Some((byte, &distance)) = distances
            .iter()
            .enumerate()
            .find(|&(_, &distance)| distance > needle_len)
        {
            return Err(TableError::OccurrenceOutOfRange {
                byte: byte as u8,
                distance,
                needle_len,
            });
        }

        Ok(Self {
            inner: distances,
            needle_len,
        })
    }

    /// Returns the length of the needle this table describes.
    #[must_use]
    pub fn needle_len(&self) -> usize {
        self.needle_len
    }

    /// Returns the distance recorded for `byte`.
    #[must_use]
    pub fn get(&self, byte: u8) -> usize {
        self.inner[usize::from(byte)]
    }

    /// Returns all distances, indexed by byte value.
    #[must_use]
    pub fn as_array(&self) -> &[usize; ALPHABET_SIZE] {
        &self.inner
    }
}

impl Index<u8> for OccurrenceTable {
    type Output = usize;

    fn index(&self, byte: u8) -> &usize {
        &self.inner[usize::from(byte)]
    }
}

/// An error indicating that search tables do not fit a needle.
///
/// # Examples
///
/// ```
/// use turbobm::{Finder, OccurrenceTable, SkipTable, TableError};
///
/// let occ = OccurrenceTable::new(b"needle");
/// let skip = SkipTable::new(b"pin");
/// let finder = Finder::from_parts(b"needle", occ, skip);
///
/// assert!(matches!(finder, Err(TableError::SkipLengthMismatch { .. })));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TableError {
    /// An occurrence table distance exceeds the needle length
    OccurrenceOutOfRange {
        /// The byte whose entry is out of range
        byte: u8,
        /// The offending distance
        distance: usize,
        /// The needle length the table was checked against
        needle_len: usize,
    },
    /// The occurrence table was built for a needle of a different length
    OccurrenceLengthMismatch {
        /// The length of the needle
        expected: usize,
        /// The needle length the table was built for
        found: usize,
    },
    /// The skip table was built for a needle of a different length
    SkipLengthMismatch {
        /// The length of the needle
        expected: usize,
        /// The number of entries in the skip table
        found: usize,
    },
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TableError::OccurrenceOutOfRange {
                byte,
                distance,
                needle_len,
            } => write!(
                f,
                "occurrence distance {distance} for byte {byte:#04x} exceeds needle length {needle_len}",
            ),
            TableError::OccurrenceLengthMismatch { expected, found } => write!(
                f,
                "occurrence table length mismatch: expected needle of {expected} bytes, found {found}",
            ),
            TableError::SkipLengthMismatch { expected, found } => write!(
                f,
                "skip table length mismatch: expected {expected} entries, found {found}",
            ),
        }
    }
}

impl Error for TableError {}
