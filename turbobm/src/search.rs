// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::cmp;

use crate::{OccurrenceTable, SkipTable, suffix_match::backwards_match_len};

/// Finds the first occurrence of `needle` in `haystack` using the Boyer-Moore algorithm.
///
/// Returns the offset of the first match, or `haystack.len()` if `needle` does not occur in
/// `haystack`. An empty needle matches at offset 0.
///
/// `occ` and `skip` must have been built from `needle`. Tables built from other bytes produce
/// unspecified (but memory-safe) results.
///
/// This operation is *O*(*n*) on average and sub-linear on typical inputs, where `n` is
/// `haystack.len()`. Highly periodic needles can degrade it to *O*(*n* \* *m*); see
/// [`search_turbo()`] for a variant with a linear worst case.
///
/// # Panics
///
/// May panic if `skip` has fewer entries than `needle` has bytes.
///
/// # Examples
///
/// ```
/// use turbobm::{OccurrenceTable, SkipTable};
///
/// let needle = b"world";
/// let occ = OccurrenceTable::new(needle);
/// let skip = SkipTable::new(needle);
///
/// assert_eq!(turbobm::search(b"hello world", &occ, &skip, needle), 6);
/// assert_eq!(turbobm::search(b"hello", &occ, &skip, needle), 5);
/// ```
#[must_use]
pub fn search(haystack: &[u8], occ: &OccurrenceTable, skip: &SkipTable, needle: &[u8]) -> usize {
    if let Some(position) = trivial_search(haystack, needle) {
        return position;
    }
    debug_assert_eq!(skip.len(), needle.len(), "skip table built for another needle");

    let needle_len = needle.len();
    let last_start = haystack.len() - needle_len;

    let mut position = 0;
    while position <= last_start {
        let window = &haystack[position..position + needle_len];
        let match_len = backwards_match_len(needle, window, needle_len, needle_len, 0);
        if match_len == needle_len {
            return position;
        }

        let mismatch_position = needle_len - 1 - match_len;
        let bad_char_shift = occ[window[mismatch_position]] as isize - match_len as isize;
        let good_suffix_shift = skip[mismatch_position] as isize;

        position += cmp::max(good_suffix_shift, bad_char_shift) as usize;
    }

    haystack.len()
}

/// Per-call state of a Turbo-Boyer-Moore scan
struct TurboState {
    /// Start of the current search window in the haystack
    position: usize,
    /// Number of bytes right of the last shift already known to match
    ignore_num: usize,
    /// Shift applied in the previous iteration
    shift: usize,
}

/// Finds the first occurrence of `needle` in `haystack` using the Turbo-Boyer-Moore algorithm.
///
/// This behaves exactly like [`search()`], but remembers the part of the needle which matched
/// during the previous attempt whenever it shifted by the good-suffix rule. That part is not
/// compared again, and shifts are lengthened where the remembered part proves a shorter shift
/// impossible. This bounds the number of byte comparisons to 2*n*, making the worst case linear.
///
/// Returns the offset of the first match, or `haystack.len()` if `needle` does not occur in
/// `haystack`. An empty needle matches at offset 0.
///
/// # Panics
///
/// May panic if `skip` has fewer entries than `needle` has bytes.
///
/// # Examples
///
/// ```
/// use turbobm::{OccurrenceTable, SkipTable};
///
/// let needle = b"ABCABD";
/// let occ = OccurrenceTable::new(needle);
/// let skip = SkipTable::new(needle);
///
/// assert_eq!(turbobm::search_turbo(b"ABCABCABD", &occ, &skip, needle), 3);
/// ```
#[must_use]
pub fn search_turbo(
    haystack: &[u8],
    occ: &OccurrenceTable,
    skip: &SkipTable,
    needle: &[u8],
) -> usize {
    if let Some(position) = trivial_search(haystack, needle) {
        return position;
    }
    debug_assert_eq!(skip.len(), needle.len(), "skip table built for another needle");

    let needle_len = needle.len();
    let last_start = haystack.len() - needle_len;

    let mut state = TurboState {
        position: 0,
        ignore_num: 0,
        shift: needle_len,
    };
    while state.position <= last_start {
        let window = &haystack[state.position..state.position + needle_len];

        let match_len = if state.ignore_num == 0 {
            backwards_match_len(needle, window, needle_len, needle_len, 0)
        } else {
            // Compare up to the remembered region, then resume after it
            let match_len = backwards_match_len(needle, window, needle_len, state.shift, 0);
            if match_len == state.shift {
                backwards_match_len(
                    needle,
                    window,
                    needle_len,
                    needle_len,
                    state.shift + state.ignore_num,
                )
            } else {
                match_len
            }
        };
        if match_len >= needle_len {
            return state.position;
        }

        let mismatch_position = needle_len - 1 - match_len;
        let bad_char_shift = occ[window[mismatch_position]] as isize - match_len as isize;
        let good_suffix_shift = skip[mismatch_position];
        let turbo_shift = state.ignore_num as isize - match_len as isize;

        let mut shift = cmp::max(
            cmp::max(good_suffix_shift as isize, bad_char_shift),
            turbo_shift,
        ) as usize;

        // The order of these checks is what bounds the total comparisons
        if shift == good_suffix_shift {
            state.ignore_num = cmp::min(needle_len - shift, match_len);
        } else {
            if turbo_shift < bad_char_shift && state.ignore_num >= shift {
                shift = state.ignore_num + 1;
            }
            state.ignore_num = 0;
        }

        state.shift = shift;
        state.position += shift;
    }

    haystack.len()
}

/// Handles the cases which need no tables: needles longer than the haystack, empty needles, and
/// single-byte needles.
///
/// Returns `None` if the full search is needed.
fn trivial_search(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return Some(haystack.len());
    }

    match needle {
        [] => Some(0),
        &[byte] => Some(memchr::memchr(byte, haystack).unwrap_or(haystack.len())),
        _ => None,
    }
}
