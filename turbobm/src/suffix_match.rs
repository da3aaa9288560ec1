// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Counts how many bytes `a` and `b` have in common, comparing backwards from the end of their
/// first `len` bytes.
///
/// Counting starts at `min_len`, i.e., the last `min_len` bytes are assumed to already match and
/// are not compared again. Counting stops at the first mismatch or once `max_len` is reached.
///
/// The caller must ensure that `max_len <= len` and that both `a` and `b` hold at least `len`
/// bytes. If `min_len >= max_len`, `min_len` is returned without comparing anything.
#[inline]
pub(crate) fn backwards_match_len(
    a: &[u8],
    b: &[u8],
    len: usize,
    max_len: usize,
    min_len: usize,
) -> usize {
    let mut result = min_len;
    while result < max_len && a[len - 1 - result] == b[len - 1 - result] {
        result += 1;
    }
    result
}
