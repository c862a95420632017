// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Iterator adaptor that conceals the length of its inner iterator.
///
/// `size_hint()` reports `(0, None)`, so callers cannot take the
/// exact-length path and must treat the source as single-pass with an
/// unknowable total count.
pub struct SinglePass<I> {
    inner: I,
}

/// Wraps `iter` so its length cannot be known before traversal.
///
/// # Example
///
/// ```rust
/// use rampart_test_utils::single_pass;
///
/// let mut it = single_pass(0..3);
/// assert_eq!(it.size_hint(), (0, None));
/// assert_eq!(it.next(), Some(0));
/// ```
pub fn single_pass<I: IntoIterator>(iter: I) -> SinglePass<I::IntoIter> {
    SinglePass {
        inner: iter.into_iter(),
    }
}

impl<I: Iterator> Iterator for SinglePass<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}
