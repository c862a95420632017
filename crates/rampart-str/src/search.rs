// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Read-only search over the live code units.
//!
//! Substring search is a plain scan, worst case O(n·m); single-unit and
//! unit-set searches are O(n). All searches return `Option<usize>`.

use crate::fixed_str::FixedStr;

impl<const N: usize> FixedStr<N> {
    /// Returns the first occurrence of `needle` at or after `from`.
    ///
    /// An empty needle matches at `from` whenever `from <= len`.
    pub fn find(&self, needle: &[u8], from: usize) -> Option<usize> {
        let hay = self.as_bytes();
        if from > hay.len() {
            return None;
        }
        if needle.is_empty() {
            return Some(from);
        }
        hay[from..]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|i| i + from)
    }

    /// Returns the last occurrence of `needle`.
    ///
    /// An empty needle matches at `len`.
    pub fn rfind(&self, needle: &[u8]) -> Option<usize> {
        let hay = self.as_bytes();
        if needle.is_empty() {
            return Some(hay.len());
        }
        hay.windows(needle.len()).rposition(|window| window == needle)
    }

    /// Returns the first position at or after `from` holding any unit of
    /// `set`.
    pub fn find_first_of(&self, set: &[u8], from: usize) -> Option<usize> {
        let hay = self.as_bytes();
        if from > hay.len() {
            return None;
        }
        hay[from..]
            .iter()
            .position(|unit| set.contains(unit))
            .map(|i| i + from)
    }

    /// Returns the first position at or after `from` holding a unit outside
    /// `set`.
    pub fn find_first_not_of(&self, set: &[u8], from: usize) -> Option<usize> {
        let hay = self.as_bytes();
        if from > hay.len() {
            return None;
        }
        hay[from..]
            .iter()
            .position(|unit| !set.contains(unit))
            .map(|i| i + from)
    }

    /// Returns the last position holding any unit of `set`.
    pub fn find_last_of(&self, set: &[u8]) -> Option<usize> {
        self.as_bytes().iter().rposition(|unit| set.contains(unit))
    }

    /// Returns the last position holding a unit outside `set`.
    pub fn find_last_not_of(&self, set: &[u8]) -> Option<usize> {
        self.as_bytes().iter().rposition(|unit| !set.contains(unit))
    }
}
