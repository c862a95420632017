// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicIsize, Ordering};

/// Per-test accounting of live [`Tracked`] instances.
///
/// Each test creates its own `LiveSet`, mints values through it, and asserts
/// `live() == 0` once every container has been dropped. A leak shows up as a
/// positive residue, a double-drop as a negative one.
///
/// # Example
///
/// ```rust
/// use rampart_test_utils::LiveSet;
///
/// let set = LiveSet::new();
/// let value = set.value(42);
/// assert_eq!(set.live(), 1);
/// drop(value);
/// assert_eq!(set.live(), 0);
/// ```
#[derive(Clone, Default)]
pub struct LiveSet {
    count: Arc<AtomicIsize>,
}

impl LiveSet {
    /// Creates an empty accounting set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a tracked value belonging to this set.
    pub fn value(&self, value: i32) -> Tracked {
        self.count.fetch_add(1, Ordering::SeqCst);
        Tracked {
            value,
            count: Arc::clone(&self.count),
        }
    }

    /// Returns the number of currently live values minted from this set.
    pub fn live(&self) -> isize {
        self.count.load(Ordering::SeqCst)
    }
}

/// A non-trivial element type whose constructions and drops are counted.
///
/// Clones register as new live instances; moves do not. Comparisons and
/// ordering look only at the payload value.
pub struct Tracked {
    value: i32,
    count: Arc<AtomicIsize>,
}

impl Tracked {
    /// Returns the payload value.
    pub fn get(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.count.fetch_add(1, Ordering::SeqCst);
        Self {
            value: self.value,
            count: Arc::clone(&self.count),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl core::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}
