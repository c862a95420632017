// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use rampart_test_utils::{LiveSet, single_pass};

use crate::{FixedVec, FixedVecError};

const CAP: usize = 8;

fn build(set: &LiveSet, len: usize) -> FixedVec<rampart_test_utils::Tracked, CAP> {
    let mut vec = FixedVec::new();
    for value in 0..len {
        vec.push(set.value(value as i32)).unwrap();
    }
    vec
}

fn contents(vec: &FixedVec<rampart_test_utils::Tracked, CAP>) -> Vec<i32> {
    vec.iter().map(|t| t.get()).collect()
}

proptest! {
    // The central property: for every combination of insertion position,
    // initial length, and single-pass source size, an overflowing insert
    // restores the exact pre-call state and a fitting insert produces
    // prefix + inserted + suffix. Element accounting must balance either way.
    #[test]
    fn single_pass_insert_fits_or_rolls_back(
        initial_len in 0..=CAP,
        pos_seed in 0..=CAP,
        source_len in 0..=2 * CAP,
    ) {
        let set = LiveSet::new();
        let pos = pos_seed % (initial_len + 1);
        let mut vec = build(&set, initial_len);
        let before = contents(&vec);

        let source: Vec<_> = (0..source_len).map(|v| set.value(100 + v as i32)).collect();
        let result = vec.insert_from_iter(pos, single_pass(source));

        if initial_len + source_len <= CAP {
            prop_assert_eq!(result.unwrap(), source_len);

            let mut expected = before[..pos].to_vec();
            expected.extend((0..source_len).map(|v| 100 + v as i32));
            expected.extend_from_slice(&before[pos..]);
            prop_assert_eq!(contents(&vec), expected);
        } else {
            let is_capacity_exceeded = matches!(result, Err(FixedVecError::CapacityExceeded { .. }));
            prop_assert!(is_capacity_exceeded);
            prop_assert_eq!(contents(&vec), before);
        }

        let live_in_vec = vec.len() as isize;
        prop_assert_eq!(set.live(), live_in_vec);
        drop(vec);
        prop_assert_eq!(set.live(), 0);
    }

    #[test]
    fn insert_then_erase_round_trips(
        initial_len in 0..=CAP,
        pos_seed in 0..=CAP,
        count in 0..=CAP,
    ) {
        let set = LiveSet::new();
        let pos = pos_seed % (initial_len + 1);
        let mut vec = build(&set, initial_len);
        let before = contents(&vec);

        let source: Vec<_> = (0..count).map(|v| set.value(200 + v as i32)).collect();
        if vec.insert_from_iter(pos, single_pass(source)).is_ok() {
            vec.erase(pos..pos + count).unwrap();
        }

        prop_assert_eq!(contents(&vec), before);
        drop(vec);
        prop_assert_eq!(set.live(), 0);
    }

    #[test]
    fn swap_exchanges_or_leaves_both(
        len_a in 0..=4usize,
        len_b in 0..=CAP,
    ) {
        let set = LiveSet::new();
        let mut a: FixedVec<_, 4> = {
            let mut vec = FixedVec::new();
            for value in 0..len_a {
                vec.push(set.value(value as i32)).unwrap();
            }
            vec
        };
        let mut b = build(&set, len_b);

        let a_before: Vec<i32> = a.iter().map(|t| t.get()).collect();
        let b_before = contents(&b);

        match a.swap_with(&mut b) {
            Ok(()) => {
                prop_assert_eq!(a.iter().map(|t| t.get()).collect::<Vec<_>>(), b_before);
                prop_assert_eq!(contents(&b), a_before);
            }
            Err(FixedVecError::CapacityExceeded { .. }) => {
                prop_assert!(len_b > 4);
                prop_assert_eq!(a.iter().map(|t| t.get()).collect::<Vec<_>>(), a_before);
                prop_assert_eq!(contents(&b), b_before);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }

        drop(a);
        drop(b);
        prop_assert_eq!(set.live(), 0);
    }

    #[test]
    fn length_invariant_holds_under_mixed_ops(
        ops in proptest::collection::vec(0u8..6, 0..40),
    ) {
        let set = LiveSet::new();
        let mut vec: FixedVec<_, CAP> = FixedVec::new();
        let mut next = 0i32;

        for op in ops {
            match op {
                0 | 1 => {
                    let _ = vec.push(set.value(next));
                    next += 1;
                }
                2 => {
                    let _ = vec.pop();
                }
                3 => {
                    let pos = vec.len() / 2;
                    let _ = vec.insert(pos, set.value(next));
                    next += 1;
                }
                4 => {
                    if !vec.is_empty() {
                        let _ = vec.remove(vec.len() - 1);
                    }
                }
                _ => {
                    let target = vec.len() / 2;
                    vec.truncate(target);
                }
            }

            prop_assert!(vec.len() <= CAP);
            prop_assert_eq!(set.live(), vec.len() as isize);
        }

        drop(vec);
        prop_assert_eq!(set.live(), 0);
    }
}
