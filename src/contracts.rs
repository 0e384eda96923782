// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the list invariants.
//!
//! Debug-mode assertions checked after every mutating operation:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Invariant                                        |
//! |------------------------|--------------------------------------------------|
//! | `check_sorted`         | chain is non-decreasing under the kind's order   |
//! | `check_kind_uniform`   | one kind throughout; kind unset iff chain empty  |
//!
//! Acyclicity needs no contract: each node exclusively owns its successor,
//! so a cycle is unrepresentable.

use std::cmp::Ordering;

use crate::list::SortedLinkedList;
use crate::value::ScalarValue;

/// Check every invariant the list maintains.
///
/// # Panics (debug builds only)
/// Panics if the chain is out of order or kind-inconsistent.
#[inline]
pub fn check_well_formed(list: &SortedLinkedList) {
    check_sorted(list);
    check_kind_uniform(list);
}

/// Check that the chain is non-decreasing head-to-tail.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order or incomparable.
#[inline]
pub fn check_sorted(list: &SortedLinkedList) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut previous = None;
    for (position, value) in list.iter().enumerate() {
        if let Some(prev) = previous {
            debug_assert!(
                matches!(
                    ScalarValue::partial_cmp(prev, value),
                    Some(Ordering::Less | Ordering::Equal)
                ),
                "chain out of order at position {}: {:?} > {:?}",
                position,
                prev,
                value
            );
        }
        previous = Some(value);
    }
}

/// Check that every value carries the enforced kind, and that the kind is
/// unset exactly when the chain is empty.
///
/// # Panics (debug builds only)
/// Panics if a value's kind differs from the list's, or if the kind tag is
/// set on an empty list (or unset on a non-empty one).
#[inline]
pub fn check_kind_uniform(list: &SortedLinkedList) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert_eq!(
        list.kind().is_none(),
        list.is_empty(),
        "kind tag must be unset exactly when the chain is empty"
    );
    for (position, value) in list.iter().enumerate() {
        debug_assert_eq!(
            Some(value.kind()),
            list.kind(),
            "value at position {} has kind {:?}, list enforces {:?}",
            position,
            value.kind(),
            list.kind()
        );
    }
}
