// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for list operations.

use std::fmt;

use crate::value::ScalarKind;

/// Error returned by list operations.
///
/// Kind mismatch on insert is the only runtime failure: every other
/// operation is total and reports absence as a no-op, `None`, or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The inserted value's kind differs from the kind the list enforces.
    /// The list is left unchanged.
    KindMismatch {
        /// Kind of the offending value.
        value: ScalarKind,
        /// Kind the list enforces.
        list: ScalarKind,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::KindMismatch { value, list } => {
                write!(
                    f,
                    "cannot insert a value of kind {} into a list of kind {}",
                    value, list
                )
            }
        }
    }
}

impl std::error::Error for ListError {}
