// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scalar values and their kinds.
//!
//! A list stores values of exactly one [`ScalarKind`], adopted at first
//! insertion. Modeling the value space as a two-variant sum type means a
//! malformed value (anything that is neither an integer nor text) is
//! unrepresentable: the type-contract half of the error surface is
//! discharged by the compiler, leaving kind mismatch as the only runtime
//! error.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar value a list can hold: an integer or a piece of text.
///
/// Equality is derived over the sum type, so values of different kinds are
/// never equal. Ordering is partial for the same reason: same-kind pairs
/// compare under the kind's total order, cross-kind pairs return `None`.
/// There is deliberately no `Ord` impl — no total order across kinds exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ScalarValue {
    /// An integer value, compared numerically.
    Int(i64),
    /// A text value, compared byte-lexicographically.
    Text(String),
}

impl ScalarValue {
    /// The kind tag of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Int(_) => ScalarKind::Int,
            ScalarValue::Text(_) => ScalarKind::Text,
        }
    }
}

impl PartialOrd for ScalarValue {
    /// Kind-aware comparison: numeric for integers, byte-lexicographic for
    /// text, `None` across kinds.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (ScalarValue::Int(a), ScalarValue::Int(b)) => Some(a.cmp(b)),
            (ScalarValue::Text(a), ScalarValue::Text(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            _ => None,
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Int(value) => write!(f, "{}", value),
            ScalarValue::Text(value) => write!(f, "{}", value),
        }
    }
}

/// The kind of scalar a list enforces: integer or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScalarKind {
    /// 64-bit signed integers, numeric order.
    Int,
    /// UTF-8 text, byte-lexicographic order.
    Text,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Int => f.write_str("integer"),
            ScalarKind::Text => f.write_str("text"),
        }
    }
}
