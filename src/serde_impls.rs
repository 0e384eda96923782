// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serde support, behind the `serde` feature.
//!
//! A list serializes as its ordered value sequence — the same view
//! `to_vec` gives. Deserialization re-inserts each element, so a sequence
//! mixing kinds is rejected with the kind-mismatch error rather than
//! producing a list that violates its own invariants.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::list::SortedLinkedList;
use crate::value::ScalarValue;

impl Serialize for SortedLinkedList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for SortedLinkedList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<ScalarValue>::deserialize(deserializer)?;
        let mut list = SortedLinkedList::new();
        for value in values {
            list.insert(value).map_err(D::Error::custom)?;
        }
        Ok(list)
    }
}
