// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted singly-linked list over kind-enforced scalar values.
//!
//! A [`SortedLinkedList`] holds integers or text — one kind per list,
//! adopted at the first insertion and enforced until the list empties.
//! Insertion keeps the chain sorted (stably: new duplicates land after
//! existing equal values); deletion, lookup, and membership tests are
//! total operations that report absence instead of failing. Everything
//! is a single O(n) pass over the chain — deliberately so, there is no
//! balancing or indexing structure behind it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │  value.rs   │────▶│   node.rs   │────▶│     list.rs      │
//! │ (ScalarValue│     │ (Node: value│     │ (SortedLinkedList│
//! │  ScalarKind)│     │  + next)    │     │  all operations) │
//! └─────────────┘     └─────────────┘     └──────────────────┘
//!                                                  │
//!                                                  ▼
//!                                         ┌──────────────────┐
//!                                         │   contracts.rs   │
//!                                         │ (debug invariant │
//!                                         │     checks)      │
//!                                         └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ordlist::{ScalarValue, SortedLinkedList};
//!
//! let mut list = SortedLinkedList::new();
//! list.insert("banana")?;
//! list.insert("apple")?;
//! list.insert("cherry")?;
//!
//! assert!(list.exists("banana"));
//! assert!(!list.exists(42)); // cross-kind probe: false, not an error
//! assert_eq!(
//!     list.to_vec(),
//!     vec![
//!         ScalarValue::from("apple"),
//!         ScalarValue::from("banana"),
//!         ScalarValue::from("cherry"),
//!     ],
//! );
//! # Ok::<(), ordlist::ListError>(())
//! ```
//!
//! # Concurrency
//!
//! Single-threaded by design: no operation blocks, yields, or spawns, and
//! nothing here synchronizes. Wrap the whole list in a lock if it must be
//! shared across threads.

pub mod contracts;
mod error;
mod list;
mod node;
mod value;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::ListError;
pub use list::{Iter, SortedLinkedList};
pub use node::Node;
pub use value::{ScalarKind, ScalarValue};
