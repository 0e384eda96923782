// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sorted singly-linked list.
//!
//! Every operation is a single traversal-and-mutate pass from the head —
//! no cursors persist between calls. The chain satisfies three invariants
//! (checked in debug builds by [`crate::contracts`]):
//!
//! 1. **Sorted**: values are non-decreasing head-to-tail under the enforced
//!    kind's total order.
//! 2. **Kind-uniform**: all values share the enforced kind; the kind is
//!    unset exactly when the chain is empty.
//! 3. **Acyclic**: each node exclusively owns its successor, so the chain
//!    is a finite simple sequence by construction.

use std::cmp::Ordering;

use crate::contracts;
use crate::error::ListError;
use crate::node::Node;
use crate::value::{ScalarKind, ScalarValue};

/// A sorted (ascending) singly-linked list holding values of one consistent
/// scalar kind, adopted at the first insertion and enforced thereafter.
///
/// # Example
///
/// ```
/// use ordlist::SortedLinkedList;
///
/// let mut list = SortedLinkedList::new();
/// list.insert(3)?;
/// list.insert(1)?;
/// list.insert(2)?;
/// let values: Vec<i64> = list
///     .iter()
///     .map(|v| match v {
///         ordlist::ScalarValue::Int(i) => *i,
///         _ => unreachable!(),
///     })
///     .collect();
/// assert_eq!(values, [1, 2, 3]);
///
/// // The list now enforces integers:
/// assert!(list.insert("three").is_err());
/// # Ok::<(), ordlist::ListError>(())
/// ```
#[derive(Debug, Default)]
pub struct SortedLinkedList {
    head: Option<Box<Node>>,
    kind: Option<ScalarKind>,
}

impl SortedLinkedList {
    /// Create an empty list. The kind is unset until the first insertion.
    pub fn new() -> Self {
        SortedLinkedList {
            head: None,
            kind: None,
        }
    }

    /// The kind this list currently enforces, or `None` while empty.
    pub fn kind(&self) -> Option<ScalarKind> {
        self.kind
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of values in the list. O(n): the chain is walked.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Insert a value at its sorted position.
    ///
    /// The first successful insertion fixes the list's kind; later inserts
    /// of the other kind fail with [`ListError::KindMismatch`] and leave the
    /// list untouched. Insertion is stable: a duplicate lands after all
    /// existing equal values.
    pub fn insert(&mut self, value: impl Into<ScalarValue>) -> Result<(), ListError> {
        let value = value.into();
        let incoming = value.kind();
        match self.kind {
            None => self.kind = Some(incoming),
            Some(enforced) if enforced != incoming => {
                return Err(ListError::KindMismatch {
                    value: incoming,
                    list: enforced,
                });
            }
            Some(_) => {}
        }

        // Walk past every node that orders <= the new value. The kind check
        // above guarantees same-kind comparisons, so partial_cmp is total
        // here; a duplicate keeps walking, which makes insertion stable.
        // Test with a shared borrow, then advance: the mutable reborrow in
        // the body must not outlive the comparison.
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| {
            matches!(
                node.value().partial_cmp(&value),
                Some(Ordering::Less | Ordering::Equal)
            )
        }) {
            cursor = cursor.as_mut().unwrap().next_slot();
        }

        let mut node = Box::new(Node::new(value));
        node.set_next(cursor.take());
        *cursor = Some(node);

        contracts::check_well_formed(self);
        Ok(())
    }

    /// Remove the first node equal to `value`. Returns whether a node was
    /// removed; deleting an absent value is a no-op, not an error.
    pub fn delete(&mut self, value: impl Into<ScalarValue>) -> bool {
        self.remove_first(&value.into())
    }

    /// Remove every node equal to `value`, returning how many were removed.
    pub fn delete_all_of(&mut self, value: impl Into<ScalarValue>) -> usize {
        let value = value.into();
        let mut removed = 0;
        while self.remove_first(&value) {
            removed += 1;
        }
        removed
    }

    fn remove_first(&mut self, value: &ScalarValue) -> bool {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value() != value) {
            cursor = cursor.as_mut().unwrap().next_slot();
        }

        let removed = match cursor.take() {
            Some(mut node) => {
                *cursor = node.take_next();
                true
            }
            None => false,
        };

        // Kind is unset exactly when the chain is empty.
        if self.head.is_none() {
            self.kind = None;
        }
        contracts::check_well_formed(self);
        removed
    }

    /// Release the entire chain and reset the enforced kind, re-enabling
    /// kind adoption on the next insertion as if freshly constructed.
    pub fn clear(&mut self) {
        // Unlink iteratively so a long chain cannot overflow the stack
        // through recursive Box drops.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.take_next();
        }
        self.kind = None;
    }

    /// Find the first node equal to `value`.
    ///
    /// The returned borrow observes live node state; because it borrows the
    /// list, holding it across any mutating call is a compile error rather
    /// than a documented hazard.
    pub fn find(&self, value: impl Into<ScalarValue>) -> Option<&Node> {
        let value = value.into();
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            if *current.value() == value {
                return Some(current);
            }
            node = current.next();
        }
        None
    }

    /// Whether a node equal to `value` exists. A probe of the other kind is
    /// well-defined and returns `false`, never an error.
    pub fn exists(&self, value: impl Into<ScalarValue>) -> bool {
        self.find(value).is_some()
    }

    /// Snapshot of all values, head-to-tail. Independent of later mutations.
    pub fn to_vec(&self) -> Vec<ScalarValue> {
        self.iter().cloned().collect()
    }

    /// Iterate over the values in sorted order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            node: self.head.as_deref(),
        }
    }
}

impl Drop for SortedLinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a SortedLinkedList {
    type Item = &'a ScalarValue;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Borrowing iterator over a list's values in sorted order.
#[derive(Debug)]
pub struct Iter<'a> {
    node: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ScalarValue;

    fn next(&mut self) -> Option<&'a ScalarValue> {
        let node = self.node?;
        self.node = node.next();
        Some(node.value())
    }
}
