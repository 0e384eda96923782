// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single link in the chain: one value plus ownership of its successor.

use crate::value::ScalarValue;

/// A node holding one scalar value and an exclusive link to the next node.
///
/// The value is fixed at construction (there is no setter); the successor
/// link is the only mutable field. Each node owns its successor via `Box`,
/// so the chain is structurally acyclic and dropping a node releases
/// everything reachable only through it.
#[derive(Debug)]
pub struct Node {
    value: ScalarValue,
    next: Option<Box<Node>>,
}

impl Node {
    /// Create a node with no successor. The value is stored verbatim; kind
    /// validation is the list's responsibility.
    pub fn new(value: ScalarValue) -> Self {
        Node { value, next: None }
    }

    /// The stored value.
    pub fn value(&self) -> &ScalarValue {
        &self.value
    }

    /// The current successor, if any.
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// Replace the successor link. Only the link changes; the referenced
    /// node's own state is untouched.
    pub fn set_next(&mut self, node: Option<Box<Node>>) {
        self.next = node;
    }

    /// Detach and return the successor, leaving this node with none.
    pub(crate) fn take_next(&mut self) -> Option<Box<Node>> {
        self.next.take()
    }

    /// Mutable access to the successor slot, for splicing.
    pub(crate) fn next_slot(&mut self) -> &mut Option<Box<Node>> {
        &mut self.next
    }
}
