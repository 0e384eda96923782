//! Unit tests for the node abstraction.

use ordlist::{Node, ScalarValue};

#[test]
fn constructor_sets_value_and_next_is_none() {
    let node = Node::new(ScalarValue::from("test"));
    assert_eq!(*node.value(), ScalarValue::from("test"));
    assert!(node.next().is_none());
}

#[test]
fn set_next_links_a_successor() {
    let mut first = Node::new(ScalarValue::from("a"));
    let second = Node::new(ScalarValue::from("b"));

    first.set_next(Some(Box::new(second)));

    let linked = first.next().expect("successor was just linked");
    assert_eq!(*linked.value(), ScalarValue::from("b"));
    assert!(linked.next().is_none());
}

#[test]
fn set_next_none_unlinks() {
    let mut first = Node::new(ScalarValue::Int(1));
    first.set_next(Some(Box::new(Node::new(ScalarValue::Int(2)))));
    first.set_next(None);
    assert!(first.next().is_none());
}

#[test]
fn set_next_does_not_touch_the_linked_node() {
    let mut tail = Node::new(ScalarValue::Int(3));
    tail.set_next(Some(Box::new(Node::new(ScalarValue::Int(4)))));

    let mut head = Node::new(ScalarValue::Int(1));
    head.set_next(Some(Box::new(tail)));

    // The tail's own successor survives being linked under a new head
    let tail = head.next().expect("tail is linked");
    assert_eq!(*tail.value(), ScalarValue::Int(3));
    assert_eq!(
        tail.next().map(|n| n.value().clone()),
        Some(ScalarValue::Int(4))
    );
}
