//! Traversal tests: finiteness, restartability, and the step primitive.
mod common;
use common::*;
use novapbx::prelude::*;
use pretty_assertions::assert_eq;

fn ids(flow: &ValidatedCallflow) -> Vec<String> {
    flow.traverse().map(|n| n.id.clone()).collect()
}

#[test]
fn linear_flow_traverses_to_hangup() {
    // Scenario: [n1 start -> n2 hangup] yields [n1, n2].
    let flow = validate(Callflow::try_from(simple_payload()).unwrap()).unwrap();
    assert_eq!(ids(&flow), vec!["n1", "n2"]);
}

#[test]
fn traversal_starts_at_entry() {
    let flow = validate(Callflow::try_from(support_line_payload()).unwrap()).unwrap();
    let first = flow.traverse().next().unwrap();
    assert_eq!(first.id, flow.entry().id);
    assert_eq!(
        ids(&flow),
        vec!["start", "welcome", "main_menu", "support_queue"]
    );
}

#[test]
fn self_loop_yields_entry_twice_then_stops() {
    // Scenario: [n1 menu -> n1] yields [n1, n1].
    let flow = validate(Callflow::try_from(self_loop_payload()).unwrap()).unwrap();
    assert_eq!(ids(&flow), vec!["n1", "n1"]);
}

#[test]
fn two_node_cycle_stays_within_bound() {
    let payload = CallflowPayload {
        tenant_id: "acme".to_string(),
        name: "ping pong".to_string(),
        entry_id: "a".to_string(),
        nodes: vec![node("a", "menu", Some("b")), node("b", "play", Some("a"))],
    };
    let flow = validate(Callflow::try_from(payload).unwrap()).unwrap();
    let visited = ids(&flow);
    assert_eq!(visited, vec!["a", "b", "a"]);
    // Cycle of length 2: the sequence must stay within 2x the cycle length.
    assert!(visited.len() <= 4);
}

#[test]
fn traversal_is_restartable() {
    let flow = validate(Callflow::try_from(support_line_payload()).unwrap()).unwrap();
    assert_eq!(ids(&flow), ids(&flow));
}

#[test]
fn next_node_steps_through_the_chain() {
    let flow = validate(Callflow::try_from(simple_payload()).unwrap()).unwrap();
    let entry = flow.entry();
    let second = flow.next_node(entry).unwrap();
    assert_eq!(second.id, "n2");
    assert_eq!(second.kind(), NodeKind::Hangup);
    assert!(flow.next_node(second).is_none());
}

#[test]
fn next_node_can_loop_forever() {
    // Unlike traverse(), the step primitive follows cycles indefinitely.
    let flow = validate(Callflow::try_from(self_loop_payload()).unwrap()).unwrap();
    let mut current = flow.entry();
    for _ in 0..10 {
        current = flow.next_node(current).unwrap();
        assert_eq!(current.id, "n1");
    }
}
