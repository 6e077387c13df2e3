//! Validation tests for the callflow graph model.
mod common;
use common::*;
use novapbx::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn valid_flow_passes_and_entry_resolves() {
    let flow = validate(Callflow::try_from(simple_payload()).unwrap()).unwrap();
    assert_eq!(flow.entry().id, "n1");
    assert_eq!(flow.entry().kind(), NodeKind::Start);
    assert!(flow.warnings().is_empty());
}

#[test]
fn unknown_entry_node_is_rejected() {
    let mut payload = simple_payload();
    payload.entry_id = "n9".to_string();
    // Scenario: nodes [n1 -> n2], entry "n9"
    let err = validate(Callflow::try_from(payload).unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::UnknownEntryNode("n9".to_string()));
}

#[test]
fn duplicate_node_id_is_rejected() {
    let payload = CallflowPayload {
        tenant_id: "acme".to_string(),
        name: "dup".to_string(),
        entry_id: "n1".to_string(),
        nodes: vec![node("n1", "start", None), node("n1", "hangup", None)],
    };
    let err = validate(Callflow::try_from(payload).unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::DuplicateNodeId("n1".to_string()));
}

#[test]
fn dangling_next_reference_is_rejected() {
    let payload = CallflowPayload {
        tenant_id: "acme".to_string(),
        name: "dangling".to_string(),
        entry_id: "n1".to_string(),
        nodes: vec![node("n1", "start", Some("ghost"))],
    };
    let err = validate(Callflow::try_from(payload).unwrap()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::DanglingNodeReference {
            from_id: "n1".to_string(),
            next_id: "ghost".to_string(),
        }
    );
}

#[test]
fn empty_nodes_list_is_rejected() {
    let payload = CallflowPayload {
        tenant_id: "acme".to_string(),
        name: "empty".to_string(),
        entry_id: "n1".to_string(),
        nodes: vec![],
    };
    let err = validate(Callflow::try_from(payload).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::FieldConstraintViolation { field, .. } if field == "nodes"
    ));
}

#[test]
fn blank_required_fields_are_rejected() {
    let mut payload = simple_payload();
    payload.tenant_id = "  ".to_string();
    let err = validate(Callflow::try_from(payload).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::FieldConstraintViolation { field, .. } if field == "tenant_id"
    ));
}

#[test]
fn unknown_node_type_fails_conversion() {
    let mut payload = simple_payload();
    payload.nodes[0].node_type = "teleport".to_string();
    let err = Callflow::try_from(payload).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::FieldConstraintViolation { field, .. } if field == "type"
    ));
}

#[test]
fn validation_is_idempotent() {
    let callflow = Callflow::try_from(simple_payload()).unwrap();

    let first = validate(callflow.clone()).unwrap();
    let second = validate(callflow).unwrap();

    let first_ids: Vec<&str> = first.traverse().map(|n| n.id.as_str()).collect();
    let second_ids: Vec<&str> = second.traverse().map(|n| n.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(first.warnings(), second.warnings());

    let mut bad = simple_payload();
    bad.entry_id = "n9".to_string();
    let bad_flow = Callflow::try_from(bad).unwrap();
    assert_eq!(
        validate(bad_flow.clone()).unwrap_err(),
        validate(bad_flow).unwrap_err()
    );
}

#[test]
fn self_loop_validates_with_warning() {
    // Scenario: a single menu node pointing at itself is legal.
    let flow = validate(Callflow::try_from(self_loop_payload()).unwrap()).unwrap();
    assert_eq!(
        flow.warnings(),
        &[ValidationWarning::NoTerminalPath {
            entry_id: "n1".to_string()
        }]
    );
}

#[test]
fn unreachable_node_is_warned_not_rejected() {
    let mut payload = simple_payload();
    payload.nodes.push(node("orphan", "play", None));
    let flow = validate(Callflow::try_from(payload).unwrap()).unwrap();
    assert_eq!(
        flow.warnings(),
        &[ValidationWarning::UnreachableNode {
            node_id: "orphan".to_string()
        }]
    );
}

#[test]
fn validation_error_messages_name_the_offender() {
    let err = ValidationError::UnknownEntryNode("n9".to_string());
    assert!(err.to_string().contains("n9"));

    let err = ValidationError::DanglingNodeReference {
        from_id: "a".to_string(),
        next_id: "b".to_string(),
    };
    assert!(err.to_string().contains('a'));
    assert!(err.to_string().contains('b'));
}
