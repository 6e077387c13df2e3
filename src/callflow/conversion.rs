//! Conversion between the wire payload and the typed callflow model.
//!
//! Payload-to-model conversion is where field typing is enforced: unknown
//! node types and malformed per-type config values are rejected with
//! [`ValidationError::FieldConstraintViolation`]. The reverse conversion
//! restores the exact wire shape, including unrecognized config keys.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::definition::{Callflow, CallflowNode, NodeAction, NodeKind};
use super::payload::{CallflowPayload, NodePayload};
use crate::error::ValidationError;

impl TryFrom<CallflowPayload> for Callflow {
    type Error = ValidationError;

    fn try_from(payload: CallflowPayload) -> Result<Self, Self::Error> {
        let mut nodes = Vec::with_capacity(payload.nodes.len());
        for node in payload.nodes {
            nodes.push(CallflowNode::try_from(node)?);
        }
        Ok(Callflow {
            tenant_id: payload.tenant_id,
            name: payload.name,
            entry_id: payload.entry_id,
            nodes,
        })
    }
}

impl TryFrom<NodePayload> for CallflowNode {
    type Error = ValidationError;

    fn try_from(node: NodePayload) -> Result<Self, Self::Error> {
        let kind = NodeKind::parse(&node.node_type).ok_or_else(|| {
            ValidationError::FieldConstraintViolation {
                field: "type".to_string(),
                message: format!(
                    "'{}' is not a known node type (node '{}')",
                    node.node_type, node.id
                ),
            }
        })?;
        let action = parse_action(kind, &node.id, node.config)?;
        Ok(CallflowNode {
            id: node.id,
            action,
            next: node.next,
        })
    }
}

fn parse_action(
    kind: NodeKind,
    node_id: &str,
    config: Map<String, Value>,
) -> Result<NodeAction, ValidationError> {
    let action = match kind {
        NodeKind::Start => NodeAction::Start(parse_config(kind, node_id, config)?),
        NodeKind::Menu => NodeAction::Menu(parse_config(kind, node_id, config)?),
        NodeKind::Play => NodeAction::Play(parse_config(kind, node_id, config)?),
        NodeKind::Queue => NodeAction::Queue(parse_config(kind, node_id, config)?),
        NodeKind::Ring => NodeAction::Ring(parse_config(kind, node_id, config)?),
        NodeKind::Record => NodeAction::Record(parse_config(kind, node_id, config)?),
        NodeKind::Voicemail => NodeAction::Voicemail(parse_config(kind, node_id, config)?),
        NodeKind::Hangup => NodeAction::Hangup(parse_config(kind, node_id, config)?),
    };
    Ok(action)
}

fn parse_config<T: DeserializeOwned>(
    kind: NodeKind,
    node_id: &str,
    config: Map<String, Value>,
) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(config)).map_err(|e| {
        ValidationError::FieldConstraintViolation {
            field: "config".to_string(),
            message: format!("invalid {} config on node '{}': {}", kind, node_id, e),
        }
    })
}

impl From<&Callflow> for CallflowPayload {
    fn from(callflow: &Callflow) -> Self {
        CallflowPayload {
            tenant_id: callflow.tenant_id.clone(),
            name: callflow.name.clone(),
            entry_id: callflow.entry_id.clone(),
            nodes: callflow.nodes.iter().map(NodePayload::from).collect(),
        }
    }
}

impl From<&CallflowNode> for NodePayload {
    fn from(node: &CallflowNode) -> Self {
        NodePayload {
            id: node.id.clone(),
            node_type: node.kind().as_str().to_string(),
            config: node.action.config_value(),
            next: node.next.clone(),
        }
    }
}
