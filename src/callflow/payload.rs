use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The wire shape of a callflow document, exactly as authored by a client and
/// persisted by the resource service. This is the target for JSON
/// deserialization; convert into [`Callflow`](super::Callflow) to get the
/// typed model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CallflowPayload {
    pub tenant_id: String,
    pub name: String,
    pub entry_id: String,
    pub nodes: Vec<NodePayload>,
}

/// A single node as it appears on the wire.
///
/// `config` is an open mapping whose shape depends on `type`; it defaults to
/// an empty object when absent. `next` names the successor node's id, or is
/// null for nodes that end the call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodePayload {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub next: Option<String>,
}
