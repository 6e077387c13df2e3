use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The canonical, typed definition of a callflow: a directed graph of IVR
/// nodes owned by a tenant. Authoring order of `nodes` is preserved but
/// carries no execution meaning; only `next` references determine flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Callflow {
    pub tenant_id: String,
    pub name: String,
    pub entry_id: String,
    pub nodes: Vec<CallflowNode>,
}

/// A single node in the callflow graph.
#[derive(Debug, Clone, PartialEq)]
pub struct CallflowNode {
    pub id: String,
    pub action: NodeAction,
    /// Id of the successor node, or `None` for nodes that end the call.
    pub next: Option<String>,
}

impl CallflowNode {
    pub fn kind(&self) -> NodeKind {
        self.action.kind()
    }
}

/// The fixed enumeration of node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Menu,
    Play,
    Queue,
    Ring,
    Record,
    Voicemail,
    Hangup,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Start,
        NodeKind::Menu,
        NodeKind::Play,
        NodeKind::Queue,
        NodeKind::Ring,
        NodeKind::Record,
        NodeKind::Voicemail,
        NodeKind::Hangup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Menu => "menu",
            NodeKind::Play => "play",
            NodeKind::Queue => "queue",
            NodeKind::Ring => "ring",
            NodeKind::Record => "record",
            NodeKind::Voicemail => "voicemail",
            NodeKind::Hangup => "hangup",
        }
    }

    /// Parses a wire type name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<NodeKind> {
        NodeKind::ALL.iter().copied().find(|k| k.as_str() == name)
    }

    /// Node types that end the call by convention and carry no successor.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKind::Hangup | NodeKind::Voicemail)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a node does when execution reaches it: a tagged union keyed by node
/// type, one variant per type with its own structured config.
///
/// Each config keeps unrecognized keys in an `extra` mapping, so the open
/// per-type extension point of the wire format is preserved through the typed
/// model and restored on serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeAction {
    Start(StartConfig),
    Menu(MenuConfig),
    Play(PlayConfig),
    Queue(QueueConfig),
    Ring(RingConfig),
    Record(RecordConfig),
    Voicemail(VoicemailConfig),
    Hangup(HangupConfig),
}

impl NodeAction {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeAction::Start(_) => NodeKind::Start,
            NodeAction::Menu(_) => NodeKind::Menu,
            NodeAction::Play(_) => NodeKind::Play,
            NodeAction::Queue(_) => NodeKind::Queue,
            NodeAction::Ring(_) => NodeKind::Ring,
            NodeAction::Record(_) => NodeKind::Record,
            NodeAction::Voicemail(_) => NodeKind::Voicemail,
            NodeAction::Hangup(_) => NodeKind::Hangup,
        }
    }

    /// Serializes the per-type config back to the open wire mapping.
    pub fn config_value(&self) -> Map<String, Value> {
        let value = match self {
            NodeAction::Start(c) => serde_json::to_value(c),
            NodeAction::Menu(c) => serde_json::to_value(c),
            NodeAction::Play(c) => serde_json::to_value(c),
            NodeAction::Queue(c) => serde_json::to_value(c),
            NodeAction::Ring(c) => serde_json::to_value(c),
            NodeAction::Record(c) => serde_json::to_value(c),
            NodeAction::Voicemail(c) => serde_json::to_value(c),
            NodeAction::Hangup(c) => serde_json::to_value(c),
        };
        // Config structs contain only optional fields and a string-keyed
        // extra mapping, so they always serialize to a JSON object.
        match value {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Entry marker for a flow. Carries no configuration of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartConfig {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// DTMF menu: plays a prompt and branches on caller input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Plays an audio resource to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parks the caller in a named queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Rings a target user or endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Records the call from this point on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Drops the caller into a mailbox.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoicemailConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailbox: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ends the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HangupConfig {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
