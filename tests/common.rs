//! Common test utilities for building callflow payloads and service fixtures.
use novapbx::prelude::*;
use serde_json::{Map, Value, json};

/// Builds a node payload with an empty config.
#[allow(dead_code)]
pub fn node(id: &str, node_type: &str, next: Option<&str>) -> NodePayload {
    NodePayload {
        id: id.to_string(),
        node_type: node_type.to_string(),
        config: Map::new(),
        next: next.map(str::to_string),
    }
}

/// Builds a node payload with the given config object.
#[allow(dead_code)]
pub fn node_with_config(id: &str, node_type: &str, config: Value, next: Option<&str>) -> NodePayload {
    NodePayload {
        id: id.to_string(),
        node_type: node_type.to_string(),
        config: config.as_object().cloned().unwrap_or_default(),
        next: next.map(str::to_string),
    }
}

/// `n1 (start) -> n2 (hangup)`, entry at `n1`.
#[allow(dead_code)]
pub fn simple_payload() -> CallflowPayload {
    CallflowPayload {
        tenant_id: "acme".to_string(),
        name: "Main line".to_string(),
        entry_id: "n1".to_string(),
        nodes: vec![node("n1", "start", Some("n2")), node("n2", "hangup", None)],
    }
}

/// A single `menu` node looping back to itself.
#[allow(dead_code)]
pub fn self_loop_payload() -> CallflowPayload {
    CallflowPayload {
        tenant_id: "acme".to_string(),
        name: "Retry menu".to_string(),
        entry_id: "n1".to_string(),
        nodes: vec![node("n1", "menu", Some("n1"))],
    }
}

/// A richer flow exercising typed configs:
/// `start -> play(welcome) -> menu -> queue(support)`.
#[allow(dead_code)]
pub fn support_line_payload() -> CallflowPayload {
    CallflowPayload {
        tenant_id: "acme".to_string(),
        name: "Support line".to_string(),
        entry_id: "start".to_string(),
        nodes: vec![
            node("start", "start", Some("welcome")),
            node_with_config(
                "welcome",
                "play",
                json!({"media": "welcome.wav"}),
                Some("main_menu"),
            ),
            node_with_config(
                "main_menu",
                "menu",
                json!({"prompt": "menu.wav", "retries": 2}),
                Some("support_queue"),
            ),
            node_with_config("support_queue", "queue", json!({"queue": "support"}), None),
        ],
    }
}

#[allow(dead_code)]
pub fn service() -> ResourceService<MemoryStore> {
    ResourceService::new(MemoryStore::new())
}

#[allow(dead_code)]
pub fn sample_tenant() -> Tenant {
    Tenant {
        name: "Acme Telecom".to_string(),
        domain: Some("acme.example".to_string()),
        active: true,
    }
}

#[allow(dead_code)]
pub fn sample_user(tenant_id: &str, email: &str) -> User {
    User {
        tenant_id: tenant_id.to_string(),
        email: email.to_string(),
        name: None,
        role: UserRole::Agent,
        active: true,
    }
}
