//! # NovaPBX Core - Callflow Model and Resource Service
//!
//! **NovaPBX Core** models the backend of a multi-tenant PBX: flat resource
//! records (tenants, users, numbers, endpoints, leads) stored as documents,
//! and the one resource with real structure - the **callflow**, a directed
//! graph of typed IVR nodes with a designated entry point.
//!
//! ## Core Workflow
//!
//! The crate operates on a canonical typed model of a callflow. The primary
//! workflow is:
//!
//! 1.  **Deserialize the wire payload**: parse client JSON into a
//!     [`CallflowPayload`](callflow::CallflowPayload).
//! 2.  **Convert to the typed model**: `Callflow::try_from(payload)` maps each
//!     node's `type`/`config` pair onto a [`NodeAction`](callflow::NodeAction)
//!     variant, rejecting unknown types and malformed configs.
//! 3.  **Validate**: [`validate`](callflow::validate) checks id uniqueness,
//!     entry resolution and successor references, and returns a
//!     [`ValidatedCallflow`](callflow::ValidatedCallflow) with an O(1) node
//!     index and any structural warnings.
//! 4.  **Traverse or persist**: walk the flow with
//!     [`traverse`](callflow::ValidatedCallflow::traverse) (finite even for
//!     looping flows), or hand it to the
//!     [`ResourceService`](service::ResourceService) to store as one atomic
//!     document with a generated id and timestamps.
//!
//! ## Quick Start
//!
//! ```rust
//! use novapbx::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let payload: CallflowPayload = serde_json::from_str(
//!         r#"{
//!             "tenant_id": "acme",
//!             "name": "Main line",
//!             "entry_id": "n1",
//!             "nodes": [
//!                 {"id": "n1", "type": "start", "next": "n2"},
//!                 {"id": "n2", "type": "play", "config": {"media": "welcome.wav"}, "next": "n3"},
//!                 {"id": "n3", "type": "hangup"}
//!             ]
//!         }"#,
//!     )?;
//!
//!     let flow = validate(Callflow::try_from(payload)?)?;
//!     for node in flow.traverse() {
//!         println!("{} ({})", node.id, node.kind());
//!     }
//!
//!     // Store it through the resource service.
//!     let service = ResourceService::new(MemoryStore::new());
//!     let stored = CallflowPayload::from(flow.callflow());
//!     let response = service.create_callflow(stored)?;
//!     println!("stored as {:?}", response.created_id());
//!     Ok(())
//! }
//! ```

pub mod callflow;
pub mod error;
pub mod prelude;
pub mod service;
pub mod store;
