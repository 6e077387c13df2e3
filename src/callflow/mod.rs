//! The callflow graph model: wire payloads, the typed node graph, structural
//! validation, and termination-safe traversal.

pub mod conversion;
pub mod definition;
pub mod payload;
pub mod traverse;
pub mod validate;

pub use definition::*;
pub use payload::*;
pub use traverse::*;
pub use validate::*;
