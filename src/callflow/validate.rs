use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::fmt;

use super::definition::{Callflow, CallflowNode};
use crate::error::ValidationError;

/// Structural findings that do not reject a callflow. IVR flows legitimately
/// loop (e.g. a menu retry), so cycle structure is reported rather than
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Every path from the entry loops forever; no reachable node ends the
    /// call.
    NoTerminalPath { entry_id: String },
    /// The node cannot be reached from the entry by following `next`
    /// references.
    UnreachableNode { node_id: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::NoTerminalPath { entry_id } => write!(
                f,
                "No path from entry node '{}' ever ends the call",
                entry_id
            ),
            ValidationWarning::UnreachableNode { node_id } => {
                write!(f, "Node '{}' is unreachable from the entry node", node_id)
            }
        }
    }
}

/// A callflow that has passed structural validation, wrapping the original
/// definition plus a precomputed `id -> node` index for O(1) lookup.
///
/// The wrapped definition is immutable; replacing a callflow means validating
/// and storing a whole new document.
#[derive(Debug, Clone)]
pub struct ValidatedCallflow {
    callflow: Callflow,
    index: AHashMap<String, usize>,
    warnings: Vec<ValidationWarning>,
}

impl ValidatedCallflow {
    pub fn callflow(&self) -> &Callflow {
        &self.callflow
    }

    /// The node execution begins at. Guaranteed to exist by validation.
    pub fn entry(&self) -> &CallflowNode {
        &self.callflow.nodes[self.index[&self.callflow.entry_id]]
    }

    /// Looks up a node by id.
    pub fn get(&self, id: &str) -> Option<&CallflowNode> {
        self.index.get(id).map(|&i| &self.callflow.nodes[i])
    }

    /// Single-step successor primitive for callers that want looping
    /// execution semantics instead of the finite [`traverse`] sequence.
    ///
    /// [`traverse`]: ValidatedCallflow::traverse
    pub fn next_node(&self, node: &CallflowNode) -> Option<&CallflowNode> {
        node.next.as_deref().and_then(|id| self.get(id))
    }

    /// Non-fatal findings recorded during validation.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn into_inner(self) -> Callflow {
        self.callflow
    }
}

/// Validates a callflow definition, returning a traversable wrapper on
/// success.
///
/// Checks run in order: field-level constraints, node id uniqueness, entry
/// resolution, and dangling `next` references. Cycle and reachability
/// analysis never fails validation; its findings land in
/// [`ValidatedCallflow::warnings`].
///
/// Pure function over its input: validating the same definition twice yields
/// the same result.
pub fn validate(callflow: Callflow) -> Result<ValidatedCallflow, ValidationError> {
    check_fields(&callflow)?;

    if let Some(dup) = callflow
        .nodes
        .iter()
        .map(|n| n.id.as_str())
        .duplicates()
        .next()
    {
        return Err(ValidationError::DuplicateNodeId(dup.to_string()));
    }

    let index: AHashMap<String, usize> = callflow
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), i))
        .collect();

    if !index.contains_key(&callflow.entry_id) {
        return Err(ValidationError::UnknownEntryNode(callflow.entry_id.clone()));
    }

    // The reference system accepted dangling successors; rejecting them here
    // is a deliberate strengthening.
    for node in &callflow.nodes {
        if let Some(next) = &node.next
            && !index.contains_key(next)
        {
            return Err(ValidationError::DanglingNodeReference {
                from_id: node.id.clone(),
                next_id: next.clone(),
            });
        }
    }

    let warnings = analyze_reachability(&callflow, &index);
    Ok(ValidatedCallflow {
        callflow,
        index,
        warnings,
    })
}

fn check_fields(callflow: &Callflow) -> Result<(), ValidationError> {
    require_non_empty("tenant_id", &callflow.tenant_id)?;
    require_non_empty("name", &callflow.name)?;
    require_non_empty("entry_id", &callflow.entry_id)?;
    if callflow.nodes.is_empty() {
        return Err(ValidationError::FieldConstraintViolation {
            field: "nodes".to_string(),
            message: "a callflow must contain at least one node".to_string(),
        });
    }
    for node in &callflow.nodes {
        require_non_empty("nodes[].id", &node.id)?;
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::FieldConstraintViolation {
            field: field.to_string(),
            message: "must be a non-empty string".to_string(),
        });
    }
    Ok(())
}

/// Walks the `next` chain from the entry. Each node has at most one
/// successor, so the reachable set is a single chain that either ends at a
/// node without `next` or closes a loop.
fn analyze_reachability(
    callflow: &Callflow,
    index: &AHashMap<String, usize>,
) -> Vec<ValidationWarning> {
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut current = Some(callflow.entry_id.as_str());
    let mut terminates = false;

    while let Some(id) = current {
        if !visited.insert(id) {
            break;
        }
        let node = &callflow.nodes[index[id]];
        match node.next.as_deref() {
            Some(next) => current = Some(next),
            None => {
                terminates = true;
                break;
            }
        }
    }

    let mut warnings = Vec::new();
    if !terminates {
        warnings.push(ValidationWarning::NoTerminalPath {
            entry_id: callflow.entry_id.clone(),
        });
    }
    for node in &callflow.nodes {
        if !visited.contains(node.id.as_str()) {
            warnings.push(ValidationWarning::UnreachableNode {
                node_id: node.id.clone(),
            });
        }
    }
    warnings
}
