use ahash::AHashSet;

use super::definition::CallflowNode;
use super::validate::ValidatedCallflow;

/// A finite walk over a validated callflow, starting at the entry node and
/// following `next` references.
///
/// When the walk re-encounters a node it has already yielded, it yields that
/// node once more and then stops, so traversal never hangs a caller even for
/// looping flows. Obtain a fresh `Traversal` to restart; the underlying
/// definition is immutable, so repeated traversals yield the same sequence.
pub struct Traversal<'a> {
    flow: &'a ValidatedCallflow,
    current: Option<&'a CallflowNode>,
    visited: AHashSet<&'a str>,
}

impl<'a> Traversal<'a> {
    fn new(flow: &'a ValidatedCallflow) -> Self {
        Self {
            flow,
            current: Some(flow.entry()),
            visited: AHashSet::new(),
        }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a CallflowNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        if self.visited.insert(node.id.as_str()) {
            // Successors are checked during validation, so a present `next`
            // always resolves.
            self.current = self.flow.next_node(node);
        }
        Some(node)
    }
}

impl ValidatedCallflow {
    /// Returns the sequence of nodes visited from the entry node. See
    /// [`Traversal`] for the termination guarantee.
    pub fn traverse(&self) -> Traversal<'_> {
        Traversal::new(self)
    }
}
