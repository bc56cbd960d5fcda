//! Child Indexer
//!
//! Maps 1-based ordinals to the element children of a container, in
//! document order. Text, comment and other non-element children are never
//! counted. Every query walks the live child list, so results always reflect
//! the current tree.

use fos_dom::{DomTree, NodeId};

/// Read-only view over the element children of `container`
#[derive(Debug, Clone, Copy)]
pub struct ChildIndexer<'a> {
    tree: &'a DomTree,
    container: NodeId,
}

impl<'a> ChildIndexer<'a> {
    pub fn new(tree: &'a DomTree, container: NodeId) -> Self {
        Self { tree, container }
    }

    /// Element children in document order
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + 'a {
        self.tree
            .children(self.container)
            .filter(|(_, node)| node.is_element())
            .map(|(id, _)| id)
    }

    /// The `index`-th element child; `None` for 0 or past the end
    pub fn child_at(&self, index: usize) -> Option<NodeId> {
        let offset = index.checked_sub(1)?;
        self.iter().nth(offset)
    }

    pub fn first(&self) -> Option<NodeId> {
        self.iter().next()
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// 1-based ordinal of `child`, or 0 if it is not an element child
    pub fn index_of(&self, child: NodeId) -> usize {
        self.iter()
            .position(|id| id == child)
            .map_or(0, |pos| pos + 1)
    }
}
