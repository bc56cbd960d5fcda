//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree that element behaviors run against.
//!
//! Structural mutations return [`MutationRecord`]s instead of dispatching
//! them; the owner of the tree routes each record to the element it targets
//! through [`ElementLifecycle::notify`].

mod node;
mod tree;
mod observer;
mod dom_events;
mod custom_elements;
mod accessibility;

pub use node::{Node, NodeData, NodeFlags, ElementData, TextData, Attribute};
pub use tree::{DomTree, Children};
pub use observer::{MutationRecord, MutationType};
pub use dom_events::{DomEvent, DomEventType, EventListener};
pub use custom_elements::{ElementLifecycle, LifecycleCallback};
pub use accessibility::{AriaRole, TabIndex};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Convert the sentinel into `None`
    #[inline]
    pub fn to_option(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NotFound(NodeId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("Node {0:?} is not a text node")]
    NotText(NodeId),

    #[error("Node {child:?} already has a parent")]
    AlreadyAttached { child: NodeId },

    #[error("Inserting {child:?} into {parent:?} would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },
}

/// Result type for tree operations
pub type DomResult<T> = Result<T, DomError>;
