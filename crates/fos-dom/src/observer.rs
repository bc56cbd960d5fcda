//! Mutation records
//!
//! Produced by every structural or attribute mutation of a [`DomTree`](crate::DomTree).

use crate::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    Attributes,
    CharacterData,
    ChildList,
}

/// Mutation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub mutation_type: MutationType,
    pub target: NodeId,
    pub added_nodes: Vec<NodeId>,
    pub removed_nodes: Vec<NodeId>,
    pub previous_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub attribute_name: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl MutationRecord {
    /// Record for a child inserted into `target`
    pub fn child_added(target: NodeId, child: NodeId, previous_sibling: Option<NodeId>, next_sibling: Option<NodeId>) -> Self {
        Self {
            mutation_type: MutationType::ChildList,
            target,
            added_nodes: vec![child],
            removed_nodes: Vec::new(),
            previous_sibling,
            next_sibling,
            attribute_name: None,
            old_value: None,
            new_value: None,
        }
    }

    /// Record for a child removed from `target`
    pub fn child_removed(target: NodeId, child: NodeId, previous_sibling: Option<NodeId>, next_sibling: Option<NodeId>) -> Self {
        Self {
            mutation_type: MutationType::ChildList,
            target,
            added_nodes: Vec::new(),
            removed_nodes: vec![child],
            previous_sibling,
            next_sibling,
            attribute_name: None,
            old_value: None,
            new_value: None,
        }
    }

    /// Record for an attribute set or removed on `target`
    pub fn attribute(target: NodeId, name: &str, old_value: Option<String>, new_value: Option<String>) -> Self {
        Self {
            mutation_type: MutationType::Attributes,
            target,
            added_nodes: Vec::new(),
            removed_nodes: Vec::new(),
            previous_sibling: None,
            next_sibling: None,
            attribute_name: Some(name.to_string()),
            old_value,
            new_value,
        }
    }

    /// Record for text data replaced on `target`
    pub fn character_data(target: NodeId, old_value: String) -> Self {
        Self {
            mutation_type: MutationType::CharacterData,
            target,
            added_nodes: Vec::new(),
            removed_nodes: Vec::new(),
            previous_sibling: None,
            next_sibling: None,
            attribute_name: None,
            old_value: Some(old_value),
            new_value: None,
        }
    }
}
