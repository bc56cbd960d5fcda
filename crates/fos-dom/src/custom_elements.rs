//! Element lifecycle callbacks
//!
//! Elements with built-in behavior (form controls, MathML actions, ...)
//! implement [`ElementLifecycle`] and receive the mutation records that
//! concern them.

use crate::{DomTree, MutationRecord, MutationType, NodeId};

/// Element lifecycle callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleCallback {
    Connected,
    Disconnected,
    AttributeChanged,
    ChildrenChanged,
}

/// Hooks run synchronously after a mutation
pub trait ElementLifecycle {
    /// The element this behavior is attached to
    fn element(&self) -> NodeId;

    /// The element was inserted into a parent
    fn connected(&mut self, tree: &mut DomTree);

    /// The element was removed from its parent
    fn disconnected(&mut self, _tree: &mut DomTree) {}

    fn attribute_changed(&mut self, tree: &mut DomTree, name: &str, old_value: Option<&str>, new_value: Option<&str>);

    /// The element's child list changed
    fn children_changed(&mut self, tree: &mut DomTree);

    /// Route a mutation record to the matching callback.
    ///
    /// Returns the callback that ran, or `None` when the record does not
    /// concern this element.
    fn notify(&mut self, tree: &mut DomTree, record: &MutationRecord) -> Option<LifecycleCallback> {
        let element = self.element();

        if record.added_nodes.contains(&element) {
            self.connected(tree);
            return Some(LifecycleCallback::Connected);
        }
        if record.removed_nodes.contains(&element) {
            self.disconnected(tree);
            return Some(LifecycleCallback::Disconnected);
        }
        if record.target != element {
            return None;
        }

        match record.mutation_type {
            MutationType::Attributes => {
                let name = record.attribute_name.as_deref()?;
                self.attribute_changed(tree, name, record.old_value.as_deref(), record.new_value.as_deref());
                Some(LifecycleCallback::AttributeChanged)
            }
            MutationType::ChildList => {
                self.children_changed(tree);
                Some(LifecycleCallback::ChildrenChanged)
            }
            MutationType::CharacterData => None,
        }
    }
}
