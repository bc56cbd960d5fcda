//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed or reused: removing a node only detaches it, so a
//! `NodeId` held elsewhere can go stale but can never alias a different node.

use crate::{DomError, DomResult, ElementData, MutationRecord, Node, NodeData, NodeFlags, NodeId};

/// Arena-based DOM tree for memory efficiency
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    /// Total style invalidation requests since creation
    style_invalidations: u64,
    /// Total layout tree rebuild requests since creation
    layout_invalidations: u64,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(Node::document());
        Self {
            nodes,
            style_invalidations: 0,
            layout_invalidations: 0,
        }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id for the node stored at arena slot `len`; `None` once the next
    /// id would collide with the `NodeId::NONE` sentinel.
    fn id_for_slot(len: usize) -> Option<NodeId> {
        u32::try_from(len)
            .ok()
            .map(NodeId)
            .filter(|id| id.is_valid())
    }

    /// # Panics
    ///
    /// When the arena already holds `u32::MAX` nodes, like `Vec::push` on
    /// capacity overflow.
    fn alloc(&mut self, node: Node) -> NodeId {
        let Some(id) = Self::id_for_slot(self.nodes.len()) else {
            panic!("DomTree arena exhausted: {} nodes", self.nodes.len());
        };
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, local_name: &str) -> NodeId {
        self.alloc(Node::element(local_name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.alloc(Node::comment(content))
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.nodes
            .get_mut(id.index())
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent.to_option()
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.first_child.to_option()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next_sibling.to_option()
    }

    /// Iterate direct children in document order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Is `ancestor` equal to `node` or one of its ancestors?
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append a detached node as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<MutationRecord> {
        self.insert_before(parent, child, None)
    }

    /// Insert a detached node before `reference`, or at the end when `None`
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<MutationRecord> {
        self.node(parent)?;
        if self.node(child)?.parent.is_valid() {
            return Err(DomError::AlreadyAttached { child });
        }
        if child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if let Some(reference) = reference {
            if self.node(reference)?.parent != parent {
                return Err(DomError::NotAChild { parent, child: reference });
            }
        }

        let next = reference.unwrap_or(NodeId::NONE);
        let prev = match reference {
            Some(r) => self.nodes[r.index()].prev_sibling,
            None => self.nodes[parent.index()].last_child,
        };

        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }

        Ok(MutationRecord::child_added(parent, child, prev.to_option(), next.to_option()))
    }

    /// Detach `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<MutationRecord> {
        self.node(parent)?;
        let node = self.node(child)?;
        if node.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }
        let (prev, next) = (node.prev_sibling, node.next_sibling);

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[child.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;

        Ok(MutationRecord::child_removed(parent, child, prev.to_option(), next.to_option()))
    }

    // ------------------------------------------------------------------
    // Attributes and text
    // ------------------------------------------------------------------

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attr(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| e.has_attr(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<MutationRecord> {
        let old = self.element_mut(id)?.set_attr(name, value);
        Ok(MutationRecord::attribute(id, name, old, Some(value.to_string())))
    }

    /// Remove an attribute; no record when it was not present
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<MutationRecord>> {
        let old = self.element_mut(id)?.remove_attr(name);
        Ok(old.map(|old| MutationRecord::attribute(id, name, Some(old), None)))
    }

    /// Replace the data of a text node
    pub fn set_text(&mut self, id: NodeId, content: &str) -> DomResult<MutationRecord> {
        let node = self.nodes.get_mut(id.index()).ok_or(DomError::NotFound(id))?;
        match &mut node.data {
            NodeData::Text(text) => {
                let old = std::mem::replace(&mut text.content, content.to_string());
                Ok(MutationRecord::character_data(id, old))
            }
            _ => Err(DomError::NotText(id)),
        }
    }

    /// DOM `textContent`: descendant text for elements, `None` for the document
    pub fn text_content(&self, id: NodeId) -> Option<String> {
        match &self.get(id)?.data {
            NodeData::Document => None,
            NodeData::Text(text) => Some(text.content.clone()),
            NodeData::Comment(data) => Some(data.clone()),
            NodeData::Element(_) => {
                let mut out = String::new();
                self.collect_text(id, &mut out);
                Some(out)
            }
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for (child_id, child) in self.children(id) {
            match &child.data {
                NodeData::Text(text) => out.push_str(&text.content),
                NodeData::Element(_) => self.collect_text(child_id, out),
                _ => {}
            }
        }
    }

    // ------------------------------------------------------------------
    // Invalidation
    // ------------------------------------------------------------------

    /// Mark a node's computed style as stale
    pub fn invalidate_style(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.flags.needs_style_update = true;
            self.style_invalidations += 1;
        }
    }

    /// Request that the layout subtree rooted at `id` be rebuilt
    pub fn set_needs_layout_tree_update(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.flags.needs_layout_tree_update = true;
            self.layout_invalidations += 1;
        }
    }

    /// Mark `id` and its ancestors as having a descendant to rebuild
    pub fn set_child_needs_layout_tree_update(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.nodes.get_mut(node_id.index()) else {
                break;
            };
            if node.flags.child_needs_layout_tree_update && node_id != id {
                break;
            }
            node.flags.child_needs_layout_tree_update = true;
            current = node.parent.to_option();
        }
    }

    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.get(id).map(|n| n.flags)
    }

    pub fn style_invalidation_count(&self) -> u64 {
        self.style_invalidations
    }

    pub fn layout_invalidation_count(&self) -> u64 {
        self.layout_invalidations
    }

    /// Reset every dirty bit, as a completed style/layout pass would
    pub fn clear_dirty_flags(&mut self) {
        for node in &mut self.nodes {
            node.flags = NodeFlags::default();
        }
    }
}

/// Iterator over the direct children of a node
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MutationType;

    fn child_ids(tree: &DomTree, id: NodeId) -> Vec<NodeId> {
        tree.children(id).map(|(id, _)| id).collect()
    }

    #[test]
    fn test_append_and_insert_order() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("mrow");
        tree.append_child(tree.root(), parent).unwrap();

        let a = tree.create_element("mi");
        let c = tree.create_element("mi");
        let b = tree.create_element("mi");
        tree.append_child(parent, a).unwrap();
        tree.append_child(parent, c).unwrap();
        let record = tree.insert_before(parent, b, Some(c)).unwrap();

        assert_eq!(child_ids(&tree, parent), vec![a, b, c]);
        assert_eq!(record.mutation_type, MutationType::ChildList);
        assert_eq!(record.previous_sibling, Some(a));
        assert_eq!(record.next_sibling, Some(c));
    }

    #[test]
    fn test_remove_relinks_siblings() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("mrow");
        let ids: Vec<_> = (0..3).map(|_| tree.create_element("mn")).collect();
        for &id in &ids {
            tree.append_child(parent, id).unwrap();
        }

        tree.remove_child(parent, ids[1]).unwrap();
        assert_eq!(child_ids(&tree, parent), vec![ids[0], ids[2]]);
        assert_eq!(tree.parent(ids[1]), None);

        tree.remove_child(parent, ids[0]).unwrap();
        tree.remove_child(parent, ids[2]).unwrap();
        assert!(child_ids(&tree, parent).is_empty());
        assert_eq!(tree.first_child(parent), None);
    }

    #[test]
    fn test_structural_errors() {
        let mut tree = DomTree::new();
        let a = tree.create_element("mrow");
        let b = tree.create_element("mrow");
        tree.append_child(a, b).unwrap();

        assert_eq!(tree.append_child(a, b), Err(DomError::AlreadyAttached { child: b }));
        assert_eq!(tree.append_child(b, a), Err(DomError::HierarchyRequest { parent: b, child: a }));
        assert_eq!(tree.remove_child(b, a), Err(DomError::NotAChild { parent: b, child: a }));
        assert_eq!(tree.append_child(a, NodeId(99)), Err(DomError::NotFound(NodeId(99))));
    }

    #[test]
    fn test_attribute_records() {
        let mut tree = DomTree::new();
        let elem = tree.create_element("maction");
        let text = tree.create_text("x");

        let record = tree.set_attribute(elem, "selection", "2").unwrap();
        assert_eq!(record.old_value, None);
        assert_eq!(tree.get_attribute(elem, "selection"), Some("2"));

        let record = tree.remove_attribute(elem, "selection").unwrap().unwrap();
        assert_eq!(record.old_value.as_deref(), Some("2"));
        assert_eq!(record.new_value, None);
        assert!(tree.remove_attribute(elem, "selection").unwrap().is_none());

        assert_eq!(tree.set_attribute(text, "a", "b"), Err(DomError::NotAnElement(text)));
    }

    #[test]
    fn test_text_content_skips_comments() {
        let mut tree = DomTree::new();
        let mtext = tree.create_element("mtext");
        let inner = tree.create_element("mi");
        let t1 = tree.create_text("hello ");
        let c = tree.create_comment("ignored");
        let t2 = tree.create_text("world");
        tree.append_child(mtext, t1).unwrap();
        tree.append_child(mtext, c).unwrap();
        tree.append_child(mtext, inner).unwrap();
        tree.append_child(inner, t2).unwrap();

        assert_eq!(tree.text_content(mtext).as_deref(), Some("hello world"));
        assert_eq!(tree.text_content(tree.root()), None);

        tree.set_text(t2, "there").unwrap();
        assert_eq!(tree.text_content(mtext).as_deref(), Some("hello there"));
    }

    #[test]
    fn test_ids_never_reach_sentinel() {
        assert_eq!(DomTree::id_for_slot(0), Some(NodeId::ROOT));
        assert_eq!(DomTree::id_for_slot(u32::MAX as usize - 1), Some(NodeId(u32::MAX - 1)));
        assert_eq!(DomTree::id_for_slot(u32::MAX as usize), None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_ids_past_u32_range_rejected() {
        assert_eq!(DomTree::id_for_slot(u32::MAX as usize + 1), None);
        assert_eq!(DomTree::id_for_slot(usize::MAX), None);
    }

    #[test]
    fn test_invalidation_flags() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("math");
        let inner = tree.create_element("maction");
        tree.append_child(tree.root(), outer).unwrap();
        tree.append_child(outer, inner).unwrap();

        tree.invalidate_style(inner);
        tree.set_needs_layout_tree_update(inner);
        tree.set_child_needs_layout_tree_update(inner);

        assert_eq!(tree.style_invalidation_count(), 1);
        assert_eq!(tree.layout_invalidation_count(), 1);
        assert!(tree.flags(inner).unwrap().needs_style_update);
        assert!(tree.flags(outer).unwrap().child_needs_layout_tree_update);
        assert!(tree.flags(tree.root()).unwrap().child_needs_layout_tree_update);

        tree.clear_dirty_flags();
        assert!(!tree.flags(inner).unwrap().is_dirty());
        assert_eq!(tree.style_invalidation_count(), 1);
    }
}
