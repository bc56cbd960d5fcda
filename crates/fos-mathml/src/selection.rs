//! Selection State Controller
//!
//! Keeps the declared `selection` attribute and the resolved selected child
//! in sync. The declared index and the resolved child are stored separately:
//! an explicit `selection="3"` stays pinned to ordinal 3 across child-list
//! churn, while an implicit selection always follows the first element child.

use fos_dom::{DomTree, NodeId};

use crate::indexer::ChildIndexer;

/// Index used when no valid `selection` is declared
pub const DEFAULT_SELECTION_INDEX: usize = 1;

/// Snapshot of the selection.
///
/// Compared as a whole to decide whether a recompute needs to invalidate
/// anything downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Declared 1-based index, only meaningful when `is_explicit`
    pub index: usize,
    pub is_explicit: bool,
    /// Non-owning; re-derived from the live tree on every recompute
    pub selected_child: Option<NodeId>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            index: DEFAULT_SELECTION_INDEX,
            is_explicit: false,
            selected_child: None,
        }
    }
}

/// Parse a declared `selection` value.
///
/// Accepts a base-10 integer with optional sign and surrounding ASCII
/// whitespace. Anything that is not a positive `i32` yields `None`.
pub fn parse_selection(raw: Option<&str>) -> Option<usize> {
    let value = raw?
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<i32>()
        .ok()?;
    if value <= 0 {
        return None;
    }
    usize::try_from(value).ok()
}

/// Owns the [`SelectionState`] of one container
#[derive(Debug)]
pub struct SelectionController {
    container: NodeId,
    state: SelectionState,
    log_changes: bool,
}

impl SelectionController {
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            state: SelectionState::default(),
            log_changes: false,
        }
    }

    /// Emit a debug event whenever the selected child changes
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_changes = enabled;
        self
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected_child(&self) -> Option<NodeId> {
        self.state.selected_child
    }

    /// The declared `selection` attribute changed (or was removed).
    ///
    /// Returns `true` if the selected child changed.
    pub fn on_declared_selection_changed(&mut self, tree: &mut DomTree, raw: Option<&str>) -> bool {
        let (index, is_explicit) = match parse_selection(raw) {
            Some(index) => (index, true),
            None => (DEFAULT_SELECTION_INDEX, false),
        };

        if index == self.state.index
            && is_explicit == self.state.is_explicit
            && self.state.selected_child.is_some()
        {
            return false;
        }

        self.state.index = index;
        self.state.is_explicit = is_explicit;
        self.recompute(tree)
    }

    /// The container's child list changed; identities may differ even if
    /// the count did not.
    pub fn on_children_changed(&mut self, tree: &mut DomTree) -> bool {
        self.recompute(tree)
    }

    /// The container was inserted; `raw` is its current `selection` value.
    pub fn on_inserted(&mut self, tree: &mut DomTree, raw: Option<&str>) -> bool {
        let changed = self.on_declared_selection_changed(tree, raw);
        self.recompute(tree) || changed
    }

    /// Resolve the selected child from the declared state.
    ///
    /// An explicit index that matches no child selects nothing; only an
    /// implicit selection falls back to the first element child.
    /// Returns `true` if the selected child changed.
    pub fn recompute(&mut self, tree: &mut DomTree) -> bool {
        let candidate = {
            let indexer = ChildIndexer::new(tree, self.container);
            match indexer.child_at(self.state.index) {
                Some(child) => Some(child),
                None if !self.state.is_explicit => indexer.first(),
                None => None,
            }
        };

        let next = SelectionState {
            selected_child: candidate,
            ..self.state
        };
        if next == self.state {
            return false;
        }
        self.state = next;

        if self.log_changes {
            tracing::debug!(
                container = ?self.container,
                selected = ?self.state.selected_child,
                index = self.state.index,
                explicit = self.state.is_explicit,
                "<maction> selected child changed"
            );
        }
        self.invalidate_children_styles(tree);
        true
    }

    /// Is `child` the selected element?
    pub fn is_selected(&self, tree: &DomTree, child: NodeId) -> bool {
        let is_element = tree.get(child).is_some_and(|node| node.is_element());
        is_element && self.state.selected_child == Some(child)
    }

    /// Selection-dependent style lives on the children, so every element
    /// child is restyled and the container's layout subtree rebuilt.
    fn invalidate_children_styles(&self, tree: &mut DomTree) {
        let children: Vec<NodeId> = ChildIndexer::new(tree, self.container).iter().collect();
        for child in children {
            tree.invalidate_style(child);
        }
        tree.set_needs_layout_tree_update(self.container);
        tree.set_child_needs_layout_tree_update(self.container);
    }
}
