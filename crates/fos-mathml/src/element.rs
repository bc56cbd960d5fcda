//! `<maction>` element

use fos_dom::{
    AriaRole, DomEvent, DomTree, ElementLifecycle, EventListener, NodeId, TabIndex,
};

use crate::action_type::ActionType;
use crate::activation::{classify_event, next_index};
use crate::attribute_names;
use crate::config::Config;
use crate::indexer::ChildIndexer;
use crate::selection::{SelectionController, SelectionState};

/// Behavior attached to one `<maction>` element.
///
/// Shows exactly one element child at a time, chosen by the `selection`
/// attribute. With `actiontype="toggle"` (the default), click and
/// Space/Enter advance the selection and write it back to `selection`.
#[derive(Debug)]
pub struct ActionElement {
    element: NodeId,
    selection: SelectionController,
    action_type: ActionType,
    config: Config,
}

impl ActionElement {
    pub fn new(element: NodeId) -> Self {
        Self::with_config(element, Config::default())
    }

    pub fn with_config(element: NodeId, config: Config) -> Self {
        Self {
            element,
            selection: SelectionController::new(element).with_logging(config.log_selection_changes),
            action_type: ActionType::default(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn selected_child(&self) -> Option<NodeId> {
        self.selection.selected_child()
    }

    /// Used by style matching to hide every child but the selected one
    pub fn is_child_selected(&self, tree: &DomTree, child: NodeId) -> bool {
        self.selection.is_selected(tree, child)
    }

    /// Called before a layout node is built for the element
    pub fn prepare_layout(&mut self, tree: &mut DomTree) -> bool {
        self.selection.recompute(tree)
    }

    // ------------------------------------------------------------------
    // Accessibility
    // ------------------------------------------------------------------

    pub fn default_role(&self) -> Option<AriaRole> {
        self.action_type.default_role()
    }

    /// Explicit `role` attribute, falling back to the default role
    pub fn role(&self, tree: &DomTree) -> Option<AriaRole> {
        tree.get_attribute(self.element, attribute_names::ROLE)
            .and_then(AriaRole::parse)
            .or_else(|| self.default_role())
    }

    pub fn default_tab_index(&self) -> i32 {
        self.action_type.default_tab_index()
    }

    /// `element.tabIndex`: a valid `tabindex` attribute, else the default
    pub fn tab_index(&self, tree: &DomTree) -> i32 {
        tree.get_attribute(self.element, attribute_names::TABINDEX)
            .and_then(TabIndex::parse)
            .map_or_else(|| self.default_tab_index(), |t| t.value())
    }

    pub fn is_focusable(&self, tree: &DomTree) -> bool {
        let has_tabindex = tree.has_attribute(self.element, attribute_names::TABINDEX);
        self.action_type.default_focusable(has_tabindex)
    }

    pub fn supports_tooltip(&self) -> bool {
        self.action_type.supports_tooltip()
    }

    pub fn tooltip_text(&self, tree: &DomTree) -> Option<String> {
        self.action_type.tooltip_text(tree, self.element, self.config.message_slot)
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    /// Run activation for `event`.
    ///
    /// Returns `true` if the selection advanced, in which case the caller
    /// must suppress the event's default action.
    pub fn handle_activation(&mut self, tree: &mut DomTree, event: &DomEvent) -> bool {
        if !self.action_type.activates() {
            return false;
        }
        let Some(activation) = classify_event(event) else {
            return false;
        };
        if !self.advance_selection(tree) {
            tracing::trace!(element = ?self.element, ?activation, "<maction> activation ignored: nothing to cycle");
            return false;
        }
        true
    }

    fn advance_selection(&mut self, tree: &mut DomTree) -> bool {
        let (current, count) = {
            let indexer = ChildIndexer::new(tree, self.element);
            let current = self.selection.selected_child().map_or(0, |child| indexer.index_of(child));
            (current, indexer.count())
        };
        let Some(next) = next_index(current, count) else {
            return false;
        };
        self.set_selection_attribute(tree, next)
    }

    /// Write `index` to `selection` and run the attribute-changed path
    fn set_selection_attribute(&mut self, tree: &mut DomTree, index: usize) -> bool {
        let value = index.max(1).to_string();
        match tree.set_attribute(self.element, attribute_names::SELECTION, &value) {
            Ok(record) => {
                self.notify(tree, &record);
                true
            }
            Err(err) => {
                tracing::warn!(element = ?self.element, %err, "<maction> failed to write selection");
                false
            }
        }
    }

    fn update_action_type(&mut self, raw: Option<&str>) {
        let action_type = ActionType::classify(raw);
        if action_type == self.action_type {
            return;
        }
        if self.config.log_selection_changes {
            tracing::debug!(element = ?self.element, from = %self.action_type, to = %action_type, "<maction> action type changed");
        }
        self.action_type = action_type;
    }
}

impl ElementLifecycle for ActionElement {
    fn element(&self) -> NodeId {
        self.element
    }

    fn connected(&mut self, tree: &mut DomTree) {
        let selection = tree.get_attribute(self.element, attribute_names::SELECTION).map(str::to_string);
        self.selection.on_inserted(tree, selection.as_deref());
        let action_type = tree.get_attribute(self.element, attribute_names::ACTIONTYPE).map(str::to_string);
        self.update_action_type(action_type.as_deref());
    }

    fn attribute_changed(&mut self, tree: &mut DomTree, name: &str, _old_value: Option<&str>, new_value: Option<&str>) {
        match name {
            attribute_names::SELECTION => {
                self.selection.on_declared_selection_changed(tree, new_value);
            }
            attribute_names::ACTIONTYPE => self.update_action_type(new_value),
            _ => {}
        }
    }

    fn children_changed(&mut self, tree: &mut DomTree) {
        self.selection.on_children_changed(tree);
    }
}

impl EventListener for ActionElement {
    fn handle_event(&mut self, tree: &mut DomTree, event: &mut DomEvent) {
        if self.handle_activation(tree, event) {
            event.prevent_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_action(children: usize, attrs: &[(&str, &str)]) -> (DomTree, ActionElement, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let element = tree.create_element("maction");
        for (name, value) in attrs {
            tree.set_attribute(element, name, value).unwrap();
        }
        let ids = (0..children)
            .map(|_| {
                let child = tree.create_element("mi");
                tree.append_child(element, child).unwrap();
                child
            })
            .collect();

        let mut action = ActionElement::new(element);
        let record = tree.append_child(tree.root(), element).unwrap();
        action.notify(&mut tree, &record);
        (tree, action, ids)
    }

    #[test]
    fn test_connected_reads_attributes() {
        let (_, action, ids) = connected_action(3, &[("selection", "2"), ("actiontype", "statusline")]);
        assert_eq!(action.selected_child(), Some(ids[1]));
        assert_eq!(action.action_type(), ActionType::Statusline);
    }

    #[test]
    fn test_click_advances_and_writes_back() {
        let (mut tree, mut action, ids) = connected_action(3, &[]);
        let mut click = DomEvent::click(action.element());

        action.handle_event(&mut tree, &mut click);
        assert!(click.is_default_prevented());
        assert_eq!(tree.get_attribute(action.element(), "selection"), Some("2"));
        assert_eq!(action.selected_child(), Some(ids[1]));
        assert!(action.selection_state().is_explicit);
    }

    #[test]
    fn test_non_toggle_never_activates() {
        let (mut tree, mut action, ids) = connected_action(3, &[("actiontype", "tooltip")]);
        let mut click = DomEvent::click(action.element());

        action.handle_event(&mut tree, &mut click);
        assert!(!click.is_default_prevented());
        assert_eq!(tree.get_attribute(action.element(), "selection"), None);
        assert_eq!(action.selected_child(), Some(ids[0]));
    }

    #[test]
    fn test_role_and_tab_index() {
        let (mut tree, mut action, _) = connected_action(2, &[]);
        let element = action.element();
        assert_eq!(action.role(&tree), Some(AriaRole::Button));
        assert_eq!(action.tab_index(&tree), 0);
        assert!(action.is_focusable(&tree));

        let record = tree.set_attribute(element, "actiontype", "tooltip").unwrap();
        action.notify(&mut tree, &record);
        assert_eq!(action.role(&tree), None);
        assert_eq!(action.tab_index(&tree), -1);
        assert!(!action.is_focusable(&tree));

        tree.set_attribute(element, "tabindex", "bogus").unwrap();
        assert!(action.is_focusable(&tree));
        assert_eq!(action.tab_index(&tree), -1);

        tree.set_attribute(element, "tabindex", "3").unwrap();
        tree.set_attribute(element, "role", "group").unwrap();
        assert_eq!(action.tab_index(&tree), 3);
        assert_eq!(action.role(&tree), Some(AriaRole::Group));
    }

    #[test]
    fn test_negative_tab_index_keeps_value() {
        let (mut tree, action, _) = connected_action(2, &[]);
        tree.set_attribute(action.element(), "tabindex", "-5").unwrap();

        assert_eq!(action.tab_index(&tree), -5);
        // Present tabindex still makes the element focusable
        assert!(action.is_focusable(&tree));
    }

    #[test]
    fn test_custom_message_slot() {
        let mut tree = DomTree::new();
        let element = tree.create_element("maction");
        tree.set_attribute(element, "actiontype", "tooltip").unwrap();
        for text in ["expr", "second", "third"] {
            let child = tree.create_element("mtext");
            let t = tree.create_text(text);
            tree.append_child(child, t).unwrap();
            tree.append_child(element, child).unwrap();
        }
        let config = Config { message_slot: 3, ..Config::default() };
        let mut action = ActionElement::with_config(element, config);
        action.connected(&mut tree);

        assert_eq!(action.tooltip_text(&tree).as_deref(), Some("third"));
    }
}
