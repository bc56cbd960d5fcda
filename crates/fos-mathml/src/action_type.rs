//! `actiontype` classification
//!
//! The raw attribute string never leaves this module: it is folded into
//! [`ActionType`] and everything downstream matches on the enum.

use fos_dom::{AriaRole, DomTree, NodeId};

use crate::indexer::ChildIndexer;

/// Tab index of an element with no focus behavior of its own
pub const GENERIC_DEFAULT_TAB_INDEX: i32 = -1;

/// What `<maction>` does on user interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionType {
    /// Click/Space/Enter cycles the selected child
    #[default]
    Toggle,
    /// Second child is shown as a tooltip
    Tooltip,
    /// Second child is shown in the status line
    Statusline,
}

impl ActionType {
    /// Classify an `actiontype` value. Absent, empty and unknown values
    /// all mean `Toggle`.
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Toggle;
        };
        if raw.eq_ignore_ascii_case("tooltip") {
            Self::Tooltip
        } else if raw.eq_ignore_ascii_case("statusline") {
            Self::Statusline
        } else {
            Self::Toggle
        }
    }

    /// Canonical attribute token
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Tooltip => "tooltip",
            Self::Statusline => "statusline",
        }
    }

    /// Whether click/keyboard activation cycles the selection
    pub fn activates(self) -> bool {
        self == Self::Toggle
    }

    /// Role without an explicit `role` attribute. `None` defers to the
    /// generic MathML element role.
    pub fn default_role(self) -> Option<AriaRole> {
        match self {
            Self::Toggle => Some(AriaRole::Button),
            Self::Tooltip | Self::Statusline => None,
        }
    }

    pub fn default_tab_index(self) -> i32 {
        match self {
            Self::Toggle => 0,
            Self::Tooltip | Self::Statusline => GENERIC_DEFAULT_TAB_INDEX,
        }
    }

    /// Focusable if toggling, or if the author gave it a `tabindex`
    pub fn default_focusable(self, has_tabindex: bool) -> bool {
        has_tabindex || self == Self::Toggle
    }

    pub fn supports_tooltip(self) -> bool {
        matches!(self, Self::Tooltip | Self::Statusline)
    }

    /// Message shown for tooltip/statusline actions: the trimmed text of
    /// the element child at `slot`, if any.
    pub fn tooltip_text(self, tree: &DomTree, container: NodeId, slot: usize) -> Option<String> {
        if !self.supports_tooltip() {
            return None;
        }
        message_text(tree, container, slot)
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ASCII-trimmed, non-empty text content of the element child at `slot`
fn message_text(tree: &DomTree, container: NodeId, slot: usize) -> Option<String> {
    let child = ChildIndexer::new(tree, container).child_at(slot)?;
    let text = tree.text_content(child)?;
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
