//! MathML behavior configuration

/// Per-element configuration for `<maction>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ordinal of the child whose text is used for tooltip/statusline messages
    pub message_slot: usize,

    /// Emit debug events when the selected child or action type changes
    pub log_selection_changes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_slot: 2,
            log_selection_changes: false,
        }
    }
}
