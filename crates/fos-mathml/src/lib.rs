//! fOS MathML
//!
//! Behavior for MathML elements that react to user input. Currently this is
//! `<maction>`: a container that shows one of its element children at a time
//! and, with `actiontype="toggle"`, cycles through them on click or
//! Space/Enter.
//!
//! Layers, bottom-up:
//! - [`indexer`]: 1-based ordinals over element children
//! - [`selection`]: declared `selection` attribute to selected child
//! - [`action_type`]: `actiontype` attribute to a closed policy enum
//! - [`activation`]: which input events advance the selection, and where to
//! - [`ActionElement`]: ties them to the element lifecycle and event hooks

pub mod indexer;
pub mod selection;
pub mod action_type;
pub mod activation;
mod element;
mod config;

pub use indexer::ChildIndexer;
pub use selection::{SelectionController, SelectionState, parse_selection};
pub use action_type::ActionType;
pub use element::ActionElement;
pub use config::Config;

/// Attribute names read or written by MathML behaviors
pub mod attribute_names {
    pub const SELECTION: &str = "selection";
    pub const ACTIONTYPE: &str = "actiontype";
    pub const TABINDEX: &str = "tabindex";
    pub const ROLE: &str = "role";
}
