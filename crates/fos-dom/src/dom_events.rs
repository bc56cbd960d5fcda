//! DOM Events
//!
//! UI events delivered to element behaviors.

use crate::{DomTree, NodeId};

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEventType {
    // Pointer
    Click,
    MouseDown,
    MouseUp,

    // Keyboard
    KeyDown,
    KeyUp,

    // Focus
    Focus,
    Blur,
}

impl DomEventType {
    /// Event name as used by `addEventListener`
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
            Self::Focus => "focus",
            Self::Blur => "blur",
        }
    }

    /// Whether `preventDefault` has any effect for this type
    fn is_cancelable(self) -> bool {
        !matches!(self, Self::Focus | Self::Blur)
    }
}

/// DOM event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: DomEventType,
    pub target: NodeId,
    /// `KeyboardEvent.key`, for keyboard events only
    pub key: Option<String>,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
}

impl DomEvent {
    /// Create an event with the defaults for its type
    pub fn new(event_type: DomEventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            key: None,
            bubbles: !matches!(event_type, DomEventType::Focus | DomEventType::Blur),
            cancelable: event_type.is_cancelable(),
            default_prevented: false,
        }
    }

    /// Create click event
    pub fn click(target: NodeId) -> Self {
        Self::new(DomEventType::Click, target)
    }

    /// Create keydown event
    pub fn key_down(target: NodeId, key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::new(DomEventType::KeyDown, target)
        }
    }

    /// Create keyup event
    pub fn key_up(target: NodeId, key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::new(DomEventType::KeyUp, target)
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Listener attached to a single element
pub trait EventListener {
    /// Handle an event targeted at, or bubbling through, the element
    fn handle_event(&mut self, tree: &mut DomTree, event: &mut DomEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_event() {
        let event = DomEvent::key_down(NodeId(5), "Enter");

        assert_eq!(event.event_type, DomEventType::KeyDown);
        assert_eq!(event.target, NodeId(5));
        assert_eq!(event.key.as_deref(), Some("Enter"));
        assert!(event.cancelable);
    }

    #[test]
    fn test_prevent_default_respects_cancelable() {
        let mut click = DomEvent::click(NodeId(1));
        click.prevent_default();
        assert!(click.is_default_prevented());

        let mut focus = DomEvent::new(DomEventType::Focus, NodeId(1));
        focus.prevent_default();
        assert!(!focus.is_default_prevented());
        assert!(!focus.bubbles);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(DomEventType::Click.name(), "click");
        assert_eq!(DomEventType::KeyDown.name(), "keydown");
    }
}
