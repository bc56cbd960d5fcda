//! Activation
//!
//! Decides whether an input event activates a toggle `<maction>`, and which
//! ordinal the selection advances to. Writing the result back is left to
//! [`ActionElement`](crate::ActionElement).

use fos_dom::{DomEvent, DomEventType};

/// Kind of a qualifying activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Keyboard,
}

/// Space, or Enter in any case
pub fn is_activation_key(key: &str) -> bool {
    key == " " || key.eq_ignore_ascii_case("Enter")
}

/// Classify an input event; `None` if it does not activate
pub fn classify_event(event: &DomEvent) -> Option<Activation> {
    match event.event_type {
        DomEventType::Click => Some(Activation::Pointer),
        DomEventType::KeyDown => event
            .key
            .as_deref()
            .filter(|key| is_activation_key(key))
            .map(|_| Activation::Keyboard),
        _ => None,
    }
}

/// Ordinal to select after `current` among `count` element children.
///
/// `current` is 0 when nothing is selected. Returns `None` when there is
/// nothing to cycle: no children, or a lone child that is already selected.
pub fn next_index(current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = if current == 0 { 1 } else { (current % count) + 1 };
    if next == current {
        return None;
    }
    Some(next)
}
