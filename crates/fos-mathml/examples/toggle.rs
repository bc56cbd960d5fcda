//! Example: cycling a toggle `<maction>`
//!
//! Run with `RUST_LOG=debug` to see selection changes.

use fos_dom::{DomEvent, DomTree, ElementLifecycle, EventListener};
use fos_mathml::{ActionElement, Config};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut tree = DomTree::new();
    let math = tree.create_element("math");
    let maction = tree.create_element("maction");
    let config = Config {
        log_selection_changes: true,
        ..Config::default()
    };
    let mut action = ActionElement::with_config(maction, config);

    for label in ["a + b", "c + d", "e + f"] {
        let mi = tree.create_element("mi");
        let text = tree.create_text(label);
        tree.append_child(mi, text).expect("fresh text node");
        tree.append_child(maction, mi).expect("fresh element");
    }

    tree.append_child(tree.root(), math).expect("fresh element");
    let record = tree.append_child(math, maction).expect("fresh element");
    action.notify(&mut tree, &record);

    for _ in 0..4 {
        let shown = action
            .selected_child()
            .and_then(|child| tree.text_content(child))
            .unwrap_or_default();
        println!("showing {shown:?} (selection={:?})", tree.get_attribute(maction, "selection"));

        let mut click = DomEvent::click(maction);
        action.handle_event(&mut tree, &mut click);
    }
}
