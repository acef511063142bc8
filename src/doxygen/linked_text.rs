use crate::parser::XmlNode;

/// Flattens a Doxygen `linkedTextType` into plain text.
///
/// Types and initializers are emitted as text interleaved with `<ref>`
/// elements. The hyperlinks are dropped and the visible text is kept,
/// including Doxygen's exact whitespace.
pub fn linked_text(node: &XmlNode) -> String {
    let mut output = String::new();
    for child in node.children() {
        if child.name() == "ref" {
            output.push_str(&child.text());
        } else {
            output.push_str(child.value());
        }
    }
    output
}

/// Like [`linked_text`] for the first child named `name`, empty if missing.
pub fn linked_text_child(node: &XmlNode, name: &str) -> String {
    node.child(name).map(linked_text).unwrap_or_default()
}
