use crate::config::Config;
use crate::parser::XmlNode;

// Symbols from these namespaces are implementation details or belong to
// other projects, they never get reference pages
const EXCLUDED_ID_PREFIXES: [&str; 6] = [
    "namespacestd",
    "classstd",
    "structstd",
    "namespaceabsl",
    "classabsl",
    "structabsl",
];

/// Returns true if `node` belongs in the public reference documentation.
pub fn include_in_public_documents(config: &Config, node: &XmlNode) -> bool {
    let kind = node.attribute("kind");
    if kind == "file" || kind == "dir" {
        return false;
    }
    if node.name() == "sectiondef" && (kind == "private-attrib" || kind == "private-func") {
        return false;
    }

    let id = node.attribute("id");
    if EXCLUDED_ID_PREFIXES.iter().any(|p| id.starts_with(p)) {
        return false;
    }
    // The auto-generated list of deprecated symbols
    if id == "deprecated" {
        return false;
    }
    if id == "namespacegoogle" {
        return false;
    }
    if id == "namespacegoogle_1_1cloud" && config.library != "cloud" {
        return false;
    }

    // Destructors are not documented
    if kind == "function" && node.child_text("name").starts_with('~') {
        return false;
    }
    node.attribute("prot") != "private"
}
