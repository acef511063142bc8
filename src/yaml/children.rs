use crate::doxygen::classifiers::is_function;
use crate::doxygen::public_docs::include_in_public_documents;
use crate::parser::XmlNode;
use crate::yaml::context::YamlContext;

/// The uids listed under `children:` for `node`.
///
/// Compounds list their nested compounds first and then their members, in
/// document order. Enums list their values. `ctx` is the context nested
/// into `node`, members it marks as mocked are left out.
pub fn children(ctx: &YamlContext, node: &XmlNode) -> Vec<String> {
    let config = &ctx.config;
    let mut ids = Vec::new();
    if node.name() == "memberdef" {
        if node.attribute("kind") == "enum" {
            ids.extend(
                node.children_named("enumvalue")
                    .filter(|v| include_in_public_documents(config, v))
                    .map(|v| v.attribute("id").to_string()),
            );
        }
        return ids;
    }

    for child in node.children() {
        if !include_in_public_documents(config, child) {
            continue;
        }
        if let "innernamespace" | "innerclass" | "innergroup" = child.name() {
            ids.push(child.attribute("refid").to_string());
        }
    }
    for section in node.children_named("sectiondef") {
        if !include_in_public_documents(config, section) {
            continue;
        }
        ids.extend(
            section
                .children_named("memberdef")
                .filter(|m| include_in_public_documents(config, m))
                // friend class declarations are not symbols
                .filter(|m| m.attribute("kind") != "friend" || is_function(m))
                .filter(|m| !ctx.is_mocked(m.attribute("id")))
                .map(|m| m.attribute("id").to_string()),
        );
    }
    ids
}
