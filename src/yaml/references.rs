use crate::doxygen::public_docs::include_in_public_documents;
use crate::parser::XmlNode;
use crate::yaml::context::YamlContext;
use crate::yaml::types::Reference;

/// Collects the `references:` list for the document generated from `node`.
///
/// Every level of the traversal is checked against the public documentation
/// filter, so excluded subtrees contribute nothing. Parents are listed before
/// their descendants and siblings keep document order.
pub fn extract_references(ctx: &YamlContext, node: &XmlNode) -> Vec<Reference> {
    let mut references = Vec::new();
    append_references(&mut references, ctx, node);
    references
}

fn append_references(references: &mut Vec<Reference>, ctx: &YamlContext, node: &XmlNode) {
    if !include_in_public_documents(&ctx.config, node) {
        return;
    }
    match node.name() {
        "innernamespace" | "innerclass" => {
            references.push(Reference::new(node.attribute("refid"), node.text()));
            return;
        }
        "enumvalue" => {
            references.push(Reference::new(node.attribute("id"), node.child_text("name")));
            return;
        }
        "compounddef" => references.push(Reference::new(
            node.attribute("id"),
            node.child_text("compoundname"),
        )),
        "memberdef" => references.push(Reference::new(
            node.attribute("id"),
            node.child_text("qualifiedname"),
        )),
        _ => {}
    }
    for child in node.children() {
        append_references(references, ctx, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::parser::parse;

    fn references(xml: &str) -> Vec<Reference> {
        let ctx = YamlContext::new(&Config::new("", "cloud", "2.0.0"));
        extract_references(&ctx, &parse(xml).unwrap().root)
    }

    #[test]
    fn test_class_with_private_attribute() {
        let refs = references(
            r#"<compounddef id="classgoogle_1_1cloud_1_1Status" kind="class" prot="public">
              <compoundname>google::cloud::Status</compoundname>
              <sectiondef kind="private-attrib">
                <memberdef kind="variable" id="s_1_impl" prot="private" static="no">
                  <type>std::unique_ptr&lt; Impl &gt;</type>
                  <name>impl_</name>
                  <qualifiedname>google::cloud::Status::impl_</qualifiedname>
                </memberdef>
              </sectiondef>
              <sectiondef kind="public-func">
                <memberdef kind="function" id="s_1_ok" prot="public">
                  <type>bool</type><name>ok</name><qualifiedname>google::cloud::Status::ok</qualifiedname>
                </memberdef>
                <memberdef kind="function" id="s_1_code" prot="public">
                  <type>StatusCode</type><name>code</name><qualifiedname>google::cloud::Status::code</qualifiedname>
                </memberdef>
              </sectiondef>
            </compounddef>"#,
        );
        assert_eq!(
            refs,
            vec![
                Reference::new("classgoogle_1_1cloud_1_1Status", "google::cloud::Status"),
                Reference::new("s_1_ok", "google::cloud::Status::ok"),
                Reference::new("s_1_code", "google::cloud::Status::code"),
            ]
        );
    }

    #[test]
    fn test_namespace_children_and_enum_values() {
        let refs = references(
            r#"<compounddef id="namespacegoogle_1_1cloud_1_1storage" kind="namespace">
              <compoundname>google::cloud::storage</compoundname>
              <innerclass refid="classgoogle_1_1cloud_1_1storage_1_1Client" prot="public">google::cloud::storage::Client</innerclass>
              <innernamespace refid="namespacegoogle_1_1cloud_1_1storage_1_1v1">google::cloud::storage::v1</innernamespace>
              <sectiondef kind="enum">
                <memberdef kind="enum" id="e1" prot="public">
                  <name>Mode</name><qualifiedname>google::cloud::storage::Mode</qualifiedname>
                  <enumvalue id="e1_a" prot="public"><name>kRead</name></enumvalue>
                </memberdef>
              </sectiondef>
            </compounddef>"#,
        );
        let uids: Vec<&str> = refs.iter().map(|r| r.uid.as_str()).collect();
        assert_eq!(
            uids,
            vec![
                "namespacegoogle_1_1cloud_1_1storage",
                "classgoogle_1_1cloud_1_1storage_1_1Client",
                "namespacegoogle_1_1cloud_1_1storage_1_1v1",
                "e1",
                "e1_a",
            ]
        );
        assert_eq!(refs[4].name, "kRead");
    }

    #[test]
    fn test_excluded_subtrees_produce_nothing() {
        let refs = references(
            r#"<compounddef id="namespacestd" kind="namespace">
              <compoundname>std</compoundname>
              <sectiondef kind="func">
                <memberdef kind="function" id="f" prot="public"><name>swap</name><qualifiedname>std::swap</qualifiedname></memberdef>
              </sectiondef>
            </compounddef>"#,
        );
        assert!(refs.is_empty());
    }
}
