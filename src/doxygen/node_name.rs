use crate::doxygen::classifiers::is_function;
use crate::doxygen::linked_text::{linked_text, linked_text_child};
use crate::error::{required_child, Error, Result};
use crate::parser::XmlNode;

/// The display name for a documented symbol.
///
/// Classes drop their enclosing namespaces but keep template parameters,
/// namespaces keep their full qualification, and functions include the
/// parameter types so overloads get distinct names.
pub fn node_name(node: &XmlNode) -> Result<String> {
    match node.name() {
        "compounddef" => compound_name(node),
        "memberdef" | "member" => {
            if is_function(node) {
                Ok(function_name(node))
            } else {
                Ok(node.child_text("name"))
            }
        }
        "enumvalue" => Ok(node.child_text("name")),
        _ => Err(Error::unknown_element("node_name", node)),
    }
}

fn compound_name(node: &XmlNode) -> Result<String> {
    let compoundname = required_child("node_name", node, "compoundname")?.text();
    let kind = node.attribute("kind");
    if kind != "class" && kind != "struct" {
        return Ok(compoundname);
    }

    let name = match compoundname.rfind("::") {
        Some(pos) => compoundname[pos + 2..].to_string(),
        None => compoundname,
    };
    let Some(templateparamlist) = node.child("templateparamlist") else {
        return Ok(name);
    };
    let params: Vec<String> = templateparamlist
        .children_named("param")
        .map(|p| {
            let ty = linked_text_child(p, "type");
            match ty.strip_prefix("typename ") {
                Some(stripped) => stripped.to_string(),
                None => ty,
            }
        })
        .collect();
    Ok(format!("{}<{}>", name, params.join(", ")))
}

fn function_name(node: &XmlNode) -> String {
    let mut name = String::new();
    if node.attribute("static") == "yes" {
        name.push_str("static ");
    }
    if matches!(node.attribute("virt"), "virtual" | "pure-virtual") {
        name.push_str("virtual ");
    }

    let params: Vec<String> = node
        .children_named("param")
        .map(|p| p.child("type").map(linked_text).unwrap_or_default())
        .collect();
    name.push_str(&format!("{}({})", node.child_text("name"), params.join(", ")));

    if node.attribute("const") == "yes" {
        name.push_str(" const");
    }
    match node.attribute("refqual") {
        "rvalue" => name.push_str(" &&"),
        "lvalue" => name.push_str(" &"),
        _ => {}
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn name_of(xml: &str) -> String {
        node_name(&parse(xml).unwrap().root).unwrap()
    }

    #[test]
    fn test_template_class() {
        let xml = r#"<compounddef id="classgoogle_1_1cloud_1_1StatusOr" kind="class" language="C++" prot="public" final="yes">
            <compoundname>google::cloud::StatusOr</compoundname>
            <templateparamlist>
              <param><type>typename T</type></param>
            </templateparamlist>
          </compounddef>"#;
        assert_eq!(name_of(xml), "StatusOr<T>");
    }

    #[test]
    fn test_plain_class_and_namespace() {
        assert_eq!(
            name_of(r#"<compounddef kind="class"><compoundname>google::cloud::Options</compoundname></compounddef>"#),
            "Options"
        );
        assert_eq!(
            name_of(r#"<compounddef kind="namespace"><compoundname>google::cloud::mocks</compoundname></compounddef>"#),
            "google::cloud::mocks"
        );
    }

    #[test]
    fn test_function_signature() {
        let xml = r#"<memberdef kind="function" id="f" prot="public" static="no" const="yes" virt="virtual" refqual="rvalue">
            <type>StatusOr&lt; T &gt;</type>
            <name>value</name>
            <param><type>std::string const &amp;</type><declname>a</declname></param>
            <param><type><ref refid="x">Options</ref></type><declname>b</declname></param>
          </memberdef>"#;
        assert_eq!(name_of(xml), "virtual value(std::string const &, Options) const &&");
    }

    #[test]
    fn test_static_function() {
        let xml = r#"<memberdef kind="function" static="yes" refqual="lvalue"><type>int</type><name>f</name></memberdef>"#;
        assert_eq!(name_of(xml), "static f() &");
    }

    #[test]
    fn test_variable_and_enumvalue() {
        assert_eq!(
            name_of(r#"<memberdef kind="variable"><type>int</type><name>count</name></memberdef>"#),
            "count"
        );
        assert_eq!(
            name_of(r#"<enumvalue id="e"><name>kIdempotent</name></enumvalue>"#),
            "kIdempotent"
        );
    }

    #[test]
    fn test_compound_without_name() {
        let err = node_name(&parse(r#"<compounddef kind="class"/>"#).unwrap().root).unwrap_err();
        assert!(matches!(err, Error::MissingElement { name: "compoundname", .. }));
    }

    #[test]
    fn test_unknown_element() {
        let err = node_name(&parse("<para>x</para>").unwrap().root).unwrap_err();
        assert!(matches!(err, Error::UnknownElement { .. }));
    }
}
