use crate::parser::XmlNode;

pub fn is_operator(node: &XmlNode) -> bool {
    node.child_text("name").contains("operator")
}

/// Constructors are the only functions without a return type.
pub fn is_constructor(node: &XmlNode) -> bool {
    let Some(ty) = node.child("type") else {
        return true;
    };
    ty.children().iter().all(|child| {
        if child.name() == "ref" {
            child.text().is_empty()
        } else {
            child.value().is_empty()
        }
    })
}

/// Functions, including `friend` functions but not `friend class` or
/// `friend struct` declarations.
pub fn is_function(node: &XmlNode) -> bool {
    match node.attribute("kind") {
        "function" => true,
        "friend" => {
            let ty = node.child_text("type");
            ty != "struct" && ty != "class"
        }
        _ => false,
    }
}

pub fn is_plain_function(node: &XmlNode) -> bool {
    is_function(node) && !is_constructor(node) && !is_operator(node)
}
