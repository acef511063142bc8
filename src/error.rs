use crate::parser::XmlNode;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while converting Doxygen XML.
///
/// The converter treats Doxygen's schema as a closed world: any XML shape it
/// does not recognize is reported instead of being rendered approximately.
/// Node payloads are the offending node serialized as single-line XML.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown child in {function}(): {node}")]
    UnknownChild { function: &'static str, node: String },

    #[error("unknown simplesect kind {kind:?} in {function}(): {node}")]
    UnknownSimpleSectKind {
        function: &'static str,
        kind: String,
        node: String,
    },

    #[error("missing attribute {name:?} in {function}(): {node}")]
    MissingAttribute {
        function: &'static str,
        name: &'static str,
        node: String,
    },

    #[error("missing element <{name}> in {function}(): {node}")]
    MissingElement {
        function: &'static str,
        name: &'static str,
        node: String,
    },

    #[error("unknown element in {function}(): {node}")]
    UnknownElement { function: &'static str, node: String },

    #[error("node is not a {expected}: {node}")]
    NotA { expected: &'static str, node: String },

    #[error("XML syntax error: {message}{}", position_suffix(.position))]
    Xml {
        message: String,
        position: Option<u64>,
    },

    #[error("cannot emit YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot emit JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn unknown_child(function: &'static str, node: &XmlNode) -> Self {
        Error::UnknownChild {
            function,
            node: node.to_xml(),
        }
    }

    pub fn unknown_element(function: &'static str, node: &XmlNode) -> Self {
        Error::UnknownElement {
            function,
            node: node.to_xml(),
        }
    }

    pub fn missing_attribute(function: &'static str, name: &'static str, node: &XmlNode) -> Self {
        Error::MissingAttribute {
            function,
            name,
            node: node.to_xml(),
        }
    }

    pub fn missing_element(function: &'static str, name: &'static str, node: &XmlNode) -> Self {
        Error::MissingElement {
            function,
            name,
            node: node.to_xml(),
        }
    }

    pub fn not_a(expected: &'static str, node: &XmlNode) -> Self {
        Error::NotA {
            expected,
            node: node.to_xml(),
        }
    }
}

/// Returns the attribute value, failing if Doxygen omitted it.
pub fn required_attribute<'a>(
    function: &'static str,
    node: &'a XmlNode,
    name: &'static str,
) -> Result<&'a str> {
    let value = node.attribute(name);
    if value.is_empty() {
        return Err(Error::missing_attribute(function, name, node));
    }
    Ok(value)
}

/// Returns the first child element named `name`, failing if it is absent.
pub fn required_child<'a>(
    function: &'static str,
    node: &'a XmlNode,
    name: &'static str,
) -> Result<&'a XmlNode> {
    node.child(name)
        .ok_or_else(|| Error::missing_element(function, name, node))
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml {
            message: err.to_string(),
            position: None,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml {
            message: format!("attribute error: {}", err),
            position: None,
        }
    }
}

fn position_suffix(position: &Option<u64>) -> String {
    match position {
        Some(pos) => format!(" at byte {}", pos),
        None => String::new(),
    }
}
