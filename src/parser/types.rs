use quick_xml::escape::escape;

/// A node in a parsed Doxygen XML document.
///
/// Doxygen uses mixed content heavily (`<para>` mixes text with markup), so
/// text is kept as a first-class node interleaved with elements, in document
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

/// A parsed XML document.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    pub root: XmlNode,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl XmlNode {
    /// The tag name, empty for text nodes.
    pub fn name(&self) -> &str {
        match self {
            XmlNode::Element(e) => &e.name,
            XmlNode::Text(_) => "",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, XmlNode::Text(_))
    }

    /// Looks up an attribute, returning an empty string if it is absent.
    pub fn attribute(&self, name: &str) -> &str {
        match self {
            XmlNode::Element(e) => e
                .attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
                .unwrap_or(""),
            XmlNode::Text(_) => "",
        }
    }

    pub fn children(&self) -> &[XmlNode] {
        match self {
            XmlNode::Element(e) => &e.children,
            XmlNode::Text(_) => &[],
        }
    }

    /// The first child element with the given tag.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children().iter().find(|c| c.name() == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children().iter().filter(move |c| c.name() == name)
    }

    /// The raw text of a text node, empty for elements.
    pub fn value(&self) -> &str {
        match self {
            XmlNode::Text(t) => t,
            XmlNode::Element(_) => "",
        }
    }

    /// All descendant text, concatenated in document order.
    pub fn text(&self) -> String {
        let mut output = String::new();
        self.collect_text(&mut output);
        output
    }

    fn collect_text(&self, output: &mut String) {
        match self {
            XmlNode::Text(t) => output.push_str(t),
            XmlNode::Element(e) => {
                for child in &e.children {
                    child.collect_text(output);
                }
            }
        }
    }

    /// The text of the first child element named `name`, or empty.
    pub fn child_text(&self, name: &str) -> String {
        self.child(name).map(|c| c.text()).unwrap_or_default()
    }

    /// All descendant elements with the given tag, depth first.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a XmlNode> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlNode>) {
        for child in self.children() {
            if child.name() == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Serializes the node as XML on a single line.
    ///
    /// Used in error messages, so newlines inside text are written as
    /// character references.
    pub fn to_xml(&self) -> String {
        let mut output = String::new();
        self.write_xml(&mut output);
        output
    }

    fn write_xml(&self, output: &mut String) {
        match self {
            XmlNode::Text(t) => output.push_str(&escape(t.as_str()).replace('\n', "&#10;")),
            XmlNode::Element(e) => {
                output.push('<');
                output.push_str(&e.name);
                for (key, value) in &e.attributes {
                    output.push_str(&format!(
                        " {}=\"{}\"",
                        key,
                        escape(value.as_str()).replace('\n', "&#10;")
                    ));
                }
                if e.children.is_empty() {
                    output.push_str("/>");
                    return;
                }
                output.push('>');
                for child in &e.children {
                    child.write_xml(output);
                }
                output.push_str(&format!("</{}>", e.name));
            }
        }
    }
}

impl std::fmt::Display for XmlNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_xml())
    }
}

impl XmlDocument {
    /// Top-level `compounddef` nodes.
    ///
    /// Handles both a combined index (`<doxygen>` with many compounds) and a
    /// document whose root is itself a `compounddef`.
    pub fn compounds(&self) -> Vec<&XmlNode> {
        if self.root.name() == "compounddef" {
            return vec![&self.root];
        }
        self.root.children_named("compounddef").collect()
    }

    /// Finds a top-level compound by its `id` attribute.
    pub fn find_compound(&self, id: &str) -> Option<&XmlNode> {
        self.compounds().into_iter().find(|c| c.attribute("id") == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_attribute_lookup() {
        let doc = parse(r#"<memberdef kind="function" id="f1"/>"#).unwrap();
        assert_eq!(doc.root.attribute("kind"), "function");
        assert_eq!(doc.root.attribute("missing"), "");
    }

    #[test]
    fn test_text_flattens_descendants() {
        let doc = parse("<type>std::vector&lt;<ref refid=\"x\">Foo</ref>&gt;</type>").unwrap();
        assert_eq!(doc.root.text(), "std::vector<Foo>");
    }

    #[test]
    fn test_to_xml_is_single_line() {
        let doc = parse("<para>line one\nline two<bold>x</bold></para>").unwrap();
        let xml = doc.root.to_xml();
        assert!(!xml.contains('\n'));
        assert_eq!(xml, "<para>line one&#10;line two<bold>x</bold></para>");
    }

    #[test]
    fn test_compounds_in_combined_index() {
        let doc = parse(
            r#"<doxygen><compounddef id="a" kind="class"/><compounddef id="b" kind="page"/></doxygen>"#,
        )
        .unwrap();
        assert_eq!(doc.compounds().len(), 2);
        assert_eq!(doc.find_compound("b").unwrap().attribute("kind"), "page");
        assert!(doc.find_compound("c").is_none());
    }
}
