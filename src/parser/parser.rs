use crate::error::{Error, Result};
use crate::parser::types::*;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parses a Doxygen XML document into an [`XmlDocument`].
pub fn parse(content: &str) -> Result<XmlDocument> {
    DocumentParser::new(content).parse_document()
}

// Builds the node tree from quick-xml events
pub struct DocumentParser<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<XmlElement>,
}

impl<'a> DocumentParser<'a> {
    pub fn new(content: &'a str) -> Self {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
        Self {
            reader,
            stack: Vec::new(),
        }
    }

    pub fn parse_document(mut self) -> Result<XmlDocument> {
        let mut root: Option<XmlNode> = None;

        loop {
            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let element = self.start_element(&e)?;
                    self.stack.push(element);
                }
                Ok(Event::End(e)) => {
                    let end_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    let element = self.stack.pop().ok_or_else(|| Error::Xml {
                        message: format!("unexpected closing tag </{}>", end_name),
                        position: Some(self.reader.buffer_position()),
                    })?;
                    if element.name != end_name {
                        return Err(Error::Xml {
                            message: format!(
                                "mismatched end tag: expected </{}>, found </{}>",
                                element.name, end_name
                            ),
                            position: Some(self.reader.buffer_position()),
                        });
                    }
                    self.attach(XmlNode::Element(element), &mut root)?;
                }
                Ok(Event::Empty(e)) => {
                    let element = self.start_element(&e)?;
                    self.attach(XmlNode::Element(element), &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape()?.into_owned();
                    self.push_text(text);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(e.as_ref()).to_string();
                    self.push_text(text);
                }
                // Comments, processing instructions, declarations and DOCTYPE carry no content
                Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml {
                        message: e.to_string(),
                        position: Some(self.reader.error_position()),
                    });
                }
            }
        }

        if let Some(open) = self.stack.last() {
            return Err(Error::Xml {
                message: format!("unexpected end of input, expected </{}>", open.name),
                position: None,
            });
        }

        let root = root.ok_or_else(|| Error::Xml {
            message: "empty document, no root element found".to_string(),
            position: None,
        })?;
        Ok(XmlDocument { root })
    }

    fn start_element(&self, e: &BytesStart<'_>) -> Result<XmlElement> {
        let mut element = XmlElement::new(String::from_utf8_lossy(e.name().as_ref()).to_string());
        for attr in e.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    fn attach(&mut self, node: XmlNode, root: &mut Option<XmlNode>) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => {
                if root.is_some() {
                    return Err(Error::Xml {
                        message: "multiple root elements".to_string(),
                        position: Some(self.reader.buffer_position()),
                    });
                }
                *root = Some(node);
            }
        }
        Ok(())
    }

    fn push_text(&mut self, text: String) {
        // Indentation between elements is layout. A space between two inline
        // elements, as in `<ref>A</ref> <ref>B</ref>`, is content.
        if text.trim().is_empty() && text.contains('\n') {
            return;
        }
        if let Some(parent) = self.stack.last_mut() {
            // The unescaper may split a run of text, keep it as one node
            if let Some(XmlNode::Text(previous)) = parent.children.last_mut() {
                previous.push_str(&text);
                return;
            }
            parent.children.push(XmlNode::Text(text));
        }
    }
}
