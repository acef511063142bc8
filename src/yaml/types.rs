use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker line at the top of symbol documents.
pub const UNIVERSAL_REFERENCE_MIME: &str = "### YamlMime:UniversalReference";
/// Marker line at the top of `toc.yml`.
pub const TABLE_OF_CONTENT_MIME: &str = "### YamlMime:TableOfContent";

/// One documented symbol in a `UniversalReference` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub uid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub langs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<Syntax>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl Item {
    pub fn new(uid: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        let uid = uid.into();
        Self {
            id: uid.clone(),
            uid,
            name: name.into(),
            kind: kind.into(),
            langs: vec!["cpp".to_string()],
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Syntax {
    pub contents: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliasof: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub return_value: Option<ReturnValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub var_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnValue {
    pub var_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Where a symbol is declared, with a link to the public repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub path: String,
    pub start_line: u32,
    pub remote: Remote,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Remote {
    pub repo: String,
    pub branch: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub uid: String,
    pub name: String,
}

impl Reference {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

/// A complete `UniversalReference` document: every item in one output file
/// and the symbols it refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniversalReference {
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
}

impl UniversalReference {
    pub fn to_yaml(&self) -> Result<String> {
        Ok(format!(
            "{}\n{}",
            UNIVERSAL_REFERENCE_MIME,
            serde_yaml::to_string(self)?
        ))
    }
}

/// A node in the table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub name: String,
    /// `href` for Markdown pages, `uid` for symbols.
    #[serde(flatten)]
    pub attr: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TocEntry>,
}

impl TocEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr.insert(key.into(), value.into());
        self
    }

    pub fn with_items(mut self, items: Vec<TocEntry>) -> Self {
        self.items = items;
        self
    }
}
