use crate::config::Config;
use crate::doxygen::node_name::node_name;
use crate::doxygen::public_docs::include_in_public_documents;
use crate::error::Result;
use crate::parser::{XmlDocument, XmlNode};
use crate::yaml::types::{TocEntry, TABLE_OF_CONTENT_MIME};
use serde::Serialize;

/// Builds the table of contents for every public compound in `doc`.
///
/// The landing page comes first, then the other pages, the groups, and
/// finally one entry per namespace listing its classes.
pub fn compound_toc(config: &Config, doc: &XmlDocument) -> Result<Vec<TocEntry>> {
    let compounds: Vec<&XmlNode> = doc
        .compounds()
        .into_iter()
        .filter(|c| include_in_public_documents(config, c))
        .collect();

    let mut toc = Vec::new();
    let mut topics = Vec::new();
    for page in compounds.iter().filter(|c| c.attribute("kind") == "page") {
        let id = page.attribute("id");
        if id == "indexpage" {
            toc.insert(0, TocEntry::new("Overview").with_attr("href", "index.md"));
        } else {
            topics.push(TocEntry::new(page.child_text("title")).with_attr("href", format!("{}.md", id)));
        }
    }
    if !topics.is_empty() {
        toc.push(TocEntry::new("In-Depth Topics").with_items(topics));
    }

    for group in compounds.iter().filter(|c| c.attribute("kind") == "group") {
        toc.push(TocEntry::new(group.child_text("title")).with_attr("uid", group.attribute("id")));
    }

    for namespace in compounds.iter().filter(|c| c.attribute("kind") == "namespace") {
        toc.push(
            TocEntry::new(node_name(namespace)?)
                .with_attr("uid", namespace.attribute("id"))
                .with_items(class_entries(config, doc, namespace)?),
        );
    }
    Ok(toc)
}

// The classes nested in `node`, recursively
fn class_entries(config: &Config, doc: &XmlDocument, node: &XmlNode) -> Result<Vec<TocEntry>> {
    let mut entries = Vec::new();
    for inner in node.children_named("innerclass") {
        if !include_in_public_documents(config, inner) {
            continue;
        }
        let refid = inner.attribute("refid");
        let entry = match doc.find_compound(refid) {
            Some(compound) if include_in_public_documents(config, compound) => {
                TocEntry::new(node_name(compound)?)
                    .with_items(class_entries(config, doc, compound)?)
            }
            Some(_) => continue,
            None => {
                let qualified = inner.text();
                let name = match qualified.rfind("::") {
                    Some(pos) => qualified[pos + 2..].to_string(),
                    None => qualified,
                };
                TocEntry::new(name)
            }
        };
        entries.push(entry.with_attr("uid", refid));
    }
    Ok(entries)
}

#[derive(Serialize)]
struct TableOfContent<'a> {
    name: String,
    items: &'a [TocEntry],
}

/// Serializes the table of contents as a `TableOfContent` document.
pub fn toc_to_yaml(config: &Config, entries: &[TocEntry]) -> Result<String> {
    let root = [TableOfContent {
        name: config.package_name(),
        items: entries,
    }];
    Ok(format!(
        "{}\n{}",
        TABLE_OF_CONTENT_MIME,
        serde_yaml::to_string(&root)?
    ))
}
