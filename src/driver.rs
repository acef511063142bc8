use crate::config::{Config, Options};
use crate::doxygen::public_docs::include_in_public_documents;
use crate::error::Result;
use crate::metadata::generate_metadata;
use crate::parser::{parse, XmlDocument};
use crate::renderer::page_to_markdown;
use crate::yaml::{compound_to_yaml, compound_toc, group_to_yaml, toc_to_yaml};
use std::collections::HashMap;
use std::fs;
use std::time::SystemTime;
use tracing::{debug, info};

/// One file produced by the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: String,
    pub contents: String,
}

impl GeneratedFile {
    fn new(filename: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

/// Maps each namespace and class id to the id of the public compound
/// declaring it.
fn parent_ids(config: &Config, doc: &XmlDocument) -> HashMap<String, String> {
    let mut parents = HashMap::new();
    for compound in doc.compounds() {
        if !matches!(compound.attribute("kind"), "namespace" | "class" | "struct") {
            continue;
        }
        if !include_in_public_documents(config, compound) {
            continue;
        }
        let id = compound.attribute("id");
        for child in compound.children() {
            if let "innernamespace" | "innerclass" = child.name() {
                parents.insert(child.attribute("refid").to_string(), id.to_string());
            }
        }
    }
    parents
}

/// Converts every public compound in `doc`, plus the table of contents.
///
/// Pages become Markdown files, namespaces, classes, structs and groups
/// become `UniversalReference` YAML files named after their id.
pub fn convert_document(config: &Config, doc: &XmlDocument) -> Result<Vec<GeneratedFile>> {
    let parents = parent_ids(config, doc);
    let mut files = Vec::new();
    for compound in doc.compounds() {
        let id = compound.attribute("id");
        if !include_in_public_documents(config, compound) {
            debug!(id, "skipping compound excluded from public docs");
            continue;
        }
        match compound.attribute("kind") {
            "page" => {
                let filename = if id == "indexpage" {
                    "index.md".to_string()
                } else {
                    format!("{}.md", id)
                };
                files.push(GeneratedFile::new(filename, page_to_markdown(compound)?));
            }
            "namespace" | "class" | "struct" => {
                let parent_id = parents.get(id).map(String::as_str).unwrap_or_default();
                if let Some(yaml) = compound_to_yaml(config, compound, parent_id)? {
                    files.push(GeneratedFile::new(format!("{}.yml", id), yaml));
                }
            }
            "group" => {
                if let Some(yaml) = group_to_yaml(config, compound)? {
                    files.push(GeneratedFile::new(format!("{}.yml", id), yaml));
                }
            }
            kind => debug!(id, kind, "skipping compound kind without a reference page"),
        }
    }

    let toc = compound_toc(config, doc)?;
    files.push(GeneratedFile::new("toc.yml", toc_to_yaml(config, &toc)?));
    Ok(files)
}

/// Reads the input file, converts it and writes all outputs, including
/// `docs.metadata.json`, into the output directory.
pub fn run(options: &Options) -> Result<Vec<GeneratedFile>> {
    let config = &options.config;
    let content = fs::read_to_string(&config.input_filename)?;
    let doc = parse(&content)?;

    let mut files = convert_document(config, &doc)?;
    files.push(GeneratedFile::new(
        "docs.metadata.json",
        generate_metadata(config, SystemTime::now())?,
    ));

    fs::create_dir_all(&options.output_dir)?;
    for file in &files {
        let path = options.output_dir.join(&file.filename);
        fs::write(&path, &file.contents)?;
        info!(path = %path.display(), "wrote");
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"<doxygen>
      <compounddef id="indexpage" kind="page"><compoundname>index</compoundname><title>Common Components</title>
        <detaileddescription><para>Shared types.</para></detaileddescription>
      </compounddef>
      <compounddef id="namespacegoogle_1_1cloud" kind="namespace">
        <compoundname>google::cloud</compoundname>
        <innerclass refid="classgoogle_1_1cloud_1_1Status" prot="public">google::cloud::Status</innerclass>
      </compounddef>
      <compounddef id="classgoogle_1_1cloud_1_1Status" kind="class" prot="public">
        <compoundname>google::cloud::Status</compoundname>
      </compounddef>
      <compounddef id="status_8h" kind="file"><compoundname>status.h</compoundname></compounddef>
      <compounddef id="dir_1" kind="dir"><compoundname>google</compoundname></compounddef>
      <compounddef id="unionfoo" kind="union"><compoundname>foo</compoundname></compounddef>
    </doxygen>"#;

    #[test]
    fn test_convert_document() {
        let doc = parse(INDEX).unwrap();
        let config = Config::new("index.xml", "cloud", "2.0.0");
        let files = convert_document(&config, &doc).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "index.md",
                "namespacegoogle_1_1cloud.yml",
                "classgoogle_1_1cloud_1_1Status.yml",
                "toc.yml",
            ]
        );
        assert!(files[2]
            .contents
            .contains("parent: namespacegoogle_1_1cloud"));
    }

    #[test]
    fn test_cloud_namespace_only_for_common_library() {
        let doc = parse(INDEX).unwrap();
        let config = Config::new("index.xml", "storage", "2.0.0");
        let files = convert_document(&config, &doc).unwrap();
        assert!(files
            .iter()
            .all(|f| f.filename != "namespacegoogle_1_1cloud.yml"));
    }
}
