use crate::error::{Error, Result};
use crate::parser::XmlNode;
use crate::renderer::components::append_if_sect;
use crate::renderer::context::MarkdownContext;
use crate::renderer::renders::append_if_paragraph;

// Children shared by brief and detailed descriptions
fn append_description(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
    function: &'static str,
) -> Result<()> {
    for child in node.children() {
        if append_if_paragraph(os, ctx, child)? {
            continue;
        }
        if append_if_sect(os, ctx, child, 1)? {
            continue;
        }
        // @internal blocks are for maintainers only
        if child.name() == "internal" {
            continue;
        }
        return Err(Error::unknown_child(function, child));
    }
    Ok(())
}

pub fn append_if_brief_description(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
) -> Result<bool> {
    if node.name() != "briefdescription" {
        return Ok(false);
    }
    append_description(os, ctx, node, "append_if_brief_description")?;
    Ok(true)
}

pub fn append_if_detailed_description(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
) -> Result<bool> {
    if node.name() != "detaileddescription" {
        return Ok(false);
    }
    append_description(os, ctx, node, "append_if_detailed_description")?;
    Ok(true)
}

/// The brief and detailed descriptions of `node` as one Markdown string.
///
/// The separator before the first paragraph is dropped, so the summary never
/// starts with a blank line.
pub fn summary(node: &XmlNode) -> Result<String> {
    let ctx = MarkdownContext::new();
    let mut os = String::new();
    for child in node.children() {
        if append_if_brief_description(&mut os, &ctx, child)? {
            continue;
        }
        append_if_detailed_description(&mut os, &ctx, child)?;
    }
    Ok(os.trim_start_matches('\n').trim_end().to_string())
}

/// Renders a `compounddef kind="page"` as a Markdown document.
pub fn page_to_markdown(node: &XmlNode) -> Result<String> {
    if node.name() != "compounddef" || node.attribute("kind") != "page" {
        return Err(Error::not_a("page", node));
    }
    let ctx = MarkdownContext::new();
    let mut os = format!("# {}", node.child_text("title"));
    for child in node.children() {
        if append_if_brief_description(&mut os, &ctx, child)? {
            continue;
        }
        if append_if_detailed_description(&mut os, &ctx, child)? {
            continue;
        }
        match child.name() {
            "compoundname" | "title" | "location" | "innerpage" | "innergroup"
            | "tableofcontents" => {}
            _ => return Err(Error::unknown_child("page_to_markdown", child)),
        }
    }
    os.push('\n');
    Ok(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_summary_drops_leading_separator() {
        let doc = parse(
            r#"<memberdef kind="function" id="f">
              <name>Apply</name>
              <briefdescription><para>Applies the change.</para></briefdescription>
              <detaileddescription><para>More details.</para></detaileddescription>
            </memberdef>"#,
        )
        .unwrap();
        assert_eq!(
            summary(&doc.root).unwrap(),
            "Applies the change.\n\nMore details."
        );
    }

    #[test]
    fn test_summary_without_brief() {
        let doc = parse(
            r#"<memberdef kind="function" id="f">
              <briefdescription></briefdescription>
              <detaileddescription><para>Only details.</para></detaileddescription>
            </memberdef>"#,
        )
        .unwrap();
        assert_eq!(summary(&doc.root).unwrap(), "Only details.");
    }

    #[test]
    fn test_summary_skips_internal() {
        let doc = parse(
            r#"<memberdef kind="function" id="f">
              <detaileddescription><para>Public.</para><internal><para>Hidden.</para></internal></detaileddescription>
            </memberdef>"#,
        )
        .unwrap();
        assert_eq!(summary(&doc.root).unwrap(), "Public.");
    }

    #[test]
    fn test_description_unknown_child() {
        let doc = parse(r#"<briefdescription><bold>x</bold></briefdescription>"#).unwrap();
        let mut os = String::new();
        let err = append_if_brief_description(&mut os, &MarkdownContext::new(), &doc.root)
            .unwrap_err();
        assert!(err.to_string().contains("append_if_brief_description"));
    }

    #[test]
    fn test_page_to_markdown() {
        let doc = parse(
            r#"<compounddef id="indexpage" kind="page">
              <compoundname>index</compoundname>
              <title>Cloud Storage C++ Client Library</title>
              <briefdescription></briefdescription>
              <detaileddescription>
                <para>An idiomatic client.</para>
                <sect1 id="indexpage_1_quickstart"><title>Quickstart</title><para>Install it.</para></sect1>
              </detaileddescription>
              <location file="doc/main.dox"/>
            </compounddef>"#,
        )
        .unwrap();
        assert_eq!(
            page_to_markdown(&doc.root).unwrap(),
            "# Cloud Storage C++ Client Library\n\nAn idiomatic client.\n\n## Quickstart\n\nInstall it.\n"
        );
    }

    #[test]
    fn test_page_to_markdown_requires_page() {
        let doc = parse(r#"<compounddef id="c" kind="class"/>"#).unwrap();
        let err = page_to_markdown(&doc.root).unwrap_err();
        assert!(matches!(err, Error::NotA { expected: "page", .. }));
    }
}
