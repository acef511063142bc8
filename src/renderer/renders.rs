//! Inline Markdown productions and the paragraph dispatcher.
//!
//! Each `append_if_*` handler returns `Ok(false)` when the node is not the
//! production it renders, so callers can try the next group. Once every
//! group has declined, the caller reports the node as an unknown child.

use crate::error::{Error, Result};
use crate::parser::XmlNode;
use crate::renderer::components::*;
use crate::renderer::context::MarkdownContext;

// Doxygen's docEmptyType elements for special characters
const SPECIAL_CHARACTERS: [(&str, &str); 40] = [
    ("nonbreakablespace", "&nbsp;"),
    ("ensp", "\u{2002}"),
    ("emsp", "\u{2003}"),
    ("thinsp", "\u{2009}"),
    ("zwnj", "\u{200C}"),
    ("zwj", "\u{200D}"),
    ("lrm", "\u{200E}"),
    ("rlm", "\u{200F}"),
    ("ndash", "–"),
    ("mdash", "—"),
    ("lsquo", "‘"),
    ("rsquo", "’"),
    ("sbquo", "‚"),
    ("ldquo", "“"),
    ("rdquo", "”"),
    ("bdquo", "„"),
    ("laquo", "«"),
    ("raquo", "»"),
    ("lsaquo", "‹"),
    ("rsaquo", "›"),
    ("copy", "©"),
    ("trademark", "™"),
    ("tm", "™"),
    ("registered", "®"),
    ("deg", "°"),
    ("plusmn", "±"),
    ("times", "×"),
    ("divide", "÷"),
    ("middot", "·"),
    ("bull", "•"),
    ("hellip", "…"),
    ("prime", "′"),
    ("larr", "←"),
    ("rarr", "→"),
    ("uarr", "↑"),
    ("darr", "↓"),
    ("harr", "↔"),
    ("le", "≤"),
    ("ge", "≥"),
    ("ne", "≠"),
];

/// Text nodes are copied verbatim.
pub fn append_if_plain_text(os: &mut String, node: &XmlNode) -> bool {
    if !node.is_text() {
        return false;
    }
    os.push_str(node.value());
    true
}

/// Doxygen's `docTitleCmdGroup`: the markup allowed inside titles.
pub fn append_if_doc_title_cmd_group(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
) -> Result<bool> {
    match node.name() {
        "ulink" => append_link(os, ctx, node, node.attribute("url"), "append_if_ulink")?,
        "ref" => {
            let target = format!("xref:{}", node.attribute("refid"));
            append_link(os, ctx, node, &target, "append_if_ref")?
        }
        "bold" => append_wrapped(os, node, "**", "**"),
        "strike" => append_wrapped(os, node, "~", "~"),
        "emphasis" => append_wrapped(os, node, "*", "*"),
        "computeroutput" => append_wrapped(os, node, "`", "`"),
        "underline" => append_wrapped(os, node, "<u>", "</u>"),
        "subscript" => append_wrapped(os, node, "<sub>", "</sub>"),
        "superscript" => append_wrapped(os, node, "<sup>", "</sup>"),
        "small" => append_wrapped(os, node, "<small>", "</small>"),
        "del" => append_wrapped(os, node, "~~", "~~"),
        "ins" => append_wrapped(os, node, "<ins>", "</ins>"),
        "formula" => os.push_str(&node.text()),
        "linebreak" => os.push('\n'),
        "image" => append_image(os, node),
        // Anchors, index entries and output-specific blocks produce nothing
        "anchor" | "htmlonly" | "latexonly" | "manonly" | "rtfonly" | "xmlonly"
        | "docbookonly" => {}
        name => match SPECIAL_CHARACTERS.iter().find(|(n, _)| *n == name) {
            Some((_, text)) => os.push_str(text),
            None => return Ok(false),
        },
    }
    Ok(true)
}

/// Doxygen's `docCmdGroup`: inline markup plus blocks that may appear
/// inside a paragraph.
pub fn append_if_doc_cmd_group(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
) -> Result<bool> {
    if append_if_doc_title_cmd_group(os, ctx, node)? {
        return Ok(true);
    }
    let nested = ctx.nested_block();
    match node.name() {
        "hruler" => {
            os.push_str(&nested.paragraph_start);
            os.push_str(&nested.paragraph_indent);
            os.push_str("---");
        }
        "indexentry" => {}
        "programlisting" => append_program_listing(os, ctx, node)?,
        "verbatim" => append_verbatim(os, ctx, node),
        "itemizedlist" => append_list(os, ctx, node, "- ")?,
        "orderedlist" => append_list(os, ctx, node, "1. ")?,
        "variablelist" => append_variable_list(os, ctx, node)?,
        "simplesect" => append_simple_sect(os, &nested, node)?,
        "title" => append_title_node(os, node)?,
        "table" => append_table(os, ctx, node)?,
        "heading" => append_heading(os, ctx, node)?,
        "parameterlist" => append_parameter_list(os, &nested, node)?,
        "xrefsect" => append_xref_sect(os, &nested, node)?,
        "blockquote" => append_block_quote(os, &nested, node)?,
        "parblock" => {
            for child in node.children() {
                if child.name() != "para" {
                    return Err(Error::unknown_child("append_if_parblock", child));
                }
                append_paragraph(os, &nested, child)?;
            }
        }
        "copydoc" => {
            for child in node.children() {
                append_inline_child(os, ctx, child, "append_if_copydoc")?;
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

/// Renders a `para` node: the paragraph separator, the indentation, and then
/// its content.
pub fn append_if_paragraph(os: &mut String, ctx: &MarkdownContext, node: &XmlNode) -> Result<bool> {
    if node.name() != "para" {
        return Ok(false);
    }
    os.push_str(&ctx.paragraph_start);
    os.push_str(&ctx.paragraph_indent);
    for child in node.children() {
        append_inline_child(os, ctx, child, "append_if_paragraph")?;
    }
    Ok(true)
}

pub(crate) fn append_paragraph(os: &mut String, ctx: &MarkdownContext, node: &XmlNode) -> Result<()> {
    if append_if_paragraph(os, ctx, node)? {
        return Ok(());
    }
    Err(Error::unknown_child("append_paragraph", node))
}

// Plain text or anything in docCmdGroup, failing on other nodes
pub(crate) fn append_inline_child(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
    function: &'static str,
) -> Result<()> {
    if append_if_plain_text(os, node) {
        return Ok(());
    }
    if append_if_doc_cmd_group(os, ctx, node)? {
        return Ok(());
    }
    Err(Error::unknown_child(function, node))
}

// Title markup only: plain text or docTitleCmdGroup
pub(crate) fn append_title_child(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
    function: &'static str,
) -> Result<()> {
    if append_if_plain_text(os, node) {
        return Ok(());
    }
    if append_if_doc_title_cmd_group(os, ctx, node)? {
        return Ok(());
    }
    Err(Error::unknown_child(function, node))
}

fn append_wrapped(os: &mut String, node: &XmlNode, open: &str, close: &str) {
    os.push_str(open);
    os.push_str(&node.text());
    os.push_str(close);
}

fn append_link(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
    target: &str,
    function: &'static str,
) -> Result<()> {
    os.push('[');
    for child in node.children() {
        append_title_child(os, ctx, child, function)?;
    }
    os.push_str("](");
    os.push_str(target);
    os.push(')');
    Ok(())
}

fn append_image(os: &mut String, node: &XmlNode) {
    // Doxygen emits one copy per output format
    let kind = node.attribute("type");
    if !kind.is_empty() && kind != "html" {
        return;
    }
    os.push_str(&format!("![{}]({})", node.text(), node.attribute("name")));
}
