//! Block-level Markdown productions: lists, sections, callouts, tables and
//! code listings.

use crate::error::{Error, Result};
use crate::parser::XmlNode;
use crate::renderer::context::MarkdownContext;
use crate::renderer::renders::*;

// simplesect kinds rendered as a small heading
const HEADING_SECTIONS: [(&str, &str); 13] = [
    ("see", "See Also"),
    ("return", "Returns"),
    ("author", "Author"),
    ("authors", "Authors"),
    ("version", "Version"),
    ("since", "Since"),
    ("date", "Date"),
    ("pre", "Precondition"),
    ("post", "Postcondition"),
    ("copyright", "Copyright"),
    ("invariant", "Invariant"),
    ("par", ""),
    ("rcs", "RCS"),
];

// simplesect kinds rendered as a block quote callout
const CALLOUT_SECTIONS: [(&str, &str); 4] = [
    ("note", "**Note:**"),
    ("warning", "**Warning:**"),
    ("remark", "Remark:"),
    ("attention", "Attention:"),
];

/// Renders the `<title>` children of `node`.
///
/// Doxygen's schema allows at most one title, more are tolerated. Titles
/// used as headings may only contain text.
pub fn append_title(os: &mut String, node: &XmlNode) -> Result<()> {
    for title in node.children_named("title") {
        append_title_node(os, title)?;
    }
    Ok(())
}

pub(crate) fn append_title_node(os: &mut String, title: &XmlNode) -> Result<()> {
    for child in title.children() {
        if !append_if_plain_text(os, child) {
            return Err(Error::unknown_child("append_title", child));
        }
    }
    Ok(())
}

/// Renders `sect1` through `sect4`, `depth` being the section level.
pub fn append_if_sect(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
    depth: usize,
) -> Result<bool> {
    if node.name() != format!("sect{}", depth) {
        return Ok(false);
    }
    os.push_str("\n\n");
    os.push_str(&"#".repeat(depth + 1));
    os.push(' ');
    append_title(os, node)?;

    let nested = format!("sect{}", depth + 1);
    for child in node.children() {
        match child.name() {
            "title" => {}
            "para" => append_paragraph(os, ctx, child)?,
            name if name == nested && depth < 4 => {
                append_if_sect(os, ctx, child, depth + 1)?;
            }
            _ => return Err(Error::unknown_child("append_if_sect", child)),
        }
    }
    Ok(true)
}

/// Renders `itemizedlist` and `orderedlist` nodes.
///
/// Nested lists align under the text of their parent item: the parent's
/// indentation is replaced by the same number of spaces.
pub(crate) fn append_list(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
    item_prefix: &str,
) -> Result<()> {
    let nested = ctx
        .with_paragraph_indent(" ".repeat(ctx.paragraph_indent.len()))
        .with_item_prefix(item_prefix);
    for child in node.children() {
        if child.name() != "listitem" {
            return Err(Error::unknown_child("append_list", child));
        }
        append_list_item(os, &nested, child)?;
    }
    Ok(())
}

/// The first paragraph of an item carries the bullet, the rest are
/// separated by blank lines and aligned with the bullet text.
fn append_list_item(os: &mut String, ctx: &MarkdownContext, node: &XmlNode) -> Result<()> {
    let mut item = ctx
        .with_paragraph_start("\n")
        .with_paragraph_indent(format!("{}{}", ctx.paragraph_indent, ctx.item_prefix));
    let mut first = true;
    for child in node.children() {
        if child.name() != "para" {
            return Err(Error::unknown_child("append_list_item", child));
        }
        append_paragraph(os, &item, child)?;
        if first {
            item = ctx.with_paragraph_start("\n\n").with_paragraph_indent(format!(
                "{}{}",
                ctx.paragraph_indent,
                " ".repeat(ctx.item_prefix.len())
            ));
            first = false;
        }
    }
    Ok(())
}

/// A `variablelist` alternates `varlistentry` terms with `listitem`
/// descriptions.
pub(crate) fn append_variable_list(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
) -> Result<()> {
    let indent = " ".repeat(ctx.paragraph_indent.len());
    let description = ctx
        .with_paragraph_start("\n\n")
        .with_paragraph_indent(format!("{}  ", indent));
    for child in node.children() {
        match child.name() {
            "varlistentry" => {
                os.push('\n');
                os.push_str(&indent);
                os.push_str("- ");
                for term in child.children() {
                    if term.name() != "term" {
                        return Err(Error::unknown_child("append_variable_list", term));
                    }
                    for part in term.children() {
                        append_title_child(os, ctx, part, "append_variable_list")?;
                    }
                }
            }
            "listitem" => {
                for para in child.children() {
                    if para.name() != "para" {
                        return Err(Error::unknown_child("append_variable_list", para));
                    }
                    append_paragraph(os, &description, para)?;
                }
            }
            _ => return Err(Error::unknown_child("append_variable_list", child)),
        }
    }
    Ok(())
}

/// Renders `simplesect` callouts such as `@return`, `@note` or `@see`.
pub fn append_simple_sect(os: &mut String, ctx: &MarkdownContext, node: &XmlNode) -> Result<()> {
    let kind = node.attribute("kind");

    if let Some((_, label)) = HEADING_SECTIONS.iter().find(|(k, _)| *k == kind) {
        let mut title = String::new();
        append_title(&mut title, node)?;
        if title.is_empty() {
            title = label.to_string();
        }
        if !title.is_empty() {
            os.push_str(&ctx.paragraph_start);
            os.push_str(&ctx.paragraph_indent);
            os.push_str("###### ");
            os.push_str(&title);
        }
        for child in node.children() {
            match child.name() {
                "title" => {}
                "para" => append_paragraph(os, ctx, child)?,
                _ => return Err(Error::unknown_child("append_simple_sect", child)),
            }
        }
        return Ok(());
    }

    if let Some((_, lead_in)) = CALLOUT_SECTIONS.iter().find(|(k, _)| *k == kind) {
        let paragraphs: Vec<&XmlNode> = node
            .children()
            .iter()
            .filter(|c| c.name() != "title")
            .collect();
        return append_callout(os, ctx, lead_in, &paragraphs, "append_simple_sect");
    }

    Err(Error::UnknownSimpleSectKind {
        function: "append_simple_sect",
        kind: kind.to_string(),
        node: node.to_xml(),
    })
}

/// A block quote whose first line is `lead_in`.
fn append_callout(
    os: &mut String,
    ctx: &MarkdownContext,
    lead_in: &str,
    paragraphs: &[&XmlNode],
    function: &'static str,
) -> Result<()> {
    os.push_str(&ctx.paragraph_start);
    os.push_str(&ctx.paragraph_indent);
    os.push_str("> ");
    os.push_str(lead_in);
    append_quoted_paragraphs(os, ctx, paragraphs, "\n", function)
}

fn append_quoted_paragraphs(
    os: &mut String,
    ctx: &MarkdownContext,
    paragraphs: &[&XmlNode],
    first_start: &str,
    function: &'static str,
) -> Result<()> {
    let quote = ctx.with_paragraph_indent(format!("{}> ", ctx.paragraph_indent));
    let mut para_ctx = quote.with_paragraph_start(first_start);
    for para in paragraphs {
        if para.name() != "para" {
            return Err(Error::unknown_child(function, para));
        }
        append_paragraph(os, &para_ctx, para)?;
        para_ctx = quote.with_paragraph_start(format!("\n{}>\n", ctx.paragraph_indent));
    }
    Ok(())
}

pub(crate) fn append_block_quote(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
) -> Result<()> {
    let paragraphs: Vec<&XmlNode> = node.children().iter().collect();
    append_quoted_paragraphs(os, ctx, &paragraphs, &ctx.paragraph_start, "append_block_quote")
}

/// Cross reference sections, e.g. `@deprecated`, render as callouts titled
/// by their `xreftitle`.
pub(crate) fn append_xref_sect(os: &mut String, ctx: &MarkdownContext, node: &XmlNode) -> Result<()> {
    if ctx.skip_xrefsect {
        return Ok(());
    }
    let mut lead_in = String::new();
    let mut paragraphs = Vec::new();
    for child in node.children() {
        match child.name() {
            "xreftitle" => lead_in = format!("**{}:**", child.text()),
            "xrefdescription" => paragraphs.extend(child.children()),
            _ => return Err(Error::unknown_child("append_xref_sect", child)),
        }
    }
    append_callout(os, ctx, &lead_in, &paragraphs, "append_xref_sect")
}

fn code_language(filename: &str) -> &str {
    match filename.trim_start_matches('.') {
        "" | "cc" | "cpp" | "cxx" | "h" | "hpp" | "hxx" => "cpp",
        "py" => "py",
        "sh" => "sh",
        ext => ext,
    }
}

/// Renders a `programlisting` as a fenced code block.
pub(crate) fn append_program_listing(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
) -> Result<()> {
    let indent = ctx.block_indent();
    os.push('\n');
    os.push_str(&indent);
    os.push_str("```");
    os.push_str(code_language(node.attribute("filename")));
    for codeline in node.children() {
        if codeline.name() != "codeline" {
            return Err(Error::unknown_child("append_program_listing", codeline));
        }
        os.push('\n');
        os.push_str(&indent);
        append_code_line(os, codeline)?;
    }
    os.push('\n');
    os.push_str(&indent);
    os.push_str("```");
    Ok(())
}

fn append_code_line(os: &mut String, node: &XmlNode) -> Result<()> {
    for highlight in node.children() {
        if highlight.name() != "highlight" {
            return Err(Error::unknown_child("append_code_line", highlight));
        }
        for child in highlight.children() {
            match child.name() {
                "" => os.push_str(child.value()),
                "sp" => os.push(' '),
                "ref" => os.push_str(&child.text()),
                _ => return Err(Error::unknown_child("append_code_line", child)),
            }
        }
    }
    Ok(())
}

pub(crate) fn append_verbatim(os: &mut String, ctx: &MarkdownContext, node: &XmlNode) {
    let indent = ctx.block_indent();
    os.push('\n');
    os.push_str(&indent);
    os.push_str("```");
    for line in node.text().lines() {
        os.push('\n');
        os.push_str(&indent);
        os.push_str(line);
    }
    os.push('\n');
    os.push_str(&indent);
    os.push_str("```");
}

pub(crate) fn append_heading(os: &mut String, ctx: &MarkdownContext, node: &XmlNode) -> Result<()> {
    let level = node.attribute("level").parse::<usize>().unwrap_or(1).clamp(1, 6);
    os.push_str("\n\n");
    os.push_str(&"#".repeat(level));
    os.push(' ');
    for child in node.children() {
        append_title_child(os, ctx, child, "append_heading")?;
    }
    Ok(())
}

// Paragraphs inside table cells must stay on one line
fn append_cell(os: &mut String, ctx: &MarkdownContext, node: &XmlNode, function: &'static str) -> Result<()> {
    let mut cell = ctx.with_paragraph_start("").with_paragraph_indent("");
    for para in node.children() {
        if para.name() != "para" {
            return Err(Error::unknown_child(function, para));
        }
        append_paragraph(os, &cell, para)?;
        cell = cell.with_paragraph_start("<br>");
    }
    Ok(())
}

pub(crate) fn append_table(os: &mut String, ctx: &MarkdownContext, node: &XmlNode) -> Result<()> {
    let indent = ctx.block_indent();
    let mut caption = None;
    let mut first_row = true;
    os.push('\n');
    for row in node.children() {
        match row.name() {
            "caption" => caption = Some(row.text()),
            "row" => {
                let mut columns = 0;
                os.push('\n');
                os.push_str(&indent);
                os.push('|');
                for entry in row.children() {
                    if entry.name() != "entry" {
                        return Err(Error::unknown_child("append_table", entry));
                    }
                    os.push(' ');
                    append_cell(os, ctx, entry, "append_table")?;
                    os.push_str(" |");
                    columns += 1;
                }
                if first_row {
                    os.push('\n');
                    os.push_str(&indent);
                    os.push('|');
                    os.push_str(&" --- |".repeat(columns));
                    first_row = false;
                }
            }
            _ => return Err(Error::unknown_child("append_table", row)),
        }
    }
    if let Some(caption) = caption {
        os.push_str("\n\n");
        os.push_str(&indent);
        os.push('*');
        os.push_str(&caption);
        os.push('*');
    }
    Ok(())
}

fn parameter_list_title(kind: &str) -> Option<&'static str> {
    match kind {
        "param" => Some("Parameters"),
        "templateparam" => Some("Template Parameters"),
        "exception" => Some("Exceptions"),
        "retval" => Some("Return values"),
        _ => None,
    }
}

/// Renders a `parameterlist` as a small heading followed by a table.
pub(crate) fn append_parameter_list(
    os: &mut String,
    ctx: &MarkdownContext,
    node: &XmlNode,
) -> Result<()> {
    let title = parameter_list_title(node.attribute("kind"))
        .ok_or_else(|| Error::unknown_child("append_parameter_list", node))?;
    let indent = &ctx.paragraph_indent;
    os.push_str(&ctx.paragraph_start);
    os.push_str(indent);
    os.push_str("###### ");
    os.push_str(title);
    os.push_str("\n\n");
    os.push_str(indent);
    os.push_str("| Name | Description |\n");
    os.push_str(indent);
    os.push_str("| ---- | ----------- |");

    for item in node.children() {
        if item.name() != "parameteritem" {
            return Err(Error::unknown_child("append_parameter_list", item));
        }
        let names = parameter_names(item)?;
        os.push('\n');
        os.push_str(indent);
        os.push_str("| ");
        os.push_str(
            &names
                .iter()
                .map(|n| format!("`{}`", n))
                .collect::<Vec<_>>()
                .join(", "),
        );
        os.push_str(" | ");
        if let Some(description) = item.child("parameterdescription") {
            append_cell(os, ctx, description, "append_parameter_list")?;
        }
        os.push_str(" |");
    }
    Ok(())
}

/// The names in a `parameteritem`, in document order.
pub fn parameter_names(item: &XmlNode) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for child in item.children() {
        match child.name() {
            "parameternamelist" => {
                for name in child.children() {
                    match name.name() {
                        "parametername" => names.push(name.text()),
                        "parametertype" => {}
                        _ => return Err(Error::unknown_child("parameter_names", name)),
                    }
                }
            }
            "parameterdescription" => {}
            _ => return Err(Error::unknown_child("parameter_names", child)),
        }
    }
    Ok(names)
}

/// Renders a parameter or return description on a single line.
pub fn inline_description(node: &XmlNode) -> Result<String> {
    let mut os = String::new();
    let ctx = MarkdownContext::new().with_skip_xrefsect(true);
    append_cell(&mut os, &ctx, node, "inline_description")?;
    Ok(os.trim().to_string())
}
