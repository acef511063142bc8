//! Converts Doxygen compounds into DocFX `UniversalReference` documents.
//!
//! Like the Markdown renderer, each `append_if_*` function returns `Ok(false)`
//! when the node is not the kind of symbol it handles.

use crate::config::Config;
use crate::doxygen::classifiers::{is_constructor, is_function, is_operator};
use crate::doxygen::node_name::node_name;
use crate::doxygen::public_docs::include_in_public_documents;
use crate::error::{required_attribute, Error, Result};
use crate::parser::XmlNode;
use crate::renderer::summary;
use crate::yaml::children::children;
use crate::yaml::context::{nested_yaml_context, YamlContext};
use crate::yaml::references::extract_references;
use crate::yaml::syntax::*;
use crate::yaml::types::{Item, UniversalReference};

// compounddef children that describe the compound itself, handled through
// summary(), children() or the syntax block
const COMPOUND_DETAILS: [&str; 28] = [
    "compoundname",
    "title",
    "basecompoundref",
    "derivedcompoundref",
    "includes",
    "includedby",
    "incdepgraph",
    "invincdepgraph",
    "innermodule",
    "innerdir",
    "innerfile",
    "innerclass",
    "innerconcept",
    "innernamespace",
    "innerpage",
    "innergroup",
    "qualifier",
    "templateparamlist",
    "tableofcontents",
    "requiresclause",
    "initializer",
    "briefdescription",
    "detaileddescription",
    "inheritancegraph",
    "collaborationgraph",
    "programlisting",
    "location",
    "listofallmembers",
];

/// Converts a namespace, class or struct into a YAML document.
///
/// Returns `None` for compounds excluded from the public documentation.
/// `parent_id` is the id of the enclosing namespace or class, if any.
pub fn compound_to_yaml(config: &Config, node: &XmlNode, parent_id: &str) -> Result<Option<String>> {
    if !include_in_public_documents(config, node) {
        return Ok(None);
    }
    let ctx = YamlContext::new(config).with_parent_id(parent_id);
    let mut items = Vec::new();
    if !append_if_compound(&mut items, &ctx, node)? {
        return Err(Error::not_a("compound", node));
    }
    let document = UniversalReference {
        items,
        references: extract_references(&ctx, node),
    };
    Ok(Some(document.to_yaml()?))
}

/// Converts a `compounddef kind="group"` into a YAML document.
pub fn group_to_yaml(config: &Config, node: &XmlNode) -> Result<Option<String>> {
    if node.name() != "compounddef" || node.attribute("kind") != "group" {
        return Err(Error::not_a("group", node));
    }
    if !include_in_public_documents(config, node) {
        return Ok(None);
    }
    let ctx = YamlContext::new(config);
    let id = required_attribute("group_to_yaml", node, "id")?;
    let mut item = Item::new(id, node.child_text("title"), "module");
    item.summary = summary(node)?;
    item.children = children(&nested_yaml_context(&ctx, node), node);
    let document = UniversalReference {
        items: vec![item],
        references: extract_references(&ctx, node),
    };
    Ok(Some(document.to_yaml()?))
}

pub fn append_if_compound(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if append_if_namespace(items, ctx, node)? {
        return Ok(true);
    }
    if append_if_class(items, ctx, node)? {
        return Ok(true);
    }
    append_if_struct(items, ctx, node)
}

pub fn append_if_namespace(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if !is_compound(node, "namespace") {
        return Ok(false);
    }
    let nested = nested_yaml_context(ctx, node);
    let mut item = new_item(ctx, node, "namespace")?;
    item.children = children(&nested, node);
    items.push(item);
    compound_recurse(items, &nested, node)?;
    Ok(true)
}

pub fn append_if_class(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if !is_compound(node, "class") {
        return Ok(false);
    }
    append_class_like(items, ctx, node, "class")?;
    Ok(true)
}

pub fn append_if_struct(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if !is_compound(node, "struct") {
        return Ok(false);
    }
    append_class_like(items, ctx, node, "struct")?;
    Ok(true)
}

fn is_compound(node: &XmlNode, kind: &str) -> bool {
    node.name() == "compounddef" && node.attribute("kind") == kind
}

fn append_class_like(
    items: &mut Vec<Item>,
    ctx: &YamlContext,
    node: &XmlNode,
    kind: &str,
) -> Result<()> {
    let nested = nested_yaml_context(ctx, node);
    let mut item = new_item(ctx, node, kind)?;
    item.full_name = Some(node.child_text("compoundname"));
    append_class_syntax(&mut item, ctx, node);
    item.children = children(&nested, node);
    items.push(item);
    compound_recurse(items, &nested, node)
}

/// Emits the members of a compound, `ctx.parent_id` being the compound id.
fn compound_recurse(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<()> {
    for child in node.children() {
        if !include_in_public_documents(&ctx.config, child) {
            continue;
        }
        match child.name() {
            "sectiondef" => append_section(items, ctx, child)?,
            name if COMPOUND_DETAILS.contains(&name) => {}
            _ => return Err(Error::unknown_child("compound_recurse", child)),
        }
    }
    Ok(())
}

fn append_section(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<()> {
    for child in node.children() {
        match child.name() {
            "memberdef" => {
                // a mocked interface method is replaced by its MOCK_METHOD
                if ctx.is_mocked(child.attribute("id")) {
                    continue;
                }
                if include_in_public_documents(&ctx.config, child) {
                    append_member(items, ctx, child)?;
                }
            }
            // Members of groups are documented with their namespace
            "header" | "description" | "member" => {}
            _ => return Err(Error::unknown_child("append_section", child)),
        }
    }
    Ok(())
}

fn append_member(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<()> {
    if append_if_enum(items, ctx, node)? {
        return Ok(());
    }
    if append_if_typedef(items, ctx, node)? {
        return Ok(());
    }
    if append_if_function(items, ctx, node)? {
        return Ok(());
    }
    if append_if_variable(items, ctx, node)? {
        return Ok(());
    }
    // friend class declarations are not symbols
    if node.attribute("kind") == "friend" {
        return Ok(());
    }
    Err(Error::unknown_child("append_member", node))
}

pub fn append_if_enum(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if node.name() != "memberdef" || node.attribute("kind") != "enum" {
        return Ok(false);
    }
    let mut item = new_member_item(ctx, node, "enum")?;
    append_enum_syntax(&mut item, ctx, node);
    item.children = children(ctx, node);
    let id = item.uid.clone();
    items.push(item);

    let nested = ctx.with_parent_id(id);
    for value in node.children_named("enumvalue") {
        if include_in_public_documents(&ctx.config, value) {
            append_if_enum_value(items, &nested, value)?;
        }
    }
    Ok(true)
}

pub fn append_if_enum_value(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if node.name() != "enumvalue" {
        return Ok(false);
    }
    items.push(new_item(ctx, node, "enumvalue")?);
    Ok(true)
}

pub fn append_if_typedef(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if node.name() != "memberdef" || node.attribute("kind") != "typedef" {
        return Ok(false);
    }
    let mut item = new_member_item(ctx, node, "typedef")?;
    append_typedef_syntax(&mut item, ctx, node);
    items.push(item);
    Ok(true)
}

/// Functions, constructors, operators and friend functions.
///
/// `MOCK_METHOD` members are listed under the name of the function they
/// mock, linking to it when they have no documentation of their own. The
/// mocked function itself is skipped by the caller.
pub fn append_if_function(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if node.name() != "memberdef" || !is_function(node) {
        return Ok(false);
    }
    let mocked = ctx.mocking_functions_by_id.get(node.attribute("id"));
    // MOCK_METHOD has no return type, it is still not a constructor
    let kind = if mocked.is_some() {
        "function"
    } else if is_constructor(node) {
        "constructor"
    } else if is_operator(node) {
        "operator"
    } else {
        "function"
    };
    let mut item = new_member_item(ctx, node, kind)?;
    append_function_syntax(&mut item, ctx, node)?;

    if let Some(mocked) = mocked {
        item.name = mocked.clone();
        if item.summary.is_empty() {
            if let Some(mocked_id) = ctx.mocked_member(&item.uid) {
                item.summary = format!("Mocks [`{}`](xref:{}).", mocked, mocked_id);
            }
        }
    }
    items.push(item);
    Ok(true)
}

pub fn append_if_variable(items: &mut Vec<Item>, ctx: &YamlContext, node: &XmlNode) -> Result<bool> {
    if node.name() != "memberdef" || node.attribute("kind") != "variable" {
        return Ok(false);
    }
    let mut item = new_member_item(ctx, node, "variable")?;
    append_variable_syntax(&mut item, ctx, node);
    items.push(item);
    Ok(true)
}

fn new_item(ctx: &YamlContext, node: &XmlNode, kind: &str) -> Result<Item> {
    let id = required_attribute("new_item", node, "id")?;
    let mut item = Item::new(id, node_name(node)?, kind);
    item.parent = ctx.parent_id.clone();
    item.summary = summary(node)?;
    Ok(item)
}

fn new_member_item(ctx: &YamlContext, node: &XmlNode, kind: &str) -> Result<Item> {
    let mut item = new_item(ctx, node, kind)?;
    let qualified = node.child_text("qualifiedname");
    if !qualified.is_empty() {
        item.full_name = Some(qualified);
    }
    Ok(item)
}
