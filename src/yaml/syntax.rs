//! Declaration-like `syntax` blocks for each kind of symbol.

use crate::doxygen::linked_text::{linked_text, linked_text_child};
use crate::error::Result;
use crate::parser::XmlNode;
use crate::renderer::components::{inline_description, parameter_names};
use crate::yaml::context::YamlContext;
use crate::yaml::types::{Item, Parameter, Remote, ReturnValue, Source, Syntax};

const REMOTE_REPO: &str = "https://github.com/googleapis/google-cloud-cpp/";
const REMOTE_BRANCH: &str = "main";

pub fn enum_syntax_content(node: &XmlNode) -> String {
    let mut contents = String::from("enum ");
    if node.attribute("strong") == "yes" {
        contents.push_str("class ");
    }
    contents.push_str(&node.child_text("qualifiedname"));
    contents.push_str(" {\n");
    for value in node.children_named("enumvalue") {
        contents.push_str("  ");
        contents.push_str(&value.child_text("name"));
        contents.push_str(",\n");
    }
    contents.push_str("};");
    contents
}

pub fn typedef_syntax_content(node: &XmlNode) -> String {
    format!(
        "using {} =\n  {};",
        node.child_text("qualifiedname"),
        linked_text_child(node, "type")
    )
}

pub fn function_syntax_content(node: &XmlNode) -> String {
    let mut contents = String::new();
    if let Some(templateparamlist) = node.child("templateparamlist") {
        let params: Vec<String> = templateparamlist
            .children_named("param")
            .map(|p| {
                let mut param = linked_text_child(p, "type");
                if let Some(defval) = p.child("defval") {
                    param.push_str(" = ");
                    param.push_str(&linked_text(defval));
                }
                param
            })
            .collect();
        contents.push_str("template <\n    ");
        contents.push_str(&params.join(",\n    "));
        contents.push_str(">\n");
    }

    // Constructors have no return type
    let return_type = linked_text_child(node, "type");
    if !return_type.is_empty() {
        contents.push_str(&return_type);
        contents.push('\n');
    }
    contents.push_str(&node.child_text("qualifiedname"));
    contents.push_str(" (");

    let params: Vec<String> = node
        .children_named("param")
        .map(|p| {
            let ty = linked_text_child(p, "type");
            let declname = p.child_text("declname");
            if declname.is_empty() {
                ty
            } else {
                format!("{} {}", ty, declname)
            }
        })
        .collect();
    if params.is_empty() {
        contents.push(')');
    } else {
        contents.push_str("\n    ");
        contents.push_str(&params.join(",\n    "));
        contents.push_str("\n  )");
    }
    contents
}

pub fn class_syntax_content(node: &XmlNode) -> String {
    let mut contents = String::new();
    if let Some(includes) = node.child("includes") {
        contents.push_str(&format!("// Found in #include <{}>\n", includes.text()));
    }
    let keyword = if node.attribute("kind") == "struct" {
        "struct"
    } else {
        "class"
    };
    contents.push_str(&format!(
        "{} {} {{ ... }};",
        keyword,
        node.child_text("compoundname")
    ));
    contents
}

pub fn variable_syntax_content(node: &XmlNode) -> String {
    format!(
        "{} {}{};",
        linked_text_child(node, "type"),
        node.child_text("qualifiedname"),
        node.child_text("argsstring")
    )
}

/// Declaration location of `node`, if Doxygen recorded one.
pub fn source_location(ctx: &YamlContext, node: &XmlNode) -> Option<Source> {
    let name = if node.name() == "compounddef" {
        let compoundname = node.child_text("compoundname");
        match compoundname.rfind("::") {
            Some(pos) => compoundname[pos + 2..].to_string(),
            None => compoundname,
        }
    } else {
        node.child_text("name")
    };
    let location = node.child("location")?;
    let file = location.attribute("file");
    let line = location.attribute("line");
    if name.is_empty() || file.is_empty() || line.is_empty() {
        return None;
    }
    let start_line = line.parse().ok()?;
    let path = format!("{}{}", ctx.library_root, file);
    Some(Source {
        id: name,
        path: path.clone(),
        start_line,
        remote: Remote {
            repo: REMOTE_REPO.to_string(),
            branch: REMOTE_BRANCH.to_string(),
            path,
        },
    })
}

fn syntax(ctx: &YamlContext, node: &XmlNode, contents: String) -> Syntax {
    Syntax {
        contents,
        source: source_location(ctx, node),
        ..Default::default()
    }
}

pub fn append_enum_syntax(item: &mut Item, ctx: &YamlContext, node: &XmlNode) {
    item.syntax = Some(syntax(ctx, node, enum_syntax_content(node)));
}

pub fn append_typedef_syntax(item: &mut Item, ctx: &YamlContext, node: &XmlNode) {
    let mut block = syntax(ctx, node, typedef_syntax_content(node));
    block.aliasof = Some(linked_text_child(node, "type"));
    item.syntax = Some(block);
}

pub fn append_class_syntax(item: &mut Item, ctx: &YamlContext, node: &XmlNode) {
    item.syntax = Some(syntax(ctx, node, class_syntax_content(node)));
}

pub fn append_variable_syntax(item: &mut Item, ctx: &YamlContext, node: &XmlNode) {
    item.syntax = Some(syntax(ctx, node, variable_syntax_content(node)));
}

/// Adds the function signature plus per-parameter and return value
/// descriptions taken from the `@param` and `@return` documentation.
pub fn append_function_syntax(item: &mut Item, ctx: &YamlContext, node: &XmlNode) -> Result<()> {
    let mut block = syntax(ctx, node, function_syntax_content(node));
    let descriptions = parameter_descriptions(node)?;
    block.parameters = node
        .children_named("param")
        .map(|p| {
            let id = p.child_text("declname");
            let description = descriptions
                .iter()
                .find(|(name, _)| *name == id)
                .map(|(_, d)| d.clone())
                .unwrap_or_default();
            Parameter {
                id,
                var_type: linked_text_child(p, "type"),
                description,
            }
        })
        .collect();

    let return_type = linked_text_child(node, "type");
    if !return_type.is_empty() {
        block.return_value = Some(ReturnValue {
            var_type: return_type,
            description: return_description(node)?,
        });
    }
    item.syntax = Some(block);
    Ok(())
}

fn parameter_descriptions(node: &XmlNode) -> Result<Vec<(String, String)>> {
    let mut descriptions = Vec::new();
    let Some(detailed) = node.child("detaileddescription") else {
        return Ok(descriptions);
    };
    for list in detailed.descendants_named("parameterlist") {
        if list.attribute("kind") != "param" {
            continue;
        }
        for item in list.children_named("parameteritem") {
            let description = match item.child("parameterdescription") {
                Some(d) => inline_description(d)?,
                None => String::new(),
            };
            for name in parameter_names(item)? {
                descriptions.push((name, description.clone()));
            }
        }
    }
    Ok(descriptions)
}

fn return_description(node: &XmlNode) -> Result<String> {
    let Some(detailed) = node.child("detaileddescription") else {
        return Ok(String::new());
    };
    for sect in detailed.descendants_named("simplesect") {
        if sect.attribute("kind") == "return" {
            return inline_description(sect);
        }
    }
    Ok(String::new())
}
