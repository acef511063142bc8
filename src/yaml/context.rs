use crate::config::Config;
use crate::parser::XmlNode;
use std::collections::BTreeMap;

/// State threaded through the YAML emitter.
///
/// Like `MarkdownContext`, a context is never modified in place. Recursing
/// into a symbol builds a new one with [`nested_yaml_context`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YamlContext {
    /// Prefix for source paths, e.g. `google/cloud/storage/`.
    pub library_root: String,
    /// Id of the enclosing symbol, empty at the top level.
    pub parent_id: String,
    pub config: Config,
    /// Mocked function name to the id of the `MOCK_METHOD` member mocking it.
    pub mocking_functions: BTreeMap<String, String>,
    /// `MOCK_METHOD` member id to the name of the function it mocks.
    pub mocking_functions_by_id: BTreeMap<String, String>,
    /// Id of each mocked interface member to the id of its `MOCK_METHOD`.
    /// Mocked members are not emitted, the mock stands in for them.
    pub mocked_ids: BTreeMap<String, String>,
}

impl YamlContext {
    pub fn new(config: &Config) -> Self {
        Self {
            library_root: config.library_root(),
            config: config.clone(),
            ..Default::default()
        }
    }

    pub fn with_parent_id(&self, parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            ..self.clone()
        }
    }

    /// True for interface members replaced by a `MOCK_METHOD` in this scope.
    pub fn is_mocked(&self, id: &str) -> bool {
        self.mocked_ids.contains_key(id)
    }

    /// The id of the member mocked by the `MOCK_METHOD` with id `mock_id`.
    pub fn mocked_member(&self, mock_id: &str) -> Option<&str> {
        self.mocked_ids
            .iter()
            .find(|(_, mock)| mock.as_str() == mock_id)
            .map(|(id, _)| id.as_str())
    }
}

// googlemock macros show up in Doxygen as a member named MOCK_METHOD
const MOCK_METHOD: &str = "MOCK_METHOD";

/// The name of the function a `MOCK_METHOD` member mocks.
///
/// `MOCK_METHOD(ReturnType, Name, (Args...), (Specs...))` is parsed as a
/// function whose second parameter type links to the mocked function.
pub fn mocked_function_name(node: &XmlNode) -> Option<String> {
    if node.child_text("name") != MOCK_METHOD {
        return None;
    }
    let param = node.children_named("param").nth(1)?;
    let name = param.child("type")?.child("ref")?.text();
    if name.is_empty() {
        return None;
    }
    Some(name)
}

/// The context for the members of `node`.
///
/// The mock maps are rebuilt from the subtree of `node`, so they only
/// describe `MOCK_METHOD` members visible in this scope.
pub fn nested_yaml_context(ctx: &YamlContext, node: &XmlNode) -> YamlContext {
    let mut nested = ctx.with_parent_id(node.attribute("id"));
    nested.mocking_functions.clear();
    nested.mocking_functions_by_id.clear();
    nested.mocked_ids.clear();

    let members = node.descendants_named("memberdef");
    for member in &members {
        let Some(name) = mocked_function_name(member) else {
            continue;
        };
        let id = member.attribute("id").to_string();
        nested.mocking_functions.insert(name.clone(), id.clone());
        nested.mocking_functions_by_id.insert(id, name);
    }
    if nested.mocking_functions.is_empty() {
        return nested;
    }

    // Inherited members only appear in the listofallmembers summary
    let candidates = members
        .iter()
        .map(|m| (m.child_text("name"), m.attribute("id")))
        .chain(
            node.descendants_named("member")
                .into_iter()
                .map(|m| (m.child_text("name"), m.attribute("refid"))),
        );
    for (name, id) in candidates {
        if name == MOCK_METHOD || id.is_empty() {
            continue;
        }
        if let Some(mock_id) = nested.mocking_functions.get(&name) {
            nested
                .mocked_ids
                .entry(id.to_string())
                .or_insert_with(|| mock_id.clone());
        }
    }
    nested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const MOCK_CLASS: &str = r#"<compounddef id="classgoogle_1_1cloud_1_1kms__mocks_1_1MockKeyConnection" kind="class" prot="public">
      <compoundname>google::cloud::kms_mocks::MockKeyConnection</compoundname>
      <sectiondef kind="public-func">
        <memberdef kind="function" id="mock_1" prot="public" static="no">
          <type/>
          <name>MOCK_METHOD</name>
          <param><type><ref refid="classgoogle_1_1cloud_1_1StatusOr">StatusOr</ref>&lt; Key &gt;</type></param>
          <param><type><ref refid="classkms_1_1KeyConnection_1get" kindref="member">GetKey</ref></type></param>
          <param><type>(GetKeyRequest const &amp;request)</type></param>
          <param><type>(override)</type></param>
        </memberdef>
      </sectiondef>
      <listofallmembers>
        <member refid="classkms_1_1KeyConnection_1get" prot="public" virt="virtual"><scope>google::cloud::kms::KeyConnection</scope><name>GetKey</name></member>
        <member refid="mock_1" prot="public" virt="non-virtual"><scope>google::cloud::kms_mocks::MockKeyConnection</scope><name>MOCK_METHOD</name></member>
      </listofallmembers>
    </compounddef>"#;

    #[test]
    fn test_nested_context_sets_parent() {
        let doc = parse(r#"<compounddef id="classfoo" kind="class"/>"#).unwrap();
        let ctx = YamlContext::new(&Config::new("", "storage", "1.0"));
        let nested = nested_yaml_context(&ctx, &doc.root);
        assert_eq!(nested.parent_id, "classfoo");
        assert_eq!(nested.library_root, "google/cloud/storage/");
        assert_eq!(ctx.parent_id, "");
        assert!(nested.mocking_functions.is_empty());
    }

    #[test]
    fn test_nested_context_finds_mocks() {
        let doc = parse(MOCK_CLASS).unwrap();
        let ctx = YamlContext::new(&Config::new("", "kms", "1.0"));
        let nested = nested_yaml_context(&ctx, &doc.root);
        assert_eq!(nested.mocking_functions.get("GetKey").unwrap(), "mock_1");
        assert_eq!(nested.mocking_functions_by_id.get("mock_1").unwrap(), "GetKey");
        assert_eq!(
            nested.mocked_ids.get("classkms_1_1KeyConnection_1get").unwrap(),
            "mock_1"
        );
        assert!(nested.is_mocked("classkms_1_1KeyConnection_1get"));
        assert!(!nested.is_mocked("mock_1"));
        assert_eq!(
            nested.mocked_member("mock_1"),
            Some("classkms_1_1KeyConnection_1get")
        );
    }

    #[test]
    fn test_maps_are_recomputed_per_scope() {
        let doc = parse(MOCK_CLASS).unwrap();
        let ctx = YamlContext::new(&Config::new("", "kms", "1.0"));
        let nested = nested_yaml_context(&ctx, &doc.root);
        let other = parse(r#"<compounddef id="classbar" kind="class"/>"#).unwrap();
        let sibling = nested_yaml_context(&nested, &other.root);
        assert!(sibling.mocking_functions.is_empty());
        assert!(sibling.mocked_ids.is_empty());
    }

    #[test]
    fn test_mocked_function_name_requires_mock_method() {
        let doc = parse(
            r#"<memberdef kind="function" id="f"><type>void</type><name>GetKey</name><param><type>int</type></param><param><type><ref refid="x">Y</ref></type></param></memberdef>"#,
        )
        .unwrap();
        assert_eq!(mocked_function_name(&doc.root), None);
    }
}
