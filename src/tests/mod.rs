//! Golden tests for the Markdown renderer over realistic Doxygen fragments.

use crate::parser::parse;
use crate::renderer::context::MarkdownContext;
use crate::renderer::renderer::summary;
use crate::renderer::renders::append_paragraph;
use similar::TextDiff;

fn assert_golden(actual: &str, expected: &str) {
    if actual != expected {
        let diff = TextDiff::from_lines(expected, actual);
        panic!(
            "rendered markdown does not match:\n{}",
            diff.unified_diff().header("expected", "actual")
        );
    }
}

fn render_paragraph(xml: &str) -> String {
    let doc = parse(xml).unwrap();
    let mut os = String::new();
    append_paragraph(&mut os, &MarkdownContext::new(), &doc.root).unwrap();
    os
}

#[test]
fn test_nested_lists() {
    let xml = concat!(
        "<para>Paragraph before list.<itemizedlist>",
        "<listitem><para>Item 1</para><para>More about Item 1</para></listitem>",
        "<listitem><para>Item 2: <computeroutput>brrr</computeroutput><itemizedlist>",
        "<listitem><para>Sub 1<itemizedlist><listitem><para>Sub 1.1</para></listitem></itemizedlist></para></listitem>",
        "<listitem><para>Sub 2</para></listitem>",
        "</itemizedlist></para></listitem>",
        "</itemizedlist></para>",
    );
    assert_golden(
        &render_paragraph(xml),
        "\n\nParagraph before list.\n- Item 1\n\n  More about Item 1\n- Item 2: `brrr`\n  - Sub 1\n    - Sub 1.1\n  - Sub 2",
    );
}

#[test]
fn test_paragraph_without_markup_is_verbatim() {
    let doc = parse("<para>Returns the  value,   spacing kept.</para>").unwrap();
    let ctx = MarkdownContext::new()
        .with_paragraph_start("\n")
        .with_paragraph_indent("    - ");
    let mut os = String::new();
    append_paragraph(&mut os, &ctx, &doc.root).unwrap();
    assert_eq!(os, "\n    - Returns the  value,   spacing kept.");
}

#[test]
fn test_function_summary() {
    let xml = concat!(
        r#"<memberdef kind="function" id="f" prot="public">"#,
        r#"<type>Client</type><name>MakeClient</name>"#,
        r#"<briefdescription><para>Makes a <ref refid="classc" kindref="compound">Client</ref>.</para></briefdescription>"#,
        r#"<detaileddescription>"#,
        r#"<para>Creates a client.</para>"#,
        r#"<para>Example:<programlisting filename=".cc"><codeline><highlight class="normal">auto<sp/>c<sp/>=<sp/>MakeClient();</highlight></codeline></programlisting></para>"#,
        r#"<para><itemizedlist><listitem><para>First, with a note.<simplesect kind="note"><para>Be careful.</para></simplesect></para></listitem></itemizedlist></para>"#,
        r#"<para><parameterlist kind="param"><parameteritem><parameternamelist><parametername>opts</parametername></parameternamelist>"#,
        r#"<parameterdescription><para>the options.</para></parameterdescription></parameteritem></parameterlist>"#,
        r#"<simplesect kind="return"><para>the client.</para></simplesect></para>"#,
        r#"</detaileddescription></memberdef>"#,
    );
    let doc = parse(xml).unwrap();
    let expected = concat!(
        "Makes a [Client](xref:classc).\n",
        "\n",
        "Creates a client.\n",
        "\n",
        "Example:\n",
        "```cpp\n",
        "auto c = MakeClient();\n",
        "```\n",
        "\n",
        "\n",
        "- First, with a note.\n",
        "\n",
        "  > **Note:**\n",
        "  > Be careful.\n",
        "\n",
        "\n",
        "\n",
        "###### Parameters\n",
        "\n",
        "| Name | Description |\n",
        "| ---- | ----------- |\n",
        "| `opts` | the options. |\n",
        "\n",
        "###### Returns\n",
        "\n",
        "the client.",
    );
    assert_golden(&summary(&doc.root).unwrap(), expected);
}

#[test]
fn test_deprecated_member_summary() {
    let xml = concat!(
        r#"<memberdef kind="function" id="f" prot="public"><type>void</type><name>Old</name>"#,
        r#"<briefdescription><para>Does the old thing.</para></briefdescription>"#,
        r#"<detaileddescription><para><xrefsect id="deprecated_1_d1"><xreftitle>Deprecated</xreftitle>"#,
        r#"<xrefdescription><para>Use <computeroutput>New()</computeroutput> instead.</para></xrefdescription></xrefsect></para>"#,
        r#"</detaileddescription></memberdef>"#,
    );
    let doc = parse(xml).unwrap();
    assert_golden(
        &summary(&doc.root).unwrap(),
        "Does the old thing.\n\n\n\n> **Deprecated:**\n> Use `New()` instead.",
    );
}

#[test]
fn test_warning_with_two_paragraphs_in_list() {
    let xml = concat!(
        r#"<para><itemizedlist><listitem><para>Item<simplesect kind="warning">"#,
        r#"<para>One.</para><para>Two.</para></simplesect></para></listitem></itemizedlist></para>"#,
    );
    assert_golden(
        &render_paragraph(xml),
        "\n\n\n- Item\n\n  > **Warning:**\n  > One.\n  >\n  > Two.",
    );
}

#[test]
fn test_error_messages_are_single_line() {
    let doc = parse(concat!(
        "<para>Text\n",
        "  <unknown a1=\"x\" a2=\"y\">\n",
        "    <child>1</child>\n",
        "    <child>2\nlines</child>\n",
        "  </unknown>\n",
        "</para>",
    ))
    .unwrap();
    let mut os = String::new();
    let err = append_paragraph(&mut os, &MarkdownContext::new(), &doc.root).unwrap_err();
    let message = err.to_string();
    assert!(!message.contains('\n'));
    assert!(message.contains(
        r#"<unknown a1="x" a2="y"><child>1</child><child>2&#10;lines</child></unknown>"#
    ));
}
