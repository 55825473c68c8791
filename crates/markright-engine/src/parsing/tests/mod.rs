//! Whole-document parsing tests.
//!
//! Trees are compared through their text representation (see
//! [`crate::snapshot::repr`]), which keeps expectations readable and shows a
//! line diff on failure.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    error::ParseError,
    model::{BlockItem, Children, InlineElement, InlineItem, Text},
    parse,
    snapshot::{invariants, repr},
};

/// Joins lines, terminating each with a newline.
fn lines(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn tree(source: &str) -> String {
    let doc = parse(source).unwrap();
    invariants(&doc);
    repr(&doc)
}

#[test]
fn one_paragraph_keeps_lines_as_texts() {
    assert_eq!(
        tree("hi ho\nhe\n"),
        lines(&[
            "P",
            r#"  "hi ho""#,
            r#"  "he""#,
        ])
    );
}

#[test]
fn many_paragraphs() {
    let source = &lines(&[
        "first first first",
        "",
        "second second",
        "second",
        "",
        "",
        "",
        "",
        "third",
        "third third",
    ]);
    assert_eq!(
        tree(source),
        lines(&[
            "P",
            r#"  "first first first""#,
            "P",
            r#"  "second second""#,
            r#"  "second""#,
            "P",
            r#"  "third""#,
            r#"  "third third""#,
        ])
    );
}

#[test]
fn inline_elements_across_lines() {
    let source = "@a@b@c\n@d\n@e  @f\nsomewhat longer text@g\n@h ho  \n";
    assert_eq!(
        tree(source),
        lines(&[
            "P",
            "  I.a",
            "  I.b",
            "  I.c",
            "  I.d",
            "  I.e",
            r#"  "  ""#,
            "  I.f",
            r#"  "somewhat longer text""#,
            "  I.g",
            "  I.h",
            r#"  " ho  ""#,
        ])
    );
}

#[test]
fn inline_items_inside_a_body() {
    assert_eq!(
        tree("@inline<@a  @b@c @d@e ho@f hi hu>\n"),
        lines(&[
            "P",
            "  I.inline",
            "    I.a",
            r#"    "  ""#,
            "    I.b",
            "    I.c",
            r#"    " ""#,
            "    I.d",
            "    I.e",
            r#"    " ho""#,
            "    I.f",
            r#"    " hi hu""#,
        ])
    );
}

#[rstest]
#[case::spaces_and_empty_slot("@cmd(  a , , b )", &["a", "", "b"])]
#[case::wide_spacing("@cmd(   a   ,    b  ,, c )", &["a", "b", "", "c"])]
#[case::empty_list("@cmd()", &[""])]
#[case::single("@--dashes--(1)", &["1"])]
fn argument_lists(#[case] source: &str, #[case] expected: &[&str]) {
    let doc = parse(source).unwrap();
    let node = doc.nodes()[0].children()[0];
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(node.args(), Some(expected.as_slice()));
}

#[test]
fn block_element_with_inline_content() {
    assert_eq!(
        tree("@main\n  @a @b\n  @c\n"),
        lines(&[
            "B.main",
            "  P",
            "    I.a",
            r#"    " ""#,
            "    I.b",
            "    I.c",
        ])
    );
}

#[test]
fn blank_line_splits_paragraphs_inside_a_block() {
    assert_eq!(
        tree("@main\n  abc\n\n  def\n"),
        lines(&[
            "B.main",
            "  P",
            r#"    "abc""#,
            "  P",
            r#"    "def""#,
        ])
    );
}

#[test]
fn raw_block_keeps_markup_and_indentation() {
    assert_eq!(
        tree("@command*\n  1st@@b@@c\n    2nd @z\n  @3rd\n"),
        lines(&[
            "B.command*",
            r#"  "1st@@b@@c\n  2nd @z\n@3rd\n""#,
        ])
    );
}

#[test]
fn raw_block_indentation_stripping() {
    let doc = parse("@code*\n  line one\n    line two\n").unwrap();
    let BlockItem::Element(code) = &doc.children[0] else {
        panic!("expected a block element");
    };
    assert_eq!(code.name, "code");
    assert_eq!(code.children, Children::Raw("line one\n  line two\n".to_string()));
}

#[test]
fn cpp_hello_world() {
    let source = &lines(&[
        "@code*",
        "  #include<iostream>",
        "  using namespace std;",
        "",
        "  int main() {",
        r#"    cout << "hi" << endl;"#,
        "  }",
    ]);
    let expected = lines(&[
        "#include<iostream>",
        "using namespace std;",
        "",
        "int main() {",
        r#"  cout << "hi" << endl;"#,
        "}",
    ]);
    let doc = parse(source).unwrap();
    let code = doc.query("code").unwrap();
    assert_eq!(code.inner_text(), expected);
}

#[rstest]
#[case::mixed("@a{[]@b[{]}", r#"
P
  I.a
    "[]"
    I.b
      "{"
"#)]
#[case::widths("@a<A>@b<<B>>@c<<<C>>>@d<<<<D>>>>", r#"
P
  I.a
    "A"
  I.b
    "B"
  I.c
    "C"
  I.d
    "D"
"#)]
#[case::nested_without_text("@aaa[@bbb<@ccc>]", r#"
P
  I.aaa
    I.bbb
      I.ccc
"#)]
fn different_delimiters(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(tree(source), expected.trim_start());
}

#[test]
fn delimiter_width_nesting() {
    let doc = parse("@a[[@b[2@c]]]").unwrap();
    let BlockItem::Paragraph(p) = &doc.children[0] else {
        panic!("expected a paragraph");
    };
    let c = InlineElement::new("c", None, vec![]);
    let b = InlineElement::new("b", None, vec![Text::new("2").into(), c.into()]);
    let a = InlineElement::new("a", None, vec![b.into()]);
    assert_eq!(p.children, vec![InlineItem::Element(a)]);
}

#[test]
fn nested_inline_elements() {
    assert_eq!(
        tree("@big[[[@a{{1@b[[2@c@d{@e<3>}]]}}]]]\n"),
        lines(&[
            "P",
            "  I.big",
            "    I.a",
            r#"      "1""#,
            "      I.b",
            r#"        "2""#,
            "        I.c",
            "        I.d",
            "          I.e",
            r#"            "3""#,
        ])
    );
}

#[test]
fn nested_block_elements() {
    let source = "@a\n  @b\n    @c\n  @d\n    @e\n      @f\n";
    assert_eq!(
        tree(source),
        lines(&[
            "B.a",
            "  B.b",
            "    P",
            "      I.c",
            "  B.d",
            "    B.e",
            "      P",
            "        I.f",
        ])
    );
}

#[rstest]
#[case::blank_between_blocks("@first\n  1\n\n@second\n  2\n\n", "B.first\n  P\n    \"1\"\nB.second\n  P\n    \"2\"\n")]
#[case::several_blanks(
    "@a\n  1\n@b\n  2\n\n@c\n  3\n\n\n@d\n  4\n",
    "B.a\n  P\n    \"1\"\nB.b\n  P\n    \"2\"\nB.c\n  P\n    \"3\"\nB.d\n  P\n    \"4\"\n"
)]
#[case::head_before_trailing_blank("@a\n  1\n\n\n\n@b\n\n", "B.a\n  P\n    \"1\"\nP\n  I.b\n")]
#[case::heads_without_bodies("@a\n\n\n@b\n\n", "P\n  I.a\nP\n  I.b\n")]
fn where_empty_lines_attach(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(tree(source), expected);
}

#[test]
fn numbers_and_dashes_in_names() {
    assert_eq!(
        tree("@a123@123a\n@--dashes--(1)\n"),
        lines(&[
            "P",
            "  I.a123",
            "  I.123a",
            r#"  I.--dashes-- ["1"]"#,
        ])
    );
}

#[test]
fn blank_runs_give_one_paragraph_break() {
    let doc = parse("a\nb\n\n\n\nc\n").unwrap();
    assert_eq!(doc.children.len(), 2);
}

#[test]
fn whitespace_only_lines_are_blank() {
    assert_eq!(tree("a\n     \nb\n"), "P\n  \"a\"\nP\n  \"b\"\n");
}

#[test]
fn empty_document() {
    assert!(parse("").unwrap().children.is_empty());
    assert!(parse("\n\n\n").unwrap().children.is_empty());
}

#[test]
fn crlf_input() {
    assert_eq!(tree("@a\r\n  b\r\n"), "B.a\n  P\n    \"b\"\n");
}

#[rstest]
#[case::unclosed_body("@em[word", ParseError::UnclosedBody { line: 1, column: 4, delimiter: "]".into() })]
#[case::unclosed_wide_body("x\n@em[[word]", ParseError::UnclosedBody { line: 2, column: 4, delimiter: "]]".into() })]
#[case::odd_indent("@a\n  b\n   c\n", ParseError::OddIndentation { line: 3, indent: 3 })]
#[case::indent_jump("@a\n    b\n", ParseError::IndentJump { line: 2, expected: 2, found: 4 })]
#[case::nested_indent_jump("@a\n  @b\n      c\n", ParseError::IndentJump { line: 3, expected: 4, found: 6 })]
#[case::unclosed_args("@a(1, 2", ParseError::UnclosedArguments { line: 1, column: 3 })]
#[case::empty_name("mail me @ home", ParseError::EmptyElementName { line: 1, column: 9 })]
#[case::trailing_head("@a more\n  b\n", ParseError::TrailingHeadContent { line: 1, content: "more".into() })]
fn parse_errors(#[case] source: &str, #[case] expected: ParseError) {
    assert_eq!(parse(source), Err(expected));
}

#[test]
fn error_columns_account_for_indentation() {
    assert_eq!(
        parse("@a\n  x @b[y\n"),
        Err(ParseError::UnclosedBody {
            line: 2,
            column: 7,
            delimiter: "]".into(),
        })
    );
}

#[test]
fn error_messages_name_the_position() {
    let err = parse("@a\n    b\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 2: block body must be indented by 2 spaces, found 4"
    );
    assert_eq!(err.line(), 2);
}
