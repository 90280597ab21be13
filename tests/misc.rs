#![cfg(test)]

use sedge::NodeKind;

#[macro_use]
mod macros;

#[test]
fn empty_input() {
    let sheet = parse!("");
    assert!(sheet.children.is_empty());
}

#[test]
fn whitespace_only_input() {
    let sheet = parse!("  \n\t\n");
    assert!(sheet.children.is_empty());
}

#[test]
fn cdo_and_cdc_are_ignored_at_toplevel() {
    let sheet = parse!("<!-- a { color: red; } -->");
    assert_eq!(sheet.children.len(), 1);
    assert!(matches!(sheet.children[0].kind, NodeKind::Rule { .. }));
}

#[test]
fn children_without_blocks_need_semicolons() {
    assert_err!(
        "Error: Invalid CSS after \"a { @include foo \": expected \"}\", was \"@include bar; }\"",
        "a { @include foo @include bar; }"
    );
}

#[test]
fn a_nested_block_licenses_the_next_child() {
    let sheet = parse!("a { b { color: red; } c { color: blue; } }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    assert_eq!(children.len(), 2);
}

#[test]
fn empty_blocks_do_not_license_the_next_child() {
    assert_err!(
        "Error: Invalid CSS after \"a { b { } \": expected \"}\", was \"c { } }\"",
        "a { b { } c { } }"
    );
}

#[test]
fn generic_directive_without_a_block() {
    let sheet = parse!("@charset \"utf-8\";");
    let (text, children) = unwrap_node!(
        sheet.children[0],
        NodeKind::Directive { text, children } => (text, children)
    );
    assert_eq!(text, "@charset \"utf-8\"");
    assert!(children.is_none());
}

#[test]
fn generic_directive_with_a_block() {
    let sheet = parse!("@media print { a { color: red; } }");
    let (text, children) = unwrap_node!(
        sheet.children[0],
        NodeKind::Directive { text, children } => (text, children)
    );
    assert_eq!(text, "@media print");
    assert_eq!(children.as_ref().unwrap().len(), 1);
}

#[test]
fn directive_with_selector_like_arguments() {
    let sheet = parse!("@page :first { margin: 1in; }");
    let text = unwrap_node!(sheet.children[0], NodeKind::Directive { text, .. } => text);
    assert_eq!(text, "@page :first");
}

#[test]
fn hyphenated_directive_names_are_generic() {
    let sheet = parse!("@font-face { font-family: x; }");
    let text = unwrap_node!(sheet.children[0], NodeKind::Directive { text, .. } => text);
    assert_eq!(text, "@font-face");
}

#[test]
fn node_lines_match_their_first_token() {
    let sheet = parse!("a {\n  color: red;\n}\nb {\n  color: blue;\n}\n");
    assert_eq!(sheet.children[0].line, 1);
    assert_eq!(sheet.children[1].line, 4);
    let children = unwrap_node!(sheet.children[1], NodeKind::Rule { children, .. } => children);
    assert_eq!(children[0].line, 5);
}

#[test]
fn declaration_values_round_trip() {
    let sheet = parse!("a { margin: 0 auto  2px; }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    let value = unwrap_node!(children[0], NodeKind::Declaration { value, .. } => value);
    // inter-token whitespace is preserved verbatim
    assert_eq!(value.text(), "0 auto  2px");
}
