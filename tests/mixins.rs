#![cfg(test)]

use sedge::NodeKind;

#[macro_use]
mod macros;

#[test]
fn mixin_without_params() {
    let sheet = parse!("@mixin large-text { font-size: 20px; }");
    let (name, params, children) = unwrap_node!(
        sheet.children[0],
        NodeKind::MixinDefinition { name, params, children } => (name, params, children)
    );
    assert_eq!(name, "large-text");
    assert!(params.is_empty());
    assert_eq!(children.len(), 1);
}

#[test]
fn mixin_with_params_and_defaults() {
    let sheet = parse!("@mixin sexy-border(!color, !width = 1in) { border = !width !color; }");
    let params = unwrap_node!(
        sheet.children[0],
        NodeKind::MixinDefinition { params, .. } => params
    );
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "color");
    assert!(params[0].default.is_none());
    assert_eq!(params[1].name, "width");
    assert_eq!(params[1].default.as_ref().unwrap().text(), "1in");
}

#[test]
fn include_without_args() {
    let sheet = parse!("@include large-text;");
    let (name, args) = unwrap_node!(
        sheet.children[0],
        NodeKind::MixinInclude { name, args } => (name, args)
    );
    assert_eq!(name, "large-text");
    assert!(args.is_empty());
}

#[test]
fn include_with_args() {
    let sheet = parse!("a { @include sexy-border(blue, 1in); }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    let args = unwrap_node!(children[0], NodeKind::MixinInclude { args, .. } => args);
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].text(), "blue");
    assert_eq!(args[1].text(), "1in");
}

#[test]
fn include_with_empty_parens() {
    let sheet = parse!("@include reset();");
    let args = unwrap_node!(sheet.children[0], NodeKind::MixinInclude { args, .. } => args);
    assert!(args.is_empty());
}

#[test]
fn mixin_params_require_a_variable() {
    assert_err!(
        "Error: Invalid CSS after \"@mixin foo(\": expected \"!\", was \"bar) { }\"",
        "@mixin foo(bar) { }"
    );
}

#[test]
fn mixin_requires_a_block() {
    assert_err!(
        "Error: Invalid CSS after \"@mixin foo\": expected \"{\", was \";\"",
        "@mixin foo;"
    );
}

#[test]
fn debug_directive() {
    let sheet = parse!("@debug 1 + 2;");
    let expr = unwrap_node!(sheet.children[0], NodeKind::Debug { expr } => expr);
    assert_eq!(expr.text(), "1 + 2");
}
