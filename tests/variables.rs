#![cfg(test)]

use sedge::NodeKind;

#[macro_use]
mod macros;

#[test]
fn toplevel_variable() {
    let sheet = parse!("!x = 3px");
    let (name, expr, guarded) = unwrap_node!(
        sheet.children[0],
        NodeKind::Variable { name, expr, guarded } => (name, expr, guarded)
    );
    assert_eq!(name, "x");
    assert_eq!(expr.text(), "3px");
    assert!(!guarded);
}

#[test]
fn guarded_variable() {
    let sheet = parse!("!accent ||= #fc0;\n");
    let (name, expr, guarded) = unwrap_node!(
        sheet.children[0],
        NodeKind::Variable { name, expr, guarded } => (name, expr, guarded)
    );
    assert_eq!(name, "accent");
    assert_eq!(expr.text(), "#fc0");
    assert!(*guarded);
}

#[test]
fn variable_inside_a_block() {
    let sheet = parse!("a { !y = red; color = !y; }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    assert_eq!(children.len(), 2);
    let name = unwrap_node!(children[0], NodeKind::Variable { name, .. } => name);
    assert_eq!(name, "y");
    assert!(matches!(children[1].kind, NodeKind::Declaration { .. }));
}

#[test]
fn variable_values_keep_complex_expressions() {
    let sheet = parse!("!margin = (5px + 3px) * 2");
    let expr = unwrap_node!(sheet.children[0], NodeKind::Variable { expr, .. } => expr);
    assert_eq!(expr.text(), "(5px + 3px) * 2");
}

#[test]
fn variable_line_numbers() {
    let sheet = parse!("\n\n!x = 1");
    assert_eq!(sheet.children[0].line, 3);
}

#[test]
fn variable_requires_equals() {
    assert_err!(
        "Error: Invalid CSS after \"!x \": expected \"=\", was \"3px\"",
        "!x 3px"
    );
}

#[test]
fn variable_requires_a_value() {
    assert_err!(
        "Error: Invalid CSS after \"!x = \": expected expression, was \";\"",
        "!x = ;"
    );
}
