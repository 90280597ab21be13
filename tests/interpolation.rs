#![cfg(test)]

use sedge::{NodeKind, Segment};

#[macro_use]
mod macros;

#[test]
fn interpolated_property_name() {
    let sheet = parse!("a { border-#{!side}: red; }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    let name = unwrap_node!(children[0], NodeKind::Declaration { name, .. } => name);
    assert_eq!(name.trimmed(), "border-#{!side}");
    assert!(matches!(name.0[1], Segment::Script(..)));
}

#[test]
fn interpolated_selector() {
    let sheet = parse!("#{!sel} { color: red; }");
    let selector = unwrap_node!(sheet.children[0], NodeKind::Rule { selector, .. } => selector);
    assert_eq!(selector.trimmed(), "#{!sel}");
}

#[test]
fn interpolation_mid_selector() {
    let sheet = parse!("a#{!class}-suffix { color: red; }");
    let selector = unwrap_node!(sheet.children[0], NodeKind::Rule { selector, .. } => selector);
    assert_eq!(selector.trimmed(), "a#{!class}-suffix");
}

#[test]
fn interpolated_double_quoted_string() {
    let sheet = parse!("a { content: \"hello #{!name}!\"; }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    let value = unwrap_node!(children[0], NodeKind::Declaration { value, .. } => value);
    assert_eq!(value.trimmed(), "\"hello #{!name}!\"");
}

#[test]
fn interpolated_single_quoted_string() {
    let sheet = parse!("a { content: 'x#{!y}z'; }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    let value = unwrap_node!(children[0], NodeKind::Declaration { value, .. } => value);
    assert_eq!(value.trimmed(), "'x#{!y}z'");
}

#[test]
fn adjacent_interpolations_in_a_string() {
    let sheet = parse!("a { content: \"#{!a}#{!b}\"; }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    let value = unwrap_node!(children[0], NodeKind::Declaration { value, .. } => value);
    assert_eq!(value.trimmed(), "\"#{!a}#{!b}\"");
}

#[test]
fn lone_hash_stays_in_string_text() {
    let sheet = parse!("a { content: \"#1 of #{!n}\"; }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    let value = unwrap_node!(children[0], NodeKind::Declaration { value, .. } => value);
    assert_eq!(value.trimmed(), "\"#1 of #{!n}\"");
}

#[test]
fn plain_strings_have_no_script_segments() {
    let sheet = parse!("a { content: \"plain\"; }");
    let children = unwrap_node!(sheet.children[0], NodeKind::Rule { children, .. } => children);
    let value = unwrap_node!(children[0], NodeKind::Declaration { value, .. } => value);
    assert!(value.0.iter().all(|s| matches!(s, Segment::Text(..))));
}

#[test]
fn unterminated_interpolation_is_an_error() {
    assert_err!(
        "Error: Invalid CSS after \"a { color: #{!x\": expected \"}\", was \"; }\"",
        "a { color: #{!x; }"
    );
}
