#![cfg(test)]

use sedge::NodeKind;

#[macro_use]
mod macros;

#[test]
fn string_import() {
    let sheet = parse!("@import \"a.css\";");
    let path = unwrap_node!(sheet.children[0], NodeKind::Import { path } => path);
    assert_eq!(path, "a.css");
}

#[test]
fn single_quoted_import() {
    let sheet = parse!("@import 'b.css';");
    let path = unwrap_node!(sheet.children[0], NodeKind::Import { path } => path);
    assert_eq!(path, "b.css");
}

#[test]
fn url_import() {
    let sheet = parse!("@import url(b.css);");
    let path = unwrap_node!(sheet.children[0], NodeKind::Import { path } => path);
    assert_eq!(path, "b.css");
}

#[test]
fn url_import_with_quoted_path() {
    let sheet = parse!("@import url(\"c.css\");");
    let path = unwrap_node!(sheet.children[0], NodeKind::Import { path } => path);
    assert_eq!(path, "c.css");
}

#[test]
fn import_with_media_stays_a_directive() {
    let sheet = parse!("@import \"a.css\" screen;");
    let (text, children) = unwrap_node!(
        sheet.children[0],
        NodeKind::Directive { text, children } => (text, children)
    );
    assert_eq!(text, "@import \"a.css\" screen");
    assert!(children.is_none());
}

#[test]
fn import_with_media_list() {
    let sheet = parse!("@import url(a.css) screen, print;");
    let text = unwrap_node!(sheet.children[0], NodeKind::Directive { text, .. } => text);
    assert_eq!(text, "@import url(a.css) screen, print");
}

#[test]
fn import_requires_a_path() {
    assert_err!(
        "Error: Invalid CSS after \"@import \": expected string or url(), was \";\"",
        "@import ;"
    );
}
