/*! # sedge
A recursive-descent parser for an SCSS-flavored stylesheet dialect: CSS
syntax extended with nested blocks, `!variable` bindings, mixins,
control-flow at-rules, and `#{…}` interpolation.

`parse` consumes an entire source string and produces the stylesheet AST, or
a single syntax error pinpointing the failure:

```
fn main() -> Result<(), Box<sedge::Error>> {
    let sheet = sedge::parse("a {\n  color: red;\n}")?;
    assert_eq!(sheet.children.len(), 1);
    Ok(())
}
```

Errors quote the source around the failure site:

```
let err = sedge::parse("a { color: }").unwrap_err();
assert_eq!(
    err.message(),
    "Invalid CSS after \"a { color: \": expected expression (e.g. 1px, bold), was \"}\"",
);
assert_eq!(err.line(), 1);
```
*/

#![warn(clippy::all, clippy::pedantic)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::implicit_return,
    clippy::use_self,
    clippy::missing_docs_in_private_items,
    clippy::module_name_repetitions,
    clippy::else_if_without_else,
    clippy::option_if_let_else,
    clippy::missing_errors_doc,
    clippy::string_slice,
    clippy::indexing_slicing,
    clippy::redundant_pub_crate
)]

use crate::parse::Parser;

pub use crate::ast::{Node, NodeKind, Segment, StyleSheet, TokenList};
pub use crate::error::{ParseError as Error, ParseResult as Result};
pub use crate::script::{Param, ScriptExpr};

mod ast;
mod error;
mod parse;
mod rx;
mod scanner;
mod script;

/// Parse a stylesheet.
///
/// The whole source is consumed; on success the scanner is guaranteed to
/// have reached the end of input. The first syntax error aborts the parse.
pub fn parse(source: &str) -> Result<StyleSheet> {
    Parser::new(source).parse()
}
