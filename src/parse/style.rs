//! Property declarations and the declaration-vs-ruleset resolver.
//!
//! A line beginning with an identifier followed by a colon may be a
//! declaration (`color: red`) or a ruleset (`a:hover { … }`). The resolver
//! below is the parser's single backtracking point: it attempts a
//! declaration, requires it to be followed directly by `;` or `}`, and
//! otherwise rolls the scanner back and attempts a ruleset.

use std::mem;

use crate::{
    ast::{Node, NodeKind, TokenList},
    error::{ParseError, ParseResult},
    parse::Parser,
    rx,
};

impl<'a> Parser<'a> {
    pub(super) fn declaration_or_ruleset(&mut self) -> ParseResult<Option<Node>> {
        let mark = self.scanner.bookmark();
        let old_exception = mem::replace(&mut self.use_property_exception, false);

        let result = match self.try_declaration() {
            Ok(decl) => Ok(decl),
            Err(decl_err) if decl_err.is_recoverable() => {
                self.scanner.restore(mark);
                match self.ruleset() {
                    Ok(rule) => Ok(rule),
                    // input that looked property-like reports the
                    // declaration failure, not the ruleset one
                    Err(_) if self.use_property_exception => Err(decl_err),
                    Err(ruleset_err) => Err(ruleset_err),
                }
            }
            Err(fatal) => Err(fatal),
        };

        self.use_property_exception = old_exception;
        result
    }

    /// A declaration attempt is only accepted when `;` or `}` follows; the
    /// peek does not consume so the separator logic still sees it. A
    /// declaration that ended in a nested block is already committed.
    fn try_declaration(&mut self) -> ParseResult<Option<Node>> {
        let decl = self.declaration()?;
        let has_block = decl.as_ref().map_or(false, |d| d.children().is_some());
        if !has_block && !self.scanner.peek(&rx::DECL_END) {
            return Err(self.scanner.expectation_error(&rx::DECL_END.human_name()));
        }
        Ok(decl)
    }

    fn declaration(&mut self) -> ParseResult<Option<Node>> {
        let line = self.scanner.line();
        let mut name = TokenList::default();

        if let Some(star) = self.scan(&rx::STAR) {
            // the `*prop: val` browser hack
            self.use_property_exception = true;
            name.push_text(star);
            name.push_text(self.raw_ss());
            match self.interp_ident()? {
                Some(rest) => name.append(rest),
                None => return Err(self.expected("identifier")),
            }
        } else {
            match self.interp_ident()? {
                Some(ident) => name.append(ident),
                None => return Ok(None),
            }
        }
        self.ss();

        if self.scan(&rx::EQUALS).is_some() {
            // old-style `prop = expr` assignment; no block may follow
            self.use_property_exception = true;
            self.ss();
            let expr = self.script().parse()?;
            let mut value = TokenList::default();
            value.push_script(expr);
            return Ok(Some(Node::new(
                line,
                NodeKind::Declaration {
                    name,
                    value,
                    children: None,
                },
            )));
        }

        self.scanner.set_expected("\":\" or \"=\"");
        self.expect(&rx::COLON)?;
        let space = !self.raw_ss().is_empty();
        self.use_property_exception |= space || !self.scanner.peek(&rx::IDENT);

        let mut value = self.expr()?.unwrap_or_default();
        if let Some(important) = self.scan(&rx::IMPORTANT) {
            value.push_text(important);
        }
        self.ss();

        if !self.scanner.peek(&rx::LBRACE) {
            if value.is_empty() {
                return Err(self.expected("expression (e.g. 1px, bold)"));
            }
            return Ok(Some(Node::new(
                line,
                NodeKind::Declaration {
                    name,
                    value,
                    children: None,
                },
            )));
        }

        // nested properties beneath this one
        if !space {
            return Err(ParseError::fatal(
                "Invalid CSS: a space is required between a property and its \
                 definition when it has other properties nested beneath it.",
                self.scanner.line(),
            ));
        }
        self.use_property_exception = true;
        self.scanner.set_expected("expression (e.g. 1px, bold) or \"{\"");
        let children = self.block()?;
        // a property that opens a block must declare something beneath it
        if children.is_empty() {
            return Err(self.expected("expression (e.g. 1px, bold)"));
        }

        Ok(Some(Node::new(
            line,
            NodeKind::Declaration {
                name,
                value,
                children: Some(children),
            },
        )))
    }
}
