//! At-rule directives.
//!
//! `@` followed by an identifier either dispatches to one of the specialized
//! rules (`@mixin`, `@include`, `@debug`, `@for`, `@while`, `@if`,
//! `@import`) or becomes a generic directive whose argument text is captured
//! verbatim.

use crate::{
    ast::{Node, NodeKind},
    error::ParseResult,
    parse::Parser,
    rx,
};

impl<'a> Parser<'a> {
    pub(super) fn directive(&mut self) -> ParseResult<Option<Node>> {
        let line = self.scanner.line();
        if self.scan(&rx::AT).is_none() {
            return Ok(None);
        }
        let name = self.expect(&rx::IDENT)?.to_owned();
        self.ss();

        let node = match name.replace('-', "_").as_str() {
            "mixin" => self.mixin_definition(line)?,
            "include" => self.mixin_include(line)?,
            "debug" => self.debug_rule(line)?,
            "for" => self.for_rule(line)?,
            "while" => self.while_rule(line)?,
            "if" => self.if_rule(line)?,
            "import" => self.import_rule(line)?,
            _ => self.generic_directive(line, &name)?,
        };
        Ok(Some(node))
    }

    /// Most at-rules take expressions (e.g. `@media`), but some (e.g.
    /// `@page`) take selector-like arguments.
    fn generic_directive(&mut self, line: u32, name: &str) -> ParseResult<Node> {
        let (matched, mut args) = self.capture(|p| p.expr())?;
        if matched.is_none() {
            let (_, sel) = self.capture(|p| p.selector_list())?;
            args = sel;
        }
        let text = format!("@{} {}", name, args).trim().to_owned();

        let children = if self.scan(&rx::LBRACE).is_some() {
            let mut children = Vec::new();
            self.block_contents(&mut children, false)?;
            self.expect(&rx::RBRACE)?;
            Some(children)
        } else {
            None
        };

        Ok(Node::new(line, NodeKind::Directive { text, children }))
    }

    fn mixin_definition(&mut self, line: u32) -> ParseResult<Node> {
        let name = self.expect(&rx::IDENT)?.to_owned();
        let params = self.script().parse_mixin_definition_arglist()?;
        self.ss();
        let children = self.block()?;
        Ok(Node::new(
            line,
            NodeKind::MixinDefinition {
                name,
                params,
                children,
            },
        ))
    }

    fn mixin_include(&mut self, line: u32) -> ParseResult<Node> {
        let name = self.expect(&rx::IDENT)?.to_owned();
        let args = self.script().parse_mixin_include_arglist()?;
        self.ss();
        Ok(Node::new(line, NodeKind::MixinInclude { name, args }))
    }

    fn debug_rule(&mut self, line: u32) -> ParseResult<Node> {
        let expr = self.script().parse()?;
        self.ss();
        Ok(Node::new(line, NodeKind::Debug { expr }))
    }

    fn for_rule(&mut self, line: u32) -> ParseResult<Node> {
        self.expect(&rx::BANG)?;
        let variable = self.expect(&rx::IDENT)?.to_owned();
        self.ss();
        self.expect(&rx::FROM)?;
        let from = self.script().parse_until(&["to", "through"])?;

        self.scanner.set_expected("\"to\" or \"through\"");
        let inclusive = if self.scan(&rx::TO).is_some() {
            false
        } else {
            self.expect(&rx::THROUGH)?;
            true
        };
        let to = self.script().parse()?;
        self.ss();
        let children = self.block()?;

        Ok(Node::new(
            line,
            NodeKind::For {
                variable,
                from,
                to,
                inclusive,
                children,
            },
        ))
    }

    fn while_rule(&mut self, line: u32) -> ParseResult<Node> {
        let condition = self.script().parse()?;
        self.ss();
        let children = self.block()?;
        Ok(Node::new(
            line,
            NodeKind::While {
                condition,
                children,
            },
        ))
    }

    fn if_rule(&mut self, line: u32) -> ParseResult<Node> {
        let condition = self.script().parse()?;
        self.ss();
        let children = self.block()?;
        Ok(Node::new(
            line,
            NodeKind::If {
                condition,
                children,
            },
        ))
    }

    /// `@import "path"` or `@import url(path)`, optionally followed by a
    /// media list. With media present the import stays a plain directive.
    fn import_rule(&mut self, line: u32) -> ParseResult<Node> {
        self.scanner.set_expected("string or url()");
        let arg = match self.scan(&rx::STRING) {
            Some(text) => text,
            None => self.expect(&rx::URI)?,
        };
        let path = self
            .scanner
            .group(1)
            .or_else(|| self.scanner.group(2))
            .or_else(|| self.scanner.group(3))
            .unwrap_or(arg);

        self.ss();
        let (_, media) = self.capture(|p| p.expr())?;
        let media = media.trim();

        if media.is_empty() {
            Ok(Node::new(
                line,
                NodeKind::Import {
                    path: path.trim().to_owned(),
                },
            ))
        } else {
            Ok(Node::new(
                line,
                NodeKind::Directive {
                    text: format!("@import {} {}", arg, media),
                    children: None,
                },
            ))
        }
    }
}
