//! The grammar engine.
//!
//! Each nonterminal is a method returning `ParseResult<Option<T>>`:
//! `Ok(None)` means "this alternative does not match, try the next one",
//! while `Err` means a production has committed and found the input invalid.
//! The only place the scanner ever moves backwards is the
//! declaration-vs-ruleset resolver in `style.rs`.

use crate::{
    ast::{Node, NodeKind, StyleSheet},
    error::{ParseError, ParseResult},
    rx,
    rx::Pattern,
    scanner::Scanner,
    script::ScriptParser,
};

mod at_rule;
mod selector;
mod style;
mod value;

pub(crate) struct Parser<'a> {
    scanner: Scanner<'a>,
    /// Set while a declaration attempt looks property-like (`*` hack, `=`
    /// value, whitespace after the `:`, or a non-identifier value). When the
    /// ruleset retry also fails, the declaration error is the one reported.
    use_property_exception: bool,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            scanner: Scanner::new(source),
            use_property_exception: false,
        }
    }

    pub fn parse(mut self) -> ParseResult<StyleSheet> {
        let mut children = Vec::new();
        self.block_contents(&mut children, true)?;
        if !self.scanner.is_eof() {
            return Err(self.expected("selector or at-rule"));
        }
        Ok(StyleSheet { children })
    }

    /// Attach block children to `parent` until neither a `;` separator nor a
    /// preceding child with a nested block licenses another one.
    fn block_contents(&mut self, parent: &mut Vec<Node>, toplevel: bool) -> ParseResult<()> {
        self.trivia(parent, toplevel);
        let mut last = self.block_child(parent, toplevel)?;
        loop {
            let separated = self.scanner.scan(&rx::SEMICOLON).is_some();
            if !separated && last != Some(true) {
                break;
            }
            self.trivia(parent, toplevel);
            last = self.block_child(parent, toplevel)?;
        }
        Ok(())
    }

    /// One block child. Returns whether it carried a non-empty nested block,
    /// or `None` if no child matched.
    fn block_child(&mut self, parent: &mut Vec<Node>, toplevel: bool) -> ParseResult<Option<bool>> {
        let node = if let Some(node) = self.variable()? {
            Some(node)
        } else if let Some(node) = self.directive()? {
            Some(node)
        } else if toplevel {
            // CSS has no top-level declarations, so `a:hover { … }` is
            // unambiguously a ruleset here
            self.ruleset()?
        } else {
            self.declaration_or_ruleset()?
        };

        Ok(node.map(|node| {
            let has_block = node.has_children();
            parent.push(node);
            has_block
        }))
    }

    /// `!name = expr`, with an optional `||` guard before the `=`.
    fn variable(&mut self) -> ParseResult<Option<Node>> {
        let line = self.scanner.line();
        if self.scan(&rx::BANG).is_none() {
            return Ok(None);
        }
        let name = self.expect(&rx::IDENT)?.to_owned();
        self.ss();
        let guarded = self.scan(&rx::GUARD).is_some();
        self.expect(&rx::EQUALS)?;
        self.ss();
        let expr = self.script().parse()?;
        Ok(Some(Node::new(
            line,
            NodeKind::Variable {
                name,
                expr,
                guarded,
            },
        )))
    }

    /// A braced block of children.
    fn block(&mut self) -> ParseResult<Vec<Node>> {
        self.expect(&rx::LBRACE)?;
        let mut children = Vec::new();
        self.block_contents(&mut children, false)?;
        self.expect(&rx::RBRACE)?;
        Ok(children)
    }

    /// Whitespace and comments between children. Block comments become
    /// `Comment` children of `parent`; at top level `<!--`/`-->` are also
    /// consumed.
    fn trivia(&mut self, parent: &mut Vec<Node>, toplevel: bool) {
        loop {
            if self.scanner.scan(&rx::S).is_some()
                || self.scanner.scan(&rx::SINGLE_LINE_COMMENT).is_some()
            {
                continue;
            }
            if toplevel
                && (self.scanner.scan(&rx::CDO).is_some() || self.scanner.scan(&rx::CDC).is_some())
            {
                continue;
            }
            if self.scan_comment(parent) {
                continue;
            }
            break;
        }
    }

    /// A block comment attached to `parent`, with the text preceding it on
    /// its line reduced to whitespace so indentation survives.
    fn scan_comment(&mut self, parent: &mut Vec<Node>) -> bool {
        let text = match self.scanner.scan(&rx::COMMENT) {
            Some(text) => text,
            None => return false,
        };
        let consumed = self.scanner.consumed();
        let before = &consumed[..consumed.len() - text.len()];
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let mut comment: String = before[line_start..]
            .chars()
            .map(|c| if c.is_whitespace() { c } else { ' ' })
            .collect();
        comment.push_str(text);

        let line = self.scanner.line() - text.matches('\n').count() as u32;
        parent.push(Node::new(line, NodeKind::Comment { text: comment }));
        true
    }

    /// Whitespace and comments, all discarded.
    fn ss(&mut self) {
        loop {
            if self.scanner.scan(&rx::S).is_none()
                && self.scanner.scan(&rx::SINGLE_LINE_COMMENT).is_none()
                && self.scanner.scan(&rx::COMMENT).is_none()
            {
                break;
            }
        }
    }

    /// The raw text of any whitespace at the cursor; comments are consumed
    /// but, by the capture contract, never recorded.
    fn raw_ss(&mut self) -> String {
        self.scanner.push_capture();
        self.ss();
        self.scanner.pop_capture()
    }

    /// Run `body` while recording every consumed token, returning its result
    /// together with the recorded raw text.
    fn capture<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<(T, String)> {
        self.scanner.push_capture();
        let result = body(self);
        let text = self.scanner.pop_capture();
        Ok((result?, text))
    }

    fn scan(&mut self, pattern: &Pattern) -> Option<&'a str> {
        self.scanner.scan(pattern)
    }

    fn expect(&mut self, pattern: &Pattern) -> ParseResult<&'a str> {
        self.scanner.expect(pattern)
    }

    fn expected(&self, label: &str) -> Box<ParseError> {
        self.scanner.expectation_error(label)
    }

    fn script(&mut self) -> ScriptParser<'_, 'a> {
        ScriptParser::new(&mut self.scanner)
    }
}
