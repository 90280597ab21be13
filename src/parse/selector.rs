//! Rulesets and selectors.
//!
//! Selectors are kept as flattened token lists so that the source text,
//! including significant whitespace combinators, survives into the AST.

use crate::{
    ast::{Node, NodeKind, TokenList},
    error::ParseResult,
    parse::Parser,
    rx,
};

impl<'a> Parser<'a> {
    pub(super) fn ruleset(&mut self) -> ParseResult<Option<Node>> {
        let line = self.scanner.line();
        let selector = match self.selector_list()? {
            Some(selector) => selector,
            None => return Ok(None),
        };
        let children = self.block()?;
        Ok(Some(Node::new(
            line,
            NodeKind::Rule { selector, children },
        )))
    }

    /// One selector, then zero or more `, selector` segments, flattened.
    pub(super) fn selector_list(&mut self) -> ParseResult<Option<TokenList>> {
        let mut list = match self.selector()? {
            Some(list) => list,
            None => return Ok(None),
        };
        while let Some(comma) = self.scan(&rx::COMMA) {
            list.push_text(comma);
            list.push_text(self.raw_ss());
            match self.selector()? {
                Some(next) => list.append(next),
                None => return Err(self.expected("selector")),
            }
        }
        Ok(Some(list))
    }

    /// The leading combinator allows the `> E` hack.
    fn selector(&mut self) -> ParseResult<Option<TokenList>> {
        let mut list = TokenList::default();
        match self.combinator() {
            Some(comb) => {
                list.push_text(comb);
                if let Some(seq) = self.simple_selector_sequence()? {
                    list.append(seq);
                }
            }
            None => match self.simple_selector_sequence()? {
                Some(seq) => list.append(seq),
                None => return Ok(None),
            },
        }
        while let Some(comb) = self.combinator() {
            list.push_text(comb);
            if let Some(seq) = self.simple_selector_sequence()? {
                list.append(seq);
            }
        }
        Ok(Some(list))
    }

    fn combinator(&mut self) -> Option<&'a str> {
        self.scan(&rx::PLUS)
            .or_else(|| self.scan(&rx::GREATER))
            .or_else(|| self.scan(&rx::TILDE))
            .or_else(|| self.scan(&rx::S))
    }

    fn simple_selector_sequence(&mut self) -> ParseResult<Option<TokenList>> {
        let mut list = match self.selector_atom()? {
            Some(atom) => atom,
            // This allows things like `0%` in keyframe-style blocks and
            // at-rule arguments parsed through the selector grammar
            None => return self.expr(),
        };
        while let Some(atom) = self.selector_atom()? {
            list.append(atom);
        }
        Ok(Some(list))
    }

    fn selector_atom(&mut self) -> ParseResult<Option<TokenList>> {
        if let Some(element) = self.element_name()? {
            return Ok(Some(element));
        }
        if let Some(id) = self.scan(&rx::HASH) {
            let mut list = TokenList::default();
            list.push_text(id);
            return Ok(Some(list));
        }
        if let Some(class) = self.class_selector()? {
            return Ok(Some(class));
        }
        if let Some(attrib) = self.attrib()? {
            return Ok(Some(attrib));
        }
        if let Some(negation) = self.negation()? {
            return Ok(Some(negation));
        }
        if let Some(pseudo) = self.pseudo()? {
            return Ok(Some(pseudo));
        }
        if let Some(parent) = self.scan(&rx::AMPERSAND) {
            let mut list = TokenList::default();
            list.push_text(parent);
            return Ok(Some(list));
        }
        if let Some(expr) = self.interpolation()? {
            let mut list = TokenList::default();
            list.push_script(expr);
            return Ok(Some(list));
        }
        Ok(None)
    }

    /// `E`, `*`, and the namespace forms `E|E`, `*|E`, `|E`.
    fn element_name(&mut self) -> ParseResult<Option<TokenList>> {
        let mut list = TokenList::default();
        if let Some(name) = self.scan(&rx::IDENT).or_else(|| self.scan(&rx::STAR)) {
            list.push_text(name);
        } else if !self.scanner.peek(&rx::PIPE) {
            return Ok(None);
        }

        if !self.scanner.peek(&rx::DASHMATCH) {
            if let Some(pipe) = self.scan(&rx::PIPE) {
                list.push_text(pipe);
                self.scanner.set_expected("element name or *");
                match self.scan(&rx::IDENT) {
                    Some(name) => list.push_text(name),
                    None => {
                        let star = self.expect(&rx::STAR)?;
                        list.push_text(star);
                    }
                }
            }
        }
        Ok(Some(list))
    }

    fn class_selector(&mut self) -> ParseResult<Option<TokenList>> {
        let dot = match self.scan(&rx::DOT) {
            Some(dot) => dot,
            None => return Ok(None),
        };
        let mut list = TokenList::default();
        list.push_text(dot);
        list.push_text(self.expect(&rx::IDENT)?);
        Ok(Some(list))
    }

    fn attrib(&mut self) -> ParseResult<Option<TokenList>> {
        if self.scan(&rx::LBRACKET).is_none() {
            return Ok(None);
        }
        let mut list = TokenList::default();
        list.push_text("[");
        list.push_text(self.raw_ss());
        self.attrib_name(&mut list)?;
        list.push_text(self.raw_ss());

        let matcher = self
            .scan(&rx::PREFIXMATCH)
            .or_else(|| self.scan(&rx::SUFFIXMATCH))
            .or_else(|| self.scan(&rx::SUBSTRINGMATCH))
            .or_else(|| self.scan(&rx::INCLUDES))
            .or_else(|| self.scan(&rx::DASHMATCH))
            .or_else(|| self.scan(&rx::EQUALS));
        if let Some(matcher) = matcher {
            list.push_text(matcher);
            list.push_text(self.raw_ss());
            if let Some(ident) = self.interp_ident()? {
                list.append(ident);
            } else if let Some(string) = self.interp_string()? {
                list.append(string);
            } else {
                return Err(self.expected("identifier or string"));
            }
            list.push_text(self.raw_ss());
        }

        list.push_text(self.expect(&rx::RBRACKET)?);
        Ok(Some(list))
    }

    /// Attribute names support the namespace forms `E|E`, `E|`, `*|E`, `|E`
    /// and plain `E`.
    fn attrib_name(&mut self, list: &mut TokenList) -> ParseResult<()> {
        if let Some(name) = self.interp_ident()? {
            list.append(name);
            // `E|E`, but `|=` is the dashmatch operator
            if !self.scanner.peek(&rx::DASHMATCH) {
                if let Some(pipe) = self.scan(&rx::PIPE) {
                    list.push_text(pipe);
                    if let Some(name) = self.interp_ident()? {
                        list.append(name);
                    }
                }
            }
        } else {
            if let Some(star) = self.scan(&rx::STAR) {
                list.push_text(star);
            }
            list.push_text(self.expect(&rx::PIPE)?);
            match self.interp_ident()? {
                Some(name) => list.append(name),
                None => return Err(self.expected("identifier")),
            }
        }
        Ok(())
    }

    fn negation(&mut self) -> ParseResult<Option<TokenList>> {
        let not = match self.scan(&rx::NOT) {
            Some(not) => not,
            None => return Ok(None),
        };
        let mut list = TokenList::default();
        list.push_text(not);
        list.push_text(self.raw_ss());
        self.scanner.set_expected("selector");

        let arg = if let Some(element) = self.element_name()? {
            Some(element)
        } else if let Some(id) = self.scan(&rx::HASH) {
            let mut list = TokenList::default();
            list.push_text(id);
            Some(list)
        } else if let Some(class) = self.class_selector()? {
            Some(class)
        } else if let Some(attrib) = self.attrib()? {
            Some(attrib)
        } else {
            self.pseudo()?
        };
        match arg {
            Some(arg) => list.append(arg),
            None => return Err(self.expected("selector")),
        }

        list.push_text(self.expect(&rx::RPAREN)?);
        Ok(Some(list))
    }

    fn pseudo(&mut self) -> ParseResult<Option<TokenList>> {
        let colons = match self.scan(&rx::PSEUDO_COLONS) {
            Some(colons) => colons,
            None => return Ok(None),
        };
        let mut list = TokenList::default();
        list.push_text(colons);
        self.scanner.set_expected("pseudoclass or pseudoelement");
        match self.functional_pseudo()? {
            Some(func) => list.append(func),
            None => list.push_text(self.expect(&rx::IDENT)?),
        }
        Ok(Some(list))
    }

    fn functional_pseudo(&mut self) -> ParseResult<Option<TokenList>> {
        let name = match self.scan(&rx::FUNCTION) {
            Some(name) => name,
            None => return Ok(None),
        };
        let mut list = TokenList::default();
        list.push_text(name);
        list.push_text(self.raw_ss());
        match self.pseudo_expr()? {
            Some(args) => list.append(args),
            None => return Err(self.expected("expression")),
        }
        list.push_text(self.expect(&rx::RPAREN)?);
        Ok(Some(list))
    }

    /// Arguments of a functional pseudoclass, e.g. `2n+1` in
    /// `:nth-child(2n+1)`.
    fn pseudo_expr(&mut self) -> ParseResult<Option<TokenList>> {
        let mut list = TokenList::default();
        let mut any = false;
        loop {
            if let Some(text) = self
                .scan(&rx::PLUS)
                .or_else(|| self.scan(&rx::MINUS))
                .or_else(|| self.scan(&rx::NUMBER))
                .or_else(|| self.scan(&rx::IDENT))
            {
                list.push_text(text);
            } else if let Some(string) = self.interp_string()? {
                list.append(string);
            } else if let Some(expr) = self.interpolation()? {
                list.push_script(expr);
            } else {
                break;
            }
            any = true;
            list.push_text(self.raw_ss());
        }
        Ok(if any { Some(list) } else { None })
    }
}
