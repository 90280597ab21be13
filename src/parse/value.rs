//! Value expressions, terms, and interpolation.
//!
//! These are the token-list expressions of static CSS values and at-rule
//! arguments, not the expression sub-language: anything inside `#{…}` is
//! handed to the expression sub-parser, which shares the scanner.

use crate::{
    ast::TokenList,
    error::ParseResult,
    parse::Parser,
    rx,
    script::ScriptExpr,
};

impl<'a> Parser<'a> {
    /// One term, then operator/term continuations. The permissive operator
    /// set (`/`, `,`, `:`, `.`, `=` and whitespace) accommodates legacy CSS
    /// value forms.
    pub(super) fn expr(&mut self) -> ParseResult<Option<TokenList>> {
        let mut list = match self.term()? {
            Some(term) => term,
            None => return Ok(None),
        };
        list.push_text(self.raw_ss());
        loop {
            if let Some(op) = self.scan(&rx::OPERATOR) {
                list.push_text(op);
            } else if let Some(term) = self.term()? {
                list.append(term);
            } else {
                break;
            }
            list.push_text(self.raw_ss());
        }
        Ok(Some(list))
    }

    fn term(&mut self) -> ParseResult<Option<TokenList>> {
        let mut list = TokenList::default();
        if let Some(text) = self
            .scan(&rx::NUMBER)
            .or_else(|| self.scan(&rx::URI))
        {
            list.push_text(text);
            return Ok(Some(list));
        }
        if let Some(func) = self.function()? {
            return Ok(Some(func));
        }
        if let Some(string) = self.interp_string()? {
            return Ok(Some(string));
        }
        if let Some(text) = self
            .scan(&rx::UNICODERANGE)
            .or_else(|| self.scan(&rx::IDENT))
            .or_else(|| self.scan(&rx::HEXCOLOR))
        {
            list.push_text(text);
            return Ok(Some(list));
        }
        if let Some(expr) = self.interpolation()? {
            list.push_script(expr);
            return Ok(Some(list));
        }

        let op = match self.scan(&rx::UNARY) {
            Some(op) => op,
            None => return Ok(None),
        };
        list.push_text(op);
        self.scanner.set_expected("number or function");
        if let Some(number) = self.scan(&rx::NUMBER) {
            list.push_text(number);
        } else {
            match self.function()? {
                Some(func) => list.append(func),
                None => return Err(self.expected("number or function")),
            }
        }
        Ok(Some(list))
    }

    fn function(&mut self) -> ParseResult<Option<TokenList>> {
        let name = match self.scan(&rx::FUNCTION) {
            Some(name) => name,
            None => return Ok(None),
        };
        let mut list = TokenList::default();
        list.push_text(name);
        list.push_text(self.raw_ss());
        if let Some(args) = self.expr()? {
            list.append(args);
        }
        list.push_text(self.expect(&rx::RPAREN)?);
        Ok(Some(list))
    }

    /// `#{`, handing the body and the closing brace to the sub-parser.
    pub(super) fn interpolation(&mut self) -> ParseResult<Option<ScriptExpr>> {
        if self.scan(&rx::INTERP_START).is_none() {
            return Ok(None);
        }
        self.script().parse_interpolated().map(Some)
    }

    /// Identifiers and interpolations alternating, e.g. `border-#{!side}`.
    pub(super) fn interp_ident(&mut self) -> ParseResult<Option<TokenList>> {
        let mut list = TokenList::default();
        if let Some(text) = self.scan(&rx::IDENT) {
            list.push_text(text);
        } else if let Some(expr) = self.interpolation()? {
            list.push_script(expr);
        } else {
            return Ok(None);
        }
        loop {
            if let Some(text) = self.scan(&rx::NAME) {
                list.push_text(text);
            } else if let Some(expr) = self.interpolation()? {
                list.push_script(expr);
            } else {
                break;
            }
        }
        Ok(Some(list))
    }

    /// A quoted string, possibly broken by interpolation. The opener and
    /// continuation patterns capture the terminator that ended the static
    /// run; `#{` there means an interpolation follows.
    pub(super) fn interp_string(&mut self) -> ParseResult<Option<TokenList>> {
        let (first, mid) = if let Some(text) = self.scan(&rx::STRING1_START) {
            (text, &rx::STRING1_MID)
        } else if let Some(text) = self.scan(&rx::STRING2_START) {
            (text, &rx::STRING2_MID)
        } else {
            return Ok(None);
        };

        let mut list = TokenList::default();
        let mut in_interp = self.scanner.group(2) == Some("#{");
        // the `#{` belongs to the interpolation expression, not the text
        list.push_text(strip_interp_opener(first, in_interp));

        while in_interp {
            let expr = self.script().parse_interpolated()?;
            list.push_script(expr);
            let cont = self.expect(mid)?;
            in_interp = self.scanner.group(2) == Some("#{");
            list.push_text(strip_interp_opener(cont, in_interp));
        }
        Ok(Some(list))
    }
}

fn strip_interp_opener(text: &str, ends_in_interp: bool) -> &str {
    if ends_in_interp {
        &text[..text.len() - 2]
    } else {
        text
    }
}
