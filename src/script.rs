//! The expression sub-parser boundary.
//!
//! The main grammar delegates `#{…}` bodies, variable values, control-flow
//! conditions and mixin argument lists here. The sub-parser shares the main
//! parser's scanner, so position, line number and capture buffers advance in
//! lockstep and the main parser resumes exactly where the sub-parser left
//! off. An expression is consumed as a balanced span and returned opaque to
//! the caller; its internal structure is not interpreted at this layer.

use std::fmt::{self, Display};

use crate::{
    error::{ParseError, ParseResult},
    rx,
    scanner::Scanner,
};

/// An expression consumed by the sub-parser, opaque to the main grammar.
#[derive(Debug, Clone)]
pub struct ScriptExpr {
    source: String,
    line: u32,
}

impl ScriptExpr {
    /// The raw source text of the expression. Interpolation expressions
    /// carry the full `#{…}` form so that token lists round-trip.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl Display for ScriptExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A mixin parameter: `!name`, with an optional default expression.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub default: Option<ScriptExpr>,
}

pub(crate) struct ScriptParser<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl<'s, 'a> ScriptParser<'s, 'a> {
    pub fn new(scanner: &'s mut Scanner<'a>) -> Self {
        ScriptParser { scanner }
    }

    /// Parse one expression up to a natural terminator: `;`, `{`, `}` or an
    /// unbalanced `)`.
    pub fn parse(&mut self) -> ParseResult<ScriptExpr> {
        self.expression(false, &[])
    }

    /// As [`parse`](Self::parse), additionally stopping immediately before
    /// any identifier exactly equal to one of `stop_words`.
    pub fn parse_until(&mut self, stop_words: &[&str]) -> ParseResult<ScriptExpr> {
        self.expression(false, stop_words)
    }

    /// Parse the body of a `#{…}` interpolation, consuming the closing
    /// brace. The scanner must be positioned just past the `#{` opener.
    pub fn parse_interpolated(&mut self) -> ParseResult<ScriptExpr> {
        let line = self.scanner.line();
        let start = self.scanner.pos();
        self.balanced(true, false, &[])?;
        if self.scanner.slice_from(start).trim().is_empty() {
            return Err(self.expected("expression"));
        }
        self.scanner.expect(&rx::RBRACE)?;

        let mut source = String::from("#{");
        source.push_str(self.scanner.slice_from(start));
        Ok(ScriptExpr { source, line })
    }

    /// Parse an optional parenthesized `!name (= default)?` parameter list.
    pub fn parse_mixin_definition_arglist(&mut self) -> ParseResult<Vec<Param>> {
        let mut params = Vec::new();
        if self.scanner.scan(&rx::LPAREN).is_none() {
            return Ok(params);
        }
        self.trivia();
        if !self.scanner.peek(&rx::RPAREN) {
            loop {
                self.trivia();
                self.scanner.expect(&rx::BANG)?;
                let name = self.scanner.expect(&rx::IDENT)?.to_owned();
                self.trivia();
                let default = if self.scanner.scan(&rx::EQUALS).is_some() {
                    Some(self.expression(true, &[])?)
                } else {
                    None
                };
                params.push(Param { name, default });
                self.trivia();
                if self.scanner.scan(&rx::COMMA).is_none() {
                    break;
                }
            }
        }
        self.scanner.expect(&rx::RPAREN)?;
        Ok(params)
    }

    /// Parse an optional parenthesized argument list.
    pub fn parse_mixin_include_arglist(&mut self) -> ParseResult<Vec<ScriptExpr>> {
        let mut args = Vec::new();
        if self.scanner.scan(&rx::LPAREN).is_none() {
            return Ok(args);
        }
        self.trivia();
        if !self.scanner.peek(&rx::RPAREN) {
            loop {
                args.push(self.expression(true, &[])?);
                self.trivia();
                if self.scanner.scan(&rx::COMMA).is_none() {
                    break;
                }
            }
        }
        self.scanner.expect(&rx::RPAREN)?;
        Ok(args)
    }

    fn expression(&mut self, stop_on_comma: bool, stop_words: &[&str]) -> ParseResult<ScriptExpr> {
        self.trivia();
        let line = self.scanner.line();
        let start = self.scanner.pos();
        self.balanced(false, stop_on_comma, stop_words)?;

        let source = self.scanner.slice_from(start).trim().to_owned();
        if source.is_empty() {
            return Err(self.expected("expression"));
        }
        Ok(ScriptExpr { source, line })
    }

    /// Consume a balanced raw-text span. Stops (without consuming) at `;`,
    /// `{`, `}`, `,` (when requested), a stop word, or a `)`/`]` that closes
    /// no opener within the span.
    fn balanced(
        &mut self,
        in_interpolation: bool,
        stop_on_comma: bool,
        stop_words: &[&str],
    ) -> ParseResult<()> {
        let mut depth = 0usize;
        loop {
            if self.scanner.is_eof() {
                return Ok(());
            }
            if depth == 0 {
                if self.scanner.peek(&rx::SEMICOLON)
                    || self.scanner.peek(&rx::LBRACE)
                    || self.scanner.peek(&rx::RBRACE)
                    || self.scanner.peek(&rx::RPAREN)
                    || self.scanner.peek(&rx::RBRACKET)
                {
                    return Ok(());
                }
                if stop_on_comma && self.scanner.peek(&rx::COMMA) {
                    return Ok(());
                }
                if !stop_words.is_empty() {
                    if let Some(word) = self.scanner.check(&rx::IDENT) {
                        if stop_words.contains(&word) {
                            return Ok(());
                        }
                    }
                }
            }

            if self.scanner.scan(&rx::STRING).is_some()
                || self.scanner.scan(&rx::COMMENT).is_some()
                || self.scanner.scan(&rx::SINGLE_LINE_COMMENT).is_some()
                || self.scanner.scan(&rx::IDENT).is_some()
                || self.scanner.scan(&rx::NUMBER).is_some()
            {
                continue;
            }
            if self.scanner.scan(&rx::INTERP_START).is_some() {
                if in_interpolation {
                    // `#{` does not nest
                    return Err(self.expected("expression"));
                }
                self.balanced(true, false, &[])?;
                self.scanner.expect(&rx::RBRACE)?;
                continue;
            }
            if self.scanner.scan(&rx::LPAREN).is_some() || self.scanner.scan(&rx::LBRACKET).is_some()
            {
                depth += 1;
                continue;
            }
            if depth > 0
                && (self.scanner.scan(&rx::RPAREN).is_some()
                    || self.scanner.scan(&rx::RBRACKET).is_some())
            {
                depth -= 1;
                continue;
            }
            // operators, whitespace, `!`, and anything else single-width
            if self.scanner.scan(&rx::ANY_CHAR).is_none() {
                return Ok(());
            }
        }
    }

    fn trivia(&mut self) {
        loop {
            if self.scanner.scan(&rx::S).is_none()
                && self.scanner.scan(&rx::COMMENT).is_none()
                && self.scanner.scan(&rx::SINGLE_LINE_COMMENT).is_none()
            {
                break;
            }
        }
    }

    fn expected(&self, label: &str) -> Box<ParseError> {
        self.scanner.expectation_error(label)
    }
}
