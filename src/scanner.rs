//! A position-tracking cursor over the source text.
//!
//! The scanner is the only component that advances through the source. It
//! matches anchored patterns at the current byte offset, counts newlines into
//! a 1-based line number, records the capture groups of the most recent
//! match, and feeds every consumed token (except comments) into the live
//! capture buffers.

use std::ops::Range;

use crate::{
    error::{ParseError, ParseResult},
    rx::Pattern,
};

/// A saved `(position, line)` pair for the single backtracking point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bookmark {
    pos: usize,
    line: u32,
}

pub(crate) struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    /// Capture groups of the most recent successful match, as byte ranges
    /// into `source`. Group 0 is omitted.
    last_groups: Vec<Option<Range<usize>>>,
    /// The most recently advertised expectation, cleared by any successful
    /// token match. Consulted by the error reporter when a failure does not
    /// supply its own name.
    expected: Option<&'static str>,
    /// Accumulating raw-text buffers. Every successful non-comment token is
    /// appended to all of them.
    capture_stack: Vec<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            pos: 0,
            line: 1,
            last_groups: Vec::new(),
            expected: None,
            capture_stack: Vec::new(),
        }
    }

    /// Attempt to match `pattern` at the current position. On success the
    /// position advances past the match; on failure nothing changes.
    pub fn scan(&mut self, pattern: &Pattern) -> Option<&'a str> {
        let caps = pattern.regex().captures(&self.source[self.pos..])?;
        let end = caps.get(0).map_or(0, |m| m.end());
        let start = self.pos;
        let text = &self.source[start..start + end];

        self.last_groups = caps
            .iter()
            .skip(1)
            .map(|g| g.map(|g| start + g.start()..start + g.end()))
            .collect();
        self.pos += end;
        self.line += text.matches('\n').count() as u32;
        self.expected = None;
        if !pattern.is_comment() {
            for buf in &mut self.capture_stack {
                buf.push_str(text);
            }
        }
        Some(text)
    }

    /// Non-consuming lookahead.
    pub fn peek(&self, pattern: &Pattern) -> bool {
        pattern.regex().is_match(&self.source[self.pos..])
    }

    /// Non-consuming lookahead that exposes the would-be match text.
    pub fn check(&self, pattern: &Pattern) -> Option<&'a str> {
        pattern
            .regex()
            .find(&self.source[self.pos..])
            .map(|m| &self.source[self.pos..self.pos + m.end()])
    }

    /// The unconsumed suffix of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// The consumed prefix of the source.
    pub fn consumed(&self) -> &'a str {
        &self.source[..self.pos]
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    pub fn is_eof(&self) -> bool {
        self.pos == self.source.len()
    }

    pub const fn pos(&self) -> usize {
        self.pos
    }

    pub const fn line(&self) -> u32 {
        self.line
    }

    /// A capture group of the most recent successful match, 1-based.
    pub fn group(&self, index: usize) -> Option<&'a str> {
        self.last_groups
            .get(index.checked_sub(1)?)?
            .clone()
            .map(|range| &self.source[range])
    }

    pub const fn bookmark(&self) -> Bookmark {
        Bookmark {
            pos: self.pos,
            line: self.line,
        }
    }

    /// Roll the cursor back to a bookmark. The capture stack is deliberately
    /// untouched: no capture region straddles the backtracking point.
    pub fn restore(&mut self, bookmark: Bookmark) {
        self.pos = bookmark.pos;
        self.line = bookmark.line;
    }

    pub fn set_expected(&mut self, expected: &'static str) {
        self.expected = Some(expected);
    }

    pub fn expected(&self) -> Option<&'static str> {
        self.expected
    }

    /// `scan`, turning a failure into a syntax error named after the
    /// pattern (or the pending advertised expectation).
    pub fn expect(&mut self, pattern: &Pattern) -> ParseResult<&'a str> {
        match self.scan(pattern) {
            Some(text) => Ok(text),
            None => Err(self.expectation_error(&pattern.human_name())),
        }
    }

    /// An `expected …` error at the current position. The pending advertised
    /// expectation, when set, wins over the supplied label.
    pub fn expectation_error(&self, label: &str) -> Box<ParseError> {
        let what = match self.expected {
            Some(expected) => expected,
            None => label,
        };
        ParseError::invalid_css(self.consumed(), self.rest(), what, self.line())
    }

    pub fn push_capture(&mut self) {
        self.capture_stack.push(String::new());
    }

    pub fn pop_capture(&mut self) -> String {
        self.capture_stack.pop().unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rx;

    #[test]
    fn scan_advances_and_counts_lines() {
        let mut s = Scanner::new("a\nb  c");
        assert_eq!(s.scan(&rx::IDENT), Some("a"));
        assert_eq!(s.line(), 1);
        assert_eq!(s.scan(&rx::S), Some("\n"));
        assert_eq!(s.line(), 2);
        assert_eq!(s.scan(&rx::IDENT), Some("b"));
        assert_eq!(s.rest(), "  c");
    }

    #[test]
    fn failed_scan_leaves_state_untouched() {
        let mut s = Scanner::new("{x");
        assert!(s.scan(&rx::IDENT).is_none());
        assert_eq!(s.pos(), 0);
        assert_eq!(s.rest(), "{x");
    }

    #[test]
    fn groups_of_last_match() {
        let mut s = Scanner::new("\"a.css\" rest");
        assert!(s.scan(&rx::STRING).is_some());
        assert_eq!(s.group(1), Some("a.css"));
        assert_eq!(s.group(2), None);
    }

    #[test]
    fn capture_stack_skips_comments() {
        let mut s = Scanner::new("a /* note */ b");
        s.push_capture();
        s.scan(&rx::IDENT);
        s.scan(&rx::S);
        s.scan(&rx::COMMENT);
        s.scan(&rx::S);
        s.scan(&rx::IDENT);
        assert_eq!(s.pop_capture(), "a  b");
    }

    #[test]
    fn bookmark_round_trip() {
        let mut s = Scanner::new("one\ntwo");
        s.scan(&rx::IDENT);
        s.scan(&rx::S);
        let mark = s.bookmark();
        s.scan(&rx::IDENT);
        assert!(s.is_eof());
        s.restore(mark);
        assert_eq!(s.rest(), "two");
        assert_eq!(s.line(), 2);
    }

    #[test]
    fn expected_cleared_by_successful_scan() {
        let mut s = Scanner::new("a");
        s.set_expected("string or url()");
        s.scan(&rx::IDENT);
        assert_eq!(s.expected(), None);
    }
}
