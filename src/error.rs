//! Syntax errors.
//!
//! The parser produces either a complete AST or exactly one error. An error
//! is raised only once a production has committed and a required token is
//! absent; "did not match" signals between alternatives are not errors.

use std::{
    error::Error,
    fmt::{self, Display},
};

pub type ParseResult<T> = Result<T, Box<ParseError>>;

/// A fatal syntax error carrying a formatted message and a 1-based line.
#[derive(Debug, Clone)]
pub struct ParseError {
    message: String,
    line: u32,
    /// Whether the declaration-vs-ruleset resolver may retry after this
    /// error. Expectation failures are retryable; outright invalid
    /// constructs (e.g. the nested-property space rule) are not.
    recoverable: bool,
}

impl ParseError {
    /// An `expected …` failure, formatted with contextual source windows
    /// around the failure site.
    pub(crate) fn invalid_css(
        consumed: &str,
        rest: &str,
        expected: &str,
        line: u32,
    ) -> Box<ParseError> {
        Box::new(ParseError {
            message: format!(
                "Invalid CSS after \"{}\": expected {}, was \"{}\"",
                context_before(consumed),
                expected,
                context_after(rest),
            ),
            line,
            recoverable: true,
        })
    }

    pub(crate) fn fatal(message: impl Into<String>, line: u32) -> Box<ParseError> {
        Box::new(ParseError {
            message: message.into(),
            line,
            recoverable: false,
        })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The 1-based source line on which the error was raised.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    pub(crate) const fn is_recoverable(&self) -> bool {
        self.recoverable
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.message)?;
        write!(f, "  on line {} of the stylesheet", self.line)
    }
}

impl Error for ParseError {}

/// Up to the last 15 characters of the consumed source: a trailing
/// whitespace run containing a newline is elided, everything before the last
/// remaining newline is dropped, and longer contexts are prefixed with `...`.
fn context_before(consumed: &str) -> String {
    let mut after = consumed;
    let trimmed = after.trim_end_matches(|c: char| c.is_ascii_whitespace());
    if after[trimmed.len()..].contains('\n') {
        after = trimmed;
    }
    if let Some(idx) = after.rfind('\n') {
        after = &after[idx + 1..];
    }

    let count = after.chars().count();
    if count > 18 {
        let skip = count - 15;
        format!("...{}", after.chars().skip(skip).collect::<String>())
    } else {
        after.to_owned()
    }
}

/// Up to the first 15 characters of the remaining source: one leading
/// newline is stripped, content after the next newline is dropped, and
/// longer previews are suffixed with `...`.
fn context_after(rest: &str) -> String {
    let mut was = rest.strip_prefix('\n').unwrap_or(rest);
    if let Some(idx) = was.find('\n') {
        was = &was[..idx];
    }

    if was.chars().count() > 18 {
        format!("{}...", was.chars().take(15).collect::<String>())
    } else {
        was.to_owned()
    }
}
