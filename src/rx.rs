//! Lexical primitives.
//!
//! Every token the grammar consumes is one of the named patterns below,
//! matched at the scanner's current position. The pattern sources follow the
//! CSS2.1 core tokenizer, extended with interpolation-aware string forms.

use once_cell::sync::Lazy;
use regex::Regex;

/// A named, anchored regular pattern.
pub(crate) struct Pattern {
    /// Human name used in error messages, e.g. `identifier`.
    name: Option<&'static str>,
    /// Un-anchored source, used to derive a name when `name` is `None`.
    source: String,
    re: Regex,
    /// Comment patterns are excluded from capture buffers.
    comment: bool,
}

impl Pattern {
    fn new(source: impl Into<String>) -> Self {
        Self::build(source.into(), None, false)
    }

    fn named(source: impl Into<String>, name: &'static str) -> Self {
        Self::build(source.into(), Some(name), false)
    }

    fn comment(source: impl Into<String>, name: &'static str) -> Self {
        Self::build(source.into(), Some(name), true)
    }

    fn build(source: String, name: Option<&'static str>, comment: bool) -> Self {
        let re = Regex::new(&format!(r"\A(?:{})", source))
            .unwrap_or_else(|e| panic!("malformed lexical pattern {:?}: {}", source, e));
        Pattern {
            name,
            source,
            re,
            comment,
        }
    }

    pub fn regex(&self) -> &Regex {
        &self.re
    }

    pub const fn is_comment(&self) -> bool {
        self.comment
    }

    /// The name shown in `expected …` messages: the table name if the pattern
    /// has one, otherwise the pattern source with trivial escapes removed,
    /// double-quoted.
    pub fn human_name(&self) -> String {
        match self.name {
            Some(name) => name.to_owned(),
            None => {
                let mut out = String::with_capacity(self.source.len());
                let mut chars = self.source.chars();
                while let Some(c) = chars.next() {
                    if c == '\\' {
                        if let Some(next) = chars.next() {
                            out.push(next);
                        }
                    } else {
                        out.push(c);
                    }
                }
                format!("\"{}\"", out)
            }
        }
    }
}

const H: &str = "[0-9a-fA-F]";
const NL: &str = r"\n|\r\n|\r|\f";
const NONASCII: &str = r"[^\x00-\x7F]";
const W: &str = r"[ \t\r\n\f]*";

fn escape() -> String {
    // unicode code-point escape, or a backslash before any printable char
    format!(r"\\{H}{{1,6}}[ \t\r\n\f]?|\\[ -~]|\\{NONASCII}")
}

fn nmstart() -> String {
    format!("[_a-zA-Z]|{NONASCII}|{}", escape())
}

fn nmchar() -> String {
    format!("[a-zA-Z0-9_-]|{NONASCII}|{}", escape())
}

fn ident() -> String {
    format!("-?(?:{})(?:{})*", nmstart(), nmchar())
}

fn num() -> String {
    r"[0-9]*\.[0-9]+|[0-9]+".to_owned()
}

fn string1() -> String {
    format!(r#""((?:[^\n\r\f\\"]|\\(?:{NL})|{})*)""#, escape())
}

fn string2() -> String {
    format!(r"'((?:[^\n\r\f\\']|\\(?:{NL})|{})*)'", escape())
}

fn urlchar() -> String {
    format!("[#%&*-~]|{NONASCII}|{}", escape())
}

/// Static chunk of a quoted string that may contain interpolation: ordinary
/// content, `#` not followed by `{`, then any run of trailing `#`s left for
/// the terminator alternation to disambiguate.
fn interp_string_content(quote: char) -> String {
    let unit = format!(r"[^\n\r\f\\#{quote}]|\\(?:{NL})|{}", escape());
    let after_hash = format!(r"[^\n\r\f\\#{{{quote}}}]|\\(?:{NL})|{}", escape());
    format!("(?:(?:{unit})|#+(?:{after_hash}))*#*")
}

/// Body of a string-opener or string-continuation pattern: captures the
/// static content (group 1) and the terminator (group 2), which is either
/// the closing quote or `#{`.
fn interp_string_body(quote: char) -> String {
    format!(r"({})({quote}|#\{{)", interp_string_content(quote))
}

macro_rules! pattern {
    ($name:ident, $builder:expr) => {
        pub(crate) static $name: Lazy<Pattern> = Lazy::new(|| $builder);
    };
}

pattern!(S, Pattern::named(r"[ \t\r\n\f]+", "whitespace"));
pattern!(CDO, Pattern::new("<!--"));
pattern!(CDC, Pattern::new("-->"));
pattern!(
    COMMENT,
    Pattern::comment(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/", "comment")
);
pattern!(
    SINGLE_LINE_COMMENT,
    Pattern::comment("//[^\n]*", "single line comment")
);

pattern!(IDENT, Pattern::named(ident(), "identifier"));
pattern!(NAME, Pattern::named(format!("(?:{})+", nmchar()), "name"));
pattern!(
    NUMBER,
    Pattern::named(format!("(?:{})(?:{}|%)?", num(), ident()), "number")
);
pattern!(
    STRING,
    Pattern::named(format!("{}|{}", string1(), string2()), "string")
);
pattern!(
    URI,
    Pattern::named(
        format!(r"(?i:url)\({W}(?:{}|{}|((?:{})*)){W}\)", string1(), string2(), urlchar()),
        "uri"
    )
);
pattern!(FUNCTION, Pattern::named(format!(r"{}\(", ident()), "function"));
pattern!(HASH, Pattern::named(format!("#(?:{})+", nmchar()), "hash"));
pattern!(HEXCOLOR, Pattern::named("#[0-9a-fA-F]+", "hex color"));
pattern!(
    UNICODERANGE,
    Pattern::named(
        format!(r"(?i:u\+{H}{{1,6}}(?:-{H}{{1,6}})?|u\+[0-9a-fA-F?]{{1,6}})"),
        "unicode range"
    )
);

pattern!(PLUS, Pattern::new(format!(r"{W}\+")));
pattern!(GREATER, Pattern::new(format!("{W}>")));
pattern!(TILDE, Pattern::new(format!("{W}~")));
pattern!(NOT, Pattern::new(r"(?i::not\()"));

pattern!(INCLUDES, Pattern::new("~="));
pattern!(DASHMATCH, Pattern::new(r"\|="));
pattern!(PREFIXMATCH, Pattern::new(r"\^="));
pattern!(SUFFIXMATCH, Pattern::new(r"\$="));
pattern!(SUBSTRINGMATCH, Pattern::new(r"\*="));
pattern!(IMPORTANT, Pattern::new(format!("!{W}(?i:important)")));

pattern!(INTERP_START, Pattern::new(r"#\{"));
pattern!(
    STRING1_START,
    Pattern::new(format!("\"{}", interp_string_body('"')))
);
pattern!(STRING1_MID, Pattern::new(interp_string_body('"')));
pattern!(
    STRING2_START,
    Pattern::new(format!("'{}", interp_string_body('\'')))
);
pattern!(STRING2_MID, Pattern::new(interp_string_body('\'')));

// Single-character and keyword tokens consumed positionally by the grammar.
pattern!(AT, Pattern::new("@"));
pattern!(BANG, Pattern::new("!"));
pattern!(EQUALS, Pattern::new("="));
pattern!(GUARD, Pattern::new(r"\|\|"));
pattern!(SEMICOLON, Pattern::new(";"));
pattern!(DECL_END, Pattern::named("[;}]", "\";\""));
pattern!(COLON, Pattern::new(":"));
pattern!(PSEUDO_COLONS, Pattern::new("::?"));
pattern!(COMMA, Pattern::new(","));
pattern!(LBRACE, Pattern::new(r"\{"));
pattern!(RBRACE, Pattern::new(r"\}"));
pattern!(LBRACKET, Pattern::new(r"\["));
pattern!(RBRACKET, Pattern::new(r"\]"));
pattern!(LPAREN, Pattern::new(r"\("));
pattern!(RPAREN, Pattern::new(r"\)"));
pattern!(STAR, Pattern::new(r"\*"));
pattern!(DOT, Pattern::new(r"\."));
pattern!(PIPE, Pattern::new(r"\|"));
pattern!(AMPERSAND, Pattern::new("&"));
pattern!(MINUS, Pattern::new("-"));
pattern!(OPERATOR, Pattern::new("[/,:.=]"));
pattern!(UNARY, Pattern::new("[+-]"));
pattern!(FROM, Pattern::new("from"));
pattern!(TO, Pattern::new("to"));
pattern!(THROUGH, Pattern::new("through"));
pattern!(ANY_CHAR, Pattern::new(r"[\s\S]"));
