//! The stylesheet AST.
//!
//! Selector, property-name and value spans are kept as flattened token
//! lists of raw text and embedded interpolation expressions, so the source
//! text of a span can be reproduced exactly (comments elided).

use std::fmt::{self, Display};

use crate::script::{Param, ScriptExpr};

/// The root of a parsed stylesheet.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone)]
pub struct Node {
    /// The 1-based line on which the node's first token appeared.
    pub line: u32,
    pub kind: NodeKind,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A selector list followed by a braced block.
    Rule {
        selector: TokenList,
        children: Vec<Node>,
    },
    /// A generic at-rule, kept as its literal `@name args` text.
    Directive {
        text: String,
        children: Option<Vec<Node>>,
    },
    /// A property declaration, optionally with a nested block.
    Declaration {
        name: TokenList,
        value: TokenList,
        children: Option<Vec<Node>>,
    },
    /// `!name = expr`, or `!name ||= expr` when guarded.
    Variable {
        name: String,
        expr: ScriptExpr,
        guarded: bool,
    },
    MixinDefinition {
        name: String,
        params: Vec<Param>,
        children: Vec<Node>,
    },
    MixinInclude {
        name: String,
        args: Vec<ScriptExpr>,
    },
    Debug {
        expr: ScriptExpr,
    },
    For {
        variable: String,
        from: ScriptExpr,
        to: ScriptExpr,
        /// `through` is inclusive of the upper bound, `to` is not.
        inclusive: bool,
        children: Vec<Node>,
    },
    While {
        condition: ScriptExpr,
        children: Vec<Node>,
    },
    If {
        condition: ScriptExpr,
        children: Vec<Node>,
    },
    /// A plain file import; imports carrying a media list are rewritten
    /// into [`NodeKind::Directive`].
    Import {
        path: String,
    },
    /// A block comment, with the text preceding it on its line reduced to
    /// whitespace.
    Comment {
        text: String,
    },
}

impl Node {
    pub(crate) const fn new(line: u32, kind: NodeKind) -> Self {
        Node { line, kind }
    }

    /// Whether the node carries a non-empty child block. A preceding child
    /// for which this is false must be followed by a `;` separator.
    pub fn has_children(&self) -> bool {
        match &self.kind {
            NodeKind::Rule { children, .. }
            | NodeKind::MixinDefinition { children, .. }
            | NodeKind::For { children, .. }
            | NodeKind::While { children, .. }
            | NodeKind::If { children, .. } => !children.is_empty(),
            NodeKind::Directive { children, .. } | NodeKind::Declaration { children, .. } => {
                children.as_ref().map_or(false, |c| !c.is_empty())
            }
            NodeKind::Variable { .. }
            | NodeKind::MixinInclude { .. }
            | NodeKind::Debug { .. }
            | NodeKind::Import { .. }
            | NodeKind::Comment { .. } => false,
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Rule { children, .. }
            | NodeKind::MixinDefinition { children, .. }
            | NodeKind::For { children, .. }
            | NodeKind::While { children, .. }
            | NodeKind::If { children, .. } => Some(children),
            NodeKind::Directive { children, .. } | NodeKind::Declaration { children, .. } => {
                children.as_deref()
            }
            _ => None,
        }
    }
}

/// One element of a token list: raw source text, or an expression that was
/// delegated to the expression sub-parser.
#[derive(Debug, Clone)]
pub enum Segment {
    Text(String),
    Script(ScriptExpr),
}

/// A flattened run of raw text and embedded expressions.
#[derive(Debug, Clone, Default)]
pub struct TokenList(pub Vec<Segment>);

impl TokenList {
    pub(crate) fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.0.push(Segment::Text(text));
        }
    }

    pub(crate) fn push_script(&mut self, expr: ScriptExpr) {
        self.0.push(Segment::Script(expr));
    }

    pub(crate) fn append(&mut self, mut other: TokenList) {
        self.0.append(&mut other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw source text of the span this list was built from.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for segment in &self.0 {
            match segment {
                Segment::Text(t) => out.push_str(t),
                Segment::Script(e) => out.push_str(e.text()),
            }
        }
        out
    }

    /// `text()` with surrounding whitespace removed.
    pub fn trimmed(&self) -> String {
        self.text().trim().to_owned()
    }
}

impl Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
