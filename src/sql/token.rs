//! Token model: a `TokenKind`, its normalized text and its nesting depth.
//!
//! Tokens are produced once by the tokenizer and only ever read afterwards.
//! The depth is what lets the validator scope clause searches to a single
//! SELECT without building a tree.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token annotated with the parenthesis depth it occurs at.
///
/// Invariants:
/// - `value` is lowercased for everything except string literals.
/// - An opening parenthesis carries the depth *before* the increment and the
///   matching closing parenthesis the depth *after* the decrement, so both
///   sit at the shallower of the two levels they separate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub depth: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>, depth: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            depth,
        }
    }

    /// Returns the identifier text if this token is an identifier.
    pub fn ident(&self) -> Option<&str> {
        self.kind.is_ident().then_some(self.value.as_str())
    }

    pub fn is_ident(&self) -> bool {
        self.kind.is_ident()
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// Returns true if this token is the given symbol text.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind.is_symbol() && self.value == symbol
    }

    pub fn is_open_paren(&self) -> bool {
        self.is_symbol("(")
    }

    /// True for `=`, `<`, `>`, `<=`, `>=`, `<>` and `!=`.
    pub fn is_comparison(&self) -> bool {
        self.kind.is_symbol()
            && matches!(
                self.value.as_str(),
                "=" | "<" | ">" | "<=" | ">=" | "<>" | "!="
            )
    }

    /// A symbol that carries no structure for the scanner: anything except
    /// `(`, `)` and the `;` statement separator.
    pub fn is_stray_symbol(&self) -> bool {
        self.kind.is_symbol() && !matches!(self.value.as_str(), "(" | ")" | ";")
    }
}
