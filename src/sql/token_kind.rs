//! Token kind definitions for the tolerant SQL tokenizer.
//!
//! The classification is coarse on purpose: the validator only needs to tell
//! identifiers, keywords and symbols apart. Literal contents are never
//! interpreted.
//!
//! See `keyword.rs` for the `Keyword` enum and `tokenizer.rs` for tokenization.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare or double‑quoted identifier, dotted runs included (`db.table`).
    Ident,
    /// Recognized SQL keyword.
    Keyword(Keyword),
    /// Single‑quoted string literal, delimiters included.
    StringLit,
    /// Integer or decimal literal.
    Number,
    /// Parenthesis, operator or any other punctuation.
    Symbol,
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Returns the keyword if this token is one.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(k) => Some(*k),
            _ => None,
        }
    }

    /// Convenience: returns true if this token represents any identifier.
    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Ident)
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, TokenKind::Symbol)
    }
}
