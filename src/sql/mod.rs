//! Tolerant SQL tokenization for the time-filter validator.
//!
//! This module turns raw (possibly partial, templated or serialized) SQL text
//! into a flat stream of depth-annotated tokens. No tree is built; the
//! validator works on the stream directly.
//!
//! Modules:
//! - `keyword`    : The fixed keyword set the scanner needs.
//! - `token_kind` : Coarse classification (identifier, keyword, literal, number, symbol).
//! - `token`      : Token struct pairing a `TokenKind` with its value and depth.
//! - `preprocess` : Comment stripping and serialized-escape normalization.
//! - `tokenizer`  : Single pass O(n) lexer and the full `tokenize` pipeline.
//!
//! Design Principles:
//! 1. Accept incomplete / syntactically invalid SQL; never return an error.
//! 2. Keep the keyword set fixed and small; everything else is an identifier.
//! 3. Record nesting depth on every token so clause searches can stay at one level.
//!
//! Example:
//! ```rust
//! use tsv::sql::prelude::*;
//!
//! let tokens = tokenize("SELECT * FROM db.t WHERE (time > ago(1h))");
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
//! assert!(tokens.iter().any(|t| t.ident() == Some("time") && t.depth == 1));
//! ```

pub mod keyword;
pub mod preprocess;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use preprocess::{normalize_escapes, strip_comments};
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::{lex, tokenize};

/// Convenience prelude re‑exporting the most commonly used items.
///
/// Import with:
/// `use tsv::sql::prelude::*;`
pub mod prelude {
    pub use super::{Keyword, Token, TokenKind, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_access() {
        let tokens = tokenize("SELECT col FROM db.tbl");
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(tokens.iter().any(|t| t.ident() == Some("col")));
        assert!(tokens.iter().any(|t| t.ident() == Some("db.tbl")));
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let toks = tokenize("FROM X");
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(toks.iter().any(|t| t.ident() == Some("x")));
    }
}
