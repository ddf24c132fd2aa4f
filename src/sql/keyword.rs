//! Keyword model for the tolerant Timestream tokenizer.
//!
//! The set is fixed: only the words the clause scanner and the predicate
//! detector need to tell apart. Anything else lexes as an identifier, which
//! keeps function names, column names and dialect extensions harmless.
//!
//! Design notes:
//! - Keywords are matched case‑insensitively via `from_lower` using a pre‑lower‑cased
//!   string slice.
//! - `as_str` provides the canonical lowercase representation, which is also
//!   the token value emitted by the tokenizer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Where,
    Group,
    By,
    Order,
    Having,
    Union,
    Intersect,
    Except,
    Join,
    Left,
    Right,
    Full,
    Outer,
    Inner,
    Cross,
    On,
    As,
    With,
    Lateral,
    Between,
    And,
    Or,
    Not,
    In,
    Exists,
}

impl Keyword {
    /// Keywords that end a FROM or WHERE clause at the same depth.
    ///
    /// WHERE is absent on purpose: the FROM span must reach past it so the
    /// WHERE keyword can be found inside that span.
    pub const TERMINATORS: [Self; 6] = [
        Keyword::Group,
        Keyword::Order,
        Keyword::Having,
        Keyword::Union,
        Keyword::Intersect,
        Keyword::Except,
    ];

    /// Attempt to classify a *lower‑cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized keyword.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "from" => From,
            "where" => Where,
            "group" => Group,
            "by" => By,
            "order" => Order,
            "having" => Having,
            "union" => Union,
            "intersect" => Intersect,
            "except" => Except,
            "join" => Join,
            "left" => Left,
            "right" => Right,
            "full" => Full,
            "outer" => Outer,
            "inner" => Inner,
            "cross" => Cross,
            "on" => On,
            "as" => As,
            "with" => With,
            "lateral" => Lateral,
            "between" => Between,
            "and" => And,
            "or" => Or,
            "not" => Not,
            "in" => In,
            "exists" => Exists,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            From => "from",
            Where => "where",
            Group => "group",
            By => "by",
            Order => "order",
            Having => "having",
            Union => "union",
            Intersect => "intersect",
            Except => "except",
            Join => "join",
            Left => "left",
            Right => "right",
            Full => "full",
            Outer => "outer",
            Inner => "inner",
            Cross => "cross",
            On => "on",
            As => "as",
            With => "with",
            Lateral => "lateral",
            Between => "between",
            And => "and",
            Or => "or",
            Not => "not",
            In => "in",
            Exists => "exists",
        }
    }

    /// True for keywords listed in [`Keyword::TERMINATORS`].
    pub fn is_terminator(self) -> bool {
        Self::TERMINATORS.contains(&self)
    }

    /// True for `AND` / `OR`.
    pub fn is_conjunction(self) -> bool {
        matches!(self, Keyword::And | Keyword::Or)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
