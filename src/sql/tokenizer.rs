use crate::sql::{
    keyword::Keyword,
    preprocess::{normalize_escapes, strip_comments},
    token::Token,
    token_kind::TokenKind,
};

/// Full tokenization pipeline: comment stripping, escape normalization, then
/// [`lex`].
///
/// Because comments are removed first, nothing written inside a comment can
/// ever reach the token stream.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let source = normalize_escapes(&strip_comments(sql));
    lex(&source)
}

/// Tolerant SQL lexer producing a flat stream of depth-annotated `Token`s.
///
/// Behavior:
/// - Skips whitespace.
/// - `(` is emitted at the current depth, then the depth is incremented.
///   `)` decrements first (clamped at zero) and is emitted at the new depth.
/// - `'…'` becomes a `StringLit` holding the raw quoted text; `"…"` becomes a
///   lowercased `Ident` (quoted identifiers in this dialect). A doubled quote
///   inside either one is an escaped quote.
/// - Digit runs with an optional fractional part become `Number`.
/// - Runs starting with a letter, `_` or `$` and continuing with letters,
///   digits, `_`, `.` or `$` are lowercased and classified as a `Keyword` or
///   an `Ident`. Dots are part of the run, so `db.table` and
///   `$__database.$__table` are single identifiers.
/// - `>=`, `<=`, `<>` and `!=` are single symbols; any other character is a
///   one-character `Symbol`.
///
/// Guarantees:
/// - Never fails: unterminated quotes run to end of input, unmatched `)`
///   clamps the depth instead of underflowing.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        match c {
            '(' => {
                out.push(Token::new(TokenKind::Symbol, "(", depth));
                depth += 1;
                i += 1;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                out.push(Token::new(TokenKind::Symbol, ")", depth));
                i += 1;
            }
            '\'' | '"' => {
                i = quoted_end(&chars, i);
                let text: String = chars[start..i].iter().collect();
                let token = if c == '"' {
                    Token::new(TokenKind::Ident, text.to_lowercase(), depth)
                } else {
                    Token::new(TokenKind::StringLit, text, depth)
                };
                out.push(token);
            }
            c if c.is_ascii_digit() => {
                i = digits_end(&chars, i);
                if chars.get(i) == Some(&'.') && chars.get(i + 1).is_some_and(char::is_ascii_digit)
                {
                    i = digits_end(&chars, i + 1);
                }
                let text: String = chars[start..i].iter().collect();
                out.push(Token::new(TokenKind::Number, text, depth));
            }
            c if is_ident_start(c) => {
                i += 1;
                while chars.get(i).is_some_and(|&cc| is_ident_part(cc)) {
                    i += 1;
                }
                let word = chars[start..i].iter().collect::<String>().to_lowercase();
                let kind = Keyword::from_lower(&word)
                    .map(TokenKind::Keyword)
                    .unwrap_or(TokenKind::Ident);
                out.push(Token::new(kind, word, depth));
            }
            _ => {
                let next = chars.get(i + 1).copied();
                let text = match (c, next) {
                    ('>', Some('=')) | ('<', Some('=')) | ('<', Some('>')) | ('!', Some('=')) => {
                        i += 2;
                        chars[start..i].iter().collect()
                    }
                    _ => {
                        i += 1;
                        c.to_lowercase().collect::<String>()
                    }
                };
                out.push(Token::new(TokenKind::Symbol, text, depth));
            }
        }
    }

    out
}

/// Index just past the closing quote of the run opened at `open`, or the end
/// of input when the run is unterminated.
fn quoted_end(chars: &[char], open: usize) -> usize {
    let quote = chars[open];
    let mut j = open + 1;
    while j < chars.len() {
        if chars[j] == quote {
            if chars.get(j + 1) == Some(&quote) {
                j += 2;
                continue;
            }
            return j + 1;
        }
        j += 1;
    }
    chars.len()
}

fn digits_end(chars: &[char], mut i: usize) -> usize {
    while chars.get(i).is_some_and(char::is_ascii_digit) {
        i += 1;
    }
    i
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn basic_select_sequence() {
        let toks = tokenize("SELECT * FROM mydb.sensors WHERE time >= ago(15m)");
        assert_eq!(
            values(&toks),
            [
                "select",
                "*",
                "from",
                "mydb.sensors",
                "where",
                "time",
                ">=",
                "ago",
                "(",
                "15",
                "m",
                ")"
            ]
        );
        assert!(toks[0].is_keyword(Keyword::Select));
        assert_eq!(toks[3].kind, TokenKind::Ident);
        assert_eq!(toks[9].kind, TokenKind::Number);
    }

    #[test]
    fn parenthesis_depths_are_symmetric() {
        let toks = tokenize("a (b (c) d) e");
        let depths: Vec<_> = toks.iter().map(|t| (t.value.as_str(), t.depth)).collect();
        assert_eq!(
            depths,
            [
                ("a", 0),
                ("(", 0),
                ("b", 1),
                ("(", 1),
                ("c", 2),
                (")", 1),
                ("d", 1),
                (")", 0),
                ("e", 0)
            ]
        );
    }

    #[test]
    fn unmatched_close_clamps_depth() {
        let toks = tokenize(") ) x ( y");
        let depths: Vec<_> = toks.iter().map(|t| t.depth).collect();
        assert_eq!(depths, [0, 0, 0, 0, 1]);
    }

    #[test]
    fn quoted_text() {
        let toks = tokenize(r#"SELECT "Device" FROM "MyDb"."T" WHERE m = 'It''s CPU'"#);
        assert_eq!(toks[1], Token::new(TokenKind::Ident, "\"device\"", 0));
        assert_eq!(toks[3].value, "\"mydb\"");
        assert!(toks[4].is_symbol("."));
        assert_eq!(toks[5].value, "\"t\"");
        let last = toks.last().expect("string literal token");
        assert_eq!(last.kind, TokenKind::StringLit);
        assert_eq!(last.value, "'It''s CPU'");
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let toks = tokenize("WHERE x = 'open (");
        let last = toks.last().expect("string literal token");
        assert_eq!(last.kind, TokenKind::StringLit);
        assert_eq!(last.value, "'open (");
        assert!(toks.iter().all(|t| t.depth == 0));
    }

    #[rstest]
    #[case("12", &["12"])]
    #[case("12.5", &["12.5"])]
    #[case("1.2.3", &["1.2", ".", "3"])]
    #[case("7.", &["7", "."])]
    fn numbers(#[case] sql: &str, #[case] expected: &[&str]) {
        let toks = tokenize(sql);
        assert_eq!(values(&toks), expected);
        assert_eq!(toks[0].kind, TokenKind::Number);
    }

    #[test]
    fn macros_and_dotted_identifiers() {
        let toks = tokenize("FROM $__database.$__table WHERE $__timeFilter");
        assert_eq!(
            values(&toks),
            ["from", "$__database.$__table", "where", "$__timefilter"]
        );
        assert!(toks[1].is_ident());
        assert!(toks[3].is_ident());
    }

    #[test]
    fn two_character_operators() {
        let toks = tokenize("a>=b<=c<>d!=e=f<g>h");
        let ops: Vec<_> = toks
            .iter()
            .filter(|t| t.kind == TokenKind::Symbol)
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(ops, [">=", "<=", "<>", "!=", "=", "<", ">"]);
    }

    #[test]
    fn keywords_are_case_folded() {
        let toks = tokenize("Select x FrOm t wHeRe NOT time BeTwEeN 1 aNd 2");
        assert!(toks[0].is_keyword(Keyword::Select));
        assert!(toks[2].is_keyword(Keyword::From));
        assert!(toks[4].is_keyword(Keyword::Where));
        assert!(toks[5].is_keyword(Keyword::Not));
        assert!(toks[7].is_keyword(Keyword::Between));
        assert!(toks[9].is_keyword(Keyword::And));
    }

    #[test]
    fn comments_never_reach_the_stream() {
        let toks = tokenize("WHERE /* time >= ago(1h) */ m = 'x' -- time > 0\n");
        assert!(toks.iter().all(|t| t.value != "time"));
        assert_eq!(values(&toks), ["where", "m", "=", "'x'"]);
    }

    #[test]
    fn serialized_newlines_are_whitespace() {
        let toks = tokenize(r#"SELECT\n  device AS \"Device\"\nFROM\n  \"db\".\"t\""#);
        assert_eq!(
            values(&toks),
            [
                "select",
                "device",
                "as",
                "\"device\"",
                "from",
                "\"db\"",
                ".",
                "\"t\""
            ]
        );
    }
}
