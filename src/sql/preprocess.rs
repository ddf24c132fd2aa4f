//! Character level passes run before lexing.
//!
//! Both passes return a new `String`; neither one can fail.

/// Remove `-- …` line comments (the terminating newline is kept) and
/// `/* … */` block comments.
///
/// Purely marker based: a comment marker inside a string literal still starts
/// a comment. An unterminated block comment swallows the rest of the input.
pub fn strip_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('-', Some('-')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push(c);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = None;
                for c in chars.by_ref() {
                    if prev == Some('*') && c == '/' {
                        break;
                    }
                    prev = Some(c);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Undo serialization artifacts in query text that was stored with escaped
/// control characters.
///
/// - Outside of quotes, the two-character sequences `\n`, `\r` and `\t`
///   become a single space.
/// - A backslash directly before `'` or `"` is dropped, so the quote is read
///   as a real delimiter rather than an escaped one.
///
/// Quote tracking follows the lexer: `''` / `""` inside a quoted run is an
/// escaped quote and does not close it.
pub fn normalize_escapes(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut quote: Option<char> = None;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('\'' | '"') => continue,
                Some('n' | 'r' | 't') if quote.is_none() => {
                    chars.next();
                    out.push(' ');
                    continue;
                }
                _ => {}
            }
        }

        match quote {
            Some(q) if c == q => {
                if chars.peek() == Some(&q) {
                    chars.next();
                    out.push(q);
                } else {
                    quote = None;
                }
            }
            None if c == '\'' || c == '"' => quote = Some(c),
            _ => {}
        }
        out.push(c);
    }
    out
}
