//! Clause boundary detection over a depth-annotated token stream.
//!
//! Every search here compares tokens at exactly one depth, the depth of the
//! SELECT being evaluated. A token at a shallower depth means the SELECT's
//! own parenthesized scope has closed; deeper tokens belong to nested
//! expressions or subqueries and are stepped over.
use crate::*;

/// What the first meaningful token after FROM says about the row source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromSource {
    /// Qualified table reference: `db.table`, `$__database.$__table`, `"db"."table"`.
    BaseTable,
    /// `( ... )` derived table.
    Subquery,
    /// SELECT directly after FROM (`LATERAL` forms).
    Lateral,
    /// Dotted name immediately followed by `(`.
    Function,
    /// Single-part name: a CTE or an alias defined elsewhere.
    Reference,
    /// Nothing recognizable (empty, literal, stray closing parenthesis).
    Unknown,
}

impl FromSource {
    pub fn is_base_table(self) -> bool {
        self == FromSource::BaseTable
    }
}

/// Every SELECT keyword in source order, with the depth it occurs at.
pub fn select_sites(tokens: &[Token]) -> Vec<SelectSite> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_keyword(Keyword::Select))
        .map(|(position, t)| SelectSite {
            position,
            depth: t.depth,
        })
        .collect()
}

/// From a SELECT, scan forward for the FROM keyword at the same depth.
///
/// Gives up as soon as the SELECT's scope closes (a shallower token) or its
/// statement ends (`;` at the same depth).
pub fn locate_from(tokens: &[Token], site: SelectSite) -> Option<usize> {
    for (idx, t) in tokens.iter().enumerate().skip(site.position + 1) {
        if t.depth < site.depth {
            return None;
        }
        if t.depth != site.depth {
            continue;
        }
        if t.is_keyword(Keyword::From) {
            return Some(idx);
        }
        if t.is_symbol(";") {
            return None;
        }
    }
    None
}

/// Delimit a clause body starting at `start`: it runs until a terminator
/// keyword or `;` at `depth`, until the depth drops below `depth`, or to
/// the end of the stream.
pub fn clause_span(tokens: &[Token], start: usize, depth: usize) -> ClauseSpan {
    let stop = tokens
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, t)| {
            t.depth < depth
                || (t.depth == depth
                    && (t.kind.keyword().is_some_and(Keyword::is_terminator) || t.is_symbol(";")))
        })
        .map(|(idx, _)| idx)
        .unwrap_or(tokens.len());
    ClauseSpan::new(start, stop, depth)
}

/// Index of the first `kw` at the span's depth inside the span.
pub fn find_keyword(tokens: &[Token], span: ClauseSpan, kw: Keyword) -> Option<usize> {
    span.range()
        .find(|&idx| tokens[idx].depth == span.depth() && tokens[idx].is_keyword(kw))
}

/// Index of the next token at the span's depth in `[from, span.stop())`.
///
/// Deeper tokens are stepped over; a shallower one ends the search.
pub fn next_at_depth(tokens: &[Token], from: usize, span: ClauseSpan) -> Option<usize> {
    for idx in from..span.stop() {
        let t = &tokens[idx];
        if t.depth < span.depth() {
            return None;
        }
        if t.depth == span.depth() {
            return Some(idx);
        }
    }
    None
}

/// Classify the row source of a FROM clause whose body is `span`.
///
/// Rules, applied to the first meaningful token at the span's depth:
/// - stray symbols (`,`, `\`, operators) and keywords other than SELECT are
///   skipped;
/// - `(` is a derived table, SELECT a lateral subquery;
/// - an identifier with a dot is a base table unless `(` follows it;
/// - `ident . ident` (quoted parts lexed separately) is a base table;
/// - any other single identifier is a CTE or alias reference.
pub fn classify_from(tokens: &[Token], span: ClauseSpan) -> FromSource {
    let depth = span.depth();
    for idx in span.range() {
        let t = &tokens[idx];
        if t.depth != depth || t.is_stray_symbol() {
            continue;
        }

        match t.kind {
            TokenKind::Keyword(Keyword::Select) => return FromSource::Lateral,
            TokenKind::Keyword(_) => continue,
            TokenKind::Symbol if t.is_open_paren() => return FromSource::Subquery,
            TokenKind::Ident => {
                let next = next_at_depth(tokens, idx + 1, span).map(|n| &tokens[n]);
                if t.value.contains('.') {
                    return match next {
                        Some(n) if n.is_open_paren() => FromSource::Function,
                        _ => FromSource::BaseTable,
                    };
                }
                if is_qualified_pair(tokens, idx, span) {
                    return FromSource::BaseTable;
                }
                return FromSource::Reference;
            }
            _ => return FromSource::Unknown,
        }
    }
    FromSource::Unknown
}

/// True when `tokens[idx..=idx + 2]` is `ident . ident` at the span's depth.
pub fn is_qualified_pair(tokens: &[Token], idx: usize, span: ClauseSpan) -> bool {
    if idx + 2 >= span.stop() {
        return false;
    }
    let same_depth = |t: &Token| t.depth == span.depth();
    let (head, dot, tail) = (&tokens[idx], &tokens[idx + 1], &tokens[idx + 2]);
    [head, dot, tail].into_iter().all(same_depth)
        && head.is_ident()
        && dot.is_symbol(".")
        && tail.is_ident()
}
