//! WHERE body checks: the dangling-conjunction guard and time-predicate
//! detection. Both only look at tokens at the WHERE clause's own depth.
use crate::*;

/// Macro placeholder standing in for an externally supplied time filter.
const TIME_FILTER_MACRO: &str = "$__timefilter";

/// True when the WHERE body has no predicate before its first AND/OR, or no
/// meaningful token at all.
///
/// Stray symbols, such as a leftover backslash from a serialized query, are
/// skipped before deciding.
pub fn starts_with_conjunction(tokens: &[Token], body: ClauseSpan) -> bool {
    let first = body
        .range()
        .map(|idx| &tokens[idx])
        .find(|t| t.depth == body.depth() && !t.is_stray_symbol());

    match first {
        None => true,
        Some(t) => t.kind.keyword().is_some_and(Keyword::is_conjunction),
    }
}

/// Scan a WHERE body for an acceptable time predicate.
///
/// Passes when any token at the body's depth is:
/// - an identifier containing `$__timefilter`;
/// - a time identifier followed by BETWEEN, NOT BETWEEN or a comparison;
/// - a BETWEEN preceded by a time identifier within the look-back window.
pub fn has_time_predicate(tokens: &[Token], body: ClauseSpan, options: &Options) -> bool {
    for idx in body.range() {
        let t = &tokens[idx];
        if t.depth != body.depth() {
            continue;
        }

        if t.ident().is_some_and(|v| v.contains(TIME_FILTER_MACRO)) {
            trace!("Time filter macro at token {idx}");
            return true;
        }

        if let Some(end) = time_identifier_end(tokens, idx, body, options) {
            if compared_after(tokens, end, body) {
                trace!("Time comparison on `{}` at token {idx}", t.value);
                return true;
            }
        }

        if t.is_keyword(Keyword::Between) && time_identifier_before(tokens, idx, body, options) {
            trace!("BETWEEN on time column at token {idx}");
            return true;
        }
    }
    false
}

/// If a time identifier starts at `idx`, the index of its last token.
///
/// `ident . ident` counts when its final part is a time column; a single
/// identifier counts when its quote-stripped value, or the part after its
/// last dot, is one.
pub fn time_identifier_end(
    tokens: &[Token],
    idx: usize,
    body: ClauseSpan,
    options: &Options,
) -> Option<usize> {
    let t = &tokens[idx];
    if !t.is_ident() || t.depth != body.depth() {
        return None;
    }
    if is_qualified_pair(tokens, idx, body) {
        return is_time_name(&tokens[idx + 2].value, options).then_some(idx + 2);
    }
    is_time_name(&t.value, options).then_some(idx)
}

/// Whether a normalized identifier names an accepted time column.
pub fn is_time_name(value: &str, options: &Options) -> bool {
    let bare = unquote(value);
    if options.is_time_column(bare) {
        return true;
    }
    bare.rsplit_once('.')
        .is_some_and(|(_, last)| options.is_time_column(unquote(last)))
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

/// Is the token after `end` a comparison, BETWEEN, or NOT BETWEEN?
fn compared_after(tokens: &[Token], end: usize, body: ClauseSpan) -> bool {
    let Some(next) = next_at_depth(tokens, end + 1, body) else {
        return false;
    };
    let t = &tokens[next];
    if t.is_comparison() || t.is_keyword(Keyword::Between) {
        return true;
    }
    t.is_keyword(Keyword::Not)
        && next_at_depth(tokens, next + 1, body)
            .is_some_and(|after| tokens[after].is_keyword(Keyword::Between))
}

/// Walk back from a BETWEEN at most `options.between_lookback()` positions
/// looking for a time identifier at the body's depth.
///
/// Deeper tokens, symbols and NOT are stepped over; any other keyword ends
/// the operand (`AND`, `OR`, a preceding BETWEEN) and the search with it.
fn time_identifier_before(
    tokens: &[Token],
    between: usize,
    body: ClauseSpan,
    options: &Options,
) -> bool {
    let floor = between
        .saturating_sub(options.between_lookback())
        .max(body.start());

    for idx in (floor..between).rev() {
        let t = &tokens[idx];
        if t.depth != body.depth() || t.is_keyword(Keyword::Not) {
            continue;
        }
        if t.kind.keyword().is_some() {
            return false;
        }
        if t.is_ident() && is_time_name(&t.value, options) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Tokens of `sql` with a span covering all of them at depth 0.
    fn body(sql: &str) -> (Vec<Token>, ClauseSpan) {
        let tokens = tokenize(sql);
        let span = ClauseSpan::new(0, tokens.len(), 0);
        (tokens, span)
    }

    #[rstest]
    #[case("AND x = 1", true)]
    #[case("or x = 1", true)]
    #[case("", true)]
    #[case(", \\", true)]
    #[case("\\ AND x = 1", true)]
    #[case("x = 1 AND y = 2", false)]
    #[case("NOT time BETWEEN 1 AND 2", false)]
    #[case("(a OR b)", false)]
    #[case("$__timeFilter AND x", false)]
    fn conjunction_guard(#[case] sql: &str, #[case] expected: bool) {
        let (tokens, span) = body(sql);
        assert_eq!(starts_with_conjunction(&tokens, span), expected);
    }

    #[rstest]
    #[case("time >= ago(15m)")]
    #[case("time = now()")]
    #[case("time < now()")]
    #[case("time > ago(1h)")]
    #[case("time <= now()")]
    #[case("time <> now()")]
    #[case("time != now()")]
    #[case("TIME > ago(1h)")]
    #[case("measure_time >= from_iso8601_timestamp('2025-01-01T00:00:00Z')")]
    #[case("time BETWEEN ago(1d) AND now()")]
    #[case("time NOT BETWEEN ago(1d) AND now()")]
    #[case("NOT time BETWEEN ago(1h) AND now()")]
    #[case("s1.time >= ago(1h)")]
    #[case(r#""s1"."time" >= ago(1h)"#)]
    #[case(r#""time" > ago(1h)"#)]
    #[case(r#"s1."time" > ago(1h)"#)]
    #[case("x = 1 AND time > ago(1h)")]
    #[case("$__timeFilter")]
    #[case("$__timeFilter AND measure_name = '$__measure'")]
    #[case("$__timefilter(time)")]
    fn accepts_time_predicates(#[case] sql: &str) {
        let (tokens, span) = body(sql);
        assert!(
            has_time_predicate(&tokens, span, &Options::default()),
            "expected a time predicate in `{sql}`"
        );
    }

    #[rstest]
    #[case("measure_name = 'cpu'")]
    #[case("s1.device <> ''")]
    #[case("'time' > 1")]
    #[case("max(time) >= ago(1h)")]
    #[case("(time > ago(1h))")]
    #[case("time IN (1, 2)")]
    #[case("time")]
    #[case("timestamp > now()")]
    #[case("'$__timeFilter'")]
    #[case("device BETWEEN 1 AND 2")]
    fn rejects_non_time_predicates(#[case] sql: &str) {
        let (tokens, span) = body(sql);
        assert!(
            !has_time_predicate(&tokens, span, &Options::default()),
            "did not expect a time predicate in `{sql}`"
        );
    }

    #[test]
    fn between_lookback_finds_time_behind_deeper_tokens() {
        // the token after `time` is `(`, so only the look-back connects them
        let (tokens, span) = body("time (x) BETWEEN 1 AND 2");
        assert!(has_time_predicate(&tokens, span, &Options::default()));
    }

    #[test]
    fn between_lookback_stops_at_conjunction() {
        let (tokens, span) = body("x = time AND y BETWEEN 1 AND 2");
        assert!(!has_time_predicate(&tokens, span, &Options::default()));
    }

    #[test]
    fn between_lookback_window_is_bounded() {
        let sql = "time (a, b, c, d) BETWEEN 1 AND 2";
        let (tokens, span) = body(sql);
        assert!(!has_time_predicate(&tokens, span, &Options::default()));
        let wide = Options::default().with_between_lookback(12);
        assert!(has_time_predicate(&tokens, span, &wide));
    }

    #[test]
    fn custom_time_columns() {
        let options = Options::default().with_time_columns(["event_ts"]);
        let (tokens, span) = body("event_ts >= ago(1h)");
        assert!(has_time_predicate(&tokens, span, &options));
        let (tokens, span) = body("time >= ago(1h)");
        assert!(!has_time_predicate(&tokens, span, &options));
    }

    #[rstest]
    #[case("time", true)]
    #[case("\"time\"", true)]
    #[case("s1.time", true)]
    #[case("s1.\"time\"", true)]
    #[case("db.s1.measure_time", true)]
    #[case("time.s1", false)]
    #[case("times", false)]
    fn time_names(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_time_name(value, &Options::default()), expected);
    }
}
