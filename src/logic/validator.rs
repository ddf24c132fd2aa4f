//! Validator module: decides, per SELECT, whether a base-table read is time
//! filtered.
use crate::*;
use itertools::Itertools;
use std::ops::Range;

/// Reusable validator holding one immutable [`Options`] value.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: Options,
}

/// Outcome of one validation call. Issues are in the order their SELECT
/// keywords appear in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    issues: Vec<Issue>,
}

impl Report {
    /// True when no SELECT raised an issue.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_parts(self) -> (bool, Vec<Issue>) {
        (self.passed(), self.issues)
    }
}

/// Check `sql` and return `(all_pass, issues)`.
///
/// Every SELECT that reads directly from a base table must carry a WHERE
/// clause with a predicate on one of `options`' time columns. SELECTs without
/// FROM, or reading from a subquery or a CTE/alias name, are exempt; nested
/// SELECTs are found and judged on their own.
///
/// ```rust
/// use tsv::{Options, Reason, validate};
///
/// let (ok, issues) = validate("SELECT * FROM db.t WHERE time >= ago(15m)", &Options::default());
/// assert!(ok && issues.is_empty());
///
/// let (ok, issues) = validate("SELECT * FROM db.t", &Options::default());
/// assert!(!ok);
/// assert_eq!(issues[0].reason, Reason::MissingWhere);
/// ```
pub fn validate(sql: &str, options: &Options) -> (bool, Vec<Issue>) {
    Validator::new(options.clone()).sql(sql).into_parts()
}

impl Validator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn sql(&self, sql: &str) -> Report {
        let tokens = tokenize(sql);
        let sites = select_sites(&tokens);
        trace!("Tokenized {} tokens, {} SELECT sites", tokens.len(), sites.len());

        let issues = sites
            .into_iter()
            .filter_map(|site| self.evaluate(&tokens, site))
            .collect();
        Report { issues }
    }

    /// Judge one SELECT independently of every other.
    fn evaluate(&self, tokens: &[Token], site: SelectSite) -> Option<Issue> {
        let SelectSite { position, depth } = site;

        let Some(from) = locate_from(tokens, site) else {
            debug!("SELECT at token {position} has no FROM at depth {depth}; exempt");
            return None;
        };

        let from_span = clause_span(tokens, from + 1, depth);
        let source = classify_from(tokens, from_span);
        if !source.is_base_table() {
            debug!("SELECT at token {position} reads from {source:?}; skipped");
            return None;
        }

        let Some(where_idx) = find_keyword(tokens, from_span, Keyword::Where) else {
            return Some(self.issue(tokens, site, from_span.stop(), Reason::MissingWhere));
        };

        let body = clause_span(tokens, where_idx + 1, depth);
        if starts_with_conjunction(tokens, body) {
            return Some(self.issue(tokens, site, body.stop(), Reason::DanglingConjunction));
        }
        if !has_time_predicate(tokens, body, &self.options) {
            return Some(self.issue(tokens, site, body.stop(), Reason::MissingTimePredicate));
        }

        trace!("SELECT at token {position} is time filtered");
        None
    }

    fn issue(&self, tokens: &[Token], site: SelectSite, stop: usize, reason: Reason) -> Issue {
        debug!("SELECT at token {} failed: {reason}", site.position);
        Issue {
            snippet: snippet(tokens, site.position..stop, self.options.snippet_limit()),
            reason,
            depth: site.depth,
        }
    }
}

/// Space-joined token values over `range`, cut to `limit` characters with a
/// trailing ` ...` when longer.
fn snippet(tokens: &[Token], range: Range<usize>, limit: usize) -> String {
    let text = tokens[range].iter().map(|t| t.value.as_str()).join(" ");
    if text.chars().count() <= limit {
        return text;
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{} ...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_context(ValidationTest)]
    #[test]
    fn literal_select_passes(ctx: &mut ValidationTest) {
        let report = ctx.validator.sql("SELECT 1");
        assert!(report.passed());
        assert!(report.issues().is_empty());
    }

    #[test_context(ValidationTest)]
    #[test]
    fn validation_is_idempotent(ctx: &mut ValidationTest) {
        let sql = "SELECT * FROM db.a UNION ALL SELECT * FROM db.b WHERE x = 1";
        let first = ctx.validator.sql(sql);
        let second = ctx.validator.sql(sql);
        assert_eq!(first, second);
        assert_eq!(first.issues().len(), 2);
    }

    #[test]
    fn free_function_matches_validator() {
        let sql = "SELECT * FROM db.t WHERE measure_name = 'x'";
        let options = Options::default();
        assert_eq!(
            validate(sql, &options),
            Validator::new(options).sql(sql).into_parts()
        );
    }

    #[test]
    fn snippet_covers_select_through_clause() {
        let (ok, issues) = validate(
            "SELECT * FROM db.t WHERE x = 1 GROUP BY x",
            &Options::default(),
        );
        assert!(!ok);
        assert_eq!(issues[0].snippet, "select * from db.t where x = 1");
    }

    #[test]
    fn snippet_is_bounded() {
        let columns = (0..200).map(|i| format!("column_{i}")).join(", ");
        let sql = format!("SELECT {columns} FROM db.t");
        let (_, issues) = validate(&sql, &Options::default());
        let snippet = &issues[0].snippet;
        assert!(snippet.ends_with(" ..."));
        assert!(snippet.chars().count() <= 220 + 4);
        assert!(snippet.starts_with("select column_0 , column_1"));

        let (_, issues) = validate(&sql, &Options::default().with_snippet_limit(10));
        assert_eq!(issues[0].snippet, "select col ...");
    }
}
