/// Why a SELECT failed the time-filter rule. A failing SELECT gets exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Reason {
    #[display("missing WHERE clause with time filter")]
    MissingWhere,
    #[display("WHERE clause starts with AND/OR; no predicate before it")]
    DanglingConjunction,
    #[display("WHERE clause lacks a time predicate on allowed time columns")]
    MissingTimePredicate,
}

/// One failing SELECT: an excerpt of its normalized tokens, the cause, and
/// the parenthesis depth the SELECT was found at.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{reason} at depth {depth}: {snippet}")]
pub struct Issue {
    pub snippet: String,
    pub reason: Reason,
    pub depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let issue = Issue {
            snippet: "select * from db.t".into(),
            reason: Reason::MissingWhere,
            depth: 1,
        };
        assert_eq!(
            issue.to_string(),
            "missing WHERE clause with time filter at depth 1: select * from db.t"
        );
    }
}
