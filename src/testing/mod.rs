#![cfg(test)]
crate::reexport!(context);
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod randomized_tests {
    use super::{super::*, *};
    use rand::{Rng, seq::IndexedRandom};

    /// Building blocks that are valid, broken, or half-serialized SQL.
    const FRAGMENTS: &[&str] = &[
        "SELECT",
        "FROM",
        "WHERE",
        "AND",
        "OR",
        "NOT",
        "BETWEEN",
        "GROUP BY",
        "UNION ALL",
        "WITH a AS",
        "(",
        ")",
        ")))",
        "db.t",
        "\"db\".\"t\"",
        "$__database.$__table",
        "$__timeFilter",
        "time",
        ">=",
        "ago(1h)",
        "'str",
        "'it''s'",
        "\"quoted",
        "--",
        "/*",
        "*/",
        "\\n",
        "\\\"",
        "\\",
        ";",
        "1.5",
        ",",
        "ünïcödé",
    ];

    fn soup(rng: &mut impl Rng) -> String {
        let len = rng.random_range(0..40);
        (0..len)
            .filter_map(|_| FRAGMENTS.choose(&mut *rng).copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test_context(ValidationTest)]
    #[test]
    fn fragment_soup_never_panics_and_is_stable(ctx: &mut ValidationTest) {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let sql = soup(&mut rng);
            let tokens = tokenize(&sql);

            let mut depth = 0usize;
            for t in &tokens {
                match t.value.as_str() {
                    "(" if t.kind == TokenKind::Symbol => {
                        assert_eq!(t.depth, depth, "in `{sql}`");
                        depth += 1;
                    }
                    ")" if t.kind == TokenKind::Symbol => {
                        depth = depth.saturating_sub(1);
                        assert_eq!(t.depth, depth, "in `{sql}`");
                    }
                    _ => assert_eq!(t.depth, depth, "in `{sql}`"),
                }
            }

            let first = ctx.validator.sql(&sql);
            let second = ctx.validator.sql(&sql);
            assert_eq!(first, second, "in `{sql}`");
            assert_eq!(first.passed(), first.issues().is_empty());
            assert!(first.issues().len() <= select_sites(&tokens).len());
        }
    }
}
