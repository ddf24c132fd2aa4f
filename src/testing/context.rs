use crate::*;
use test_context::TestContext;
pub use test_context::test_context;

/// Per-test fixture: tracing initialized once, a validator with default
/// options ready to use.
pub struct ValidationTest {
    pub options: Options,
    pub validator: Validator,
}

impl ValidationTest {
    /// Validate with ad-hoc time columns, keeping every other default.
    pub fn with_time_columns(&self, sql: &str, columns: &[&str]) -> Report {
        Validator::new(self.options.clone().with_time_columns(columns)).sql(sql)
    }
}

impl TestContext for ValidationTest {
    fn setup() -> Self {
        crate::testing::common_init();
        let options = Options::default();
        Self {
            validator: Validator::new(options.clone()),
            options,
        }
    }
}
