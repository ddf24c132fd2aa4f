//! Tolerant validator for AWS Timestream SQL.
//!
//! Every SELECT that reads directly from a base table must carry a WHERE
//! predicate on a recognized time column. See [`validate`].
reexport!(testing, test);
reexport!(logic);
reexport!(sql);
reexport!(config);
reexport!(error);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        pub mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
