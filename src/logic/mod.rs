crate::reexport!(options);
crate::reexport!(issue);
crate::reexport!(span);
crate::reexport!(clause);
crate::reexport!(predicate);
crate::reexport!(validator);
crate::reexport!(validator_tests, test);
