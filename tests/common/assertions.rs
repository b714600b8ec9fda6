//! Common predicates for scm-scope command output

#![allow(dead_code)]

use predicates::prelude::*;

pub fn no_scm_configured() -> impl Predicate<str> {
    predicates::str::contains("No SCM Connection configured.")
}

/// The nothing-to-test notice, printed exactly once
pub fn nothing_to_test() -> impl Predicate<str> {
    predicate::function(|output: &str| output.matches("nothing to mutation test").count() == 1)
}

pub fn has_target_file(path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("\"{path}\""))
}
