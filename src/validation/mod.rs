//! Validator Battery
//!
//! Fixed, ordered set of independent content checks, each a pure function
//! of the parsed model.

pub mod checks;
pub mod engine;

pub use engine::{CHECKS, Check, CheckFinding, Severity, ValidationOutcome, run_checks};
