//! Sorting, searching and filtering over movie records.
//!
//! Every function here is pure: inputs are borrowed and results are new
//! sequences, so callers can run queries against a shared snapshot.

pub mod compare;
pub mod expr;
pub mod predicate;

pub use compare::{compare, sort, sort_in_place};
pub use expr::{ExprError, FilterExpr};
pub use predicate::{matches, matches_text, Operator, Predicate, TextSearch};
