//! Set-algebra expression evaluation over a fixed universe.
//!
//! Expressions combine single-letter base set names with `&` (intersection),
//! `|` (union), `!` (complement) and parentheses. Operators share a single
//! precedence level and are reduced left to right; parentheses are the only
//! way to group.
//!
//! [`Evaluator::evaluate`] is the entry point for front ends, and
//! [`Session`] adds the editing state and last-good-result bookkeeping an
//! interactive display needs.

mod algebra;
mod classify;
mod errors;
mod evaluator;
mod flat;
mod lexer;
mod session;
mod solver;
mod spans;
mod symbols;
mod universe;

pub use algebra::{Subset, complement, intersection, union};
pub use classify::{ClassificationTable, UNCLASSIFIED};
pub use errors::{ErrorKind, EvalError, Paren, SequenceErrorInfo, UniverseError};
pub use evaluator::Evaluator;
pub use flat::parse;
pub use lexer::{Operator, Token, delimit, tokenize};
pub use session::{Evaluation, ExpressionBuffer, OPERATOR_CHARS, Session};
pub use solver::solve;
pub use spans::{Span, find_spans};
pub use symbols::{SetRef, SymbolTable};
pub use universe::{BaseSet, Element, REFERENCE_BASE_SETS, REFERENCE_ELEMENTS, Universe};
