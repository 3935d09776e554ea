//! Error types shared by the expression parsing modules.

use std::fmt;
use thiserror::Error;

use crate::universe::Element;

/// The parenthesis left without a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// An opening `(` that was never closed.
    Open,
    /// A closing `)` with no preceding `(`.
    Close,
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("opening '('"),
            Self::Close => f.write_str("closing ')'"),
        }
    }
}

/// Additional context for operand/operator sequence failures.
///
/// # Examples
/// ```
/// use venn_expr::SequenceErrorInfo;
/// let info = SequenceErrorInfo::new("operator follows another operator", 4);
/// assert_eq!(info.position, 4);
/// assert_eq!(
///     info.to_string(),
///     "operator follows another operator at byte 4 (zero-based)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceErrorInfo {
    /// Description of the violated alternation rule.
    pub message: &'static str,
    /// Byte offset of the offending token.
    pub position: usize,
}

impl SequenceErrorInfo {
    /// Create a new description of a malformed token sequence.
    #[must_use]
    pub fn new(message: &'static str, position: usize) -> Self {
        Self { message, position }
    }
}

impl fmt::Display for SequenceErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {} (zero-based)", self.message, self.position)
    }
}

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`EvalError::UnmatchedParenthesis`].
    UnmatchedParenthesis,
    /// See [`EvalError::UnknownSetName`].
    UnknownSetName,
    /// See [`EvalError::MalformedSequence`].
    MalformedSequence,
}

/// Errors surfaced while evaluating a set expression.
///
/// Every variant is fatal for the current evaluation pass; no partial result
/// accompanies it.
///
/// # Examples
/// ```
/// use venn_expr::{ErrorKind, Evaluator};
/// let err = Evaluator::default().evaluate("x & a").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownSetName);
/// assert_eq!(err.to_string(), "unknown set name `x` at byte 0 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A parenthesis has no partner.
    #[error("unmatched {paren} at byte {position} (zero-based)")]
    UnmatchedParenthesis {
        /// Which side of the pair is missing its partner.
        paren: Paren,
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
    /// An operand names a set absent from the symbol table.
    #[error("unknown set name `{name}` at byte {position} (zero-based)")]
    UnknownSetName {
        /// The name as written, without negation prefix.
        name: String,
        /// Byte offset of the operand.
        position: usize,
    },
    /// Operands and operators do not alternate.
    #[error("{0}")]
    MalformedSequence(SequenceErrorInfo),
}

impl EvalError {
    /// Return the coarse category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnmatchedParenthesis { .. } => ErrorKind::UnmatchedParenthesis,
            Self::UnknownSetName { .. } => ErrorKind::UnknownSetName,
            Self::MalformedSequence(_) => ErrorKind::MalformedSequence,
        }
    }

    /// Byte offset in the evaluated expression where the failure was noticed.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::UnmatchedParenthesis { position, .. } | Self::UnknownSetName { position, .. } => {
                *position
            }
            Self::MalformedSequence(info) => info.position,
        }
    }
}

pub(crate) fn sequence_error(message: &'static str, position: usize) -> EvalError {
    EvalError::MalformedSequence(SequenceErrorInfo::new(message, position))
}

/// Errors raised while establishing the universe and its base sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    /// The universe lists the same element twice.
    #[error("duplicate element {0} in universe")]
    DuplicateElement(Element),
    /// A base set name is not a single lowercase ASCII letter.
    #[error("invalid base set name `{0}`, expected a lowercase ASCII letter")]
    InvalidName(char),
    /// Two base sets share a name.
    #[error("base set `{0}` is defined more than once")]
    DuplicateName(char),
    /// A base set contains an element the universe lacks.
    #[error("base set `{name}` contains element {element} outside the universe")]
    ForeignElement {
        /// Name of the offending base set.
        name: char,
        /// The element missing from the universe.
        element: Element,
    },
}
