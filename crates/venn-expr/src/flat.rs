//! Evaluation of parenthesis-free expressions.
//!
//! Operators are reduced strictly in the order they appear in the source;
//! `&` and `|` share one precedence level, so `a | b & c` means
//! `(a | b) & c`.

use tracing::trace;

use crate::algebra::{Subset, complement};
use crate::errors::{EvalError, sequence_error};
use crate::lexer::{Operator, Token, tokenize};
use crate::symbols::{SetRef, SymbolTable};

/// One entry of a flat operand/operator sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Term {
    Operand {
        set: SetRef,
        negated: bool,
        position: usize,
    },
    Operator {
        op: Operator,
        position: usize,
    },
}

/// A parenthesised group already reduced to an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SolvedGroup {
    pub start: usize,
    pub end: usize,
    pub alias: SetRef,
}

/// Evaluate a parenthesis-free expression against `symbols`.
///
/// # Errors
/// Returns [`EvalError::UnknownSetName`] when an operand is not a bound name
/// and [`EvalError::MalformedSequence`] when operands and operators do not
/// alternate, the expression is empty, or a parenthesis appears.
///
/// # Examples
/// ```
/// use venn_expr::{SymbolTable, Universe, parse};
/// let universe = Universe::reference();
/// let symbols = SymbolTable::new(&universe);
/// let result = parse("a & b | c", &symbols).expect("well formed");
/// assert_eq!(result.sorted(), vec![2, 3, 4, 5, 6]);
/// ```
pub fn parse(expr: &str, symbols: &SymbolTable<'_>) -> Result<Subset, EvalError> {
    let tokens = tokenize(expr);
    let terms = collect_terms(&tokens, 0, expr.len(), &[], symbols)?;
    evaluate_terms(&terms, symbols, expr.len())
}

/// Convert the tokens positioned in `from..to` into flat terms.
///
/// Each group in `solved` that opens inside the range is replaced, together
/// with everything it encloses, by a reference to its alias. A bare `!`
/// directly before such a group negates the reference.
pub(crate) fn collect_terms(
    tokens: &[Token],
    from: usize,
    to: usize,
    solved: &[SolvedGroup],
    symbols: &SymbolTable<'_>,
) -> Result<Vec<Term>, EvalError> {
    let mut terms = Vec::new();
    let mut pending_negation = false;
    let mut tokens = tokens
        .iter()
        .filter(|token| (from..to).contains(&token.position()))
        .peekable();

    while let Some(token) = tokens.next() {
        match token {
            Token::Open { index } => {
                let Some(group) = solved.iter().find(|group| group.start == *index) else {
                    return Err(sequence_error(
                        "parenthesis in flat expression",
                        *index,
                    ));
                };
                terms.push(Term::Operand {
                    set: group.alias,
                    negated: std::mem::take(&mut pending_negation),
                    position: *index,
                });
                while tokens
                    .next_if(|inner| inner.position() <= group.end)
                    .is_some()
                {}
            }
            Token::Close { index } => {
                return Err(sequence_error("parenthesis in flat expression", *index));
            }
            Token::Operand {
                name,
                negated,
                start,
            } if name.is_empty() => {
                if !matches!(tokens.peek(), Some(Token::Open { .. })) {
                    return Err(sequence_error("negation without an operand", *start));
                }
                pending_negation = *negated;
            }
            Token::Operand {
                name,
                negated,
                start,
            } => {
                let set = symbols
                    .lookup(name)
                    .ok_or_else(|| EvalError::UnknownSetName {
                        name: name.clone(),
                        position: *start,
                    })?;
                terms.push(Term::Operand {
                    set,
                    negated: *negated,
                    position: *start,
                });
            }
            Token::Operator { op, index } => terms.push(Term::Operator {
                op: *op,
                position: *index,
            }),
        }
    }

    Ok(terms)
}

#[derive(Debug)]
enum Entry {
    Set(Subset),
    Op(Operator),
}

/// Reduce a flat term list to a single subset.
///
/// `end` is the position reported when the sequence ends too early.
pub(crate) fn evaluate_terms(
    terms: &[Term],
    symbols: &SymbolTable<'_>,
    end: usize,
) -> Result<Subset, EvalError> {
    let mut entries: Vec<Entry> = Vec::with_capacity(terms.len());
    let mut operators = Vec::new();
    let mut last_operator = None;

    for term in terms {
        let expects_operand = matches!(entries.last(), None | Some(Entry::Op(_)));
        match *term {
            Term::Operand {
                set,
                negated,
                position,
            } => {
                if !expects_operand {
                    return Err(sequence_error("missing operator between sets", position));
                }
                let value = symbols
                    .resolve(set)
                    .ok_or_else(|| EvalError::UnknownSetName {
                        name: symbols.display_name(set),
                        position,
                    })?;
                let value = if negated {
                    complement(value, symbols.universe().elements())
                } else {
                    value.clone()
                };
                entries.push(Entry::Set(value));
            }
            Term::Operator { op, position } => {
                if expects_operand {
                    let message = if entries.is_empty() {
                        "operator without a left operand"
                    } else {
                        "operator follows another operator"
                    };
                    return Err(sequence_error(message, position));
                }
                operators.push(entries.len());
                entries.push(Entry::Op(op));
                last_operator = Some(position);
            }
        }
    }

    if entries.is_empty() {
        return Err(sequence_error("empty expression", end));
    }
    if matches!(entries.last(), Some(Entry::Op(_))) {
        return Err(sequence_error(
            "dangling operator",
            last_operator.unwrap_or(end),
        ));
    }

    for slot in 0..operators.len() {
        let Some(&at) = operators.get(slot) else {
            break;
        };
        if at == 0 || at + 1 >= entries.len() {
            return Err(sequence_error("operator lost its operands", end));
        }
        let reduced: Vec<Entry> = entries.drain(at - 1..=at + 1).collect();
        let [Entry::Set(left), Entry::Op(op), Entry::Set(right)] = reduced.as_slice() else {
            return Err(sequence_error("operator lost its operands", end));
        };
        let combined = op.apply(left, right);
        trace!(op = %op.symbol(), %left, %right, %combined, "reduced operator");
        entries.insert(at - 1, Entry::Set(combined));
        for later in operators.iter_mut().skip(slot + 1) {
            *later = later.saturating_sub(2);
        }
    }

    match (entries.pop(), entries.is_empty()) {
        (Some(Entry::Set(result)), true) => Ok(result),
        _ => Err(sequence_error("reduction did not leave exactly one set", end)),
    }
}
