//! Evaluation of expressions with nested parentheses.
//!
//! Groups are solved innermost first. Each solved group is bound to a fresh
//! alias in the pass's [`SymbolTable`] and stands in for its whole span when
//! the enclosing group is flattened. The full expression is the outermost
//! group and is solved last.

use tracing::debug;

use crate::algebra::Subset;
use crate::errors::EvalError;
use crate::flat::{SolvedGroup, collect_terms, evaluate_terms};
use crate::lexer::tokenize;
use crate::spans::find_spans;
use crate::symbols::SymbolTable;

/// Evaluate `expr`, collapsing parenthesised groups into aliases.
///
/// One alias is bound in `symbols` per group plus one for the whole
/// expression, so the most recent alias always holds the returned value.
///
/// # Errors
/// Returns [`EvalError::UnmatchedParenthesis`] for unbalanced input and
/// propagates any failure of the flat evaluator on a group's contents.
///
/// # Examples
/// ```
/// use venn_expr::{SymbolTable, Universe, solve};
/// let universe = Universe::reference();
/// let mut symbols = SymbolTable::new(&universe);
/// let result = solve("!(a | b) & c", &mut symbols).expect("well formed");
/// assert_eq!(result.sorted(), vec![6]);
/// assert_eq!(symbols.alias_count(), 2);
/// ```
pub fn solve(expr: &str, symbols: &mut SymbolTable<'_>) -> Result<Subset, EvalError> {
    let spans = find_spans(expr)?;
    let tokens = tokenize(expr);
    let mut solved = Vec::with_capacity(spans.len());

    for span in &spans {
        let terms = collect_terms(&tokens, span.start + 1, span.end, &solved, symbols)?;
        let value = evaluate_terms(&terms, symbols, span.end)?;
        let alias = symbols.bind(value);
        debug!(
            alias = %symbols.display_name(alias),
            group = %span.inner,
            "solved parenthesised group"
        );
        solved.push(SolvedGroup {
            start: span.start,
            end: span.end,
            alias,
        });
    }

    let terms = collect_terms(&tokens, 0, expr.len(), &solved, symbols)?;
    let result = evaluate_terms(&terms, symbols, expr.len())?;
    symbols.bind(result.clone());
    Ok(result)
}
