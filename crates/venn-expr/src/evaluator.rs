//! The evaluation boundary used by front ends.

use tracing::debug;

use crate::algebra::Subset;
use crate::classify::ClassificationTable;
use crate::errors::EvalError;
use crate::flat::parse;
use crate::solver::solve;
use crate::symbols::SymbolTable;
use crate::universe::{Element, Universe};

/// Evaluates expression snapshots against a fixed universe.
///
/// Each call to [`Evaluator::evaluate`] runs in its own pass with a fresh
/// [`SymbolTable`], so nothing bound while solving one snapshot is visible to
/// the next.
///
/// # Examples
/// ```
/// use venn_expr::Evaluator;
/// let evaluator = Evaluator::default();
/// let result = evaluator.evaluate("(a & b) | c").expect("well formed");
/// assert_eq!(result.sorted(), vec![2, 3, 4, 5, 6]);
/// assert_eq!(evaluator.sections(&result), vec!["ab", "abc", "bc", "ac", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    universe: Universe,
    classifications: ClassificationTable,
}

impl Evaluator {
    /// Build an evaluator and its classification table for `universe`.
    #[must_use]
    pub fn new(universe: Universe) -> Self {
        let classifications = ClassificationTable::build(&universe);
        Self {
            universe,
            classifications,
        }
    }

    /// The universe expressions are evaluated over.
    #[must_use]
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// The classification table built at construction.
    #[must_use]
    pub fn classifications(&self) -> &ClassificationTable {
        &self.classifications
    }

    /// Evaluate a complete expression snapshot.
    ///
    /// # Errors
    /// Returns [`EvalError`] when the expression is not evaluable; no partial
    /// result is produced.
    pub fn evaluate(&self, expr: &str) -> Result<Subset, EvalError> {
        let mut symbols = SymbolTable::new(&self.universe);
        let result = if expr.contains(['(', ')']) {
            solve(expr, &mut symbols)
        } else {
            parse(expr, &symbols)
        };
        match &result {
            Ok(subset) => debug!(expr, result = %subset, "evaluated expression"),
            Err(err) => debug!(expr, error = %err, "expression not evaluable"),
        }
        result
    }

    /// Label of a single element; `None` outside the universe.
    #[must_use]
    pub fn classify(&self, element: Element) -> Option<&str> {
        self.classifications.classify(element)
    }

    /// Section labels for an evaluated result.
    #[must_use]
    pub fn sections(&self, result: &Subset) -> Vec<&str> {
        self.classifications.sections(result)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Universe::reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use rstest::{fixture, rstest};

    #[fixture]
    fn evaluator() -> Evaluator {
        Evaluator::default()
    }

    #[rstest]
    fn flat_and_nested_paths_agree(evaluator: Evaluator) {
        let flat = evaluator.evaluate("a & b | c");
        let nested = evaluator.evaluate("(a & b) | c");
        assert_eq!(flat, nested);
    }

    #[rstest]
    fn passes_do_not_share_aliases(evaluator: Evaluator) {
        assert!(evaluator.evaluate("(a | b) & c").is_ok());
        let Err(err) = evaluator.evaluate("d & a") else {
            panic!("alias from the previous pass must not resolve");
        };
        assert_eq!(err.kind(), ErrorKind::UnknownSetName);
    }

    #[rstest]
    fn lone_closing_parenthesis_is_unmatched(evaluator: Evaluator) {
        let Err(err) = evaluator.evaluate(")") else {
            panic!("should fail");
        };
        assert_eq!(err.kind(), ErrorKind::UnmatchedParenthesis);
    }

    #[rstest]
    fn classifies_single_elements(evaluator: Evaluator) {
        assert_eq!(evaluator.classify(5), Some("ac"));
        assert_eq!(evaluator.classify(0), None);
    }
}
