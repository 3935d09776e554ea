//! Matching parenthesis pairs, ordered innermost first.

use crate::errors::{EvalError, Paren};

/// One matched parenthesis pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of `(`.
    pub start: usize,
    /// Byte offset of the matching `)`.
    pub end: usize,
    /// Text strictly between the parentheses.
    pub inner: String,
}

impl Span {
    /// Distance between the two parentheses.
    #[must_use]
    pub fn size(&self) -> usize {
        self.end - self.start
    }
}

/// Find every matched parenthesis pair in `expr`.
///
/// Spans are sorted by ascending [`Span::size`], ties kept in the order the
/// closing parenthesis was found, so nested groups precede the groups that
/// contain them.
///
/// # Errors
/// Returns [`EvalError::UnmatchedParenthesis`] for a `)` with no open partner,
/// or for the innermost `(` still open when the scan ends.
///
/// # Examples
/// ```
/// use venn_expr::find_spans;
/// let spans = find_spans("(a & (b | c))").expect("balanced");
/// assert_eq!(spans[0].inner, "b | c");
/// assert_eq!(spans[1].inner, "a & (b | c)");
/// ```
pub fn find_spans(expr: &str) -> Result<Vec<Span>, EvalError> {
    let mut open = Vec::new();
    let mut spans = Vec::new();

    for (index, byte) in expr.bytes().enumerate() {
        match byte {
            b'(' => open.push(index),
            b')' => {
                let start = open.pop().ok_or(EvalError::UnmatchedParenthesis {
                    paren: Paren::Close,
                    position: index,
                })?;
                let inner = expr
                    .get(start + 1..index)
                    .map(str::to_owned)
                    .unwrap_or_default();
                spans.push(Span {
                    start,
                    end: index,
                    inner,
                });
            }
            _ => {}
        }
    }

    if let Some(&position) = open.last() {
        return Err(EvalError::UnmatchedParenthesis {
            paren: Paren::Open,
            position,
        });
    }

    spans.sort_by_key(Span::size);
    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_ok(expr: &str) -> Vec<Span> {
        match find_spans(expr) {
            Ok(spans) => spans,
            Err(err) => panic!("spans should be found: {err}"),
        }
    }

    #[test]
    fn expression_without_parentheses_has_no_spans() {
        assert!(spans_ok("a & b").is_empty());
    }

    #[test]
    fn orders_nested_spans_innermost_first() {
        let spans = spans_ok("((a | b) & c)");
        let inner: Vec<_> = spans.iter().map(|span| span.inner.as_str()).collect();
        assert_eq!(inner, vec!["a | b", "(a | b) & c"]);
        let [first, second] = spans.as_slice() else {
            panic!("expected two spans");
        };
        assert!(second.start < first.start && first.end < second.end);
    }

    #[test]
    fn keeps_discovery_order_for_equal_sizes() {
        let spans = spans_ok("(a) | (b)");
        let starts: Vec<_> = spans.iter().map(|span| span.start).collect();
        assert_eq!(starts, vec![0, 6]);
    }

    #[test]
    fn shorter_sibling_sorts_before_longer() {
        let spans = spans_ok("(a & b) | (c)");
        let starts: Vec<_> = spans.iter().map(|span| span.start).collect();
        assert_eq!(starts, vec![10, 0]);
    }

    #[test]
    fn errors_on_unmatched_closing() {
        assert_eq!(
            find_spans("a) & (b"),
            Err(EvalError::UnmatchedParenthesis {
                paren: Paren::Close,
                position: 1,
            })
        );
    }

    #[test]
    fn errors_on_unclosed_opening() {
        assert_eq!(
            find_spans("((a) & b"),
            Err(EvalError::UnmatchedParenthesis {
                paren: Paren::Open,
                position: 0,
            })
        );
    }

    #[test]
    fn empty_group_has_empty_inner_text() {
        let spans = spans_ok("()");
        assert_eq!(spans.first().map(Span::size), Some(1));
        assert_eq!(spans.first().map(|span| span.inner.as_str()), Some(""));
    }
}
