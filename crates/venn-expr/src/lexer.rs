//! Expression lexer converting input strings into positioned tokens.

use crate::algebra::{Subset, intersection, union};

/// A binary set operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `&`
    Intersection,
    /// `|`
    Union,
}

impl Operator {
    /// The character that spells the operator.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Intersection => '&',
            Self::Union => '|',
        }
    }

    /// Combine two operands.
    #[must_use]
    pub fn apply(self, left: &Subset, right: &Subset) -> Subset {
        match self {
            Self::Intersection => intersection(left, right),
            Self::Union => union(left, right),
        }
    }
}

/// A lexical unit of a set expression. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of non-separator characters such as `b` or `!a`.
    ///
    /// `!` characters at either end of the run are stripped, and any `!` in
    /// the run negates the operand exactly once, so `!!a` and `a!` both mean
    /// `!a`. A run made only of `!` has an empty `name` and acts as a
    /// negation prefix for a following group.
    Operand {
        /// The operand text with surrounding `!` removed.
        name: String,
        /// Whether the run contained a `!`.
        negated: bool,
        /// Byte offset of the first character of the run.
        start: usize,
    },
    /// `&` or `|`.
    Operator {
        /// The operator.
        op: Operator,
        /// Byte offset of the operator.
        index: usize,
    },
    /// `(`
    Open {
        /// Byte offset of the parenthesis.
        index: usize,
    },
    /// `)`
    Close {
        /// Byte offset of the parenthesis.
        index: usize,
    },
}

impl Token {
    /// Byte offset where the token starts.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Operand { start, .. } => *start,
            Self::Operator { index, .. } | Self::Open { index } | Self::Close { index } => *index,
        }
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '&' | '|' | '(' | ')')
}

/// Rewrite `expr` so that every operator and parenthesis stands alone between
/// single spaces and operand runs are separated by single spaces.
///
/// # Examples
/// ```
/// use venn_expr::delimit;
/// assert_eq!(delimit("a&(!b|c)"), "a & ( !b | c )");
/// assert_eq!(delimit("  a   &&b "), "a & & b");
/// ```
#[must_use]
pub fn delimit(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len().saturating_mul(2));
    let mut word = String::new();

    let flush_word = |word: &mut String, out: &mut String| {
        if !word.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&std::mem::take(word));
        }
    };

    for ch in expr.chars() {
        if is_separator(ch) {
            flush_word(&mut word, &mut out);
            if !ch.is_whitespace() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push(ch);
            }
        } else {
            word.push(ch);
        }
    }
    flush_word(&mut word, &mut out);
    out
}

/// Split `expr` into tokens.
///
/// Malformed sequences such as adjacent operators are passed through; the
/// evaluators decide what is acceptable.
///
/// # Examples
/// ```
/// use venn_expr::{Operator, Token, tokenize};
/// let tokens = tokenize("!a&b");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Operand { name: "a".into(), negated: true, start: 0 },
///         Token::Operator { op: Operator::Intersection, index: 2 },
///         Token::Operand { name: "b".into(), negated: false, start: 3 },
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(expr: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '&' => tokens.push(Token::Operator {
                op: Operator::Intersection,
                index: pos,
            }),
            '|' => tokens.push(Token::Operator {
                op: Operator::Union,
                index: pos,
            }),
            '(' => tokens.push(Token::Open { index: pos }),
            ')' => tokens.push(Token::Close { index: pos }),
            c if c.is_whitespace() => {}
            first => {
                let mut run = String::from(first);
                while let Some((_, next)) = chars.next_if(|&(_, next)| !is_separator(next)) {
                    run.push(next);
                }
                tokens.push(Token::Operand {
                    name: run.trim_matches('!').to_owned(),
                    negated: run.contains('!'),
                    start: pos,
                });
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn operand(name: &str, negated: bool, start: usize) -> Token {
        Token::Operand {
            name: name.into(),
            negated,
            start,
        }
    }

    #[test]
    fn tokenises_operands_and_operators() {
        assert_eq!(
            tokenize("a & b | c"),
            vec![
                operand("a", false, 0),
                Token::Operator {
                    op: Operator::Intersection,
                    index: 2,
                },
                operand("b", false, 4),
                Token::Operator {
                    op: Operator::Union,
                    index: 6,
                },
                operand("c", false, 8),
            ]
        );
    }

    #[test]
    fn records_parentheses_positions() {
        assert_eq!(
            tokenize("(a)"),
            vec![
                Token::Open { index: 0 },
                operand("a", false, 1),
                Token::Close { index: 2 },
            ]
        );
    }

    #[rstest]
    #[case("!a", "a", true)]
    #[case("!!a", "a", true)]
    #[case("!!!a", "a", true)]
    #[case("a!", "a", true)]
    #[case("!a!", "a", true)]
    #[case("a!b", "a!b", true)]
    #[case("ab", "ab", false)]
    fn strips_negation_marks(#[case] input: &str, #[case] name: &str, #[case] negated: bool) {
        assert_eq!(tokenize(input), vec![operand(name, negated, 0)]);
    }

    #[test]
    fn bare_bang_before_group_has_empty_name() {
        assert_eq!(
            tokenize("!(a)"),
            vec![
                operand("", true, 0),
                Token::Open { index: 1 },
                operand("a", false, 2),
                Token::Close { index: 3 },
            ]
        );
    }

    #[test]
    fn passes_adjacent_operators_through() {
        let tokens = tokenize("a&&b");
        assert_eq!(tokens.len(), 4);
        assert!(matches!(tokens.get(2), Some(Token::Operator { index: 2, .. })));
    }

    #[rstest]
    #[case("", "")]
    #[case("a|b", "a | b")]
    #[case("!a & (b|c)", "!a & ( b | c )")]
    #[case("\ta \n b", "a b")]
    fn delimits_operators(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(delimit(input), expected);
    }
}
