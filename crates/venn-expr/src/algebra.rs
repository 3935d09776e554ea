//! Subsets of the universe and the three set operations.
//!
//! Universes are small (a handful of elements), so membership is tested by a
//! linear scan and results keep a predictable order.

use std::fmt;

use crate::universe::Element;

/// A duplicate-free collection of universe elements.
///
/// Iteration order is the order elements were first added. Equality ignores
/// order.
///
/// # Examples
/// ```
/// use venn_expr::Subset;
/// let left: Subset = [3, 1, 3, 2].into_iter().collect();
/// let right: Subset = [1, 2, 3].into_iter().collect();
/// assert_eq!(left.as_slice(), &[3, 1, 2]);
/// assert_eq!(left, right);
/// ```
#[derive(Debug, Clone, Default, Eq)]
pub struct Subset {
    elements: Vec<Element>,
}

impl Subset {
    /// Create an empty subset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `element` unless it is already present.
    ///
    /// Returns `true` when the element was added.
    pub fn insert(&mut self, element: Element) -> bool {
        if self.contains(element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Whether `element` is a member.
    #[must_use]
    pub fn contains(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    /// Number of distinct elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the subset has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Element>> {
        self.elements.iter().copied()
    }

    /// Borrow the elements in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    /// Return the elements in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Element> {
        let mut elements = self.elements.clone();
        elements.sort_unstable();
        elements
    }

    /// Whether every element also appears in `superset`.
    #[must_use]
    pub fn is_subset_of(&self, superset: &[Element]) -> bool {
        self.iter().all(|element| superset.contains(&element))
    }
}

impl PartialEq for Subset {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl FromIterator<Element> for Subset {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut subset = Self::new();
        for element in iter {
            subset.insert(element);
        }
        subset
    }
}

impl<'a> IntoIterator for &'a Subset {
    type Item = Element;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Element>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("}")
    }
}

/// Elements present in either operand, `left` first.
///
/// # Examples
/// ```
/// use venn_expr::{Subset, union};
/// let left: Subset = [1, 2].into_iter().collect();
/// let right: Subset = [2, 5].into_iter().collect();
/// assert_eq!(union(&left, &right).as_slice(), &[1, 2, 5]);
/// ```
#[must_use]
pub fn union(left: &Subset, right: &Subset) -> Subset {
    left.iter().chain(right.iter()).collect()
}

/// Elements of `left` that also appear in `right`, in `left`'s order.
#[must_use]
pub fn intersection(left: &Subset, right: &Subset) -> Subset {
    left.iter().filter(|element| right.contains(*element)).collect()
}

/// Universe elements absent from `set`, in universe order.
///
/// Members of `set` that lie outside `universe` are ignored.
///
/// # Examples
/// ```
/// use venn_expr::{Subset, complement};
/// let set: Subset = [1, 2, 3, 5, 42].into_iter().collect();
/// let universe = [1, 2, 3, 4, 5, 6, 7, 8];
/// assert_eq!(complement(&set, &universe).as_slice(), &[4, 6, 7, 8]);
/// ```
#[must_use]
pub fn complement(set: &Subset, universe: &[Element]) -> Subset {
    universe
        .iter()
        .copied()
        .filter(|element| !set.contains(*element))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn subset(elements: &[Element]) -> Subset {
        elements.iter().copied().collect()
    }

    #[rstest]
    #[case(&[1, 2, 3, 5], &[2, 3, 4, 8], &[1, 2, 3, 5, 4, 8])]
    #[case(&[], &[4], &[4])]
    #[case(&[6, 6], &[6], &[6])]
    fn union_deduplicates(
        #[case] left: &[Element],
        #[case] right: &[Element],
        #[case] expected: &[Element],
    ) {
        assert_eq!(union(&subset(left), &subset(right)).as_slice(), expected);
    }

    #[rstest]
    #[case(&[1, 2, 3, 5], &[2, 3, 4, 8], &[2, 3])]
    #[case(&[5, 3, 1], &[1, 3], &[3, 1])]
    #[case(&[1], &[], &[])]
    fn intersection_keeps_left_order(
        #[case] left: &[Element],
        #[case] right: &[Element],
        #[case] expected: &[Element],
    ) {
        assert_eq!(
            intersection(&subset(left), &subset(right)).as_slice(),
            expected
        );
    }

    #[test]
    fn intersection_leaves_inputs_untouched() {
        let left = subset(&[1, 2, 3]);
        let right = subset(&[3]);
        let _ = intersection(&left, &right);
        assert_eq!(left.as_slice(), &[1, 2, 3]);
        assert_eq!(right.as_slice(), &[3]);
    }

    #[test]
    fn complement_follows_universe_order() {
        let universe = [8, 7, 6, 5, 4, 3, 2, 1];
        assert_eq!(
            complement(&subset(&[1, 2, 3, 5]), &universe).as_slice(),
            &[8, 7, 6, 4]
        );
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(subset(&[3, 2]), subset(&[2, 3]));
        assert_ne!(subset(&[3, 2]), subset(&[2]));
    }

    #[test]
    fn displays_in_roster_notation() {
        assert_eq!(subset(&[2, 3]).to_string(), "{2, 3}");
        assert_eq!(Subset::new().to_string(), "{}");
    }
}
