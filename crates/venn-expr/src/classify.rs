//! Labels describing which base sets each element belongs to.

use std::collections::BTreeMap;

use crate::algebra::Subset;
use crate::universe::{Element, Universe};

/// Label of elements that belong to no base set.
pub const UNCLASSIFIED: &str = "none";

/// Element → membership label, fixed when the universe is established.
///
/// A label is the concatenation, in base-name order, of every base set that
/// contains the element, e.g. `"ab"` for an element in `a` and `b` only.
///
/// # Examples
/// ```
/// use venn_expr::{ClassificationTable, Universe};
/// let table = ClassificationTable::build(&Universe::reference());
/// assert_eq!(table.classify(3), Some("abc"));
/// assert_eq!(table.classify(7), Some("none"));
/// assert_eq!(table.classify(42), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTable {
    labels: BTreeMap<Element, String>,
}

impl ClassificationTable {
    /// Classify every element of `universe` against its base sets.
    #[must_use]
    pub fn build(universe: &Universe) -> Self {
        let labels = universe
            .elements()
            .iter()
            .map(|&element| {
                let label: String = universe
                    .base_sets()
                    .iter()
                    .filter(|set| set.members().contains(element))
                    .map(|set| set.name())
                    .collect();
                if label.is_empty() {
                    (element, UNCLASSIFIED.to_owned())
                } else {
                    (element, label)
                }
            })
            .collect();
        Self { labels }
    }

    /// The label of `element`, or `None` when it is not in the universe.
    #[must_use]
    pub fn classify(&self, element: Element) -> Option<&str> {
        self.labels.get(&element).map(String::as_str)
    }

    /// One label per distinct classification present in `result`, in the
    /// order the classifications first appear. Unknown elements are skipped.
    #[must_use]
    pub fn sections(&self, result: &Subset) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for label in result.iter().filter_map(|element| self.classify(element)) {
            if !sections.contains(&label) {
                sections.push(label);
            }
        }
        sections
    }

    /// Iterate over `(element, label)` pairs in ascending element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, &str)> + '_ {
        self.labels
            .iter()
            .map(|(element, label)| (*element, label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_matches_layout() {
        let table = ClassificationTable::build(&Universe::reference());
        let labels: Vec<_> = table.iter().collect();
        assert_eq!(
            labels,
            vec![
                (1, "a"),
                (2, "ab"),
                (3, "abc"),
                (4, "bc"),
                (5, "ac"),
                (6, "c"),
                (7, "none"),
                (8, "b"),
            ]
        );
    }

    #[test]
    fn sections_deduplicate_and_skip_unknown_elements() {
        let universe = Universe::new([1, 2, 3], [('a', vec![1, 2])])
            .unwrap_or_else(|err| panic!("universe should build: {err}"));
        let table = ClassificationTable::build(&universe);
        let result: Subset = [3, 1, 99, 2].into_iter().collect();
        assert_eq!(table.sections(&result), vec!["none", "a"]);
    }

    #[test]
    fn labels_follow_base_name_order() {
        let universe = Universe::new([1], [('z', vec![1]), ('m', vec![1])])
            .unwrap_or_else(|err| panic!("universe should build: {err}"));
        let table = ClassificationTable::build(&universe);
        assert_eq!(table.classify(1), Some("mz"));
    }
}
