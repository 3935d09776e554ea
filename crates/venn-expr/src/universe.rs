//! The fixed universe of elements and its named base sets.

use std::collections::HashSet;

use crate::algebra::Subset;
use crate::errors::UniverseError;

/// Opaque identifier of one universe element.
pub type Element = u32;

/// Elements of the reference universe.
pub const REFERENCE_ELEMENTS: [Element; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Base sets of the reference universe.
///
/// Every pair of sets shares exactly one element outside the third, one
/// element sits in all three, each set owns one element alone, and `7` lies in
/// none of them.
pub const REFERENCE_BASE_SETS: [(char, [Element; 4]); 3] = [
    ('a', [1, 2, 3, 5]),
    ('b', [2, 3, 4, 8]),
    ('c', [3, 4, 5, 6]),
];

/// One named subset of the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSet {
    name: char,
    members: Subset,
}

impl BaseSet {
    /// The single-letter name of the set.
    #[must_use]
    pub fn name(&self) -> char {
        self.name
    }

    /// The members of the set.
    #[must_use]
    pub fn members(&self) -> &Subset {
        &self.members
    }
}

/// An ordered, duplicate-free universe and the base sets drawn from it.
///
/// Base sets are kept sorted by name so the base alphabet has a canonical
/// order.
///
/// # Examples
/// ```
/// use venn_expr::Universe;
/// let universe = Universe::new([1, 2, 3], [('a', vec![1, 2]), ('b', vec![2, 3])])
///     .expect("valid universe");
/// assert_eq!(universe.elements(), &[1, 2, 3]);
/// assert_eq!(universe.base_names().collect::<String>(), "ab");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    elements: Vec<Element>,
    base_sets: Vec<BaseSet>,
}

impl Universe {
    /// Validate and build a universe.
    ///
    /// Duplicate members inside a single base set are collapsed.
    ///
    /// # Errors
    /// Returns [`UniverseError`] when the universe repeats an element, a base
    /// set name is not a lowercase ASCII letter or is used twice, or a base set
    /// references an element outside the universe.
    pub fn new<E, S>(elements: E, base_sets: S) -> Result<Self, UniverseError>
    where
        E: IntoIterator<Item = Element>,
        S: IntoIterator<Item = (char, Vec<Element>)>,
    {
        let mut ordered = Vec::new();
        let mut seen = HashSet::new();
        for element in elements {
            if !seen.insert(element) {
                return Err(UniverseError::DuplicateElement(element));
            }
            ordered.push(element);
        }

        let mut sets: Vec<BaseSet> = Vec::new();
        for (name, members) in base_sets {
            if !name.is_ascii_lowercase() {
                return Err(UniverseError::InvalidName(name));
            }
            if sets.iter().any(|set| set.name == name) {
                return Err(UniverseError::DuplicateName(name));
            }
            if let Some(&element) = members.iter().find(|member| !seen.contains(*member)) {
                return Err(UniverseError::ForeignElement { name, element });
            }
            sets.push(BaseSet {
                name,
                members: members.into_iter().collect(),
            });
        }
        sets.sort_by_key(|set| set.name);

        Ok(Self {
            elements: ordered,
            base_sets: sets,
        })
    }

    /// The universe `1..=8` with base sets `a`, `b` and `c`.
    ///
    /// See [`REFERENCE_BASE_SETS`] for the membership layout.
    #[must_use]
    pub fn reference() -> Self {
        Self::with_reference_sets(REFERENCE_ELEMENTS)
    }

    /// Build a universe from `elements` carrying the reference base sets,
    /// dropping any reference member the universe lacks.
    #[must_use]
    pub fn with_reference_sets<E: IntoIterator<Item = Element>>(elements: E) -> Self {
        let mut seen = HashSet::new();
        let ordered: Vec<Element> = elements
            .into_iter()
            .filter(|element| seen.insert(*element))
            .collect();
        let base_sets = REFERENCE_BASE_SETS
            .iter()
            .map(|(name, members)| BaseSet {
                name: *name,
                members: members
                    .iter()
                    .copied()
                    .filter(|member| seen.contains(member))
                    .collect(),
            })
            .collect();
        Self {
            elements: ordered,
            base_sets,
        }
    }

    /// All elements in universe order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Base sets in name order.
    #[must_use]
    pub fn base_sets(&self) -> &[BaseSet] {
        &self.base_sets
    }

    /// Look up a base set by name.
    #[must_use]
    pub fn base_set(&self, name: char) -> Option<&Subset> {
        self.base_sets
            .iter()
            .find(|set| set.name == name)
            .map(BaseSet::members)
    }

    /// Names of the base sets in canonical order.
    pub fn base_names(&self) -> impl Iterator<Item = char> + '_ {
        self.base_sets.iter().map(BaseSet::name)
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::reference()
    }
}
