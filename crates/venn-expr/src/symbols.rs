//! Pass-scoped symbol table binding names to subsets.
//!
//! A table starts with the universe's base sets and grows by appending one
//! alias per solved parenthesised group. Aliases are addressed by index and
//! never rebound; the table is dropped when the evaluation pass ends.

use crate::algebra::Subset;
use crate::universe::Universe;

/// A reference to a bound set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetRef {
    /// One of the universe's base sets.
    Base(char),
    /// The `n`th alias bound in the current pass.
    Alias(usize),
}

/// Named subsets visible to one evaluation pass.
#[derive(Debug, Clone)]
pub struct SymbolTable<'u> {
    universe: &'u Universe,
    aliases: Vec<Subset>,
}

impl<'u> SymbolTable<'u> {
    /// Create a table holding only the base sets of `universe`.
    #[must_use]
    pub fn new(universe: &'u Universe) -> Self {
        Self {
            universe,
            aliases: Vec::new(),
        }
    }

    /// The universe the table draws from.
    #[must_use]
    pub fn universe(&self) -> &'u Universe {
        self.universe
    }

    /// Resolve an operand name as written in an expression.
    ///
    /// Only base set names are accepted; aliases are reachable solely through
    /// the [`SetRef`] returned by [`SymbolTable::bind`].
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<SetRef> {
        let mut chars = name.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return None;
        };
        self.universe.base_set(letter).map(|_| SetRef::Base(letter))
    }

    /// Fetch the subset bound to `set`.
    #[must_use]
    pub fn resolve(&self, set: SetRef) -> Option<&Subset> {
        match set {
            SetRef::Base(name) => self.universe.base_set(name),
            SetRef::Alias(index) => self.aliases.get(index),
        }
    }

    /// Bind `value` to a fresh alias.
    pub fn bind(&mut self, value: Subset) -> SetRef {
        self.aliases.push(value);
        SetRef::Alias(self.aliases.len() - 1)
    }

    /// Number of aliases bound so far.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Human-readable name of `set`.
    ///
    /// Aliases take the lowercase letters following the last base name, then
    /// fall back to `#n` once the alphabet is exhausted.
    #[must_use]
    pub fn display_name(&self, set: SetRef) -> String {
        match set {
            SetRef::Base(name) => name.to_string(),
            SetRef::Alias(index) => {
                let first = self
                    .universe
                    .base_names()
                    .last()
                    .map_or(u32::from(b'a'), |name| u32::from(name) + 1);
                u32::try_from(index)
                    .ok()
                    .and_then(|offset| first.checked_add(offset))
                    .and_then(char::from_u32)
                    .filter(char::is_ascii_lowercase)
                    .map_or_else(|| format!("#{index}"), |letter| letter.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn universe() -> Universe {
        Universe::reference()
    }

    #[rstest]
    fn resolves_base_names(universe: Universe) {
        let table = SymbolTable::new(&universe);
        assert_eq!(table.lookup("a"), Some(SetRef::Base('a')));
        assert_eq!(
            table.resolve(SetRef::Base('c')).map(Subset::as_slice),
            Some(&[3, 4, 5, 6][..])
        );
    }

    #[rstest]
    #[case("x")]
    #[case("ab")]
    #[case("")]
    #[case("d")]
    fn rejects_names_outside_base_alphabet(universe: Universe, #[case] name: &str) {
        let table = SymbolTable::new(&universe);
        assert_eq!(table.lookup(name), None);
    }

    #[rstest]
    fn aliases_are_appended_and_named_after_base_alphabet(universe: Universe) {
        let mut table = SymbolTable::new(&universe);
        let first = table.bind([1].into_iter().collect());
        let second = table.bind([2].into_iter().collect());
        assert_eq!(first, SetRef::Alias(0));
        assert_eq!(second, SetRef::Alias(1));
        assert_eq!(table.alias_count(), 2);
        assert_eq!(table.display_name(first), "d");
        assert_eq!(table.display_name(second), "e");
        assert_eq!(table.resolve(first).map(Subset::as_slice), Some(&[1][..]));
    }

    #[rstest]
    fn alias_names_fall_back_after_z(universe: Universe) {
        let table = SymbolTable::new(&universe);
        assert_eq!(table.display_name(SetRef::Alias(22)), "z");
        assert_eq!(table.display_name(SetRef::Alias(23)), "#23");
    }
}
