use arch::symbol::PREDEFINED;
use indexmap::{map::Entry, IndexMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ident {
    Predefined,
    Label,
    Variable,
}

/// name -> (defining line, kind, address), in definition order.
/// Entries are never overwritten.
#[derive(Debug, Clone)]
pub struct Idents(IndexMap<String, (Option<usize>, Ident, u16)>);

impl Idents {
    pub fn new() -> Self {
        let mut map = IndexMap::new();
        for (name, addr) in PREDEFINED {
            map.insert(name.to_string(), (None, Ident::Predefined, addr));
        }
        Idents(map)
    }

    /// Binds `name` unless it already exists, in which case the existing entry is returned untouched.
    pub fn insert(
        &mut self,
        name: &str,
        line: Option<usize>,
        kind: Ident,
        value: u16,
    ) -> Option<(Option<usize>, Ident, u16)> {
        match self.0.entry(name.to_string()) {
            Entry::Occupied(prev) => Some(*prev.get()),
            Entry::Vacant(slot) => {
                slot.insert((line, kind, value));
                None
            }
        }
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|(_, _, val)| *val)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<usize>, Ident, u16)> {
        self.0
            .iter()
            .map(|(name, (line, kind, val))| (name.as_str(), *line, *kind, *val))
    }
}

impl Default for Idents {
    fn default() -> Self {
        Self::new()
    }
}
