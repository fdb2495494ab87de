//! Data model for extracted function documentation — format-agnostic.

use std::collections::HashMap;

/// One recognized documentation block, borrowed from the normalized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub name: &'a str,
    /// Parenthesized argument list, verbatim: `(x, y)`
    pub signature: &'a str,
    /// Raw description up to and including its first period
    pub description: &'a str,
}

/// One documented variant of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overload {
    pub signature: String,
    /// Single logical line; line breaks are the two characters `\n`
    pub description: String,
}

/// A function name with its overloads in first-encountered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: String,
    pub overloads: Vec<Overload>,
}

/// Function name → overloads, iterated in insertion order of first appearance.
#[derive(Debug, Default)]
pub struct FunctionTable {
    entries: Vec<FunctionEntry>,
    index: HashMap<String, usize>,
}

impl FunctionTable {
    /// Append an overload, creating the entry if the name is new.
    /// Returns `true` when the name was not in the table before.
    pub fn push(&mut self, name: &str, overload: Overload) -> bool {
        if let Some(&slot) = self.index.get(name) {
            self.entries[slot].overloads.push(overload);
            return false;
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(FunctionEntry {
            name: name.to_string(),
            overloads: vec![overload],
        });
        true
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
