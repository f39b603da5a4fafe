//! An ordered collection of maintainers.

use crate::maintainer::Maintainer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display};

/// Maintainers in file order.
///
/// Appending never deduplicates; use [`Maintainers::is_maintainer`] to ask
/// whether an equal record is already present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Maintainers {
    entries: Vec<Maintainer>,
}

impl Maintainers {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a maintainer to the end of the collection.
    pub fn push(&mut self, maintainer: Maintainer) {
        self.entries.push(maintainer);
    }

    /// Returns true if a maintainer equal to `candidate` is in the collection.
    pub fn is_maintainer(&self, candidate: &Maintainer) -> bool {
        self.entries.iter().any(|m| m == candidate)
    }

    /// Number of maintainers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maintainer at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Maintainer> {
        self.entries.get(index)
    }

    /// Iterates over the maintainers in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Maintainer> {
        self.entries.iter()
    }

    /// The maintainers as a slice.
    pub fn as_slice(&self) -> &[Maintainer] {
        &self.entries
    }

    /// JSON array of every maintainer's [`Maintainer::to_json`] object.
    pub fn to_json(&self) -> Value {
        Value::Array(self.entries.iter().map(Maintainer::to_json).collect())
    }

    /// Structural representation, e.g. `Maintainers(Maintainer(...), Maintainer(...))`.
    pub fn repr(&self) -> String {
        let inner: Vec<String> = self.entries.iter().map(Maintainer::repr).collect();
        format!("Maintainers({})", inner.join(", "))
    }
}

impl Display for Maintainers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Maintainers:")?;
        for maintainer in &self.entries {
            write!(f, "\n    {}", maintainer)?;
        }
        Ok(())
    }
}

impl From<Vec<Maintainer>> for Maintainers {
    fn from(entries: Vec<Maintainer>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Maintainer> for Maintainers {
    fn from_iter<I: IntoIterator<Item = Maintainer>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Maintainer> for Maintainers {
    fn extend<I: IntoIterator<Item = Maintainer>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Maintainers {
    type Item = Maintainer;
    type IntoIter = std::vec::IntoIter<Maintainer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Maintainers {
    type Item = &'a Maintainer;
    type IntoIter = std::slice::Iter<'a, Maintainer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
