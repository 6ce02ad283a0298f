//! Style class sets carried by canvas nodes

use smallvec::SmallVec;

/// Ordered set of style class names (`mord`, `mathnormal`, ...).
///
/// Insertion order is kept and duplicates are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleClasses {
    names: SmallVec<[String; 4]>,
}

impl StyleClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns a new set holding `self` followed by any names not yet present.
    pub fn union<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut merged = self.clone();
        merged.extend(names);
        merged
    }
}

impl<S: Into<String>> Extend<S> for StyleClasses {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StyleClasses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut classes = Self::new();
        classes.extend(iter);
        classes
    }
}

#[cfg(test)]
#[path = "tests/classes_tests.rs"]
mod tests;
