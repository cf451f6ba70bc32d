//! Ordered, duplicate-free set of selected commodity ids

use serde::Serialize;

/// Commodity ids the user has flagged, in toggle order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet(Vec<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, otherwise append it.
    ///
    /// Returns `true` when the id is selected after the call.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|s| s == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|s| s == id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    /// Builds a set by toggling each id in turn
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for id in iter {
            set.toggle(&id.into());
        }
        set
    }
}
