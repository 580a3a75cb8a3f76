use serde::{Deserialize, Serialize};

/// The options picked for a multi-select question.
///
/// Keeps insertion order (the order the user ticked the boxes) and never
/// holds the same option twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection {
    options: Vec<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Add or remove `option` depending on the checkbox state reported by the caller.
    ///
    /// Adding an option that is already present and removing one that is
    /// absent both leave the selection unchanged.
    pub fn toggle(&mut self, option: impl Into<String>, checked: bool) {
        let option = option.into();
        if checked {
            self.insert(option);
        } else {
            self.remove(&option);
        }
    }

    /// Add an option. Returns `false` if it was already selected.
    pub fn insert(&mut self, option: impl Into<String>) -> bool {
        let option = option.into();
        if self.contains(&option) {
            return false;
        }
        self.options.push(option);
        true
    }

    /// Remove an option. Returns `false` if it was not selected.
    pub fn remove(&mut self, option: &str) -> bool {
        let before = self.options.len();
        self.options.retain(|o| o != option);
        self.options.len() != before
    }

    /// Check whether an option is selected.
    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Drop every selected option.
    pub fn clear(&mut self) {
        self.options.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Convert into the plain list stored in a persisted row.
    pub fn into_vec(self) -> Vec<String> {
        self.options
    }
}

impl From<Vec<String>> for Selection {
    fn from(options: Vec<String>) -> Self {
        options.into_iter().collect()
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.options
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for option in iter {
            selection.insert(option);
        }
        selection
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
