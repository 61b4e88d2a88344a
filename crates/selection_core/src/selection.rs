//! Ordered multi-value selection with toggle semantics.

use serde::{Deserialize, Serialize};

/// Insertion-ordered list of unique selected values.
///
/// Toggling a value off and back on restores it to its previous position,
/// so a double toggle leaves the selection order unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiSelection {
    values: Vec<String>,
    #[serde(skip)]
    last_removed: Option<(String, usize)>,
}

// Equality is over the selected values; the re-insert memo is transient.
impl PartialEq for MultiSelection {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for MultiSelection {}

impl MultiSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected values in insertion order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether `value` is currently selected.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds `value` when absent, removes it when present. Returns whether
    /// the value is selected after the toggle.
    ///
    /// Re-toggling the value removed last goes back to its old position,
    /// so toggling twice restores the prior order.
    pub fn toggle(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                let removed = self.values.remove(index);
                self.last_removed = Some((removed, index));
                false
            }
            None => {
                match self.last_removed.take() {
                    Some((last, index)) if last == value => {
                        let index = index.min(self.values.len());
                        self.values.insert(index, last);
                    }
                    _ => self.values.push(value.to_string()),
                }
                true
            }
        }
    }

    /// Removes one value. A value that was never selected is a no-op and
    /// returns `false`.
    pub fn remove(&mut self, value: &str) -> bool {
        self.last_removed = None;
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                let _ = self.values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the most recently added value.
    pub fn pop_last(&mut self) -> Option<String> {
        self.last_removed = None;
        self.values.pop()
    }

    /// Replaces the whole selection, dropping duplicates while keeping the
    /// first occurrence's position.
    pub fn set_values(&mut self, values: Vec<String>) {
        self.last_removed = None;
        self.values.clear();
        for value in values {
            if !self.contains(&value) {
                self.values.push(value);
            }
        }
    }
}
