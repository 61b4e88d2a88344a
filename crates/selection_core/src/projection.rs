//! Change-notifying ordered list fed by the host's declared children.

/// Ordered item collection that re-derives from the host on every child
/// mutation and tracks a revision counter so consumers can detect change
/// without comparing whole lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemProjection<T> {
    items: Vec<T>,
    revision: u64,
}

// Derived `Default` would require `T: Default`, which item types do not
// implement; the empty projection needs no such bound.
impl<T> Default for ItemProjection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }
}

impl<T: PartialEq> ItemProjection<T> {
    /// Creates a projection seeded with the host's initial children.
    pub fn new(items: Vec<T>) -> Self {
        Self { items, revision: 0 }
    }

    /// Current projected items, in declaration order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of projected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the host declared no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Revision counter, bumped once per effective change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the projected list. Returns `true` when the list actually
    /// changed; an identical list leaves the revision untouched.
    pub fn set(&mut self, items: Vec<T>) -> bool {
        if self.items == items {
            return false;
        }
        self.items = items;
        self.revision += 1;
        true
    }
}
