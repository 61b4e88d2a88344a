//! Case-insensitive substring filtering over item labels.

use crate::focus::FocusableList;
use crate::item::SelectItem;

/// Whether `label` matches `query` (case-insensitive substring; an empty
/// query matches everything).
pub fn matches_query(label: &str, query: &str) -> bool {
    query.is_empty() || label.to_lowercase().contains(&query.to_lowercase())
}

/// Indices of the items whose labels match `query`, in declaration order.
pub fn filtered_indices(items: &[SelectItem], query: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_query(&item.label, query))
        .map(|(index, _)| index)
        .collect()
}

/// View over a filtered subset of items, navigable by [`crate::FocusNav`].
///
/// Focus indices address positions in `indices`; `indices[i]` maps back to
/// the original item list.
pub struct FilteredItems<'a> {
    /// Full item list.
    pub items: &'a [SelectItem],
    /// Indices of the items that matched the current query.
    pub indices: &'a [usize],
}

impl FocusableList for FilteredItems<'_> {
    fn len(&self) -> usize {
        self.indices.len()
    }

    fn is_selectable(&self, index: usize) -> bool {
        self.indices
            .get(index)
            .and_then(|&original| self.items.get(original))
            .is_some_and(|item| !item.disabled)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn departments() -> Vec<SelectItem> {
        vec![
            SelectItem::new("design", "Design"),
            SelectItem::new("engineering", "Engineering"),
            SelectItem::new("product", "Product"),
        ]
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert!(matches_query("Engineering", "eng"));
        assert!(matches_query("Engineering", "ENG"));
        assert!(matches_query("Engineering", "neer"));
        assert!(!matches_query("Design", "eng"));
        assert!(matches_query("Design", ""));
    }

    #[test]
    fn filtered_indices_preserve_declaration_order() {
        let items = departments();
        assert_eq!(filtered_indices(&items, ""), vec![0, 1, 2]);
        assert_eq!(filtered_indices(&items, "eng"), vec![1]);
        assert_eq!(filtered_indices(&items, "e"), vec![0, 1]);
        assert_eq!(filtered_indices(&items, "zzz"), Vec::<usize>::new());
    }

    #[test]
    fn filtered_view_reports_disabled_items_as_unselectable() {
        let items = vec![
            SelectItem::new("a", "Alpha").disabled(),
            SelectItem::new("b", "Beta"),
        ];
        let indices = filtered_indices(&items, "a");
        let view = FilteredItems {
            items: &items,
            indices: &indices,
        };
        assert_eq!(indices, vec![0, 1]);
        assert!(!view.is_selectable(0));
        assert!(view.is_selectable(1));
    }
}
