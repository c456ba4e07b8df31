//! Derivation of the filtered, sorted view of the catalog.

use std::cmp::Ordering;

use crate::catalog::Item;
use crate::filter::state::{FilterState, SortBy};

/// Items matching every active predicate, in sort order.
pub fn compute<'a>(items: &'a [Item], filters: &FilterState) -> Vec<&'a Item> {
    matching_indices(items, filters)
        .into_iter()
        .map(|idx| &items[idx])
        .collect()
}

/// Ordered positions (into the catalog) of the filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn build(items: &[Item], filters: &FilterState) -> Self {
        Self {
            indices: matching_indices(items, filters),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// True if both views list the same item ids in the same order.
    ///
    /// `items` is the catalog this view was built from, `other_items` the
    /// one `other` was built from; they may differ after a catalog swap.
    pub fn same_content(
        &self,
        items: &[Item],
        other: &FilteredView,
        other_items: &[Item],
    ) -> bool {
        fn id_at(catalog: &[Item], idx: usize) -> Option<&str> {
            catalog.get(idx).map(|item| item.id.as_str())
        }
        self.indices.len() == other.indices.len()
            && self
                .indices
                .iter()
                .zip(&other.indices)
                .all(|(a, b)| id_at(items, *a) == id_at(other_items, *b))
    }

    /// The first `count` items of the view.
    pub fn window<'a>(&self, items: &'a [Item], count: usize) -> Vec<&'a Item> {
        self.indices
            .iter()
            .take(count)
            .filter_map(|idx| items.get(*idx))
            .collect()
    }
}

fn matching_indices(items: &[Item], filters: &FilterState) -> Vec<usize> {
    let needle = filters.search_text.to_lowercase();
    let paid_selected = filters.pricing.includes_paid();

    let mut indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            let matches_search = needle.is_empty()
                || item.title.to_lowercase().contains(&needle)
                || item.creator.to_lowercase().contains(&needle);

            let matches_pricing =
                filters.pricing.is_empty() || filters.pricing.contains(item.pricing_option);

            // Non-paid items are governed by the pricing predicate alone.
            let matches_price_range =
                !paid_selected || !item.is_paid() || filters.price_range.contains(item.price);

            matches_search && matches_pricing && matches_price_range
        })
        .map(|(idx, _)| idx)
        .collect();

    // sort_by is stable, so ties keep catalog order.
    indices.sort_by(|a, b| compare(&items[*a], &items[*b], filters.sort_by));
    indices
}

fn compare(a: &Item, b: &Item, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title)),
        SortBy::PriceHigh => b.price.total_cmp(&a.price),
        SortBy::PriceLow => a.price.total_cmp(&b.price),
    }
}
