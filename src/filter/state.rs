use crate::catalog::PricingOption;

pub const PRICE_MIN: u32 = 0;
pub const PRICE_MAX: u32 = 999;

/// Inclusive price bounds, always within `[PRICE_MIN, PRICE_MAX]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Clamps both bounds into range and swaps them if reversed.
    pub fn new(min: u32, max: u32) -> Self {
        let min = min.clamp(PRICE_MIN, PRICE_MAX);
        let max = max.clamp(PRICE_MIN, PRICE_MAX);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn full() -> Self {
        Self {
            min: PRICE_MIN,
            max: PRICE_MAX,
        }
    }

    pub fn min(self) -> u32 {
        self.min
    }

    pub fn max(self) -> u32 {
        self.max
    }

    pub fn is_full(self) -> bool {
        self == Self::full()
    }

    pub fn contains(self, price: f64) -> bool {
        price >= self.min as f64 && price <= self.max as f64
    }

    /// Shift the lower bound by `delta`, never crossing the upper bound.
    pub fn shift_min(self, delta: i64) -> Self {
        let min = shifted(self.min, delta).min(self.max);
        Self::new(min, self.max)
    }

    /// Shift the upper bound by `delta`, never crossing the lower bound.
    pub fn shift_max(self, delta: i64) -> Self {
        let max = shifted(self.max, delta).max(self.min);
        Self::new(self.min, max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

fn shifted(value: u32, delta: i64) -> u32 {
    (value as i64 + delta).clamp(PRICE_MIN as i64, PRICE_MAX as i64) as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortBy {
    #[default]
    Name,
    PriceHigh,
    PriceLow,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [Self::Name, Self::PriceHigh, Self::PriceLow];

    /// Key used in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceHigh => "price_high",
            Self::PriceLow => "price_low",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_str() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Item Name",
            Self::PriceHigh => "Higher Price",
            Self::PriceLow => "Lower Price",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::PriceHigh,
            Self::PriceHigh => Self::PriceLow,
            Self::PriceLow => Self::Name,
        }
    }
}

/// Set of selected pricing options. Empty means "all".
///
/// Insertion order is kept so the URL encoding is stable, but equality
/// ignores it.
#[derive(Debug, Clone, Default)]
pub struct PricingSelection(Vec<PricingOption>);

impl PricingSelection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, option: PricingOption) -> bool {
        self.0.contains(&option)
    }

    pub fn includes_paid(&self) -> bool {
        self.contains(PricingOption::Paid)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = PricingOption> + '_ {
        self.0.iter().copied()
    }

    pub fn insert(&mut self, option: PricingOption) -> bool {
        if self.contains(option) {
            return false;
        }
        self.0.push(option);
        true
    }

    pub fn remove(&mut self, option: PricingOption) -> bool {
        let before = self.0.len();
        self.0.retain(|o| *o != option);
        self.0.len() != before
    }

    pub fn toggle(&mut self, option: PricingOption) {
        if !self.remove(option) {
            self.0.push(option);
        }
    }
}

impl FromIterator<PricingOption> for PricingSelection {
    fn from_iter<I: IntoIterator<Item = PricingOption>>(iter: I) -> Self {
        let mut selection = Self::new();
        for option in iter {
            selection.insert(option);
        }
        selection
    }
}

impl PartialEq for PricingSelection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|o| other.contains(o))
    }
}

impl Eq for PricingSelection {}

/// Current filter criteria of the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub pricing: PricingSelection,
    pub sort_by: SortBy,
    /// Only applied while `Paid` is selected.
    pub price_range: PriceRange,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_range_is_clamped_and_ordered() {
        let range = PriceRange::new(1200, 40);
        assert_eq!((range.min(), range.max()), (40, 999));
    }

    #[test]
    fn shifting_bounds_never_crosses() {
        let range = PriceRange::new(100, 120);
        assert_eq!(range.shift_min(50).min(), 120);
        assert_eq!(range.shift_max(-50).max(), 100);
        assert_eq!(PriceRange::full().shift_min(-10).min(), 0);
        assert_eq!(PriceRange::full().shift_max(10).max(), 999);
    }

    #[test]
    fn selection_equality_ignores_order() {
        let a: PricingSelection = [PricingOption::Paid, PricingOption::Free].into_iter().collect();
        let b: PricingSelection = [PricingOption::Free, PricingOption::Paid].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = PricingSelection::new();
        selection.toggle(PricingOption::ViewOnly);
        assert!(selection.contains(PricingOption::ViewOnly));
        selection.toggle(PricingOption::ViewOnly);
        assert!(selection.is_empty());
    }

    #[test]
    fn sort_keys_round_trip() {
        for sort in SortBy::ALL {
            assert_eq!(SortBy::parse(sort.as_str()), Some(sort));
        }
        assert_eq!(SortBy::parse("rating"), None);
    }
}
