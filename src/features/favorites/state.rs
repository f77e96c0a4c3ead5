use std::collections::BTreeMap;

use crate::flux::FeatureState;
use crate::models::Listing;

/// The site offers ten fixed favorite categories.
pub const FAVORITE_CATEGORIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    /// Selected category tab.
    pub index: usize,
    /// Listings materialize lazily per visited category.
    pub listings: BTreeMap<usize, Listing>,
}

impl FeatureState for FavoritesState {}

impl FavoritesState {
    pub fn listing(&mut self, index: usize) -> &mut Listing {
        self.listings.entry(index).or_default()
    }
}
