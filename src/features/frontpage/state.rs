use crate::flux::FeatureState;
use crate::models::Listing;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontpageState {
    pub listing: Listing,
}

impl FeatureState for FrontpageState {}
