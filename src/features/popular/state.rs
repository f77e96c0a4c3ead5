use crate::flux::FeatureState;
use crate::models::Gallery;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopularState {
    pub galleries: Vec<Gallery>,
    pub loading: bool,
    pub failed: bool,
    pub not_found: bool,
}

impl FeatureState for PopularState {}
