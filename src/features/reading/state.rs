use std::collections::BTreeMap;

use crate::flux::FeatureState;
use crate::models::PageNumber;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadingState {
    /// Gallery being read; seeded by the detail screen on presentation.
    pub gid: String,
    /// Image URLs keyed by page index.
    pub contents: BTreeMap<u32, String>,
    pub page: PageNumber,
    pub loading: bool,
    pub failed: bool,
    pub loading_more: bool,
    pub more_failed: bool,
    /// Last page index the reader was on.
    pub progress: u32,
    pub(super) stale_fetches: u8,
}

impl FeatureState for ReadingState {}
