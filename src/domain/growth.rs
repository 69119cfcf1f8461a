// Brand growth domain model
use serde::Serialize;

/// One time-bucketed growth observation. `date` is a period label
/// ("Q1 2021"); the sequence order of a growth series IS its
/// chronological order, so consumers must not re-sort by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthDataPoint {
    pub date: String,
    pub followers: u64,
    pub engagements: u64,
    pub tiktok: u64,
}

impl GrowthDataPoint {
    pub fn new(date: String, followers: u64, engagements: u64, tiktok: u64) -> Self {
        Self {
            date,
            followers,
            engagements,
            tiktok,
        }
    }
}
