// Engagement snapshot domain model
use serde::Serialize;

/// Aggregate engagement counters for the whole account. A single
/// snapshot, not a time series. The six counters come from different
/// measurement sources and are not required to sum or nest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementStats {
    pub impressions: u64,
    pub engagements: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
}
