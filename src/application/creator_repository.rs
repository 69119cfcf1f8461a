// Repository trait for creator analytics data access
use crate::domain::creator::Creator;
use crate::domain::engagement::EngagementStats;
use crate::domain::growth::GrowthDataPoint;
use async_trait::async_trait;

#[async_trait]
pub trait CreatorRepository: Send + Sync {
    /// Ranked creators, in the order the data source ranks them
    /// (highest follower count first). The order is preserved as-is.
    async fn fetch_creators(&self) -> anyhow::Result<Vec<Creator>>;

    /// Growth observations in chronological order.
    async fn fetch_growth_series(&self) -> anyhow::Result<Vec<GrowthDataPoint>>;

    /// The current aggregate engagement snapshot.
    async fn fetch_engagement_stats(&self) -> anyhow::Result<EngagementStats>;
}
