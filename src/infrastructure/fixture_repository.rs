// Fixture repository - Hand-authored dataset standing in for a real backend
use crate::application::creator_repository::CreatorRepository;
use crate::domain::creator::Creator;
use crate::domain::engagement::EngagementStats;
use crate::domain::growth::GrowthDataPoint;
use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("duplicate creator id: {0}")]
    DuplicateId(String),
    #[error("duplicate creator username: {0}")]
    DuplicateUsername(String),
    #[error("creator username must not start with a symbol: {0}")]
    LeadingSymbol(String),
}

/// Serves a fixed demonstration dataset in place of a real backend.
/// Every fetch returns a clone of the same immutable records, so readers
/// see identical data on every call for the life of the process.
pub struct FixtureRepository {
    creators: Vec<Creator>,
    growth: Vec<GrowthDataPoint>,
    engagement: EngagementStats,
}

impl FixtureRepository {
    pub fn new() -> Result<Self, FixtureError> {
        Self::from_records(
            fixture_creators(),
            fixture_growth_series(),
            fixture_engagement_stats(),
        )
    }

    /// Validates the creator invariants once, up front, so malformed data
    /// is rejected here instead of propagating to the presentation layer.
    fn from_records(
        creators: Vec<Creator>,
        growth: Vec<GrowthDataPoint>,
        engagement: EngagementStats,
    ) -> Result<Self, FixtureError> {
        let mut ids = HashSet::new();
        let mut usernames = HashSet::new();
        for creator in &creators {
            if !ids.insert(creator.id.as_str()) {
                return Err(FixtureError::DuplicateId(creator.id.clone()));
            }
            if !usernames.insert(creator.username.as_str()) {
                return Err(FixtureError::DuplicateUsername(creator.username.clone()));
            }
            if !creator
                .username
                .starts_with(|c: char| c.is_ascii_alphanumeric())
            {
                return Err(FixtureError::LeadingSymbol(creator.username.clone()));
            }
        }

        Ok(Self {
            creators,
            growth,
            engagement,
        })
    }
}

#[async_trait]
impl CreatorRepository for FixtureRepository {
    async fn fetch_creators(&self) -> anyhow::Result<Vec<Creator>> {
        Ok(self.creators.clone())
    }

    async fn fetch_growth_series(&self) -> anyhow::Result<Vec<GrowthDataPoint>> {
        Ok(self.growth.clone())
    }

    async fn fetch_engagement_stats(&self) -> anyhow::Result<EngagementStats> {
        Ok(self.engagement.clone())
    }
}

/// Top creators as authored: ranked highest follower count first. The
/// order is served exactly as declared, never re-sorted.
fn fixture_creators() -> Vec<Creator> {
    vec![
        Creator {
            id: "1".to_string(),
            username: "charlidamelio".to_string(),
            display_name: "Charli D'Amelio".to_string(),
            followers: 151_200_000,
            engagement: 8.4,
            likes: 10_700_000_000,
            video_count: 2_134,
            verified: true,
        },
        Creator {
            id: "2".to_string(),
            username: "khaby.lame".to_string(),
            display_name: "Khaby Lame".to_string(),
            followers: 142_500_000,
            engagement: 9.2,
            likes: 9_800_000_000,
            video_count: 1_087,
            verified: true,
        },
        Creator {
            id: "3".to_string(),
            username: "bellapoarch".to_string(),
            display_name: "Bella Poarch".to_string(),
            followers: 92_300_000,
            engagement: 7.8,
            likes: 6_100_000_000,
            video_count: 425,
            verified: true,
        },
        Creator {
            id: "4".to_string(),
            username: "addisonre".to_string(),
            display_name: "Addison Rae".to_string(),
            followers: 88_700_000,
            engagement: 6.5,
            likes: 5_800_000_000,
            video_count: 1_835,
            verified: true,
        },
        Creator {
            id: "5".to_string(),
            username: "zachking".to_string(),
            display_name: "Zach King".to_string(),
            followers: 75_800_000,
            engagement: 12.3,
            likes: 4_700_000_000,
            video_count: 648,
            verified: true,
        },
    ]
}

/// Ten quarterly observations, declared in chronological order.
fn fixture_growth_series() -> Vec<GrowthDataPoint> {
    [
        ("Q1 2021", 450_000, 220_000, 73_000),
        ("Q2 2021", 580_000, 290_000, 95_000),
        ("Q3 2021", 720_000, 360_000, 128_000),
        ("Q4 2021", 850_000, 415_000, 156_000),
        ("Q1 2022", 920_000, 460_000, 175_000),
        ("Q2 2022", 985_000, 510_000, 195_000),
        ("Q3 2022", 1_050_000, 550_000, 215_000),
        ("Q4 2022", 1_120_000, 590_000, 228_000),
        ("Q1 2023", 1_180_000, 620_000, 236_000),
        ("Q2 2023", 1_210_000, 642_000, 239_000),
    ]
    .into_iter()
    .map(|(date, followers, engagements, tiktok)| {
        GrowthDataPoint::new(date.to_string(), followers, engagements, tiktok)
    })
    .collect()
}

fn fixture_engagement_stats() -> EngagementStats {
    EngagementStats {
        impressions: 215_680_000,
        engagements: 24_110_000,
        likes: 23_670_000,
        comments: 157_490_000,
        shares: 282_270_000,
        views: 207_220_000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetches_are_idempotent() {
        let repo = FixtureRepository::new().unwrap();

        assert_eq!(
            repo.fetch_creators().await.unwrap(),
            repo.fetch_creators().await.unwrap()
        );
        assert_eq!(
            repo.fetch_growth_series().await.unwrap(),
            repo.fetch_growth_series().await.unwrap()
        );
        assert_eq!(
            repo.fetch_engagement_stats().await.unwrap(),
            repo.fetch_engagement_stats().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_fixture_shape() {
        let repo = FixtureRepository::new().unwrap();

        let creators = repo.fetch_creators().await.unwrap();
        assert_eq!(creators.len(), 5);
        assert_eq!(creators[0].username, "charlidamelio");
        assert!(creators[0].likes > u64::from(u32::MAX));

        let growth = repo.fetch_growth_series().await.unwrap();
        assert_eq!(growth.len(), 10);
        assert_eq!(growth[0].date, "Q1 2021");
        assert_eq!(growth[9].date, "Q2 2023");

        let stats = repo.fetch_engagement_stats().await.unwrap();
        assert_eq!(stats.impressions, 215_680_000);
    }

    fn creator(id: &str, username: &str) -> Creator {
        Creator {
            id: id.to_string(),
            username: username.to_string(),
            display_name: username.to_string(),
            followers: 0,
            engagement: 0.0,
            likes: 0,
            video_count: 0,
            verified: false,
        }
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let result = FixtureRepository::from_records(
            vec![creator("1", "a"), creator("1", "b")],
            fixture_growth_series(),
            fixture_engagement_stats(),
        );
        assert!(matches!(result, Err(FixtureError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_rejects_duplicate_username() {
        let result = FixtureRepository::from_records(
            vec![creator("1", "a"), creator("2", "a")],
            fixture_growth_series(),
            fixture_engagement_stats(),
        );
        assert!(matches!(result, Err(FixtureError::DuplicateUsername(u)) if u == "a"));
    }

    #[test]
    fn test_rejects_leading_symbol_in_username() {
        let result = FixtureRepository::from_records(
            vec![creator("1", "@handle")],
            fixture_growth_series(),
            fixture_engagement_stats(),
        );
        assert!(matches!(result, Err(FixtureError::LeadingSymbol(u)) if u == "@handle"));
    }
}
