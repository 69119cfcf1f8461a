// HTTP request handlers
use crate::application::dashboard_loader::LoadState;
use crate::domain::creator::Creator;
use crate::domain::engagement::EngagementStats;
use crate::domain::format::format_count;
use crate::domain::growth::GrowthDataPoint;
use crate::presentation::app_state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// One row of the ranked creator table, with counts pre-abbreviated for
/// display next to the raw values.
#[derive(Debug, Serialize)]
pub struct CreatorRow {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub followers: u64,
    pub followers_display: String,
    pub likes: u64,
    pub likes_display: String,
    pub video_count: u64,
    pub engagement_pct: f64,
    pub verified: bool,
}

impl CreatorRow {
    fn from_creator(creator: &Creator) -> Self {
        Self {
            id: creator.id.clone(),
            username: creator.username.clone(),
            display_name: creator.display_name.clone(),
            followers: creator.followers,
            followers_display: format_count(creator.followers),
            likes: creator.likes,
            likes_display: format_count(creator.likes),
            video_count: creator.video_count,
            engagement_pct: creator.engagement,
            verified: creator.verified,
        }
    }
}

/// One aggregate stat card.
#[derive(Debug, Serialize)]
pub struct StatTile {
    pub label: &'static str,
    pub value: u64,
    pub display: String,
}

fn stat_tiles(stats: &EngagementStats) -> Vec<StatTile> {
    [
        ("impressions", stats.impressions),
        ("engagements", stats.engagements),
        ("likes", stats.likes),
        ("comments", stats.comments),
        ("shares", stats.shares),
        ("views", stats.views),
    ]
    .into_iter()
    .map(|(label, value)| StatTile {
        label,
        value,
        display: format_count(value),
    })
    .collect()
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub state: LoadState,
    pub creators: Vec<CreatorRow>,
    pub growth: Vec<GrowthDataPoint>,
    pub engagement: Vec<StatTile>,
}

/// Snapshot of the published dashboard state. While the load cycle is
/// still running the collections are empty and `state` says so.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let view = state.loader.snapshot();
    Json(DashboardResponse {
        state: view.state,
        creators: view.creators.iter().map(CreatorRow::from_creator).collect(),
        growth: view.growth,
        engagement: view
            .engagement
            .as_ref()
            .map(stat_tiles)
            .unwrap_or_default(),
    })
}

/// Restart the load cycle from scratch.
pub async fn reload_dashboard(State(state): State<Arc<AppState>>) -> StatusCode {
    state.loader.activate();
    StatusCode::ACCEPTED
}

/// Close the promotional modal without reloading.
pub async fn dismiss_promo(State(state): State<Arc<AppState>>) -> StatusCode {
    state.loader.dismiss_promo();
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_loader::DashboardLoader;
    use crate::infrastructure::config::LoaderSettings;
    use crate::infrastructure::fixture_repository::FixtureRepository;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_dashboard_response_formats_counts() {
        let repository = Arc::new(FixtureRepository::new().unwrap());
        let loader = Arc::new(DashboardLoader::new(
            repository,
            LoaderSettings {
                load_delay_ms: 800,
                promo_delay_ms: None,
            },
        ));
        loader.activate();
        // Paused clock auto-advances through the load delay.
        tokio::time::sleep(Duration::from_millis(900)).await;

        let state = Arc::new(AppState { loader });
        let Json(response) = get_dashboard(State(state)).await;

        assert_eq!(response.state, LoadState::Loaded);
        assert_eq!(response.creators.len(), 5);
        assert_eq!(response.creators[0].followers_display, "151.2M");
        assert_eq!(response.creators[0].likes_display, "10.7B");
        assert_eq!(response.growth.len(), 10);

        let impressions = &response.engagement[0];
        assert_eq!(impressions.label, "impressions");
        assert_eq!(impressions.display, "215.7M");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_promo_endpoint() {
        let repository = Arc::new(FixtureRepository::new().unwrap());
        let loader = Arc::new(DashboardLoader::new(
            repository,
            LoaderSettings {
                load_delay_ms: 800,
                promo_delay_ms: Some(1000),
            },
        ));
        loader.activate();
        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(loader.snapshot().state, LoadState::PromoVisible);

        let state = Arc::new(AppState {
            loader: loader.clone(),
        });
        let status = dismiss_promo(State(state)).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(loader.snapshot().state, LoadState::Loaded);
    }
}
