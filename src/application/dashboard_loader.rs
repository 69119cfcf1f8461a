// Dashboard loader - Simulated asynchronous load lifecycle
use crate::application::creator_repository::CreatorRepository;
use crate::domain::creator::Creator;
use crate::domain::engagement::EngagementStats;
use crate::domain::growth::GrowthDataPoint;
use crate::infrastructure::config::LoaderSettings;
use serde::Serialize;
use std::sync::{Arc, Mutex, RwLock, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Lifecycle of one dashboard view: Idle -> Loading -> Loaded, then
/// PromoVisible when a promo reveal delay is configured. There is no
/// failure state; the simulated load always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    PromoVisible,
}

/// The view-state slots a presentation layer reads. All three data slots
/// are published together with the Loaded transition in a single step, so
/// readers never see a partially populated combination.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardView {
    pub state: LoadState,
    pub creators: Vec<Creator>,
    pub growth: Vec<GrowthDataPoint>,
    pub engagement: Option<EngagementStats>,
}

/// Drives the load lifecycle for one dashboard view. Each view owns its
/// own loader and slots; nothing is shared across instances. Dropping the
/// loader cancels any pending timed transition.
pub struct DashboardLoader {
    repository: Arc<dyn CreatorRepository>,
    settings: LoaderSettings,
    view: Arc<RwLock<DashboardView>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl DashboardLoader {
    pub fn new(repository: Arc<dyn CreatorRepository>, settings: LoaderSettings) -> Self {
        Self {
            repository,
            settings,
            view: Arc::new(RwLock::new(DashboardView::default())),
            task: Mutex::new(None),
        }
    }

    /// Handle to the view-state slots for readers.
    pub fn view(&self) -> Arc<RwLock<DashboardView>> {
        self.view.clone()
    }

    /// Clone of the current view state.
    pub fn snapshot(&self) -> DashboardView {
        self.view.read().expect("view state lock poisoned").clone()
    }

    /// Start (or restart) a load cycle. Any in-flight cycle is aborted and
    /// the slots are cleared first, so re-activation always restarts the
    /// machine from the beginning.
    pub fn activate(&self) {
        let mut task = self.task.lock().expect("loader task lock poisoned");
        if let Some(handle) = task.take() {
            handle.abort();
        }
        {
            let mut view = self.view.write().expect("view state lock poisoned");
            *view = DashboardView {
                state: LoadState::Loading,
                ..DashboardView::default()
            };
        }

        let repository = self.repository.clone();
        // The spawned task holds only a weak handle to the slots; a timer
        // that fires after teardown discards its write instead of crashing.
        let slots = Arc::downgrade(&self.view);
        let load_delay = Duration::from_millis(self.settings.load_delay_ms);
        let promo_delay = self.settings.promo_delay_ms.map(Duration::from_millis);
        *task = Some(tokio::spawn(run_load_cycle(
            repository,
            slots,
            load_delay,
            promo_delay,
        )));
    }

    /// Close the promotional modal. Display returns to Loaded; the data
    /// slots are untouched and no reload is triggered.
    pub fn dismiss_promo(&self) {
        let mut view = self.view.write().expect("view state lock poisoned");
        if view.state == LoadState::PromoVisible {
            view.state = LoadState::Loaded;
        }
    }
}

impl Drop for DashboardLoader {
    fn drop(&mut self) {
        if let Ok(mut task) = self.task.lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }
}

async fn run_load_cycle(
    repository: Arc<dyn CreatorRepository>,
    slots: Weak<RwLock<DashboardView>>,
    load_delay: Duration,
    promo_delay: Option<Duration>,
) {
    tokio::time::sleep(load_delay).await;

    let creators = match repository.fetch_creators().await {
        Ok(creators) => creators,
        Err(e) => {
            tracing::error!("failed to fetch creators: {e}");
            return;
        }
    };
    let growth = match repository.fetch_growth_series().await {
        Ok(growth) => growth,
        Err(e) => {
            tracing::error!("failed to fetch growth series: {e}");
            return;
        }
    };
    let engagement = match repository.fetch_engagement_stats().await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("failed to fetch engagement stats: {e}");
            return;
        }
    };

    {
        let Some(view) = slots.upgrade() else {
            return;
        };
        // Single write-lock acquisition: all three slots and the Loaded
        // transition become visible as one step.
        let mut view = view.write().expect("view state lock poisoned");
        tracing::debug!(
            "publishing dashboard data: {} creators, {} growth points",
            creators.len(),
            growth.len()
        );
        view.creators = creators;
        view.growth = growth;
        view.engagement = Some(engagement);
        view.state = LoadState::Loaded;
    }

    let Some(promo_delay) = promo_delay else {
        return;
    };
    tokio::time::sleep(promo_delay).await;
    let Some(view) = slots.upgrade() else {
        return;
    };
    let mut view = view.write().expect("view state lock poisoned");
    if view.state == LoadState::Loaded {
        view.state = LoadState::PromoVisible;
    }
}
