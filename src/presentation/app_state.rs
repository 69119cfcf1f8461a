// Application state for HTTP handlers
use crate::application::dashboard_loader::DashboardLoader;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<DashboardLoader>,
}
