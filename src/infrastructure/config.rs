use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub loader: LoaderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoaderSettings {
    /// Simulated load latency before the dashboard data is published.
    pub load_delay_ms: u64,
    /// Delay after publication before the promotional modal is revealed.
    /// Absent for the plain dashboard variant, which shows no promo.
    #[serde(default)]
    pub promo_delay_ms: Option<u64>,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
