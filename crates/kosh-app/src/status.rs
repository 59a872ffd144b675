use std::sync::Arc;
use std::time::SystemTime;

use kosh_types::LoadStatus;
use tokio::sync::RwLock;

/// Dictionary load bookkeeping
#[derive(Clone, Debug, Default)]
pub struct LoadState {
    pub current: Option<LoadStatus>,
    pub attempts: u64,
    pub failures: u64,
    pub loaded_at: Option<SystemTime>,
}

/// Application status
#[derive(Clone)]
pub struct AppStatus {
    pub load: Arc<RwLock<LoadState>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            load: Arc::new(RwLock::new(LoadState::default())),
        }
    }

    pub async fn record(&self, status: &LoadStatus) {
        let mut load = self.load.write().await;
        match status {
            LoadStatus::Loading { .. } => load.attempts += 1,
            LoadStatus::Ready { .. } => load.loaded_at = Some(SystemTime::now()),
            LoadStatus::Failed { .. } => load.failures += 1,
        }
        load.current = Some(status.clone());
    }

    pub async fn is_ready(&self) -> bool {
        self.load
            .read()
            .await
            .current
            .as_ref()
            .is_some_and(LoadStatus::is_ready)
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
