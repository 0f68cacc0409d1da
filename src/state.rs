use crate::store::UsageStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub usage_threshold: f64,
    pub store: Arc<Mutex<UsageStore>>,
}

impl AppState {
    pub fn new(usage_threshold: f64, store: UsageStore) -> Self {
        Self {
            usage_threshold,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
