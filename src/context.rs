use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::GenerationService;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub generator: Arc<dyn GenerationService>,
}

impl AppContext {
    pub fn new(config: AppConfig, generator: Arc<dyn GenerationService>) -> Self {
        Self { config, generator }
    }
}
