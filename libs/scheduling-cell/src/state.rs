use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::service::SchedulingService;

/// Shared handler state. The core assumes one caller at a time, so a single
/// lock serializes every command against both registries.
pub struct AppState {
    pub config: AppConfig,
    scheduler: RwLock<SchedulingService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let scheduler = RwLock::new(SchedulingService::new(&config));
        Self { config, scheduler }
    }

    pub fn scheduler(&self) -> Result<RwLockReadGuard<'_, SchedulingService>, AppError> {
        self.scheduler
            .read()
            .map_err(|_| AppError::Internal("scheduler state lock poisoned".to_string()))
    }

    pub fn scheduler_mut(&self) -> Result<RwLockWriteGuard<'_, SchedulingService>, AppError> {
        self.scheduler
            .write()
            .map_err(|_| AppError::Internal("scheduler state lock poisoned".to_string()))
    }
}
