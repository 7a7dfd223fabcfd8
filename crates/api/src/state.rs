//! Shared application state for the Axum API server.

use courier_common::config::AppConfig;
use courier_dispatch::TaskQueue;
use courier_gateway::StatusProxy;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub queue: TaskQueue,
    pub proxy: StatusProxy,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(queue: TaskQueue, proxy: StatusProxy, config: AppConfig) -> Self {
        Self {
            queue,
            proxy,
            config,
        }
    }
}
