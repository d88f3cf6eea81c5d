use std::sync::Arc;

use super::data::DataGateway;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn DataGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &dyn DataGateway {
        self.gateway.as_ref()
    }
}
