use std::sync::Arc;

use crate::modules::dashboard::adapters::outbound::backend_api::BackendApi;
use crate::modules::dashboard::use_cases::load_dashboard::handler::LoadDashboardHandler;
use crate::modules::dashboard::use_cases::manage_quotes::handler::ManageQuotesHandler;

#[derive(Clone)]
pub struct AppState {
    pub load_dashboard: Arc<LoadDashboardHandler>,
    pub manage_quotes: Arc<ManageQuotesHandler>,
}

impl AppState {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self {
            load_dashboard: Arc::new(LoadDashboardHandler::new(backend.clone())),
            manage_quotes: Arc::new(ManageQuotesHandler::new(backend)),
        }
    }
}
