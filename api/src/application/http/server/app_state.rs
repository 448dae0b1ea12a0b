use std::sync::Arc;

use siteguard_core::application::SiteGuardService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SiteGuardService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SiteGuardService) -> Self {
        Self { args, service }
    }
}
