use std::sync::Arc;

use lunchatron_core::application::LunchatronService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LunchatronService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LunchatronService) -> Self {
        Self { args, service }
    }
}
