use std::sync::Arc;

use shyft_core::application::ShyftService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ShyftService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ShyftService) -> Self {
        Self { args, service }
    }
}
