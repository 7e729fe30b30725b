use std::sync::Arc;

use harvest_core::validation::{FormContext, RuleSet, Validator};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Validator for `context`, honouring the configured typo matching.
    pub fn validator(&self, context: FormContext) -> Validator {
        Validator::new(RuleSet::for_context(context).with_typo_match(self.config.typo_match))
    }
}
