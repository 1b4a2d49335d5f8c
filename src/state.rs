//! Shared application state for all routes.

use crate::config::YearLimits;
use crate::service::RuleSet;
use crate::store::MovieStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    /// Rules for `POST /movies`.
    pub create_rules: Arc<RuleSet>,
    /// Rules for `PATCH /movies/{id}`.
    pub update_rules: Arc<RuleSet>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, years: YearLimits) -> Self {
        Self {
            store,
            create_rules: Arc::new(RuleSet::for_create(&years)),
            update_rules: Arc::new(RuleSet::for_update(&years)),
        }
    }
}
