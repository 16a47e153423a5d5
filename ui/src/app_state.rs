use std::ops::Deref;
use std::sync::Arc;

use crate::config::SiteConfig;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub config: SiteConfig,
}

/// Immutable, cheaply cloned state shared with every component.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self(Arc::new(AppStateData { config }))
    }

    /// Absolute URL for a CDN asset path.
    pub fn asset(&self, path: &str) -> String {
        self.config.asset_url(path)
    }
}
