//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::engine::ConverterHolder;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pub config: Config,
    pub converter: ConverterHolder,
}

impl AppState {
    /// Create a new application state
    ///
    /// The converter is not constructed here; it is built lazily by
    /// [`ConverterHolder::get_or_init`], either from the startup pre-warm
    /// or from the first extraction request.
    pub fn new(config: Config) -> Self {
        let converter = ConverterHolder::new(config.pipeline.options());
        Self {
            inner: Arc::new(AppStateInner { config, converter }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the converter holder
    pub fn converter(&self) -> &ConverterHolder {
        &self.inner.converter
    }
}
