//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::delegated::DelegatedMultiplier;
use crate::error::ConfigError;
use crate::naive::NaiveMultiplier;
use crate::options::Options;
use crate::strassen::StrassenMultiplier;
use crate::strategy::Multiplier;

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, ConfigError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    opts: Options,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a factory using default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a factory whose Strassen strategies use the given thresholds.
    #[must_use]
    pub fn with_options(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier>, ConfigError> {
        match name {
            "naive" => Ok(Arc::new(NaiveMultiplier::new())),
            "delegated" | "blas" => Ok(Arc::new(DelegatedMultiplier::new())),
            "strassen" => Ok(Arc::new(StrassenMultiplier::new(self.opts.strassen_threshold))),
            "strassen-par" => Ok(Arc::new(StrassenMultiplier::parallel(
                self.opts.strassen_threshold,
                self.opts.parallel_threshold,
            ))),
            _ => Err(ConfigError::UnknownStrategy(name.to_string())),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, ConfigError> {
        if let Some(m) = self.cache.read().get(name) {
            return Ok(Arc::clone(m));
        }

        let m = self.create_multiplier(name)?;
        self.cache.write().insert(name.to_string(), Arc::clone(&m));
        Ok(m)
    }

    fn available(&self) -> Vec<&str> {
        vec!["naive", "delegated", "strassen", "strassen-par"]
    }
}
