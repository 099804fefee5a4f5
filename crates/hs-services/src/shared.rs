//! Thread-safe handle to one engine
//!
//! The whole engine sits behind a single exclusive lock: selecting an
//! employee and assigning it, or touching a task and its employee, always
//! happens under one guard.

use std::sync::Arc;

use hs_core::config::AppConfig;
use parking_lot::{Mutex, MutexGuard};

use crate::engine::Engine;

/// Cloneable, shareable engine handle
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Engine::from_config(config))
    }

    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut engine)
    }

    /// Hold the lock across several calls
    pub fn lock(&self) -> MutexGuard<'_, Engine> {
        self.inner.lock()
    }
}

impl From<Engine> for SharedEngine {
    fn from(engine: Engine) -> Self {
        Self::new(engine)
    }
}
