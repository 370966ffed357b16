//! Runtime log level changes

use hubwire_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, Registry, reload};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Errors from changing the active log filter
#[derive(Error, Debug)]
pub enum ReloadError {
    /// No subscriber has registered its filter handle yet
    #[error("logging has not been initialized")]
    NotInitialized,

    /// The subscriber owning the filter rejected the change or is gone
    #[error("failed to reload log filter: {0}")]
    Reload(#[from] reload::Error),
}

/// Access to the reloadable filter installed by [`init_logging`](crate::init_logging)
///
/// A process normally uses [`ReloadHandle::global`]; separate instances are
/// useful for subscribers scoped to a test or a thread.
#[derive(Default)]
pub struct ReloadHandle {
    filter: Mutex<Option<FilterHandle>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle shared by the whole process
    pub fn global() -> &'static ReloadHandle {
        static GLOBAL: OnceCell<ReloadHandle> = OnceCell::new();
        GLOBAL.get_or_init(ReloadHandle::new)
    }

    /// Register the filter handle of an installed subscriber
    ///
    /// Replaces any handle registered earlier.
    pub fn set_handle(&self, handle: FilterHandle) {
        *self.filter.lock() = Some(handle);
    }

    pub fn is_initialized(&self) -> bool {
        self.filter.lock().is_some()
    }

    /// Switch the active filter to `level` and everything more severe
    pub fn reload_level(&self, level: LogLevel) -> Result<(), ReloadError> {
        let filter = self.filter.lock();
        let handle = filter.as_ref().ok_or(ReloadError::NotInitialized)?;
        handle.reload(level_filter(level))?;
        Ok(())
    }

    /// Directives of the active filter, e.g. `"warn"`
    pub fn current_directives(&self) -> Result<String, ReloadError> {
        let filter = self.filter.lock();
        let handle = filter.as_ref().ok_or(ReloadError::NotInitialized)?;
        Ok(handle.with_current(|filter| filter.to_string())?)
    }
}

/// Filter enabling `level` and everything more severe
pub(crate) fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_str())
}
