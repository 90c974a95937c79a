//! Request-scoped context and the localization bridge
//!
//! Failure messages come in two flavors: plain strings used verbatim, and
//! message identifiers a localized chain resolves through a [`Localizer`]
//! carried on the per-call [`Context`]. The context key the localizer is
//! looked up under is process-wide configuration: set it once during
//! startup, before any validation traffic.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Default context key the localizer is looked up under.
pub const DEFAULT_LOCALIZER_KEY: &str = "i18n-localizer-key";

static LOCALIZER_KEY: OnceLock<String> = OnceLock::new();

/// Set the process-wide localizer context key. First call wins; later calls
/// return `false` and leave the key unchanged. Call this during startup,
/// never concurrently with in-flight validations.
pub fn init_localizer_key(key: impl Into<String>) -> bool {
    LOCALIZER_KEY.set(key.into()).is_ok()
}

/// The active localizer context key.
pub fn localizer_key() -> &'static str {
    LOCALIZER_KEY
        .get()
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOCALIZER_KEY)
}

/// Resolves a message identifier to a display string for the active locale.
pub trait Localizer: Send + Sync {
    fn localize(&self, id: &str) -> String;
}

/// Caller-supplied value bag passed through a validation call.
///
/// The engine itself only consults it for the localizer lookup; anything
/// else stored here is for the caller's own rules.
#[derive(Clone, Default)]
pub struct Context {
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`.
    pub fn with_value<V: Any + Send + Sync>(mut self, key: impl Into<String>, value: V) -> Self {
        self.values.insert(key.into(), Arc::new(value));
        self
    }

    /// Fetch a value stored under `key`, if it has the expected type.
    pub fn value<V: Any + Send + Sync>(&self, key: &str) -> Option<&V> {
        self.values.get(key)?.downcast_ref::<V>()
    }

    /// Bind a localizer under the configured localizer key.
    pub fn with_localizer<L: Localizer + 'static>(self, localizer: L) -> Self {
        self.with_value(localizer_key(), Arc::new(localizer) as Arc<dyn Localizer>)
    }

    /// Resolve a message identifier. Falls back to the identifier itself
    /// when no conforming localizer is bound under the configured key.
    pub fn localize(&self, id: &str) -> String {
        match self.value::<Arc<dyn Localizer>>(localizer_key()) {
            Some(localizer) => localizer.localize(id),
            None => id.to_string(),
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}
