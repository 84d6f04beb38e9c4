//! Use case for resolving the startup locale.

use std::sync::Arc;

use ti_core::i18n::Locale;
use ti_core::ports::LocaleStorePort;

/// Reads the persisted locale, falling back to the default when nothing
/// valid is stored.
pub struct GetLocale {
    store: Arc<dyn LocaleStorePort>,
}

impl GetLocale {
    pub fn new(store: Arc<dyn LocaleStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Locale {
        match self.store.load().await {
            Ok(Some(locale)) => locale,
            Ok(None) => Locale::DEFAULT,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read persisted locale");
                Locale::DEFAULT
            }
        }
    }
}
