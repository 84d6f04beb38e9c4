//! Locale store port - persisted UI language

use async_trait::async_trait;

use crate::i18n::Locale;

/// Persistence for the selected UI locale.
///
/// Read once at startup, written on every change. An unreadable or invalid
/// stored value is reported as `None`, not an error; callers fall back to
/// the default locale.
#[async_trait]
pub trait LocaleStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<Locale>>;

    async fn store(&self, locale: Locale) -> anyhow::Result<()>;
}
