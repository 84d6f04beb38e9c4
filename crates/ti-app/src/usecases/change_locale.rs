//! Use case for switching the UI locale.

use std::sync::Arc;

use ti_core::i18n::Locale;
use ti_core::ports::LocaleStorePort;

/// Persists the newly selected locale.
pub struct ChangeLocale {
    store: Arc<dyn LocaleStorePort>,
}

impl ChangeLocale {
    pub fn new(store: Arc<dyn LocaleStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, locale: Locale) -> anyhow::Result<()> {
        self.store.store(locale).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        stored: Mutex<Vec<Locale>>,
    }

    #[async_trait]
    impl LocaleStorePort for RecordingStore {
        async fn load(&self) -> anyhow::Result<Option<Locale>> {
            Ok(self.stored.lock().unwrap().last().copied())
        }

        async fn store(&self, locale: Locale) -> anyhow::Result<()> {
            self.stored.lock().unwrap().push(locale);
            Ok(())
        }
    }

    #[tokio::test]
    async fn every_change_is_persisted() {
        let store = Arc::new(RecordingStore::default());
        let change = ChangeLocale::new(store.clone());

        change.execute(Locale::Id).await.unwrap();
        change.execute(Locale::En).await.unwrap();

        assert_eq!(*store.stored.lock().unwrap(), vec![Locale::Id, Locale::En]);
    }
}
