//! File-based locale store
//!
//! Persists the selected UI locale to a small file in the application data
//! directory, the desktop analog of the browser's local-storage key.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use ti_core::i18n::Locale;
use ti_core::ports::LocaleStorePort;

pub const DEFAULT_LOCALE_FILE: &str = ".language";

pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    /// Create a store with a custom file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store with defaults under a base directory
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_LOCALE_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl LocaleStorePort for FileLocaleStore {
    async fn load(&self) -> anyhow::Result<Option<Locale>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).await?;
        // Anything unparseable reads as "nothing stored"; callers fall back
        // to the default locale.
        Ok(content.trim().parse().ok())
    }

    async fn store(&self, locale: Locale) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;
        fs::write(&self.path, locale.to_string())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write locale file: {}", e))?;
        Ok(())
    }
}
