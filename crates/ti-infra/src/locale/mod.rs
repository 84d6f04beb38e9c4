pub mod file_store;

pub use file_store::{FileLocaleStore, DEFAULT_LOCALE_FILE};
