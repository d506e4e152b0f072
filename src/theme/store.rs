//! Persistence of the last selected theme (a single key/value pair).

use crate::error::Result;

pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, theme: &str) -> Result<()>;
}

/// Keeps the selection for the lifetime of the page only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(theme: &str) -> Self {
        Self {
            value: Some(theme.to_string()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, theme: &str) -> Result<()> {
        self.value = Some(theme.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::ThemeStore;
    use crate::error::{PageError, Result};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// Desktop persistence: a JSON object of key -> theme in a single file.
    #[derive(Clone, Debug)]
    pub struct FileStore {
        path: PathBuf,
        key: String,
    }

    impl FileStore {
        pub fn new(path: impl AsRef<Path>, key: &str) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
                key: key.to_string(),
            }
        }

        /// `<config dir>/portfolio/settings.json`, when the platform has a config dir.
        pub fn in_config_dir(key: &str) -> Option<Self> {
            dirs::config_dir().map(|d| Self::new(d.join("portfolio").join("settings.json"), key))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read(&self) -> Result<HashMap<String, String>> {
            if !self.path.exists() {
                return Ok(HashMap::new());
            }
            let raw = std::fs::read_to_string(&self.path).map_err(|e| PageError::Storage(e.to_string()))?;
            serde_json::from_str(&raw).map_err(|e| PageError::Storage(e.to_string()))
        }
    }

    impl ThemeStore for FileStore {
        fn load(&self) -> Result<Option<String>> {
            Ok(self.read()?.remove(&self.key))
        }

        fn save(&mut self, theme: &str) -> Result<()> {
            // A corrupt file is left untouched; other keys live in it too.
            let mut stored = self.read()?;
            stored.insert(self.key.clone(), theme.to_string());
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| PageError::Storage(e.to_string()))?;
            }
            let json = serde_json::to_string_pretty(&stored).map_err(|e| PageError::Storage(e.to_string()))?;
            std::fs::write(&self.path, json).map_err(|e| PageError::Storage(e.to_string()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::ThemeStore;
    use crate::error::{PageError, Result};
    use crate::platform::js_error;

    /// Browser `localStorage` under a single key.
    #[derive(Clone, Debug)]
    pub struct LocalStorageStore {
        key: String,
    }

    impl LocalStorageStore {
        pub fn new(key: &str) -> Self {
            Self { key: key.to_string() }
        }

        fn storage(&self) -> Result<web_sys::Storage> {
            web_sys::window()
                .ok_or_else(|| PageError::Storage("no window".to_string()))?
                .local_storage()
                .map_err(js_error)?
                .ok_or_else(|| PageError::Storage("localStorage unavailable".to_string()))
        }
    }

    impl ThemeStore for LocalStorageStore {
        fn load(&self) -> Result<Option<String>> {
            self.storage()?.get_item(&self.key).map_err(js_error)
        }

        fn save(&mut self, theme: &str) -> Result<()> {
            self.storage()?.set_item(&self.key, theme).map_err(js_error)
        }
    }
}
