use crate::domain::ports::KeyStore;
use crate::utils::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "store.json";

/// File-backed key-value store: a single flat JSON object under the data
/// directory. Missing file or key reads as absent.
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_path: String,
}

impl LocalStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn store_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(STORE_FILE)
    }

    fn load_map(&self) -> Result<Map<String, Value>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(Map::new());
        }
        let data = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&data)?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

impl KeyStore for LocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.load_map()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), Value::String(value.to_string()));

        let path = self.store_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&Value::Object(map))?)?;
        Ok(())
    }
}
