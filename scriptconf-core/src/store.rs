use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::paths;

/// JSON object holding the persisted settings of one script.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Zero-argument source of extra key/value pairs, consulted only while
/// initializing a fresh config file.
pub type InputProvider = Box<dyn Fn() -> ConfigMap>;

// Constant keys stamped into every newly created config file.
#[derive(Serialize)]
struct BaseConfig<'a> {
    app: &'a str,
    version: &'a str,
}

pub struct StoreOptions {
    /// Identifier the file name is derived from.
    pub name: String,
    /// Version stamped into newly created config data.
    pub version: String,
    /// Directory holding the config file; defaults to [`paths::project_root`].
    pub root: Option<PathBuf>,
    /// Input providers, invoked in order during initialization.
    pub providers: Vec<InputProvider>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            name: "script".to_string(),
            version: "0.1.0".to_string(),
            root: None,
            providers: Vec::new(),
        }
    }
}

/// One named JSON configuration file under the project root.
///
/// The backing file is created lazily: [`ConfigStore::read`] initializes it
/// on first use. `data` mirrors the file contents after the last successful
/// read or initialize.
pub struct ConfigStore {
    name: String,
    version: String,
    path: PathBuf,
    providers: Vec<InputProvider>,
    data: ConfigMap,
}

impl ConfigStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(StoreOptions {
            name: name.into(),
            ..StoreOptions::default()
        })
    }

    /// Construction has no side effects; the path is fixed here and never
    /// changes afterwards.
    pub fn with_options(opts: StoreOptions) -> Self {
        let root = opts.root.unwrap_or_else(paths::project_root);
        let path = root.join(format!("{}.json", opts.name));
        Self {
            name: opts.name,
            version: opts.version,
            path,
            providers: opts.providers,
            data: ConfigMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Contents of the last successful read or initialize; empty before that.
    pub fn data(&self) -> &ConfigMap {
        &self.data
    }

    /// Read the config file, creating it first when it does not exist yet.
    pub fn read(&mut self) -> Result<ConfigMap, ConfigError> {
        info!("reading config file from {}", self.path.display());
        let data = if self.path.is_dir() {
            return Err(ConfigError::NotAFile {
                path: self.path.clone(),
            });
        } else if self.path.is_file() {
            debug!("{} is a file", self.path.display());
            let text = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| ConfigError::Malformed {
                path: self.path.clone(),
                source,
            })?
        } else {
            debug!("{} does not exist", self.path.display());
            self.initialize()?
        };
        self.data = data.clone();
        Ok(data)
    }

    /// Build the initial config and write it to disk, fully overwriting any
    /// existing file.
    pub fn initialize(&mut self) -> Result<ConfigMap, ConfigError> {
        info!("initializing {}", self.name);
        let base = BaseConfig {
            app: &self.name,
            version: &self.version,
        };
        let Ok(Value::Object(mut data)) = serde_json::to_value(base) else {
            unreachable!("a struct of strings serializes to an object")
        };
        // Later providers win on key collisions, the constants included.
        for provider in &self.providers {
            for (key, value) in provider() {
                data.insert(key, value);
            }
        }
        let text = serde_json::to_string(&data).expect("serialize");
        fs::write(&self.path, text).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("{} is created", self.path.display());
        self.data = data.clone();
        Ok(data)
    }
}
