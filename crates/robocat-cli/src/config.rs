use anyhow::{Context, Result};
use robocat_engine::CatalogStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional user configuration (`config.toml` in the robocat data
/// directory)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default catalog file used when --data is not given
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("robocat").join("config.toml"))
    }
}

/// Resolve the catalog store based on priority:
/// 1. Explicit --data path
/// 2. ROBOCAT_CATALOG environment variable
/// 3. catalog_path from config.toml
/// 4. The dataset bundled into the binary
pub fn resolve_store(explicit: Option<&Path>) -> Result<CatalogStore> {
    if let Some(path) = explicit {
        return load_store(path);
    }

    if let Ok(env_path) = std::env::var("ROBOCAT_CATALOG") {
        return load_store(Path::new(&env_path));
    }

    let config = Config::load()?;
    if let Some(path) = &config.catalog_path {
        return load_store(path);
    }

    Ok(CatalogStore::bundled().clone())
}

fn load_store(path: &Path) -> Result<CatalogStore> {
    CatalogStore::load(path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))
}
