use macollection_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
  /// Fichero SQLite del catálogo.
  pub db_path: PathBuf,

  /// Sembrar el catálogo de demostración si la base está vacía.
  #[serde(default = "default_seed_demo_catalog")]
  pub seed_demo_catalog: bool,
}

fn default_seed_demo_catalog() -> bool {
  true
}

impl Default for StorageConfig {
  fn default() -> Self {
    let db_path = PATHS.data_dir.join("macollection.db");
    StorageConfig { db_path, seed_demo_catalog: default_seed_demo_catalog() }
  }
}

impl StorageConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("storage")?;
    CONFIG_BACKEND.save_section("storage", &cfg)?;
    Ok(cfg)
  }
}
