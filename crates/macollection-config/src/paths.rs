use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable, tests).
pub const BASE_DIR_ENV: &str = "MACOLLECTION_BASE_DIR";

const CONFIG_FILE: &str = "macollection.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios de la aplicación. Existen en disco una vez construido.
#[derive(Debug, Clone)]
pub struct MacollectionPaths {
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl MacollectionPaths {
  /// `MACOLLECTION_BASE_DIR` si está definida; si no, los directorios de
  /// usuario de la plataforma.
  pub fn detect() -> Result<Self, ConfigError> {
    match std::env::var_os(BASE_DIR_ENV) {
      Some(base) if !base.is_empty() => Self::rooted(base),
      _ => {
        let dirs = ProjectDirs::from("com", "macollection", "macollection").ok_or(ConfigError::Directories)?;
        Self::create(dirs.config_dir(), dirs.data_dir())
      }
    }
  }

  /// `config/` y `data/` bajo una misma raíz.
  pub fn rooted(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base = base.into();
    Self::create(&base.join("config"), &base.join("data"))
  }

  fn create(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
    for dir in [config_dir, data_dir] {
      std::fs::create_dir_all(dir)?;
    }
    Ok(Self { config_dir: config_dir.to_path_buf(), data_dir: data_dir.to_path_buf() })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn rooted_creates_both_dirs() {
    let tmp = tempdir().unwrap();
    let paths = MacollectionPaths::rooted(tmp.path().join("portable")).unwrap();

    assert!(paths.config_dir.is_dir());
    assert!(paths.data_dir.is_dir());
    assert_eq!(paths.config_file(), tmp.path().join("portable/config/macollection.toml"));
  }

  #[test]
  fn detect_honours_base_dir_variable() {
    let tmp = tempdir().unwrap();
    let previous = std::env::var_os(BASE_DIR_ENV);
    unsafe { std::env::set_var(BASE_DIR_ENV, tmp.path()) };

    let detected = MacollectionPaths::detect();

    match previous {
      Some(v) => unsafe { std::env::set_var(BASE_DIR_ENV, v) },
      None => unsafe { std::env::remove_var(BASE_DIR_ENV) },
    }

    let paths = detected.unwrap();
    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert_eq!(paths.data_dir, tmp.path().join("data"));
  }
}
