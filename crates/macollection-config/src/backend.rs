use crate::io::atomic_write_str;
use crate::paths::{ConfigError, MacollectionPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Escritura con toml_edit para preservar comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: MacollectionPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: MacollectionPaths) -> Self {
    Self { paths }
  }

  pub fn config_file(&self) -> PathBuf {
    self.paths.config_file()
  }

  /// Como [`ConfigBackend::load_section`], pero un fichero o una sección
  /// ausentes devuelven `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        log::debug!("no config file at {}, using defaults for [{section}]", path.display());
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si todavía no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección se serializa con `toml` (serde) y se vuelve a leer como
    //    tabla de toml_edit.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .as_item()
      .clone();

    // 3) Reemplazo de la sección; el resto del documento queda intacto.
    doc[section] = section_item;

    atomic_write_str(&path, &doc.to_string())?;
    log::debug!("saved section [{section}] to {}", path.display());

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    tags: Vec<String>,
    limit: Option<u32>,
  }

  fn backend(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(MacollectionPaths::rooted(dir).unwrap())
  }

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let loaded: Sample = backend(dir.path()).load_section_with_default("sample").unwrap();
    assert_eq!(loaded, Sample::default());
  }

  #[test]
  fn strict_load_reports_missing_section() {
    let dir = tempdir().unwrap();
    let backend = backend(dir.path());
    backend.save_section("other", &Sample::default()).unwrap();

    let err = backend.load_section::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Other(_)));
  }

  #[test]
  fn save_then_load_round_trips_and_keeps_comments() {
    let dir = tempdir().unwrap();
    let backend = backend(dir.path());
    fs::write(backend.config_file(), "# notas del usuario\n[storage]\nseed_demo_catalog = true\n").unwrap();

    let value = Sample { name: "lina".into(), tags: vec!["neon".into()], limit: Some(3) };
    backend.save_section("sample", &value).unwrap();

    let loaded: Sample = backend.load_section("sample").unwrap();
    assert_eq!(loaded, value);

    let raw = fs::read_to_string(backend.config_file()).unwrap();
    assert!(raw.contains("# notas del usuario"));
    assert!(raw.contains("seed_demo_catalog = true"));
  }
}
