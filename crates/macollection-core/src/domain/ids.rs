use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador estable de un artista (`artist-lina-moreau`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
  pub fn new(id: impl Into<String>) -> Self {
    ArtistId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ArtistId {
  fn from(s: &str) -> Self {
    ArtistId(s.to_string())
  }
}

impl From<String> for ArtistId {
  fn from(s: String) -> Self {
    ArtistId(s)
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Identificador de una colección editorial.
///
/// Las colecciones creadas desde el tablero del exponente reciben un id
/// generado con el prefijo `user-col-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
  pub fn new(id: impl Into<String>) -> Self {
    CollectionId(id.into())
  }

  /// Genera un id único para una colección creada localmente.
  pub fn generate() -> Self {
    CollectionId(format!("user-col-{}", Uuid::new_v4()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for CollectionId {
  fn from(s: &str) -> Self {
    CollectionId(s.to_string())
  }
}

impl From<String> for CollectionId {
  fn from(s: String) -> Self {
    CollectionId(s)
  }
}

impl fmt::Display for CollectionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Identificador único de una obra.
///
/// Las obras subidas por un exponente reciben el prefijo `user-art-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(String);

impl ArtworkId {
  pub fn new(id: impl Into<String>) -> Self {
    ArtworkId(id.into())
  }

  /// Genera un id único para una obra creada localmente.
  pub fn generate() -> Self {
    ArtworkId(format!("user-art-{}", Uuid::new_v4()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ArtworkId {
  fn from(s: &str) -> Self {
    ArtworkId(s.to_string())
  }
}

impl From<String> for ArtworkId {
  fn from(s: String) -> Self {
    ArtworkId(s)
  }
}

impl fmt::Display for ArtworkId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
