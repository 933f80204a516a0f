use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::domain::category::Category;
use crate::domain::ids::{ArtistId, ArtworkId, CollectionId};

/// Tipo de medio con el que se presenta una obra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
  #[default]
  Image,
  Video,
}

impl MediaType {
  pub fn key(&self) -> &'static str {
    match self {
      MediaType::Image => "image",
      MediaType::Video => "video",
    }
  }
}

impl fmt::Display for MediaType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid media type: {input}")]
pub struct MediaTypeParseError {
  pub input: String,
}

impl FromStr for MediaType {
  type Err = MediaTypeParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "image" => Ok(MediaType::Image),
      "video" => Ok(MediaType::Video),
      _ => Err(MediaTypeParseError { input: s.to_string() }),
    }
  }
}

/// Una obra del catálogo.
///
/// La identidad es inmutable. El contador `likes` es la base sembrada por el
/// servidor: el "me gusta" del visitante se superpone en la vista (ver
/// [`crate::services::format::displayed_likes`]) y nunca modifica este campo.
///
/// Los campos opcionales tienen un valor por defecto explícito (ausente) para
/// que el estado persistido antiguo siga siendo legible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
  /// Identificador único de la obra.
  pub id: ArtworkId,

  // --- Relaciones ---
  /// Artista autor.
  pub artist_id: ArtistId,

  /// Colección a la que pertenece, si la hay.
  #[serde(default)]
  pub collection_id: Option<CollectionId>,

  // --- Presentación ---
  pub title: String,
  pub description: String,

  /// Precio fijo en euros enteros.
  pub price: u32,

  pub media_type: MediaType,
  pub media_url: String,

  /// Contador base de "me gusta".
  pub likes: u32,

  /// Tiempo medio de visionado, en segundos.
  pub average_view_time: u32,

  /// Categoría editorial; sin ella la obra cae en el cubo `autre`.
  #[serde(default)]
  pub category: Option<Category>,

  /// Año declarado por el exponente (texto libre: "2024", "circa 1990"...).
  #[serde(default)]
  pub year: Option<String>,

  /// Nombre a mostrar en lugar del nombre del artista resuelto.
  #[serde(default)]
  pub artist_display_name: Option<String>,
}
