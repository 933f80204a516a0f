use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Representa a un artista expuesto en el catálogo.
///
/// Es la identidad base a la que se atan colecciones y obras. El perfil que
/// edita un exponente se superpone a estos valores, no los reemplaza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre público.
  pub name: String,

  /// Biografía corta mostrada en el perfil.
  pub bio: String,

  /// URL del avatar.
  pub avatar_url: String,
}
