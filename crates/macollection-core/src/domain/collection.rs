use serde::{Deserialize, Serialize};

use crate::domain::ids::{ArtistId, CollectionId};

/// Sub-colección editorial de un artista (una serie de obras con un mismo
/// concepto).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
  pub id: CollectionId,
  /// Artista propietario.
  pub artist_id: ArtistId,
  pub title: String,
  pub concept: String,
}
