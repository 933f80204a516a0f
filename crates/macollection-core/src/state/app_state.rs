use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{ArtistId, Artwork, ArtworkId, CategoryFilter, Collection};
use crate::services::catalog::Catalog;
use crate::services::exhibitor::ExhibitorProfile;

/// Artista que se preselecciona al entrar al espacio exponente.
pub const DEFAULT_EXHIBITOR_ARTIST: &str = "artist-lina-moreau";

/// Rol de la sesión. No es autenticación real: es un modo de demostración.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  #[default]
  Visitor,
  Exhibitor,
}

/// Pantalla principal del visitante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
  #[default]
  Catalog,
  Immersive,
}

/// Qué muestra la vista inmersiva: el feed o el perfil de un artista.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImmersiveMode {
  #[default]
  Feed,
  Artist(ArtistId),
}

/// Parte del estado que sobrevive entre sesiones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedState {
  pub role: Role,
  pub is_exhibitor_authenticated: bool,
  pub exhibitor_artist_id: ArtistId,
  pub exhibitor_profile: ExhibitorProfile,
  pub exhibitor_collections: Vec<Collection>,
  pub user_artworks: Vec<Artwork>,
}

impl Default for PersistedState {
  fn default() -> Self {
    PersistedState {
      role: Role::Visitor,
      is_exhibitor_authenticated: false,
      exhibitor_artist_id: ArtistId::from(DEFAULT_EXHIBITOR_ARTIST),
      exhibitor_profile: ExhibitorProfile::default(),
      exhibitor_collections: Vec::new(),
      user_artworks: Vec::new(),
    }
  }
}

/// Estado completo de la aplicación.
///
/// Solo cambia a través de [`crate::state::reduce`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
  pub persisted: PersistedState,

  /// Orden actual del feed inmersivo.
  pub feed: Vec<Artwork>,
  pub liked: HashSet<ArtworkId>,

  pub active_offer: Option<ArtworkId>,
  pub active_detail: Option<ArtworkId>,

  pub immersive: ImmersiveMode,
  pub view: View,

  pub query: String,
  pub filter: CategoryFilter,
}

impl AppState {
  /// Estado inicial a partir de lo persistido: el feed arranca con todas
  /// las obras (base + locales).
  pub fn new(catalog: &Catalog, persisted: PersistedState) -> Self {
    let feed = catalog.all_artworks(&persisted.user_artworks);
    AppState { persisted, feed, ..Default::default() }
  }

  pub fn is_liked(&self, id: &ArtworkId) -> bool {
    self.liked.contains(id)
  }
}
