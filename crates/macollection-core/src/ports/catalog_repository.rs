use crate::domain::{Artist, ArtistId, Artwork, Collection};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port del almacén de catálogo (artistas, colecciones y obras).
///
/// Es el "almacén remoto" de la aplicación: lecturas completas al arrancar y
/// altas/actualizaciones puntuales por id. Nunca se borra nada.
pub trait CatalogRepository {
  // --- Comandos (escritura, upsert por id) ---
  fn save_artist(&self, artist: &Artist) -> Result<(), RepoError>;
  fn save_collection(&self, collection: &Collection) -> Result<(), RepoError>;
  fn save_artwork(&self, artwork: &Artwork) -> Result<(), RepoError>;

  // --- Consultas ---
  fn find_artist(&self, id: &ArtistId) -> Result<Option<Artist>, RepoError>;

  fn list_artists(&self) -> Result<Vec<Artist>, RepoError>;
  fn list_collections(&self) -> Result<Vec<Collection>, RepoError>;
  fn list_artworks(&self) -> Result<Vec<Artwork>, RepoError>;

  fn collections_for_artist(&self, id: &ArtistId) -> Result<Vec<Collection>, RepoError>;
  fn artworks_for_artist(&self, id: &ArtistId) -> Result<Vec<Artwork>, RepoError>;
}
