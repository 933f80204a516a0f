//! Índice en memoria del catálogo base.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::{Artist, ArtistId, Artwork, ArtworkId, Collection, CollectionId};
use crate::errors::CoreError;
use crate::ports::CatalogRepository;

/// Resolución de artistas por id.
///
/// Es la única dependencia del filtro de catálogo hacia las tablas de
/// consulta.
pub trait ArtistLookup {
  fn artist(&self, id: &ArtistId) -> Option<&Artist>;
}

impl ArtistLookup for HashMap<ArtistId, Artist> {
  fn artist(&self, id: &ArtistId) -> Option<&Artist> {
    self.get(id)
  }
}

/// Problemas de calidad de datos detectados al cargar el catálogo.
///
/// No interrumpen nada: las referencias colgantes se toleran como ausencias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
  DanglingArtist { artwork: ArtworkId, artist: ArtistId },
  DanglingCollection { artwork: ArtworkId, collection: CollectionId },
  CollectionOwnerMismatch { artwork: ArtworkId, collection: CollectionId, owner: ArtistId },
  DuplicateArtworkId(ArtworkId),
}

impl fmt::Display for DataWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DataWarning::DanglingArtist { artwork, artist } => {
        write!(f, "artwork {artwork} references unknown artist {artist}")
      }
      DataWarning::DanglingCollection { artwork, collection } => {
        write!(f, "artwork {artwork} references unknown collection {collection}")
      }
      DataWarning::CollectionOwnerMismatch { artwork, collection, owner } => {
        write!(f, "artwork {artwork} sits in collection {collection} owned by {owner}")
      }
      DataWarning::DuplicateArtworkId(id) => write!(f, "duplicate artwork id {id}"),
    }
  }
}

/// Una colección junto a sus obras, para el perfil de artista.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionGroup {
  pub collection: Collection,
  pub artworks: Vec<Artwork>,
}

/// Perfil público de un artista: sus colecciones no vacías.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistProfile {
  pub artist: Artist,
  pub collections: Vec<CollectionGroup>,
}

/// Conjunto base de artistas, colecciones y obras.
///
/// Se carga una sola vez. Lo que crea el exponente vive aparte (en el estado
/// de la aplicación) y se une a la base con [`Catalog::all_artworks`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  artists: Vec<Artist>,
  collections: Vec<Collection>,
  artworks: Vec<Artwork>,
  artists_by_id: HashMap<ArtistId, usize>,
  collections_by_id: HashMap<CollectionId, usize>,
}

impl Catalog {
  pub fn new(artists: Vec<Artist>, collections: Vec<Collection>, artworks: Vec<Artwork>) -> Self {
    // Ante ids repetidos gana el primero, como un `find` lineal.
    let mut artists_by_id = HashMap::new();
    for (idx, artist) in artists.iter().enumerate() {
      artists_by_id.entry(artist.id.clone()).or_insert(idx);
    }
    let mut collections_by_id = HashMap::new();
    for (idx, collection) in collections.iter().enumerate() {
      collections_by_id.entry(collection.id.clone()).or_insert(idx);
    }

    Self { artists, collections, artworks, artists_by_id, collections_by_id }
  }

  /// Carga el catálogo completo desde el repositorio y registra los avisos
  /// de calidad de datos.
  pub fn load<R: CatalogRepository + ?Sized>(repo: &R) -> Result<Self, CoreError> {
    let catalog = Self::new(repo.list_artists()?, repo.list_collections()?, repo.list_artworks()?);

    for warning in catalog.audit() {
      log::warn!("catalog data: {warning}");
    }
    log::info!(
      "catalog loaded: {} artists, {} collections, {} artworks",
      catalog.artists.len(),
      catalog.collections.len(),
      catalog.artworks.len()
    );

    Ok(catalog)
  }

  pub fn artists(&self) -> &[Artist] {
    &self.artists
  }

  pub fn collections(&self) -> &[Collection] {
    &self.collections
  }

  /// Obras base, en el orden de carga.
  pub fn artworks(&self) -> &[Artwork] {
    &self.artworks
  }

  pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
    self.collections_by_id.get(id).map(|&idx| &self.collections[idx])
  }

  pub fn collections_for_artist(&self, id: &ArtistId) -> Vec<&Collection> {
    self.collections.iter().filter(|c| &c.artist_id == id).collect()
  }

  pub fn artworks_for_collection(&self, id: &CollectionId) -> Vec<&Artwork> {
    self.artworks.iter().filter(|a| a.collection_id.as_ref() == Some(id)).collect()
  }

  /// Obras base seguidas de las creadas localmente.
  pub fn all_artworks(&self, local: &[Artwork]) -> Vec<Artwork> {
    self.artworks.iter().chain(local).cloned().collect()
  }

  /// Busca una obra en la base y luego en las locales.
  pub fn find_artwork<'a>(&'a self, id: &ArtworkId, local: &'a [Artwork]) -> Option<&'a Artwork> {
    self.artworks.iter().chain(local).find(|a| &a.id == id)
  }

  /// Perfil del artista, omitiendo las colecciones sin obras.
  pub fn artist_profile(&self, id: &ArtistId) -> Option<ArtistProfile> {
    let artist = self.artist(id)?.clone();

    let collections = self
      .collections_for_artist(id)
      .into_iter()
      .map(|collection| CollectionGroup {
        collection: collection.clone(),
        artworks: self.artworks_for_collection(&collection.id).into_iter().cloned().collect(),
      })
      .filter(|group| !group.artworks.is_empty())
      .collect();

    Some(ArtistProfile { artist, collections })
  }

  /// Revisa las referencias del catálogo base.
  pub fn audit(&self) -> Vec<DataWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for artwork in &self.artworks {
      if !seen.insert(&artwork.id) {
        warnings.push(DataWarning::DuplicateArtworkId(artwork.id.clone()));
      }

      if self.artist(&artwork.artist_id).is_none() {
        warnings.push(DataWarning::DanglingArtist {
          artwork: artwork.id.clone(),
          artist: artwork.artist_id.clone(),
        });
      }

      let Some(collection_id) = &artwork.collection_id else {
        continue;
      };
      match self.collection(collection_id) {
        None => warnings.push(DataWarning::DanglingCollection {
          artwork: artwork.id.clone(),
          collection: collection_id.clone(),
        }),
        Some(collection) if collection.artist_id != artwork.artist_id => {
          warnings.push(DataWarning::CollectionOwnerMismatch {
            artwork: artwork.id.clone(),
            collection: collection_id.clone(),
            owner: collection.artist_id.clone(),
          })
        }
        Some(_) => {}
      }
    }

    warnings
  }
}

impl ArtistLookup for Catalog {
  fn artist(&self, id: &ArtistId) -> Option<&Artist> {
    self.artists_by_id.get(id).map(|&idx| &self.artists[idx])
  }
}
