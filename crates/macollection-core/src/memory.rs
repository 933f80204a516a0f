//! Adaptadores en memoria de los ports, para tests y demos.

use std::cell::{Cell, RefCell};

use crate::domain::{Artist, ArtistId, Artwork, Collection};
use crate::ports::{CatalogRepository, RepoError, StateStore, StateStoreError};
use crate::seed::demo_catalog;
use crate::state::PersistedState;

/// Repositorio de catálogo respaldado por vectores.
///
/// Conserva el orden de inserción; un `save_*` con id existente reemplaza el
/// registro en su sitio.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
  artists: RefCell<Vec<Artist>>,
  collections: RefCell<Vec<Collection>>,
  artworks: RefCell<Vec<Artwork>>,
}

impl InMemoryCatalogRepository {
  pub fn with_demo_catalog() -> Self {
    let (artists, collections, artworks) = demo_catalog();
    Self { artists: RefCell::new(artists), collections: RefCell::new(collections), artworks: RefCell::new(artworks) }
  }
}

fn upsert<T: Clone>(items: &RefCell<Vec<T>>, item: &T, same: impl Fn(&T) -> bool) {
  let mut items = items.borrow_mut();
  match items.iter_mut().find(|existing| same(existing)) {
    Some(existing) => *existing = item.clone(),
    None => items.push(item.clone()),
  }
}

impl CatalogRepository for InMemoryCatalogRepository {
  fn save_artist(&self, artist: &Artist) -> Result<(), RepoError> {
    upsert(&self.artists, artist, |a| a.id == artist.id);
    Ok(())
  }

  fn save_collection(&self, collection: &Collection) -> Result<(), RepoError> {
    upsert(&self.collections, collection, |c| c.id == collection.id);
    Ok(())
  }

  fn save_artwork(&self, artwork: &Artwork) -> Result<(), RepoError> {
    upsert(&self.artworks, artwork, |a| a.id == artwork.id);
    Ok(())
  }

  fn find_artist(&self, id: &ArtistId) -> Result<Option<Artist>, RepoError> {
    Ok(self.artists.borrow().iter().find(|a| &a.id == id).cloned())
  }

  fn list_artists(&self) -> Result<Vec<Artist>, RepoError> {
    Ok(self.artists.borrow().clone())
  }

  fn list_collections(&self) -> Result<Vec<Collection>, RepoError> {
    Ok(self.collections.borrow().clone())
  }

  fn list_artworks(&self) -> Result<Vec<Artwork>, RepoError> {
    Ok(self.artworks.borrow().clone())
  }

  fn collections_for_artist(&self, id: &ArtistId) -> Result<Vec<Collection>, RepoError> {
    Ok(self.collections.borrow().iter().filter(|c| &c.artist_id == id).cloned().collect())
  }

  fn artworks_for_artist(&self, id: &ArtistId) -> Result<Vec<Artwork>, RepoError> {
    Ok(self.artworks.borrow().iter().filter(|a| &a.artist_id == id).cloned().collect())
  }
}

/// `StateStore` en memoria que cuenta las escrituras.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
  state: RefCell<Option<PersistedState>>,
  saves: Cell<usize>,
  failing: bool,
}

impl MemoryStateStore {
  pub fn with_state(state: PersistedState) -> Self {
    Self { state: RefCell::new(Some(state)), ..Default::default() }
  }

  /// Variante cuyas escrituras siempre fallan.
  pub fn failing() -> Self {
    Self { failing: true, ..Default::default() }
  }

  pub fn saves(&self) -> usize {
    self.saves.get()
  }

  pub fn snapshot(&self) -> Option<PersistedState> {
    self.state.borrow().clone()
  }
}

impl StateStore for MemoryStateStore {
  fn load(&self) -> Result<PersistedState, StateStoreError> {
    Ok(self.state.borrow().clone().unwrap_or_default())
  }

  fn save(&self, state: &PersistedState) -> Result<(), StateStoreError> {
    if self.failing {
      return Err(StateStoreError::Io("store is read-only".into()));
    }
    *self.state.borrow_mut() = Some(state.clone());
    self.saves.set(self.saves.get() + 1);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn save_replaces_in_place() {
    let repo = InMemoryCatalogRepository::with_demo_catalog();
    let mut lina = repo.find_artist(&ArtistId::from("artist-lina-moreau")).unwrap().unwrap();
    lina.bio = "Nouvelle bio".into();
    repo.save_artist(&lina).unwrap();

    let artists = repo.list_artists().unwrap();
    assert_eq!(artists.len(), 3);
    assert_eq!(artists[0].bio, "Nouvelle bio");
  }

  #[test]
  fn lists_by_artist() {
    let repo = InMemoryCatalogRepository::with_demo_catalog();
    let aya = ArtistId::from("artist-aya-nakamori");
    assert_eq!(repo.collections_for_artist(&aya).unwrap().len(), 2);
    assert_eq!(repo.artworks_for_artist(&aya).unwrap().len(), 3);
  }
}
