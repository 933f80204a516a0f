use crate::domain::{Artwork, ArtworkId};
use crate::errors::CoreError;
use crate::ports::StateStore;
use crate::services::catalog::{ArtistProfile, Catalog};
use crate::services::catalog_filter::filter_catalog;
use crate::services::exhibitor::ExhibitorProfile;
use crate::services::offer::OfferQuote;
use crate::state::action::Action;
use crate::state::app_state::{AppState, ImmersiveMode, PersistedState};
use crate::state::reducer::{exhibitor_base_artist, reduce};

/// Sesión de la aplicación: catálogo base, estado y persistencia inyectada.
///
/// La persistencia se ejecuta después de cada transición, nunca durante, y
/// solo si cambió la parte persistida.
pub struct Session<S: StateStore> {
  catalog: Catalog,
  state: AppState,
  store: S,
}

impl<S: StateStore> Session<S> {
  /// Crea la sesión recuperando el estado guardado.
  ///
  /// Un fallo de lectura no es fatal: se registra y se arranca con el estado
  /// por defecto.
  pub fn restore(catalog: Catalog, store: S) -> Self {
    let persisted = match store.load() {
      Ok(persisted) => {
        log::info!(
          "exhibitor state restored: role={:?}, {} collections, {} artworks",
          persisted.role,
          persisted.exhibitor_collections.len(),
          persisted.user_artworks.len()
        );
        persisted
      }
      Err(e) => {
        log::warn!("could not load exhibitor state, starting fresh: {e}");
        PersistedState::default()
      }
    };

    let state = AppState::new(&catalog, persisted);
    Self { catalog, state, store }
  }

  /// Aplica una acción y persiste si hace falta.
  ///
  /// Si la acción falla, el estado queda intacto. Un fallo al guardar se
  /// registra pero no deshace la transición.
  pub fn dispatch(&mut self, action: Action) -> Result<(), CoreError> {
    let confirming = matches!(action, Action::ConfirmOffer);
    let next = reduce(self.state.clone(), action, &self.catalog)?;

    if confirming && let Some(id) = &self.state.active_offer {
      log::info!("offer confirmed at fixed price for {id} (simulated, no transaction)");
    }

    let changed = next.persisted != self.state.persisted;
    self.state = next;

    if changed && let Err(e) = self.store.save(&self.state.persisted) {
      log::warn!("could not save exhibitor state: {e}");
    }

    Ok(())
  }

  pub fn state(&self) -> &AppState {
    &self.state
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Obras base más las del exponente.
  pub fn all_artworks(&self) -> Vec<Artwork> {
    self.catalog.all_artworks(&self.state.persisted.user_artworks)
  }

  /// Rejilla del catálogo con la consulta y el filtro actuales.
  pub fn visible_catalog(&self) -> Vec<Artwork> {
    filter_catalog(&self.all_artworks(), &self.state.query, self.state.filter, &self.catalog)
  }

  pub fn feed(&self) -> &[Artwork] {
    &self.state.feed
  }

  pub fn is_liked(&self, id: &ArtworkId) -> bool {
    self.state.is_liked(id)
  }

  pub fn find_artwork(&self, id: &ArtworkId) -> Option<&Artwork> {
    self.catalog.find_artwork(id, &self.state.persisted.user_artworks)
  }

  pub fn effective_profile(&self) -> ExhibitorProfile {
    self.state.persisted.exhibitor_profile.effective(exhibitor_base_artist(&self.catalog, &self.state))
  }

  pub fn active_offer(&self) -> Option<OfferQuote> {
    let id = self.state.active_offer.as_ref()?;
    self.find_artwork(id).map(OfferQuote::for_artwork)
  }

  /// Perfil mostrado en la vista inmersiva, si está en modo artista.
  pub fn active_artist_profile(&self) -> Option<ArtistProfile> {
    match &self.state.immersive {
      ImmersiveMode::Artist(id) => self.catalog.artist_profile(id),
      ImmersiveMode::Feed => None,
    }
  }
}
