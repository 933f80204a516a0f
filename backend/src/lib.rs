pub mod cli;
mod config;
mod infrastructure;

use std::sync::{Mutex, MutexGuard};

use macollection_core::domain::{ArtistId, ArtworkId, CategoryFilter};
use macollection_core::ports::StateStore;
use macollection_core::services::exhibitor::{NewArtworkDraft, NewCollectionDraft};
use macollection_core::CoreError;
use macollection_core::services::{Catalog, OfferQuote};
use macollection_core::state::{Action, Session, View};
use macollection_storage::SqliteCatalogRepository;

pub use crate::config::{ArtistProfileDto, ArtworkCardDto, CollectionDto, DashboardDto, NewCollectionDto, ProfileDto};
pub use infrastructure::state_store::TomlStateStore;

/// Application state shared by every command.
///
/// The session is behind a mutex so commands can be driven from any thread.
pub struct App<S: StateStore = TomlStateStore> {
  session: Mutex<Session<S>>,
}

impl App<TomlStateStore> {
  /// Wires the production adapters: SQLite catalog and TOML state store.
  pub fn from_config() -> anyhow::Result<Self> {
    // 1. Persistence adapter (SQLite). Seeds the demo catalog on first run.
    let repo = SqliteCatalogRepository::new_from_config()?;

    // 2. Base catalog, loaded once.
    let catalog = Catalog::load(&repo)?;

    // 3. Exhibitor state adapter (config file section).
    let store = TomlStateStore::from_paths();

    Ok(Self::new(catalog, store))
  }
}

impl<S: StateStore> App<S> {
  pub fn new(catalog: Catalog, store: S) -> Self {
    Self { session: Mutex::new(Session::restore(catalog, store)) }
  }

  fn session(&self) -> Result<MutexGuard<'_, Session<S>>, String> {
    self.session.lock().map_err(|_| "session lock poisoned".to_string())
  }

  fn card(session: &Session<S>, id: &ArtworkId) -> Result<ArtworkCardDto, String> {
    let artwork = session.find_artwork(id).ok_or_else(|| format!("unknown artwork: {id}"))?;
    Ok(ArtworkCardDto::new(artwork, session.catalog(), session.is_liked(id)))
  }

  /// Command: catalog grid for a query and a category filter key
  /// (`all`, `peinture`, ...).
  pub fn catalog_search(&self, query: &str, filter: &str) -> Result<Vec<ArtworkCardDto>, String> {
    let filter = filter.parse::<CategoryFilter>().map_err(|e| e.to_string())?;
    let mut session = self.session()?;
    session.dispatch(Action::ChangeView(View::Catalog)).map_err(|e| e.to_string())?;
    session.dispatch(Action::SetQuery(query.to_string())).map_err(|e| e.to_string())?;
    session.dispatch(Action::SetFilter(filter)).map_err(|e| e.to_string())?;
    Ok(Self::visible_cards(&session))
  }

  /// Command: change only the query, keeping the active filter.
  pub fn catalog_query(&self, query: &str) -> Result<Vec<ArtworkCardDto>, String> {
    let mut session = self.session()?;
    session.dispatch(Action::SetQuery(query.to_string())).map_err(|e| e.to_string())?;
    Ok(Self::visible_cards(&session))
  }

  /// Command: change only the category filter, keeping the query.
  pub fn catalog_filter(&self, filter: &str) -> Result<Vec<ArtworkCardDto>, String> {
    let filter = filter.parse::<CategoryFilter>().map_err(|e| e.to_string())?;
    let mut session = self.session()?;
    session.dispatch(Action::SetFilter(filter)).map_err(|e| e.to_string())?;
    Ok(Self::visible_cards(&session))
  }

  fn visible_cards(session: &Session<S>) -> Vec<ArtworkCardDto> {
    let catalog = session.catalog();
    session.visible_catalog().iter().map(|a| ArtworkCardDto::new(a, catalog, session.is_liked(&a.id))).collect()
  }

  /// Command: immersive feed in its current order.
  pub fn feed_list(&self) -> Result<Vec<ArtworkCardDto>, String> {
    let mut session = self.session()?;
    session.dispatch(Action::ChangeView(View::Immersive)).map_err(|e| e.to_string())?;
    let catalog = session.catalog();
    Ok(session.feed().iter().map(|a| ArtworkCardDto::new(a, catalog, session.is_liked(&a.id))).collect())
  }

  /// Command: like or unlike an artwork. Liking reorders the feed.
  pub fn artwork_toggle_like(&self, id: &str) -> Result<ArtworkCardDto, String> {
    let id = ArtworkId::from(id);
    let mut session = self.session()?;
    session.dispatch(Action::ToggleLike(id.clone())).map_err(|e| e.to_string())?;
    Self::card(&session, &id)
  }

  pub fn artwork_detail(&self, id: &str) -> Result<ArtworkCardDto, String> {
    let id = ArtworkId::from(id);
    let mut session = self.session()?;
    session.dispatch(Action::OpenDetail(id.clone())).map_err(|e| e.to_string())?;
    Self::card(&session, &id)
  }

  /// Command: open the fixed-price offer dialog for an artwork.
  pub fn offer_open(&self, id: &str) -> Result<OfferQuote, String> {
    let mut session = self.session()?;
    session.dispatch(Action::OpenOffer(ArtworkId::from(id))).map_err(|e| e.to_string())?;
    session.active_offer().ok_or_else(|| format!("unknown artwork: {id}"))
  }

  /// Command: confirm the open offer. Simulated; no transaction happens.
  pub fn offer_confirm(&self) -> Result<(), String> {
    self.session()?.dispatch(Action::ConfirmOffer).map_err(|e| e.to_string())
  }

  pub fn offer_close(&self) -> Result<(), String> {
    self.session()?.dispatch(Action::CloseOffer).map_err(|e| e.to_string())
  }

  /// Command: switch the immersive view to an artist page.
  pub fn artist_profile(&self, id: &str) -> Result<ArtistProfileDto, String> {
    let mut session = self.session()?;
    session.dispatch(Action::OpenArtistProfile(ArtistId::from(id))).map_err(|e| e.to_string())?;
    let profile = session.active_artist_profile().ok_or_else(|| format!("unknown artist: {id}"))?;
    Ok(ArtistProfileDto::new(profile, session.catalog(), |a| session.is_liked(&a.id)))
  }

  pub fn back_to_feed(&self) -> Result<(), String> {
    self.session()?.dispatch(Action::BackToFeed).map_err(|e| e.to_string())
  }

  /// Command: enter the exhibitor space and log in as an existing artist.
  pub fn exhibitor_login(&self, artist_id: &str) -> Result<ProfileDto, String> {
    let mut session = self.session()?;
    session.dispatch(Action::EnterExhibitor).map_err(|e| e.to_string())?;
    session.dispatch(Action::Login(ArtistId::from(artist_id))).map_err(|e| e.to_string())?;
    Ok(ProfileDto::from(session.effective_profile()))
  }

  pub fn exhibitor_profile(&self) -> Result<ProfileDto, String> {
    Ok(ProfileDto::from(self.session()?.effective_profile()))
  }

  pub fn exhibitor_update_profile(&self, input: ProfileDto) -> Result<ProfileDto, String> {
    let mut session = self.session()?;
    session.dispatch(Action::UpdateProfile(input.into())).map_err(|e| e.to_string())?;
    Ok(ProfileDto::from(session.effective_profile()))
  }

  /// Command: the exhibitor dashboard. Requires a logged-in exhibitor.
  pub fn exhibitor_dashboard(&self) -> Result<DashboardDto, String> {
    let session = self.session()?;
    let persisted = &session.state().persisted;
    if !persisted.is_exhibitor_authenticated {
      return Err(CoreError::NotAuthenticated.to_string());
    }

    let catalog = session.catalog();
    Ok(DashboardDto {
      profile: ProfileDto::from(session.effective_profile()),
      collections: persisted.exhibitor_collections.iter().cloned().map(NewCollectionDto::from).collect(),
      artworks: persisted
        .user_artworks
        .iter()
        .map(|a| ArtworkCardDto::new(a, catalog, session.is_liked(&a.id)))
        .collect(),
    })
  }

  pub fn exhibitor_add_collection(&self, draft: NewCollectionDraft) -> Result<NewCollectionDto, String> {
    let mut session = self.session()?;
    session.dispatch(Action::AddCollection(draft)).map_err(|e| e.to_string())?;
    session
      .state()
      .persisted
      .exhibitor_collections
      .last()
      .cloned()
      .map(NewCollectionDto::from)
      .ok_or_else(|| "collection was not recorded".to_string())
  }

  pub fn exhibitor_add_artwork(&self, draft: NewArtworkDraft) -> Result<ArtworkCardDto, String> {
    let mut session = self.session()?;
    session.dispatch(Action::AddArtwork(draft)).map_err(|e| e.to_string())?;
    let id = session
      .state()
      .persisted
      .user_artworks
      .last()
      .map(|a| a.id.clone())
      .ok_or_else(|| "artwork was not recorded".to_string())?;
    Self::card(&session, &id)
  }

  /// Command: leave the exhibitor space. The login is kept.
  pub fn exhibitor_leave(&self) -> Result<(), String> {
    self.session()?.dispatch(Action::BackToVisitor).map_err(|e| e.to_string())
  }
}

/// Entry point of the `macollection` binary: wires the adapters and runs the
/// command loop on stdin/stdout.
pub fn run() -> anyhow::Result<()> {
  let app = App::from_config()?;

  let stdin = std::io::stdin();
  let stdout = std::io::stdout();
  cli::run_commands(&app, stdin.lock(), stdout.lock())?;
  Ok(())
}
