//! Transiciones puras del estado de la aplicación.

use crate::domain::{Artist, ArtistId, ArtworkId};
use crate::errors::CoreError;
use crate::services::catalog::{ArtistLookup, Catalog};
use crate::services::feed_ranker::rerank_feed;
use crate::state::action::Action;
use crate::state::app_state::{AppState, ImmersiveMode, Role, View};

/// Artista base del exponente: el seleccionado al entrar o, si ya no
/// existe, el primero del catálogo.
pub fn exhibitor_base_artist<'a>(catalog: &'a Catalog, state: &AppState) -> Option<&'a Artist> {
  catalog.artist(&state.persisted.exhibitor_artist_id).or_else(|| catalog.artists().first())
}

/// Aplica `action` sobre `state`.
///
/// Es una función pura: no persiste nada ni toca la red. Si la acción es
/// inválida devuelve el error y el estado recibido se pierde, así que quien
/// llama conserva su propia copia (ver [`crate::state::Session::dispatch`]).
pub fn reduce(mut state: AppState, action: Action, catalog: &Catalog) -> Result<AppState, CoreError> {
  match action {
    Action::ToggleLike(id) => toggle_like(&mut state, id, catalog),

    Action::OpenOffer(id) => {
      ensure_artwork(&state, &id, catalog)?;
      state.active_detail = None;
      state.active_offer = Some(id);
    }
    Action::CloseOffer | Action::ConfirmOffer => state.active_offer = None,

    Action::OpenDetail(id) => {
      ensure_artwork(&state, &id, catalog)?;
      state.active_detail = Some(id);
    }
    Action::CloseDetail => state.active_detail = None,

    Action::OpenArtistProfile(artist_id) => {
      state.active_detail = None;
      state.immersive = ImmersiveMode::Artist(artist_id);
      state.view = View::Immersive;
    }
    Action::BackToFeed => state.immersive = ImmersiveMode::Feed,
    Action::ChangeView(view) => state.view = view,

    Action::SetQuery(query) => state.query = query,
    Action::SetFilter(filter) => state.filter = filter,

    Action::EnterExhibitor => state.persisted.role = Role::Exhibitor,
    Action::BackToVisitor => state.persisted.role = Role::Visitor,

    Action::Login(artist_id) => {
      if catalog.artist(&artist_id).is_none() {
        return Err(CoreError::UnknownArtist(artist_id.to_string()));
      }
      state.persisted.exhibitor_artist_id = artist_id;
      state.persisted.is_exhibitor_authenticated = true;
    }

    Action::UpdateProfile(profile) => {
      ensure_exhibitor(&state)?;
      state.persisted.exhibitor_profile = profile;
    }

    Action::AddCollection(draft) => {
      ensure_exhibitor(&state)?;
      let owner = owner_id(&state, catalog);
      let collection = draft.into_collection(&owner)?;
      state.persisted.exhibitor_collections.push(collection);
    }

    Action::AddArtwork(draft) => {
      ensure_exhibitor(&state)?;
      let owner = owner_id(&state, catalog);
      let artwork = draft.into_artwork(&owner)?;
      state.persisted.user_artworks.push(artwork);
      // La lista completa cambió: el feed vuelve al orden de base.
      state.feed = catalog.all_artworks(&state.persisted.user_artworks);
    }
  }

  Ok(state)
}

fn toggle_like(state: &mut AppState, id: ArtworkId, catalog: &Catalog) {
  if state.liked.remove(&id) {
    return;
  }

  // Solo el paso a "me gusta" reordena el feed.
  let pivot = state
    .feed
    .iter()
    .find(|a| a.id == id)
    .or_else(|| catalog.find_artwork(&id, &state.persisted.user_artworks))
    .cloned();

  if let Some(pivot) = pivot {
    state.feed = rerank_feed(&state.feed, Some(&pivot));
  }
  state.liked.insert(id);
}

fn ensure_artwork(state: &AppState, id: &ArtworkId, catalog: &Catalog) -> Result<(), CoreError> {
  match catalog.find_artwork(id, &state.persisted.user_artworks) {
    Some(_) => Ok(()),
    None => Err(CoreError::UnknownArtwork(id.to_string())),
  }
}

fn ensure_exhibitor(state: &AppState) -> Result<(), CoreError> {
  if state.persisted.role == Role::Exhibitor && state.persisted.is_exhibitor_authenticated {
    Ok(())
  } else {
    Err(CoreError::NotAuthenticated)
  }
}

fn owner_id(state: &AppState, catalog: &Catalog) -> ArtistId {
  exhibitor_base_artist(catalog, state)
    .map(|artist| artist.id.clone())
    .unwrap_or_else(|| state.persisted.exhibitor_artist_id.clone())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Category, CategoryFilter};
  use crate::errors::DraftError;
  use crate::seed::demo_catalog;
  use crate::services::exhibitor::{ExhibitorProfile, NewArtworkDraft, NewCollectionDraft};
  use crate::state::app_state::PersistedState;

  fn setup() -> (Catalog, AppState) {
    let (artists, collections, artworks) = demo_catalog();
    let catalog = Catalog::new(artists, collections, artworks);
    let state = AppState::new(&catalog, PersistedState::default());
    (catalog, state)
  }

  fn logged_in(catalog: &Catalog, state: AppState) -> AppState {
    let state = reduce(state, Action::EnterExhibitor, catalog).unwrap();
    reduce(state, Action::Login(ArtistId::from("artist-aya-nakamori")), catalog).unwrap()
  }

  fn feed_ids(state: &AppState) -> Vec<&str> {
    state.feed.iter().map(|a| a.id.as_str()).collect()
  }

  #[test]
  fn like_reranks_feed_around_the_pivot() {
    let (catalog, state) = setup();
    let state = reduce(state, Action::ToggleLike(ArtworkId::from("art-malik-02")), &catalog).unwrap();

    assert!(state.is_liked(&ArtworkId::from("art-malik-02")));
    assert_eq!(&feed_ids(&state)[..4], ["art-malik-02", "art-malik-03", "art-malik-01", "art-lina-01"]);
  }

  #[test]
  fn unlike_keeps_the_feed_order() {
    let (catalog, state) = setup();
    let liked = reduce(state, Action::ToggleLike(ArtworkId::from("art-aya-02")), &catalog).unwrap();
    let order = liked.feed.clone();

    let unliked = reduce(liked, Action::ToggleLike(ArtworkId::from("art-aya-02")), &catalog).unwrap();
    assert!(!unliked.is_liked(&ArtworkId::from("art-aya-02")));
    assert_eq!(unliked.feed, order);
  }

  #[test]
  fn liking_an_unknown_artwork_only_flips_the_flag() {
    let (catalog, state) = setup();
    let before = state.feed.clone();
    let state = reduce(state, Action::ToggleLike(ArtworkId::from("art-ghost")), &catalog).unwrap();
    assert!(state.is_liked(&ArtworkId::from("art-ghost")));
    assert_eq!(state.feed, before);
  }

  #[test]
  fn detail_closes_when_opening_an_offer_or_a_profile() {
    let (catalog, state) = setup();
    let state = reduce(state, Action::OpenDetail(ArtworkId::from("art-lina-01")), &catalog).unwrap();
    let state = reduce(state, Action::OpenOffer(ArtworkId::from("art-lina-01")), &catalog).unwrap();
    assert_eq!(state.active_detail, None);
    assert_eq!(state.active_offer, Some(ArtworkId::from("art-lina-01")));

    let state = reduce(state, Action::ConfirmOffer, &catalog).unwrap();
    assert_eq!(state.active_offer, None);

    let state = reduce(state, Action::OpenDetail(ArtworkId::from("art-aya-01")), &catalog).unwrap();
    let state =
      reduce(state, Action::OpenArtistProfile(ArtistId::from("artist-aya-nakamori")), &catalog).unwrap();
    assert_eq!(state.active_detail, None);
    assert_eq!(state.view, View::Immersive);
    assert_eq!(state.immersive, ImmersiveMode::Artist(ArtistId::from("artist-aya-nakamori")));

    let state = reduce(state, Action::BackToFeed, &catalog).unwrap();
    assert_eq!(state.immersive, ImmersiveMode::Feed);
  }

  #[test]
  fn offers_need_a_known_artwork() {
    let (catalog, state) = setup();
    let err = reduce(state, Action::OpenOffer(ArtworkId::from("art-ghost")), &catalog).unwrap_err();
    assert!(matches!(err, CoreError::UnknownArtwork(_)));
  }

  #[test]
  fn exhibitor_actions_require_login() {
    let (catalog, state) = setup();
    let state = reduce(state, Action::EnterExhibitor, &catalog).unwrap();
    let err = reduce(state, Action::UpdateProfile(ExhibitorProfile::default()), &catalog).unwrap_err();
    assert!(matches!(err, CoreError::NotAuthenticated));
  }

  #[test]
  fn login_rejects_unknown_artists() {
    let (catalog, state) = setup();
    let err = reduce(state, Action::Login(ArtistId::from("artist-ghost")), &catalog).unwrap_err();
    assert!(matches!(err, CoreError::UnknownArtist(_)));
  }

  #[test]
  fn added_artwork_joins_catalog_and_resets_feed() {
    let (catalog, state) = setup();
    let state = logged_in(&catalog, state);
    let state = reduce(state, Action::ToggleLike(ArtworkId::from("art-aya-01")), &catalog).unwrap();
    assert_eq!(feed_ids(&state)[0], "art-aya-01");

    let draft = NewArtworkDraft {
      title: "Brume".into(),
      image_url: "https://example.com/brume.jpg".into(),
      price: "900".into(),
      category: Category::Sculpture,
      ..Default::default()
    };
    let state = reduce(state, Action::AddArtwork(draft), &catalog).unwrap();

    assert_eq!(state.persisted.user_artworks.len(), 1);
    let added = &state.persisted.user_artworks[0];
    assert_eq!(added.artist_id.as_str(), "artist-aya-nakamori");
    assert_eq!(state.feed.len(), 10);
    assert_eq!(feed_ids(&state)[0], "art-lina-01");
    assert_eq!(state.feed.last().unwrap().id, added.id);
    assert_eq!(state.filter, CategoryFilter::All);
  }

  #[test]
  fn invalid_drafts_surface_as_errors() {
    let (catalog, state) = setup();
    let state = logged_in(&catalog, state);
    let err = reduce(state, Action::AddCollection(NewCollectionDraft::default()), &catalog).unwrap_err();
    assert!(matches!(err, CoreError::Draft(DraftError::EmptyTitle)));
  }

  #[test]
  fn collections_belong_to_the_logged_in_artist() {
    let (catalog, state) = setup();
    let state = logged_in(&catalog, state);
    let draft = NewCollectionDraft { title: "Brumes".into(), concept: String::new() };
    let state = reduce(state, Action::AddCollection(draft), &catalog).unwrap();

    let collection = &state.persisted.exhibitor_collections[0];
    assert_eq!(collection.artist_id.as_str(), "artist-aya-nakamori");
  }

  #[test]
  fn unknown_exhibitor_artist_falls_back_to_the_first() {
    let (catalog, mut state) = setup();
    state.persisted.exhibitor_artist_id = ArtistId::from("artist-gone");
    assert_eq!(exhibitor_base_artist(&catalog, &state).unwrap().name, "Lina Moreau");
  }
}
