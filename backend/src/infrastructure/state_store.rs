use macollection_config::{ConfigBackend, ConfigError, PATHS, TomlConfigBackend};
use macollection_core::ports::{StateStore, StateStoreError};
use macollection_core::state::PersistedState;

/// Config file section holding the exhibitor state.
const SECTION: &str = "exhibitor";

/// A `StateStore` that keeps the exhibitor state in the `[exhibitor]` section
/// of `macollection.toml`, next to the rest of the configuration.
pub struct TomlStateStore {
  backend: TomlConfigBackend,
}

impl TomlStateStore {
  pub fn new(backend: TomlConfigBackend) -> Self {
    Self { backend }
  }

  /// Store backed by the process-wide config location.
  pub fn from_paths() -> Self {
    Self::new(TomlConfigBackend::new(PATHS.clone()))
  }
}

impl StateStore for TomlStateStore {
  fn load(&self) -> Result<PersistedState, StateStoreError> {
    self.backend.load_section_with_default(SECTION).map_err(to_store_error)
  }

  fn save(&self, state: &PersistedState) -> Result<(), StateStoreError> {
    self.backend.save_section(SECTION, state).map_err(to_store_error)
  }
}

fn to_store_error(e: ConfigError) -> StateStoreError {
  match e {
    ConfigError::Io(e) => StateStoreError::Io(e.to_string()),
    other => StateStoreError::Codec(other.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use macollection_config::MacollectionPaths;
  use macollection_core::domain::ArtistId;
  use macollection_core::services::exhibitor::{NewArtworkDraft, NewCollectionDraft};
  use macollection_core::state::Role;
  use tempfile::tempdir;

  #[test]
  fn round_trips_exhibitor_state_through_toml() {
    let dir = tempdir().unwrap();
    let store = TomlStateStore::new(TomlConfigBackend::new(MacollectionPaths::rooted(dir.path()).unwrap()));

    assert_eq!(store.load().unwrap(), PersistedState::default());

    let owner = ArtistId::from("artist-aya-nakamori");
    let mut state = PersistedState {
      role: Role::Exhibitor,
      is_exhibitor_authenticated: true,
      exhibitor_artist_id: owner.clone(),
      ..Default::default()
    };
    state.exhibitor_profile.bio = "Haïkus visuels".into();
    state
      .exhibitor_collections
      .push(NewCollectionDraft { title: "Brumes".into(), concept: String::new() }.into_collection(&owner).unwrap());
    state.user_artworks.push(
      NewArtworkDraft {
        title: "Brume I".into(),
        image_url: "https://example.com/brume.jpg".into(),
        year: "2025".into(),
        ..Default::default()
      }
      .into_artwork(&owner)
      .unwrap(),
    );

    store.save(&state).unwrap();
    assert_eq!(store.load().unwrap(), state);
  }

  #[test]
  fn unreadable_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let paths = MacollectionPaths::rooted(dir.path()).unwrap();
    // A directory where the config file should be cannot be read as text.
    std::fs::create_dir_all(paths.config_file()).unwrap();
    let store = TomlStateStore::new(TomlConfigBackend::new(paths));

    assert!(matches!(store.load(), Err(StateStoreError::Io(_))));
  }

  #[test]
  fn malformed_section_is_a_codec_error() {
    let dir = tempdir().unwrap();
    let paths = MacollectionPaths::rooted(dir.path()).unwrap();
    std::fs::write(paths.config_file(), "[exhibitor]\nrole = \"curator\"\n").unwrap();
    let store = TomlStateStore::new(TomlConfigBackend::new(paths));

    assert!(matches!(store.load(), Err(StateStoreError::Codec(_))));
  }
}
