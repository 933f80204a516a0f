use crate::state::PersistedState;

#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
  #[error("io error: {0}")]
  Io(String),

  #[error("encode/decode error: {0}")]
  Codec(String),
}

/// Port de persistencia del estado del exponente entre sesiones.
///
/// Solo se guarda la parte de [`PersistedState`]; el feed y los "me gusta"
/// viven únicamente en memoria.
pub trait StateStore {
  fn load(&self) -> Result<PersistedState, StateStoreError>;
  fn save(&self, state: &PersistedState) -> Result<(), StateStoreError>;
}
