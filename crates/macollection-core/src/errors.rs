// crates/macollection-core/src/errors.rs
use thiserror::Error;

use crate::ports::{RepoError, StateStoreError};

/// Error genérico del núcleo de MaCollection.
///
/// Las capas superiores (fachada de comandos, CLI, etc.) deberían mapear
/// este error a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(#[from] RepoError),

  #[error("state store error: {0}")]
  StateStore(#[from] StateStoreError),

  #[error("invalid draft: {0}")]
  Draft(#[from] DraftError),

  #[error("exhibitor actions require an authenticated exhibitor session")]
  NotAuthenticated,

  #[error("unknown artist: {0}")]
  UnknownArtist(String),

  #[error("unknown artwork: {0}")]
  UnknownArtwork(String),
}

/// Errores de validación de los formularios del exponente.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
  #[error("title is required")]
  EmptyTitle,

  #[error("image url is required")]
  EmptyMediaUrl,
}
