use crate::domain::{ArtistId, ArtworkId, CategoryFilter};
use crate::services::exhibitor::{ExhibitorProfile, NewArtworkDraft, NewCollectionDraft};
use crate::state::app_state::View;

/// Transiciones que la interfaz puede pedir.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  // --- Visitante ---
  ToggleLike(ArtworkId),
  OpenOffer(ArtworkId),
  CloseOffer,
  /// Confirmación simulada al precio fijo: solo cierra la oferta.
  ConfirmOffer,
  OpenDetail(ArtworkId),
  CloseDetail,
  OpenArtistProfile(ArtistId),
  BackToFeed,
  ChangeView(View),
  SetQuery(String),
  SetFilter(CategoryFilter),

  // --- Exponente ---
  EnterExhibitor,
  BackToVisitor,
  Login(ArtistId),
  UpdateProfile(ExhibitorProfile),
  AddCollection(NewCollectionDraft),
  AddArtwork(NewArtworkDraft),
}
