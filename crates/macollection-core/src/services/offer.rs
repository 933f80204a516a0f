//! Ofertas de compra simuladas.

use serde::Serialize;

use crate::domain::{Artwork, ArtworkId};
use crate::services::format::format_price;

/// Lo que se muestra al abrir una oferta: la obra y su precio fijo.
///
/// Confirmar una oferta no dispara ninguna transacción.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferQuote {
  pub artwork_id: ArtworkId,
  pub title: String,
  pub price: u32,
  pub formatted_price: String,
}

impl OfferQuote {
  pub fn for_artwork(artwork: &Artwork) -> Self {
    OfferQuote {
      artwork_id: artwork.id.clone(),
      title: artwork.title.clone(),
      price: artwork.price,
      formatted_price: format_price(artwork.price),
    }
  }
}
