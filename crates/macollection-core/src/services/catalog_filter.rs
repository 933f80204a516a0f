//! Vista filtrada del catálogo (rejilla y búsqueda).

use crate::domain::{Artwork, CategoryFilter};
use crate::services::catalog::ArtistLookup;

/// Normaliza la consulta libre: minúsculas y sin espacios en los extremos.
///
/// No hay más normalización: acentos y puntuación se comparan tal cual.
pub fn normalize_query(query: &str) -> String {
  query.to_lowercase().trim().to_string()
}

/// Predicado de texto sobre una consulta ya normalizada.
///
/// Pasa si la consulta está vacía o si aparece en el título, la descripción
/// o el nombre del artista resuelto. Un artista desconocido simplemente no
/// coincide.
pub fn matches_query<L: ArtistLookup + ?Sized>(artwork: &Artwork, normalized: &str, artists: &L) -> bool {
  if normalized.is_empty() {
    return true;
  }

  artwork.title.to_lowercase().contains(normalized)
    || artwork.description.to_lowercase().contains(normalized)
    || artists
      .artist(&artwork.artist_id)
      .is_some_and(|artist| artist.name.to_lowercase().contains(normalized))
}

/// Subconjunto visible de `artworks` para una consulta y un filtro de
/// categoría.
///
/// Es un filtro puro: el resultado es una subsecuencia de la entrada, en el
/// mismo orden, recalculada siempre desde la lista completa.
pub fn filter_catalog<L: ArtistLookup + ?Sized>(
  artworks: &[Artwork],
  query: &str,
  filter: CategoryFilter,
  artists: &L,
) -> Vec<Artwork> {
  let normalized = normalize_query(query);

  let visible: Vec<Artwork> = artworks
    .iter()
    .filter(|artwork| filter.matches(artwork.category))
    .filter(|artwork| matches_query(artwork, &normalized, artists))
    .cloned()
    .collect();

  log::debug!("catalog filtered: query={normalized:?} filter={filter} -> {}/{}", visible.len(), artworks.len());

  visible
}
