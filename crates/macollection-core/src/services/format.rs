//! Valores derivados para mostrar en la interfaz.

use crate::domain::Artwork;
use crate::services::catalog::ArtistLookup;

/// Separador de miles del formato `fr-FR` (espacio fino insecable).
const GROUP_SEPARATOR: char = '\u{202F}';
/// Espacio insecable antes del símbolo de moneda.
const CURRENCY_SPACE: char = '\u{A0}';

/// Contador mostrado: la base del servidor más el "me gusta" local.
pub fn displayed_likes(artwork: &Artwork, is_liked: bool) -> u32 {
  artwork.likes.saturating_add(u32::from(is_liked))
}

/// Precio en euros enteros con el formato `fr-FR` (`2 400 €`).
pub fn format_price(euros: u32) -> String {
  let digits = euros.to_string();
  let mut out = String::with_capacity(digits.len() + 8);

  for (idx, ch) in digits.chars().enumerate() {
    if idx > 0 && (digits.len() - idx) % 3 == 0 {
      out.push(GROUP_SEPARATOR);
    }
    out.push(ch);
  }

  out.push(CURRENCY_SPACE);
  out.push('€');
  out
}

/// Duración corta: segundos por debajo del minuto, si no minutos redondeados
/// (las mitades hacia arriba).
pub fn format_seconds(seconds: u32) -> String {
  if seconds < 60 {
    return format!("{seconds}s");
  }
  let minutes = seconds / 60 + u32::from(seconds % 60 >= 30);
  format!("{minutes} min")
}

/// Nombre de artista a mostrar para una obra.
///
/// Prioriza el nombre fijado en la obra; si no, el del artista resuelto; si
/// el artista no existe, cadena vacía.
pub fn artist_display_name<L: ArtistLookup + ?Sized>(artwork: &Artwork, artists: &L) -> String {
  if let Some(name) = artwork.artist_display_name.as_deref().filter(|n| !n.trim().is_empty()) {
    return name.to_string();
  }
  artists.artist(&artwork.artist_id).map(|a| a.name.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Artist, ArtistId};
  use crate::seed::demo_catalog;
  use std::collections::HashMap;

  #[test]
  fn prices_use_french_grouping() {
    assert_eq!(format_price(0), "0\u{A0}€");
    assert_eq!(format_price(950), "950\u{A0}€");
    assert_eq!(format_price(2400), "2\u{202F}400\u{A0}€");
    assert_eq!(format_price(1_234_567), "1\u{202F}234\u{202F}567\u{A0}€");
  }

  #[test]
  fn seconds_switch_to_minutes() {
    assert_eq!(format_seconds(41), "41s");
    assert_eq!(format_seconds(60), "1 min");
    assert_eq!(format_seconds(89), "1 min");
    assert_eq!(format_seconds(90), "2 min");
  }

  #[test]
  fn largest_values_do_not_overflow() {
    let (_, _, artworks) = demo_catalog();
    let mut artwork = artworks[0].clone();
    artwork.likes = u32::MAX;
    assert_eq!(displayed_likes(&artwork, true), u32::MAX);

    // 4294967295 s = 71582788 min + 15 s
    assert_eq!(format_seconds(u32::MAX), "71582788 min");
    assert_eq!(format_seconds(u32::MAX - 15), "71582788 min");
    assert_eq!(format_seconds(u32::MAX - 45), "71582788 min");
    assert_eq!(format_seconds(u32::MAX - 46), "71582787 min");
  }

  #[test]
  fn liked_adds_exactly_one() {
    let (_, _, artworks) = demo_catalog();
    assert_eq!(displayed_likes(&artworks[0], false), 132);
    assert_eq!(displayed_likes(&artworks[0], true), 133);
  }

  #[test]
  fn display_name_prefers_override() {
    let (artists, _, artworks) = demo_catalog();
    let lookup: HashMap<ArtistId, Artist> = artists.into_iter().map(|a| (a.id.clone(), a)).collect();

    let mut artwork = artworks[0].clone();
    assert_eq!(artist_display_name(&artwork, &lookup), "Lina Moreau");

    artwork.artist_display_name = Some("L. M.".into());
    assert_eq!(artist_display_name(&artwork, &lookup), "L. M.");

    artwork.artist_display_name = None;
    artwork.artist_id = ArtistId::from("artist-ghost");
    assert_eq!(artist_display_name(&artwork, &lookup), "");
  }
}
