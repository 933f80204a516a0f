//! Formularios del espacio exponente: perfil, colecciones y obras.

use serde::{Deserialize, Serialize};

use crate::domain::{Artist, ArtistId, Artwork, ArtworkId, Category, Collection, CollectionId, MediaType};
use crate::errors::DraftError;

const DEFAULT_CONCEPT: &str = "Collection personnelle";
const DEFAULT_DESCRIPTION: &str = "Œuvre ajoutée via le tableau de bord.";
const DEFAULT_VIEW_TIME: u32 = 20;

/// Perfil editable del exponente.
///
/// Un campo vacío significa "usar el valor del artista base".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExhibitorProfile {
  pub name: String,
  pub avatar_url: String,
  pub bio: String,
}

impl ExhibitorProfile {
  /// Rellena cada campo vacío con el del artista base, si existe.
  pub fn effective(&self, base: Option<&Artist>) -> ExhibitorProfile {
    fn pick(own: &str, fallback: Option<&str>) -> String {
      if own.is_empty() { fallback.unwrap_or_default().to_string() } else { own.to_string() }
    }

    ExhibitorProfile {
      name: pick(&self.name, base.map(|a| a.name.as_str())),
      avatar_url: pick(&self.avatar_url, base.map(|a| a.avatar_url.as_str())),
      bio: pick(&self.bio, base.map(|a| a.bio.as_str())),
    }
  }
}

/// Formulario de nueva colección.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCollectionDraft {
  pub title: String,
  pub concept: String,
}

impl NewCollectionDraft {
  pub fn into_collection(self, owner: &ArtistId) -> Result<Collection, DraftError> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(DraftError::EmptyTitle);
    }
    let concept = match self.concept.trim() {
      "" => DEFAULT_CONCEPT,
      c => c,
    };

    Ok(Collection {
      id: CollectionId::generate(),
      artist_id: owner.clone(),
      title: title.to_string(),
      concept: concept.to_string(),
    })
  }
}

/// Formulario de nueva obra, tal como llega de la interfaz (texto libre).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewArtworkDraft {
  pub title: String,
  pub image_url: String,
  pub price: String,
  pub description: String,
  pub year: String,
  pub category: Category,
}

impl Default for NewArtworkDraft {
  fn default() -> Self {
    NewArtworkDraft {
      title: String::new(),
      image_url: String::new(),
      price: String::new(),
      description: String::new(),
      year: String::new(),
      category: Category::Peinture,
    }
  }
}

/// Precio en euros a partir del texto del formulario.
///
/// Vacío, no numérico, negativo o no finito cuenta como 0; los decimales se
/// redondean.
pub fn parse_price(raw: &str) -> u32 {
  match raw.trim().parse::<f64>() {
    Ok(value) if value.is_finite() && value > 0.0 => value.round().min(f64::from(u32::MAX)) as u32,
    _ => 0,
  }
}

impl NewArtworkDraft {
  /// Convierte el formulario en una obra del exponente `owner`.
  ///
  /// Las obras nuevas nunca pertenecen a una colección y empiezan sin
  /// "me gusta".
  pub fn into_artwork(self, owner: &ArtistId) -> Result<Artwork, DraftError> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(DraftError::EmptyTitle);
    }
    let media_url = self.image_url.trim();
    if media_url.is_empty() {
      return Err(DraftError::EmptyMediaUrl);
    }

    let description = match self.description.trim() {
      "" => DEFAULT_DESCRIPTION,
      d => d,
    };
    let year = Some(self.year.trim()).filter(|y| !y.is_empty()).map(str::to_string);

    Ok(Artwork {
      id: ArtworkId::generate(),
      artist_id: owner.clone(),
      collection_id: None,
      title: title.to_string(),
      description: description.to_string(),
      price: parse_price(&self.price),
      media_type: MediaType::Image,
      media_url: media_url.to_string(),
      likes: 0,
      average_view_time: DEFAULT_VIEW_TIME,
      category: Some(self.category),
      year,
      artist_display_name: None,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn owner() -> ArtistId {
    ArtistId::from("artist-lina-moreau")
  }

  #[test]
  fn collection_requires_a_title() {
    let draft = NewCollectionDraft { title: "   ".into(), concept: "x".into() };
    assert_eq!(draft.into_collection(&owner()), Err(DraftError::EmptyTitle));
  }

  #[test]
  fn collection_defaults_its_concept() {
    let draft = NewCollectionDraft { title: "  Nuit blanche ".into(), concept: " ".into() };
    let collection = draft.into_collection(&owner()).unwrap();
    assert_eq!(collection.title, "Nuit blanche");
    assert_eq!(collection.concept, "Collection personnelle");
    assert_eq!(collection.artist_id, owner());
    assert!(collection.id.as_str().starts_with("user-col-"));
  }

  #[test]
  fn artwork_applies_form_defaults() {
    let draft = NewArtworkDraft {
      title: " Étude ".into(),
      image_url: " https://example.com/a.jpg ".into(),
      price: "abc".into(),
      category: Category::Objet,
      ..Default::default()
    };
    let artwork = draft.into_artwork(&owner()).unwrap();

    assert_eq!(artwork.title, "Étude");
    assert_eq!(artwork.media_url, "https://example.com/a.jpg");
    assert_eq!(artwork.description, "Œuvre ajoutée via le tableau de bord.");
    assert_eq!(artwork.price, 0);
    assert_eq!(artwork.media_type, MediaType::Image);
    assert_eq!(artwork.likes, 0);
    assert_eq!(artwork.average_view_time, 20);
    assert_eq!(artwork.collection_id, None);
    assert_eq!(artwork.category, Some(Category::Objet));
    assert_eq!(artwork.year, None);
  }

  #[test]
  fn artwork_requires_title_and_image() {
    let no_image = NewArtworkDraft { title: "T".into(), ..Default::default() };
    assert_eq!(no_image.into_artwork(&owner()), Err(DraftError::EmptyMediaUrl));

    let no_title = NewArtworkDraft { image_url: "u".into(), ..Default::default() };
    assert_eq!(no_title.into_artwork(&owner()), Err(DraftError::EmptyTitle));
  }

  #[test]
  fn prices_parse_leniently() {
    assert_eq!(parse_price(""), 0);
    assert_eq!(parse_price(" 1500 "), 1500);
    assert_eq!(parse_price("12.6"), 13);
    assert_eq!(parse_price("-40"), 0);
    assert_eq!(parse_price("inf"), 0);
  }

  #[test]
  fn effective_profile_falls_back_per_field() {
    let base = Artist {
      id: owner(),
      name: "Lina Moreau".into(),
      bio: "Bio".into(),
      avatar_url: "https://example.com/lina.jpg".into(),
    };
    let profile = ExhibitorProfile { name: "Lina M.".into(), ..Default::default() };

    let effective = profile.effective(Some(&base));
    assert_eq!(effective.name, "Lina M.");
    assert_eq!(effective.bio, "Bio");
    assert_eq!(effective.avatar_url, "https://example.com/lina.jpg");

    assert_eq!(profile.effective(None).bio, "");
  }
}
