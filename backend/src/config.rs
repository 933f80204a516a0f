use macollection_core::domain::{Artwork, Collection};
use macollection_core::services::catalog::{ArtistProfile, Catalog};
use macollection_core::services::exhibitor::ExhibitorProfile;
use macollection_core::services::format::{artist_display_name, displayed_likes, format_price, format_seconds};
use serde::{Deserialize, Serialize};

/// One artwork as shown in the catalog grid or the immersive feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkCardDto {
  pub id: String,
  pub title: String,
  pub artist_id: String,
  pub artist_name: String,
  pub collection_title: Option<String>,
  pub category: Option<String>,
  pub description: String,
  pub media_type: String,
  pub media_url: String,
  pub price: u32,
  pub formatted_price: String,
  pub likes: u32,
  pub liked: bool,
  pub average_view_time: String,
  pub year: Option<String>,
}

impl ArtworkCardDto {
  pub fn new(artwork: &Artwork, catalog: &Catalog, liked: bool) -> Self {
    ArtworkCardDto {
      id: artwork.id.to_string(),
      title: artwork.title.clone(),
      artist_id: artwork.artist_id.to_string(),
      artist_name: artist_display_name(artwork, catalog),
      collection_title: artwork.collection_id.as_ref().and_then(|id| catalog.collection(id)).map(|c| c.title.clone()),
      category: artwork.category.map(|c| c.label().to_string()),
      description: artwork.description.clone(),
      media_type: artwork.media_type.to_string(),
      media_url: artwork.media_url.clone(),
      price: artwork.price,
      formatted_price: format_price(artwork.price),
      likes: displayed_likes(artwork, liked),
      liked,
      average_view_time: format_seconds(artwork.average_view_time),
      year: artwork.year.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDto {
  pub id: String,
  pub title: String,
  pub concept: String,
  pub artworks: Vec<ArtworkCardDto>,
}

/// Public artist page: bio plus their non-empty collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfileDto {
  pub id: String,
  pub name: String,
  pub bio: String,
  pub avatar_url: String,
  pub collections: Vec<CollectionDto>,
}

impl ArtistProfileDto {
  pub fn new(profile: ArtistProfile, catalog: &Catalog, is_liked: impl Fn(&Artwork) -> bool) -> Self {
    let collections = profile
      .collections
      .into_iter()
      .map(|group| CollectionDto {
        id: group.collection.id.to_string(),
        title: group.collection.title,
        concept: group.collection.concept,
        artworks: group.artworks.iter().map(|a| ArtworkCardDto::new(a, catalog, is_liked(a))).collect(),
      })
      .collect();

    ArtistProfileDto {
      id: profile.artist.id.to_string(),
      name: profile.artist.name,
      bio: profile.artist.bio,
      avatar_url: profile.artist.avatar_url,
      collections,
    }
  }
}

/// Exhibitor profile as edited from the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
  pub name: String,
  pub avatar_url: String,
  pub bio: String,
}

impl From<ExhibitorProfile> for ProfileDto {
  fn from(p: ExhibitorProfile) -> Self {
    ProfileDto { name: p.name, avatar_url: p.avatar_url, bio: p.bio }
  }
}

impl From<ProfileDto> for ExhibitorProfile {
  fn from(dto: ProfileDto) -> Self {
    ExhibitorProfile { name: dto.name, avatar_url: dto.avatar_url, bio: dto.bio }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollectionDto {
  pub id: String,
  pub artist_id: String,
  pub title: String,
  pub concept: String,
}

impl From<Collection> for NewCollectionDto {
  fn from(c: Collection) -> Self {
    NewCollectionDto { id: c.id.to_string(), artist_id: c.artist_id.to_string(), title: c.title, concept: c.concept }
  }
}


/// Exhibitor dashboard: editable profile plus what the exhibitor created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
  pub profile: ProfileDto,
  pub collections: Vec<NewCollectionDto>,
  pub artworks: Vec<ArtworkCardDto>,
}
