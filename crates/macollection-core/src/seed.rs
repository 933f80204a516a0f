//! Catálogo de demostración.
//!
//! Tres artistas, seis colecciones y nueve obras. Es el conjunto con el que
//! se siembra un almacén vacío y el que usan los tests.

use crate::domain::{Artist, ArtistId, Artwork, ArtworkId, Category, Collection, CollectionId, MediaType};

const PEXELS_VIDEO: &str = "https://videos.pexels.com/video-files/854149/854149-hd_1280_720_30fps.mp4";

fn pexels_photo(id: u32, width: u32) -> String {
  format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w={width}")
}

fn artist(id: &str, name: &str, bio: &str, avatar: u32) -> Artist {
  Artist { id: ArtistId::from(id), name: name.into(), bio: bio.into(), avatar_url: pexels_photo(avatar, 200) }
}

fn collection(id: &str, artist_id: &str, title: &str, concept: &str) -> Collection {
  Collection {
    id: CollectionId::from(id),
    artist_id: ArtistId::from(artist_id),
    title: title.into(),
    concept: concept.into(),
  }
}

/// Campos de una obra sembrada, en orden de declaración.
struct Seed<'a> {
  id: &'a str,
  artist: &'a str,
  collection: &'a str,
  title: &'a str,
  description: &'a str,
  price: u32,
  media: MediaType,
  photo: Option<u32>,
  likes: u32,
  view_time: u32,
  category: Option<Category>,
}

impl Seed<'_> {
  fn build(self) -> Artwork {
    let media_url = match (self.media, self.photo) {
      (MediaType::Image, Some(photo)) => pexels_photo(photo, 1200),
      _ => PEXELS_VIDEO.to_string(),
    };

    Artwork {
      id: ArtworkId::from(self.id),
      artist_id: ArtistId::from(self.artist),
      collection_id: Some(CollectionId::from(self.collection)),
      title: self.title.into(),
      description: self.description.into(),
      price: self.price,
      media_type: self.media,
      media_url,
      likes: self.likes,
      average_view_time: self.view_time,
      category: self.category,
      year: None,
      artist_display_name: None,
    }
  }
}

/// Devuelve `(artistas, colecciones, obras)` del catálogo de demostración.
pub fn demo_catalog() -> (Vec<Artist>, Vec<Collection>, Vec<Artwork>) {
  let artists = vec![
    artist(
      "artist-lina-moreau",
      "Lina Moreau",
      "Artiste numérique basée à Paris, Lina explore les frontières entre lumière, glitch et mémoire. Ses pièces jouent avec la persistance rétinienne et les flux vidéos compressés.",
      733872,
    ),
    artist(
      "artist-malik-essadi",
      "Malik Essadi",
      "Peintre et sculpteur, Malik construit des architectures imaginaires inspirées des médinas et des skylines contemporaines. Son travail est intensément tactile, même en numérique.",
      1704488,
    ),
    artist(
      "artist-aya-nakamori",
      "Aya Nakamori",
      "Aya travaille à l’intersection de la photographie et du son. Ses vidéos lentes sont pensées comme des haïkus visuels sur le temps qui passe.",
      733872,
    ),
  ];

  let collections = vec![
    collection(
      "col-lina-neon",
      "artist-lina-moreau",
      "Néons fantômes",
      "Une plongée dans des villes réinventées uniquement par leurs reflets lumineux. Chaque pièce est pensée comme un souvenir flou d’un lieu jamais visité.",
    ),
    collection(
      "col-lina-pixels",
      "artist-lina-moreau",
      "Pixels fragiles",
      "Séries d’images volontairement compressées, où les artefacts deviennent le sujet principal de l’œuvre.",
    ),
    collection(
      "col-malik-structures",
      "artist-malik-essadi",
      "Structures silencieuses",
      "Des masses architecturales quasi-monolithiques, éclairées comme des maquettes de cinéma.",
    ),
    collection(
      "col-malik-desert",
      "artist-malik-essadi",
      "Cartographies d’un désert imaginaire",
      "Encre, sable et pigments pour dessiner des territoires qui n’existent que dans les rêves.",
    ),
    collection(
      "col-aya-tides",
      "artist-aya-nakamori",
      "Tides",
      "Vidéos ultra-lentes de paysages côtiers, accompagnées de nappes sonores minimalistes.",
    ),
    collection(
      "col-aya-trains",
      "artist-aya-nakamori",
      "Les trains lents",
      "Série sur les trains régionaux japonais, où presque rien ne se passe. Tout est dans l’atmosphère.",
    ),
  ];

  let artworks = vec![
    Seed {
      id: "art-lina-01",
      artist: "artist-lina-moreau",
      collection: "col-lina-neon",
      title: "Midnight Reflection #3",
      description: "Reflet de néons sur un pare-brise, capturé pendant une averse. L’image semble presque liquide.",
      price: 2400,
      media: MediaType::Image,
      photo: Some(3404200),
      likes: 132,
      view_time: 18,
      category: Some(Category::Peinture),
    },
    Seed {
      id: "art-lina-02",
      artist: "artist-lina-moreau",
      collection: "col-lina-neon",
      title: "Ghosts of Shibuya",
      description: "Composition abstraite de panneaux lumineux superposés, comme vus à travers une mémoire défaillante.",
      price: 3200,
      media: MediaType::Video,
      photo: None,
      likes: 201,
      view_time: 27,
      category: Some(Category::Style),
    },
    Seed {
      id: "art-lina-03",
      artist: "artist-lina-moreau",
      collection: "col-lina-pixels",
      title: "Compression Study I",
      description: "Une image volontairement détruite par la compression, où chaque bloc de pixel devient une brique de couleur.",
      price: 1800,
      media: MediaType::Image,
      photo: Some(3404209),
      likes: 98,
      view_time: 15,
      category: Some(Category::Objet),
    },
    Seed {
      id: "art-malik-01",
      artist: "artist-malik-essadi",
      collection: "col-malik-structures",
      title: "Atlas 02",
      description: "Une masse architecturale isolée au milieu d’un vide noir, éclairée par une unique source rasante.",
      price: 5400,
      media: MediaType::Image,
      photo: Some(323780),
      likes: 256,
      view_time: 34,
      category: Some(Category::Sculpture),
    },
    Seed {
      id: "art-malik-02",
      artist: "artist-malik-essadi",
      collection: "col-malik-desert",
      title: "Dune Map #7",
      description: "Cartographie imaginaire réalisée à partir de sable fixé sur toile, ensuite numérisé en haute définition.",
      price: 3100,
      media: MediaType::Image,
      photo: Some(1329510),
      likes: 143,
      view_time: 22,
      category: Some(Category::Peinture),
    },
    Seed {
      id: "art-malik-03",
      artist: "artist-malik-essadi",
      collection: "col-malik-desert",
      title: "Dust Storm Blueprint",
      description: "Pigments ocre et indigo pour évoquer une tempête de sable vue depuis le ciel.",
      price: 2800,
      media: MediaType::Video,
      photo: None,
      likes: 167,
      view_time: 29,
      category: Some(Category::Peinture),
    },
    Seed {
      id: "art-aya-01",
      artist: "artist-aya-nakamori",
      collection: "col-aya-tides",
      title: "Tide Study #4",
      description: "Vidéo lente d’une marée montante, où seules de petites variations de lumière trahissent le temps qui passe.",
      price: 2100,
      media: MediaType::Video,
      photo: None,
      likes: 189,
      view_time: 41,
      category: Some(Category::Style),
    },
    Seed {
      id: "art-aya-02",
      artist: "artist-aya-nakamori",
      collection: "col-aya-trains",
      title: "Local Line, 17:03",
      description: "Un train régional filmé depuis l’intérieur, presque vide, baigné d’une lumière orange très douce.",
      price: 2600,
      media: MediaType::Image,
      photo: Some(1434608),
      likes: 134,
      view_time: 24,
      category: Some(Category::Objet),
    },
    Seed {
      id: "art-aya-03",
      artist: "artist-aya-nakamori",
      collection: "col-aya-trains",
      title: "Sleeper Car Memory",
      description: "Une image granuleuse d’un wagon de nuit, où les couleurs semblent presque désaturées par le temps.",
      price: 2950,
      media: MediaType::Image,
      photo: Some(1446948),
      likes: 120,
      view_time: 19,
      category: None,
    },
  ]
  .into_iter()
  .map(Seed::build)
  .collect();

  (artists, collections, artworks)
}
