use macollection_core::domain::{ArtistId, CategoryFilter};
use macollection_core::ports::CatalogRepository;
use macollection_core::services::{Catalog, filter_catalog};
use macollection_storage::SqliteCatalogRepository;

fn main() {
  // ajusta la ruta si quieres usar otra base
  let repo = SqliteCatalogRepository::new("macollection.db").expect("failed to connect");
  let seeded = repo.seed_if_empty().expect("failed to seed");
  println!("Seeded demo catalog: {seeded}");

  let catalog = Catalog::load(&repo).expect("failed to load catalog");
  let lina = repo.find_artist(&ArtistId::from("artist-lina-moreau")).expect("failed to load artist");
  println!("Loaded from DB: {lina:?}");

  for artwork in filter_catalog(catalog.artworks(), "lina", CategoryFilter::All, &catalog) {
    println!("{} | {} | {}€", artwork.id, artwork.title, artwork.price);
  }
}
