pub mod config;
pub mod models;
pub mod schema;

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use macollection_core::domain::{Artist, ArtistId, Artwork, Category, Collection, MediaType};
use macollection_core::ports::{CatalogRepository, RepoError};
use macollection_core::seed::demo_catalog;

pub use crate::config::StorageConfig;
use crate::models::{ArtistRow, ArtworkRow, CollectionRow, NewArtistRow, NewArtworkRow, NewCollectionRow};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

fn storage_err(e: impl std::fmt::Display) -> RepoError {
  RepoError::Storage(e.to_string())
}

/// Repositorio de catálogo sobre SQLite.
///
/// Las escrituras son upserts por id: una obra ya existente se actualiza
/// conservando su posición en el catálogo.
pub struct SqliteCatalogRepository {
  pool: SqlitePool,
}

impl SqliteCatalogRepository {
  /// Abre (o crea) la base y aplica las migraciones pendientes.
  pub fn new(database_url: &str) -> Result<Self, RepoError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder().build(manager).map_err(storage_err)?;
    let repo = Self { pool };

    let applied = {
      let mut pooled = repo.pool.get().map_err(storage_err)?;
      let conn: &mut SqliteConnection = &mut pooled;
      conn.run_pending_migrations(MIGRATIONS).map_err(storage_err)?.len()
    };
    if applied > 0 {
      log::info!("applied {applied} migrations to {database_url}");
    }

    Ok(repo)
  }

  /// Abre la base indicada en la sección `[storage]` de la configuración.
  pub fn new_from_config() -> Result<Self, RepoError> {
    let cfg = StorageConfig::load().map_err(storage_err)?;
    Self::open(&cfg)
  }

  pub fn open(cfg: &StorageConfig) -> Result<Self, RepoError> {
    let repo = Self::new(&cfg.db_path.to_string_lossy())?;
    if cfg.seed_demo_catalog {
      repo.seed_if_empty()?;
    }
    Ok(repo)
  }

  /// Siembra el catálogo de demostración si no hay ningún artista.
  ///
  /// Devuelve `true` si sembró.
  pub fn seed_if_empty(&self) -> Result<bool, RepoError> {
    let (demo_artists, demo_collections, demo_artworks) = demo_catalog();

    let seeded = self.with_conn(|conn| {
      conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let existing: i64 = schema::artists::table.count().get_result(conn)?;
        if existing > 0 {
          return Ok(false);
        }
        for artist in &demo_artists {
          upsert_artist(conn, artist)?;
        }
        for collection in &demo_collections {
          upsert_collection(conn, collection)?;
        }
        for artwork in &demo_artworks {
          upsert_artwork(conn, artwork)?;
        }
        Ok(true)
      })
    })?;

    if seeded {
      log::info!("seeded demo catalog ({} artworks)", demo_artworks.len());
    }
    Ok(seeded)
  }

  fn with_conn<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> QueryResult<T>) -> Result<T, RepoError> {
    let mut conn = self.pool.get().map_err(storage_err)?;
    f(&mut *conn).map_err(storage_err)
  }
}

fn upsert_artist(conn: &mut SqliteConnection, artist: &Artist) -> QueryResult<usize> {
  use crate::schema::artists::dsl::*;

  let row = NewArtistRow {
    id: artist.id.as_str(),
    name: &artist.name,
    bio: &artist.bio,
    avatar_url: &artist.avatar_url,
  };

  diesel::insert_into(artists)
    .values(&row)
    .on_conflict(id)
    .do_update()
    .set((name.eq(&artist.name), bio.eq(&artist.bio), avatar_url.eq(&artist.avatar_url)))
    .execute(conn)
}

fn upsert_collection(conn: &mut SqliteConnection, collection: &Collection) -> QueryResult<usize> {
  use crate::schema::collections::dsl::*;

  let row = NewCollectionRow {
    id: collection.id.as_str(),
    artist_id: collection.artist_id.as_str(),
    title: &collection.title,
    concept: &collection.concept,
  };

  diesel::insert_into(collections)
    .values(&row)
    .on_conflict(id)
    .do_update()
    .set((artist_id.eq(row.artist_id), title.eq(row.title), concept.eq(row.concept)))
    .execute(conn)
}

fn upsert_artwork(conn: &mut SqliteConnection, artwork: &Artwork) -> QueryResult<usize> {
  use crate::schema::artworks::dsl::*;

  let row = NewArtworkRow {
    id: artwork.id.as_str(),
    artist_id: artwork.artist_id.as_str(),
    collection_id: artwork.collection_id.as_ref().map(|c| c.as_str()),
    title: &artwork.title,
    description: &artwork.description,
    price: i64::from(artwork.price),
    media_type: artwork.media_type.key(),
    media_url: &artwork.media_url,
    likes: i64::from(artwork.likes),
    average_view_time: i64::from(artwork.average_view_time),
    category: artwork.category.map(|c| c.key()),
    year: artwork.year.as_deref(),
    artist_display_name: artwork.artist_display_name.as_deref(),
  };

  diesel::insert_into(artworks)
    .values(&row)
    .on_conflict(id)
    .do_update()
    .set((
      artist_id.eq(row.artist_id),
      collection_id.eq(row.collection_id),
      title.eq(row.title),
      description.eq(row.description),
      price.eq(row.price),
      media_type.eq(row.media_type),
      media_url.eq(row.media_url),
      likes.eq(row.likes),
      average_view_time.eq(row.average_view_time),
      category.eq(row.category),
      year.eq(row.year),
      artist_display_name.eq(row.artist_display_name),
    ))
    .execute(conn)
}

fn row_to_artist(row: ArtistRow) -> Artist {
  Artist { id: ArtistId::from(row.id), name: row.name, bio: row.bio, avatar_url: row.avatar_url }
}

fn row_to_collection(row: CollectionRow) -> Collection {
  Collection {
    id: row.id.into(),
    artist_id: row.artist_id.into(),
    title: row.title,
    concept: row.concept,
  }
}

fn to_u32(column: &str, value: i64) -> Result<u32, RepoError> {
  u32::try_from(value).map_err(|_| RepoError::Storage(format!("{column} out of range: {value}")))
}

fn row_to_artwork(row: ArtworkRow) -> Result<Artwork, RepoError> {
  Ok(Artwork {
    media_type: row.media_type.parse::<MediaType>().map_err(storage_err)?,
    category: row.category.as_deref().map(str::parse::<Category>).transpose().map_err(storage_err)?,
    price: to_u32("price", row.price)?,
    likes: to_u32("likes", row.likes)?,
    average_view_time: to_u32("average_view_time", row.average_view_time)?,
    id: row.id.into(),
    artist_id: row.artist_id.into(),
    collection_id: row.collection_id.map(Into::into),
    title: row.title,
    description: row.description,
    media_url: row.media_url,
    year: row.year,
    artist_display_name: row.artist_display_name,
  })
}

impl CatalogRepository for SqliteCatalogRepository {
  fn save_artist(&self, artist: &Artist) -> Result<(), RepoError> {
    self.with_conn(|conn| upsert_artist(conn, artist)).map(|_| ())
  }

  fn save_collection(&self, collection: &Collection) -> Result<(), RepoError> {
    self.with_conn(|conn| upsert_collection(conn, collection)).map(|_| ())
  }

  fn save_artwork(&self, artwork: &Artwork) -> Result<(), RepoError> {
    self.with_conn(|conn| upsert_artwork(conn, artwork)).map(|_| ())
  }

  fn find_artist(&self, artist_id: &ArtistId) -> Result<Option<Artist>, RepoError> {
    use crate::schema::artists::dsl::*;

    let row_opt = self.with_conn(|conn| {
      artists
        .filter(id.eq(artist_id.as_str()))
        .select(ArtistRow::as_select())
        .first::<ArtistRow>(conn)
        .optional()
    })?;

    Ok(row_opt.map(row_to_artist))
  }

  fn list_artists(&self) -> Result<Vec<Artist>, RepoError> {
    use crate::schema::artists::dsl::*;

    let rows = self.with_conn(|conn| {
      artists.select(ArtistRow::as_select()).order(sql::<BigInt>("rowid")).load::<ArtistRow>(conn)
    })?;
    Ok(rows.into_iter().map(row_to_artist).collect())
  }

  fn list_collections(&self) -> Result<Vec<Collection>, RepoError> {
    use crate::schema::collections::dsl::*;

    let rows = self.with_conn(|conn| {
      collections.select(CollectionRow::as_select()).order(sql::<BigInt>("rowid")).load::<CollectionRow>(conn)
    })?;
    Ok(rows.into_iter().map(row_to_collection).collect())
  }

  fn list_artworks(&self) -> Result<Vec<Artwork>, RepoError> {
    use crate::schema::artworks::dsl::*;

    let rows = self.with_conn(|conn| {
      artworks.select(ArtworkRow::as_select()).order(sql::<BigInt>("rowid")).load::<ArtworkRow>(conn)
    })?;
    rows.into_iter().map(row_to_artwork).collect()
  }

  fn collections_for_artist(&self, owner: &ArtistId) -> Result<Vec<Collection>, RepoError> {
    use crate::schema::collections::dsl::*;

    let rows = self.with_conn(|conn| {
      collections
        .filter(artist_id.eq(owner.as_str()))
        .select(CollectionRow::as_select())
        .order(sql::<BigInt>("rowid"))
        .load::<CollectionRow>(conn)
    })?;
    Ok(rows.into_iter().map(row_to_collection).collect())
  }

  fn artworks_for_artist(&self, owner: &ArtistId) -> Result<Vec<Artwork>, RepoError> {
    use crate::schema::artworks::dsl::*;

    let rows = self.with_conn(|conn| {
      artworks
        .filter(artist_id.eq(owner.as_str()))
        .select(ArtworkRow::as_select())
        .order(sql::<BigInt>("rowid"))
        .load::<ArtworkRow>(conn)
    })?;
    rows.into_iter().map(row_to_artwork).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use macollection_core::domain::{ArtworkId, CollectionId};
  use macollection_core::services::Catalog;
  use tempfile::{TempDir, tempdir};

  fn repo() -> (TempDir, SqliteCatalogRepository) {
    let dir = tempdir().unwrap();
    let db = dir.path().join("catalog.db");
    let repo = SqliteCatalogRepository::new(&db.to_string_lossy()).unwrap();
    (dir, repo)
  }

  #[test]
  fn seeds_once_and_keeps_catalog_order() {
    let (_dir, repo) = repo();
    assert!(repo.seed_if_empty().unwrap());
    assert!(!repo.seed_if_empty().unwrap());

    let (_, _, expected) = demo_catalog();
    assert_eq!(repo.list_artworks().unwrap(), expected);
    assert_eq!(repo.list_artists().unwrap().len(), 3);
    assert_eq!(repo.list_collections().unwrap().len(), 6);
  }

  #[test]
  fn upsert_updates_in_place() {
    let (_dir, repo) = repo();
    repo.seed_if_empty().unwrap();

    let mut artworks = repo.list_artworks().unwrap();
    let mut first = artworks.remove(0);
    first.title = "Midnight Reflection #4".into();
    first.collection_id = None;
    first.category = None;
    first.year = Some("2024".into());
    repo.save_artwork(&first).unwrap();

    let reloaded = repo.list_artworks().unwrap();
    assert_eq!(reloaded.len(), 9);
    assert_eq!(reloaded[0], first);
  }

  #[test]
  fn filters_by_artist() {
    let (_dir, repo) = repo();
    repo.seed_if_empty().unwrap();
    let malik = ArtistId::from("artist-malik-essadi");

    let collections = repo.collections_for_artist(&malik).unwrap();
    let ids: Vec<&str> = collections.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["col-malik-structures", "col-malik-desert"]);
    assert_eq!(repo.artworks_for_artist(&malik).unwrap().len(), 3);

    assert!(repo.find_artist(&malik).unwrap().is_some());
    assert!(repo.find_artist(&ArtistId::from("artist-ghost")).unwrap().is_none());
  }

  #[test]
  fn new_records_are_appended() {
    let (_dir, repo) = repo();
    repo.seed_if_empty().unwrap();

    let collection = Collection {
      id: CollectionId::from("user-col-1"),
      artist_id: ArtistId::from("artist-aya-nakamori"),
      title: "Brumes".into(),
      concept: "Collection personnelle".into(),
    };
    repo.save_collection(&collection).unwrap();

    let mut artwork = repo.list_artworks().unwrap().remove(6);
    artwork.id = ArtworkId::from("user-art-1");
    artwork.collection_id = Some(collection.id.clone());
    artwork.category = Some(Category::Sculpture);
    repo.save_artwork(&artwork).unwrap();

    let catalog = Catalog::load(&repo).unwrap();
    assert_eq!(catalog.collections().last().unwrap(), &collection);
    assert_eq!(catalog.artworks().last().unwrap(), &artwork);
    assert!(catalog.audit().is_empty());
  }
}
