use crate::schema::{artists, artworks, collections};

use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = artists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistRow {
  pub id: String,
  pub name: String,
  pub bio: String,
  pub avatar_url: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = artists)]
pub struct NewArtistRow<'a> {
  pub id: &'a str,
  pub name: &'a str,
  pub bio: &'a str,
  pub avatar_url: &'a str,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = collections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CollectionRow {
  pub id: String,
  pub artist_id: String,
  pub title: String,
  pub concept: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = collections)]
pub struct NewCollectionRow<'a> {
  pub id: &'a str,
  pub artist_id: &'a str,
  pub title: &'a str,
  pub concept: &'a str,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = artworks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtworkRow {
  pub id: String,
  pub artist_id: String,
  pub collection_id: Option<String>,
  pub title: String,
  pub description: String,
  pub price: i64,
  pub media_type: String,
  pub media_url: String,
  pub likes: i64,
  pub average_view_time: i64,
  pub category: Option<String>,
  pub year: Option<String>,
  pub artist_display_name: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = artworks)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewArtworkRow<'a> {
  pub id: &'a str,
  pub artist_id: &'a str,
  pub collection_id: Option<&'a str>,
  pub title: &'a str,
  pub description: &'a str,
  pub price: i64,
  pub media_type: &'a str,
  pub media_url: &'a str,
  pub likes: i64,
  pub average_view_time: i64,
  pub category: Option<&'a str>,
  pub year: Option<&'a str>,
  pub artist_display_name: Option<&'a str>,
}
