//! Reordenación del feed inmersivo tras un "me gusta".

use std::cmp::Reverse;

use crate::domain::Artwork;

/// Bonus de la propia obra pivote.
const SAME_ARTWORK: u8 = 3;
/// Bonus por compartir colección con el pivote.
const SAME_COLLECTION: u8 = 2;
/// Bonus por compartir artista con el pivote.
const SAME_ARTIST: u8 = 1;

/// Puntuación de afinidad de `artwork` respecto a `pivot`.
///
/// Los bonus son acumulativos. La comparación de colección es estructural:
/// dos obras sin colección se consideran de la "misma" colección.
pub fn affinity_score(artwork: &Artwork, pivot: &Artwork) -> u8 {
  let mut score = 0;
  if artwork.id == pivot.id {
    score += SAME_ARTWORK;
  }
  if artwork.collection_id == pivot.collection_id {
    score += SAME_COLLECTION;
  }
  if artwork.artist_id == pivot.artist_id {
    score += SAME_ARTIST;
  }
  score
}

/// Devuelve una nueva ordenación de `current_feed` que adelanta las obras
/// afines a `pivot`.
///
/// - Sin pivote, el feed se devuelve tal cual.
/// - La ordenación es estable: a igual puntuación se conserva el orden de
///   entrada.
/// - El pivote no necesita estar en el feed; solo se usa para puntuar.
pub fn rerank_feed(current_feed: &[Artwork], pivot: Option<&Artwork>) -> Vec<Artwork> {
  let Some(pivot) = pivot else {
    return current_feed.to_vec();
  };

  let mut scored: Vec<(u8, &Artwork)> =
    current_feed.iter().map(|artwork| (affinity_score(artwork, pivot), artwork)).collect();

  // `sort_by_key` es estable.
  scored.sort_by_key(|(score, _)| Reverse(*score));

  log::debug!("feed reranked around {} ({} items)", pivot.id, scored.len());

  scored.into_iter().map(|(_, artwork)| artwork.clone()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{ArtistId, ArtworkId, CollectionId, MediaType};

  fn artwork(id: &str, artist: &str, collection: Option<&str>) -> Artwork {
    Artwork {
      id: ArtworkId::from(id),
      artist_id: ArtistId::from(artist),
      collection_id: collection.map(CollectionId::from),
      title: id.to_uppercase(),
      description: String::new(),
      price: 100,
      media_type: MediaType::Image,
      media_url: String::new(),
      likes: 0,
      average_view_time: 10,
      category: None,
      year: None,
      artist_display_name: None,
    }
  }

  fn ids(feed: &[Artwork]) -> Vec<&str> {
    feed.iter().map(|a| a.id.as_str()).collect()
  }

  #[test]
  fn no_pivot_is_identity() {
    let feed = vec![artwork("b", "y", None), artwork("a", "x", Some("c1"))];
    assert_eq!(rerank_feed(&feed, None), feed);
  }

  #[test]
  fn empty_feed_stays_empty() {
    let pivot = artwork("a1", "x", Some("c1"));
    assert!(rerank_feed(&[], Some(&pivot)).is_empty());
  }

  #[test]
  fn scores_and_orders_reference_scenario() {
    let feed = vec![
      artwork("a1", "x", Some("c1")),
      artwork("a2", "x", Some("c2")),
      artwork("a3", "y", Some("c1")),
    ];
    let pivot = feed[0].clone();

    let scores: Vec<u8> = feed.iter().map(|a| affinity_score(a, &pivot)).collect();
    assert_eq!(scores, vec![6, 1, 2]);

    assert_eq!(ids(&rerank_feed(&feed, Some(&pivot))), vec!["a1", "a3", "a2"]);
  }

  #[test]
  fn ties_keep_input_order() {
    let feed = vec![
      artwork("n1", "z", Some("c9")),
      artwork("s1", "x", Some("c2")),
      artwork("n2", "w", Some("c8")),
      artwork("s2", "x", Some("c3")),
    ];
    let pivot = artwork("p", "x", Some("c1"));

    assert_eq!(ids(&rerank_feed(&feed, Some(&pivot))), vec!["s1", "s2", "n1", "n2"]);
  }

  #[test]
  fn pivot_surfaces_first_even_from_the_back() {
    let feed = vec![
      artwork("a2", "x", Some("c1")),
      artwork("a3", "y", None),
      artwork("a1", "x", Some("c1")),
    ];
    let reranked = rerank_feed(&feed, Some(&feed[2].clone()));
    assert_eq!(reranked[0].id.as_str(), "a1");
  }

  #[test]
  fn pivot_absent_from_feed_still_reorders() {
    let feed = vec![artwork("a", "y", Some("c2")), artwork("b", "x", Some("c1"))];
    let pivot = artwork("outside", "x", Some("c1"));
    assert_eq!(ids(&rerank_feed(&feed, Some(&pivot))), vec!["b", "a"]);
  }

  #[test]
  fn missing_collections_count_as_shared() {
    let feed = vec![artwork("has", "y", Some("c1")), artwork("none", "y", None)];
    let pivot = artwork("p", "x", None);

    assert_eq!(affinity_score(&feed[1], &pivot), 2);
    assert_eq!(ids(&rerank_feed(&feed, Some(&pivot))), vec!["none", "has"]);
  }

  #[test]
  fn duplicate_pivot_ids_both_score_full() {
    let mut first = artwork("a1", "x", Some("c1"));
    first.title = "first".into();
    let mut second = artwork("a1", "x", Some("c1"));
    second.title = "second".into();
    let feed = vec![artwork("b", "y", Some("c2")), first.clone(), artwork("c", "x", Some("c3")), second.clone()];

    assert_eq!(affinity_score(&first, &first), 6);
    assert_eq!(affinity_score(&second, &first), 6);

    let reranked = rerank_feed(&feed, Some(&first));
    let titles: Vec<&str> = reranked.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "C", "B"]);
  }

  #[test]
  fn input_is_not_mutated() {
    let feed = vec![artwork("a", "y", None), artwork("b", "x", Some("c1"))];
    let before = feed.clone();
    let _ = rerank_feed(&feed, Some(&feed[1].clone()));
    assert_eq!(feed, before);
  }
}
