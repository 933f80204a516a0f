pub mod catalog;
pub mod catalog_filter;
pub mod exhibitor;
pub mod feed_ranker;
pub mod format;
pub mod offer;

pub use catalog::{ArtistLookup, ArtistProfile, Catalog, CollectionGroup, DataWarning};
pub use catalog_filter::filter_catalog;
pub use exhibitor::{ExhibitorProfile, NewArtworkDraft, NewCollectionDraft};
pub use feed_ranker::rerank_feed;
pub use offer::OfferQuote;
