pub mod artist;
pub mod artwork;
pub mod category;
pub mod collection;
pub mod ids;

pub use artist::Artist;
pub use artwork::{Artwork, MediaType};
pub use category::{Category, CategoryFilter, UNCATEGORIZED_KEY};
pub use collection::Collection;
pub use ids::{ArtistId, ArtworkId, CollectionId};
