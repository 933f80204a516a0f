pub mod domain;
pub mod errors;
pub mod memory;
pub mod ports;
pub mod seed;
pub mod services;
pub mod state;

pub use errors::{CoreError, DraftError};
pub use services::{filter_catalog, rerank_feed};
