pub mod config;
pub mod error;
pub mod logging;

pub mod record;
pub mod store;
pub mod token;

pub use error::StoreError;
pub use store::{Mapping, MappingStore};
