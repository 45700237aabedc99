//! Instance metadata retrieval
//!
//! Two pieces: [`MetadataClient`] performs single-attribute lookups against
//! the local metadata server, and [`VmSnapshot`] aggregates the fixed set of
//! attributes into one record per request.

pub mod client;
pub mod snapshot;

pub use client::{FetchError, MetadataClient};
pub use snapshot::VmSnapshot;
