//! Store client module
//!
//! HTTP access to the backing store, with every failure mode absorbed
//! into "no data this cycle".

pub mod store_client;

// Re-export main types
pub use store_client::StoreClient;
