//! Remote Store Layer
//!
//! Access to the authoritative mission collection.
//! `HttpStore` talks to the REST API; `MemoryStore` keeps the collection in-process.

mod http_store;
mod memory_store;
mod traits;

#[cfg(test)]
mod tests;

pub use http_store::HttpStore;
pub use memory_store::MemoryStore;
pub use traits::RemoteStore;
