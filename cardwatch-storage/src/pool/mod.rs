//! Connection management for the state store.
//!
//! Each shard owns one store and therefore one write connection; reads go
//! through the writer too, absorbed by the hot cache above it.

pub mod pragmas;
pub mod write_connection;

pub use write_connection::WriteConnection;
