//! # cardwatch-geo
//!
//! Coordinate validation and haversine great-circle distance.
//! Pure functions; validation failures are recoverable and callers are
//! expected to drop and count the offending transaction.

mod haversine;

pub use haversine::{haversine_km, validate};
