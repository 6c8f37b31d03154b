//! Core domain model for discotheca.
//!
//! This crate defines the release-catalog data model (Release,
//! ReleaseLabel, ReleaseVideo, Track, Format) and the SQLite schema that
//! holds it, in both its canonical five-table and legacy three-table
//! variants, together with the database handle that resets, validates,
//! and inspects that schema.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod schema;

pub use error::{Error, Result};
