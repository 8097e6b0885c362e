//! Transport layer for the upstream book catalog.
//!
//! # Modules
//!
//! - `client`: `reqwest`-based client issuing the two catalog requests
//! - `models`: JSON wire records and their conversion into domain types

pub mod client;
pub mod models;

pub use client::BooksApiClient;
pub use models::{ImageLinks, Volume, VolumeInfo, VolumeList, VolumeRef};
