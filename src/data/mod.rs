//! Data layer: the repository the controller reads books through.
//!
//! - `repository`: [`BookRepository`] trait and its HTTP implementation

pub mod repository;

pub use repository::{BookRepository, NetworkBookRepository};
