//! # Data Loader Crate
//!
//! This crate loads and indexes the film catalogue and exposes it through
//! the `FactStore` contract used by the scoring crates.
//!
//! ## Main Components
//!
//! - **types**: `FilmRecord` and `FilmCatalog`
//! - **store**: the `FactStore` trait (lookup by title, list all, count)
//! - **parser**: parse `::`-separated catalogue files into records
//! - **index**: build and validate a `FilmCatalog`
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{FactStore, FilmCatalog};
//! use std::path::Path;
//!
//! let catalog = FilmCatalog::load_from_file(Path::new("data/films.dat"))?;
//!
//! let film = catalog.find_by_title("inception").unwrap();
//! println!("{} ({}) by {}", film.title, film.release_year, film.director);
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod store;
pub mod types;

pub use error::{DataLoadError, Result};
pub use store::{FactStore, title_order};
pub use types::{DEFAULT_BUDGET_USD, DEFAULT_RELEASE_YEAR, FilmCatalog, FilmRecord};
