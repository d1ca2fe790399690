//! Filter implementations for criteria matching.
//!
//! This module contains the concrete filters that a FilterPipeline is built
//! from, one per criterion kind.

pub mod attribute;
pub mod year_range;

// Re-export for convenience
pub use attribute::{ActorFilter, DirectorFilter, GenreFilter, LanguageFilter};
pub use year_range::{YearFromFilter, YearToFilter};
