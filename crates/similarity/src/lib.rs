//! # Similarity Crate
//!
//! Content-based similarity between films and the ranker built on top of it.
//!
//! ## Components
//!
//! ### Points measure (default)
//! Additive, per-signal points: shared genres, same director, shared actors,
//! close rating, same decade, shared languages. Every contribution can be
//! audited on its own through [`PointsSimilarity::breakdown`].
//!
//! ### Weighted measure
//! Weighted average of local similarities in [0, 1], a nearest-neighbour
//! style alternative. Opt-in only; the two measures are never blended.
//!
//! ### Ranker
//! Excludes the query film, scores candidates in parallel with rayon, sorts
//! by score (ties by title) and truncates to the requested count.
//!
//! ## Example Usage
//!
//! ```ignore
//! use similarity::{PointsSimilarity, Ranker};
//!
//! let ranker = Ranker::new(PointsSimilarity::new());
//! match ranker.rank_by_title(&catalog, "Inception", 5) {
//!     Some(results) => for r in results { println!("{} {}", r.title, r.score) },
//!     None => println!("not in catalogue"),
//! }
//! ```

pub mod points;
pub mod ranker;
pub mod types;
pub mod weighted;

pub use points::{PointWeights, PointsSimilarity, ScoreBreakdown};
pub use ranker::Ranker;
pub use types::{MeasureKind, ScoreResult, SimilarityMeasure};
pub use weighted::{NeighbourWeights, WeightedNeighbourSimilarity};

/// Build a ranker for the requested measure
pub fn ranker_for(kind: MeasureKind) -> Ranker {
    match kind {
        MeasureKind::Points => Ranker::new(PointsSimilarity::new()),
        MeasureKind::Weighted => Ranker::new(WeightedNeighbourSimilarity::new()),
    }
}
