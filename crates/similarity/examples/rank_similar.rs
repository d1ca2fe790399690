//! Example: Rank films similar to a title
//!
//! Run with: cargo run --package similarity --example rank_similar -- "Inception"
//!
//! This example shows how to:
//! 1. Load the film catalogue
//! 2. Rank similar films with both measures
//! 3. Show the per-signal breakdown of the points measure

use data_loader::{FactStore, FilmCatalog};
use similarity::{PointsSimilarity, Ranker, WeightedNeighbourSimilarity};
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let title = std::env::args().nth(1).unwrap_or_else(|| "Inception".to_string());

    let catalog = FilmCatalog::load_from_file(Path::new("data/films.dat"))?;
    let Some(target) = catalog.find_by_title(&title) else {
        println!("'{}' is not in the catalogue", title);
        return Ok(());
    };
    let films = catalog.list_all();

    println!("=== Films similar to {} ({}) ===\n", target.title, target.release_year);

    let points = PointsSimilarity::new();
    let start = Instant::now();
    let ranked = Ranker::new(points.clone()).rank(&target, &films, 5);
    println!("Points measure ({:?}):", start.elapsed());
    for (i, result) in ranked.iter().enumerate() {
        let b = points.breakdown(&target, &result.film);
        println!(
            "  {}. {} - {:.0} pts (genres {:.0}, director {:.0}, actors {:.0}, rating {:.0}, decade {:.0}, languages {:.0})",
            i + 1,
            result.title,
            result.score,
            b.genres,
            b.director,
            b.actors,
            b.rating,
            b.decade,
            b.languages
        );
    }

    let start = Instant::now();
    let ranked = Ranker::new(WeightedNeighbourSimilarity::new()).rank(&target, &films, 5);
    println!("\nWeighted measure ({:?}):", start.elapsed());
    for (i, result) in ranked.iter().enumerate() {
        println!("  {}. {} - {:.3}", i + 1, result.title, result.score);
    }

    Ok(())
}
