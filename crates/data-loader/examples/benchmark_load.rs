use data_loader::{FactStore, FilmCatalog};
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/films.dat");

    println!("Loading film catalogue...\n");

    let start = Instant::now();
    let catalog = FilmCatalog::load_from_file(path).expect("Failed to load catalogue");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Films: {}", catalog.len());

    let start = Instant::now();
    for _ in 0..1000 {
        std::hint::black_box(catalog.find_by_title("inception"));
    }
    println!("1000 title lookups: {:?}", start.elapsed());
}
