//! End-to-end tests through the advisor with the built-in fuzzy engine.

use std::sync::Arc;

use advisor::{AdvisorConfig, FilmAdvisor, QualityBand, QualityOutcome, SimilarOutcome};
use data_loader::{FactStore, FilmCatalog};
use inference::FuzzyQualityEngine;

const CATALOGUE: &str = "\
# title::year::rating::director::genres::actors::languages::box_office::budget::awards
The Godfather::1972::9.2::Francis Ford Coppola::Crime|Drama::Marlon Brando|Al Pacino::English|Italian::250_000_000::6_000_000::Academy Award for Best Picture|Academy Award for Best Actor|Academy Award for Best Adapted Screenplay
The Room::2003::3.6::Tommy Wiseau::Drama::Tommy Wiseau::English::1_800_000::6_000_000::
Battlefield Earth::2000::2.5::Roger Christian::SciFi|Action::John Travolta::English::29_700_000::73_000_000::
Heat::1995::8.3::Michael Mann::Crime|Action::Al Pacino|Robert De Niro::English::187_000_000::60_000_000::
";

fn create_advisor() -> FilmAdvisor {
    let catalog = data_loader::parser::parse_films_str(CATALOGUE, "inline").unwrap();
    let store: Arc<dyn FactStore> = Arc::new(FilmCatalog::from_films(catalog).unwrap());
    FilmAdvisor::new(
        store,
        Arc::new(FuzzyQualityEngine::new()),
        AdvisorConfig::default().with_reference_year(2025),
    )
}

fn band_of(advisor: &FilmAdvisor, title: &str) -> QualityBand {
    match advisor.assess_quality(title).unwrap() {
        QualityOutcome::Assessed(verdict) => {
            assert!((0.0..=100.0).contains(&verdict.score));
            verdict.band
        }
        QualityOutcome::NotFound { title } => panic!("{} not found", title),
    }
}

#[test]
fn test_quality_bands_follow_the_films() {
    let advisor = create_advisor();
    assert_eq!(band_of(&advisor, "The Godfather"), QualityBand::Excellent);
    assert_eq!(band_of(&advisor, "Battlefield Earth"), QualityBand::Poor);
}

#[test]
fn test_verdict_carries_source_facts() {
    let advisor = create_advisor();
    let QualityOutcome::Assessed(verdict) = advisor.assess_quality("the godfather").unwrap() else {
        panic!("expected a verdict");
    };
    assert_eq!(verdict.title, "The Godfather");
    assert_eq!(verdict.facts.release_year, 1972);
    assert_eq!(verdict.facts.awards.len(), 3);
    assert!((verdict.facts.return_on_investment - 250.0 / 6.0).abs() < 1e-9);
}

#[test]
fn test_similar_films_default_count_is_capped() {
    let advisor = create_advisor();
    let SimilarOutcome::Found { count, results, .. } = advisor.similar_films("Heat", None) else {
        panic!("expected results");
    };
    assert_eq!(count.value, 3);
    assert_eq!(results.len(), 3);
    // Crime + Action + Al Pacino
    assert_eq!(results[0].title, "The Godfather");
}

#[test]
fn test_outcomes_serialize_with_status_tag() {
    let advisor = create_advisor();
    let json = serde_json::to_value(advisor.similar_films("Tenet", None)).unwrap();
    assert_eq!(json["status"], "not_found");
    assert_eq!(json["title"], "Tenet");

    let json = serde_json::to_value(advisor.assess_quality("Heat").unwrap()).unwrap();
    assert_eq!(json["status"], "assessed");
    assert!(json["band"].is_string());
}
