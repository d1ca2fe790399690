use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use advisor::{
    AdvisorConfig, FilmAdvisor, QualityBand, QualityOutcome, QualityVerdict, SimilarOutcome,
    current_year,
};
use data_loader::{FactStore, FilmCatalog};
use inference::{FuzzyQualityEngine, InferenceEngine, RemoteInferenceEngine};
use pipeline::{Criteria, CriteriaMatch, MatchMode};
use similarity::{MeasureKind, ScoreResult};

/// Film Advisor - similar films, quality verdicts and criteria search
#[derive(Parser)]
#[command(name = "film-advisor")]
#[command(about = "Content-based film recommendations and quality assessment", long_about = None)]
struct Cli {
    /// Path to the film catalogue file
    #[arg(short, long, env = "FILM_CATALOG", default_value = "data/films.dat")]
    catalog: PathBuf,

    /// Year that film ages are measured from (defaults to the current year)
    #[arg(long, env = "FILM_REFERENCE_YEAR")]
    reference_year: Option<i32>,

    /// Address of a remote quality inference service; the built-in fuzzy
    /// engine is used when absent
    #[arg(long, env = "FILM_INFERENCE_ADDR")]
    inference_addr: Option<String>,

    /// Similarity measure used for ranking
    #[arg(long, env = "FILM_MEASURE", value_enum, default_value_t = Measure::Points)]
    measure: Measure,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find films similar to a title
    Similar {
        /// Title of the film to compare against (case-insensitive)
        title: String,

        /// How many similar films to show (default 5)
        #[arg(long)]
        count: Option<String>,

        /// Show the per-signal points for each result
        #[arg(long)]
        explain: bool,
    },

    /// Assess a film's quality
    Assess {
        /// Title of the film to assess (case-insensitive)
        title: String,
    },

    /// Recommend films matching attribute criteria
    Recommend {
        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        director: Option<String>,

        #[arg(long)]
        actor: Option<String>,

        #[arg(long)]
        language: Option<String>,

        /// Earliest release year (inclusive)
        #[arg(long)]
        year_from: Option<i32>,

        /// Latest release year (inclusive)
        #[arg(long)]
        year_to: Option<i32>,

        /// strict: every criterion must match; ranked: order by matches
        #[arg(long, value_enum, default_value_t = Mode::from(MatchMode::default()))]
        mode: Mode,
    },

    /// List every title in the catalogue
    List,

    /// Search titles by fragment (case-insensitive)
    Search {
        fragment: String,
    },

    /// Time similarity and quality requests over random titles
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Measure {
    Points,
    Weighted,
}

impl From<Measure> for MeasureKind {
    fn from(measure: Measure) -> Self {
        match measure {
            Measure::Points => MeasureKind::Points,
            Measure::Weighted => MeasureKind::Weighted,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Strict,
    Ranked,
}

impl From<MatchMode> for Mode {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Strict => Mode::Strict,
            MatchMode::Ranked => Mode::Ranked,
        }
    }
}

impl From<Mode> for MatchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Strict => MatchMode::Strict,
            Mode::Ranked => MatchMode::Ranked,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = FilmCatalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load catalogue from {}", cli.catalog.display()))?;
    if !cli.json {
        println!(
            "{} Loaded {} films in {:?}",
            "✓".green(),
            catalog.count(),
            start.elapsed()
        );
    }
    let store: Arc<dyn FactStore> = Arc::new(catalog);

    let engine: Arc<dyn InferenceEngine> = match &cli.inference_addr {
        Some(addr) => Arc::new(
            RemoteInferenceEngine::connect(addr.as_str())
                .context("Failed to connect to inference service")?,
        ),
        None => Arc::new(FuzzyQualityEngine::new()),
    };

    let config = AdvisorConfig::default()
        .with_reference_year(cli.reference_year.unwrap_or_else(current_year))
        .with_measure(cli.measure.into());
    let advisor = FilmAdvisor::new(store, engine, config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Similar {
            title,
            count,
            explain,
        } => handle_similar(&advisor, &title, count.as_deref(), explain, cli.json)?,
        Commands::Assess { title } => handle_assess(&advisor, &title, cli.json)?,
        Commands::Recommend {
            genre,
            director,
            actor,
            language,
            year_from,
            year_to,
            mode,
        } => {
            let criteria = Criteria {
                genre,
                director,
                actor,
                language,
                year_from,
                year_to,
            }
            .normalized();
            handle_recommend(&advisor, criteria, mode.into(), cli.json)?
        }
        Commands::List => handle_list(&advisor, cli.json)?,
        Commands::Search { fragment } => handle_search(&advisor, &fragment, cli.json)?,
        Commands::Benchmark { requests } => handle_benchmark(&advisor, requests)?,
    }

    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handle the 'similar' command
fn handle_similar(
    advisor: &FilmAdvisor,
    title: &str,
    count: Option<&str>,
    explain: bool,
    json: bool,
) -> Result<()> {
    let outcome = advisor.similar_films(title, count);
    if json {
        return print_json(&outcome);
    }

    match outcome {
        SimilarOutcome::CatalogueTooSmall { total } => {
            println!(
                "{}",
                format!("Not enough films for comparison ({} in catalogue)", total).yellow()
            );
        }
        SimilarOutcome::NotFound { title } => {
            println!("{}", format!("Film not found: {}", title).red());
        }
        SimilarOutcome::Found {
            target,
            count,
            results,
        } => {
            if let Some(adjustment) = &count.adjustment {
                println!(
                    "{}",
                    format!("Using {} results ({:?})", count.value, adjustment).yellow()
                );
            }
            println!(
                "{}",
                format!(
                    "Films similar to {} ({}) - {} measure:",
                    target.title,
                    target.release_year,
                    advisor.ranker().measure_name()
                )
                .bold()
                .blue()
            );
            print_similar(advisor, &target.title, &results, explain);
        }
    }
    Ok(())
}

fn print_similar(advisor: &FilmAdvisor, target: &str, results: &[ScoreResult], explain: bool) {
    for (i, result) in results.iter().enumerate() {
        let film = &result.film;
        let genres = film.genres.iter().cloned().collect::<Vec<_>>().join(", ");
        println!(
            "{}. {} ({}) [{}] IMDb {:.1} - Score: {:.2}",
            (i + 1).to_string().green(),
            film.title,
            film.release_year,
            genres,
            film.imdb_rating,
            result.score
        );
        if explain {
            if let Some(b) = advisor.explain(target, &film.title) {
                println!(
                    "   genres {:.0}, director {:.0}, actors {:.0}, rating {:.0}, decade {:.0}, languages {:.0}",
                    b.genres, b.director, b.actors, b.rating, b.decade, b.languages
                );
            }
        }
    }
}

/// Handle the 'assess' command
fn handle_assess(advisor: &FilmAdvisor, title: &str, json: bool) -> Result<()> {
    let outcome = advisor
        .assess_quality(title)
        .with_context(|| format!("Failed to assess '{}'", title))?;
    if json {
        return print_json(&outcome);
    }

    match outcome {
        QualityOutcome::NotFound { title } => {
            println!("{}", format!("Film not found: {}", title).red());
        }
        QualityOutcome::Assessed(verdict) => print_verdict(&verdict),
    }
    Ok(())
}

fn print_verdict(verdict: &QualityVerdict) {
    let band = match verdict.band {
        QualityBand::Poor => verdict.band.to_string().red(),
        QualityBand::Good => verdict.band.to_string().yellow(),
        QualityBand::Excellent => verdict.band.to_string().green(),
    };
    println!("{}", format!("Quality of {}", verdict.title).bold().blue());
    println!("{}Score: {:.2} / 100 ({})", "• ".green(), verdict.score, band);

    let s = &verdict.signals;
    println!("{}Director quality: {:.2}", "• ".cyan(), s.director_quality);
    println!("{}Acting quality:   {:.2}", "• ".cyan(), s.acting_quality);
    println!("{}Story quality:    {:.2}", "• ".cyan(), s.story_quality);
    println!("{}Visual effects:   {:.2}", "• ".cyan(), s.visual_effects);
    println!("{}Cultural impact:  {:.2}", "• ".cyan(), s.cultural_impact);

    let f = &verdict.facts;
    println!(
        "Released {}, IMDb {:.1}, box office ${:.0}, budget ${:.0} (ROI {:.2})",
        f.release_year, f.imdb_rating, f.box_office_usd, f.budget_usd, f.return_on_investment
    );
    if !f.awards.is_empty() {
        println!("Awards:");
        for award in &f.awards {
            println!("  - {}", award);
        }
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    advisor: &FilmAdvisor,
    criteria: Criteria,
    mode: MatchMode,
    json: bool,
) -> Result<()> {
    let matches = advisor.recommend_by_criteria(&criteria, mode);
    if json {
        return print_json(&matches);
    }

    println!(
        "{}",
        format!("{} films match ({:?} mode):", matches.len(), mode)
            .bold()
            .blue()
    );
    print_matches(&matches, mode);
    Ok(())
}

fn print_matches(matches: &[CriteriaMatch], mode: MatchMode) {
    for m in matches {
        let film = &m.film;
        let genres = film.genres.iter().cloned().collect::<Vec<_>>().join(", ");
        let director = if film.director.is_empty() {
            "unknown director"
        } else {
            film.director.as_str()
        };
        match mode {
            MatchMode::Ranked => println!(
                "{} {} ({}) - {} [{}]",
                format!("[{}]", m.matched).green(),
                film.title,
                film.release_year,
                director,
                genres
            ),
            MatchMode::Strict => println!(
                "{} ({}) - {} [{}]",
                film.title, film.release_year, director, genres
            ),
        }
    }
}

/// Handle the 'list' command
fn handle_list(advisor: &FilmAdvisor, json: bool) -> Result<()> {
    let listing = advisor.list_titles();
    if json {
        return print_json(&listing);
    }

    println!("{}", format!("{} films:", listing.total).bold().blue());
    for title in &listing.titles {
        println!("  - {}", title);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(advisor: &FilmAdvisor, fragment: &str, json: bool) -> Result<()> {
    let titles = advisor.search(fragment);
    if json {
        return print_json(&titles);
    }

    println!("{}", format!("Search results for '{}':", fragment).bold().blue());
    if titles.is_empty() {
        println!("  (no matches)");
    }
    for title in &titles {
        println!("  - {}", title);
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(advisor: &FilmAdvisor, requests: usize) -> Result<()> {
    ensure!(requests > 0, "--requests must be at least 1");

    let titles = advisor.list_titles().titles;
    ensure!(!titles.is_empty(), "The catalogue is empty");

    // Pick random titles up front so timing covers only the requests
    let picks: Vec<&str> = (0..requests)
        .map(|_| titles[rand::random::<u32>() as usize % titles.len()].as_str())
        .collect();

    let mut similar_timings = Vec::with_capacity(requests);
    let mut quality_timings = Vec::with_capacity(requests);
    for title in picks {
        let start = Instant::now();
        advisor.similar_films(title, None);
        similar_timings.push(start.elapsed());

        let start = Instant::now();
        advisor
            .assess_quality(title)
            .with_context(|| format!("Failed to assess '{}'", title))?;
        quality_timings.push(start.elapsed());
    }

    println!("{}", "Benchmark results:".bold().blue());
    print_latencies("similar", similar_timings);
    print_latencies("assess", quality_timings);
    Ok(())
}

fn print_latencies(label: &str, mut timings: Vec<Duration>) {
    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = timings.len() as f32 / total_time.as_secs_f32();

    println!("{}", label.green());
    println!("  Total time: {:?}", total_time);
    println!("  Average latency: {:?}", avg_latency);
    println!("  P50 latency: {:?}", p50);
    println!("  P95 latency: {:?}", p95);
    println!("  P99 latency: {:?}", p99);
    println!("  Throughput: {:.2} requests/second", throughput);
}
