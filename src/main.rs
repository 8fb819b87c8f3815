//! triz-mind CLI: contradiction analysis, brainstorming, and catalog
//! browsing from the terminal.
//!
//! Usage:
//!   cargo run -- analyze "the arm must be lighter but stay rigid"
//!   cargo run -- brainstorm "reduce waste heat" --count 8
//!   cargo run -- search segmentation
//!   cargo run -- list --category materials
//!   cargo run -- history --limit 5

use anyhow::Result;
use clap::{Parser, Subcommand};
use prettytable::{Table, row};
use std::path::PathBuf;
use std::str::FromStr;
use triz_mind::config::Config;
use triz_mind::engine::{Solution, TrizEngine};
use triz_mind::export::{self, ExportFormat};
use triz_mind::sessions::{ProblemSession, SessionStore};

#[derive(Parser)]
#[command(name = "triz-mind")]
#[command(about = "TRIZ contradiction analysis from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a problem statement against the contradiction matrix
    Analyze {
        /// Free-text problem description
        problem: String,
        /// Parameter to improve (name or alias)
        #[arg(long)]
        improving: Option<String>,
        /// Parameter that gets worse (name or alias)
        #[arg(long)]
        worsening: Option<String>,
        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
        /// Write the solutions to a file in the configured export format
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Generate a category-diverse idea list
    Brainstorm {
        problem: String,
        /// Number of principles to propose (clamped to 1..=40)
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        json: bool,
    },
    /// Search the principle catalog
    Search {
        /// Empty query lists the whole catalog
        query: Option<String>,
    },
    /// List principles, optionally filtered by category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one principle in full
    Show { id: u32 },
    /// Recent analysis sessions
    History {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Rate a recorded session 1-5
    Rate { session_id: String, rating: u8 },
    /// Usage statistics
    Stats,
    /// Manage favorite principles
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    Add { id: u8 },
    Remove { id: u8 },
    List,
}

fn main() -> Result<()> {
    triz_mind::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triz_mind=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let engine = TrizEngine::new(config.clone())?;

    match cli.command {
        Commands::Analyze {
            problem,
            improving,
            worsening,
            json,
            export,
        } => analyze(&engine, &config, &problem, improving, worsening, json, export),
        Commands::Brainstorm {
            problem,
            count,
            json,
        } => brainstorm(&engine, &problem, count, json),
        Commands::Search { query } => {
            search(&engine, query.as_deref().unwrap_or(""));
            Ok(())
        }
        Commands::List { category } => {
            list(&engine, category.as_deref());
            Ok(())
        }
        Commands::Show { id } => show(&engine, id),
        Commands::History { limit } => history(&config, limit),
        Commands::Rate { session_id, rating } => {
            let mut store = SessionStore::open(&config.storage)?;
            store.rate(&session_id, rating)?;
            println!("Session {session_id} rated {rating}/5");
            Ok(())
        }
        Commands::Stats => stats(&config),
        Commands::Favorites { action } => favorites(&engine, &config, action),
    }
}

fn analyze(
    engine: &TrizEngine,
    config: &Config,
    problem: &str,
    improving: Option<String>,
    worsening: Option<String>,
    json: bool,
    export_path: Option<PathBuf>,
) -> Result<()> {
    let analysis = engine.analyze(problem, improving.as_deref(), worsening.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        match (&analysis.improving, &analysis.worsening) {
            (Some(imp), Some(wor)) => {
                println!("Contradiction: improve '{}' vs '{}'", imp.name, wor.name)
            }
            (Some(imp), None) => println!("Improving '{}' (other side undetected)", imp.name),
            (None, Some(wor)) => println!("Worsening '{}' (other side undetected)", wor.name),
            (None, None) => println!("No parameters detected; broadly applicable principles:"),
        }
        print_solutions(&analysis.solutions);
    }

    if let Some(path) = export_path {
        let format = ExportFormat::from_str(&config.engine.export_format)?;
        let content = export::render(&analysis.solutions, format)?;
        std::fs::write(&path, content)?;
        println!("Exported to {}", path.display());
    }

    if config.storage.enable_history {
        let mut store = SessionStore::open(&config.storage)?;
        let session = ProblemSession::new(
            problem,
            analysis.improving.as_ref().map(|p| p.name.clone()),
            analysis.worsening.as_ref().map(|p| p.name.clone()),
            analysis.solutions.clone(),
        );
        let id = session.session_id.clone();
        store.record(session)?;
        println!("(session {id} recorded)");
    }
    Ok(())
}

fn brainstorm(engine: &TrizEngine, problem: &str, count: usize, json: bool) -> Result<()> {
    let solutions = engine.brainstorm(problem, count);
    if json {
        println!("{}", serde_json::to_string_pretty(&solutions)?);
    } else {
        println!("Brainstorm: {} ideas", solutions.len());
        print_solutions(&solutions);
    }
    Ok(())
}

fn print_solutions(solutions: &[Solution]) {
    if solutions.is_empty() {
        println!("No solutions found");
        return;
    }
    for (i, solution) in solutions.iter().enumerate() {
        println!(
            "\n{}. {} [{}]  confidence {:.0}%  relevance {:.0}%",
            i + 1,
            solution.principle_name,
            solution.category,
            solution.confidence * 100.0,
            solution.relevance * 100.0,
        );
        println!("   {}", solution.description);
        if let Some(example) = solution.examples.first() {
            println!("   e.g. {example}");
        }
    }
}

fn search(engine: &TrizEngine, query: &str) {
    let results = engine.search_principles(query);
    if results.is_empty() {
        println!("No principles match '{query}'");
        return;
    }
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Category", "Summary"]);
    for principle in results {
        table.add_row(row![
            principle.id,
            principle.name,
            principle.category,
            principle.summary
        ]);
    }
    table.printstd();
}

fn list(engine: &TrizEngine, category: Option<&str>) {
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Category", "Summary"]);
    for principle in engine.list_principles() {
        if let Some(filter) = category
            && !principle.category.eq_ignore_ascii_case(filter)
        {
            continue;
        }
        table.add_row(row![
            principle.id,
            principle.name,
            principle.category,
            principle.summary
        ]);
    }
    table.printstd();
}

fn show(engine: &TrizEngine, id: u32) -> Result<()> {
    let principle = engine.principle(id)?;
    println!("{}. {} [{}]", principle.id, principle.name, principle.category);
    println!("\n{}", principle.detail);
    println!("\nExamples:");
    for example in &principle.examples {
        println!("  - {example}");
    }
    if !principle.applications.is_empty() {
        println!("\nApplications:");
        for application in &principle.applications {
            println!("  - {application}");
        }
    }
    if !principle.steps.is_empty() {
        println!("\nSteps:");
        for step in &principle.steps {
            println!("  - {step}");
        }
    }
    if !principle.benefits.is_empty() {
        println!("\nBenefits:");
        for benefit in &principle.benefits {
            println!("  - {benefit}");
        }
    }
    Ok(())
}

fn history(config: &Config, limit: usize) -> Result<()> {
    let store = SessionStore::open(&config.storage)?;
    let recent = store.recent(limit);
    if recent.is_empty() {
        println!("No history recorded yet");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_titles(row!["Session", "When", "Problem", "Solutions", "Rating"]);
    for session in recent {
        let rating = session
            .rating
            .map(|r| format!("{r}/5"))
            .unwrap_or_else(|| "-".to_string());
        let mut problem = session.problem.clone();
        if problem.len() > 50 {
            problem.truncate(47);
            problem.push_str("...");
        }
        table.add_row(row![
            session.session_id,
            session.timestamp.format("%Y-%m-%d %H:%M"),
            problem,
            session.solutions.len(),
            rating
        ]);
    }
    table.printstd();
    Ok(())
}

fn stats(config: &Config) -> Result<()> {
    let store = SessionStore::open(&config.storage)?;
    let stats = store.statistics();
    println!("Total sessions:   {}", stats.total_sessions);
    println!("Rated sessions:   {}", stats.rated_sessions);
    if stats.rated_sessions > 0 {
        println!("Average rating:   {:.1}/5", stats.average_rating);
    }
    println!("Favorites:        {}", stats.favorites_count);
    Ok(())
}

fn favorites(engine: &TrizEngine, config: &Config, action: FavoritesAction) -> Result<()> {
    let mut store = SessionStore::open(&config.storage)?;
    match action {
        FavoritesAction::Add { id } => {
            store.add_favorite(id)?;
            let principle = engine.principle(id as u32)?;
            println!("Added {} ({}) to favorites", principle.name, id);
        }
        FavoritesAction::Remove { id } => {
            store.remove_favorite(id)?;
            println!("Removed {id} from favorites");
        }
        FavoritesAction::List => {
            if store.favorites().is_empty() {
                println!("Favorites is empty");
                return Ok(());
            }
            for &id in store.favorites() {
                if let Ok(principle) = engine.principle(id as u32) {
                    println!("{:>2}. {} [{}]", principle.id, principle.name, principle.category);
                }
            }
        }
    }
    Ok(())
}
