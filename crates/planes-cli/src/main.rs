mod config;
mod logger;

use clap::{Parser, Subcommand};
use planes_core::{
    ConstraintGrid, IndexLoader, Observation, PieceCatalog, Searcher, SolutionIndex, SolutionStore,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "planes", version, about = "Solve the six-piece planes puzzle")]
struct Cli {
    /// Solution store file (defaults to $PLANES_DB, then the local data dir)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Enable debug prints
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every legal arrangement and save it as raw solutions
    Search {
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },
    /// Build the board-to-solution index from saved raw solutions
    Index,
    /// Look up the solutions matching an observed board
    Solve {
        /// Four rows of `. ^ > v < *`, separated by `/` or newlines
        #[arg(long)]
        board: String,
        /// Four rows of `. | -`, separated by `/` or newlines
        #[arg(long)]
        constraints: Option<String>,
    },
    /// Print every orientation of every piece
    Catalog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let store = SolutionStore::new(config::db_path(cli.db.as_deref()));
    log::debug!("using store {}", store.path().display());

    match cli.command {
        Commands::Search { threads } => {
            let catalog = PieceCatalog::new();
            let started = Instant::now();
            let solutions = Searcher::new(&catalog).search_parallel(catalog.pieces(), threads);
            log::info!("search took {:.2?}", started.elapsed());
            store.store_raw_solutions(&solutions)?;
            println!("{} solutions saved to {}", solutions.len(), store.path().display());
        }
        Commands::Index => {
            let raw = store.load_raw_solutions()?;
            let index = SolutionIndex::build(&raw)?;
            store.store_index(&index)?;
            let largest = index.iter().map(|(_, bucket)| bucket.len()).max().unwrap_or(0);
            log::debug!("largest bucket holds {} solutions", largest);
            println!(
                "{} solutions indexed under {} keys",
                raw.len(),
                index.key_count()
            );
        }
        Commands::Solve { board, constraints } => {
            let loader = IndexLoader::spawn(store);

            let observation = Observation::parse(&board)?;
            let hints = constraints
                .as_deref()
                .map(ConstraintGrid::parse)
                .transpose()?;
            if cli.verbose {
                eprintln!("{}", observation.to_board());
            }

            if !loader.is_finished() {
                log::debug!("waiting for solutions to load");
            }
            let index = loader.wait()?;
            let matches = index.find_matches(&observation, hints.as_ref());
            if matches.is_empty() {
                println!("Puzzle not found in solutions DB");
                return Ok(());
            }

            println!("{} matching solution(s)", matches.len());
            for (i, solution) in matches.iter().enumerate() {
                println!("\n#{}", i + 1);
                print!("{}", solution.render());
                for placement in &solution.placements {
                    println!("  {}", placement);
                }
            }
        }
        Commands::Catalog => {
            let catalog = PieceCatalog::new();
            for &piece in catalog.pieces() {
                let (r, g, b) = piece.rgb();
                println!(
                    "{} ({} #{:02x}{:02x}{:02x})",
                    piece,
                    piece.color_name(),
                    r,
                    g,
                    b
                );
                for orientation in catalog.orientations(piece) {
                    println!("  {}°", orientation.rotation.quarter_turns() * 90);
                    for row in &orientation.cells {
                        println!("    {:^7}{:^7}", row[0], row[1]);
                    }
                }
            }
        }
    }

    Ok(())
}
