//! Basic example of using the planes engine

use planes_core::{ConstraintGrid, Observation, PieceCatalog, Searcher, SolutionIndex};

fn main() {
    // Enumerate every arrangement
    println!("Searching all placements...\n");
    let catalog = PieceCatalog::new();
    let solutions = Searcher::new(&catalog).find_all_solutions();
    println!("Found {} solutions", solutions.len());

    // Index them by finished board
    let index = match SolutionIndex::build(&solutions) {
        Ok(index) => index,
        Err(e) => {
            println!("Search produced an overlapping solution: {}", e);
            return;
        }
    };
    println!("Index holds {} keys\n", index.key_count());

    // Pretend the camera saw the first solution's connectors
    let Some(first) = solutions.first() else {
        return;
    };
    let board = match first.board() {
        Ok(board) => board,
        Err(e) => {
            println!("Could not rebuild board: {}", e);
            return;
        }
    };
    println!("Target board:");
    println!("{}", board);

    let mut seen = Observation::new();
    for (row, col, value) in board.iter() {
        if value.is_directional() {
            seen.set(row - 1, col - 1, value);
        }
    }

    let matches = index.find_matches(&seen, None);
    println!("Exact lookup: {} match(es)", matches.len());
    for solution in &matches {
        println!("{}", solution.render());
        for placement in &solution.placements {
            println!("  {}", placement);
        }
    }

    // Parse an observation and hints from text
    println!("\n--- Parsing an observation from text ---\n");
    if let (Ok(seen), Ok(hints)) = (
        Observation::parse("*.../..*./.*../...*"),
        ConstraintGrid::parse("|.../..-./.|../...-"),
    ) {
        let loose = index.find_matches(&seen, None);
        let narrowed = index.find_matches(&seen, Some(&hints));
        println!(
            "Any-orientation lookup: {} match(es), {} within constraints",
            loose.len(),
            narrowed.len()
        );
    }
}
