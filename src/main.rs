use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use pathfinder::loader::{self, FileFormat};
use pathfinder::report::Summary;
use pathfinder::{Algorithm, Graph, SearchResult};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct GraphLoadError(PathBuf, #[source] loader::Error);

#[derive(Parser)]
struct Cli {
    /// The path to the vertex table (vertex,latitude,longitude), optionally gzip- or bzip2-compressed
    #[arg(long, default_value = "vertices.csv")]
    vertices: PathBuf,

    /// The path to the edge table (source,destination,distance,highway), optionally compressed
    #[arg(long, default_value = "edges.csv")]
    edges: PathBuf,

    /// The path to the results log, to which every search is appended
    #[arg(long, default_value = "results.txt")]
    results: PathBuf,

    /// Search algorithm: dijkstra, greedy or astar. Together with --start and --goal,
    /// runs a single search instead of the interactive prompt.
    #[arg(long, requires_all = ["start", "goal"])]
    algorithm: Option<Algorithm>,

    /// Name of the start city
    #[arg(long, requires_all = ["algorithm", "goal"])]
    start: Option<String>,

    /// Name of the goal city
    #[arg(long, requires_all = ["algorithm", "start"])]
    goal: Option<String>,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::default_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let g = load_graph(&cli.vertices, &cli.edges)?;

    if let (Some(algorithm), Some(start), Some(goal)) = (cli.algorithm, &cli.start, &cli.goal) {
        return run_search(&g, algorithm, start, goal, &cli.results);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Select search algorithm:");
        for (idx, algorithm) in Algorithm::ALL.iter().enumerate() {
            println!("{}. {}", idx + 1, algorithm);
        }
        let choice = prompt(&mut lines, "Enter choice (1/2/3): ")?;
        let start = prompt(&mut lines, "Enter start city: ")?;
        let goal = prompt(&mut lines, "Enter goal city: ")?;

        let algorithm = match choice.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(_) => {
                println!("Invalid choice.");
                return Ok(());
            }
        };

        run_search(&g, algorithm, &start, &goal, &cli.results)?;

        let again = prompt(&mut lines, "\nSearch another route? (y/n): ")?;
        if !again.eq_ignore_ascii_case("y") {
            println!("Thank you for using the Oregon Pathfinder!");
            return Ok(());
        }
    }
}

fn load_graph(vertices: &Path, edges: &Path) -> Result<Graph, GraphLoadError> {
    let mut g = Graph::default();
    loader::add_vertices_from_file(&mut g, FileFormat::Unknown, vertices)
        .map_err(|e| GraphLoadError(vertices.to_path_buf(), e))?;
    loader::add_edges_from_file(&mut g, FileFormat::Unknown, edges)
        .map_err(|e| GraphLoadError(edges.to_path_buf(), e))?;
    Ok(g)
}

fn run_search(
    g: &Graph,
    algorithm: Algorithm,
    start: &str,
    goal: &str,
    results: &Path,
) -> Result<(), Box<dyn Error>> {
    let result = algorithm.run(g, start, goal);
    print_result(&result);

    Summary {
        algorithm,
        start,
        goal,
        result: &result,
    }
    .append_summary(results)?;

    Ok(())
}

fn print_result(result: &SearchResult) {
    if !result.is_found() {
        println!("No path found.");
        return;
    }

    println!("\nPath found:");
    println!("{}", result.path.join(" -> "));
    println!("Total distance: {:.2} miles", result.cost);
    println!("Vertices explored: {}", result.vertices_explored);
    println!("Edges evaluated: {}", result.edges_evaluated);
    println!("Execution time: {:.6} seconds", result.elapsed.as_secs_f64());
}

/// Prints a prompt and reads a single trimmed line. End of input counts as an empty answer.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Ok(String::new()),
    }
}
