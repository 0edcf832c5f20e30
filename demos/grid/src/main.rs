//! grid — route across a synthetic street grid.
//!
//! Builds the map from [`network`], then runs one or all of BFS, Dijkstra
//! and A* between two intersections, printing the route, its length, and
//! how many frontier entries each search examined.
//!
//! ```text
//! grid --rows 20 --cols 20 --start 0,0 --goal 19,12 --algorithm all
//! ```

mod logging;
mod network;

use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use rg_core::PlanePoint;
use rg_graph::{Algorithm, RouteGraph};

use network::{build_grid, intersection};

/// Route across a synthetic street grid with BFS, Dijkstra or A*
#[derive(Parser, Debug)]
#[command(name = "grid")]
#[command(about = "Route across a synthetic street grid", long_about = None)]
struct Args {
    /// Number of east-west streets
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of north-south avenues
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Block length in km
    #[arg(long, default_value_t = 0.1)]
    spacing: f64,

    /// Search to run: bfs, dijkstra, astar, or all
    #[arg(short, long, default_value = "all")]
    algorithm: String,

    /// Start intersection as "row,col"
    #[arg(long, default_value = "0,0", value_parser = parse_cell)]
    start: (usize, usize),

    /// Goal intersection as "row,col" (default: far corner)
    #[arg(long, value_parser = parse_cell)]
    goal: Option<(usize, usize)>,

    /// Log level or filter directive (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got {s:?}"))?;
    let row = row.trim().parse::<usize>().map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col.trim().parse::<usize>().map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok((row, col))
}

fn parse_algorithms(s: &str) -> Result<Vec<Algorithm>> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    s.split(',')
        .map(|name| name.trim().parse::<Algorithm>().map_err(Into::into))
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level)?;

    if args.rows == 0 || args.cols == 0 {
        bail!("grid must have at least one row and one column");
    }
    if args.spacing.is_nan() || args.spacing <= 0.0 {
        bail!("spacing must be positive, got {}", args.spacing);
    }
    let algorithms = parse_algorithms(&args.algorithm)?;
    let (start_row, start_col) = args.start;
    let (goal_row, goal_col) = args.goal.unwrap_or((args.rows - 1, args.cols - 1));

    let t0 = Instant::now();
    let graph = build_grid(args.rows, args.cols, args.spacing)?;
    info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "map built"
    );

    let start = intersection(start_row, start_col, args.spacing);
    let goal = intersection(goal_row, goal_col, args.spacing);

    for algorithm in algorithms {
        run(&graph, algorithm, start, goal)?;
    }
    Ok(())
}

fn run(
    graph: &RouteGraph<PlanePoint>,
    algorithm: Algorithm,
    start: PlanePoint,
    goal: PlanePoint,
) -> Result<()> {
    let mut visited = 0usize;
    let t0 = Instant::now();
    let route = graph.search(algorithm, start, goal, |_| visited += 1)?;
    let elapsed = t0.elapsed();

    println!("\n== {algorithm} ==");
    match route {
        None => println!("no route from {start} to {goal}"),
        Some(path) => {
            let cost = graph.path_cost(&path).unwrap_or(f64::NAN);
            println!("hops:     {}", path.len() - 1);
            println!("length:   {cost:.3} km");
            println!("visited:  {visited}");
            println!("time:     {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
            let stops: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("route:    {}", stops.join(" -> "));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_parsing() {
        assert_eq!(parse_cell("3,4"), Ok((3, 4)));
        assert_eq!(parse_cell(" 0 , 12 "), Ok((0, 12)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
    }

    #[test]
    fn algorithm_lists() {
        assert_eq!(parse_algorithms("all").unwrap(), Algorithm::ALL.to_vec());
        assert_eq!(
            parse_algorithms("astar, bfs").unwrap(),
            vec![Algorithm::AStar, Algorithm::Bfs]
        );
        assert!(parse_algorithms("bellman-ford").is_err());
    }

    #[test]
    fn all_searches_agree_on_grid_length() {
        let graph = build_grid(6, 7, 0.1).unwrap();
        let (start, goal) = (intersection(0, 0, 0.1), intersection(5, 6, 0.1));
        let dij = graph.dijkstra(start, goal).unwrap().unwrap();
        let ast = graph.a_star_search(start, goal).unwrap().unwrap();
        let bfs = graph.bfs(start, goal).unwrap().unwrap();

        let dij_cost = graph.path_cost(&dij).unwrap();
        let ast_cost = graph.path_cost(&ast).unwrap();
        assert!((dij_cost - ast_cost).abs() < 1e-9);
        assert!(bfs.len() <= dij.len());
        assert!(graph.path_cost(&bfs).unwrap() >= dij_cost - 1e-9);
    }
}
