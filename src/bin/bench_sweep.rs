//! Benchmark the sweep at various scales.
//!
//! Run with: cargo run --release --bin bench_sweep
//!
//! Usage:
//!   bench_sweep              Run default size (10k)
//!   bench_sweep 10k 100k 1m  Run multiple sizes
//!   bench_sweep -n 10        Run 10 iterations per size (for profiling)

use clap::Parser;
use std::time::Instant;
use sweepline_voronoi::sites::random_sites;
use sweepline_voronoi::{compute_with, Bounds, Position, VoronoiConfig};

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if s.ends_with('m') {
        (&s[..s.len() - 1], 1_000_000)
    } else if s.ends_with('k') {
        (&s[..s.len() - 1], 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

fn format_rate(count: usize, ms: f64) -> String {
    if ms <= 0.0 {
        return "N/A".to_string();
    }
    let per_sec = count as f64 / (ms / 1000.0);
    if per_sec >= 1_000_000.0 {
        format!("{:.2}M/s", per_sec / 1_000_000.0)
    } else if per_sec >= 1_000.0 {
        format!("{:.1}k/s", per_sec / 1000.0)
    } else {
        format!("{:.0}/s", per_sec)
    }
}

fn format_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}k", n / 1_000)
    } else {
        format!("{}", n)
    }
}

#[derive(Parser)]
#[command(name = "bench_sweep")]
#[command(about = "Benchmark sweepline-voronoi at various scales")]
struct Args {
    /// Site counts to benchmark (e.g., 10k, 100k, 1m)
    #[arg(value_parser = parse_count)]
    sizes: Vec<usize>,

    /// Random seed
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Skip polygon tracking (graph and rays only)
    #[arg(long)]
    no_polygons: bool,

    /// Number of iterations to run (useful for profiling)
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,
}

struct BenchResult {
    n: usize,
    time_ms: f64,
    num_vertices: usize,
    num_edges: usize,
    num_rays: usize,
}

fn run_benchmark(sites: &[Position], config: VoronoiConfig) -> BenchResult {
    let n = sites.len();

    let t0 = Instant::now();
    let output = compute_with(sites, config).expect("sweep should succeed");
    let time_ms = t0.elapsed().as_secs_f64() * 1000.0;

    #[cfg(debug_assertions)]
    {
        use sweepline_voronoi::validation::validate;
        let report = validate(&output.diagram);
        if !report.is_valid() {
            eprintln!("WARNING: Validation failed for n={}: {}", n, report);
        }
    }

    BenchResult {
        n,
        time_ms,
        num_vertices: output.diagram.num_vertices(),
        num_edges: output.diagram.graph().num_edges(),
        num_rays: output.diagram.rays().len(),
    }
}

fn main() {
    let args = Args::parse();

    println!("sweepline-voronoi Benchmark");
    println!("===========================\n");

    let sizes: Vec<usize> = if args.sizes.is_empty() {
        vec![10_000]
    } else {
        args.sizes
    };

    let bounds = Bounds::new(Position::new(0.0, 0.0), Position::new(1000.0, 1000.0));

    for &n in &sizes {
        let sites = random_sites(n, args.seed, bounds);

        for iteration in 0..args.repeat {
            let config = VoronoiConfig {
                track_polygons: !args.no_polygons,
            };
            let result = run_benchmark(&sites, config);

            if args.repeat > 1 {
                print!("  [{}/{}]", iteration + 1, args.repeat);
            }
            println!(
                "  n={:<8} {:>10.1}ms  ({})  V={} E={} R={}",
                format_num(result.n),
                result.time_ms,
                format_rate(result.n, result.time_ms),
                format_num(result.num_vertices),
                format_num(result.num_edges),
                format_num(result.num_rays),
            );
        }
    }
}
