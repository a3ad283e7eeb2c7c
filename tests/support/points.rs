#![allow(dead_code)]

use sweepline_voronoi::sites::random_sites_with_rng;
use sweepline_voronoi::{Bounds, Position};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate random sites uniformly distributed in a 1000x1000 box.
pub fn random_box_sites(n: usize, seed: u64) -> Vec<Position> {
    let bounds = Bounds::new(Position::new(0.0, 0.0), Position::new(1000.0, 1000.0));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_sites_with_rng(n, bounds, &mut rng)
}

/// Generate a `width` x `height` integer grid of sites.
///
/// Heavily degenerate input: every unit square of sites is cocircular, and
/// whole rows share a y-coordinate.
pub fn grid_sites(width: usize, height: usize) -> Vec<Position> {
    let mut sites = Vec::with_capacity(width * height);
    for yi in 0..height {
        for xi in 0..width {
            sites.push(Position::new(xi as f64, yi as f64));
        }
    }
    sites
}
