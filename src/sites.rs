//! Random site generation.
//!
//! Seeded generation for benchmarks, tests, and quick diagram construction.

use crate::types::{Bounds, Position};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate `n` sites uniformly distributed over `bounds`, deterministically
/// from `seed`.
pub fn random_sites(n: usize, seed: u64, bounds: Bounds) -> Vec<Position> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_sites_with_rng(n, bounds, &mut rng)
}

/// Generate `n` sites uniformly distributed over `bounds` from an existing
/// generator.
pub fn random_sites_with_rng<R: Rng + ?Sized>(n: usize, bounds: Bounds, rng: &mut R) -> Vec<Position> {
    (0..n)
        .map(|_| {
            Position::new(
                rng.gen_range(bounds.min.x..bounds.max.x),
                rng.gen_range(bounds.min.y..bounds.max.y),
            )
        })
        .collect()
}
