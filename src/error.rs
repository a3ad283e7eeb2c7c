//! Error types for Voronoi computation.

use std::fmt;

/// Errors that can occur during Voronoi computation.
#[derive(Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// Two input sites occupy the same position.
    ///
    /// Detected when the parabolas of two adjacent beach-line arcs have no
    /// intersection, which is only possible for coincident foci. The diagram
    /// for such input is ill-defined, so the computation stops immediately.
    CoincidentSites { site_a: usize, site_b: usize },

    /// An input site has a NaN or infinite coordinate.
    NonFiniteCoordinate { site: usize },
}

impl fmt::Display for VoronoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoronoiError::CoincidentSites { site_a, site_b } => {
                write!(f, "coincident input sites: {} and {}", site_a, site_b)
            }
            VoronoiError::NonFiniteCoordinate { site } => {
                write!(f, "site {} has a non-finite coordinate", site)
            }
        }
    }
}

impl std::error::Error for VoronoiError {}
