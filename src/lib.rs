//! Planar Voronoi diagrams via Fortune's sweep line.
//!
//! This crate computes the Voronoi diagram of a set of points in the plane
//! with a single downward sweep: a beach line of parabolic arcs is maintained
//! over the sorted sites, circle events emit the diagram vertices, and edge
//! trackers stitch the vertices into bounded edges, unbounded rays, and
//! closed cell polygons.
//!
//! # Example
//!
//! ```
//! use sweepline_voronoi::compute;
//!
//! let sites = vec![(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)];
//! let output = compute(&sites).expect("computation should succeed");
//!
//! // Three sites meet at a single vertex, the circumcenter, with three
//! // unbounded edges leaving it.
//! assert_eq!(output.diagram.num_vertices(), 1);
//! assert_eq!(output.diagram.rays().len(), 3);
//! ```

mod diagram;
mod error;
mod graph;
mod types;
pub mod sites;
pub mod validation;

// Internal modules
pub(crate) mod beach_line;
pub(crate) mod geometry;
pub(crate) mod sweep;
pub(crate) mod tracker;

pub use diagram::{Ray, VoronoiDiagram};
pub use error::VoronoiError;
pub use graph::{EdgeData, Graph};
pub use tracker::{CellPolygon, PolygonEdge};
pub use types::{Bounds, Position, PositionLike};

use rustc_hash::FxHashSet;

/// Output from Voronoi computation, including diagram and diagnostics.
#[derive(Debug, Clone)]
pub struct VoronoiOutput {
    /// The computed Voronoi diagram.
    pub diagram: VoronoiDiagram,
    /// Diagnostic information about the computation.
    pub diagnostics: SweepDiagnostics,
}

/// Diagnostic information from the sweep.
///
/// Nonzero counts are not errors: hull bisectors keep their trackers until
/// the final flush, and every closed polygon leaves its mirror chain open.
/// The counts are exposed for validation and debugging.
#[derive(Debug, Clone, Default)]
pub struct SweepDiagnostics {
    /// Edge trackers that were flushed as rays after post-processing.
    pub unresolved_edge_trackers: usize,
    /// Polygon chains that never closed into a cycle.
    pub open_polygon_trackers: usize,
    /// Arcs still on the beach line when the sweep finished.
    pub beach_arcs_remaining: usize,
}

/// Configuration for Voronoi computation.
#[derive(Debug, Clone)]
pub struct VoronoiConfig {
    /// If true, accumulate promoted edges into closed cell polygons.
    ///
    /// Polygon tracking adds overhead proportional to the number of open
    /// chains; callers that only need the vertex graph and rays can disable
    /// it.
    pub track_polygons: bool,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            track_polygons: true,
        }
    }
}

/// Compute a planar Voronoi diagram with default settings.
///
/// Returns a diagram plus diagnostics. Errors are reserved for invalid
/// inputs: non-finite coordinates and coincident sites.
pub fn compute<P: PositionLike>(points: &[P]) -> Result<VoronoiOutput, VoronoiError> {
    compute_with(points, VoronoiConfig::default())
}

/// Compute a planar Voronoi diagram with explicit configuration.
pub fn compute_with<P: PositionLike>(
    points: &[P],
    config: VoronoiConfig,
) -> Result<VoronoiOutput, VoronoiError> {
    let sites: Vec<Position> = points.iter().map(Position::from_like).collect();

    let mut seen = FxHashSet::default();
    for (i, site) in sites.iter().enumerate() {
        if !site.x.is_finite() || !site.y.is_finite() {
            return Err(VoronoiError::NonFiniteCoordinate { site: i });
        }
        if !seen.insert((site.x.to_bits(), site.y.to_bits())) {
            // Exactly coincident sites have no bisector; find the partner
            // for the error report.
            let partner = sites[..i]
                .iter()
                .position(|other| other.x == site.x && other.y == site.y)
                .unwrap_or(i);
            return Err(VoronoiError::CoincidentSites {
                site_a: partner,
                site_b: i,
            });
        }
    }

    let output = sweep::run(&sites, &config)?;

    Ok(VoronoiOutput {
        diagram: VoronoiDiagram::from_parts(sites, output.graph, output.polygons, output.rays),
        diagnostics: output.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rejects_nan() {
        let sites = vec![(0.0, 0.0), (1.0, f64::NAN), (2.0, 0.0)];
        let err = compute(&sites).unwrap_err();
        assert_eq!(err, VoronoiError::NonFiniteCoordinate { site: 1 });
    }

    #[test]
    fn test_compute_rejects_duplicates() {
        let sites = vec![(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)];
        let err = compute(&sites).unwrap_err();
        assert_eq!(
            err,
            VoronoiError::CoincidentSites {
                site_a: 0,
                site_b: 2
            }
        );
    }

    #[test]
    fn test_compute_without_polygons() {
        let sites = vec![
            (0.0, 3.0),
            (3.0, 0.0),
            (-3.0, 0.0),
            (0.0, -3.0),
            (0.0, 0.0),
        ];
        let config = VoronoiConfig {
            track_polygons: false,
        };
        let output = compute_with(&sites, config).unwrap();
        assert!(output.diagram.polygons().is_empty());
        assert_eq!(output.diagram.graph().num_edges(), 4);
        assert_eq!(output.diagnostics.open_polygon_trackers, 0);
    }
}
