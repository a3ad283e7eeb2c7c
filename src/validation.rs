//! Structural validation for planar Voronoi diagrams.
//!
//! Provides functions to verify combinatorial and geometric correctness of a
//! diagram. Useful for debugging, testing, and catching numerical issues.

use crate::{Position, VoronoiDiagram};
use rustc_hash::FxHashSet;

/// Relative tolerance for the equidistance check.
const EQUIDISTANT_EPS: f64 = 1e-6;

/// Detailed validation report for a planar Voronoi diagram.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Number of input sites.
    pub num_sites: usize,
    /// Number of Voronoi vertices.
    pub num_vertices: usize,
    /// Number of bounded edges.
    pub num_edges: usize,
    /// Number of unbounded edges.
    pub num_rays: usize,
    /// Number of closed cell polygons.
    pub num_polygons: usize,

    /// Vertices whose position coincides bit-for-bit with an earlier vertex.
    /// The sweep merges cocircular centers, so any duplicate is a defect.
    pub duplicate_vertices: usize,
    /// Vertices incident to fewer than 3 edges, counting rays. A Voronoi
    /// vertex joins at least three cells.
    pub low_incidence_vertices: usize,
    /// Count of vertices by edge-plus-ray incidence: [0, 1, 2, 3+].
    pub incidence_counts: [usize; 4],

    /// Vertices that are not equidistant from at least 3 sites.
    pub off_center_vertices: usize,
    /// Stored polygons whose edge cycle does not close.
    pub unclosed_polygons: usize,
    /// Rays naming a site index out of range.
    pub bad_ray_sites: usize,
}

impl ValidationReport {
    /// Check if the diagram is structurally and geometrically sound.
    pub fn is_valid(&self) -> bool {
        self.duplicate_vertices == 0
            && self.low_incidence_vertices == 0
            && self.off_center_vertices == 0
            && self.unclosed_polygons == 0
            && self.bad_ray_sites == 0
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "Valid".to_string();
        }

        let mut issues = Vec::new();
        if self.duplicate_vertices > 0 {
            issues.push(format!("{} duplicate vertices", self.duplicate_vertices));
        }
        if self.low_incidence_vertices > 0 {
            let [d0, d1, d2, _] = self.incidence_counts;
            issues.push(format!(
                "{} low-incidence vertices (d0:{}, d1:{}, d2:{})",
                self.low_incidence_vertices, d0, d1, d2
            ));
        }
        if self.off_center_vertices > 0 {
            issues.push(format!(
                "{} vertices not equidistant from 3 sites",
                self.off_center_vertices
            ));
        }
        if self.unclosed_polygons > 0 {
            issues.push(format!("{} unclosed polygons", self.unclosed_polygons));
        }
        if self.bad_ray_sites > 0 {
            issues.push(format!("{} rays with bad site indices", self.bad_ray_sites));
        }
        issues.join(", ")
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValidationReport {{ S={}, V={}, E={}, R={}, P={}, {} }}",
            self.num_sites,
            self.num_vertices,
            self.num_edges,
            self.num_rays,
            self.num_polygons,
            self.summary()
        )
    }
}

/// Validate a planar Voronoi diagram.
///
/// Checks:
/// - No duplicate vertex positions (cocircular centers must be merged)
/// - Vertex incidence (each vertex joins at least 3 edges, counting rays)
/// - Vertex equidistance (each vertex is equally far from 3+ nearest sites)
/// - Polygon closure (stored polygons form complete cycles)
/// - Ray site indices in range
pub fn validate(diagram: &VoronoiDiagram) -> ValidationReport {
    let graph = diagram.graph();
    let num_vertices = graph.num_nodes();

    let mut seen = FxHashSet::default();
    let mut duplicate_vertices = 0usize;
    for i in 0..num_vertices {
        let p = graph.node(i);
        if !seen.insert((p.x.to_bits(), p.y.to_bits())) {
            duplicate_vertices += 1;
        }
    }

    // Incidence counts rays anchored at the vertex on top of graph degree.
    let mut incidence: Vec<usize> = (0..num_vertices).map(|i| graph.degree(i)).collect();
    let mut bad_ray_sites = 0usize;
    for ray in diagram.rays() {
        if ray.vertex < num_vertices {
            incidence[ray.vertex] += 1;
        }
        if ray.site_a >= diagram.num_sites() || ray.site_b >= diagram.num_sites() {
            bad_ray_sites += 1;
        }
    }

    let mut low_incidence_vertices = 0usize;
    let mut incidence_counts = [0usize; 4];
    for &count in &incidence {
        incidence_counts[count.min(3)] += 1;
        if count < 3 {
            low_incidence_vertices += 1;
        }
    }

    let mut off_center_vertices = 0usize;
    for i in 0..num_vertices {
        if !is_equidistant_from_three(graph.node(i), diagram.sites()) {
            off_center_vertices += 1;
        }
    }

    let unclosed_polygons = diagram
        .polygons()
        .iter()
        .filter(|polygon| !polygon.is_closed())
        .count();

    ValidationReport {
        num_sites: diagram.num_sites(),
        num_vertices,
        num_edges: graph.num_edges(),
        num_rays: diagram.rays().len(),
        num_polygons: diagram.polygons().len(),
        duplicate_vertices,
        low_incidence_vertices,
        incidence_counts,
        off_center_vertices,
        unclosed_polygons,
        bad_ray_sites,
    }
}

/// Whether `p` is equally far (within relative tolerance) from at least 3
/// sites, i.e. whether it is a genuine Voronoi vertex.
fn is_equidistant_from_three(p: Position, sites: &[Position]) -> bool {
    let mut nearest = f64::INFINITY;
    for &site in sites {
        nearest = nearest.min(p.distance(site));
    }
    if !nearest.is_finite() {
        return false;
    }

    let tolerance = EQUIDISTANT_EPS * nearest.max(1.0);
    let within = sites
        .iter()
        .filter(|&&site| p.distance(site) - nearest <= tolerance)
        .count();
    within >= 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;

    #[test]
    fn test_validate_triangle() {
        let output = compute(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]).unwrap();
        let report = validate(&output.diagram);

        assert!(report.is_valid(), "{}", report);
        assert_eq!(report.num_vertices, 1);
        assert_eq!(report.num_rays, 3);
        assert_eq!(report.incidence_counts[3], 1);
    }

    #[test]
    fn test_validate_square() {
        let output = compute(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
        let report = validate(&output.diagram);

        // The merged center joins all four cells.
        assert!(report.is_valid(), "{}", report);
        assert_eq!(report.num_vertices, 1);
        assert_eq!(report.num_rays, 4);
    }

    #[test]
    fn test_validate_interior_cell() {
        let output = compute(&[
            (0.0, 3.0),
            (3.0, 0.0),
            (-3.0, 0.0),
            (0.0, -3.0),
            (0.0, 0.0),
        ])
        .unwrap();
        let report = validate(&output.diagram);

        assert!(report.is_valid(), "{}", report);
        assert_eq!(report.num_polygons, 1);
        assert_eq!(report.unclosed_polygons, 0);
    }
}
