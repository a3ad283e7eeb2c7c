//! Planar Voronoi diagram storage and access.

use crate::graph::Graph;
use crate::tracker::CellPolygon;
use crate::types::Position;

/// An unbounded Voronoi edge: a bisector that leaves the diagram through
/// infinity rather than ending at a second vertex.
///
/// The ray starts at `vertex` and runs along the perpendicular bisector of
/// the two named sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    /// The diagram vertex the ray is anchored at.
    pub vertex: usize,
    /// One of the two sites whose cells the ray separates.
    pub site_a: usize,
    /// The other site.
    pub site_b: usize,
}

/// A planar Voronoi diagram.
///
/// The diagram consists of:
/// - Sites (input points, one per cell)
/// - A graph of vertices (equidistant from three or more sites) joined by
///   the bounded Voronoi edges
/// - Rays, the unbounded edges of hull cells
/// - Closed cell polygons, where edge tracking recovered a full cycle
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    sites: Vec<Position>,
    graph: Graph,
    polygons: Vec<CellPolygon>,
    rays: Vec<Ray>,
}

impl VoronoiDiagram {
    /// Create a diagram from raw parts.
    ///
    /// This is used by the sweep to construct the final diagram.
    pub(crate) fn from_parts(
        sites: Vec<Position>,
        graph: Graph,
        polygons: Vec<CellPolygon>,
        rays: Vec<Ray>,
    ) -> Self {
        Self {
            sites,
            graph,
            polygons,
            rays,
        }
    }

    /// The input sites, in the order they were given.
    #[inline]
    pub fn sites(&self) -> &[Position] {
        &self.sites
    }

    /// Position of a site.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn site(&self, index: usize) -> Position {
        self.sites[index]
    }

    /// Number of input sites.
    #[inline]
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    /// The graph of Voronoi vertices and bounded edges.
    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of Voronoi vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Position of a Voronoi vertex.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn vertex(&self, index: usize) -> Position {
        self.graph.node(index)
    }

    /// The unbounded edges.
    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// The closed cell polygons recovered during the sweep.
    ///
    /// Hull cells are unbounded and never appear here; interior cells do,
    /// subject to the limits of event-order edge stitching.
    #[inline]
    pub fn polygons(&self) -> &[CellPolygon] {
        &self.polygons
    }
}
