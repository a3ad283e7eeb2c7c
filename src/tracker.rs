//! Transient trackers that stitch sweep events into edges and polygons.
//!
//! A pending edge is anchored at one known vertex and keyed by the pair of
//! beach-line arcs whose shared boundary traces the edge; it is promoted to a
//! graph edge exactly once, when a circle event consumes one of its arcs.
//! Polygon trackers accumulate promoted edges into closed cells.

use crate::beach_line::ArcId;
use crate::geometry::orientation;
use crate::types::Position;

/// A graph edge with one known endpoint, waiting for the other.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingEdge {
    /// Left arc of the boundary being traced.
    pub left: ArcId,
    /// Right arc of the boundary being traced.
    pub right: ArcId,
    /// The already-created vertex this edge is anchored at.
    pub vertex: usize,
}

/// The set of edges currently being traced by the sweep.
#[derive(Debug, Default)]
pub(crate) struct EdgeTrackerSet {
    pending: Vec<PendingEdge>,
}

impl EdgeTrackerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Open a tracker for the boundary between `left` and `right`, anchored
    /// at `vertex`.
    pub fn open(&mut self, left: ArcId, right: ArcId, vertex: usize) {
        self.pending.push(PendingEdge {
            left,
            right,
            vertex,
        });
    }

    /// Remove and return every tracker whose boundary involves `arc`.
    pub fn take_touching(&mut self, arc: ArcId) -> Vec<PendingEdge> {
        let mut taken = Vec::new();
        self.pending.retain(|edge| {
            if edge.left == arc || edge.right == arc {
                taken.push(*edge);
                false
            } else {
                true
            }
        });
        taken
    }

    /// Remove and return the tracker on exactly this boundary, if any.
    pub fn take_on_boundary(&mut self, left: ArcId, right: ArcId) -> Option<PendingEdge> {
        let index = self
            .pending
            .iter()
            .position(|edge| edge.left == left && edge.right == right)?;
        Some(self.pending.swap_remove(index))
    }

    /// Redirect trackers whose left arc was split by a site insertion: the
    /// boundary they trace now starts at the duplicate arc to the right of
    /// the newly inserted one.
    pub fn retarget_left(&mut self, old: ArcId, new: ArcId) {
        for edge in &mut self.pending {
            if edge.left == old {
                edge.left = new;
            }
        }
    }

    /// Drain all remaining trackers (end of post-processing).
    pub fn drain(&mut self) -> Vec<PendingEdge> {
        std::mem::take(&mut self.pending)
    }
}

/// An oriented edge of a cell polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolygonEdge {
    pub node1: usize,
    pub node2: usize,
}

/// A closed Voronoi cell: a cycle of diagram vertices.
///
/// Complete polygons satisfy `nodes.len() == edges.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPolygon {
    /// Vertex indices around the cell, in winding order.
    pub nodes: Vec<usize>,
    /// Oriented edges; `edges[i]` joins `nodes[i]` to `nodes[(i + 1) % len]`.
    pub edges: Vec<PolygonEdge>,
}

impl CellPolygon {
    /// A polygon is closed when its cycle of edges returns to the first node.
    #[inline]
    pub fn is_closed(&self) -> bool {
        !self.nodes.is_empty() && self.nodes.len() == self.edges.len()
    }
}

#[derive(Debug, Clone)]
struct OpenPolygon {
    nodes: Vec<usize>,
    edges: Vec<PolygonEdge>,
}

enum Attach {
    No,
    Appended,
    Closed,
}

impl OpenPolygon {
    fn new(from: usize, to: usize) -> Self {
        Self {
            nodes: vec![from, to],
            edges: vec![PolygonEdge {
                node1: from,
                node2: to,
            }],
        }
    }

    /// Try to extend the open chain with the directed edge `from -> to`,
    /// keeping the winding consistent: every turn onto a new node must stay
    /// non-negative. The edge may append at the tail, prepend at the head,
    /// or close the cycle.
    fn try_attach(&mut self, from: usize, to: usize, positions: &[Position]) -> Attach {
        let tail = self.nodes[self.nodes.len() - 1];
        let head = self.nodes[0];

        if tail == from {
            let before_tail = self.nodes[self.nodes.len() - 2];

            if to == head && self.nodes.len() >= 3 {
                // Closing the cycle: the final two turns must keep the winding.
                let second = self.nodes[1];
                if orientation(positions[before_tail], positions[tail], positions[to]) >= 0.0
                    && orientation(positions[tail], positions[head], positions[second]) >= 0.0
                {
                    self.edges.push(PolygonEdge {
                        node1: from,
                        node2: to,
                    });
                    return Attach::Closed;
                }
                return Attach::No;
            }

            if !self.nodes.contains(&to)
                && orientation(positions[before_tail], positions[tail], positions[to]) >= 0.0
            {
                self.nodes.push(to);
                self.edges.push(PolygonEdge {
                    node1: from,
                    node2: to,
                });
                return Attach::Appended;
            }
            return Attach::No;
        }

        if to == head
            && !self.nodes.contains(&from)
            && orientation(positions[from], positions[head], positions[self.nodes[1]]) >= 0.0
        {
            self.nodes.insert(0, from);
            self.edges.insert(
                0,
                PolygonEdge {
                    node1: from,
                    node2: to,
                },
            );
            return Attach::Appended;
        }

        Attach::No
    }
}

/// Accumulates promoted graph edges into closed cell polygons.
#[derive(Debug, Default)]
pub(crate) struct PolygonBuilder {
    open: Vec<OpenPolygon>,
    closed: Vec<CellPolygon>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a newly promoted graph edge.
    ///
    /// The edge is offered to each open polygon in both directions; the
    /// first winding-consistent fit (tail, head, or cycle close) wins. If no
    /// open polygon accepts it, two new single-edge polygons are opened, one
    /// per orientation, since it is not yet known which side of the edge the
    /// cell lies on.
    pub fn add_edge(&mut self, a: usize, b: usize, positions: &[Position]) {
        for i in 0..self.open.len() {
            for (from, to) in [(a, b), (b, a)] {
                match self.open[i].try_attach(from, to, positions) {
                    Attach::No => {}
                    Attach::Appended => return,
                    Attach::Closed => {
                        let done = self.open.swap_remove(i);
                        self.closed.push(CellPolygon {
                            nodes: done.nodes,
                            edges: done.edges,
                        });
                        return;
                    }
                }
            }
        }

        self.open.push(OpenPolygon::new(a, b));
        self.open.push(OpenPolygon::new(b, a));
    }

    /// Number of chains still open.
    pub fn num_open(&self) -> usize {
        self.open.len()
    }

    /// Finish, returning all closed polygons.
    pub fn finish(self) -> Vec<CellPolygon> {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_positions() -> Vec<Position> {
        // counter-clockwise unit square
        vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 1.0),
            Position::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_polygon_closes_on_cycle() {
        let positions = square_positions();
        let mut builder = PolygonBuilder::new();

        builder.add_edge(0, 1, &positions);
        builder.add_edge(1, 2, &positions);
        builder.add_edge(2, 3, &positions);
        builder.add_edge(3, 0, &positions);

        let closed = builder.finish();
        assert_eq!(closed.len(), 1);
        let polygon = &closed[0];
        assert!(polygon.is_closed());
        assert_eq!(polygon.nodes, vec![0, 1, 2, 3]);
        assert_eq!(polygon.edges.len(), 4);
    }

    #[test]
    fn test_polygon_accepts_edges_out_of_order() {
        let positions = square_positions();
        let mut builder = PolygonBuilder::new();

        builder.add_edge(1, 2, &positions);
        // arrives head-first relative to the growing chain
        builder.add_edge(0, 1, &positions);
        builder.add_edge(2, 3, &positions);
        builder.add_edge(3, 0, &positions);

        let closed = builder.finish();
        assert_eq!(closed.len(), 1);
        assert!(closed[0].is_closed());
        assert_eq!(closed[0].nodes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_mirror_chain_stays_open() {
        let positions = square_positions();
        let mut builder = PolygonBuilder::new();

        builder.add_edge(0, 1, &positions);
        builder.add_edge(1, 2, &positions);

        // the counter-clockwise chain grew; the clockwise mirror did not
        assert_eq!(builder.num_open(), 2);
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn test_unrelated_edge_opens_new_trackers() {
        let mut positions = square_positions();
        positions.push(Position::new(5.0, 5.0));
        positions.push(Position::new(6.0, 5.0));

        let mut builder = PolygonBuilder::new();
        builder.add_edge(0, 1, &positions);
        builder.add_edge(4, 5, &positions);
        assert_eq!(builder.num_open(), 4);
    }

    #[test]
    fn test_edge_tracker_take_touching() {
        let mut beach = crate::beach_line::BeachLine::new();
        beach.seed(0, 1);
        let a = beach.head().unwrap();
        let b = beach.next(a).unwrap();
        let c = beach.next(b).unwrap();

        let mut trackers = EdgeTrackerSet::new();
        trackers.open(a, b, 0);
        trackers.open(b, c, 1);
        trackers.open(a, c, 2);

        let taken = trackers.take_touching(b);
        assert_eq!(taken.len(), 2);
        assert_eq!(trackers.len(), 1);
    }

    #[test]
    fn test_edge_tracker_retarget_left() {
        let mut beach = crate::beach_line::BeachLine::new();
        beach.seed(0, 1);
        let a = beach.head().unwrap();
        let b = beach.next(a).unwrap();

        let mut trackers = EdgeTrackerSet::new();
        trackers.open(a, b, 0);

        let (_, dup) = beach.insert_pair_after(a, 2, 0);
        trackers.retarget_left(a, dup);

        let taken = trackers.take_touching(dup);
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].right, b);
        assert_eq!(trackers.len(), 0);
    }
}
