//! Event-driven sweep controller.
//!
//! The sweep line moves downward through the sorted sites. Each outer step
//! first resolves every circle event already revealed above the sweep
//! position (removing arcs and emitting vertices), then inserts the next
//! site's arc into the beach line. After the last site, a post-processing
//! pass resolves the remaining circle events with the sweep at negative
//! infinity, and leftover edge trackers are flushed as unbounded rays.

use crate::beach_line::{ArcId, BeachLine};
use crate::diagram::Ray;
use crate::error::VoronoiError;
use crate::geometry::{circumcircle, orientation, parabola_intersections, Circle, ParabolaCrossings};
use crate::graph::Graph;
use crate::tracker::{CellPolygon, EdgeTrackerSet, PolygonBuilder};
use crate::types::Position;
use crate::{SweepDiagnostics, VoronoiConfig};

/// Relative tolerance for merging coincident circle centers into one vertex.
/// Four or more cocircular sites produce the same center from different arc
/// triples; without merging, the degeneracy would fabricate duplicate
/// vertices joined by zero-length edges.
const VERTEX_MERGE_EPS: f64 = 1e-9;

#[derive(Debug)]
pub(crate) struct SweepOutput {
    pub graph: Graph,
    pub polygons: Vec<CellPolygon>,
    pub rays: Vec<Ray>,
    pub diagnostics: SweepDiagnostics,
}

/// Run the full sweep over the given sites.
pub(crate) fn run(sites: &[Position], config: &VoronoiConfig) -> Result<SweepOutput, VoronoiError> {
    let mut sweep = Sweep {
        sites,
        beach: BeachLine::new(),
        graph: Graph::new(),
        trackers: EdgeTrackerSet::new(),
        polygons: PolygonBuilder::new(),
        rays: Vec::new(),
        track_polygons: config.track_polygons,
    };

    // Sweep order: descending y, ties broken by ascending x then index.
    let mut order: Vec<usize> = (0..sites.len()).collect();
    order.sort_by(|&i, &j| {
        sites[j]
            .y
            .total_cmp(&sites[i].y)
            .then_with(|| sites[i].x.total_cmp(&sites[j].x))
            .then_with(|| i.cmp(&j))
    });

    if order.len() >= 2 {
        // Topmost sites sharing a y-coordinate must be seeded together:
        // none of their parabolas reappears past another, so the usual
        // three-arc seed would leave a phantom zero-width arc behind.
        let top_y = sites[order[0]].y;
        let cohort = order.iter().take_while(|&&i| sites[i].y == top_y).count();
        let seeded = if cohort >= 2 {
            sweep.beach.seed_level(&order[..cohort]);
            cohort
        } else {
            sweep.beach.seed(order[0], order[1]);
            2
        };

        for &site in &order[seeded..] {
            let sweep_y = sites[site].y;
            sweep.resolve_circle_events(sweep_y);
            sweep.insert_site(site, sweep_y)?;
        }

        // Post-processing: the sweep has passed every site, so every
        // remaining fully-formed circle is now reachable.
        sweep.resolve_circle_events(f64::NEG_INFINITY);
    }

    let unresolved = sweep.trackers.len();
    for tracker in sweep.trackers.drain() {
        // Leftover trackers can only reference hull arcs that survived the
        // whole sweep; their edges escape to infinity.
        debug_assert!(sweep.beach.is_live(tracker.left));
        debug_assert!(sweep.beach.is_live(tracker.right));
        sweep.rays.push(Ray {
            vertex: tracker.vertex,
            site_a: sweep.beach.site(tracker.left),
            site_b: sweep.beach.site(tracker.right),
        });
    }

    let diagnostics = SweepDiagnostics {
        unresolved_edge_trackers: unresolved,
        open_polygon_trackers: sweep.polygons.num_open(),
        beach_arcs_remaining: sweep.beach.len(),
    };

    Ok(SweepOutput {
        graph: sweep.graph,
        polygons: sweep.polygons.finish(),
        rays: sweep.rays,
        diagnostics,
    })
}

struct Sweep<'a> {
    sites: &'a [Position],
    beach: BeachLine,
    graph: Graph,
    trackers: EdgeTrackerSet,
    polygons: PolygonBuilder,
    rays: Vec<Ray>,
    track_polygons: bool,
}

impl Sweep<'_> {
    #[inline]
    fn focus(&self, arc: ArcId) -> Position {
        self.sites[self.beach.site(arc)]
    }

    /// Resolve circle events until none remain above the sweep position.
    ///
    /// Each pass scans every interior triple of consecutive arcs; among the
    /// fully-formed clockwise triples, the one whose circle bottom is highest
    /// (reached first by the sweep) wins, ties going to the leftmost triple.
    fn resolve_circle_events(&mut self, sweep_y: f64) {
        loop {
            let mut best: Option<(ArcId, ArcId, ArcId, Circle)> = None;
            let mut best_bound = f64::NEG_INFINITY;

            for mid in self.beach.iter() {
                let (prev, next) = match (self.beach.prev(mid), self.beach.next(mid)) {
                    (Some(p), Some(n)) => (p, n),
                    _ => continue,
                };
                // A repeated site cannot converge with itself.
                if self.beach.site(prev) == self.beach.site(next) {
                    continue;
                }

                let (a, b, c) = (self.focus(prev), self.focus(mid), self.focus(next));
                if orientation(a, b, c) >= 0.0 {
                    continue; // collinear or diverging
                }
                let circle = match circumcircle(a, b, c) {
                    Some(circle) => circle,
                    None => continue,
                };
                let bound = circle.bottom();
                if bound < sweep_y {
                    continue; // circle not fully formed yet
                }

                if best.is_none() || bound > best_bound {
                    best = Some((prev, mid, next, circle));
                    best_bound = bound;
                }
            }

            match best {
                Some((prev, mid, next, circle)) => self.create_vertex(prev, mid, next, circle),
                None => break,
            }
        }
    }

    /// Consume a circle event: remove the middle arc, emit the vertex, and
    /// settle the edge trackers around it.
    fn create_vertex(&mut self, prev: ArcId, cur: ArcId, next: ArcId, circle: Circle) {
        let vertex = self.vertex_at(circle.center);
        let site_prev = self.beach.site(prev);
        let site_cur = self.beach.site(cur);
        let site_next = self.beach.site(next);

        let mut left_covered = false;
        let mut right_covered = false;
        for tracker in self.trackers.take_touching(cur) {
            if tracker.left == prev && tracker.right == cur {
                left_covered = true;
            } else {
                debug_assert!(tracker.left == cur && tracker.right == next);
                right_covered = true;
            }
            // The tracker's far endpoint is now known.
            self.promote(tracker.vertex, vertex);
        }

        self.beach.remove(cur);

        // An untracked boundary dies here with only one known endpoint. Its
        // bisector may still be traced by a twin boundary elsewhere on the
        // beach line (the reversed site pair left over from an arc split);
        // the endpoint is handed over to the twin. With no twin, the
        // bisector escapes to infinity.
        if !left_covered {
            self.settle_untracked(site_prev, site_cur, vertex);
        }
        if !right_covered {
            self.settle_untracked(site_cur, site_next, vertex);
        }

        // The new prev/next boundary starts tracing from this vertex.
        self.trackers.open(prev, next, vertex);
    }

    /// Settle a dying boundary between the cells of `site_a` and `site_b`
    /// that never acquired a tracker.
    fn settle_untracked(&mut self, site_a: usize, site_b: usize, vertex: usize) {
        match self.find_boundary(site_b, site_a) {
            Some((left, right)) => match self.trackers.take_on_boundary(left, right) {
                // The twin already carries the far endpoint: edge complete.
                Some(twin) => self.promote(twin.vertex, vertex),
                None => self.trackers.open(left, right, vertex),
            },
            None => self.rays.push(Ray {
                vertex,
                site_a,
                site_b,
            }),
        }
    }

    /// First beach-line boundary whose arcs carry exactly these sites, in
    /// left-to-right order.
    fn find_boundary(&self, left_site: usize, right_site: usize) -> Option<(ArcId, ArcId)> {
        for arc in self.beach.iter() {
            if let Some(next) = self.beach.next(arc) {
                if self.beach.site(arc) == left_site && self.beach.site(next) == right_site {
                    return Some((arc, next));
                }
            }
        }
        None
    }

    /// Record a completed edge between two vertices. A zero-length edge
    /// between merged cocircular centers vanishes.
    fn promote(&mut self, u: usize, v: usize) {
        if u != v && self.graph.add_edge(u, v, ()) && self.track_polygons {
            self.polygons.add_edge(u, v, self.graph.nodes());
        }
    }

    /// Index of the graph vertex at `p`, merging with an existing vertex
    /// within tolerance.
    fn vertex_at(&mut self, p: Position) -> usize {
        let eps = VERTEX_MERGE_EPS * p.x.abs().max(p.y.abs()).max(1.0);
        for (i, node) in self.graph.nodes().iter().enumerate() {
            if (node.x - p.x).abs() <= eps && (node.y - p.y).abs() <= eps {
                return i;
            }
        }
        self.graph.add_node(p)
    }

    /// Insert a site's new arc, splitting the arc above it.
    ///
    /// Walks the boundaries left to right and splits at the first one whose
    /// breakpoint lies right of the site; past every breakpoint, the site
    /// lies under the rightmost arc, which is split instead. The split arc
    /// is duplicated so the sequence stays continuous, and trackers keyed on
    /// its right boundary are retargeted to the duplicate.
    fn insert_site(&mut self, site: usize, sweep_y: f64) -> Result<(), VoronoiError> {
        let p = self.sites[site];

        let mut cur = match self.beach.head() {
            Some(head) => head,
            None => return Ok(()),
        };
        loop {
            let right = match self.beach.next(cur) {
                Some(r) => r,
                None => break,
            };
            let fa = self.focus(cur);
            let fb = self.focus(right);

            let crossings = parabola_intersections(fa, fb, sweep_y).ok_or_else(|| {
                VoronoiError::CoincidentSites {
                    site_a: self.beach.site(cur),
                    site_b: self.beach.site(right),
                }
            })?;
            let breakpoint_x = match crossings {
                ParabolaCrossings::One(q) => q.x,
                // The higher focus owns the wider parabola; the narrow arc
                // between the crossings belongs to the lower focus, so the
                // left-to-right boundary is the left crossing when the left
                // focus is higher, the right crossing otherwise.
                ParabolaCrossings::Two(q1, q2) => {
                    if fa.y > fb.y {
                        q1.x
                    } else {
                        q2.x
                    }
                }
            };

            if breakpoint_x > p.x {
                self.split_arc(cur, site);
                return Ok(());
            }

            cur = right;
        }

        // Past every breakpoint: the site lies under the rightmost arc.
        self.split_arc(cur, site);
        Ok(())
    }

    fn split_arc(&mut self, arc: ArcId, site: usize) {
        let arc_site = self.beach.site(arc);
        let (_, dup) = self.beach.insert_pair_after(arc, site, arc_site);
        self.trackers.retarget_left(arc, dup);
    }
}
