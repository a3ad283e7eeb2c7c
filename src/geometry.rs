//! Pure geometric kernel for the sweep.
//!
//! Everything here is a free function over plain values: orientation tests,
//! circumcircles, and parabola-parabola intersections against a horizontal
//! directrix. Degenerate configurations (collinear triples, foci sharing a
//! y-coordinate, a focus lying on the directrix) are handled by dedicated
//! branches rather than reported as errors.

use crate::types::Position;
use glam::DVec2;

/// The circumcircle of three beach-line sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Position,
    pub radius: f64,
}

impl Circle {
    /// Lowest point of the circle, the y value the sweep line must pass for
    /// the circle to be fully formed in a downward sweep.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.center.y - self.radius
    }
}

/// Signed area test for the turn `a -> b -> c`.
///
/// Returns the cross product of `b - a` and `c - b`: negative for a clockwise
/// turn (converging arcs, circle-event candidate), zero for collinear points,
/// positive for a counter-clockwise turn (diverging arcs).
#[inline]
pub fn orientation(a: Position, b: Position, c: Position) -> f64 {
    let u = b.to_dvec2() - a.to_dvec2();
    let v = c.to_dvec2() - b.to_dvec2();
    u.perp_dot(v)
}

/// Circumcircle of three points, or `None` if they are collinear.
///
/// Pairs sharing a y-coordinate are special-cased so the chord-slope form
/// never divides by zero: a horizontal chord pins the center's x-coordinate
/// to the chord midpoint, and the remaining coordinate comes from the other
/// perpendicular bisector.
pub fn circumcircle(a: Position, b: Position, c: Position) -> Option<Circle> {
    let dy_ab = b.y - a.y;
    let dy_ac = c.y - a.y;

    let center = if dy_ab == 0.0 {
        // a-b horizontal: center.x is the chord midpoint.
        if dy_ac == 0.0 {
            return None; // all three on one horizontal line
        }
        let cx = (a.x + b.x) / 2.0;
        let alpha = -((c.x - a.x) / dy_ac);
        let cy = alpha * (cx - (a.x + c.x) / 2.0) + (a.y + c.y) / 2.0;
        Position::new(cx, cy)
    } else if dy_ac == 0.0 {
        // a-c horizontal: same idea with the a-b bisector.
        let cx = (a.x + c.x) / 2.0;
        let beta = -((b.x - a.x) / dy_ab);
        let cy = beta * (cx - (a.x + b.x) / 2.0) + (a.y + b.y) / 2.0;
        Position::new(cx, cy)
    } else {
        // General case: intersect the perpendicular bisectors of a-c and a-b.
        let alpha = -((c.x - a.x) / dy_ac);
        let beta = -((b.x - a.x) / dy_ab);
        if alpha == beta {
            return None; // parallel bisectors, collinear points
        }
        let cx = (alpha * (a.x + c.x) - beta * (a.x + b.x) + b.y - c.y) / (2.0 * (alpha - beta));
        let cy = alpha * (cx - (a.x + c.x) / 2.0) + (a.y + c.y) / 2.0;
        Position::new(cx, cy)
    };

    let radius = center.distance(a);
    if !radius.is_finite() {
        return None;
    }

    Some(Circle { center, radius })
}

/// Intersections of two parabolas with foci `f1`, `f2` and a shared horizontal
/// directrix at `sweep_y`, ordered so the first point has the smaller x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParabolaCrossings {
    /// A single intersection: the foci share a y-coordinate, or one focus
    /// lies on the directrix and its parabola degenerates to a vertical ray.
    One(Position),
    /// Two intersections with `p1.x <= p2.x`.
    Two(Position, Position),
}

/// Intersect the parabolas defined by two foci and a horizontal directrix.
///
/// Returns `None` only when the parabolas cannot cross: coincident foci, or
/// both foci degenerate on the directrix. Callers treat `None` for two
/// distinct arcs as a fatal malformed-input condition (duplicate sites).
pub fn parabola_intersections(f1: Position, f2: Position, sweep_y: f64) -> Option<ParabolaCrossings> {
    if f1 == f2 {
        return None;
    }

    let k1 = f1.y - sweep_y;
    let k2 = f2.y - sweep_y;

    if k1 == 0.0 && k2 == 0.0 {
        // Both parabolas collapse to vertical rays. Distinct same-height foci
        // on the directrix meet only at infinity; the breakpoint projects to
        // the bisector midpoint.
        return Some(ParabolaCrossings::One(Position::new(
            (f1.x + f2.x) / 2.0,
            sweep_y,
        )));
    }
    if k1 == 0.0 {
        // f1 is on the directrix: its parabola is the ray x = f1.x.
        return Some(ParabolaCrossings::One(parabola_point(f2, sweep_y, f1.x)));
    }
    if k2 == 0.0 {
        return Some(ParabolaCrossings::One(parabola_point(f1, sweep_y, f2.x)));
    }

    if k1 == k2 {
        // Equal focus heights: the difference of the two parabola equations is
        // linear, a single crossing on the vertical bisector.
        let x = (f1.x + f2.x) / 2.0;
        return Some(ParabolaCrossings::One(parabola_point(f1, sweep_y, x)));
    }

    // Equate the parabola equations and clear denominators:
    //   k2 (x - f1.x)^2 - k1 (x - f2.x)^2 + k1 k2 (f1.y - f2.y) = 0
    let a = k2 - k1;
    let b = 2.0 * (k1 * f2.x - k2 * f1.x);
    let c = k2 * f1.x * f1.x - k1 * f2.x * f2.x + k1 * k2 * (f1.y - f2.y);

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    if disc == 0.0 {
        let x = -b / (2.0 * a);
        return Some(ParabolaCrossings::One(parabola_point(f1, sweep_y, x)));
    }

    let sqrt_disc = disc.sqrt();
    let r1 = (-b + sqrt_disc) / (2.0 * a);
    let r2 = (-b - sqrt_disc) / (2.0 * a);
    let (x1, x2) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };

    Some(ParabolaCrossings::Two(
        parabola_point(f1, sweep_y, x1),
        parabola_point(f1, sweep_y, x2),
    ))
}

/// Point on the parabola with the given focus and directrix at the given x.
#[inline]
fn parabola_point(focus: Position, sweep_y: f64, x: f64) -> Position {
    let k = focus.y - sweep_y;
    debug_assert!(k != 0.0);
    let dx = x - focus.x;
    let y = dx * dx / (2.0 * k) + (focus.y + sweep_y) / 2.0;
    Position::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_orientation_signs() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 0.0);
        assert!(orientation(a, b, Position::new(2.0, -1.0)) < 0.0); // clockwise
        assert!(orientation(a, b, Position::new(2.0, 1.0)) > 0.0); // counter-clockwise
        assert_eq!(orientation(a, b, Position::new(2.0, 0.0)), 0.0); // collinear
    }

    #[test]
    fn test_circumcircle_equidistant() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(4.0, 2.0);
        let c = Position::new(1.0, 5.0);
        let circle = circumcircle(a, b, c).unwrap();

        for p in [a, b, c] {
            assert!(
                (circle.center.distance(p) - circle.radius).abs() < EPS,
                "point {:?} not on circle",
                p
            );
        }
    }

    #[test]
    fn test_circumcircle_horizontal_chords() {
        // a-b share a y-coordinate
        let circle = circumcircle(
            Position::new(0.0, 0.0),
            Position::new(2.0, 0.0),
            Position::new(1.0, 3.0),
        )
        .unwrap();
        assert!((circle.center.x - 1.0).abs() < EPS);

        // a-c share a y-coordinate
        let circle = circumcircle(
            Position::new(0.0, 0.0),
            Position::new(1.0, 3.0),
            Position::new(2.0, 0.0),
        )
        .unwrap();
        assert!((circle.center.x - 1.0).abs() < EPS);
    }

    #[test]
    fn test_circumcircle_collinear() {
        assert!(circumcircle(
            Position::new(0.0, 0.0),
            Position::new(1.0, 1.0),
            Position::new(2.0, 2.0),
        )
        .is_none());

        // all on one horizontal line
        assert!(circumcircle(
            Position::new(0.0, 1.0),
            Position::new(1.0, 1.0),
            Position::new(2.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn test_parabola_two_intersections() {
        // Symmetric foci above the directrix cross at x = +-sqrt(2).
        let f1 = Position::new(0.0, 2.0);
        let f2 = Position::new(0.0, 1.0);
        match parabola_intersections(f1, f2, 0.0).unwrap() {
            ParabolaCrossings::Two(p1, p2) => {
                assert!((p1.x + 2.0f64.sqrt()).abs() < EPS);
                assert!((p2.x - 2.0f64.sqrt()).abs() < EPS);
                assert!(p1.x <= p2.x);
                // Both points are equidistant from each focus and the directrix.
                for p in [p1, p2] {
                    assert!((p.distance(f1) - p.y).abs() < EPS);
                    assert!((p.distance(f2) - p.y).abs() < EPS);
                }
            }
            other => panic!("expected two intersections, got {:?}", other),
        }
    }

    #[test]
    fn test_parabola_equal_heights() {
        let f1 = Position::new(-1.0, 2.0);
        let f2 = Position::new(3.0, 2.0);
        match parabola_intersections(f1, f2, 0.0).unwrap() {
            ParabolaCrossings::One(p) => {
                assert!((p.x - 1.0).abs() < EPS);
                assert!((p.distance(f1) - p.distance(f2)).abs() < EPS);
            }
            other => panic!("expected one intersection, got {:?}", other),
        }
    }

    #[test]
    fn test_parabola_focus_on_directrix() {
        let f1 = Position::new(0.0, 2.0);
        let f2 = Position::new(1.0, 0.0);
        match parabola_intersections(f1, f2, 0.0).unwrap() {
            ParabolaCrossings::One(p) => {
                assert_eq!(p.x, 1.0);
                assert!((p.distance(f1) - (p.y - 0.0)).abs() < EPS);
            }
            other => panic!("expected one intersection, got {:?}", other),
        }
    }

    #[test]
    fn test_parabola_coincident_foci() {
        let f = Position::new(1.0, 2.0);
        assert!(parabola_intersections(f, f, 0.0).is_none());
    }
}
