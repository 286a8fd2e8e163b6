//! The evaluator bank.
//!
//! Conventions shared by all fifteen:
//! - Existential scans: the first confirming window decides; scan order never
//!   changes the boolean outcome, only how early the scan stops.
//! - A sequence too short to form any valid window yields `false`, never an
//!   error; the same applies to window sizes below their documented minimum.
//! - Degenerate windows (undefined vertex angle) are skipped, not surfaced.
//! - Every numeric threshold test goes through `compare::fuzzy_cmp`.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::compare::{fuzzy_cmp, fuzzy_gt, fuzzy_lt};
use crate::geom::{
    angle_defined, distance, enclosing_radius, point_line_distance, quadrant, triangle_area,
    vertex_angle,
};
use crate::params::Params;

/// Index pairs `(i, j)` with exactly `gap` points strictly between them.
fn separated_pairs(n: usize, gap: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n.saturating_sub(gap + 1)).map(move |i| (i, i + gap + 1))
}

/// Index triples `(i, j, k)` with exactly `gap1` points between `i` and `j`
/// and exactly `gap2` between `j` and `k`.
fn separated_triples(
    n: usize,
    gap1: usize,
    gap2: usize,
) -> impl Iterator<Item = (usize, usize, usize)> {
    (0..n.saturating_sub(gap1 + gap2 + 2)).map(move |i| (i, i + gap1 + 1, i + gap1 + gap2 + 2))
}

/// Whether the triple forms a defined vertex angle outside [π−ε, π+ε].
/// Triples whose vertex coincides with a neighbor are skipped (angle
/// undefined), not confirmed.
fn angle_deviates(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>, epsilon: f64) -> bool {
    if !angle_defined(p1, p2, p3) {
        return false;
    }
    let angle = vertex_angle(p1, p2, p3);
    let pi = std::f64::consts::PI;
    fuzzy_lt(angle, pi - epsilon) || fuzzy_gt(angle, pi + epsilon)
}

/// LIC 0: two consecutive points farther apart than `length1`.
pub fn lic0(points: &[Vector2<f64>], params: &Params) -> bool {
    points
        .windows(2)
        .any(|w| fuzzy_gt(distance(w[0], w[1]), params.length1))
}

/// LIC 1: three consecutive points that cannot all be contained within or on
/// a circle of radius `radius1`.
pub fn lic1(points: &[Vector2<f64>], params: &Params) -> bool {
    points
        .windows(3)
        .any(|w| fuzzy_gt(enclosing_radius(w[0], w[1], w[2]), params.radius1))
}

/// LIC 2: three consecutive points whose vertex angle deviates from π by
/// more than `epsilon` (radians on both sides of the comparison).
pub fn lic2(points: &[Vector2<f64>], params: &Params) -> bool {
    points
        .windows(3)
        .any(|w| angle_deviates(w[0], w[1], w[2], params.epsilon))
}

/// LIC 3: three consecutive points spanning a triangle of area > `area1`.
pub fn lic3(points: &[Vector2<f64>], params: &Params) -> bool {
    points
        .windows(3)
        .any(|w| fuzzy_gt(triangle_area(w[0], w[1], w[2]), params.area1))
}

/// LIC 4: `q_pts` consecutive points occupying more than `quads` distinct
/// quadrants. Windows of fewer than two points cannot spread over multiple
/// quadrants; `q_pts < 2` yields `false`.
pub fn lic4(points: &[Vector2<f64>], params: &Params) -> bool {
    if params.q_pts < 2 {
        return false;
    }
    points.windows(params.q_pts).any(|w| {
        let mut seen = [false; 4];
        for p in w {
            seen[quadrant(*p) as usize] = true;
        }
        seen.iter().filter(|&&s| s).count() > params.quads
    })
}

/// LIC 5: two consecutive points with decreasing x (`x[i+1] − x[i] < 0`).
pub fn lic5(points: &[Vector2<f64>], _params: &Params) -> bool {
    points.windows(2).any(|w| fuzzy_lt(w[1].x - w[0].x, 0.0))
}

/// LIC 6: within some window of `n_pts` consecutive points, a point lying
/// farther than `dist` from the line joining the window's first and last
/// points. When those endpoints coincide, the distance is measured to that
/// common point. Needs at least 3 points and `n_pts ≥ 3`.
pub fn lic6(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 3 || params.n_pts < 3 {
        return false;
    }
    points.windows(params.n_pts).any(|w| {
        let first = w[0];
        let last = w[w.len() - 1];
        w.iter()
            .any(|&p| fuzzy_gt(point_line_distance(p, first, last), params.dist))
    })
}

/// LIC 7: a pair separated by exactly `k_pts` intervening points at distance
/// > `length1`. Needs at least 3 points.
pub fn lic7(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 3 {
        return false;
    }
    separated_pairs(points.len(), params.k_pts)
        .any(|(i, j)| fuzzy_gt(distance(points[i], points[j]), params.length1))
}

/// LIC 8: a triple separated by exactly `a_pts` and `b_pts` intervening
/// points that cannot be contained within or on a circle of radius
/// `radius1`. Needs at least 5 points.
pub fn lic8(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 5 {
        return false;
    }
    separated_triples(points.len(), params.a_pts, params.b_pts).any(|(i, j, k)| {
        fuzzy_gt(
            enclosing_radius(points[i], points[j], points[k]),
            params.radius1,
        )
    })
}

/// LIC 9: a triple separated by exactly `c_pts` and `d_pts` intervening
/// points whose vertex angle deviates from π by more than `epsilon`.
/// Triples with an undefined angle are skipped. Needs at least 5 points.
pub fn lic9(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 5 {
        return false;
    }
    separated_triples(points.len(), params.c_pts, params.d_pts)
        .any(|(i, j, k)| angle_deviates(points[i], points[j], points[k], params.epsilon))
}

/// LIC 10: a triple separated by exactly `e_pts` and `f_pts` intervening
/// points spanning a triangle of area > `area1`. Needs at least 5 points.
pub fn lic10(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 5 {
        return false;
    }
    separated_triples(points.len(), params.e_pts, params.f_pts).any(|(i, j, k)| {
        fuzzy_gt(
            triangle_area(points[i], points[j], points[k]),
            params.area1,
        )
    })
}

/// LIC 11: a pair `(i, j)`, `i < j`, separated by exactly `g_pts`
/// intervening points with `x[j] − x[i] < 0`. Needs at least 3 points.
pub fn lic11(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 3 {
        return false;
    }
    separated_pairs(points.len(), params.g_pts)
        .any(|(i, j)| fuzzy_lt(points[j].x - points[i].x, 0.0))
}

/// LIC 12: two independent existential scans over `k_pts`-separated pairs:
/// one pair farther apart than `length1` AND one pair (not necessarily the
/// same) closer than `length2`. Each condition is satisfied by its own best
/// witness. Needs at least 3 points.
pub fn lic12(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 3 {
        return false;
    }
    let far = separated_pairs(points.len(), params.k_pts)
        .any(|(i, j)| fuzzy_gt(distance(points[i], points[j]), params.length1));
    let near = separated_pairs(points.len(), params.k_pts)
        .any(|(i, j)| fuzzy_lt(distance(points[i], points[j]), params.length2));
    far && near
}

/// LIC 13: over `a_pts`/`b_pts`-separated triples: one triple not
/// containable within or on a circle of radius `radius1` AND one triple
/// (not necessarily the same) containable within or on a circle of radius
/// `radius2`. Needs at least 5 points.
pub fn lic13(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 5 {
        return false;
    }
    let escapes = separated_triples(points.len(), params.a_pts, params.b_pts).any(|(i, j, k)| {
        fuzzy_gt(
            enclosing_radius(points[i], points[j], points[k]),
            params.radius1,
        )
    });
    let fits = separated_triples(points.len(), params.a_pts, params.b_pts).any(|(i, j, k)| {
        fuzzy_cmp(
            enclosing_radius(points[i], points[j], points[k]),
            params.radius2,
        ) != Ordering::Greater
    });
    escapes && fits
}

/// LIC 14: over `e_pts`/`f_pts`-separated triples: one triangle of area >
/// `area1` AND one (not necessarily the same) of area < `area2`. Needs at
/// least 5 points.
pub fn lic14(points: &[Vector2<f64>], params: &Params) -> bool {
    if points.len() < 5 {
        return false;
    }
    let big = separated_triples(points.len(), params.e_pts, params.f_pts).any(|(i, j, k)| {
        fuzzy_gt(
            triangle_area(points[i], points[j], points[k]),
            params.area1,
        )
    });
    let small = separated_triples(points.len(), params.e_pts, params.f_pts).any(|(i, j, k)| {
        fuzzy_lt(
            triangle_area(points[i], points[j], points[k]),
            params.area2,
        )
    });
    big && small
}
