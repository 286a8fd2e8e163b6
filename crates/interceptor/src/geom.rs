//! Planar primitives shared by the condition bank.
//!
//! All functions are pure over `Vector2<f64>` and carry no tolerance of their
//! own; thresholding is the caller's job (via `compare::fuzzy_cmp`). The only
//! exact comparisons here are the coincidence guards, which intentionally use
//! bitwise point equality: a window is degenerate when points coincide
//! exactly, not merely when they are close.

use nalgebra::Vector2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (q - p).norm()
}

/// Cross product of `b - a` and `c - a` (signed parallelogram area).
#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Whether the angle at vertex `p2` is defined: false iff `p1` or `p3`
/// coincides exactly with the vertex. Callers must check this before
/// `vertex_angle`.
#[inline]
pub fn angle_defined(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> bool {
    p1 != p2 && p3 != p2
}

/// Interior angle at vertex `p2`, in radians, in [0, π].
///
/// Computed from the dot product of `p1 - p2` and `p3 - p2`; the cosine is
/// clamped to [-1, 1] so near-collinear triples cannot push `acos` out of
/// domain. Collinear triples with the vertex between its neighbors measure
/// exactly π. Undefined when either edge has zero length; guard with
/// [`angle_defined`].
pub fn vertex_angle(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    let u = p1 - p2;
    let v = p3 - p2;
    let cos = u.dot(&v) / (u.norm() * v.norm());
    cos.clamp(-1.0, 1.0).acos()
}

/// Unsigned triangle area (half the absolute cross product).
#[inline]
pub fn triangle_area(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    cross(p1, p2, p3).abs() / 2.0
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
/// When `a` and `b` coincide the line is degenerate; falls back to the
/// distance from `p` to that common point.
pub fn point_line_distance(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    if a == b {
        return distance(p, a);
    }
    cross(a, b, p).abs() / distance(a, b)
}

/// Radius of the minimum enclosing circle of three points.
///
/// For right/obtuse (and all degenerate) triangles the circle on the longest
/// side as diameter already covers the opposite vertex, so the radius is half
/// the longest side; otherwise it is the circumradius `abc / (4·area)`. The
/// obtuse test keeps collinear triples out of the circumradius branch, so the
/// area never divides by zero.
pub fn enclosing_radius(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    let a = distance(p2, p3);
    let b = distance(p1, p3);
    let c = distance(p1, p2);
    let longest = a.max(b).max(c);
    // longest² ≥ sum of the other two squares ⇔ right, obtuse, or degenerate
    if 2.0 * longest * longest >= a * a + b * b + c * c {
        longest / 2.0
    } else {
        (a * b * c) / (4.0 * triangle_area(p1, p2, p3))
    }
}

/// Planar quadrant. Points on an axis (or the origin) belong to the
/// lowest-numbered quadrant whose closed region contains them:
/// (0,0) → I, (-l,0) → II, (0,-l) → III.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
}

/// Classify a point into its quadrant (deterministic on axes, see [`Quadrant`]).
pub fn quadrant(p: Vector2<f64>) -> Quadrant {
    if p.x >= 0.0 && p.y >= 0.0 {
        Quadrant::I
    } else if p.x <= 0.0 && p.y >= 0.0 {
        Quadrant::II
    } else if p.x <= 0.0 && p.y <= 0.0 {
        Quadrant::III
    } else {
        Quadrant::IV
    }
}
