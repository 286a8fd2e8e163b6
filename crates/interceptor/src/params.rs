//! The parameter block consumed by the condition bank.
//!
//! All fields are required and must be finite for the duration of one
//! decision run; `decide::evaluate` checks finiteness up front. Which
//! condition reads which field is documented on the evaluators themselves.

/// Numeric thresholds and window separations for the fifteen conditions.
/// Immutable per run; threaded to each evaluator as an explicit argument.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Length threshold for consecutive/separated pair distances (LIC 0, 7, 12).
    pub length1: f64,
    /// Radius of the circle that point triples must escape (LIC 1, 8, 13).
    pub radius1: f64,
    /// Angular tolerance around π, in radians (LIC 2, 9).
    pub epsilon: f64,
    /// Triangle-area threshold (LIC 3, 10, 14).
    pub area1: f64,
    /// Window size for the quadrant-spread scan (LIC 4).
    pub q_pts: usize,
    /// Quadrant count that a window must exceed (LIC 4).
    pub quads: usize,
    /// Distance threshold from a point to the window's chord (LIC 6).
    pub dist: f64,
    /// Window size for the chord-distance scan (LIC 6).
    pub n_pts: usize,
    /// Intervening points between distance-pair endpoints (LIC 7, 12).
    pub k_pts: usize,
    /// Intervening points before the circle-triple's second point (LIC 8, 13).
    pub a_pts: usize,
    /// Intervening points before the circle-triple's third point (LIC 8, 13).
    pub b_pts: usize,
    /// Intervening points before the angle-triple's vertex (LIC 9).
    pub c_pts: usize,
    /// Intervening points after the angle-triple's vertex (LIC 9).
    pub d_pts: usize,
    /// Intervening points before the area-triple's second point (LIC 10, 14).
    pub e_pts: usize,
    /// Intervening points before the area-triple's third point (LIC 10, 14).
    pub f_pts: usize,
    /// Intervening points between x-displacement pair endpoints (LIC 11).
    pub g_pts: usize,
    /// Upper length bound for the band conjunction (LIC 12).
    pub length2: f64,
    /// Radius that some triple must fit within or on (LIC 13).
    pub radius2: f64,
    /// Upper area bound for the band conjunction (LIC 14).
    pub area2: f64,
}

impl Params {
    /// Float fields with their names, for finiteness validation.
    pub fn float_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("length1", self.length1),
            ("radius1", self.radius1),
            ("epsilon", self.epsilon),
            ("area1", self.area1),
            ("dist", self.dist),
            ("length2", self.length2),
            ("radius2", self.radius2),
            ("area2", self.area2),
        ]
    }
}

impl Default for Params {
    /// Scaffold values for benches and generated sample inputs. Real runs
    /// always supply a full block of their own.
    fn default() -> Self {
        Self {
            length1: 1.0,
            radius1: 1.0,
            epsilon: 0.1,
            area1: 1.0,
            q_pts: 3,
            quads: 2,
            dist: 1.0,
            n_pts: 3,
            k_pts: 1,
            a_pts: 1,
            b_pts: 1,
            c_pts: 1,
            d_pts: 1,
            e_pts: 1,
            f_pts: 1,
            g_pts: 1,
            length2: 2.0,
            radius2: 2.0,
            area2: 2.0,
        }
    }
}
