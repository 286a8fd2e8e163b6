//! The fifteen launch interceptor conditions.
//!
//! Each condition is a pure predicate over `(&[Vec2], &Params)`: an
//! existential scan over consecutive or separated windows of 2–3 points,
//! short-circuiting on the first confirming window. No condition consults
//! another's result, so the bank may be evaluated in any order.
//!
//! Slots are addressed by the [`Lic`] enumeration everywhere downstream;
//! bare integer indices never touch the 15-slot vectors/matrices.

mod evaluators;

use nalgebra::Vector2;

use crate::params::Params;

/// Identifier for one of the fifteen conditions. Doubles as the index type
/// for every 15-slot vector/matrix in the decision pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lic {
    Lic0,
    Lic1,
    Lic2,
    Lic3,
    Lic4,
    Lic5,
    Lic6,
    Lic7,
    Lic8,
    Lic9,
    Lic10,
    Lic11,
    Lic12,
    Lic13,
    Lic14,
}

impl Lic {
    /// Number of conditions; fixes the size of CMV/PUM/FUV/LCM/PUV.
    pub const COUNT: usize = 15;

    /// All conditions in slot order.
    pub const ALL: [Lic; Self::COUNT] = [
        Lic::Lic0,
        Lic::Lic1,
        Lic::Lic2,
        Lic::Lic3,
        Lic::Lic4,
        Lic::Lic5,
        Lic::Lic6,
        Lic::Lic7,
        Lic::Lic8,
        Lic::Lic9,
        Lic::Lic10,
        Lic::Lic11,
        Lic::Lic12,
        Lic::Lic13,
        Lic::Lic14,
    ];

    /// Slot index of this condition.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Evaluate one condition against the point sequence and parameter block.
pub fn eval(lic: Lic, points: &[Vector2<f64>], params: &Params) -> bool {
    match lic {
        Lic::Lic0 => evaluators::lic0(points, params),
        Lic::Lic1 => evaluators::lic1(points, params),
        Lic::Lic2 => evaluators::lic2(points, params),
        Lic::Lic3 => evaluators::lic3(points, params),
        Lic::Lic4 => evaluators::lic4(points, params),
        Lic::Lic5 => evaluators::lic5(points, params),
        Lic::Lic6 => evaluators::lic6(points, params),
        Lic::Lic7 => evaluators::lic7(points, params),
        Lic::Lic8 => evaluators::lic8(points, params),
        Lic::Lic9 => evaluators::lic9(points, params),
        Lic::Lic10 => evaluators::lic10(points, params),
        Lic::Lic11 => evaluators::lic11(points, params),
        Lic::Lic12 => evaluators::lic12(points, params),
        Lic::Lic13 => evaluators::lic13(points, params),
        Lic::Lic14 => evaluators::lic14(points, params),
    }
}
