//! Reduction stages: CMV → PUM → FUV → LAUNCH.
//!
//! All 15-slot vectors and the two 15×15 matrices are wrapped in
//! [`LicVec`]/[`LicGrid`] and indexed by [`Lic`], so a result cannot be
//! written into the wrong condition's slot. Every stage is a pure function
//! of its inputs; nothing carries over between runs, and concurrent runs
//! with distinct inputs need no coordination.

use std::ops::{Index, IndexMut};

use nalgebra::Vector2;
use thiserror::Error;

use crate::lic::{self, Lic};
use crate::params::Params;

/// How two condition results combine at one connector-matrix cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connector {
    /// Cell does not participate; its PUM entry is vacuously true.
    #[default]
    NotUsed,
    And,
    Or,
}

/// Fixed 15-slot vector indexed by [`Lic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LicVec<T>(pub [T; Lic::COUNT]);

impl<T: Copy> LicVec<T> {
    /// Vector with every slot set to `value`.
    pub fn filled(value: T) -> Self {
        Self([value; Lic::COUNT])
    }
}

impl<T: Copy + Default> Default for LicVec<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> Index<Lic> for LicVec<T> {
    type Output = T;
    #[inline]
    fn index(&self, lic: Lic) -> &T {
        &self.0[lic.index()]
    }
}

impl<T> IndexMut<Lic> for LicVec<T> {
    #[inline]
    fn index_mut(&mut self, lic: Lic) -> &mut T {
        &mut self.0[lic.index()]
    }
}

/// Fixed 15×15 matrix indexed by a pair of [`Lic`]s (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LicGrid<T>(pub [[T; Lic::COUNT]; Lic::COUNT]);

impl<T: Copy> LicGrid<T> {
    /// Grid with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        Self([[value; Lic::COUNT]; Lic::COUNT])
    }
}

impl<T: Copy + Default> Default for LicGrid<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> Index<(Lic, Lic)> for LicGrid<T> {
    type Output = T;
    #[inline]
    fn index(&self, (i, j): (Lic, Lic)) -> &T {
        &self.0[i.index()][j.index()]
    }
}

impl<T> IndexMut<(Lic, Lic)> for LicGrid<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (Lic, Lic)) -> &mut T {
        &mut self.0[i.index()][j.index()]
    }
}

/// Conditions Met Vector: per-condition result.
pub type Cmv = LicVec<bool>;
/// Preliminary Unlocking Vector: marks which rows are relevant.
pub type Puv = LicVec<bool>;
/// Final Unlocking Vector: per-row pass/fail after relevance.
pub type Fuv = LicVec<bool>;
/// Logical Connector Matrix (caller-owned, static per run).
pub type Lcm = LicGrid<Connector>;
/// Preliminary Unlocking Matrix (derived each run).
pub type Pum = LicGrid<bool>;

/// The decision plus every intermediate vector, for caller-side diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub launch: bool,
    pub cmv: Cmv,
    pub pum: Pum,
    pub fuv: Fuv,
}

/// Input rejected before any condition ran. The pipeline never substitutes a
/// default verdict for malformed input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    #[error("non-finite coordinate at index {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
    #[error("non-finite parameter {name}: {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

fn validate(points: &[Vector2<f64>], params: &Params) -> Result<(), InputError> {
    for (index, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(InputError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }
    }
    for (name, value) in params.float_fields() {
        if !value.is_finite() {
            return Err(InputError::NonFiniteParameter { name, value });
        }
    }
    Ok(())
}

/// Run all fifteen evaluators in slot order.
pub fn build_cmv(points: &[Vector2<f64>], params: &Params) -> Cmv {
    let mut cmv = Cmv::default();
    for lic in Lic::ALL {
        cmv[lic] = lic::eval(lic, points, params);
    }
    cmv
}

/// Combine CMV pairs through the connector matrix. `NotUsed` cells are
/// vacuously true: an unused connector never blocks a row.
pub fn build_pum(cmv: &Cmv, lcm: &Lcm) -> Pum {
    let mut pum = Pum::default();
    for i in Lic::ALL {
        for j in Lic::ALL {
            pum[(i, j)] = match lcm[(i, j)] {
                Connector::NotUsed => true,
                Connector::And => cmv[i] && cmv[j],
                Connector::Or => cmv[i] || cmv[j],
            };
        }
    }
    pum
}

/// Reduce each PUM row against the relevance vector: an irrelevant row
/// passes outright; a relevant row must be unanimously true.
pub fn build_fuv(pum: &Pum, puv: &Puv) -> Fuv {
    let mut fuv = Fuv::default();
    for i in Lic::ALL {
        fuv[i] = !puv[i] || Lic::ALL.into_iter().all(|j| pum[(i, j)]);
    }
    fuv
}

/// Final verdict: all FUV entries must hold.
pub fn launch(fuv: &Fuv) -> bool {
    Lic::ALL.into_iter().all(|i| fuv[i])
}

/// Evaluate the launch decision for one run.
///
/// Validates the input (finite coordinates and parameter fields) before any
/// condition runs, then derives CMV, PUM, FUV, and the final decision. The
/// slice length is NUMPOINTS; no separate count is accepted or checked here.
pub fn evaluate(
    points: &[Vector2<f64>],
    params: &Params,
    lcm: &Lcm,
    puv: &Puv,
) -> Result<Verdict, InputError> {
    validate(points, params)?;
    let cmv = build_cmv(points, params);
    let pum = build_pum(&cmv, lcm);
    let fuv = build_fuv(&pum, puv);
    Ok(Verdict {
        launch: launch(&fuv),
        cmv,
        pum,
        fuv,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Vector2<f64>> {
        raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
    }

    #[test]
    fn straight_line_at_exact_boundary_is_not_a_deviation() {
        // angle exactly π with ε = 0: "equal", neither less nor greater
        let line = pts(&[(-1.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        let params = Params {
            epsilon: 0.0,
            ..Params::default()
        };
        let cmv = build_cmv(&line, &params);
        assert!(!cmv[Lic::Lic2]);
    }

    #[test]
    fn right_angle_is_a_deviation() {
        let corner = pts(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
        let params = Params {
            epsilon: 0.01,
            ..Params::default()
        };
        let cmv = build_cmv(&corner, &params);
        assert!(cmv[Lic::Lic2]);
    }

    #[test]
    fn all_true_cmv_all_and_lcm_launches() {
        let cmv = Cmv::filled(true);
        let lcm = Lcm::filled(Connector::And);
        let puv = Puv::filled(true);
        let pum = build_pum(&cmv, &lcm);
        for i in Lic::ALL {
            for j in Lic::ALL {
                assert!(pum[(i, j)]);
            }
        }
        let fuv = build_fuv(&pum, &puv);
        assert_eq!(fuv, Fuv::filled(true));
        assert!(launch(&fuv));
    }

    #[test]
    fn single_false_relevant_row_blocks_launch() {
        let mut cmv = Cmv::filled(true);
        cmv[Lic::Lic4] = false;
        let lcm = Lcm::filled(Connector::And);
        let puv = Puv::filled(true);
        let pum = build_pum(&cmv, &lcm);
        assert!(!pum[(Lic::Lic4, Lic::Lic0)]);
        let fuv = build_fuv(&pum, &puv);
        assert!(!fuv[Lic::Lic4]);
        assert!(!launch(&fuv));
    }

    #[test]
    fn irrelevant_row_passes_despite_false_condition() {
        let mut cmv = Cmv::filled(true);
        cmv[Lic::Lic4] = false;
        let lcm = Lcm::filled(Connector::And);
        let mut puv = Puv::filled(true);
        puv[Lic::Lic4] = false;
        let pum = build_pum(&cmv, &lcm);
        let fuv = build_fuv(&pum, &puv);
        assert!(fuv[Lic::Lic4]);
        // other rows still see the false CMV entry through their AND cells
        assert!(!fuv[Lic::Lic0]);
        assert!(!launch(&fuv));
    }

    #[test]
    fn or_connector_needs_only_one_side() {
        let mut cmv = Cmv::filled(false);
        cmv[Lic::Lic3] = true;
        let lcm = Lcm::filled(Connector::Or);
        let pum = build_pum(&cmv, &lcm);
        assert!(pum[(Lic::Lic3, Lic::Lic8)]);
        assert!(pum[(Lic::Lic8, Lic::Lic3)]);
        assert!(!pum[(Lic::Lic8, Lic::Lic9)]);
    }

    #[test]
    fn rejects_non_finite_coordinate() {
        let points = pts(&[(0.0, 0.0), (f64::NAN, 1.0)]);
        let params = Params::default();
        let err = evaluate(&points, &params, &Lcm::default(), &Puv::default()).unwrap_err();
        assert!(matches!(err, InputError::NonFiniteCoordinate { index: 1, .. }));
    }

    #[test]
    fn rejects_non_finite_parameter() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let params = Params {
            radius1: f64::INFINITY,
            ..Params::default()
        };
        let err = evaluate(&points, &params, &Lcm::default(), &Puv::default()).unwrap_err();
        assert_eq!(
            err,
            InputError::NonFiniteParameter {
                name: "radius1",
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn evaluate_bundles_all_intermediates() {
        let points = pts(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0)]);
        let params = Params::default();
        let lcm = Lcm::filled(Connector::NotUsed);
        let puv = Puv::filled(true);
        let verdict = evaluate(&points, &params, &lcm, &puv).unwrap();
        // an all-unused matrix unlocks everything regardless of the CMV
        assert_eq!(verdict.pum, Pum::filled(true));
        assert_eq!(verdict.fuv, Fuv::filled(true));
        assert!(verdict.launch);
        assert_eq!(verdict.cmv, build_cmv(&points, &params));
    }

    proptest! {
        // An unused connector cell is true no matter what the CMV holds.
        #[test]
        fn unused_cells_are_vacuously_true(bits in any::<[bool; Lic::COUNT]>()) {
            let cmv = LicVec(bits);
            let pum = build_pum(&cmv, &Lcm::filled(Connector::NotUsed));
            prop_assert_eq!(pum, Pum::filled(true));
        }

        // A row marked irrelevant passes regardless of its PUM row.
        #[test]
        fn irrelevant_rows_always_pass(
            cells in any::<[[bool; Lic::COUNT]; Lic::COUNT]>(),
            relevant in any::<[bool; Lic::COUNT]>(),
        ) {
            let pum = LicGrid(cells);
            let puv = LicVec(relevant);
            let fuv = build_fuv(&pum, &puv);
            for i in Lic::ALL {
                if !puv[i] {
                    prop_assert!(fuv[i]);
                }
            }
        }

        // LAUNCH is the conjunction over the FUV.
        #[test]
        fn launch_is_conjunction(bits in any::<[bool; Lic::COUNT]>()) {
            let fuv = LicVec(bits);
            prop_assert_eq!(launch(&fuv), bits.iter().all(|&b| b));
        }
    }
}
