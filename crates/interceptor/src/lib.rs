//! Launch-interceptor decision core.
//!
//! Pipeline (strictly forward, all stages pure):
//! points + parameters → CMV → (CMV × LCM) → PUM → (PUM × PUV) → FUV → LAUNCH.
//!
//! - `compare`: tolerant three-way comparison used by every threshold test.
//! - `geom`: angle/distance/area/circle/quadrant primitives over 2D points.
//! - `lic`: the fifteen interceptor conditions and their registry.
//! - `decide`: fixed 15-slot vectors/matrices, reduction stages, entry point.
//! - `sample`: deterministic point-cloud sampler for benches and scaffolding.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are encouraged when they improve quality.

pub mod compare;
pub mod decide;
pub mod geom;
pub mod lic;
pub mod params;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Coordinates are nalgebra column vectors throughout.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compare::{fuzzy_cmp, fuzzy_gt, fuzzy_lt, CMP_EPS};
    pub use crate::decide::{
        build_cmv, build_fuv, build_pum, evaluate, launch, Cmv, Connector, Fuv, InputError, Lcm,
        LicGrid, LicVec, Pum, Puv, Verdict,
    };
    pub use crate::geom::{
        angle_defined, distance, enclosing_radius, point_line_distance, quadrant, triangle_area,
        vertex_angle, Quadrant,
    };
    pub use crate::lic::Lic;
    pub use crate::params::Params;
    pub use crate::sample::{draw_points, CloudCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
