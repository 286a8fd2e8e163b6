//! Deterministic random point clouds (seeded, replayable).
//!
//! Used by the benches and the CLI `gen` command to produce reproducible
//! radar-track stand-ins. Determinism uses a replay token `(seed, index)`
//! mixed into a single RNG, so draw `k` of a batch can be regenerated alone.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points to draw.
    pub numpoints: usize,
    /// Points are uniform in the square `[-half_extent, half_extent]²`.
    pub half_extent: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            numpoints: 100,
            half_extent: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a uniform point cloud in the configured square.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.max(f64::MIN_POSITIVE);
    (0..cfg.numpoints)
        .map(|_| Vector2::new(rng.gen_range(-h..h), rng.gen_range(-h..h)))
        .collect()
}
