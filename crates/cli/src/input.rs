//! Input-file supply for the decision core.
//!
//! The file is a single JSON document carrying the point sequence, the
//! parameter block, the connector matrix (cells named `ANDD`/`ORR`/
//! `NOTUSED`), and the relevance vector. Shape validation happens here: the
//! core only ever sees well-formed 15-slot structures, and the declared
//! `numpoints` is checked against the actual point count before conversion.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use interceptor::decide::{Connector, Lcm, Puv};
use interceptor::lic::Lic;
use interceptor::params::Params;
use interceptor::sample::{draw_points, CloudCfg, ReplayToken};
use interceptor::Vec2;

/// Connector cell as spelled in input files.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ConnectorName {
    #[serde(rename = "ANDD")]
    Andd,
    #[serde(rename = "ORR")]
    Orr,
    #[serde(rename = "NOTUSED")]
    NotUsed,
}

impl From<ConnectorName> for Connector {
    fn from(name: ConnectorName) -> Self {
        match name {
            ConnectorName::Andd => Connector::And,
            ConnectorName::Orr => Connector::Or,
            ConnectorName::NotUsed => Connector::NotUsed,
        }
    }
}

/// Parameter block as spelled in input files; field names match the core.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamsFile {
    pub length1: f64,
    pub radius1: f64,
    pub epsilon: f64,
    pub area1: f64,
    pub q_pts: usize,
    pub quads: usize,
    pub dist: f64,
    pub n_pts: usize,
    pub k_pts: usize,
    pub a_pts: usize,
    pub b_pts: usize,
    pub c_pts: usize,
    pub d_pts: usize,
    pub e_pts: usize,
    pub f_pts: usize,
    pub g_pts: usize,
    pub length2: f64,
    pub radius2: f64,
    pub area2: f64,
}

impl From<ParamsFile> for Params {
    fn from(p: ParamsFile) -> Self {
        Params {
            length1: p.length1,
            radius1: p.radius1,
            epsilon: p.epsilon,
            area1: p.area1,
            q_pts: p.q_pts,
            quads: p.quads,
            dist: p.dist,
            n_pts: p.n_pts,
            k_pts: p.k_pts,
            a_pts: p.a_pts,
            b_pts: p.b_pts,
            c_pts: p.c_pts,
            d_pts: p.d_pts,
            e_pts: p.e_pts,
            f_pts: p.f_pts,
            g_pts: p.g_pts,
            length2: p.length2,
            radius2: p.radius2,
            area2: p.area2,
        }
    }
}

impl From<Params> for ParamsFile {
    fn from(p: Params) -> Self {
        ParamsFile {
            length1: p.length1,
            radius1: p.radius1,
            epsilon: p.epsilon,
            area1: p.area1,
            q_pts: p.q_pts,
            quads: p.quads,
            dist: p.dist,
            n_pts: p.n_pts,
            k_pts: p.k_pts,
            a_pts: p.a_pts,
            b_pts: p.b_pts,
            c_pts: p.c_pts,
            d_pts: p.d_pts,
            e_pts: p.e_pts,
            f_pts: p.f_pts,
            g_pts: p.g_pts,
            length2: p.length2,
            radius2: p.radius2,
            area2: p.area2,
        }
    }
}

/// One decision run, as stored on disk.
#[derive(Debug, Deserialize, Serialize)]
pub struct InputFile {
    pub numpoints: usize,
    pub points: Vec<[f64; 2]>,
    pub parameters: ParamsFile,
    pub lcm: Vec<Vec<ConnectorName>>,
    pub puv: Vec<bool>,
}

/// Read and parse an input file.
pub fn load(path: &Path) -> Result<InputFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading input {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing input {}", path.display()))
}

impl InputFile {
    /// Validate shapes and convert into core types.
    pub fn into_parts(self) -> Result<(Vec<Vec2<f64>>, Params, Lcm, Puv)> {
        ensure!(
            self.numpoints == self.points.len(),
            "declared numpoints {} does not match {} supplied points",
            self.numpoints,
            self.points.len()
        );
        ensure!(
            self.lcm.len() == Lic::COUNT,
            "lcm has {} rows, expected {}",
            self.lcm.len(),
            Lic::COUNT
        );
        for (idx, row) in self.lcm.iter().enumerate() {
            ensure!(
                row.len() == Lic::COUNT,
                "lcm row {idx} has {} entries, expected {}",
                row.len(),
                Lic::COUNT
            );
        }
        ensure!(
            self.puv.len() == Lic::COUNT,
            "puv has {} entries, expected {}",
            self.puv.len(),
            Lic::COUNT
        );

        let points = self
            .points
            .iter()
            .map(|&[x, y]| Vec2::new(x, y))
            .collect();
        let mut lcm = Lcm::default();
        for (i, row) in Lic::ALL.into_iter().zip(&self.lcm) {
            for (j, &name) in Lic::ALL.into_iter().zip(row) {
                lcm[(i, j)] = name.into();
            }
        }
        let mut puv = Puv::default();
        for (i, &relevant) in Lic::ALL.into_iter().zip(&self.puv) {
            puv[i] = relevant;
        }
        Ok((points, self.parameters.into(), lcm, puv))
    }

    /// Deterministic scaffold input: seeded point cloud, default parameters,
    /// an all-`NOTUSED` matrix, and every row relevant.
    pub fn sample(numpoints: usize, seed: u64) -> Self {
        let points = draw_points(
            CloudCfg {
                numpoints,
                ..CloudCfg::default()
            },
            ReplayToken { seed, index: 0 },
        );
        InputFile {
            numpoints,
            points: points.iter().map(|p| [p.x, p.y]).collect(),
            parameters: Params::default().into(),
            lcm: vec![vec![ConnectorName::NotUsed; Lic::COUNT]; Lic::COUNT],
            puv: vec![true; Lic::COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sample_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.json");
        let file = InputFile::sample(12, 42);
        std::fs::write(&path, serde_json::to_vec_pretty(&file).unwrap()).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.numpoints, 12);
        assert_eq!(loaded.points, file.points);
        let (points, _, _, puv) = loaded.into_parts().unwrap();
        assert_eq!(points.len(), 12);
        assert!(Lic::ALL.into_iter().all(|i| puv[i]));
    }

    #[test]
    fn rejects_mismatched_numpoints() {
        let mut file = InputFile::sample(5, 0);
        file.numpoints = 4;
        let err = file.into_parts().unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn rejects_short_lcm_row() {
        let mut file = InputFile::sample(5, 0);
        file.lcm[3].pop();
        let err = file.into_parts().unwrap_err();
        assert!(err.to_string().contains("lcm row 3"));
    }

    #[test]
    fn rejects_wrong_puv_length() {
        let mut file = InputFile::sample(5, 0);
        file.puv.push(true);
        assert!(file.into_parts().is_err());
    }

    #[test]
    fn connector_names_parse() {
        let cells: Vec<ConnectorName> = serde_json::from_str(r#"["ANDD","ORR","NOTUSED"]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                ConnectorName::Andd,
                ConnectorName::Orr,
                ConnectorName::NotUsed
            ]
        );
    }
}
