//! Diagnostic dump of a full decision run.
//!
//! Renders an immutable snapshot (inputs plus every intermediate vector) as
//! text. Formatting lives entirely outside the decision core; the core hands
//! over the `Verdict` and is never consulted again.

use std::fmt::Write;

use interceptor::decide::{Connector, Lcm, Puv, Verdict};
use interceptor::lic::Lic;
use interceptor::params::Params;
use interceptor::Vec2;

fn connector_name(c: Connector) -> &'static str {
    match c {
        Connector::NotUsed => "NOTUSED",
        Connector::And => "ANDD",
        Connector::Or => "ORR",
    }
}

/// Render the dump: coordinates, parameters, LCM, PUV, CMV, PUM, FUV, LAUNCH.
pub fn render(
    points: &[Vec2<f64>],
    params: &Params,
    lcm: &Lcm,
    puv: &Puv,
    verdict: &Verdict,
) -> String {
    let mut out = String::new();

    out.push_str("Coordinates (x, y):\n");
    for p in points {
        let _ = writeln!(out, "\t({:.6}, {:.6})", p.x, p.y);
    }

    out.push_str("\nParameters:\n");
    let _ = writeln!(out, "\tlength1: {:.6}", params.length1);
    let _ = writeln!(out, "\tradius1: {:.6}", params.radius1);
    let _ = writeln!(out, "\tepsilon: {:.6}", params.epsilon);
    let _ = writeln!(out, "\tarea1: {:.6}", params.area1);
    let _ = writeln!(out, "\tq_pts: {}", params.q_pts);
    let _ = writeln!(out, "\tquads: {}", params.quads);
    let _ = writeln!(out, "\tdist: {:.6}", params.dist);
    let _ = writeln!(out, "\tn_pts: {}", params.n_pts);
    let _ = writeln!(out, "\tk_pts: {}", params.k_pts);
    let _ = writeln!(out, "\ta_pts: {}", params.a_pts);
    let _ = writeln!(out, "\tb_pts: {}", params.b_pts);
    let _ = writeln!(out, "\tc_pts: {}", params.c_pts);
    let _ = writeln!(out, "\td_pts: {}", params.d_pts);
    let _ = writeln!(out, "\te_pts: {}", params.e_pts);
    let _ = writeln!(out, "\tf_pts: {}", params.f_pts);
    let _ = writeln!(out, "\tg_pts: {}", params.g_pts);
    let _ = writeln!(out, "\tlength2: {:.6}", params.length2);
    let _ = writeln!(out, "\tradius2: {:.6}", params.radius2);
    let _ = writeln!(out, "\tarea2: {:.6}", params.area2);

    out.push_str("\nLCM:\n");
    for i in Lic::ALL {
        out.push('\t');
        for j in Lic::ALL {
            let _ = write!(out, "{:<7} ", connector_name(lcm[(i, j)]));
        }
        out.push('\n');
    }

    out.push_str("\nPUV:\n\t");
    for i in Lic::ALL {
        let _ = write!(out, "{} ", puv[i]);
    }
    out.push('\n');

    out.push_str("\nCMV:\n\t");
    for i in Lic::ALL {
        let _ = write!(out, "{} ", verdict.cmv[i]);
    }
    out.push('\n');

    out.push_str("\nPUM:\n");
    for i in Lic::ALL {
        out.push('\t');
        for j in Lic::ALL {
            let _ = write!(out, "{:<5} ", verdict.pum[(i, j)]);
        }
        out.push('\n');
    }

    out.push_str("\nFUV:\n\t");
    for i in Lic::ALL {
        let _ = write!(out, "{} ", verdict.fuv[i]);
    }
    out.push('\n');

    let _ = writeln!(out, "\nLAUNCH:\n\t{}", verdict.launch);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use interceptor::decide::{evaluate, Connector, Lcm, Puv};

    #[test]
    fn dump_carries_every_section() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0), Vec2::new(4.0, 0.0)];
        let params = Params::default();
        let lcm = Lcm::filled(Connector::NotUsed);
        let puv = Puv::filled(true);
        let verdict = evaluate(&points, &params, &lcm, &puv).unwrap();
        let text = render(&points, &params, &lcm, &puv, &verdict);
        for section in [
            "Coordinates (x, y):",
            "Parameters:",
            "LCM:",
            "PUV:",
            "CMV:",
            "PUM:",
            "FUV:",
            "LAUNCH:",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
        assert!(text.contains("(2.000000, 2.000000)"));
        assert!(text.contains("NOTUSED"));
        // all-unused matrix unlocks everything
        assert!(text.trim_end().ends_with("true"));
    }

    #[test]
    fn lcm_rows_are_fifteen_wide() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
        let params = Params::default();
        let lcm = Lcm::filled(Connector::And);
        let puv = Puv::filled(false);
        let verdict = evaluate(&points, &params, &lcm, &puv).unwrap();
        let text = render(&points, &params, &lcm, &puv, &verdict);
        let lcm_block: Vec<&str> = text
            .split("LCM:\n")
            .nth(1)
            .unwrap()
            .lines()
            .take_while(|l| l.starts_with('\t'))
            .collect();
        assert_eq!(lcm_block.len(), Lic::COUNT);
        assert!(lcm_block
            .iter()
            .all(|row| row.matches("ANDD").count() == Lic::COUNT));
    }
}
