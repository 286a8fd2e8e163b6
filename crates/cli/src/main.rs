use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Launch interceptor decision runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate an input file and print the verdict
    Decide {
        #[arg(long)]
        input: PathBuf,
        /// Also print the diagnostic dump (all vectors and matrices)
        #[arg(long)]
        dump: bool,
    },
    /// Write a deterministic sample input file
    Gen {
        #[arg(long, default_value_t = 100)]
        numpoints: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Decide { input, dump } => decide(&input, dump),
        Action::Gen {
            numpoints,
            seed,
            out,
        } => gen(numpoints, seed, &out),
    }
}

fn decide(path: &Path, dump: bool) -> Result<()> {
    let file = input::load(path)?;
    let (points, params, lcm, puv) = file.into_parts()?;
    let verdict = interceptor::decide::evaluate(&points, &params, &lcm, &puv)?;
    tracing::info!(numpoints = points.len(), launch = verdict.launch, "decision");
    if dump {
        print!("{}", report::render(&points, &params, &lcm, &puv, &verdict));
    }
    println!("{}", if verdict.launch { "LAUNCH" } else { "NO LAUNCH" });
    Ok(())
}

fn gen(numpoints: usize, seed: u64, out: &Path) -> Result<()> {
    let file = input::InputFile::sample(numpoints, seed);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&file)?)?;
    tracing::info!(numpoints, seed, out = %out.display(), "sample_input_written");
    Ok(())
}
