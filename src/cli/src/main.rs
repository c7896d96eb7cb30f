//! Command-line front end: read a cube state as the JSON facelet map the
//! outer API uses, validate it, solve it with the selected strategy, and
//! print the move sequence.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{WrapErr, bail};
use log::info;
use serde::Deserialize;

use cube_core::{CubeState, validate};
use two_phase::{Outcome, TwoPhaseSolver};

#[derive(Parser)]
#[command(name = "cube-solver", about = "Layer-by-layer Rubik's Cube solver")]
struct Args {
    /// Path to the cube state JSON; read from stdin when omitted.
    input: Option<PathBuf>,

    /// Solving strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Method)]
    strategy: Strategy,

    /// External two-phase solver executable, for `--strategy two-phase`.
    #[arg(long, default_value = "twophase")]
    solver_bin: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// The layer-by-layer engine in this repository.
    Method,
    /// Delegate to the external two-phase solver.
    TwoPhase,
}

/// The wire shape of the outer API: all 54 facelets keyed `F1`..`D9`.
#[derive(Deserialize)]
struct SolveRequest {
    rubiks_cube: HashMap<String, String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let request: SolveRequest =
        serde_json::from_str(&raw).wrap_err("the input is not a cube state request")?;

    let mut facelets = HashMap::new();
    for (position, color) in request.rubiks_cube {
        let mut chars = color.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                facelets.insert(position, c);
            }
            _ => bail!("color `{color}` for facelet {position} must be a single character"),
        }
    }

    let state = CubeState::from_map(&facelets)?;
    validate(&state)?;

    let sequence = match args.strategy {
        Strategy::Method => method_solver::solve(&state)?.sequence,
        Strategy::TwoPhase => {
            let solver = TwoPhaseSolver::new(&args.solver_bin);
            match solver.solve(&state)? {
                Outcome::Solved(sequence) => sequence,
                Outcome::NoSolution => bail!("the external solver reports the cube unsolvable"),
            }
        }
    };
    info!("solved in {} moves", sequence.len());

    let tokens: Vec<String> = sequence.iter().map(ToString::to_string).collect();
    println!("{}", tokens.join(" "));
    Ok(())
}
