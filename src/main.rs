// Entry point: parse arguments, load one trajectory table, write one figure.
use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use qtraj::cli::Args;
use qtraj::config::PlotConfig;
use qtraj::core::table::Trajectories;
use qtraj::plot;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cfg = PlotConfig::load_or_default(&args.config);
    let (input, output) = args.resolve_paths();

    let traj = Trajectories::from_file(&input)?;
    info!(
        input = %input.display(),
        steps = traj.n_steps(),
        states = traj.n_states(),
        "plotting trajectories"
    );

    plot::render(&traj, &cfg, &output)?;
    Ok(())
}
