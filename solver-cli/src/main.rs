use clap::{Parser, Subcommand};
use serde::Serialize;
use solver_core::{
    DEFAULT_ALPHA, DEFAULT_LENGTH, DEFAULT_N, DEFAULT_NSTEPS, HeatConfig, HeatSolver, estimate_pi,
};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Explicit 2D heat solve checked against the manufactured solution
    Heat(HeatArgs),
    /// Midpoint-rule estimate of pi
    Pi(PiArgs),
}

#[derive(clap::Args, Debug)]
struct HeatArgs {
    /// Grid size N (NxN)
    #[arg(long, default_value_t = DEFAULT_N, allow_negative_numbers = true)]
    n: i64,

    /// Number of time steps
    #[arg(long, default_value_t = DEFAULT_NSTEPS, allow_negative_numbers = true)]
    nsteps: i64,

    /// Diffusion coefficient
    #[arg(long, default_value_t = DEFAULT_ALPHA, allow_negative_numbers = true)]
    alpha: f64,

    /// Physical side length of the domain
    #[arg(long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    length: f64,

    /// Print the report as a single JSON object
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct PiArgs {
    /// Number of integration intervals
    #[arg(long, default_value_t = 1_000_000_000, allow_negative_numbers = true)]
    steps: i64,
}

#[derive(Serialize)]
struct HeatReport {
    n: usize,
    dx: f64,
    length: f64,
    alpha: f64,
    nsteps: usize,
    total_time: f64,
    dt: f64,
    r: f64,
    stable: bool,

    l2_norm: f64,
    solve_secs: f64,
    total_secs: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let result = match Args::parse().command {
        Command::Heat(args) => run_heat(&args),
        Command::Pi(args) => run_pi(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_heat(args: &HeatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let cfg = HeatConfig::with_constants(args.n, args.nsteps, args.alpha, args.length)?;
    tracing::info!(n = cfg.n(), nsteps = cfg.nsteps(), r = cfg.r(), "heat run configured");

    if !args.json {
        println!("Grid size: {} x {}", cfg.n(), cfg.n());
        println!("Cell width (dx): {:e}", cfg.dx());
        println!("Grid length: {}", cfg.length());
        println!("Alpha: {:e}", cfg.alpha());
        println!("Steps: {}", cfg.nsteps());
        println!("Total time: {:e}", cfg.total_time());
        println!("Time step (dt): {:e}", cfg.dt());
        println!("Stability ratio (r): {:e}", cfg.r());
    }

    // warns on r > 0.5 and carries on
    let mut solver = HeatSolver::new(cfg);

    let solve_start = Instant::now();
    solver.run();
    let solve_secs = solve_start.elapsed().as_secs_f64();

    let l2_norm = solver.l2_norm();
    let total_secs = start.elapsed().as_secs_f64();

    let report = HeatReport {
        n: cfg.n(),
        dx: cfg.dx(),
        length: cfg.length(),
        alpha: cfg.alpha(),
        nsteps: cfg.nsteps(),
        total_time: cfg.total_time(),
        dt: cfg.dt(),
        r: cfg.r(),
        stable: cfg.is_stable(),

        l2_norm,
        solve_secs,
        total_secs,
    };

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        if !report.stable {
            println!("Warning: unstable (r > 0.5), results may be inaccurate");
        }
        println!("L2 error norm: {:e}", report.l2_norm);
        println!("Solve time (s): {:.6}", report.solve_secs);
        println!("Total time (s): {:.6}", report.total_secs);
    }

    Ok(())
}

fn run_pi(args: &PiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let pi = estimate_pi(args.steps)?;
    let secs = start.elapsed().as_secs_f64();

    println!("Intervals: {}", args.steps);
    println!("pi ~= {pi:.15}");
    println!("Error: {:e}", (pi - std::f64::consts::PI).abs());
    println!("Time (s): {secs:.6}");
    Ok(())
}
