//! QEL - Quantum Energy Lab
//! Command-line interface for running circuits and energy formulas

mod runs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qel_energy::{
    DEFAULT_EFFICIENCY, battery_discharge, simulate_particle_collision, solar_panel_output,
};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use runs::{Preset, RunReport};

#[derive(Parser)]
#[command(name = "qel")]
#[command(version = "2026.1.16")]
#[command(about = "QEL - Quantum Energy Lab", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bell pair: H(0), CNOT(0, 1), measure all
    Bell {
        #[arg(short, long, default_value_t = 1024)]
        shots: usize,

        /// Base seed for reproducible shots
        #[arg(long)]
        seed: Option<u64>,
    },

    /// GHZ state over N qubits
    Ghz {
        #[arg(short, long, default_value_t = 3)]
        qubits: usize,

        #[arg(short, long, default_value_t = 1024)]
        shots: usize,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Hadamard on every qubit
    Uniform {
        #[arg(short, long, default_value_t = 3)]
        qubits: usize,

        #[arg(short, long, default_value_t = 1024)]
        shots: usize,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Solar panel energy in joules
    Solar {
        /// Panel power (W)
        power: f64,

        /// Operating time (h)
        hours: f64,

        #[arg(short, long, default_value_t = DEFAULT_EFFICIENCY)]
        efficiency: f64,
    },

    /// Remaining battery capacity
    Battery {
        /// Capacity (Wh)
        capacity: f64,

        /// Load (W)
        load: f64,

        /// Time (h)
        hours: f64,
    },

    /// 1-D elastic collision
    Collision {
        #[arg(allow_negative_numbers = true)]
        mass1: f64,
        #[arg(allow_negative_numbers = true)]
        velocity1: f64,
        #[arg(allow_negative_numbers = true)]
        mass2: f64,
        #[arg(allow_negative_numbers = true)]
        velocity2: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qel=info,qel_quantum=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bell { shots, seed } => {
            print_run(runs::run(Preset::Bell, 2, shots, seed)?, cli.json)?
        }
        Commands::Ghz { qubits, shots, seed } => {
            print_run(runs::run(Preset::Ghz, qubits, shots, seed)?, cli.json)?
        }
        Commands::Uniform { qubits, shots, seed } => {
            print_run(runs::run(Preset::Uniform, qubits, shots, seed)?, cli.json)?
        }
        Commands::Solar { power, hours, efficiency } => {
            let joules = solar_panel_output(power, hours, efficiency)?;
            if cli.json {
                println!("{}", json!({ "joules": joules }));
            } else {
                println!("{joules:.3} J");
            }
        }
        Commands::Battery { capacity, load, hours } => {
            let remaining = battery_discharge(capacity, load, hours)?;
            if cli.json {
                println!("{}", json!({ "remaining_wh": remaining }));
            } else {
                println!("{remaining:.3} Wh");
            }
        }
        Commands::Collision { mass1, velocity1, mass2, velocity2 } => {
            let (v1, v2) = simulate_particle_collision(mass1, velocity1, mass2, velocity2)?;
            if cli.json {
                println!("{}", json!({ "velocity1": v1, "velocity2": v2 }));
            } else {
                println!("v1' = {v1:.6} m/s");
                println!("v2' = {v2:.6} m/s");
            }
        }
    }

    Ok(())
}

fn print_run(report: RunReport, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} ({} qubits, {} shots)", report.circuit, report.qubits, report.shots);
    for (bits, count) in &report.counts {
        let fraction = *count as f64 / report.shots as f64;
        println!("  {bits}  {count:>6}  {fraction:.4}");
    }
    Ok(())
}
