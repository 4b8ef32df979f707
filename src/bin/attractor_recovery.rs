//! Attractor Recovery: Convergence Curves as Carriers of Information
//!
//! Demonstrates that the path a value takes toward its attractor
//! identifies the value well enough to guess it back.
//!
//! ## Protocol
//!
//! 1. Build the reference attractor set (or one from `--config`)
//! 2. Converge a set of neighbouring values and print their signatures
//! 3. Converge a second set and try to recover each from its own curve
//! 4. Report the recovery rate
//! 5. Optionally dump curves as JSON for external plotting

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use attractor_curves::{AttractorMapper, AttractorSet, Curve, MapperConfig};

#[derive(Parser)]
#[command(name = "attractor_recovery")]
#[command(version)]
#[command(about = "Converge values toward seeded attractors and recover them from their curves", long_about = None)]
struct Cli {
    /// JSON mapper configuration (fields default to the reference system)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the attractor seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of attractors
    #[arg(long)]
    attractors: Option<usize>,

    /// Values whose signatures are printed
    #[arg(long, value_delimiter = ',', default_values_t = vec![10.0, 11.0, 50.0, 51.0, 100.0, 101.0])]
    values: Vec<f64>,

    /// Values converged then recovered from their own curves
    #[arg(long, value_delimiter = ',', default_values_t = vec![10.0, 50.0, 100.0, 150.0, 200.0])]
    recover: Vec<f64>,

    /// Write attractors and curves to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct CurveDump<'a> {
    attractors: &'a AttractorSet,
    curves: Vec<CurveEntry<'a>>,
}

#[derive(Serialize)]
struct CurveEntry<'a> {
    input: f64,
    velocity_profile: Vec<f64>,
    steps: &'a Curve,
}

fn load_config(cli: &Cli) -> anyhow::Result<MapperConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            MapperConfig::from_json(&text)?
        }
        None => MapperConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(n) = cli.attractors {
        config.n_attractors = n;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Attractor Curve Mapping");
    println!("  Information lives in HOW a value converges, not WHERE");
    println!("═══════════════════════════════════════════════════════════════\n");

    println!("System Parameters:");
    println!("  Attractors = {}", config.n_attractors);
    println!("  Dimensions = {}", config.dimensions);
    println!("  Seed = {}", config.seed);
    println!("  Max steps = {}", config.max_steps);
    println!();

    let mut mapper = AttractorMapper::new(config)?;
    info!(attractors = mapper.attractors().len(), "mapper ready");

    for (j, attractor) in mapper.attractors().iter().enumerate() {
        let coords: Vec<String> = attractor.iter().map(|x| format!("{:7.3}", x)).collect();
        println!("  A{} = ({})", j, coords.join(", "));
    }

    // Unique convergence curves
    println!("\n══════════════════════════════════════════════════════════════");
    println!("  1. Unique Convergence Curves");
    println!("══════════════════════════════════════════════════════════════\n");

    for &value in &cli.values {
        let curve = mapper.converge(value)?;
        match mapper.signature_of(&curve) {
            Some(sig) => println!(
                "Value {:7.1}: Length = {:3}, Final = {}, Changes = {:2}, Speed sum = {:9.4}, Pattern = {:?}",
                value,
                sig.curve_length,
                sig.final_attractor,
                sig.direction_changes,
                sig.total_distance,
                sig.affinity_pattern
            ),
            None => println!("Value {:7.1}: empty curve", value),
        }
    }

    // Recovery
    println!("\n══════════════════════════════════════════════════════════════");
    println!("  2. Information Recovery From Curves");
    println!("══════════════════════════════════════════════════════════════\n");

    let report = mapper.evaluate_recovery(&cli.recover)?;
    for trial in &report.trials {
        let status = if trial.recovered() { "✓" } else { "✗" };
        match trial.top {
            Some(top) => println!(
                "Value {:7.1}: Recovery {} (top candidate: {}, score: {})",
                trial.input, status, top.input, top.score
            ),
            None => println!("Value {:7.1}: Recovery {} (no candidates)", trial.input, status),
        }
    }
    println!(
        "\nRecovery rate: {:.0}% ({} / {})",
        100.0 * report.recovery_rate(),
        report.successes(),
        report.trials.len()
    );

    if let Some(path) = &cli.json {
        let curves = mapper
            .cache()
            .iter()
            .map(|(input, curve)| CurveEntry {
                input,
                velocity_profile: curve.velocity_profile(),
                steps: curve,
            })
            .collect();
        let dump = CurveDump {
            attractors: mapper.attractors(),
            curves,
        };
        let text = serde_json::to_string_pretty(&dump)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), curves = dump.curves.len(), "wrote curve dump");
    }

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Analysis Complete");
    println!("═══════════════════════════════════════════════════════════════");

    Ok(())
}
