use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use nalgebra::Matrix3;
use spherical_qpoints::config::{DEFAULT_Q_MAX, DEFAULT_SEED};
use spherical_qpoints::qpoints::prune_radius;
use spherical_qpoints::{QPointConfig, QPointSampler};

#[derive(Parser)]
#[command(name = "spherical-qpoints")]
#[command(about = "Density-controlled q-point sampling for periodic cells")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample the q-points of a cell
    Generate {
        /// Cubic box length (shorthand for a diagonal cell)
        #[arg(short = 'L', long, conflicts_with = "cell")]
        box_length: Option<f64>,

        /// Cell as nine numbers, lattice vectors as rows
        #[arg(long, num_args = 9, allow_negative_numbers = true)]
        cell: Option<Vec<f64>>,

        /// Maximum norm of the q-points
        #[arg(short, long, default_value_t = DEFAULT_Q_MAX)]
        q_max: f64,

        /// Approximate number of q-points to keep (<= 0 keeps all)
        #[arg(short = 'n', long, default_value_t = -1, allow_negative_numbers = true)]
        target_count: i64,

        /// Seed for the pruning stream
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Solve for the prune radius of a full-sphere target count
    PruneRadius {
        /// Maximum norm of the q-points
        #[arg(short, long)]
        q_max: f64,

        /// q-space volume of a single q-point
        #[arg(long)]
        q_volume: f64,

        /// Target number of points in the full sphere
        #[arg(short, long)]
        n_points: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    info!("Starting spherical-qpoints v{}", spherical_qpoints::VERSION);

    match cli.command {
        Commands::Generate {
            box_length,
            cell,
            q_max,
            target_count,
            seed,
            json,
        } => {
            let cell = parse_cell(box_length, cell)?;
            let config = QPointConfig::new(q_max)
                .with_signed_target(target_count)
                .with_seed(seed);
            generate(&cell, config, json)
        }
        Commands::PruneRadius {
            q_max,
            q_volume,
            n_points,
        } => {
            if !(q_max > 0.0 && q_volume > 0.0 && n_points > 0.0) {
                bail!("q_max, q_volume and n_points must all be positive");
            }
            let radius = prune_radius(n_points, q_max, q_volume);
            if radius >= q_max {
                warn!("No interior prune radius; all q-points would be kept");
            }
            println!("{}", radius);
            Ok(())
        }
    }
}

fn parse_cell(box_length: Option<f64>, cell: Option<Vec<f64>>) -> anyhow::Result<Matrix3<f64>> {
    match (box_length, cell) {
        (Some(length), None) => Ok(Matrix3::from_diagonal_element(length)),
        (None, Some(values)) => Ok(Matrix3::from_row_slice(&values)),
        (None, None) => bail!("either --box-length or --cell is required"),
        (Some(_), Some(_)) => bail!("--box-length and --cell are mutually exclusive"),
    }
}

fn generate(cell: &Matrix3<f64>, config: QPointConfig, json: bool) -> anyhow::Result<()> {
    let sampler = QPointSampler::new(cell, config).context("invalid sampling input")?;
    let set = sampler.sample().context("q-point sampling failed")?;
    info!(
        "Generated {} q-points ({} inside |q| <= {})",
        set.len(),
        set.truncated_count,
        config.q_max
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
    } else {
        for point in &set.points {
            println!(
                "{:>14.8} {:>14.8} {:>14.8} {:>14.8}",
                point.vector.x, point.vector.y, point.vector.z, point.distance
            );
        }
    }
    Ok(())
}
