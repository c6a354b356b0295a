use clap::{Parser, Subcommand};
use maze_common::util::config::Config;
use maze_common::util::logger;
use maze_router::grid::cost::{NONPREFERRED_COST, PREFERRED_COST, VIA_COST};
use maze_router::grid::SparseGrid;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration without building the job.
    Check,
    /// Build the routing grid for the configured job.
    Prepare,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();
    let config = Config::load(&args.config)?;

    match args.command.unwrap_or(Commands::Prepare) {
        Commands::Check => run_check(&config)?,
        Commands::Prepare => {
            let grid = maze_router::prepare_grid(&config)
                .map_err(|e| anyhow::anyhow!("Failed to prepare grid: {}", e))?;
            log::info!(
                "Grid bounds {} .. {}, track pitch {}",
                grid.ll(),
                grid.ur(),
                grid.track_pitch()
            );
        }
    }

    Ok(())
}

fn run_check(config: &Config) -> anyhow::Result<()> {
    if NONPREFERRED_COST >= 2 * VIA_COST + PREFERRED_COST {
        return Err(anyhow::anyhow!(
            "Non-preferred cost {} does not undercut a via detour ({})",
            NONPREFERRED_COST,
            2 * VIA_COST + PREFERRED_COST
        ));
    }

    let grid = SparseGrid::from_config(&config.grid)?;

    let job = &config.job;
    log::info!(
        "\x1b[32mPASS\x1b[0m: grid {} .. {}, {} blockages, {} sources, {} targets, {} committed routes",
        grid.ll(),
        grid.ur(),
        job.blockages.len(),
        job.sources.len(),
        job.targets.len(),
        job.routes.len()
    );
    Ok(())
}
