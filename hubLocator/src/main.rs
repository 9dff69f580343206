use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;

use windhub::analysis::cost::farm_costs;
use windhub::analysis::reporting::{print_placement_summary, PlacementReport};
use windhub::cli::cli::Args;
use windhub::config::locator_config::LocatorConfig;
use windhub::core::placement::locate_control_center;
use windhub::data::farms_loader;
use windhub::models::wind_farm::WindFarm;
use windhub::utils::csv_export::write_cost_breakdown;
use windhub::utils::logging;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = LocatorConfig::from(&args);

    logging::init_logging(config.enable_timing, config.debug_logging);

    // Timings recorded before a failure are still worth reporting
    let result = run(&config);
    logging::print_timing_report();
    result
}

fn load(config: &LocatorConfig) -> Result<Vec<WindFarm>> {
    match &config.input_path {
        Some(path) => farms_loader::load_farms_from_path(path, config.input_format)
            .with_context(|| format!("Failed to load wind farms from {}", path.display())),
        None => farms_loader::load_farms(io::stdin().lock(), config.input_format)
            .context("Failed to load wind farms from stdin"),
    }
}

fn run(config: &LocatorConfig) -> Result<()> {
    let farms = load(config)?;
    info!("Loaded {} wind farms ({} input)", farms.len(), config.input_format);

    let placement = locate_control_center(&farms)
        .ok_or_else(|| anyhow!("No wind farms to place a control center for"))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", placement.total_cost).context("Failed to write result")?;
    stdout.flush().context("Failed to write result")?;

    if config.is_plain_run() {
        return Ok(());
    }

    if let Some(path) = &config.breakdown_path {
        write_cost_breakdown(path, &farm_costs(&farms, &placement.center))
            .with_context(|| format!("Failed to write cost breakdown to {}", path.display()))?;
        info!("Cost breakdown written to {}", path.display());
    }

    let report = PlacementReport::new(&farms, &placement);
    if let Some(path) = &config.report_path {
        report.save_to_file(path)
            .with_context(|| format!("Failed to write placement report to {}", path.display()))?;
        info!("Placement report written to {}", path.display());
    }

    if config.print_summary {
        print_placement_summary(&report);
    }

    Ok(())
}
