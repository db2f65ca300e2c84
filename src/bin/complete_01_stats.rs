//==============================================================================
// Statistics demo: print, sort and summarise the sample data set
//==============================================================================

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;
use embedded_exercises::data::format_radix;
use embedded_exercises::stats::sort_descending;
use embedded_exercises::{logging, ExerciseConfig, Reporter};

fn main() -> anyhow::Result<()> {
    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = ExerciseConfig::load_or_default(config_path.as_deref())
        .with_context(|| format!("loading configuration from {:?}", config_path))?;

    logging::init(&config.log_filter);
    tracing::info!(samples = config.dataset.len(), verbose = config.verbose, "statistics demo");

    let mut data = config.dataset.clone();
    let mut reporter = Reporter::stdout(config.verbose);

    reporter.line(&"Original array:".bold().to_string())?;
    reporter.print_array(&data)?;

    sort_descending(&mut data);
    reporter.line(&format!("\n{}", "Sorted array:".bold()))?;
    reporter.print_array(&data)?;

    if let Some(stats) = reporter.print_statistics(&mut data)? {
        let median = format_radix(i32::from(stats.median), config.base)?;
        let text = String::from_utf8_lossy(&median[..median.len() - 1]).into_owned();
        reporter.line(&format!("Median (base {}): {}", config.base, text.as_str().green()))?;
    }

    Ok(())
}
