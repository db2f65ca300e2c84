//==============================================================================
// Course self-check demo: run every memory and conversion check
//==============================================================================

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use embedded_exercises::selfcheck::{run_all, Summary};
use embedded_exercises::{logging, ExerciseConfig};

fn main() -> anyhow::Result<ExitCode> {
    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = ExerciseConfig::load_or_default(config_path.as_deref())
        .with_context(|| format!("loading configuration from {:?}", config_path))?;
    logging::init(&config.log_filter);

    println!("{}", "Course 1 self-check".bold());
    println!("===================\n");

    let outcomes = run_all().context("running self-check suite")?;
    for outcome in &outcomes {
        let line = outcome.to_string();
        if outcome.passed {
            println!("  {}", line.as_str().green());
        } else {
            println!("  {}", line.as_str().red());
        }
    }

    let summary = Summary::from_outcomes(&outcomes);
    tracing::info!(passed = summary.passed, total = summary.total, "self-check finished");
    println!("\n{} of {} checks passed", summary.passed, summary.total);

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
