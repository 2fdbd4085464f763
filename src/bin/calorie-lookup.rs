// ABOUTME: Command-line entry point that estimates calories for a dish
// ABOUTME: Loads configuration from the environment and prints text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

//! # Calorie Lookup Binary
//!
//! ```text
//! USDA_API_KEY=... calorie-lookup "chicken breast" --servings 2 --json
//! ```

use std::process::ExitCode;

use calorie_lookup::config::LookupConfig;
use calorie_lookup::errors::{AppError, AppResult, ErrorResponse};
use calorie_lookup::logging::LoggingConfig;
use calorie_lookup::{CalorieEstimate, CalorieService};
use clap::Parser;
use tracing::error;

#[derive(Parser)]
#[command(name = "calorie-lookup")]
#[command(about = "Estimate calories for a dish using USDA FoodData Central")]
struct Args {
    /// Dish name to look up
    dish: String,

    /// Number of servings
    #[arg(short, long, default_value_t = 1)]
    servings: u32,

    /// Print the estimate as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".to_owned();
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(&args).await {
        Ok(estimate) => match render(&estimate, args.json) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(e) => report(e),
        },
        Err(e) => report(e),
    }
}

async fn run(args: &Args) -> AppResult<CalorieEstimate> {
    let config = LookupConfig::from_env()?;
    let service = CalorieService::from_config(&config)?;
    Ok(service.estimate(&args.dish, args.servings).await?)
}

fn render(estimate: &CalorieEstimate, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(estimate)?);
    }
    Ok(format!(
        "{dish}: {per} kcal per serving x {servings} = {total} kcal\nmatched: {matched} ({source})",
        dish = estimate.dish_name,
        per = estimate.calories_per_serving,
        servings = estimate.servings,
        total = estimate.total_calories,
        matched = estimate.matched_description,
        source = estimate.source,
    ))
}

fn report(e: AppError) -> ExitCode {
    error!(code = ?e.code, "{}", e.message);
    let body = serde_json::to_string_pretty(&ErrorResponse::from(e))
        .unwrap_or_else(|_| "{\"error\":{\"code\":\"INTERNAL_ERROR\"}}".to_owned());
    eprintln!("{body}");
    ExitCode::FAILURE
}
