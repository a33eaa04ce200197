use anyhow::{Context, Result};
use clap::Parser;
use robot_world_core::mission::{RunResult, load_session_from_string};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Session script to run; reads standard input when omitted
    #[arg(short, long, value_name = "SESSION_FILE")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let script = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            buffer
        }
    };

    // A grid or protocol failure aborts the whole session.
    let (mut mission, plans) = load_session_from_string(&script)?;

    for plan in &plans {
        match mission.run_plan(plan) {
            Ok(result) => println!("{}", format_result(&result)),
            // A failed robot ends only its own run; later robots still go.
            Err(error) => eprintln!(
                "Robot at ({}, {}) skipped: {}",
                plan.start.x, plan.start.y, error
            ),
        }
    }

    Ok(())
}

/// Formats one result line: `X Y D`, with a ` LOST` suffix for lost robots.
fn format_result(result: &RunResult) -> String {
    format!(
        "{} {} {}{}",
        result.position.x,
        result.position.y,
        result.facing.as_char(),
        if result.lost { " LOST" } else { "" }
    )
}
