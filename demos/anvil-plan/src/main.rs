//! Anvil Plan Demo
//!
//! Plans a single request from the command line and prints the sequence:
//!
//! ```text
//! anvil-plan <goal> [end actions...]
//! anvil-plan 57 AnyHit AnyHit AnyHit
//! ```
//!
//! With no arguments the reference request (goal 57, three `AnyHit`) is used.
//! An `anvil.toml` in the working directory overrides bounds and search guards.

use std::process::ExitCode;

use anvilforge::prelude::*;
use anvilforge::{console, parse_sequence};

fn main() -> ExitCode {
    console::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (goal, end_sequence) = match parse_args(&args) {
        Ok(request) => request,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: anvil-plan <goal> [end actions...]");
            return ExitCode::from(2);
        }
    };

    let config = PlannerConfig::load("anvil.toml").unwrap_or_default();
    let planner = match CraftingPlanner::try_new(config) {
        Ok(planner) => planner,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match planner.plan(goal, &end_sequence) {
        Ok(plan) => {
            println!("\n{}", PlanReport::new(&plan));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<(i32, Sequence), String> {
    let Some((goal, rest)) = args.split_first() else {
        return Ok((57, vec![Action::AnyHit; 3]));
    };
    let goal = goal
        .parse()
        .map_err(|_| format!("Invalid goal position: {}", goal))?;
    let end_sequence = parse_sequence(&rest.join(" ")).map_err(|e| e.to_string())?;
    Ok((goal, end_sequence))
}
