use std::io::{self, BufRead, Write};

use colored::Colorize;

use dd_creation::session::CHECK_DIE;
use dd_creation::{AutoConfirm, CheckReport, CreationConfig, CreationSession, RollGate};

use crate::gate::{PromptGate, TranscriptGate};

pub fn run(
    config: &CreationConfig,
    name: Option<String>,
    job: Option<String>,
    yes: bool,
    json: bool,
) -> Result<(), String> {
    let name = match name {
        Some(name) => name,
        None => prompt("Enter character name: ")?,
    };
    let job = match job {
        Some(job) => job,
        None => prompt("Enter character job: ")?,
    };

    let scenario = super::load_scenario(&config.data_path)?;
    let mut session = CreationSession::new(scenario, name, job, config);
    let confirm: Box<dyn RollGate> = if yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(PromptGate)
    };
    let mut gate = TranscriptGate::new(confirm, config.roll_delay);

    println!("Initial attributes: {}", session.attributes());
    println!();

    session
        .run(&mut gate, |turn, scores| {
            print_report(&turn.report);
            println!("Updated attributes: {}", super::colorize(scores));
            println!();
        })
        .map_err(|e| e.to_string())?;

    let hero = session.finish();
    if json {
        let out = serde_json::to_string_pretty(&hero).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("{}", "Final character:".bold());
        println!("Name: {}", hero.name);
        println!("Job: {}", hero.job);
        println!("Attributes: {}", super::colorize(&hero.attributes));
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String, String> {
    print!("{label}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    Ok(line.trim().to_string())
}

fn print_report(report: &CheckReport) {
    println!(
        "Rolled: {CHECK_DIE} {} + {} = {} vs DC {}",
        report.die, report.modifier, report.total, report.dc
    );
    if report.passed() {
        println!("{}", "Test passed! Applying increases.".green());
        for (attr, amount) in &report.applied {
            println!("- Increased {attr} by {amount}");
        }
    } else {
        println!("{}", "Test failed! Applying fail effects.".red());
        for (attr, amount) in &report.applied {
            println!("- Decreased {attr} by {amount}");
        }
    }
}
