use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let scenario = super::load_scenario(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Year", "Question", "Answers", "Tests"]);

    for question in &scenario.questions {
        let tests: Vec<String> = question
            .answers
            .iter()
            .map(|a| format!("{} dc{}", a.test, a.dc))
            .collect();
        table.add_row(vec![
            question.year.to_string(),
            question.question.clone(),
            question.answers.len().to_string(),
            tests.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Starting attributes: {}", scenario.starting_attributes());

    scenario.validate().map_err(|e| e.to_string())?;

    println!(
        "  All checks passed for '{}': {} questions",
        path.display(),
        scenario.questions.len()
    );
    Ok(())
}
