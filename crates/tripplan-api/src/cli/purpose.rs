//! `tripplan purpose` -- show the purpose inferred from an objective.

use anyhow::Result;
use console::style;

use tripplan_core::{infer_purpose, Objective};

pub fn purpose(objective: Option<&str>, json: bool) -> Result<()> {
    let phrase = infer_purpose(objective);
    let known = objective.is_some_and(|tag| tag.parse::<Objective>().is_ok());

    if json {
        let out = serde_json::json!({
            "objective": objective,
            "purpose": phrase,
            "known_objective": known,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match objective {
        Some(tag) if known => println!("  {} -> {}", style(tag).cyan(), style(phrase).bold()),
        Some(tag) => println!(
            "  {} -> {} {}",
            style(tag).cyan(),
            style(phrase).bold(),
            style("(unknown objective, default purpose)").dim()
        ),
        None => println!(
            "  {} {}",
            style(phrase).bold(),
            style("(no objective, default purpose)").dim()
        ),
    }
    Ok(())
}
