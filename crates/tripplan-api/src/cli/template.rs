//! `tripplan template` -- show the effective sample request template.

use anyhow::Result;
use console::style;

use tripplan_infra::template::TemplateSource;

use crate::state::AppState;

pub fn show_template(state: &AppState, json: bool) -> Result<()> {
    let template = &state.template;

    if json {
        println!("{}", serde_json::to_string_pretty(template)?);
        return Ok(());
    }

    println!();
    println!("  {} Sample request template", style("🧳").bold());
    println!("  {}", style(source_line(&state.template_source)).dim());
    println!("  {}", style(format!("data dir: {}", state.data_dir.display())).dim());
    println!();
    println!("  {:<14} {}", style("origin").dim(), template.origin);
    println!(
        "  {:<14} {}",
        style("destinations").dim(),
        template.destinations.join(", ")
    );
    println!(
        "  {:<14} {} -> {}",
        style("dates").dim(),
        template.dates.start,
        template.dates.end
    );
    println!(
        "  {:<14} {} {}",
        style("budget").dim(),
        template.budget_total,
        template.currency
    );
    println!(
        "  {:<14} {} adults, {} children, {} seniors",
        style("party").dim(),
        template.party.adults,
        template.party.children,
        template.party.seniors
    );
    println!("  {:<14} {}", style("purpose").dim(), template.purpose);
    println!("  {:<14} {}", style("objective").dim(), template.prefs.objective);
    if !template.extra.is_empty() {
        let keys: Vec<&str> = template.extra.keys().map(String::as_str).collect();
        println!("  {:<14} {}", style("extra fields").dim(), keys.join(", "));
    }
    println!();
    Ok(())
}

fn source_line(source: &TemplateSource) -> String {
    format!("source: {source}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn source_line_names_the_file_actually_used() {
        let explicit = TemplateSource::Explicit(PathBuf::from("/tmp/trip.toml"));
        assert_eq!(source_line(&explicit), "source: /tmp/trip.toml (--template)");
        assert_eq!(source_line(&TemplateSource::Builtin), "source: built-in");
    }
}
