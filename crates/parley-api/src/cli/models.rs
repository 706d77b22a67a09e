//! `parley models`: print the model catalog.

use parley_types::llm::ModelInfo;

/// Print each model with a check mark when its credential is configured.
pub fn print_models(models: &[ModelInfo], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(models)?);
        return Ok(());
    }

    println!();
    for model in models {
        let mark = if model.available {
            console::style("✓").green().to_string()
        } else {
            console::style("✗").red().to_string()
        };
        println!(
            "  {} {} {} {}",
            mark,
            console::style(format!("{:<8}", model.id)).cyan(),
            model.name,
            console::style(format!("({})", model.description)).dim()
        );
    }
    println!();

    if models.iter().all(|m| !m.available) {
        println!(
            "  {}",
            console::style("No API keys found. Set GOOGLE_API_KEY and/or GROQ_API_KEY.").yellow()
        );
        println!();
    }

    Ok(())
}
