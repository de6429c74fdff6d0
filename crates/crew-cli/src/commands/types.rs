//! Tool type listing and schema display

use colored::Colorize;
use crew_tools::{ToolCategory, ToolRegistry};

use crate::error::Result;

/// Run the list-types command
pub fn run_list_types(category_filter: Option<&str>) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let filter: Option<ToolCategory> = category_filter.map(str::parse).transpose()?;

    println!("{}", "Available Tool Types".bold());
    println!();

    for cat in ToolCategory::ALL {
        if filter.is_some_and(|f| f != cat) {
            continue;
        }

        let types = registry.by_category(cat);
        if types.is_empty() {
            continue;
        }

        println!("{}:", cat.as_str().cyan().bold());
        for type_name in types {
            if let Some(reg) = registry.get(type_name) {
                println!("  {:<30} {}", type_name.green(), reg.display_name);
            }
        }
        println!();
    }

    println!(
        "{} {} tool types available. Use {} to see parameters.",
        "Total:".dimmed(),
        registry.len(),
        "crew schema <type>".cyan()
    );
    Ok(())
}

/// Run the schema command
pub fn run_schema(type_name: &str) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let schema = registry.get_schema(type_name)?;
    let reg = registry
        .get(type_name)
        .ok_or_else(|| crew_tools::Error::unknown_type(type_name))?;

    println!("{} ({})", type_name.green().bold(), reg.category);
    println!("{}", reg.description.dimmed());
    println!();

    if schema.is_empty() {
        println!("No parameters.");
        return Ok(());
    }

    for def in schema.iter() {
        let required = if def.spec.mandatory {
            "mandatory".yellow().to_string()
        } else {
            "optional".dimmed().to_string()
        };
        let default = def
            .spec
            .default
            .as_deref()
            .map(|d| format!(" default={d:?}"))
            .unwrap_or_default();
        println!(
            "  {:<24} {:<7} {}{}",
            def.name.cyan(),
            def.spec.kind.to_string(),
            required,
            default
        );
    }
    Ok(())
}
