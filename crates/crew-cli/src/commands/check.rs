//! Check command implementation

use std::path::Path;

use colored::Colorize;
use crew_core::Workspace;
use crew_tools::ToolRegistry;

use crate::error::{CliError, Result};

/// Run the check command
///
/// Reports every tool with empty mandatory parameters and every agent with
/// dangling tool ids. With `strict`, malformed list/map parameters and
/// dangling ids also count as problems. Fails if any problem is found.
pub fn run_check(root: &Path, strict: bool) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let workspace = Workspace::open(root, &registry)?;
    let mut problems = 0usize;

    println!("{}", "Tools".bold());
    for status in workspace.tools.check(&registry)? {
        let mut issues: Vec<String> = status
            .missing
            .iter()
            .map(|name| format!("missing mandatory parameter '{name}'"))
            .collect();

        if strict {
            if let Some(d) = workspace.tools.get(&status.id) {
                issues.extend(
                    d.encoding_errors()
                        .into_iter()
                        .map(|(name, e)| format!("{name}: {e}")),
                );
            }
        }

        if issues.is_empty() {
            println!("  {} {}", "OK".green().bold(), status.label);
        } else {
            problems += issues.len();
            println!("  {} {}", "FAIL".red().bold(), status.label);
            for issue in issues {
                println!("       {issue}");
            }
        }
    }

    println!("{}", "Agents".bold());
    for agent in workspace.agents.iter() {
        let dangling = agent.dangling_tool_ids(&workspace.tools);
        if dangling.is_empty() {
            println!("  {} {} ({})", "OK".green().bold(), agent.role(), agent.id());
            continue;
        }
        let tag = if strict {
            problems += dangling.len();
            "FAIL".red().bold()
        } else {
            "WARN".yellow().bold()
        };
        println!("  {} {} ({})", tag, agent.role(), agent.id());
        println!("       dangling tool id(s): {}", dangling.join(", "));
    }

    if problems > 0 {
        return Err(CliError::user(format!("{problems} problem(s) found")));
    }
    println!();
    println!("{} Workspace is valid.", "OK".green().bold());
    Ok(())
}
