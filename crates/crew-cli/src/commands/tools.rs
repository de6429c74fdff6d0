//! Configured tool commands: add, set-param, remove, list, run

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use crew_core::Workspace;
use crew_tools::ToolRegistry;
use serde::Serialize;

use super::display_value;
use crate::error::{CliError, Result};

/// Run the add-tool command
pub fn run_add_tool(root: &Path, type_name: &str, params: &[(String, String)]) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let mut workspace = Workspace::open(root, &registry)?;

    let id = workspace
        .tools
        .add(&registry, type_name, params.iter().cloned())?;
    workspace.save()?;

    println!("{} Tool {} added with id {}", "OK".green().bold(), type_name.cyan(), id);
    report_missing(&registry, &workspace, &id)?;
    Ok(())
}

/// Run the set-param command
pub fn run_set_param(root: &Path, id: &str, assignments: &[(String, String)]) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let mut workspace = Workspace::open(root, &registry)?;

    let descriptor = workspace
        .tools
        .update_parameters(id, assignments.iter().cloned())?;
    for (name, _) in assignments {
        if !descriptor.schema().contains(name) {
            eprintln!(
                "{} {} is not a parameter of {}; it is stored but unused",
                "warning:".yellow().bold(),
                name,
                descriptor.type_name()
            );
        }
    }
    workspace.save()?;

    println!("{} Updated {}", "OK".green().bold(), id);
    report_missing(&registry, &workspace, id)?;
    Ok(())
}

/// Run the remove-tool command
pub fn run_remove_tool(root: &Path, id: &str, prune: bool) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let mut workspace = Workspace::open(root, &registry)?;

    let holders: Vec<String> = workspace
        .agents
        .iter()
        .filter(|a| a.tool_ids().iter().any(|t| t == id))
        .map(|a| a.id().to_string())
        .collect();

    workspace.remove_tool(id, prune)?;
    workspace.save()?;

    println!("{} Tool {} removed.", "OK".green().bold(), id);
    if !holders.is_empty() && !prune {
        println!(
            "{} Still referenced by {} agent(s): {}. Use {} to drop the references.",
            "WARN".yellow().bold(),
            holders.len(),
            holders.join(", "),
            "--prune".cyan()
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct ToolListing<'a> {
    id: &'a str,
    type_name: &'a str,
    valid: bool,
    parameters: BTreeMap<&'a str, String>,
}

/// Run the list-tools command
pub fn run_list_tools(root: &Path, json: bool) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let workspace = Workspace::open(root, &registry)?;

    if json {
        let listings = workspace
            .tools
            .iter()
            .map(|d| -> Result<ToolListing> {
                Ok(ToolListing {
                    id: d.id(),
                    type_name: d.type_name(),
                    valid: registry.is_valid(d)?,
                    parameters: d
                        .parameters()
                        .iter()
                        .map(|(k, v)| (k.as_str(), display_value(d, k, v)))
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    println!("{}", "Configured Tools".bold());
    println!();
    if workspace.tools.is_empty() {
        println!("No tools configured. Use {} to add one.", "crew add-tool <type>".cyan());
        return Ok(());
    }

    for d in workspace.tools.iter() {
        let status = if registry.is_valid(d)? {
            "valid".green()
        } else {
            "invalid".red()
        };
        println!("  {} [{}]", d.label().bold(), status);
        println!("    id: {}", d.id().dimmed());
        for (name, value) in d.parameters() {
            println!("    {} = {}", name, display_value(d, name, value));
        }
    }
    println!();
    println!("{} {} tool(s)", "Total:".dimmed(), workspace.tools.len());
    Ok(())
}

/// Run the run-tool command
pub fn run_run_tool(root: &Path, id: &str, query: &str) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let workspace = Workspace::open(root, &registry)?;

    let descriptor = workspace
        .tools
        .get(id)
        .ok_or_else(|| CliError::user(format!("Tool not found: {id}")))?;
    let handle = registry.instantiate(descriptor, &workspace.runtime())?;
    println!("{}", handle.run(query)?);
    Ok(())
}

fn report_missing(registry: &ToolRegistry, workspace: &Workspace, id: &str) -> Result<()> {
    if let Some(d) = workspace.tools.get(id) {
        let missing = registry.missing_parameters(d)?;
        if !missing.is_empty() {
            println!(
                "{} Missing mandatory parameter(s): {}",
                "WARN".yellow().bold(),
                missing.join(", ")
            );
        }
    }
    Ok(())
}
