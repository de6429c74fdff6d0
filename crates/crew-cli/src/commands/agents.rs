//! Agent commands: add, list, remove

use std::path::Path;

use colored::Colorize;
use crew_core::Workspace;
use crew_meta::AgentRecord;
use crew_tools::ToolRegistry;

use crate::error::{CliError, Result};

/// Run the add-agent command
pub fn run_add_agent(
    root: &Path,
    role: Option<&str>,
    goal: Option<&str>,
    backstory: Option<&str>,
    model: Option<&str>,
    tools: &[String],
) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let mut workspace = Workspace::open(root, &registry)?;

    let mut record = AgentRecord::new();
    if let Some(role) = role {
        record = record.with_role(role);
    }
    if let Some(goal) = goal {
        record = record.with_goal(goal);
    }
    if let Some(backstory) = backstory {
        record = record.with_backstory(backstory);
    }
    if let Some(model) = model {
        record = record.with_llm_provider_model(model);
        if record.llm_provider_model != model {
            tracing::warn!(
                requested = model,
                using = %record.llm_provider_model,
                "unknown llm provider/model"
            );
        }
    }

    let id = workspace.agents.add(record)?;
    for tool_id in tools {
        workspace.agents.assign_tool(&id, tool_id, &workspace.tools)?;
    }
    workspace.save()?;

    println!("{} Agent {} added.", "OK".green().bold(), id);
    Ok(())
}

/// Run the list-agents command
pub fn run_list_agents(root: &Path) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let workspace = Workspace::open(root, &registry)?;

    println!("{}", "Agents".bold());
    println!();
    if workspace.agents.is_empty() {
        println!("No agents configured. Use {} to add one.", "crew add-agent".cyan());
        return Ok(());
    }

    for agent in workspace.agents.iter() {
        let valid = agent.is_valid(&registry, &workspace.tools)?;
        let status = if valid { "valid".green() } else { "invalid".red() };
        println!("  {} [{}]", agent.role().bold(), status);
        println!("    id:   {}", agent.id().dimmed());
        println!("    goal: {}", agent.goal());
        println!("    llm:  {}", agent.llm_provider_model());
        for d in agent.resolve_tools(&workspace.tools) {
            println!("    tool: {}", d.label());
        }
        for id in agent.dangling_tool_ids(&workspace.tools) {
            println!("    tool: {} {}", id, "(removed)".yellow());
        }
    }
    Ok(())
}

/// Run the remove-agent command
pub fn run_remove_agent(root: &Path, id: &str) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let mut workspace = Workspace::open(root, &registry)?;

    workspace
        .agents
        .remove(id)
        .ok_or_else(|| CliError::user(format!("Agent not found: {id}")))?;
    workspace.save()?;

    println!("{} Agent {} removed.", "OK".green().bold(), id);
    Ok(())
}
