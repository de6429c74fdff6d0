//! Crew Studio CLI
//!
//! The command-line interface for configuring tools and agents.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    if let Err(e) = crew_tools::logging::init_with_default(level) {
        eprintln!("{} logging disabled: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(cmd) => execute_command(root, cmd),
        None => {
            println!("{} Crew Studio CLI", "crew".green().bold());
            println!();
            println!("Run {} for available commands.", "crew --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(root: PathBuf, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init => commands::run_init(&root),
        Commands::ListTypes { category } => commands::run_list_types(category.as_deref()),
        Commands::Schema { type_name } => commands::run_schema(&type_name),
        Commands::AddTool { type_name, params } => {
            commands::run_add_tool(&root, &type_name, &params)
        }
        Commands::SetParam { id, assignments } => {
            commands::run_set_param(&root, &id, &assignments)
        }
        Commands::RemoveTool { id, prune } => commands::run_remove_tool(&root, &id, prune),
        Commands::ListTools { json } => commands::run_list_tools(&root, json),
        Commands::Check { strict } => commands::run_check(&root, strict),
        Commands::RunTool { id, query } => commands::run_run_tool(&root, &id, &query),
        Commands::AddAgent {
            role,
            goal,
            backstory,
            model,
            tools,
        } => commands::run_add_agent(
            &root,
            role.as_deref(),
            goal.as_deref(),
            backstory.as_deref(),
            model.as_deref(),
            &tools,
        ),
        Commands::ListAgents => commands::run_list_agents(&root),
        Commands::RemoveAgent { id } => commands::run_remove_agent(&root, &id),
        Commands::Research {
            topic,
            agent,
            max_sources,
            expand,
        } => commands::run_research(&root, &topic, agent.as_deref(), max_sources, expand),
    }
}
