//! Research command implementation

use std::path::Path;

use colored::Colorize;
use crew_core::{ResearchOutcome, Researcher, SourceDigest, Workspace};
use crew_tools::{ToolHandle, ToolRegistry};

use crate::error::{CliError, Result};

/// Run the research command
///
/// Uses the given agent's tools, or every valid configured tool when no
/// agent is named.
pub fn run_research(
    root: &Path,
    topic: &str,
    agent: Option<&str>,
    max_sources: usize,
    expand: bool,
) -> Result<()> {
    let registry = ToolRegistry::with_builtins();
    let workspace = Workspace::open(root, &registry)?;
    let runtime = workspace.runtime();

    let handles: Vec<Box<dyn ToolHandle>> = match agent {
        Some(agent_id) => {
            let agent = workspace
                .agents
                .get(agent_id)
                .ok_or_else(|| CliError::user(format!("Agent not found: {agent_id}")))?;
            agent.instantiate_tools(&registry, &workspace.tools, &runtime)?
        }
        None => workspace
            .tools
            .iter()
            .filter_map(|d| match registry.instantiate(d, &runtime) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    eprintln!("{} skipping {}: {}", "warning:".yellow().bold(), d.label(), e);
                    None
                }
            })
            .collect(),
    };

    let researcher = Researcher::new(handles);

    println!("{} {}", "Researching".bold(), topic.cyan());
    println!();

    let mut digest = researcher.preliminary(topic, max_sources)?;
    print_digest("Preliminary sources", &digest);

    if expand {
        let added = researcher.expand(&mut digest, topic, max_sources)?;
        println!("{} {} additional source(s)", "Expanded:".dimmed(), added);
        print_digest("All sources", &digest);
    }

    match researcher.research(topic)? {
        ResearchOutcome::Completed(report) => {
            println!("{}", "Key points".bold());
            println!("{}", report.summary);
            Ok(())
        }
        ResearchOutcome::Failed(message) => Err(CliError::user(message)),
    }
}

fn print_digest(title: &str, digest: &SourceDigest) {
    println!("{} ({} total)", title.bold(), digest.total_sources());
    for (channel, sources) in digest.iter() {
        println!("  {}:", channel.as_str().cyan());
        for source in sources {
            println!("    - {source}");
        }
    }
    println!();
}
