//! Code, repository and interpreter tools

use crew_meta::{ParamKind, ParamSpec, ToolSchema};

use super::{bare, targeted};
use crate::args::ToolArgs;
use crate::factory::FactoryResult;
use crate::handle::{Setting, SimulatedTool};
use crate::registry::{ToolCategory, ToolRegistration};

/// Content types GitHub search understands.
pub const GITHUB_CONTENT_TYPES: [&str; 4] = ["code", "repo", "pr", "issue"];

const GITHUB_DESCRIPTION: &str = "A tool that can be used to semantic search a query from a \
    Github repository's content. Valid content_types: code,repo,pr,issue (comma separated)";
const CUSTOM_INTERPRETER_DESCRIPTION: &str = "This tool is used to give the Agent the ability to \
    run code (Python3) from the code generated by the Agent itself. The code is executed in a \
    sandboxed environment, so it is safe to run any code. Workspace folder is shared. Docker required.";

pub fn code_docs_search_registration() -> ToolRegistration {
    targeted(
        "CodeDocsSearchTool",
        "Code Docs Search",
        ToolCategory::Code,
        "A tool that can be used to search through code documentation.",
        "code_docs",
        ParamSpec::optional(),
    )
}

pub fn github_search_registration() -> ToolRegistration {
    let schema = ToolSchema::new()
        .param("github_repo", ParamSpec::optional())
        .param("gh_token", ParamSpec::mandatory().with_kind(ParamKind::Secret))
        .param("content_types", ParamSpec::optional().with_kind(ParamKind::List));

    ToolRegistration::new(
        "GithubSearchTool",
        "GitHub Search",
        ToolCategory::Code,
        schema,
        |args: &ToolArgs| -> FactoryResult {
            let content_types = args.list("content_types").and_then(|requested| {
                let known: Vec<String> = requested
                    .iter()
                    .filter(|t| GITHUB_CONTENT_TYPES.contains(&t.as_str()))
                    .cloned()
                    .collect();
                if known.len() < requested.len() {
                    tracing::warn!(?requested, ?known, "dropping unknown content_types");
                }
                (!known.is_empty()).then_some(known)
            });

            Ok(
                SimulatedTool::new("GithubSearchTool", GITHUB_DESCRIPTION, ToolCategory::Code)
                    .with_target(args.get("github_repo"))
                    .with_setting("content_types", content_types.map(Setting::List))
                    .boxed(),
            )
        },
    )
    .with_description(GITHUB_DESCRIPTION)
}

pub fn code_interpreter_registration() -> ToolRegistration {
    bare(
        "CodeInterpreterTool",
        "Code Interpreter",
        ToolCategory::Code,
        "This tool is used to give the Agent the ability to run code (Python3) from the code \
         generated by the Agent itself. The code is executed in a sandboxed environment, so it \
         is safe to run any code. Docker required.",
    )
}

pub fn custom_code_interpreter_registration() -> ToolRegistration {
    targeted(
        "CustomCodeInterpreterTool",
        "Custom Code Interpreter",
        ToolCategory::Code,
        CUSTOM_INTERPRETER_DESCRIPTION,
        "workspace_dir",
        ParamSpec::optional().with_default("workspace"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_args(content_types: &str) -> ToolArgs {
        ToolArgs::new()
            .with("github_repo", "octo/hello")
            .with("gh_token", "ghp")
            .with("content_types", content_types)
    }

    #[test]
    fn test_github_filters_content_types() {
        let handle = github_search_registration()
            .factory
            .build(&github_args("code, wiki ,pr"))
            .unwrap();
        assert_eq!(
            handle.settings()["content_types"],
            Setting::List(vec!["code".into(), "pr".into()])
        );
        assert_eq!(handle.target(), Some("octo/hello"));
    }

    #[test]
    fn test_github_only_unknown_types_reads_as_absent() {
        let handle = github_search_registration()
            .factory
            .build(&github_args("wiki,gist"))
            .unwrap();
        assert!(!handle.settings().contains_key("content_types"));
    }

    #[test]
    fn test_github_absent_content_types() {
        let handle = github_search_registration()
            .factory
            .build(&github_args(""))
            .unwrap();
        assert!(handle.settings().is_empty());
    }
}
