//! Registry scenarios and properties over the full built-in set

use std::sync::Arc;
use std::thread;

use crew_core::{ToolCollection, Workspace};
use crew_meta::AgentRecord;
use crew_test_utils::TestWorkspace;
use crew_tools::{Error, RuntimeConfig, ToolRegistry};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn website_search_scenario() {
    let registry = ToolRegistry::with_builtins();
    let mut tools = ToolCollection::new();
    let id = tools
        .add(&registry, "WebsiteSearchTool", Vec::<(String, String)>::new())
        .unwrap();

    let d = tools.get(&id).unwrap();
    assert!(registry.is_valid(d).unwrap());
    let handle = registry.instantiate(d, &RuntimeConfig::new()).unwrap();
    assert_eq!(handle.target(), None);
    assert_eq!(
        handle.run("borrow checker").unwrap(),
        "WebsiteSearchTool: results for \"borrow checker\"."
    );
}

#[test]
fn pg_search_scenario() {
    let registry = ToolRegistry::with_builtins();
    let mut tools = ToolCollection::new();
    let id = tools
        .add(&registry, "PGSearchTool", Vec::<(String, String)>::new())
        .unwrap();

    let d = tools.get(&id).unwrap();
    assert!(!registry.is_valid(d).unwrap());
    assert!(matches!(
        registry.instantiate(d, &RuntimeConfig::new()),
        Err(Error::MissingMandatoryParameter { .. })
    ));

    tools
        .update_parameters(&id, [("db_uri", "postgresql://localhost/research")])
        .unwrap();
    let d = tools.get(&id).unwrap();
    assert!(registry.instantiate(d, &RuntimeConfig::new()).is_ok());
}

#[rstest]
#[case("DirectoryReadTool", "directory_contents")]
#[case("SeleniumScrapingTool", "website_url")]
#[case("GithubSearchTool", "gh_token")]
#[case("CustomApiTool", "base_url")]
#[case("PGSearchTool", "db_uri")]
fn mandatory_parameters(#[case] type_name: &str, #[case] param: &str) {
    let registry = ToolRegistry::with_builtins();
    assert_eq!(
        registry
            .get_schema(type_name)
            .unwrap()
            .mandatory_names()
            .collect::<Vec<_>>(),
        vec![param]
    );
}

#[test]
fn every_builtin_instantiates_once_mandatory_filled() {
    let registry = ToolRegistry::with_builtins();
    let runtime = RuntimeConfig::new()
        .with_override("SERPER_API_KEY", "k")
        .with_override("EXA_API_KEY", "k");

    for type_name in registry.list() {
        let schema = registry.get_schema(type_name).unwrap();
        let mut d = registry
            .create_descriptor(type_name, Vec::<(String, String)>::new())
            .unwrap();
        for name in schema.mandatory_names() {
            let value = match name {
                "db_uri" => "postgres://localhost/db",
                "base_url" => "https://api.example.com",
                _ => "value",
            };
            d.set_parameter(name, value);
        }
        let handle = registry
            .instantiate(&d, &runtime)
            .unwrap_or_else(|e| panic!("{type_name}: {e}"));
        assert_eq!(handle.name(), type_name);
        assert!(handle.run("query").is_ok());
    }
}

#[test]
fn removing_a_tool_leaves_dangling_reference() {
    let fixture = TestWorkspace::new();
    let registry = ToolRegistry::with_builtins();
    let mut ws = Workspace::init(fixture.root()).unwrap();
    let id = ws
        .tools
        .add(&registry, "TXTSearchTool", [("txt", "notes.txt")])
        .unwrap();
    let agent = ws.agents.add(AgentRecord::new().with_tool(&id)).unwrap();

    ws.remove_tool(&id, false).unwrap();
    ws.save().unwrap();

    let reopened = Workspace::open(fixture.root(), &registry).unwrap();
    let agent = reopened.agents.get(&agent).unwrap();
    assert_eq!(agent.tool_ids(), [id.clone()]);
    assert!(agent.resolve_tools(&reopened.tools).is_empty());
    assert!(agent.is_valid(&registry, &reopened.tools).unwrap());
}

#[test]
fn registry_shared_across_threads() {
    let registry = Arc::new(ToolRegistry::with_builtins());
    let workers: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let d = registry
                    .create_descriptor("FileReadTool", [("file_path", format!("file-{i}.txt"))])
                    .unwrap();
                registry
                    .instantiate(&d, &RuntimeConfig::new())
                    .unwrap()
                    .run("contents")
                    .unwrap()
            })
        })
        .collect();

    for (i, worker) in workers.into_iter().enumerate() {
        let out = worker.join().unwrap();
        assert!(out.ends_with(&format!("from file-{i}.txt.")));
    }
}
