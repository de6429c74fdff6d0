//! End-to-end flow across the workspace crates
//!
//! workspace init -> tool configuration -> agent assignment -> save/reopen
//! -> instantiation with runtime overrides -> research.

use crew_core::{ResearchOutcome, Researcher, Workspace};
use crew_fs::NormalizedPath;
use crew_meta::{AgentRecord, load_config, save_config};
use crew_test_utils::TestWorkspace;
use crew_tools::{RuntimeConfig, ToolRegistry};
use pretty_assertions::assert_eq;

#[test]
fn full_configuration_flow() {
    let fixture = TestWorkspace::new();
    let registry = ToolRegistry::with_builtins();

    let mut ws = Workspace::init(fixture.root()).unwrap();
    let serper = ws
        .tools
        .add(&registry, "SerperDevTool", Vec::<(String, String)>::new())
        .unwrap();
    let site = ws
        .tools
        .add(&registry, "WebsiteSearchTool", [("website", "https://doc.rust-lang.org")])
        .unwrap();
    let video = ws
        .tools
        .add(&registry, "YoutubeChannelSearchTool", [("youtube_channel_handle", "@rustlang")])
        .unwrap();
    let agent_id = ws
        .agents
        .add(
            AgentRecord::new()
                .with_role("Rust Researcher")
                .with_tool(&serper)
                .with_tool(&site)
                .with_tool(&video),
        )
        .unwrap();

    ws.config_mut()
        .runtime
        .overrides
        .insert("SERPER_API_KEY".to_string(), "configured-key".to_string());
    ws.save().unwrap();

    let reopened = Workspace::open(fixture.root(), &registry).unwrap();
    let agent = reopened.agents.get(&agent_id).unwrap();
    assert!(agent.is_valid(&registry, &reopened.tools).unwrap());

    let runtime = reopened.runtime();
    assert_eq!(runtime.get("SERPER_API_KEY"), Some("configured-key"));

    let handles = agent
        .instantiate_tools(&registry, &reopened.tools, &runtime)
        .unwrap();
    assert_eq!(handles.len(), 3);

    let researcher = Researcher::new(handles);
    let digest = researcher.preliminary("lifetimes", 15).unwrap();
    assert_eq!(digest.total_sources(), 3);

    match researcher.research("lifetimes").unwrap() {
        ResearchOutcome::Completed(report) => {
            assert_eq!(report.summary.lines().count(), 3);
            assert!(report.summary.contains("@rustlang"));
        }
        ResearchOutcome::Failed(message) => panic!("research failed: {message}"),
    }
}

#[test]
fn credential_missing_everywhere_fails_construction_only() {
    let fixture = TestWorkspace::new();
    let registry = ToolRegistry::with_builtins();
    let mut ws = Workspace::init(fixture.root()).unwrap();
    let exa = ws
        .tools
        .add(&registry, "EXASearchTool", Vec::<(String, String)>::new())
        .unwrap();

    let d = ws.tools.get(&exa).unwrap();
    assert!(registry.is_valid(d).unwrap());
    let err = registry.instantiate(d, &RuntimeConfig::new()).unwrap_err();
    assert!(matches!(err, crew_tools::Error::ToolConstruction { .. }));
}

#[test]
fn config_edits_survive_round_trip() {
    let fixture = TestWorkspace::new();
    Workspace::init(fixture.root()).unwrap();

    let root = NormalizedPath::new(fixture.root());
    let mut config = load_config(&root).unwrap();
    config
        .runtime
        .credential_env
        .insert("CREW_TEST_TOKEN".to_string(), "gh_token".to_string());
    save_config(&root, &config).unwrap();

    let reopened = Workspace::open(fixture.root(), &ToolRegistry::with_builtins()).unwrap();
    assert_eq!(
        reopened.config().runtime.credential_env["CREW_TEST_TOKEN"],
        "gh_token"
    );
}

#[test]
fn unknown_types_are_dropped_on_next_save() {
    let fixture = TestWorkspace::new();
    fixture.init_crew();
    fixture.seed_tool("keep", "CSVSearchTool", &[("csv", "data.csv")]);
    fixture.seed_tool("drop", "LegacyTool", &[("x", "1")]);

    let ws = Workspace::open(fixture.root(), &ToolRegistry::with_builtins()).unwrap();
    ws.save().unwrap();

    let tools = fixture.read_json(".crew/tools.json");
    let ids: Vec<&str> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["keep"]);
}

#[test]
fn storage_format_follows_configured_file_names() {
    let dir = tempfile::TempDir::new().unwrap();
    let registry = ToolRegistry::with_builtins();

    let mut ws = Workspace::init(dir.path()).unwrap();
    ws.config_mut().storage.tools_file = "tools.yaml".to_string();
    ws.tools
        .add(&registry, "PDFSearchTool", [("pdf", "paper.pdf")])
        .unwrap();
    ws.save().unwrap();

    let yaml = std::fs::read_to_string(dir.path().join(".crew/tools.yaml")).unwrap();
    assert!(yaml.contains("type_name: PDFSearchTool"));

    let reopened = Workspace::open(dir.path(), &registry).unwrap();
    assert_eq!(reopened.tools.len(), 1);
    assert_eq!(reopened.tools.iter().next().unwrap().label(), "PDFSearchTool (paper.pdf)");
}
