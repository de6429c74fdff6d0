//! Workspace persistence against real `.crew/` directories

use crew_core::{Error, Workspace};
use crew_meta::AgentRecord;
use crew_test_utils::TestWorkspace;
use crew_tools::ToolRegistry;
use pretty_assertions::assert_eq;

#[test]
fn save_and_open_round_trip() {
    let fixture = TestWorkspace::new();
    let registry = ToolRegistry::with_builtins();

    let mut ws = Workspace::init(fixture.root()).unwrap();
    let site = ws
        .tools
        .add(&registry, "WebsiteSearchTool", [("website", "https://docs.rs")])
        .unwrap();
    let pg = ws
        .tools
        .add(&registry, "PGSearchTool", [("db_uri", "postgres://localhost/papers")])
        .unwrap();
    let agent_id = ws
        .agents
        .add(AgentRecord::new().with_role("Analyst").with_tool(&site))
        .unwrap();
    ws.agents.assign_tool(&agent_id, &pg, &ws.tools).unwrap();
    ws.save().unwrap();

    let reopened = Workspace::open(fixture.root(), &registry).unwrap();
    assert_eq!(reopened.tools.ids().collect::<Vec<_>>(), vec![site.as_str(), pg.as_str()]);
    assert_eq!(reopened.tools.get(&site), ws.tools.get(&site));
    let agent = reopened.agents.get(&agent_id).unwrap();
    assert_eq!(agent.role(), "Analyst");
    assert_eq!(agent.tool_ids(), [site, pg]);
    assert_eq!(agent.record(), ws.agents.get(&agent_id).unwrap().record());
}

#[test]
fn records_are_plain_json() {
    let fixture = TestWorkspace::new();
    let registry = ToolRegistry::with_builtins();
    let mut ws = Workspace::init(fixture.root()).unwrap();
    ws.tools
        .add(&registry, "CustomFileWriteTool", [("filename", "notes.md")])
        .unwrap();
    ws.save().unwrap();

    let tools = fixture.read_json(".crew/tools.json");
    assert_eq!(tools[0]["type_name"], "CustomFileWriteTool");
    assert_eq!(tools[0]["parameters"]["filename"], "notes.md");
    assert_eq!(tools[0]["parameters"]["base_folder"], "workspace");
    assert!(tools[0].get("schema").is_none());
    fixture.assert_file_contains(".crew/config.toml", "[storage]");
}

#[test]
fn open_seeded_workspace() {
    let fixture = TestWorkspace::new();
    fixture.init_crew();
    fixture.seed_tool("t1", "FileReadTool", &[("file_path", "README.md")]);
    fixture.seed_tool("t2", "HologramTool", &[]);
    fixture.seed_agent("A_1", "Librarian", &["t1", "t2"]);

    let ws = Workspace::open(fixture.root(), &ToolRegistry::with_builtins()).unwrap();
    assert_eq!(ws.tools.len(), 1);
    let agent = ws.agents.get("A_1").unwrap();
    assert_eq!(agent.resolve_tools(&ws.tools).len(), 1);
    assert_eq!(agent.dangling_tool_ids(&ws.tools), vec!["t2"]);
}

#[test]
fn missing_record_files_read_as_empty() {
    let fixture = TestWorkspace::new();
    fixture.init_crew();

    let ws = Workspace::open(fixture.root(), &ToolRegistry::with_builtins()).unwrap();
    assert!(ws.tools.is_empty());
    assert!(ws.agents.is_empty());
}

#[test]
fn duplicate_ids_on_disk_are_rejected() {
    let fixture = TestWorkspace::new();
    fixture.init_crew();
    fixture.seed_tool("t1", "FileReadTool", &[]);
    fixture.seed_tool("t1", "TXTSearchTool", &[]);

    let err = Workspace::open(fixture.root(), &ToolRegistry::with_builtins()).unwrap_err();
    assert!(matches!(err, Error::DuplicateToolId { ref id } if id == "t1"));
}

#[test]
fn corrupt_tools_file_is_an_error() {
    let fixture = TestWorkspace::new();
    fixture.init_crew();
    fixture.write_file(".crew/tools.json", "{ not json");

    assert!(matches!(
        Workspace::open(fixture.root(), &ToolRegistry::with_builtins()),
        Err(Error::Fs(_))
    ));
}

#[test]
fn custom_storage_names_are_honoured() {
    let fixture = TestWorkspace::new();
    fixture.write_file(
        ".crew/config.toml",
        "[storage]\ntools_file = \"my-tools.json\"\nagents_file = \"crew.json\"\n",
    );
    fixture.write_file(
        ".crew/my-tools.json",
        r#"[{"id":"t1","type_name":"CSVSearchTool","parameters":{"csv":"data.csv"}}]"#,
    );

    let mut ws = Workspace::open(fixture.root(), &ToolRegistry::with_builtins()).unwrap();
    assert_eq!(ws.tools.display_label("t1").unwrap(), "CSVSearchTool (data.csv)");

    ws.remove_tool("t1", true).unwrap();
    ws.save().unwrap();
    fixture.assert_file_exists(".crew/crew.json");
    assert_eq!(fixture.read_json(".crew/my-tools.json"), serde_json::json!([]));
}

#[test]
fn remove_tool_keeps_or_prunes_references() {
    let fixture = TestWorkspace::new();
    let registry = ToolRegistry::with_builtins();
    let mut ws = Workspace::init(fixture.root()).unwrap();
    let a = ws.tools.add(&registry, "FileReadTool", Vec::<(String, String)>::new()).unwrap();
    let b = ws.tools.add(&registry, "CSVSearchTool", Vec::<(String, String)>::new()).unwrap();
    let agent = ws
        .agents
        .add(AgentRecord::new().with_tool(&a).with_tool(&b))
        .unwrap();

    ws.remove_tool(&a, false).unwrap();
    assert_eq!(ws.agents.get(&agent).unwrap().tool_ids().len(), 2);

    ws.remove_tool(&b, true).unwrap();
    assert!(ws.agents.get(&agent).unwrap().tool_ids().is_empty());

    assert!(matches!(ws.remove_tool(&a, false), Err(Error::ToolNotFound { .. })));
}
