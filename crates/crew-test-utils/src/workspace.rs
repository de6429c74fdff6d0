//! [`TestWorkspace`] builder for `.crew/` scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary workspace root with helpers for seeding and asserting on
/// the `.crew/` directory.
///
/// # Example
///
/// ```rust,no_run
/// use crew_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.init_crew();
/// ws.seed_tool("t1", "WebsiteSearchTool", &[("website", "https://docs.rs")]);
/// ws.assert_file_contains(".crew/tools.json", "WebsiteSearchTool");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn crew_dir(&self) -> PathBuf {
        self.root().join(".crew")
    }

    /// Write a minimal `.crew/config.toml` with default storage names.
    pub fn init_crew(&self) {
        self.write_file(
            ".crew/config.toml",
            "[core]\nversion = \"1\"\n\n[storage]\ntools_file = \"tools.json\"\nagents_file = \"agents.json\"\n",
        );
    }

    /// Append a tool record to `.crew/tools.json`.
    pub fn seed_tool(&self, id: &str, type_name: &str, params: &[(&str, &str)]) {
        let parameters: serde_json::Map<String, Value> = params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        self.append_record(
            ".crew/tools.json",
            json!({ "id": id, "type_name": type_name, "parameters": parameters }),
        );
    }

    /// Append an agent record to `.crew/agents.json`. Omitted fields take
    /// their serde defaults when loaded.
    pub fn seed_agent(&self, id: &str, role: &str, tool_ids: &[&str]) {
        self.append_record(
            ".crew/agents.json",
            json!({ "id": id, "role": role, "tool_ids": tool_ids }),
        );
    }

    fn append_record(&self, path: &str, record: Value) {
        let full_path = self.root().join(path);
        let mut records = if full_path.exists() {
            self.read_json(path).as_array().cloned().unwrap_or_default()
        } else {
            Vec::new()
        };
        records.push(record);
        self.write_file(path, &serde_json::to_string_pretty(&records).unwrap());
    }

    /// Write `content` to `path` (relative to root), creating parents.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Parse the JSON file at `path` (relative to root).
    pub fn read_json(&self, path: &str) -> Value {
        serde_json::from_str(&self.read_file(path))
            .unwrap_or_else(|e| panic!("Invalid JSON in {path}: {e}"))
    }

    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_records_accumulate() {
        let ws = TestWorkspace::new();
        ws.init_crew();
        ws.seed_tool("t1", "FileReadTool", &[("file_path", "a.txt")]);
        ws.seed_tool("t2", "PGSearchTool", &[]);
        ws.seed_agent("A_1", "Analyst", &["t1"]);

        let tools = ws.read_json(".crew/tools.json");
        assert_eq!(tools.as_array().unwrap().len(), 2);
        assert_eq!(tools[0]["parameters"]["file_path"], "a.txt");
        assert_eq!(ws.read_json(".crew/agents.json")[0]["tool_ids"][0], "t1");
        ws.assert_file_contains(".crew/config.toml", "tools_file");
        ws.assert_file_not_exists(".crew/missing.json");
    }
}
