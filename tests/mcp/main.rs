use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary Nette-like project with an app/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("app"))?;
        // Keep config lookup inside the fixture
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with files at the given relative paths
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_files(&[
    ///     ("app/lang/admin.cs.neon", "title: Titulek\n"),
    ///     ("app/templates/default.latte", "{_admin.title}\n"),
    /// ])?;
    /// ```
    pub fn with_files(files: &[(&str, &str)]) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in files {
            fixture.write_file(path, content)?;
        }
        Ok(fixture)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    pub fn read_file(&self, relative_path: &str) -> Result<String> {
        let path = self.project_root.join(relative_path);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write a .neonkeyrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let json_str = serde_json::to_string_pretty(content)?;
        self.write_file(".neonkeyrc.json", &format!("{}\n", json_str))
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Admin domain in two locales plus a template using it
pub fn fixture_admin() -> Result<McpTestFixture> {
    McpTestFixture::with_files(&[
        (
            "app/lang/admin.cs.neon",
            "dashboard:\n    title: \"Nástěnka\"\n    subtitle: Přehled\n",
        ),
        ("app/lang/admin.en.neon", "dashboard:\n    title: Dashboard\n"),
        (
            "app/templates/Dashboard/default.latte",
            "{translator admin.dashboard}\n<h1>{_title}</h1>\n<p>{_subtitle} {_heading|upper}</p>\n{/translator}\n{_front.home}\n",
        ),
    ])
}

// ============================================================================
// Helpers
// ============================================================================

/// Extract JSON from a successful tool result
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
