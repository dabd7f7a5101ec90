//! Test environment builder for isolated camp testing.
//!
//! Provides `TestEnv` - a workspace directory (model, template tree,
//! configurations) and an isolated home, plus helpers to run the camp CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a camp CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not a JSON line ({}): {}", e, line))
            })
            .collect()
    }
}

/// Isolated workspace with a temp home directory.
pub struct TestEnv {
    /// Workspace directory (camp.yml, template/, out/)
    pub workspace: TempDir,
    /// Temporary directory for HOME and the user config directory
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn root(&self) -> &Path {
        self.workspace.path()
    }

    /// Get path relative to the workspace
    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Artifact tree of configuration `index`
    pub fn destination(&self, index: usize) -> PathBuf {
        self.path(&format!("out/config_{}", index))
    }

    /// Write a file to the workspace
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let full_path = self.path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run camp with `-d <workspace>` appended
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run camp with `-d <workspace>` appended and extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_camp"));
        cmd.current_dir(self.workspace.path())
            .args(args)
            .arg("-d")
            .arg(self.workspace.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("CAMP_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute camp");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    model: Option<String>,
    template: Vec<(String, String)>,
    configurations: Vec<String>,
    tool_config: Option<String>,
}

impl TestEnvBuilder {
    /// Set the content of `camp.yml`
    pub fn with_model(mut self, yaml: &str) -> Self {
        self.model = Some(yaml.to_string());
        self
    }

    /// Add a file under `template/`
    pub fn with_template_file(mut self, path: &str, content: &str) -> Self {
        self.template.push((path.to_string(), content.to_string()));
        self
    }

    /// Add every file of a template fixture
    pub fn with_template(self, files: &[(&str, &str)]) -> Self {
        files
            .iter()
            .fold(self, |builder, (path, content)| builder.with_template_file(path, content))
    }

    /// Add `out/config_<n>.yml`, numbered in call order from 1
    pub fn with_configuration(mut self, yaml: &str) -> Self {
        self.configurations.push(yaml.to_string());
        self
    }

    /// Set the content of `camp.toml`
    pub fn with_tool_config(mut self, toml: &str) -> Self {
        self.tool_config = Some(toml.to_string());
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            workspace: TempDir::new().expect("Failed to create workspace temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        };

        if let Some(model) = &self.model {
            env.write_file("camp.yml", model);
        }
        for (path, content) in &self.template {
            env.write_file(&format!("template/{}", path), content);
        }
        for (offset, configuration) in self.configurations.iter().enumerate() {
            env.write_file(&format!("out/config_{}.yml", offset + 1), configuration);
        }
        if let Some(toml) = &self.tool_config {
            env.write_file("camp.toml", toml);
        }
        env
    }
}
