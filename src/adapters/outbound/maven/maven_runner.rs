use crate::ports::outbound::BuildToolRunner;
use crate::shared::error::ExplorerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Number of output lines kept in a failure report
const FAILURE_TAIL_LINES: usize = 20;

#[cfg(windows)]
const MAVEN_BINARY: &str = "mvn.cmd";
#[cfg(not(windows))]
const MAVEN_BINARY: &str = "mvn";

#[cfg(windows)]
const MAVEN_WRAPPER: &str = "mvnw.cmd";
#[cfg(not(windows))]
const MAVEN_WRAPPER: &str = "mvnw";

/// How Maven is invoked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MavenSettings {
    /// Explicit executable; takes precedence over wrapper detection
    pub executable: Option<String>,
    /// Extra arguments placed before the goal (e.g. `-s settings.xml -o`)
    pub options: Vec<String>,
    /// Use the project's `mvnw` when one exists
    pub prefer_maven_wrapper: bool,
}

impl MavenSettings {
    /// Splits an options string with POSIX shell quoting and escapes
    pub fn split_options(
        options: &str,
    ) -> std::result::Result<Vec<String>, shell_words::ParseError> {
        shell_words::split(options)
    }
}

/// MavenRunner adapter running `dependency:tree` with DOT output
///
/// The command is
/// `<mvn|mvnw> [options] -f <project>/pom.xml dependency:tree -DoutputFile=<file> -DoutputType=dot -DappendOutput=true`,
/// run with the project directory as working directory. `appendOutput`
/// makes multi-module reactors write one digraph per module into the same
/// file instead of overwriting it.
pub struct MavenRunner {
    settings: MavenSettings,
}

impl MavenRunner {
    pub fn new(settings: MavenSettings) -> Self {
        Self { settings }
    }

    /// Picks the executable for `project_path`
    pub fn resolve_executable(&self, project_path: &Path) -> PathBuf {
        if let Some(executable) = &self.settings.executable {
            return PathBuf::from(executable);
        }

        let wrapper = project_path.join(MAVEN_WRAPPER);
        if self.settings.prefer_maven_wrapper && wrapper.is_file() {
            wrapper
        } else {
            PathBuf::from(MAVEN_BINARY)
        }
    }

    /// Arguments passed to the executable, in order
    pub fn build_args(&self, project_path: &Path, output_file: &Path) -> Vec<String> {
        let mut args = self.settings.options.clone();
        args.push("-f".to_string());
        args.push(project_path.join("pom.xml").display().to_string());
        args.push("dependency:tree".to_string());
        args.push(format!("-DoutputFile={}", output_file.display()));
        args.push("-DoutputType=dot".to_string());
        args.push("-DappendOutput=true".to_string());
        args
    }

    fn command_line(executable: &Path, args: &[String]) -> String {
        std::iter::once(executable.display().to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Last lines of the build output; Maven reports most errors on stdout
    fn failure_details(stdout: &[u8], stderr: &[u8]) -> String {
        let stdout = String::from_utf8_lossy(stdout);
        let stderr = String::from_utf8_lossy(stderr);
        let lines: Vec<&str> = stdout
            .lines()
            .chain(stderr.lines())
            .filter(|line| !line.trim().is_empty())
            .collect();
        let start = lines.len().saturating_sub(FAILURE_TAIL_LINES);
        lines[start..].join("\n")
    }
}

#[async_trait]
impl BuildToolRunner for MavenRunner {
    async fn write_dependency_graph(&self, project_path: &Path, output_file: &Path) -> Result<()> {
        let pom_path = project_path.join("pom.xml");
        if !pom_path.is_file() {
            return Err(ExplorerError::PomNotFound {
                path: pom_path,
                suggestion: format!(
                    "pom.xml does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a Maven project, specify the correct path with the --path option, \
                     or pass an existing graph with --dot-file.",
                    project_path.display()
                ),
            }
            .into());
        }

        let executable = self.resolve_executable(project_path);
        let args = self.build_args(project_path, output_file);
        let command = Self::command_line(&executable, &args);

        let output = Command::new(&executable)
            .args(&args)
            .current_dir(project_path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ExplorerError::BuildToolFailed {
                command: command.clone(),
                status: "not started".to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ExplorerError::BuildToolFailed {
                command,
                status: output.status.to_string(),
                details: Self::failure_details(&output.stdout, &output.stderr),
            }
            .into());
        }

        Ok(())
    }

    fn tool_name(&self) -> String {
        "Maven".to_string()
    }
}
