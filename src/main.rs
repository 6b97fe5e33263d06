use maven_dependency_explorer::adapters::outbound::console::StderrProgressReporter;
use maven_dependency_explorer::adapters::outbound::dot::DotParser;
use maven_dependency_explorer::adapters::outbound::filesystem::FileSystemReader;
use maven_dependency_explorer::adapters::outbound::maven::MavenRunner;
use maven_dependency_explorer::application::dto::{ExploreRequest, GraphSource};
use maven_dependency_explorer::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use maven_dependency_explorer::application::use_cases::ExploreDependenciesUseCase;
use maven_dependency_explorer::application::ExplorerSession;
use maven_dependency_explorer::cli::{Args, RunSettings};
use maven_dependency_explorer::config::{discover_config, load_config_from_path};
use maven_dependency_explorer::shared::error::{ExitCode, ExplorerError};
use maven_dependency_explorer::shared::Result;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();
    let project_path = args.project_path();

    // Load config: explicit path, or discovered in the project directory
    let config = match args.config.as_deref() {
        Some(config_path) => Some(load_config_from_path(Path::new(config_path))?),
        None if project_path.is_dir() => discover_config(&project_path)?,
        None => None,
    };
    let settings = RunSettings::resolve(args, config)?;

    if let GraphSource::Project(ref path) = settings.source {
        validate_project_path(path)?;
    }

    // Create adapters (Dependency Injection)
    let use_case = ExploreDependenciesUseCase::new(
        MavenRunner::new(settings.maven.clone()),
        FileSystemReader::new(),
        DotParser::new(),
        StderrProgressReporter::new(),
    );

    // The session owns the view's lifecycle. A one-shot run opens and disposes
    // it once; a long-running host keeps it and calls get_or_create per request.
    let mut session = ExplorerSession::new();
    let request = ExploreRequest::new(settings.source.clone(), settings.strategy);
    let view = session
        .get_or_create(|| async move { use_case.execute(request).await.map(|r| r.view) })
        .await?;
    let presented = view.presented(&settings.display);

    let color = !settings.no_color
        && settings.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && io::stdout().is_terminal();

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, color);
    let formatted_output = formatter.format(&presented)?;

    let presenter = PresenterFactory::create(match settings.output {
        Some(output_path) => PresenterType::File(output_path),
        None => PresenterType::Stdout,
    });
    presenter.present(&formatted_output)?;

    session.dispose();
    Ok(())
}

/// Checks that `path` is an existing directory and not a symbolic link
fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| ExplorerError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(invalid("Directory does not exist".to_string()).into());
        }
        Err(e) => {
            return Err(invalid(format!("Failed to read path metadata: {}", e)).into());
        }
    };

    if metadata.is_symlink() {
        return Err(invalid(
            "Project path is a symbolic link. Pass the real project directory instead.".to_string(),
        )
        .into());
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let result = validate_project_path(&PathBuf::from("/nonexistent/path/that/does/not/exist"));
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("pom.xml");
        fs::write(&file_path, "<project/>").unwrap();

        let err_string = format!("{}", validate_project_path(&file_path).unwrap_err());
        assert!(err_string.contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_project_path_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real");
        let link = temp_dir.path().join("link");
        fs::create_dir(&real).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err_string = format!("{}", validate_project_path(&link).unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }

    #[test]
    fn test_validate_project_path_current_directory() {
        let current_dir = std::env::current_dir().unwrap();
        assert!(validate_project_path(&current_dir).is_ok());
    }
}
