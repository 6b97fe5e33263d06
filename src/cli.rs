use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::adapters::outbound::maven::MavenSettings;
use crate::application::dto::{DisplayOptions, GraphSource, OutputFormat};
use crate::config::ConfigFile;
use crate::dependency_graph::services::FoldStrategy;
use crate::shared::error::ExplorerError;
use crate::shared::Result;

/// Explore the resolved dependency tree of a Maven project
#[derive(Parser, Debug)]
#[command(name = "maven-dependency-explorer")]
#[command(version)]
#[command(
    about = "Explore the resolved dependency tree of a Maven project",
    long_about = None
)]
pub struct Args {
    /// Output format: json or tree [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Read an existing DOT dependency graph instead of running Maven
    #[arg(long, value_name = "FILE")]
    pub dot_file: Option<String>,

    /// Extra Maven arguments, e.g. "-o -s settings.xml"
    #[arg(long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub maven_options: Option<String>,

    /// Maven executable to run instead of `mvn`
    #[arg(long, value_name = "BIN")]
    pub maven_executable: Option<String>,

    /// Use the project's Maven wrapper (mvnw) when present
    #[arg(long)]
    pub prefer_maven_wrapper: bool,

    /// Fold order: reverse, forward or linked [default: reverse]
    #[arg(long, value_name = "ORDER")]
    pub fold: Option<FoldStrategy>,

    /// Show only branches containing a dependency matching TEXT
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Maximum number of levels shown below each module
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Show only modules no other module depends on
    #[arg(long)]
    pub roots_only: bool,

    /// Disable colored highlighting in the text tree
    #[arg(long)]
    pub no_color: bool,

    /// Path to a config file (defaults to maven-dependency-explorer.config.yml in the project)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Project directory, `.` when not given
    pub fn project_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or("."))
    }
}

/// Everything a run needs, after merging the config file under the CLI
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub source: GraphSource,
    pub format: OutputFormat,
    pub strategy: FoldStrategy,
    pub maven: MavenSettings,
    pub display: DisplayOptions,
    pub output: Option<PathBuf>,
    pub no_color: bool,
}

impl RunSettings {
    /// Merges `args` with `config`; a value given on the command line wins
    pub fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let maven_config = config.maven.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(format).map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let strategy = match (args.fold, config.fold.as_deref()) {
            (Some(strategy), _) => strategy,
            (None, Some(fold)) => FoldStrategy::from_str(fold).map_err(anyhow::Error::msg)?,
            (None, None) => FoldStrategy::default(),
        };

        let project_path = args.project_path();
        let source = match args.dot_file {
            Some(dot_file) => GraphSource::DotFile(PathBuf::from(dot_file)),
            None => GraphSource::Project(project_path),
        };

        let options = match args.maven_options.or(maven_config.options) {
            Some(options) => MavenSettings::split_options(&options).map_err(|e| {
                ExplorerError::Validation {
                    message: format!("Invalid Maven options '{}': {}", options, e),
                }
            })?,
            None => Vec::new(),
        };

        let maven = MavenSettings {
            executable: args.maven_executable.or(maven_config.executable),
            options,
            prefer_maven_wrapper: args.prefer_maven_wrapper
                || maven_config.prefer_maven_wrapper.unwrap_or(false),
        };

        Ok(Self {
            source,
            format,
            strategy,
            maven,
            display: DisplayOptions {
                search: args.search,
                max_depth: args.depth,
                roots_only: args.roots_only,
            },
            output: args.output.map(PathBuf::from),
            no_color: args.no_color,
        })
    }
}
