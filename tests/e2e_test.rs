/// End-to-end tests for the CLI
///
/// Maven is never required: graphs come from `--dot-file` fixtures, or from
/// a shell script standing in for `mvn` that copies a fixture to the
/// requested `-DoutputFile`.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SIMPLE_PROJECT: &str = "tests/fixtures/simple-project.dot";
const MULTI_MODULE: &str = "tests/fixtures/multi-module.dot";
const INVALID: &str = "tests/fixtures/invalid.dot";

const APP: &str = "com.example:demo-app:jar:1.0.0";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .args(["--dot-file", SIMPLE_PROJECT])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--dot-file"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .args(["-f", "markdown"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid fold order
    #[test]
    fn test_exit_code_invalid_fold() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .args(["--fold", "sideways"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent project path
    #[test]
    fn test_exit_code_application_error_nonexistent_path() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .args(["-p", "/nonexistent/path/that/does/not/exist"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Directory does not exist"));
    }

    /// Exit code 3: Application error - path is a file, not a directory
    #[test]
    fn test_exit_code_application_error_file_not_directory() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .args(["-p", "Cargo.toml"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - directory without pom.xml
    #[test]
    fn test_exit_code_application_error_missing_pom() {
        let temp_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("maven-dependency-explorer")
            .arg("-p")
            .arg(temp_dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("pom.xml not found"));
    }

    /// Exit code 3: Application error - malformed DOT file
    #[test]
    fn test_exit_code_application_error_invalid_dot() {
        cargo_bin_cmd!("maven-dependency-explorer")
            .args(["--dot-file", INVALID])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("line 3"));
    }

    /// Exit code 1: Maven exits with a failure status
    #[test]
    fn test_exit_code_build_tool_failed() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();

        cargo_bin_cmd!("maven-dependency-explorer")
            .arg("-p")
            .arg(temp_dir.path())
            .args(["--maven-executable", "definitely-not-a-maven-binary-xyz"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("dependency:tree failed"));
    }
}

#[test]
fn test_e2e_json_output() {
    let output = cargo_bin_cmd!("maven-dependency-explorer")
        .args(["--dot-file", SIMPLE_PROJECT])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let app = &value[APP];
    assert_eq!(
        app["junit:junit:jar:4.13.2:test"],
        serde_json::json!({"org.hamcrest:hamcrest-core:jar:1.3:test": {}})
    );
    assert_eq!(value.as_object().unwrap().len(), 4);
}

#[test]
fn test_e2e_tree_output_roots_only() {
    let expected = "com.example:demo-app:jar:1.0.0\n\
                    ├── org.springframework:spring-core:jar:6.1.2:compile\n\
                    │   └── org.springframework:spring-jcl:jar:6.1.2:compile\n\
                    ├── com.google.guava:guava:jar:33.0.0-jre:compile\n\
                    │   └── com.google.guava:failureaccess:jar:1.0.2:compile\n\
                    └── junit:junit:jar:4.13.2:test\n\
                    \u{20}   └── org.hamcrest:hamcrest-core:jar:1.3:test\n";

    cargo_bin_cmd!("maven-dependency-explorer")
        .args(["--dot-file", SIMPLE_PROJECT, "-f", "tree", "--roots-only"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_e2e_search_filter() {
    cargo_bin_cmd!("maven-dependency-explorer")
        .args([
            "--dot-file",
            SIMPLE_PROJECT,
            "-f",
            "tree",
            "--roots-only",
            "--search",
            "GUAVA",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("guava:jar:33.0.0-jre"))
        .stdout(predicate::str::contains("junit").not())
        .stdout(predicate::str::contains('\u{1b}').not());
}

#[test]
fn test_e2e_search_without_match() {
    cargo_bin_cmd!("maven-dependency-explorer")
        .args(["--dot-file", SIMPLE_PROJECT, "-f", "tree", "--search", "log4j"])
        .assert()
        .success()
        .stdout("(no matching dependencies)\n");
}

#[test]
fn test_e2e_depth_limit() {
    cargo_bin_cmd!("maven-dependency-explorer")
        .args([
            "--dot-file",
            MULTI_MODULE,
            "-f",
            "tree",
            "--roots-only",
            "--depth",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("jackson-databind"))
        .stdout(predicate::str::contains("jackson-core").not());
}

#[test]
fn test_e2e_fold_orders_differ() {
    let temp_dir = TempDir::new().unwrap();
    let chain = temp_dir.path().join("chain.dot");
    fs::write(&chain, "digraph chain { A -> B; B -> C; C -> D; }").unwrap();

    cargo_bin_cmd!("maven-dependency-explorer")
        .arg("--dot-file")
        .arg(&chain)
        .args(["--fold", "forward", "--roots-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"D\"").not());

    cargo_bin_cmd!("maven-dependency-explorer")
        .arg("--dot-file")
        .arg(&chain)
        .args(["--fold", "reverse", "--roots-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"D\""));
}

#[test]
fn test_e2e_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("tree.json");

    cargo_bin_cmd!("maven-dependency-explorer")
        .args(["--dot-file", SIMPLE_PROJECT, "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Output complete"));

    let content = fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value.get(APP).is_some());
}

/// Writes a stand-in for `mvn` that copies `fixture` to the `-DoutputFile`
/// it is given. It is run through `sh`, so no execute bit is needed.
#[cfg(unix)]
fn write_fake_maven(dir: &Path, fixture: &str) -> std::path::PathBuf {
    let fixture = std::env::current_dir().unwrap().join(fixture);
    let script = format!(
        "for arg in \"$@\"; do\n\
         \x20 case \"$arg\" in\n\
         \x20   -DoutputFile=*) out=\"${{arg#-DoutputFile=}}\" ;;\n\
         \x20 esac\n\
         done\n\
         cat '{}' >> \"$out\"\n",
        fixture.display()
    );
    let path = dir.join("fake-mvn.sh");
    fs::write(&path, script).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_e2e_project_with_fake_maven() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("pom.xml"), "<project/>").unwrap();
    let script = write_fake_maven(project.path(), SIMPLE_PROJECT);

    cargo_bin_cmd!("maven-dependency-explorer")
        .arg("-p")
        .arg(project.path())
        .args(["--maven-executable", "sh", "--maven-options"])
        .arg(script.display().to_string())
        .args(["-f", "tree", "--roots-only", "--depth", "0"])
        .assert()
        .success()
        .stdout(format!("{}\n", APP))
        .stderr(predicate::str::contains("Resolving dependencies"));
}

#[cfg(unix)]
#[test]
fn test_e2e_config_file_is_discovered() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("pom.xml"), "<project/>").unwrap();
    let script = write_fake_maven(project.path(), SIMPLE_PROJECT);
    fs::write(
        project.path().join("maven-dependency-explorer.config.yml"),
        format!(
            "format: tree\nunknown_option: 1\nmaven:\n  executable: sh\n  options: \"'{}'\"\n",
            script.display()
        ),
    )
    .unwrap();

    cargo_bin_cmd!("maven-dependency-explorer")
        .arg("-p")
        .arg(project.path())
        .args(["--roots-only", "--depth", "0"])
        .assert()
        .success()
        .stdout(format!("{}\n", APP))
        .stderr(predicate::str::contains("Unknown config field 'unknown_option'"));
}

#[test]
fn test_e2e_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("explorer.yml");
    fs::write(&config_path, "format: tree\nfold: linked\n").unwrap();

    cargo_bin_cmd!("maven-dependency-explorer")
        .args(["--dot-file", SIMPLE_PROJECT, "--roots-only", "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{}\n├── ", APP)));
}

#[test]
fn test_e2e_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("explorer.yml");
    fs::write(&config_path, "fold: sideways\n").unwrap();

    cargo_bin_cmd!("maven-dependency-explorer")
        .args(["--dot-file", SIMPLE_PROJECT, "-c"])
        .arg(&config_path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config: fold"));
}
