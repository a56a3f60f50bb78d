mod common;

use common::demo_config;
use create_backend_project::catalog::FileId;
use create_backend_project::config::{Database, ModuleType, ProjectConfig, Structure};
use create_backend_project::error::Error;
use create_backend_project::folders::{files_for_folder, resolve_folders, DuplicateFolders};

const DEFAULT: [&str; 6] = ["routes", "controllers", "daos", "models", "middleware", "configurations"];

fn custom(input: &str) -> ProjectConfig {
    ProjectConfig { structure: Structure::custom_from_input(input), ..demo_config() }
}

#[test]
fn test_default_structure_ignores_other_fields() {
    for (module_type, database, docker) in [
        (ModuleType::CommonModule, Database::None, false),
        (ModuleType::EcmaModule, Database::MongoDb, true),
        (ModuleType::EcmaModule, Database::MySql, false),
    ] {
        let config = ProjectConfig { module_type, database, docker, ..demo_config() };
        let folders = resolve_folders(&config, DuplicateFolders::default()).unwrap();
        assert_eq!(folders.names(), DEFAULT);
    }
}

#[test]
fn test_custom_structure_trims_and_drops_empty_names() {
    let folders = resolve_folders(&custom("a, b, , c"), DuplicateFolders::Collapse).unwrap();
    assert_eq!(folders.names(), ["a", "b", "c"]);
}

#[test]
fn test_custom_structure_replaces_defaults() {
    let folders = resolve_folders(&custom("routes, utils"), DuplicateFolders::Collapse).unwrap();
    assert_eq!(folders.names(), ["routes", "utils"]);
}

#[test]
fn test_custom_structure_without_names_is_config_error() {
    for input in ["", " , ,"] {
        let result = resolve_folders(&custom(input), DuplicateFolders::Collapse);
        assert!(matches!(result, Err(Error::ConfigError(_))), "{input:?}");
    }
}

#[test_log::test]
fn test_duplicates_collapse_by_default() {
    let folders = resolve_folders(&custom("a, b, a, c, b"), DuplicateFolders::default()).unwrap();
    assert_eq!(folders.names(), ["a", "b", "c"]);
}

#[test]
fn test_duplicates_pass_through_when_kept() {
    let folders = resolve_folders(&custom("a, b, a"), DuplicateFolders::Keep).unwrap();
    assert_eq!(folders.names(), ["a", "b", "a"]);
}

#[test]
fn test_names_escaping_the_project_are_rejected() {
    for input in ["../outside", "/etc", "a/../../b"] {
        let result = resolve_folders(&custom(input), DuplicateFolders::Collapse);
        assert!(matches!(result, Err(Error::ConfigError(_))), "{input:?}");
    }
}

#[test]
fn test_nested_names_are_allowed() {
    let folders = resolve_folders(&custom("api/v1, lib"), DuplicateFolders::Collapse).unwrap();
    assert_eq!(folders.names(), ["api/v1", "lib"]);
}

#[test]
fn test_names_are_normalized_before_lookup() {
    let input = "routes/, ./controllers, models/./, api//v1";
    let folders = resolve_folders(&custom(input), DuplicateFolders::Collapse).unwrap();
    assert_eq!(folders.names(), ["routes", "controllers", "models", "api/v1"]);
    assert_eq!(files_for_folder(&folders.names()[0]), &[FileId::Router]);
}

#[test]
fn test_normalized_duplicates_collapse() {
    let folders =
        resolve_folders(&custom("routes, ./routes, routes/"), DuplicateFolders::Collapse).unwrap();
    assert_eq!(folders.names(), ["routes"]);
}

#[test]
fn test_current_dir_only_names_are_rejected() {
    for input in [".", "./", "./."] {
        let result = resolve_folders(&custom(input), DuplicateFolders::Collapse);
        assert!(matches!(result, Err(Error::ConfigError(_))), "{input:?}");
    }
}
