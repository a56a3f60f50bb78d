//! Project configuration collected from the user's answers.
//! The configuration is built once per run and read by every later stage.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Module system used by the generated source files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ModuleType {
    /// `require` / `module.exports`
    #[default]
    CommonModule,
    /// `import` / `export`
    EcmaModule,
}

impl ModuleType {
    /// Value of the manifest's `type` field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModuleType::CommonModule => "commonjs",
            ModuleType::EcmaModule => "module",
        }
    }

    pub const fn is_ecma(&self) -> bool {
        matches!(self, ModuleType::EcmaModule)
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "commonjs" | "cjs" => Ok(ModuleType::CommonModule),
            "module" | "esm" => Ok(ModuleType::EcmaModule),
            other => Err(Error::ConfigError(format!("unsupported module type '{other}'"))),
        }
    }
}

impl TryFrom<String> for ModuleType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Database the generated project talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Database {
    MongoDb,
    PostgreSql,
    MySql,
    #[default]
    None,
}

impl Database {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Database::MongoDb => "MongoDB",
            Database::PostgreSql => "PostgreSQL",
            Database::MySql => "MySQL",
            Database::None => "None",
        }
    }

    /// Extra manifest dependency required by the database driver.
    pub const fn dependency(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Database::MongoDb => Some(("mongoose", "^6.0.0")),
            Database::PostgreSql => Some(("pg", "^8.7.1")),
            Database::MySql => Some(("mysql2", "^2.3.0")),
            Database::None => None,
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Database::None)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" => Ok(Database::MongoDb),
            "postgresql" => Ok(Database::PostgreSql),
            "mysql" => Ok(Database::MySql),
            "none" => Ok(Database::None),
            _ => Err(Error::ConfigError(format!("unsupported database '{}'", s.trim()))),
        }
    }
}

impl TryFrom<String> for Database {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Folder layout of the generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Structure {
    /// The fixed set of default folders
    #[default]
    Default,
    /// User supplied folder names, replacing the default set
    Custom(Vec<String>),
}

impl Structure {
    /// Builds a custom structure from comma-separated input.
    /// Names are trimmed and empty entries dropped.
    pub fn custom_from_input(input: &str) -> Self {
        Structure::Custom(parse_folder_names(input))
    }
}

/// Splits comma-separated folder names, trimming each and dropping empty ones.
pub fn parse_folder_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Fully resolved answers for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project name, doubles as the root folder name
    pub name: String,
    pub description: String,
    pub author: String,
    pub module_type: ModuleType,
    pub database: Database,
    pub structure: Structure,
    /// Whether Dockerfile and docker-compose.yml are generated
    pub docker: bool,
}

impl ProjectConfig {
    /// Creates a configuration with the given name and default answers for
    /// everything else.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the name is empty or not a single path component
    pub fn named<S: Into<String>>(name: S) -> Result<Self> {
        let config = Self {
            name: name.into().trim().to_string(),
            description: String::new(),
            author: String::new(),
            module_type: ModuleType::default(),
            database: Database::default(),
            structure: Structure::default(),
            docker: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the rest of the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

/// Validates a project name: non-empty and usable as a single folder name.
pub fn validate_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::ConfigError("project name is required".to_string()));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::ConfigError(format!(
            "project name '{name}' must be a plain folder name"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_parsing_is_case_insensitive() {
        assert_eq!("MongoDB".parse::<Database>().unwrap(), Database::MongoDb);
        assert_eq!("postgresql".parse::<Database>().unwrap(), Database::PostgreSql);
        assert_eq!(" MySQL ".parse::<Database>().unwrap(), Database::MySql);
        assert_eq!("None".parse::<Database>().unwrap(), Database::None);
    }

    #[test]
    fn test_unknown_database_is_config_error() {
        match "Oracle".parse::<Database>() {
            Err(Error::ConfigError(msg)) => assert!(msg.contains("unsupported database")),
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_module_type_round_trips_through_display() {
        for module_type in [ModuleType::CommonModule, ModuleType::EcmaModule] {
            assert_eq!(module_type.to_string().parse::<ModuleType>().unwrap(), module_type);
        }
    }

    #[test]
    fn test_parse_folder_names() {
        assert_eq!(parse_folder_names("a, b, , c"), vec!["a", "b", "c"]);
        assert!(parse_folder_names(" , ,").is_empty());
    }

    #[test]
    fn test_named_rejects_invalid_names() {
        assert!(ProjectConfig::named("").is_err());
        assert!(ProjectConfig::named("   ").is_err());
        assert!(ProjectConfig::named("a/b").is_err());
        assert!(ProjectConfig::named("..").is_err());
        assert_eq!(ProjectConfig::named(" demo-api ").unwrap().name, "demo-api");
    }
}
