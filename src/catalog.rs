//! Template catalog: maps every generated file to the generator producing it.
//!
//! Source files come in two variants selected by
//! [`ModuleType`](crate::config::ModuleType). The variants
//! share every line except their import and export statements.

use crate::config::{Database, ProjectConfig};
use crate::constants::{BASE_DEPENDENCIES, PROJECT_LICENSE, PROJECT_VERSION};
use crate::error::{Error, Result};
use crate::formatter::Syntax;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

const ENTRY_POINT: &str = include_str!("templates/index.js.j2");
const ROUTER: &str = include_str!("templates/router.js.j2");
const CONTROLLER: &str = include_str!("templates/controller.js.j2");
const DAO: &str = include_str!("templates/dao.js.j2");
const MIDDLEWARE: &str = include_str!("templates/middleware.js.j2");
const MODEL_MONGODB: &str = include_str!("templates/model/mongodb.js.j2");
const MODEL_RELATIONAL: &str = include_str!("templates/model/relational.js.j2");
const MODEL_NONE: &str = include_str!("templates/model/none.js.j2");
const DB_CONFIG_MONGODB: &str = include_str!("templates/db_config/mongodb.js.j2");
const DB_CONFIG_POSTGRESQL: &str = include_str!("templates/db_config/postgresql.js.j2");
const DB_CONFIG_MYSQL: &str = include_str!("templates/db_config/mysql.js.j2");
const ENV_FILE: &str = include_str!("templates/env.j2");
const README: &str = include_str!("templates/README.md.j2");
const IGNORE_FILE: &str = include_str!("templates/gitignore.j2");
const DOCKERFILE: &str = include_str!("templates/Dockerfile.j2");
const COMPOSE_FILE: &str = include_str!("templates/docker-compose.yml.j2");

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Logical identifier of a generated file, independent of where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileId {
    Manifest,
    EntryPoint,
    Router,
    Controller,
    DataAccessObject,
    Model,
    Middleware,
    EnvFile,
    DatabaseConfig,
    Readme,
    IgnoreFile,
    Dockerfile,
    ComposeFile,
}

impl FileId {
    pub const ALL: [FileId; 13] = [
        FileId::Manifest,
        FileId::EntryPoint,
        FileId::Router,
        FileId::Controller,
        FileId::DataAccessObject,
        FileId::Model,
        FileId::Middleware,
        FileId::EnvFile,
        FileId::DatabaseConfig,
        FileId::Readme,
        FileId::IgnoreFile,
        FileId::Dockerfile,
        FileId::ComposeFile,
    ];

    /// Name of the file on disk.
    pub const fn file_name(&self) -> &'static str {
        match self {
            FileId::Manifest => "package.json",
            FileId::EntryPoint => "index.js",
            FileId::Router => "router.js",
            FileId::Controller => "controller.js",
            FileId::DataAccessObject => "dao.js",
            FileId::Model => "model.js",
            FileId::Middleware => "middleware.js",
            FileId::EnvFile => ".env",
            FileId::DatabaseConfig => "dbConfig.js",
            FileId::Readme => "README.md",
            FileId::IgnoreFile => ".gitignore",
            FileId::Dockerfile => "Dockerfile",
            FileId::ComposeFile => "docker-compose.yml",
        }
    }

    /// Syntax family used to pick the formatting rules.
    pub const fn syntax(&self) -> Syntax {
        match self {
            FileId::Manifest => Syntax::Json,
            FileId::EntryPoint
            | FileId::Router
            | FileId::Controller
            | FileId::DataAccessObject
            | FileId::Model
            | FileId::Middleware
            | FileId::DatabaseConfig => Syntax::Script,
            FileId::EnvFile
            | FileId::Readme
            | FileId::IgnoreFile
            | FileId::Dockerfile
            | FileId::ComposeFile => Syntax::Plain,
        }
    }

    /// Looks up a file identifier by its on-disk name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.file_name() == name)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Shape of the generated `package.json`. Field order is the output order.
#[derive(Debug, Serialize)]
struct PackageManifest<'a> {
    name: String,
    version: &'a str,
    description: &'a str,
    main: &'a str,
    scripts: IndexMap<&'a str, &'a str>,
    keywords: Vec<&'a str>,
    author: &'a str,
    license: &'a str,
    #[serde(rename = "type")]
    module_type: &'a str,
    dependencies: IndexMap<&'a str, &'a str>,
}

impl<'a> PackageManifest<'a> {
    fn new(config: &'a ProjectConfig) -> Self {
        let mut dependencies: IndexMap<&str, &str> = BASE_DEPENDENCIES.into_iter().collect();
        if let Some((package, version)) = config.database.dependency() {
            dependencies.insert(package, version);
        }

        Self {
            name: package_name(&config.name),
            version: PROJECT_VERSION,
            description: &config.description,
            main: FileId::EntryPoint.file_name(),
            scripts: IndexMap::from([
                ("test", "echo \"Error: no test specified\" && exit 1"),
                ("dev", "nodemon index.js"),
            ]),
            keywords: Vec::new(),
            author: &config.author,
            license: PROJECT_LICENSE,
            module_type: config.module_type.as_str(),
            dependencies,
        }
    }
}

/// Renders generated files from the project configuration.
pub struct Catalog {
    renderer: Box<dyn TemplateRenderer>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_renderer(Box::new(MiniJinjaRenderer::new()))
    }

    pub fn with_renderer(renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Renders the raw, unformatted content of a file.
    ///
    /// # Errors
    /// * `Error::ConfigError` when the database config is requested without a database
    /// * `Error::MinijinjaError` / `Error::JsonError` if generation itself fails
    pub fn render(&self, file_id: FileId, config: &ProjectConfig) -> Result<String> {
        let source = match file_id {
            FileId::Manifest => {
                return Ok(serde_json::to_string_pretty(&PackageManifest::new(config))?)
            }
            FileId::EntryPoint => ENTRY_POINT,
            FileId::Router => ROUTER,
            FileId::Controller => CONTROLLER,
            FileId::DataAccessObject => DAO,
            FileId::Middleware => MIDDLEWARE,
            FileId::Model => match config.database {
                Database::MongoDb => MODEL_MONGODB,
                Database::PostgreSql | Database::MySql => MODEL_RELATIONAL,
                Database::None => MODEL_NONE,
            },
            FileId::DatabaseConfig => match config.database {
                Database::MongoDb => DB_CONFIG_MONGODB,
                Database::PostgreSql => DB_CONFIG_POSTGRESQL,
                Database::MySql => DB_CONFIG_MYSQL,
                Database::None => {
                    return Err(Error::ConfigError(format!(
                        "unsupported database '{}' for {}",
                        config.database, file_id
                    )))
                }
            },
            FileId::EnvFile => ENV_FILE,
            FileId::Readme => README,
            FileId::IgnoreFile => IGNORE_FILE,
            FileId::Dockerfile => DOCKERFILE,
            FileId::ComposeFile => COMPOSE_FILE,
        };

        debug!("Rendering {file_id} ({} variant)", config.module_type);
        self.renderer.render(source, &template_context(config))
    }

    /// Renders a file looked up by its on-disk name.
    /// Unknown names render to empty text.
    pub fn render_named(&self, file_name: &str, config: &ProjectConfig) -> Result<String> {
        match FileId::from_file_name(file_name) {
            Some(file_id) => self.render(file_id, config),
            None => {
                debug!("No generator for '{file_name}', rendering empty content");
                Ok(String::new())
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

/// npm package name for a project: lowercased, whitespace runs replaced by `-`.
/// Every other character is kept as typed.
pub fn package_name(project_name: &str) -> String {
    WHITESPACE.replace_all(project_name.trim(), "-").to_lowercase()
}

fn template_context(config: &ProjectConfig) -> serde_json::Value {
    let (driver, placeholder) = match config.database {
        Database::PostgreSql => ("PostgreSQL", "$1"),
        Database::MySql => ("MySQL", "?"),
        Database::MongoDb | Database::None => ("", ""),
    };

    serde_json::json!({
        "name": config.name,
        "esm": config.module_type.is_ecma(),
        "driver": driver,
        "placeholder": placeholder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_unique() {
        for file_id in FileId::ALL {
            assert_eq!(FileId::from_file_name(file_id.file_name()), Some(file_id));
        }
    }

    #[test]
    fn test_relational_model_uses_driver_placeholder() {
        let catalog = Catalog::new();
        let mut config = ProjectConfig::named("demo").unwrap();

        config.database = Database::PostgreSql;
        let pg = catalog.render(FileId::Model, &config).unwrap();
        assert!(pg.contains("VALUES ($1)"));
        assert!(pg.contains("PostgreSQL table"));

        config.database = Database::MySql;
        let mysql = catalog.render(FileId::Model, &config).unwrap();
        assert!(mysql.contains("VALUES (?)"));
        assert!(mysql.contains("MySQL table"));
    }
}
