//! Common constants used throughout the scaffolder.

/// Folders created when the default structure is chosen, in creation order.
pub const DEFAULT_FOLDERS: [&str; 6] =
    ["routes", "controllers", "daos", "models", "middleware", "configurations"];

/// Dependencies every generated manifest carries.
pub const BASE_DEPENDENCIES: [(&str, &str); 3] =
    [("express", "^4.18.2"), ("nodemon", "^3.0.1"), ("dotenv", "^16.0.0")];

/// Version written to every generated manifest.
pub const PROJECT_VERSION: &str = "1.0.0";

/// License written to every generated manifest.
pub const PROJECT_LICENSE: &str = "ISC";

/// Default answer choices for the module type question.
pub const MODULE_TYPE_CHOICES: [&str; 2] = ["commonjs", "module"];

/// Answer choices for the folder structure question.
pub const STRUCTURE_CHOICES: [&str; 2] = ["Default structure", "Custom structure"];

/// Answer choices for the database question.
pub const DATABASE_CHOICES: [&str; 4] = ["MongoDB", "PostgreSQL", "MySQL", "None"];
