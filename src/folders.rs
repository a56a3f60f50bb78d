//! Folder resolution: decides which folders a project gets and which
//! generated files live in each of them.

use crate::catalog::FileId;
use crate::config::{ProjectConfig, Structure};
use crate::constants::DEFAULT_FOLDERS;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use log::warn;
use std::path::{Component, Path};

/// Files generated inside a known folder.
const FOLDER_FILES: [(&str, &[FileId]); 6] = [
    ("routes", &[FileId::Router]),
    ("controllers", &[FileId::Controller]),
    ("daos", &[FileId::DataAccessObject]),
    ("models", &[FileId::Model]),
    ("middleware", &[FileId::Middleware]),
    ("configurations", &[FileId::DatabaseConfig]),
];

/// Files generated at the project root for every project.
pub const ROOT_FILES: [FileId; 5] = [
    FileId::Manifest,
    FileId::EntryPoint,
    FileId::EnvFile,
    FileId::Readme,
    FileId::IgnoreFile,
];

/// Files generated at the project root when Docker support is enabled.
pub const DOCKER_FILES: [FileId; 2] = [FileId::Dockerfile, FileId::ComposeFile];

/// Returns the files that belong in `folder`; unknown folders get none.
pub fn files_for_folder(folder: &str) -> &'static [FileId] {
    FOLDER_FILES
        .iter()
        .find(|(name, _)| *name == folder)
        .map(|(_, files)| *files)
        .unwrap_or(&[])
}

/// How repeated custom folder names are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateFolders {
    /// Keep the first occurrence and warn about the rest
    #[default]
    Collapse,
    /// Pass every name through as given
    Keep,
}

/// Ordered folder names relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSet(Vec<String>);

impl FolderSet {
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a FolderSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Resolves the folders to create for `config`.
///
/// # Errors
/// * `Error::ConfigError` if a custom structure has no usable names, or a name
///   would escape the project root
pub fn resolve_folders(config: &ProjectConfig, duplicates: DuplicateFolders) -> Result<FolderSet> {
    let names = match &config.structure {
        Structure::Default => {
            return Ok(FolderSet(DEFAULT_FOLDERS.iter().map(|name| name.to_string()).collect()))
        }
        Structure::Custom(names) => names,
    };

    if names.is_empty() {
        return Err(Error::ConfigError(
            "custom structure needs at least one folder name".to_string(),
        ));
    }

    let names = names
        .iter()
        .map(|name| normalize_folder_name(name))
        .collect::<Result<Vec<_>>>()?;

    let folders = match duplicates {
        DuplicateFolders::Keep => names,
        DuplicateFolders::Collapse => {
            let unique: IndexSet<&String> = names.iter().collect();
            if unique.len() < names.len() {
                warn!(
                    "Ignoring {} duplicate folder name(s)",
                    names.len() - unique.len()
                );
            }
            unique.into_iter().cloned().collect()
        }
    };

    Ok(FolderSet(folders))
}

/// Rejects names escaping the project root and drops `.` components and
/// trailing separators, so `./routes/` resolves to `routes`.
fn normalize_folder_name(name: &str) -> Result<String> {
    let path = Path::new(name);
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                parts.clear();
                break;
            }
        }
    }
    if parts.is_empty() || path.is_absolute() {
        return Err(Error::ConfigError(format!(
            "folder name '{name}' must be a relative path inside the project"
        )));
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_for_folder() {
        assert_eq!(files_for_folder("routes"), &[FileId::Router]);
        assert_eq!(files_for_folder("configurations"), &[FileId::DatabaseConfig]);
        assert!(files_for_folder("utils").is_empty());
    }

    #[test]
    fn test_every_default_folder_has_files() {
        for folder in DEFAULT_FOLDERS {
            assert_eq!(files_for_folder(folder).len(), 1, "{folder}");
        }
    }
}
