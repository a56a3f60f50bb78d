//! Project materialization: turns a configuration and a folder set into
//! directories and files on disk.
//!
//! The project root must not exist beforehand. Below the root, entries that
//! already exist are skipped and left untouched. Nothing is rolled back when a
//! later entry fails.

use crate::catalog::{Catalog, FileId};
use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::filesystem::Filesystem;
use crate::folders::{files_for_folder, FolderSet, DOCKER_FILES, ROOT_FILES};
use crate::formatter::Formatter;
use log::{debug, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// Progress of a materialization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    FolderCheck,
    FoldersCreated,
    FilesWritten,
    DockerFilesWritten,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Something already exists at the target path
    AlreadyExists,
    /// The database config was not generated because no database was chosen
    NoDatabase,
}

/// Result of creating a single folder or file.
#[derive(Debug)]
pub enum Outcome {
    Created,
    Skipped(SkipReason),
    Failed(Error),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created => write!(f, "Created"),
            Outcome::Skipped(SkipReason::AlreadyExists) => write!(f, "Skipped (already exists)"),
            Outcome::Skipped(SkipReason::NoDatabase) => write!(f, "Skipped (no database selected)"),
            Outcome::Failed(err) => write!(f, "Failed ({err})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File(FileId),
}

#[derive(Debug)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: Outcome,
}

/// Everything a run did, in the order it was done.
#[derive(Debug)]
pub struct Report {
    pub root: PathBuf,
    pub stage: Stage,
    pub entries: Vec<Entry>,
}

impl Report {
    fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf(), stage: Stage::Init, entries: Vec::new() }
    }

    fn advance(&mut self, stage: Stage) {
        debug!("Materialization stage: {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    pub fn created(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Created))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Failed(_)))
    }

    /// Looks up the entry written to `path`.
    pub fn entry<P: AsRef<Path>>(&self, path: P) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.path == path.as_ref())
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|entry| predicate(&entry.outcome)).count()
    }
}

/// A generated file and the folder it goes into (`None` for the project root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub file_id: FileId,
    pub folder: Option<String>,
}

impl FileSpec {
    pub fn root(file_id: FileId) -> Self {
        Self { file_id, folder: None }
    }

    pub fn target(&self, root: &Path) -> PathBuf {
        match &self.folder {
            Some(folder) => root.join(folder).join(self.file_id.file_name()),
            None => root.join(self.file_id.file_name()),
        }
    }
}

/// File specs for every folder in `folders` that has known files.
pub fn folder_file_specs(folders: &FolderSet) -> Vec<FileSpec> {
    folders
        .iter()
        .flat_map(|folder| {
            files_for_folder(folder)
                .iter()
                .map(move |file_id| FileSpec { file_id: *file_id, folder: Some(folder.to_string()) })
        })
        .collect()
}

pub struct Materializer<'a> {
    catalog: &'a Catalog,
    formatter: &'a Formatter,
    fs: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(catalog: &'a Catalog, formatter: &'a Formatter, fs: &'a dyn Filesystem) -> Self {
        Self { catalog, formatter, fs }
    }

    /// Creates the project under `root`.
    ///
    /// # Errors
    /// * `Error::ProjectExistsError` if `root` already exists; nothing is written
    /// * `Error::IoError` if the root itself cannot be created
    ///
    /// Failures below the root are recorded in the report instead.
    pub fn materialize(
        &self,
        config: &ProjectConfig,
        folders: &FolderSet,
        root: &Path,
    ) -> Result<Report> {
        let mut report = Report::new(root);

        report.advance(Stage::FolderCheck);
        if self.fs.exists(root) {
            return Err(Error::ProjectExistsError { project_dir: root.display().to_string() });
        }
        self.fs.create_dir_all(root)?;

        for folder in folders {
            report.entries.push(self.create_folder(&root.join(folder)));
        }
        report.advance(Stage::FoldersCreated);

        let specs = folder_file_specs(folders)
            .into_iter()
            .chain(ROOT_FILES.into_iter().map(FileSpec::root));
        for spec in specs {
            report.entries.push(self.write_file(config, root, &spec));
        }
        report.advance(Stage::FilesWritten);

        if config.docker {
            for file_id in DOCKER_FILES {
                report.entries.push(self.write_file(config, root, &FileSpec::root(file_id)));
            }
            report.advance(Stage::DockerFilesWritten);
        } else {
            report.advance(Stage::Done);
        }

        Ok(report)
    }

    /// Renders and formats the content of a single file.
    pub fn content(&self, config: &ProjectConfig, file_id: FileId) -> Result<String> {
        let raw = self.catalog.render(file_id, config)?;
        Ok(self.formatter.format(&raw, file_id.syntax()))
    }

    fn create_folder(&self, path: &Path) -> Entry {
        let outcome = if self.fs.exists(path) {
            Outcome::Skipped(SkipReason::AlreadyExists)
        } else {
            match self.fs.create_dir_all(path) {
                Ok(()) => Outcome::Created,
                Err(e) => Outcome::Failed(e),
            }
        };
        log_outcome(path, &outcome);
        Entry { path: path.to_path_buf(), kind: EntryKind::Folder, outcome }
    }

    fn write_file(&self, config: &ProjectConfig, root: &Path, spec: &FileSpec) -> Entry {
        let path = spec.target(root);
        let outcome = if spec.file_id == FileId::DatabaseConfig && config.database.is_none() {
            Outcome::Skipped(SkipReason::NoDatabase)
        } else if self.fs.exists(&path) {
            Outcome::Skipped(SkipReason::AlreadyExists)
        } else {
            match self
                .content(config, spec.file_id)
                .and_then(|content| self.fs.write_new(&path, &content))
            {
                Ok(()) => Outcome::Created,
                Err(e) => Outcome::Failed(e),
            }
        };
        log_outcome(&path, &outcome);
        Entry { path, kind: EntryKind::File(spec.file_id), outcome }
    }
}

fn log_outcome(path: &Path, outcome: &Outcome) {
    match outcome {
        Outcome::Failed(_) => warn!("{}: '{}'", outcome, path.display()),
        _ => debug!("{}: '{}'", outcome, path.display()),
    }
}
