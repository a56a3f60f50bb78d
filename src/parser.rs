//! Answer collection: preloaded answers from JSON plus the interactive
//! question sequence for everything that was not preloaded.

use crate::config::{
    parse_folder_names, validate_name, Database, ModuleType, ProjectConfig, Structure,
};
use crate::constants::{DATABASE_CHOICES, MODULE_TYPE_CHOICES, STRUCTURE_CHOICES};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Folder structure answer as written in an answers document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureChoice {
    Default,
    Custom,
}

/// Folder names given either as a list or as comma-separated text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FolderList {
    List(Vec<String>),
    Text(String),
}

impl FolderList {
    fn into_names(self) -> Vec<String> {
        match self {
            FolderList::List(names) => names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
            FolderList::Text(text) => parse_folder_names(&text),
        }
    }
}

/// Answers supplied up front. Every present field skips its question.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreloadedAnswers {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub module_type: Option<ModuleType>,
    pub structure: Option<StructureChoice>,
    pub folders: Option<FolderList>,
    pub database: Option<Database>,
    pub docker: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    Stdin,
    File(PathBuf),
    None,
}

/// Parses an answers document. Blank input means no preloaded answers.
///
/// # Errors
/// * `Error::ConfigError` if the document is not valid JSON, has unknown keys,
///   or holds unsupported values
pub fn parse_answers(content: &str) -> Result<PreloadedAnswers> {
    if content.trim().is_empty() {
        return Ok(PreloadedAnswers::default());
    }
    serde_json::from_str(content)
        .map_err(|e| Error::ConfigError(format!("invalid answers document: {e}")))
}

/// Reads a whole answers document from `reader`.
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<PreloadedAnswers> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PreloadedAnswers> {
    let path = path.as_ref();
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_answers(&content)
}

impl AnswerSource {
    /// Picks the source from the CLI flags. Stdin wins when both are given.
    pub fn from_args(take_from_stdin: bool, file: Option<PathBuf>) -> Self {
        match (take_from_stdin, file) {
            (true, _) => AnswerSource::Stdin,
            (false, Some(path)) => AnswerSource::File(path),
            (false, None) => AnswerSource::None,
        }
    }

    /// Loads the answers, reading `stdin` for [`AnswerSource::Stdin`].
    pub fn load<R: Read>(self, stdin: R) -> Result<PreloadedAnswers> {
        match self {
            AnswerSource::Stdin => {
                debug!("Loading answers from stdin");
                load_from_reader(stdin)
            }
            AnswerSource::File(path) => load_from_file(path),
            AnswerSource::None => Ok(PreloadedAnswers::default()),
        }
    }
}

/// Loads preloaded answers from the process stdin or a file.
pub fn get_answers_from(take_from_stdin: bool, file: Option<PathBuf>) -> Result<PreloadedAnswers> {
    AnswerSource::from_args(take_from_stdin, file).load(std::io::stdin().lock())
}

/// Resolves the full project configuration, asking only what was not preloaded.
///
/// # Errors
/// * `Error::ConfigError` for invalid preloaded values
/// * `Error::PromptError` if the terminal interaction fails
pub fn get_answers(prompt: &dyn Prompter, preloaded: PreloadedAnswers) -> Result<ProjectConfig> {
    let name = match preloaded.name {
        Some(name) => {
            validate_name(&name)?;
            name.trim().to_string()
        }
        None => ask_name(prompt)?,
    };

    let description = match preloaded.description {
        Some(description) => description,
        None => ask_optional(prompt, "Do you want to add a description?", "Project description:")?,
    };

    let author = match preloaded.author {
        Some(author) => author,
        None => ask_optional(prompt, "Do you want to add an author name?", "Project author:")?,
    };

    let module_type = match preloaded.module_type {
        Some(module_type) => module_type,
        None => {
            let index = prompt.select("Project type:", &MODULE_TYPE_CHOICES, 0)?;
            choice(&MODULE_TYPE_CHOICES, index)?.parse()?
        }
    };

    let structure = match (preloaded.structure, preloaded.folders) {
        (Some(StructureChoice::Default), Some(_)) => {
            return Err(Error::ConfigError(
                "folders can only be given with the custom structure".to_string(),
            ))
        }
        (_, Some(folders)) => Structure::Custom(folders.into_names()),
        (Some(StructureChoice::Default), None) => Structure::Default,
        (Some(StructureChoice::Custom), None) => ask_folders(prompt)?,
        (None, None) => {
            let index = prompt.select("Choose folder structure setup:", &STRUCTURE_CHOICES, 0)?;
            match index {
                0 => Structure::Default,
                _ => ask_folders(prompt)?,
            }
        }
    };

    let database = match preloaded.database {
        Some(database) => database,
        None => {
            let index = prompt.select("Choose a database:", &DATABASE_CHOICES, 0)?;
            choice(&DATABASE_CHOICES, index)?.parse()?
        }
    };

    let docker = match preloaded.docker {
        Some(docker) => docker,
        None => prompt.confirm("Do you want to add Docker support?", false)?,
    };

    let config =
        ProjectConfig { name, description, author, module_type, database, structure, docker };
    config.validate()?;
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

fn ask_name(prompt: &dyn Prompter) -> Result<String> {
    loop {
        let name = prompt.input("Project name:")?;
        match validate_name(&name) {
            Ok(()) => return Ok(name.trim().to_string()),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn ask_optional(prompt: &dyn Prompter, confirmation: &str, question: &str) -> Result<String> {
    if prompt.confirm(confirmation, false)? {
        prompt.input(question)
    } else {
        Ok(String::new())
    }
}

fn ask_folders(prompt: &dyn Prompter) -> Result<Structure> {
    let input = prompt.input("Enter folder names separated by commas:")?;
    Ok(Structure::custom_from_input(&input))
}

fn choice<'a>(items: &[&'a str], index: usize) -> Result<&'a str> {
    items
        .get(index)
        .copied()
        .ok_or_else(|| Error::ConfigError(format!("invalid selection {index}")))
}
