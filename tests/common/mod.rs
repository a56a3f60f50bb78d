#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use create_backend_project::config::{Database, ModuleType, ProjectConfig, Structure};
use create_backend_project::error::{Error, Result};
use create_backend_project::prompt::Prompter;

/// A scripted answer to one question.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Confirm(bool),
    Select(usize),
}

/// Prompter replaying a fixed list of answers and recording every question.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::new(Vec::new()) }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::ConfigError(format!("no scripted answer for '{prompt}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text.to_string()),
            other => Err(Error::ConfigError(format!("expected text for '{prompt}', got {other:?}"))),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(Error::ConfigError(format!("expected yes/no for '{prompt}', got {other:?}"))),
        }
    }

    fn select(&self, prompt: &str, items: &[&str], _default: usize) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(index),
            other => Err(Error::ConfigError(format!("expected selection for '{prompt}', got {other:?}"))),
        }
    }
}

/// The configuration used by the end-to-end scenarios.
pub fn demo_config() -> ProjectConfig {
    ProjectConfig {
        module_type: ModuleType::CommonModule,
        database: Database::PostgreSql,
        structure: Structure::Default,
        docker: true,
        ..ProjectConfig::named("demo-api").unwrap()
    }
}
