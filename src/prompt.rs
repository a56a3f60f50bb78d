//! User interaction.
//! The question flow talks to a [`Prompter`] so it can run against a terminal
//! or against scripted answers.

use crate::error::Result;
use dialoguer::{Confirm, Input, Select};

/// Primitive questions the answer flow is built from.
pub trait Prompter {
    /// Asks for free text. An empty answer is allowed.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks the user to pick one of `items` and returns its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

/// Terminal prompter built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        let input: String =
            Input::new().with_prompt(prompt).allow_empty(true).interact_text()?;
        Ok(input)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).items(items).default(default).interact()?)
    }
}
